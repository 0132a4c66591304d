// src/noyau/format.rs

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed};

/// Précision par défaut de la lecture décimale (chiffres après la virgule).
pub const CHIFFRES_DEFAUT: usize = 20;

/// Garde-fou : on borne la précision (anti-gel).
pub const CHIFFRES_MAX: usize = 200;

/* ------------------------ Flottants ------------------------ */

/// 20.0 -> "20", 2.5 -> "2.5", -0.0 -> "0".
pub fn format_nombre(x: f64) -> String {
    if x == 0.0 {
        return "0".to_string();
    }
    format!("{x}")
}

/* ------------------------ Rationnels ------------------------ */

/// p/q, ou p seul si q = 1.
pub fn format_rat(r: &BigRational) -> String {
    let n = r.numer();
    let d = r.denom();
    if d.is_one() {
        format!("{n}")
    } else {
        format!("{n}/{d}")
    }
}

fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// Convertit un entier “scalé” (×10^chiffres, positif) en texte décimal tronqué.
fn scaled_to_decimal(scaled: BigInt, chiffres: usize, neg: bool) -> String {
    let scale = pow10(chiffres);
    let int_part = &scaled / &scale;
    let frac_part = &scaled % &scale;
    let signe = if neg { "-" } else { "" };

    if chiffres == 0 {
        return format!("{signe}{int_part}");
    }

    let mut frac = frac_part.to_str_radix(10);
    while frac.len() < chiffres {
        frac.insert(0, '0');
    }

    format!("{signe}{int_part}.{frac}")
}

/// Lecture décimale tronquée d'un rationnel (chiffres bornés à CHIFFRES_MAX).
///
///   1/3, 5 -> "0.33333"
///   -7/2, 2 -> "-3.50"
pub fn lecture_decimale(r: &BigRational, chiffres: usize) -> String {
    let chiffres = chiffres.min(CHIFFRES_MAX);
    // troncature vers zéro : le signe est porté à part
    let scaled = (r.numer().abs() * pow10(chiffres)) / r.denom();
    scaled_to_decimal(scaled, chiffres, r.is_negative())
}
