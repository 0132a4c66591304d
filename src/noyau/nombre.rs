// src/noyau/nombre.rs
//
// Domaine numérique des évaluateurs.
// - f64         : lecture flottante (usage courant)
// - BigRational : exact (2.5 = 5/2, 1/3 reste 1/3)

use std::ops::{Add, Div, Mul, Sub};

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;

pub trait Nombre:
    Clone
    + Zero
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    /// None si le mot n'est pas un littéral numérique (variable, "1e5", "inf"...).
    fn depuis_litteral(mot: &str) -> Option<Self>;
}

/// Littéral numérique : chiffres ASCII, au plus un '.', au moins un chiffre.
pub fn est_litteral_numerique(mot: &str) -> bool {
    mot.chars().all(|c| c.is_ascii_digit() || c == '.')
        && mot.chars().filter(|c| *c == '.').count() <= 1
        && mot.chars().any(|c| c.is_ascii_digit())
}

/// Au-delà de f64::MAX le littéral devient `inf` (voir `--exact`).
impl Nombre for f64 {
    fn depuis_litteral(mot: &str) -> Option<Self> {
        if !est_litteral_numerique(mot) {
            return None;
        }
        mot.parse::<f64>().ok()
    }
}

impl Nombre for BigRational {
    fn depuis_litteral(mot: &str) -> Option<Self> {
        if !est_litteral_numerique(mot) {
            return None;
        }

        // "12.34" -> 1234 / 10^2
        let (entier, decimales) = mot.split_once('.').unwrap_or((mot, ""));
        let chiffres = format!("{entier}{decimales}");
        let n = BigInt::parse_bytes(chiffres.as_bytes(), 10)?;
        let d = BigInt::from(10).pow(decimales.len() as u32);
        Some(BigRational::new(n, d))
    }
}
