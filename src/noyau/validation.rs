//! Validation d'une expression infixe, avant toute conversion.
//!
//! Ordre des contrôles (le premier qui échoue gagne) :
//! 1. jeu de caractères
//! 2. équilibre des parenthèses
//! 3. opérateurs consécutifs
//! 4. bornes (`+ * /` en tête ou en queue)
//! 5. parenthèses vides
//!
//! Particularités conservées telles quelles :
//! - un `-` en tête est accepté (`-5+3`), mais `3*-2` tombe sur la règle 3 ;
//! - un `-` seul en queue (`2-`) n'est rejeté par aucune règle.

use log::debug;

use super::erreur::{Bord, ErreurMoteur, Resultat};
use super::operateurs::est_symbole_operateur;

/// Retire tous les blancs.
pub fn nettoyer(expr: &str) -> String {
    expr.chars().filter(|c| !c.is_whitespace()).collect()
}

pub fn est_caractere_autorise(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '*' | '/' | '(' | ')' | '.')
}

/// Valide une expression infixe (les blancs sont ignorés).
pub fn validate(expr: &str) -> Resultat<()> {
    let s = nettoyer(expr);
    let res = valider_nettoyee(&s);
    if let Err(e) = &res {
        debug!("expression rejetée {s:?} : {e}");
    }
    res
}

pub(crate) fn valider_nettoyee(s: &str) -> Resultat<()> {
    if s.is_empty() {
        return Err(ErreurMoteur::ExpressionVide);
    }

    let chars: Vec<char> = s.chars().collect();

    // 1) Caractères
    if let Some((position, &caractere)) = chars
        .iter()
        .enumerate()
        .find(|(_, c)| !est_caractere_autorise(**c))
    {
        return Err(ErreurMoteur::InvalidCharacter {
            caractere,
            position,
        });
    }

    // 2) Parenthèses
    let mut balance: usize = 0;
    for (position, c) in chars.iter().enumerate() {
        match c {
            '(' => balance += 1,
            ')' => {
                if balance == 0 {
                    return Err(ErreurMoteur::UnmatchedClosingParen { position });
                }
                balance -= 1;
            }
            _ => {}
        }
    }
    if balance != 0 {
        return Err(ErreurMoteur::UnmatchedOpeningParen { ouvertes: balance });
    }

    // 3) Opérateurs consécutifs
    if let Some(position) = chars
        .windows(2)
        .position(|w| est_symbole_operateur(w[0]) && est_symbole_operateur(w[1]))
    {
        return Err(ErreurMoteur::ConsecutiveOperators {
            premier: chars[position],
            second: chars[position + 1],
            position,
        });
    }

    // 4) Bornes
    let interdit_au_bord = |c: char| matches!(c, '+' | '*' | '/');
    if let Some(&c) = chars.first().filter(|c| interdit_au_bord(**c)) {
        return Err(ErreurMoteur::InvalidBoundary {
            operateur: c,
            bord: Bord::Debut,
        });
    }
    if let Some(&c) = chars.last().filter(|c| interdit_au_bord(**c)) {
        return Err(ErreurMoteur::InvalidBoundary {
            operateur: c,
            bord: Bord::Fin,
        });
    }

    // 5) Parenthèses vides
    if let Some(position) = s.find("()") {
        return Err(ErreurMoteur::EmptyParens { position });
    }

    Ok(())
}
