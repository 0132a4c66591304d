// src/noyau/jetons.rs

use std::fmt;

use super::erreur::{ErreurMoteur, Resultat};
use super::operateurs::Operateur;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Jeton {
    // Nombre ou nom de variable : le lexique ne les distingue pas,
    // c'est l'évaluation qui refusera ce qui n'est pas numérique.
    Operande(String),
    Operateur(Operateur),

    ParOuvrante,
    ParFermante,
}

fn est_caractere_operande(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '.'
}

/// Tokenize une expression infixe.
/// Supporte:
/// - opérandes : plus longue suite de lettres / chiffres / '.' (ex: 12, x1, 2.5)
/// - opérateurs + - * /
/// - parenthèses ( )
/// Les blancs sont ignorés.
pub fn tokenize(s: &str) -> Resultat<Vec<Jeton>> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        match c {
            '(' => {
                out.push(Jeton::ParOuvrante);
                i += 1;
                continue;
            }
            ')' => {
                out.push(Jeton::ParFermante);
                i += 1;
                continue;
            }
            _ => {}
        }

        if let Some(op) = Operateur::depuis_symbole(c) {
            out.push(Jeton::Operateur(op));
            i += 1;
            continue;
        }

        if est_caractere_operande(c) {
            let start = i;
            while i < chars.len() && est_caractere_operande(chars[i]) {
                i += 1;
            }
            out.push(Jeton::Operande(chars[start..i].iter().collect()));
            continue;
        }

        return Err(ErreurMoteur::InvalidCharacter {
            caractere: c,
            position: i,
        });
    }

    Ok(out)
}

/// Lit une suite postfixe / préfixe séparée par des blancs.
/// Un parenthésage n'a pas de sens dans ces notations : rejeté.
pub fn lire_sequence(s: &str) -> Resultat<Vec<Jeton>> {
    s.split_whitespace()
        .map(|mot| {
            let mut it = mot.chars();
            match (it.next(), it.next()) {
                (Some(c), None) => {
                    if let Some(op) = Operateur::depuis_symbole(c) {
                        return Ok(Jeton::Operateur(op));
                    }
                    if c == '(' || c == ')' {
                        return Err(ErreurMoteur::MalformedExpression(format!(
                            "parenthèse '{c}' dans une notation sans parenthèses"
                        )));
                    }
                    Ok(Jeton::Operande(mot.to_string()))
                }
                _ => Ok(Jeton::Operande(mot.to_string())),
            }
        })
        .collect()
}

impl fmt::Display for Jeton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Jeton::Operande(s) => write!(f, "{s}"),
            Jeton::Operateur(op) => write!(f, "{op}"),
            Jeton::ParOuvrante => write!(f, "("),
            Jeton::ParFermante => write!(f, ")"),
        }
    }
}

/// Format utilitaire (sorties + étapes) : jetons séparés par une espace.
pub fn format_jetons(jetons: &[Jeton]) -> String {
    jetons
        .iter()
        .map(|j| j.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
