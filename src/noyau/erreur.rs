// src/noyau/erreur.rs
//
// Erreurs du moteur.
// - Validation : levées avant toute conversion
// - Évaluation : levées pendant le parcours d'une suite postfixe / préfixe
//
// Aucune erreur n'est rattrapée dans le noyau : l'appel s'arrête, pas de sortie partielle.

use std::fmt;

use thiserror::Error;

pub type Resultat<T> = Result<T, ErreurMoteur>;

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ErreurMoteur {
    #[error("Entrée vide")]
    ExpressionVide,

    #[error("caractère invalide '{caractere}' en position {position}")]
    InvalidCharacter { caractere: char, position: usize },

    #[error("parenthèse ouvrante non fermée ({ouvertes} en trop)")]
    UnmatchedOpeningParen { ouvertes: usize },

    #[error("parenthèse fermante sans ouvrante en position {position}")]
    UnmatchedClosingParen { position: usize },

    #[error("opérateurs consécutifs '{premier}{second}' en position {position}")]
    ConsecutiveOperators {
        premier: char,
        second: char,
        position: usize,
    },

    #[error("l'expression ne peut pas {bord} par '{operateur}'")]
    InvalidBoundary { operateur: char, bord: Bord },

    #[error("parenthèses vides '()' en position {position}")]
    EmptyParens { position: usize },

    #[error("parenthèses non appariées pendant la conversion")]
    UnmatchedParen,

    #[error("variable non liée '{0}' : impossible d'évaluer")]
    UnboundVariable(String),

    #[error("opérandes insuffisants pour '{0}'")]
    InsufficientOperands(char),

    #[error("expression mal formée : {0}")]
    MalformedExpression(String),

    #[error("division par zéro")]
    DivisionByZero,
}

/// Extrémité fautive de l'expression.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bord {
    Debut,
    Fin,
}

impl fmt::Display for Bord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bord::Debut => write!(f, "commencer"),
            Bord::Fin => write!(f, "finir"),
        }
    }
}

/// Genre d'erreur, sans contexte (pour brancher sur le type seulement).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Genre {
    ExpressionVide,
    InvalidCharacter,
    UnmatchedOpeningParen,
    UnmatchedClosingParen,
    ConsecutiveOperators,
    InvalidBoundary,
    EmptyParens,
    UnmatchedParen,
    UnboundVariable,
    InsufficientOperands,
    MalformedExpression,
    DivisionByZero,
}

impl ErreurMoteur {
    pub fn genre(&self) -> Genre {
        use ErreurMoteur::*;

        match self {
            ExpressionVide => Genre::ExpressionVide,
            InvalidCharacter { .. } => Genre::InvalidCharacter,
            UnmatchedOpeningParen { .. } => Genre::UnmatchedOpeningParen,
            UnmatchedClosingParen { .. } => Genre::UnmatchedClosingParen,
            ConsecutiveOperators { .. } => Genre::ConsecutiveOperators,
            InvalidBoundary { .. } => Genre::InvalidBoundary,
            EmptyParens { .. } => Genre::EmptyParens,
            UnmatchedParen => Genre::UnmatchedParen,
            UnboundVariable(_) => Genre::UnboundVariable,
            InsufficientOperands(_) => Genre::InsufficientOperands,
            MalformedExpression(_) => Genre::MalformedExpression,
            DivisionByZero => Genre::DivisionByZero,
        }
    }

    /// Vrai si l'erreur vient du validateur (avant toute conversion).
    pub fn est_validation(&self) -> bool {
        matches!(
            self.genre(),
            Genre::ExpressionVide
                | Genre::InvalidCharacter
                | Genre::UnmatchedOpeningParen
                | Genre::UnmatchedClosingParen
                | Genre::ConsecutiveOperators
                | Genre::InvalidBoundary
                | Genre::EmptyParens
        )
    }
}
