//! Moteur de notation : infixe -> postfixe / préfixe, et évaluation des deux notations.
//!
//! - `noyau` : moteur pur (validation, jetons, shunting-yard, évaluateurs)
//! - `app`   : coquille ligne de commande (clap), qui ne fait qu'appeler le noyau

pub mod app;
pub mod noyau;

pub use noyau::{
    eval_postfix, eval_postfix_exact, eval_prefix, eval_prefix_exact, to_postfix, to_prefix,
    tokenize, validate, Conversion, ErreurMoteur, Genre, Jeton, Resultat,
};
