//! Noyau : moteur de notation
//!
//! Organisation interne :
//! - erreur.rs     : erreurs du moteur (validation + évaluation)
//! - operateurs.rs : table fixe + - * / (précédence, associativité)
//! - validation.rs : contrôles avant conversion
//! - jetons.rs     : tokenisation (infixe) + lecture de suites postfixe/préfixe
//! - rpn.rs        : shunting-yard, infixe -> postfixe + démarche
//! - prefixe.rs    : infixe -> préfixe (technique du miroir)
//! - nombre.rs     : domaines numériques (f64, rationnels exacts)
//! - eval.rs       : évaluation postfixe / préfixe
//! - format.rs     : affichage des résultats

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod nombre;
pub mod operateurs;
pub mod prefixe;
pub mod rpn;
pub mod validation;

#[cfg(test)]
mod tests_proprietes;

#[cfg(test)]
mod tests_fuzz;

// API publique
pub use erreur::{ErreurMoteur, Genre, Resultat};
pub use eval::{eval_postfix, eval_postfix_exact, eval_prefix, eval_prefix_exact};
pub use jetons::{tokenize, Jeton};
pub use prefixe::to_prefix;
pub use rpn::{to_postfix, Conversion};
pub use validation::validate;
