//! Noyau — évaluation des notations postfixe et préfixe
//!
//! Même discipline de pile dans les deux sens :
//! - postfixe : lecture de gauche à droite, on dépile (droite, gauche)
//! - préfixe  : lecture de droite à gauche, on dépile (gauche, droite)
//!
//! Un mot non numérique (variable) ne s'évalue jamais : erreur explicite.

use log::{debug, trace};
use num_rational::BigRational;

use super::erreur::{ErreurMoteur, Resultat};
use super::jetons::{lire_sequence, Jeton};
use super::nombre::Nombre;
use super::operateurs::Operateur;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Notation {
    Postfixe,
    Prefixe,
}

fn appliquer<N: Nombre>(op: Operateur, gauche: N, droite: N) -> Resultat<N> {
    match op {
        Operateur::Plus => Ok(gauche + droite),
        Operateur::Moins => Ok(gauche - droite),
        Operateur::Fois => Ok(gauche * droite),
        Operateur::Divise => {
            if droite.is_zero() {
                return Err(ErreurMoteur::DivisionByZero);
            }
            Ok(gauche / droite)
        }
    }
}

/// Un mot avec une lettre est une variable ; le reste ("-3", ".", "1.2.3") est mal formé.
fn operande_illisible(mot: String) -> ErreurMoteur {
    if mot.chars().any(|c| c.is_ascii_alphabetic()) {
        ErreurMoteur::UnboundVariable(mot)
    } else {
        ErreurMoteur::MalformedExpression(format!("opérande non numérique {mot:?}"))
    }
}

fn evaluer<N: Nombre>(suite: &str, notation: Notation) -> Resultat<N> {
    let mut jetons = lire_sequence(suite)?;
    if notation == Notation::Prefixe {
        jetons.reverse();
    }

    let mut pile: Vec<N> = Vec::with_capacity(jetons.len());

    for jeton in jetons {
        match jeton {
            Jeton::Operande(mot) => match N::depuis_litteral(&mot) {
                Some(v) => pile.push(v),
                None => return Err(operande_illisible(mot)),
            },

            Jeton::Operateur(op) => {
                let (premier, second) = match (pile.pop(), pile.pop()) {
                    (Some(a), Some(b)) => (a, b),
                    _ => return Err(ErreurMoteur::InsufficientOperands(op.symbole())),
                };

                let (gauche, droite) = match notation {
                    Notation::Postfixe => (second, premier),
                    Notation::Prefixe => (premier, second),
                };

                trace!("application de {op} ({} valeurs restantes)", pile.len());
                pile.push(appliquer(op, gauche, droite)?);
            }

            // lire_sequence ne produit jamais de parenthèse
            Jeton::ParOuvrante | Jeton::ParFermante => {
                return Err(ErreurMoteur::MalformedExpression(
                    "parenthèse inattendue".into(),
                ))
            }
        }
    }

    match pile.len() {
        1 => pile
            .pop()
            .ok_or_else(|| ErreurMoteur::MalformedExpression("pile vide".into())),
        0 => Err(ErreurMoteur::MalformedExpression("aucune valeur".into())),
        n => Err(ErreurMoteur::MalformedExpression(format!(
            "{n} valeurs restent sur la pile (opérateurs manquants)"
        ))),
    }
}

/// Évalue une suite postfixe dans le domaine `N`.
pub fn evaluer_postfixe<N: Nombre>(suite: &str) -> Resultat<N> {
    let res = evaluer(suite, Notation::Postfixe);
    if let Err(e) = &res {
        debug!("évaluation postfixe {suite:?} : {e}");
    }
    res
}

/// Évalue une suite préfixe dans le domaine `N`.
pub fn evaluer_prefixe<N: Nombre>(suite: &str) -> Resultat<N> {
    let res = evaluer(suite, Notation::Prefixe);
    if let Err(e) = &res {
        debug!("évaluation préfixe {suite:?} : {e}");
    }
    res
}

/// API publique : "2 3 + 4 *" -> 20
pub fn eval_postfix(suite: &str) -> Resultat<f64> {
    evaluer_postfixe::<f64>(suite)
}

/// API publique : "* + 2 3 4" -> 20
pub fn eval_prefix(suite: &str) -> Resultat<f64> {
    evaluer_prefixe::<f64>(suite)
}

/// Variante exacte (rationnels) de eval_postfix.
pub fn eval_postfix_exact(suite: &str) -> Resultat<BigRational> {
    evaluer_postfixe::<BigRational>(suite)
}

/// Variante exacte (rationnels) de eval_prefix.
pub fn eval_prefix_exact(suite: &str) -> Resultat<BigRational> {
    evaluer_prefixe::<BigRational>(suite)
}
