// src/noyau/rpn.rs
//
// Shunting-yard : infixe -> postfixe (notation polonaise inversée)
//
// Règles:
// - Opérande        : sortie directe
// - '('             : empilée
// - ')'             : dépile vers la sortie jusqu'à '(' (retirée)
// - Opérateur op    : dépile tant que le sommet n'est pas '(' et que
//                     prec(sommet) > prec(op), ou égalité avec op associatif à gauche
// - Fin de lecture  : tout ce qui reste part en sortie
//
// Le même algorithme sert au préfixe (prefixe.rs) sur l'expression miroir :
// l'associativité y est inversée (voir Sens::Miroir).

use log::{debug, trace};

use super::erreur::{ErreurMoteur, Resultat};
use super::jetons::{format_jetons, tokenize, Jeton};
use super::operateurs::{Associativite, Operateur};
use super::validation::{nettoyer, validate};

/// Résultat d'une conversion : la notation obtenue + la démarche pas à pas.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Conversion {
    pub resultat: String,
    pub etapes: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Sens {
    Direct,
    Miroir,
}

fn doit_depiler(sommet: Operateur, op: Operateur, sens: Sens) -> bool {
    let assoc = match sens {
        Sens::Direct => op.associativite(),
        Sens::Miroir => op.associativite().miroir(),
    };

    let (p_sommet, p_op) = (sommet.precedence(), op.precedence());
    p_sommet > p_op || (p_sommet == p_op && assoc == Associativite::Gauche)
}

fn instantane(sortie: &[Jeton], pile: &[Jeton]) -> String {
    format!(
        "sortie : [{}] | pile : [{}]",
        format_jetons(sortie),
        format_jetons(pile)
    )
}

/// Ajoute une ligne à la démarche (et la trace au passage).
pub(crate) fn noter(etapes: &mut Vec<String>, ligne: String) {
    trace!("{ligne}");
    etapes.push(ligne);
}

/// Cœur du shunting-yard. Les étapes sont ajoutées à `etapes`.
pub(crate) fn shunting_yard(
    jetons: &[Jeton],
    sens: Sens,
    etapes: &mut Vec<String>,
) -> Resultat<Vec<Jeton>> {
    let mut sortie: Vec<Jeton> = Vec::with_capacity(jetons.len());
    let mut pile: Vec<Jeton> = Vec::new();

    for jeton in jetons.iter().cloned() {
        match jeton {
            Jeton::Operande(ref nom) => {
                let ligne = format!("Lecture de l'opérande {nom}");
                sortie.push(jeton);
                noter(etapes, format!("{ligne} -> {}", instantane(&sortie, &pile)));
            }

            Jeton::ParOuvrante => {
                pile.push(jeton);
                noter(
                    etapes,
                    format!("Empilement de ( -> {}", instantane(&sortie, &pile)),
                );
            }

            Jeton::ParFermante => {
                loop {
                    match pile.pop() {
                        Some(Jeton::ParOuvrante) => break,
                        Some(top) => {
                            let ligne = format!("Dépilement de {top} vers la sortie");
                            sortie.push(top);
                            noter(etapes, format!("{ligne} -> {}", instantane(&sortie, &pile)));
                        }
                        None => return Err(ErreurMoteur::UnmatchedParen),
                    }
                }
                noter(
                    etapes,
                    format!("Parenthèse ( retirée -> {}", instantane(&sortie, &pile)),
                );
            }

            Jeton::Operateur(op) => {
                while let Some(Jeton::Operateur(sommet)) = pile.last() {
                    let sommet = *sommet;
                    if !doit_depiler(sommet, op, sens) {
                        break;
                    }
                    pile.pop();
                    sortie.push(Jeton::Operateur(sommet));
                    noter(
                        etapes,
                        format!(
                            "Dépilement de {sommet} (prioritaire sur {op}) -> {}",
                            instantane(&sortie, &pile)
                        ),
                    );
                }

                pile.push(Jeton::Operateur(op));
                noter(
                    etapes,
                    format!(
                        "Empilement de l'opérateur {op} -> {}",
                        instantane(&sortie, &pile)
                    ),
                );
            }
        }
    }

    // vide la pile
    while let Some(top) = pile.pop() {
        if top == Jeton::ParOuvrante {
            return Err(ErreurMoteur::UnmatchedParen);
        }
        let ligne = format!("Fin de lecture : dépilement de {top}");
        sortie.push(top);
        noter(etapes, format!("{ligne} -> {}", instantane(&sortie, &pile)));
    }

    Ok(sortie)
}

/// Convertit une expression infixe en postfixe.
///
/// Exemple:
///   "(2+3)*4"  ->  "2 3 + 4 *"
pub fn to_postfix(infix: &str) -> Resultat<Conversion> {
    let s = nettoyer(infix);
    validate(&s)?;

    let jetons = tokenize(&s)?;
    let mut etapes = Vec::new();
    let sortie = shunting_yard(&jetons, Sens::Direct, &mut etapes)?;

    let resultat = format_jetons(&sortie);
    noter(&mut etapes, format!("Postfixe : {resultat}"));
    debug!("postfixe {s:?} -> {resultat:?} ({} étapes)", etapes.len());

    Ok(Conversion { resultat, etapes })
}
