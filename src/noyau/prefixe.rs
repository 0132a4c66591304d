// src/noyau/prefixe.rs
//
// Infixe -> préfixe par la technique du miroir :
// 1) inverser l'expression
// 2) échanger '(' et ')'
// 3) shunting-yard sur le miroir (associativité inversée)
// 4) inverser la suite de jetons obtenue
//
// L'inversion se fait jeton par jeton : un opérande garde son orthographe ("12" reste "12").

use log::debug;

use super::erreur::Resultat;
use super::jetons::{format_jetons, tokenize, Jeton};
use super::rpn::{noter, shunting_yard, Conversion, Sens};
use super::validation::{nettoyer, validate};

/// Échange '(' et ')' (en une passe : pas de double échange).
fn echanger_parentheses(jetons: Vec<Jeton>) -> Vec<Jeton> {
    jetons
        .into_iter()
        .map(|j| match j {
            Jeton::ParOuvrante => Jeton::ParFermante,
            Jeton::ParFermante => Jeton::ParOuvrante,
            autre => autre,
        })
        .collect()
}

/// Texte compact (sans espaces) d'une suite de jetons infixe.
fn en_texte(jetons: &[Jeton]) -> String {
    jetons.iter().map(|j| j.to_string()).collect()
}

/// Convertit une expression infixe en préfixe.
///
/// Exemple:
///   "(2+3)*4"  ->  "* + 2 3 4"
pub fn to_prefix(infix: &str) -> Resultat<Conversion> {
    let s = nettoyer(infix);
    validate(&s)?;

    let mut etapes = Vec::new();

    // 1) Inversion
    let mut jetons = tokenize(&s)?;
    jetons.reverse();
    noter(&mut etapes, format!("1. Expression inversée : {}", en_texte(&jetons)));

    // 2) Échange des parenthèses
    let miroir = echanger_parentheses(jetons);
    noter(&mut etapes, format!("2. Parenthèses échangées : {}", en_texte(&miroir)));

    // 3) Postfixe du miroir
    let mut sous_etapes = Vec::new();
    let mut sortie = shunting_yard(&miroir, Sens::Miroir, &mut sous_etapes)?;
    etapes.extend(sous_etapes.into_iter().map(|l| format!("   {l}")));
    noter(&mut etapes, format!("3. Postfixe du miroir : {}", format_jetons(&sortie)));

    // 4) Inversion des jetons
    sortie.reverse();
    let resultat = format_jetons(&sortie);
    noter(&mut etapes, format!("4. Préfixe : {resultat}"));

    debug!("préfixe {s:?} -> {resultat:?} ({} étapes)", etapes.len());

    Ok(Conversion { resultat, etapes })
}
