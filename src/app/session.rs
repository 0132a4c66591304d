//! src/app/session.rs
//!
//! Session interactive : une commande par ligne.
//!
//!   postfixe (2+3)*4
//!   prefixe 10+2*6
//!   eval-postfixe 2 3 + 4 *
//!   eval-prefixe * + 2 3 4
//!   valider 2++3
//!   quitter
//!
//! Une erreur n'arrête pas la session : elle est affichée et on passe à la ligne suivante.
//! Les options de la sous-commande `session` s'appliquent à toutes les lignes.

use std::io::{self, BufRead, Write};

use log::{debug, info};

use super::{executer, OptionsConversion, Requete};

/// Compteurs de fin de session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bilan {
    pub reussites: usize,
    pub erreurs: usize,
}

/// Traduit une ligne en commande. None pour "quitter".
fn lire_commande(ligne: &str, options: &OptionsConversion) -> Option<Result<Requete, String>> {
    let ligne = ligne.trim();
    let (nom, reste) = ligne.split_once(char::is_whitespace).unwrap_or((ligne, ""));
    let arg = reste.trim().to_string();

    let requete = match nom {
        "quitter" | "exit" => return None,
        "valider" => Requete::Valider { expr: arg },
        "postfixe" => Requete::Postfixe {
            expr: arg,
            options: options.clone(),
        },
        "prefixe" => Requete::Prefixe {
            expr: arg,
            options: options.clone(),
        },
        "eval-postfixe" => Requete::EvalPostfixe {
            jetons: arg,
            options: options.eval.clone(),
        },
        "eval-prefixe" => Requete::EvalPrefixe {
            jetons: arg,
            options: options.eval.clone(),
        },
        autre => return Some(Err(format!("commande inconnue : {autre:?}"))),
    };
    Some(Ok(requete))
}

/// Boucle de session : lit `entree` jusqu'à "quitter" ou la fin du flux.
pub fn executer_session<R: BufRead, W: Write>(
    entree: R,
    mut sortie: W,
    options: &OptionsConversion,
) -> io::Result<Bilan> {
    let mut bilan = Bilan::default();

    for ligne in entree.lines() {
        let ligne = ligne?;
        if ligne.trim().is_empty() {
            continue;
        }

        let requete = match lire_commande(&ligne, options) {
            None => break,
            Some(Ok(c)) => c,
            Some(Err(msg)) => {
                writeln!(sortie, "erreur : {msg}")?;
                bilan.erreurs += 1;
                continue;
            }
        };

        debug!("session : {requete:?}");
        match executer(&requete) {
            Ok(lignes) => {
                for l in lignes {
                    writeln!(sortie, "{l}")?;
                }
                bilan.reussites += 1;
            }
            Err(e) => {
                writeln!(sortie, "erreur : {e}")?;
                bilan.erreurs += 1;
            }
        }
    }

    info!(
        "fin de session : {} réussites, {} erreurs",
        bilan.reussites, bilan.erreurs
    );
    Ok(bilan)
}
