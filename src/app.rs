// src/app.rs
//
// Coquille ligne de commande
// --------------------------
// Rôle:
// - Déclarer l'interface (clap) : sous-commandes + options
// - Traduire une commande en appels au noyau, et le résultat en lignes de texte
// - Aucune logique de conversion ici
//
// La session interactive (une commande par ligne) vit dans app/session.rs.

pub mod session;

use clap::{Args, Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use num_rational::BigRational;
use num_traits::One;

use crate::noyau::erreur::Resultat;
use crate::noyau::eval::{evaluer_postfixe, evaluer_prefixe};
use crate::noyau::format::{format_nombre, format_rat, lecture_decimale, CHIFFRES_DEFAUT};
use crate::noyau::{to_postfix, to_prefix, validate, Conversion};

#[derive(Parser, Debug)]
#[command(
    name = "moteur-notation",
    version,
    about = "Conversion infixe -> postfixe / préfixe, et évaluation"
)]
pub struct Cli {
    /// Niveau de journalisation (sinon RUST_LOG, sinon warn)
    #[arg(long, value_enum, global = true)]
    pub log_level: Option<NiveauLog>,

    /// Aucun journal
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub commande: Commande,
}

/// Niveau utilisé quand ni les options ni RUST_LOG n'en donnent.
pub const NIVEAU_DEFAUT: &str = "warn";

impl Cli {
    /// Niveau imposé par la ligne de commande. None : on laisse RUST_LOG décider.
    pub fn niveau_impose(&self) -> Option<LevelFilter> {
        if self.quiet {
            Some(LevelFilter::Off)
        } else {
            self.log_level.map(LevelFilter::from)
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum NiveauLog {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<NiveauLog> for LevelFilter {
    fn from(n: NiveauLog) -> Self {
        match n {
            NiveauLog::Off => LevelFilter::Off,
            NiveauLog::Error => LevelFilter::Error,
            NiveauLog::Warn => LevelFilter::Warn,
            NiveauLog::Info => LevelFilter::Info,
            NiveauLog::Debug => LevelFilter::Debug,
            NiveauLog::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commande {
    #[command(flatten)]
    Requete(Requete),

    /// Lit une commande par ligne sur l'entrée standard ("quitter" pour finir)
    Session {
        #[command(flatten)]
        options: OptionsConversion,
    },
}

/// Commandes à un coup : une entrée, des lignes de sortie.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Requete {
    /// Valide une expression infixe
    Valider {
        #[arg(allow_hyphen_values = true)]
        expr: String,
    },

    /// Infixe -> postfixe
    Postfixe {
        #[arg(allow_hyphen_values = true)]
        expr: String,
        #[command(flatten)]
        options: OptionsConversion,
    },

    /// Infixe -> préfixe
    Prefixe {
        #[arg(allow_hyphen_values = true)]
        expr: String,
        #[command(flatten)]
        options: OptionsConversion,
    },

    /// Évalue une suite postfixe (jetons séparés par des espaces)
    EvalPostfixe {
        #[arg(allow_hyphen_values = true)]
        jetons: String,
        #[command(flatten)]
        options: OptionsEval,
    },

    /// Évalue une suite préfixe (jetons séparés par des espaces)
    EvalPrefixe {
        #[arg(allow_hyphen_values = true)]
        jetons: String,
        #[command(flatten)]
        options: OptionsEval,
    },
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionsConversion {
    /// Affiche la démarche pas à pas
    #[arg(long)]
    pub etapes: bool,

    /// Évalue aussi la notation obtenue
    #[arg(long)]
    pub evaluer: bool,

    #[command(flatten)]
    pub eval: OptionsEval,
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct OptionsEval {
    /// Évaluation exacte (rationnels) au lieu des flottants
    #[arg(long)]
    pub exact: bool,

    /// Chiffres de la lecture décimale en mode exact
    #[arg(long, default_value_t = CHIFFRES_DEFAUT)]
    pub chiffres: usize,
}

impl Default for OptionsEval {
    fn default() -> Self {
        Self {
            exact: false,
            chiffres: CHIFFRES_DEFAUT,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Notation {
    Postfixe,
    Prefixe,
}

/// Valeur affichable d'une suite, selon le mode (flottant / exact).
fn valeur_texte(suite: &str, notation: Notation, options: &OptionsEval) -> Resultat<String> {
    if options.exact {
        let r: BigRational = match notation {
            Notation::Postfixe => evaluer_postfixe(suite)?,
            Notation::Prefixe => evaluer_prefixe(suite)?,
        };
        if r.denom().is_one() {
            return Ok(format_rat(&r));
        }
        return Ok(format!(
            "{} ≈ {}",
            format_rat(&r),
            lecture_decimale(&r, options.chiffres)
        ));
    }

    let x: f64 = match notation {
        Notation::Postfixe => evaluer_postfixe(suite)?,
        Notation::Prefixe => evaluer_prefixe(suite)?,
    };
    Ok(format_nombre(x))
}

fn lignes_conversion(
    conversion: Conversion,
    notation: Notation,
    options: &OptionsConversion,
) -> Resultat<Vec<String>> {
    let mut lignes = Vec::new();
    if options.etapes {
        lignes.extend(conversion.etapes);
    }
    let valeur = if options.evaluer {
        Some(valeur_texte(&conversion.resultat, notation, &options.eval)?)
    } else {
        None
    };
    lignes.push(conversion.resultat);
    if let Some(v) = valeur {
        lignes.push(format!("= {v}"));
    }
    Ok(lignes)
}

/// Exécute une requête et renvoie les lignes à afficher.
pub fn executer(requete: &Requete) -> Resultat<Vec<String>> {
    match requete {
        Requete::Valider { expr } => {
            validate(expr)?;
            Ok(vec!["expression valide".to_string()])
        }
        Requete::Postfixe { expr, options } => {
            lignes_conversion(to_postfix(expr)?, Notation::Postfixe, options)
        }
        Requete::Prefixe { expr, options } => {
            lignes_conversion(to_prefix(expr)?, Notation::Prefixe, options)
        }
        Requete::EvalPostfixe { jetons, options } => {
            Ok(vec![valeur_texte(jetons, Notation::Postfixe, options)?])
        }
        Requete::EvalPrefixe { jetons, options } => {
            Ok(vec![valeur_texte(jetons, Notation::Prefixe, options)?])
        }
    }
}
