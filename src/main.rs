// src/main.rs
//
// Moteur de notation — point d’entrée ligne de commande
// -----------------------------------------------------
// - Journal : env_logger (RUST_LOG + --log-level / --quiet)
// - Commandes : voir app.rs
// - Code de sortie non nul si le noyau refuse l’entrée

use std::io;
use std::process::ExitCode;

use clap::Parser;
use log::{error, LevelFilter};

use moteur_notation::app::session::executer_session;
use moteur_notation::app::{executer, Cli, Commande, NIVEAU_DEFAUT};

/// Initialise le journal une seule fois.
/// Un niveau imposé (--log-level / --quiet) prime ; sinon RUST_LOG, sinon warn.
fn init_logger(impose: Option<LevelFilter>) {
    use env_logger::{Builder, Env};
    use std::sync::Once;

    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let mut builder = Builder::from_env(Env::default().default_filter_or(NIVEAU_DEFAUT));
        if let Some(niveau) = impose {
            builder.filter_level(niveau);
        }
        builder.format_timestamp_secs();
        // déjà initialisé ailleurs : on ignore
        builder.try_init().ok();
    });
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.niveau_impose());

    let requete = match &cli.commande {
        Commande::Requete(r) => r,
        Commande::Session { options } => {
            let stdin = io::stdin();
            return match executer_session(stdin.lock(), io::stdout().lock(), options) {
                Ok(bilan) if bilan.erreurs == 0 => ExitCode::SUCCESS,
                Ok(_) => ExitCode::FAILURE,
                Err(e) => {
                    error!("session interrompue : {e}");
                    eprintln!("erreur d'entrée/sortie : {e}");
                    ExitCode::FAILURE
                }
            };
        }
    };

    match executer(requete) {
        Ok(lignes) => {
            for l in lignes {
                println!("{l}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("erreur : {e}");
            ExitCode::FAILURE
        }
    }
}
