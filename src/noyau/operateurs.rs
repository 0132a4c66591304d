// src/noyau/operateurs.rs
//
// Table des opérateurs (fixe, partagée en lecture seule).
//   * /  : précédence 2, gauche
//   + -  : précédence 1, gauche

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Associativite {
    Gauche,
    Droite,
}

impl Associativite {
    /// Associativité vue dans le miroir (expression inversée, pour le préfixe).
    pub fn miroir(self) -> Associativite {
        match self {
            Associativite::Gauche => Associativite::Droite,
            Associativite::Droite => Associativite::Gauche,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InfoOperateur {
    pub precedence: u8,
    pub associativite: Associativite,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

/// Symbole -> (opérateur, précédence, associativité).
pub static TABLE_OPERATEURS: [(char, Operateur, InfoOperateur); 4] = [
    (
        '+',
        Operateur::Plus,
        InfoOperateur {
            precedence: 1,
            associativite: Associativite::Gauche,
        },
    ),
    (
        '-',
        Operateur::Moins,
        InfoOperateur {
            precedence: 1,
            associativite: Associativite::Gauche,
        },
    ),
    (
        '*',
        Operateur::Fois,
        InfoOperateur {
            precedence: 2,
            associativite: Associativite::Gauche,
        },
    ),
    (
        '/',
        Operateur::Divise,
        InfoOperateur {
            precedence: 2,
            associativite: Associativite::Gauche,
        },
    ),
];

impl Operateur {
    pub fn depuis_symbole(c: char) -> Option<Operateur> {
        TABLE_OPERATEURS
            .iter()
            .find(|(s, _, _)| *s == c)
            .map(|(_, op, _)| *op)
    }

    pub fn symbole(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '-',
            Operateur::Fois => '*',
            Operateur::Divise => '/',
        }
    }

    fn info(self) -> InfoOperateur {
        // la table couvre les quatre variantes
        TABLE_OPERATEURS
            .iter()
            .find(|(_, op, _)| *op == self)
            .map(|(_, _, info)| *info)
            .unwrap_or(InfoOperateur {
                precedence: 0,
                associativite: Associativite::Gauche,
            })
    }

    pub fn precedence(self) -> u8 {
        self.info().precedence
    }

    pub fn associativite(self) -> Associativite {
        self.info().associativite
    }
}

pub fn est_symbole_operateur(c: char) -> bool {
    Operateur::depuis_symbole(c).is_some()
}

impl fmt::Display for Operateur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbole())
    }
}
