// src/noyau/erreur.rs
//
// Erreurs du noyau.
// - Syntaxe : expression mal formée (parenthèses, opérande manquant, jeton inconnu)
// - Domaine : mathématiquement indéfini (÷0, ln(-1), asin(2), résultat non fini)
//
// Côté session, les deux genres se réduisent à la même sentinelle "Error".
// Le genre n’est conservé que pour le diagnostic (journal).

use thiserror::Error;

/// Sentinelle d’échec vue par l’affichage.
pub const SENTINELLE_ERREUR: &str = "Error";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenreErreur {
    Syntaxe,
    Domaine,
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum ErreurCalcul {
    #[error("entrée vide")]
    EntreeVide,

    #[error("caractère inattendu: '{0}'")]
    CaractereInattendu(char),

    #[error("identifiant inconnu: {0}")]
    IdentifiantInconnu(String),

    #[error("parenthèses déséquilibrées")]
    ParenthesesDesequilibrees,

    #[error("opérande manquant")]
    OperandeManquant,

    #[error("opérateur manquant entre deux valeurs")]
    OperateurManquant,

    #[error("{0} : argument attendu (parenthèse ou atome)")]
    FonctionSansArgument(&'static str),

    #[error("trop de signes unaires consécutifs")]
    SignesUnairesExcessifs,

    #[error("expression trop longue ({0} jetons)")]
    ExpressionTropLongue(usize),

    #[error("nombre invalide: {0}")]
    LitteralInvalide(String),

    #[error("division par zéro")]
    DivisionParZero,

    #[error("{fonction} : argument hors domaine ({valeur})")]
    HorsDomaine { fonction: &'static str, valeur: f64 },

    #[error("résultat non fini")]
    NonFini,
}

impl ErreurCalcul {
    pub fn genre(&self) -> GenreErreur {
        use ErreurCalcul::*;
        match self {
            EntreeVide
            | CaractereInattendu(_)
            | IdentifiantInconnu(_)
            | ParenthesesDesequilibrees
            | OperandeManquant
            | OperateurManquant
            | FonctionSansArgument(_)
            | SignesUnairesExcessifs
            | ExpressionTropLongue(_) => GenreErreur::Syntaxe,

            // un littéral mal formé est classé "domaine" (nombre indéfini)
            LitteralInvalide(_) | DivisionParZero | HorsDomaine { .. } | NonFini => {
                GenreErreur::Domaine
            }
        }
    }
}
