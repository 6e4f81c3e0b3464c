// src/noyau/fonctions.rs
//
// Table statique des fonctions + constantes, paramétrée par le mode d’angle.
// - sin/cos/tan : argument converti (mode -> radians) avant application
// - asin/acos/atan : résultat converti (radians -> mode) après application
// - log = log10, ln = logarithme naturel (deux entrées distinctes)

use std::fmt;

use super::erreur::ErreurCalcul;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModeAngle {
    #[default]
    Degres,
    Radians,
}

impl ModeAngle {
    pub fn basculer(self) -> Self {
        match self {
            ModeAngle::Degres => ModeAngle::Radians,
            ModeAngle::Radians => ModeAngle::Degres,
        }
    }

    /// Étiquette d’affichage : "DEG" / "RAD".
    pub fn etiquette(self) -> &'static str {
        match self {
            ModeAngle::Degres => "DEG",
            ModeAngle::Radians => "RAD",
        }
    }

    fn vers_radians(self, x: f64) -> f64 {
        match self {
            ModeAngle::Degres => x.to_radians(),
            ModeAngle::Radians => x,
        }
    }

    fn depuis_radians(self, x: f64) -> f64 {
        match self {
            ModeAngle::Degres => x.to_degrees(),
            ModeAngle::Radians => x,
        }
    }
}

impl fmt::Display for ModeAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.etiquette())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Ln,
    Log,
    Sqrt,
}

/// Table nom -> fonction (noms normalisés en minuscules).
const TABLE: [(&str, Fonction); 9] = [
    ("sin", Fonction::Sin),
    ("cos", Fonction::Cos),
    ("tan", Fonction::Tan),
    ("asin", Fonction::Asin),
    ("acos", Fonction::Acos),
    ("atan", Fonction::Atan),
    ("ln", Fonction::Ln),
    ("log", Fonction::Log),
    ("sqrt", Fonction::Sqrt),
];

impl Fonction {
    pub fn depuis_nom(nom: &str) -> Option<Fonction> {
        TABLE.iter().find(|(n, _)| *n == nom).map(|(_, f)| *f)
    }

    pub fn nom(self) -> &'static str {
        TABLE
            .iter()
            .find(|(_, f)| *f == self)
            .map(|(n, _)| *n)
            .unwrap_or("?")
    }

    /// Applique la fonction dans le mode d’angle donné.
    pub fn appliquer(self, x: f64, mode: ModeAngle) -> Result<f64, ErreurCalcul> {
        use Fonction::*;

        let hors_domaine = |x: f64| ErreurCalcul::HorsDomaine {
            fonction: self.nom(),
            valeur: x,
        };

        let y = match self {
            Sin => mode.vers_radians(x).sin(),
            Cos => mode.vers_radians(x).cos(),
            Tan => mode.vers_radians(x).tan(),

            Asin | Acos if !(-1.0..=1.0).contains(&x) => return Err(hors_domaine(x)),
            Asin => mode.depuis_radians(x.asin()),
            Acos => mode.depuis_radians(x.acos()),
            Atan => mode.depuis_radians(x.atan()),

            Ln | Log if x <= 0.0 => return Err(hors_domaine(x)),
            Ln => x.ln(),
            Log => x.log10(),

            Sqrt if x < 0.0 => return Err(hors_domaine(x)),
            Sqrt => x.sqrt(),
        };

        Ok(y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Constante {
    Pi,
    E,
}

impl Constante {
    pub fn depuis_nom(nom: &str) -> Option<Constante> {
        match nom {
            "pi" => Some(Constante::Pi),
            "e" => Some(Constante::E),
            _ => None,
        }
    }

    pub fn nom(self) -> &'static str {
        match self {
            Constante::Pi => "pi",
            Constante::E => "e",
        }
    }

    pub fn valeur(self) -> f64 {
        match self {
            Constante::Pi => std::f64::consts::PI,
            Constante::E => std::f64::consts::E,
        }
    }
}
