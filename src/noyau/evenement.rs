// src/noyau/evenement.rs
//
// Événements d’entrée de la session.
// - API "texte" : depuis_api("NUMBER", Some("7")), depuis_api("EQUALS", None), ...
// - Clavier     : depuis_touche("7"), depuis_touche("Enter"), ...

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Entree {
    /// Chiffre, "." ou toute saisie de classe "nombre" (ex: "pi").
    Nombre(String),
    Operateur(String),
    Fonction(String),
    /// Bouton "( )" : ouvre ou ferme selon le solde du tampon.
    Parentheses,
    Egal,
    Effacer,
    Supprimer,
    BasculerAngle,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurEntree {
    #[error("type d’entrée inconnu: {0}")]
    TypeInconnu(String),

    #[error("{0} : contenu manquant")]
    ContenuManquant(&'static str),
}

impl Entree {
    /// Entrée "texte" : (type, contenu optionnel).
    ///
    /// Types : NUMBER, OPERATOR, FUNCTION, PAREN_TOGGLE, EQUALS, CLEAR, DELETE, TOGGLE_ANGLE.
    /// Alias : DECIMAL (= NUMBER ".") et "()" (= PAREN_TOGGLE).
    pub fn depuis_api(type_entree: &str, contenu: Option<&str>) -> Result<Entree, ErreurEntree> {
        let avec_contenu = |nom: &'static str| {
            contenu
                .filter(|c| !c.is_empty())
                .map(str::to_string)
                .ok_or(ErreurEntree::ContenuManquant(nom))
        };

        let e = match type_entree {
            "NUMBER" => Entree::Nombre(avec_contenu("NUMBER")?),
            "DECIMAL" => Entree::Nombre(".".to_string()),
            "OPERATOR" => Entree::Operateur(avec_contenu("OPERATOR")?),
            "FUNCTION" => Entree::Fonction(avec_contenu("FUNCTION")?),
            "PAREN_TOGGLE" | "()" => Entree::Parentheses,
            "EQUALS" => Entree::Egal,
            "CLEAR" => Entree::Effacer,
            "DELETE" => Entree::Supprimer,
            "TOGGLE_ANGLE" => Entree::BasculerAngle,
            autre => return Err(ErreurEntree::TypeInconnu(autre.to_string())),
        };
        Ok(e)
    }

    /// Correspondance clavier -> événement (None : touche sans effet).
    pub fn depuis_touche(touche: &str) -> Option<Entree> {
        let e = match touche {
            "Enter" | "=" => Entree::Egal,
            "Backspace" => Entree::Supprimer,
            "Escape" => Entree::Effacer,
            "(" | ")" => Entree::Parentheses,
            "." => Entree::Nombre(".".to_string()),
            "+" | "-" | "*" | "/" | "%" | "^" => Entree::Operateur(touche.to_string()),
            t if t.len() == 1 && t.bytes().all(|b| b.is_ascii_digit()) => {
                Entree::Nombre(t.to_string())
            }
            _ => return None,
        };
        Some(e)
    }
}
