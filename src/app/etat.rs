//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder la session du noyau et lui transmettre les événements.
//!
//! Contrats :
//! - Aucune évaluation ici : tout passe par `Session::appliquer`.
//! - Une seule propriétaire : la session est prise, transformée, remise en place.
//! - L’effacement de l’historique est une action d’application, pas un événement.

use crate::noyau::{Entree, Session};

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    pub session: Session,
}

impl AppCalc {
    /// Transmet un événement à la session.
    pub fn envoyer(&mut self, entree: &Entree) {
        let session = std::mem::take(&mut self.session);
        self.session = session.appliquer(entree);
    }

    /// Variante "API texte" (boutons décrits par (type, contenu)).
    pub fn envoyer_api(&mut self, type_entree: &str, contenu: Option<&str>) {
        match Entree::depuis_api(type_entree, contenu) {
            Ok(e) => self.envoyer(&e),
            Err(err) => log::warn!("bouton ignoré: {err}"),
        }
    }

    /// Bouton "vider l’historique".
    pub fn effacer_historique(&mut self) {
        let session = std::mem::take(&mut self.session);
        self.session = session.effacer_historique();
    }
}
