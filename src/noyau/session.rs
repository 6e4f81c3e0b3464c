//! src/noyau/session.rs
//!
//! Machine à états de la session (édition -> évaluation -> affichage).
//!
//! Contrats :
//! - Une seule propriétaire : chaque transition consomme la session et rend la suivante.
//! - Le validateur filtre les saisies "nombre" ; un refus = événement sans effet.
//! - "Réinitialisation en attente" résolue une fois par événement, AVANT son effet :
//!   opérateur => on continue avec le résultat ; bascule d’angle => rien ;
//!   "=" juste après "=" => événement ignoré ; tout le reste => nouveau départ.
//! - En erreur, seuls CLEAR (et la bascule d’angle) ont un effet : `en_erreur` implique
//!   `tampon == "Error"`.
//! - L’historique ne fait que croître (sauf effacement explicite par l’application).

use super::erreur::SENTINELLE_ERREUR;
use super::eval::{evaluer, serialiser};
use super::evenement::{Entree, ErreurEntree};
use super::fonctions::ModeAngle;
use super::format::formater_resultat;
use super::validation::{compter_parentheses, peut_ajouter};

/// Contenu du tampon au repos.
pub const TAMPON_DEFAUT: &str = "0";

#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    tampon: String,
    expression_validee: String,
    mode_angle: ModeAngle,
    historique: Vec<String>,
    en_erreur: bool,
    reinit_en_attente: bool,
}

/// Vue lecture seule pour l’affichage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Apercu {
    pub expression: String,
    pub valeur: String,
    pub mode_angle: ModeAngle,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            tampon: TAMPON_DEFAUT.to_string(),
            expression_validee: String::new(),
            mode_angle: ModeAngle::default(),
            historique: Vec::new(),
            en_erreur: false,
            reinit_en_attente: false,
        }
    }
}

impl Session {
    /* ------------------------ Lecture ------------------------ */

    pub fn apercu(&self) -> Apercu {
        Apercu {
            expression: self.expression_validee.clone(),
            valeur: self.tampon.clone(),
            mode_angle: self.mode_angle,
        }
    }

    pub fn historique(&self) -> &[String] {
        &self.historique
    }

    pub fn en_erreur(&self) -> bool {
        self.en_erreur
    }

    /* ------------------------ Transitions ------------------------ */

    /// API texte (type, contenu optionnel), puis transition.
    pub fn traiter_entree(
        self,
        type_entree: &str,
        contenu: Option<&str>,
    ) -> Result<Session, ErreurEntree> {
        let entree = Entree::depuis_api(type_entree, contenu)?;
        Ok(self.appliquer(&entree))
    }

    /// Transition : session courante + événement -> session suivante.
    pub fn appliquer(mut self, entree: &Entree) -> Session {
        if self.en_erreur && !matches!(entree, Entree::Effacer | Entree::BasculerAngle) {
            log::debug!("session en erreur : {entree:?} ignoré (CLEAR attendu)");
            return self;
        }

        if self.reinit_en_attente {
            match entree {
                // "=" répété sans édition : rien à refaire
                Entree::Egal => return self,
                // continuation : gérée par l’opérateur lui-même
                Entree::Operateur(_) | Entree::BasculerAngle => {}
                _ => self.nouveau_depart(),
            }
        }

        match entree {
            Entree::Nombre(d) => self.ajouter_nombre(d),
            Entree::Operateur(op) => self.ajouter_operateur(op),
            Entree::Fonction(nom) => self.ajouter_fonction(nom),
            Entree::Parentheses => self.basculer_parenthese(),
            Entree::Egal => self.evaluer(),
            Entree::Effacer => self.effacer(),
            Entree::Supprimer => self.supprimer(),
            Entree::BasculerAngle => self.mode_angle = self.mode_angle.basculer(),
        }

        self
    }

    /// Effacement explicite de l’historique (demandé par l’application, jamais par un événement).
    pub fn effacer_historique(mut self) -> Session {
        self.historique.clear();
        self
    }

    fn nouveau_depart(&mut self) {
        self.tampon = TAMPON_DEFAUT.to_string();
        self.expression_validee.clear();
        self.reinit_en_attente = false;
    }

    fn ajouter_nombre(&mut self, d: &str) {
        if !peut_ajouter(&self.tampon, d) {
            log::trace!("saisie {d:?} refusée sur {:?}", self.tampon);
            return;
        }

        if d == "." || self.tampon != TAMPON_DEFAUT {
            self.tampon.push_str(d);
        } else {
            self.tampon = d.to_string();
        }
    }

    /// Pas de passage par le validateur ici (comportement d’origine conservé).
    fn ajouter_operateur(&mut self, op: &str) {
        if self.reinit_en_attente {
            // le résultat affiché devient l’opérande gauche
            self.expression_validee = std::mem::take(&mut self.tampon);
            self.reinit_en_attente = false;
        } else {
            self.expression_validee.push_str(&self.tampon);
        }
        self.expression_validee.push_str(op);
        self.tampon = TAMPON_DEFAUT.to_string();
    }

    fn ajouter_fonction(&mut self, nom: &str) {
        if self.tampon == TAMPON_DEFAUT {
            self.tampon = nom.to_string();
        } else {
            self.tampon.push_str(nom);
        }

        // heuristique : pas de '(' pour les jetons suffixes (^, !)
        if !nom.contains('^') && !nom.contains('!') {
            self.tampon.push('(');
        }
    }

    fn basculer_parenthese(&mut self) {
        let (ouvertes, fermees) = compter_parentheses(&self.tampon);
        if ouvertes > fermees {
            self.tampon.push(')');
        } else if self.tampon == TAMPON_DEFAUT {
            self.tampon = "(".to_string();
        } else {
            self.tampon.push('(');
        }
    }

    fn evaluer(&mut self) {
        let finale = format!("{}{}", self.expression_validee, self.tampon);

        match evaluer(&finale, self.mode_angle) {
            Ok(v) => {
                let resultat = formater_resultat(&serialiser(v));
                log::debug!("{finale} = {resultat}");
                self.historique.push(format!("{finale} = {resultat}"));
                // affichage seulement, jamais ré-évalué
                self.expression_validee = format!("{finale} =");
                self.tampon = resultat;
                self.en_erreur = false;
            }
            Err(e) => {
                // syntaxe ou domaine : même sentinelle, le genre ne sert qu’au journal
                log::debug!("évaluation de {finale:?} échouée ({:?}): {e}", e.genre());
                self.tampon = SENTINELLE_ERREUR.to_string();
                self.en_erreur = true;
            }
        }

        self.reinit_en_attente = true;
    }

    /// CLEAR : retour à l’état initial, mode d’angle et historique conservés.
    fn effacer(&mut self) {
        *self = Session {
            mode_angle: self.mode_angle,
            historique: std::mem::take(&mut self.historique),
            ..Session::default()
        };
    }

    fn supprimer(&mut self) {
        if self.tampon.chars().count() > 1 {
            self.tampon.pop();
        } else {
            self.tampon = TAMPON_DEFAUT.to_string();
        }
    }
}
