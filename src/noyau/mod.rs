//! Noyau de la calculatrice scientifique
//!
//! Organisation interne :
//! - erreur.rs     : erreurs classées (syntaxe / domaine) + sentinelle "Error"
//! - fonctions.rs  : mode d’angle, table des fonctions, constantes
//! - jetons.rs     : tokenisation (littéraux, identifiants, produits implicites)
//! - rpn.rs        : shunting-yard + construction Expr
//! - expr.rs       : AST + réduction f64
//! - eval.rs       : pipeline complet
//! - format.rs     : arrondi d’affichage (exact, idempotent)
//! - validation.rs : prédicats de saisie
//! - evenement.rs  : événements d’entrée (API texte + clavier)
//! - session.rs    : machine à états

pub mod erreur;
pub mod eval;
pub mod evenement;
pub mod expr;
pub mod fonctions;
pub mod format;
pub mod jetons;
pub mod rpn;
pub mod session;
pub mod validation;

#[cfg(test)]
mod tests_scientifiques;


// API publique minimale
pub use evenement::Entree;
pub use session::Session;
