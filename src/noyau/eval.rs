//! Noyau — évaluation (pipeline réel)
//!
//! parenthèses -> jetons -> RPN -> Expr -> réduction (mode d’angle) -> f64
//!
//! Remarque : le mode d’angle n’intervient qu’au niveau de la table des fonctions,
//! jamais dans la grammaire.

use super::erreur::ErreurCalcul;
use super::fonctions::ModeAngle;
use super::jetons::{format_tokens, tokenize};
use super::rpn::{from_rpn, to_rpn};
use super::validation::parentheses_equilibrees;

/// API publique : évalue une expression, succès (f64 fini) ou échec classé.
pub fn evaluer(expression: &str, mode: ModeAngle) -> Result<f64, ErreurCalcul> {
    let s = expression.trim();
    if s.is_empty() {
        return Err(ErreurCalcul::EntreeVide);
    }

    // Pré-contrôle peu coûteux avant toute tokenisation
    if !parentheses_equilibrees(s) {
        return Err(ErreurCalcul::ParenthesesDesequilibrees);
    }

    // 1) Jetons
    let jetons = tokenize(s)?;
    log::trace!("jetons: {}", format_tokens(&jetons));

    // 2) RPN
    let rpn = to_rpn(&jetons)?;
    log::trace!("rpn: {}", format_tokens(&rpn));

    // 3) AST (Expr)
    let expr = from_rpn(&rpn)?;
    log::trace!("expr: {expr}");

    // 4) Réduction
    expr.reduire(mode)
}

/// f64 -> texte décimal (sans exposant). -0 devient "0".
pub fn serialiser(v: f64) -> String {
    if v == 0.0 {
        "0".to_string()
    } else {
        v.to_string()
    }
}
