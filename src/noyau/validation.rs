//! src/noyau/validation.rs
//!
//! Validation des saisies (prédicats purs, sans état, sans panique).
//!
//! - `peut_ajouter` : autorise ou non l’ajout d’un jeton au tampon d’édition.
//!   Un refus = l’événement est ignoré (aucune mutation, aucun drapeau d’erreur).
//! - `parentheses_equilibrees` : solde jamais négatif, nul à la fin.
//! - `compter_parentheses` : (ouvrantes, fermantes) pour le bouton "( )".

/// Opérateurs binaires reconnus par l’éditeur.
pub const OPERATEURS_BINAIRES: [char; 6] = ['+', '-', '*', '/', '%', '^'];

pub fn est_operateur_binaire(c: char) -> bool {
    OPERATEURS_BINAIRES.contains(&c)
}

/// Peut-on ajouter `candidat` à la fin de `tampon` ?
///
/// - "." : refusé si le dernier segment numérique (découpé sur les opérateurs) en contient déjà un.
/// - opérateur binaire : refusé sur tampon vide ou juste après un autre opérateur binaire.
/// - tout le reste : accepté.
pub fn peut_ajouter(tampon: &str, candidat: &str) -> bool {
    if candidat == "." {
        let segment = tampon.rsplit(est_operateur_binaire).next().unwrap_or("");
        return !segment.contains('.');
    }

    let mut cs = candidat.chars();
    if let (Some(op), None) = (cs.next(), cs.next()) {
        if est_operateur_binaire(op) {
            return match tampon.chars().last() {
                None => false,
                Some(dernier) => !est_operateur_binaire(dernier),
            };
        }
    }

    true
}

/// (ouvrantes, fermantes) présentes dans le texte.
pub fn compter_parentheses(texte: &str) -> (usize, usize) {
    texte.chars().fold((0, 0), |(o, f), c| match c {
        '(' => (o + 1, f),
        ')' => (o, f + 1),
        _ => (o, f),
    })
}

/// Parenthèses équilibrées : aucune fermante avant son ouvrante, solde final nul.
pub fn parentheses_equilibrees(expression: &str) -> bool {
    let mut solde: i64 = 0;
    for c in expression.chars() {
        match c {
            '(' => solde += 1,
            ')' => {
                solde -= 1;
                if solde < 0 {
                    return false;
                }
            }
            _ => {}
        }
    }
    solde == 0
}
