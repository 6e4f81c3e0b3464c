// src/noyau/jetons.rs

use super::erreur::ErreurCalcul;
use super::fonctions::{Constante, Fonction};

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),
    Const(Constante),
    Fonc(Fonction),

    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Caret, // ^

    // Moins unaire : jamais produit par tokenize, seulement par to_rpn.
    Neg,

    LPar,
    RPar,
}

/// Garde-fou : au-delà, on refuse (anti-abus / anti-pile).
pub const MAX_JETONS: usize = 2000;

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - nombres décimaux (ex: 12, 1.5, .5, 5.) avec exposant optionnel (1e5, 2.5e-3)
/// - séparateurs de milliers dans la partie entière (ex: 1,000,000)
/// - opérateurs + - * / % ^
/// - parenthèses ( )
/// - constantes pi / π / e
/// - fonctions de la table (sin, cos, ..., sqrt) ; √ équivaut à "sqrt"
/// - produit implicite : 2pi, 2sin(30), (1+1)(2)
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurCalcul> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        let simple = match c {
            '(' => Some(Tok::LPar),
            ')' => Some(Tok::RPar),
            '+' => Some(Tok::Plus),
            '-' => Some(Tok::Minus),
            '*' => Some(Tok::Star),
            '/' => Some(Tok::Slash),
            '%' => Some(Tok::Percent),
            '^' => Some(Tok::Caret),
            'π' => Some(Tok::Const(Constante::Pi)),
            '√' => Some(Tok::Fonc(Fonction::Sqrt)),
            _ => None,
        };
        if let Some(t) = simple {
            out.push(t);
            i += 1;
            continue;
        }

        // Identifiants ASCII : [a-zA-Z_][a-zA-Z0-9_]* (normalisés en minuscules)
        if c.is_ascii_alphabetic() || c == '_' {
            let start = i;
            i += 1;
            while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '_') {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();
            let w = word.to_lowercase();

            if let Some(k) = Constante::depuis_nom(&w) {
                out.push(Tok::Const(k));
            } else if let Some(f) = Fonction::depuis_nom(&w) {
                out.push(Tok::Fonc(f));
            } else {
                return Err(ErreurCalcul::IdentifiantInconnu(w));
            }
            continue;
        }

        // Littéral numérique : chiffres, '.', ',' puis exposant optionnel
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.' || chars[i] == ',')
            {
                i += 1;
            }
            i = fin_exposant(&chars, i);

            let litteral: String = chars[start..i].iter().collect();
            out.push(Tok::Num(lire_litteral(&litteral)?));
            continue;
        }

        return Err(ErreurCalcul::CaractereInattendu(c));
    }

    if out.len() > MAX_JETONS {
        return Err(ErreurCalcul::ExpressionTropLongue(out.len()));
    }

    Ok(produits_implicites(out))
}

/// Si `chars[i..]` commence par un exposant (e5, E-3, e+2), renvoie l’indice après celui-ci.
/// Sinon renvoie `i` : "2e" reste "2" suivi de la constante e.
fn fin_exposant(chars: &[char], i: usize) -> usize {
    if i >= chars.len() || !matches!(chars[i], 'e' | 'E') {
        return i;
    }

    let mut j = i + 1;
    if j < chars.len() && matches!(chars[j], '+' | '-') {
        j += 1;
    }
    if j >= chars.len() || !chars[j].is_ascii_digit() {
        return i;
    }
    while j < chars.len() && chars[j].is_ascii_digit() {
        j += 1;
    }
    j
}

/// Lit un littéral numérique (groupes de milliers acceptés dans la partie entière).
pub fn lire_litteral(litteral: &str) -> Result<f64, ErreurCalcul> {
    let invalide = || ErreurCalcul::LitteralInvalide(litteral.to_string());

    let (mantisse, exposant) = match litteral.find(|c: char| c == 'e' || c == 'E') {
        Some(k) => litteral.split_at(k),
        None => (litteral, ""),
    };
    let (entier, fraction) = match mantisse.split_once('.') {
        Some((a, b)) => (a, Some(b)),
        None => (mantisse, None),
    };

    let entier = retirer_groupes(entier).ok_or_else(invalide)?;
    let fraction = fraction.unwrap_or("");
    if entier.is_empty() && fraction.is_empty() {
        return Err(invalide());
    }
    if !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalide());
    }

    let propre = format!("{entier}.{fraction}{exposant}");
    let v: f64 = propre.parse().map_err(|_| invalide())?;
    if !v.is_finite() {
        return Err(invalide());
    }
    Ok(v)
}

/// "1,234,567" -> "1234567". Refuse les groupes mal formés ("1,23", ",123").
/// Sans virgule : renvoie la chaîne telle quelle (si chiffres seulement).
pub fn retirer_groupes(entier: &str) -> Option<String> {
    if !entier.contains(',') {
        return entier
            .bytes()
            .all(|b| b.is_ascii_digit())
            .then(|| entier.to_string());
    }

    let mut out = String::with_capacity(entier.len());
    for (k, groupe) in entier.split(',').enumerate() {
        let taille_ok = if k == 0 {
            (1..=3).contains(&groupe.len())
        } else {
            groupe.len() == 3
        };
        if !taille_ok || !groupe.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        out.push_str(groupe);
    }
    Some(out)
}

/// Insère un `*` entre une valeur et ce qui la suit directement
/// (constante, fonction, parenthèse ouvrante ; nombre après ')' ou constante).
fn produits_implicites(tokens: Vec<Tok>) -> Vec<Tok> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());

    for tok in tokens {
        let implicite = match (out.last(), &tok) {
            (Some(Tok::Num(_) | Tok::Const(_) | Tok::RPar), Tok::Const(_) | Tok::Fonc(_) | Tok::LPar) => true,
            (Some(Tok::Const(_) | Tok::RPar), Tok::Num(_)) => true,
            _ => false,
        };
        if implicite {
            out.push(Tok::Star);
        }
        out.push(tok);
    }

    out
}

/// Format utilitaire (journal) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(v) => v.to_string(),
            Tok::Const(k) => k.nom().to_string(),
            Tok::Fonc(f) => f.nom().to_string(),

            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::Percent => "%".to_string(),
            Tok::Caret => "^".to_string(),
            Tok::Neg => "neg".to_string(),

            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
