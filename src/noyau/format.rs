// src/noyau/format.rs
//
// Affichage du résultat.
// 1) sentinelle d’erreur ou vide : inchangé
// 2) arrondi à 14 chiffres significatifs (efface le bruit binaire : 0.4999999999999999 -> 0.5)
// 3) au plus 10 décimales, séparateurs de milliers, zéros finaux retirés
//
// L’arrondi se fait sur la valeur décimale EXACTE du texte reçu (rationnel),
// jamais en flottant : le format est idempotent.
// Entrée non numérique : renvoyée telle quelle.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

use super::erreur::SENTINELLE_ERREUR;
use super::jetons::retirer_groupes;

/// Garde-fou : précision bornée (anti-abus).
const CHIFFRES_MAX: usize = 30;

/// Garde-fou : au-delà de 10^±EXPOSANT_MAX, le texte est considéré non numérique.
const EXPOSANT_MAX: i64 = 1000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OptionsFormat {
    pub chiffres_significatifs: usize,
    pub decimales_max: usize,
    pub separateur_milliers: Option<char>,
}

impl Default for OptionsFormat {
    fn default() -> Self {
        Self {
            chiffres_significatifs: 14,
            decimales_max: 10,
            separateur_milliers: Some(','),
        }
    }
}

/// Format standard de l’affichage.
pub fn formater_resultat(brut: &str) -> String {
    formater_avec(brut, &OptionsFormat::default())
}

pub fn formater_avec(brut: &str, options: &OptionsFormat) -> String {
    if brut == SENTINELLE_ERREUR || brut.is_empty() {
        return brut.to_string();
    }

    let Some(valeur) = lire_decimal(brut.trim()) else {
        return brut.to_string();
    };

    let chiffres = options.chiffres_significatifs.clamp(1, CHIFFRES_MAX);
    let decimales = options.decimales_max.min(CHIFFRES_MAX);

    let nettoye = arrondir_significatif(&valeur, chiffres);
    let arrondi = arrondir_decimales(&nettoye, decimales);

    rendre(&arrondi, decimales, options.separateur_milliers)
}

/* ------------------------ Lecture décimale exacte ------------------------ */

fn pow10(n: u32) -> BigInt {
    BigInt::from(10).pow(n)
}

/// r * 10^k (k signé), exact.
fn decaler(r: &BigRational, k: i64) -> BigRational {
    let p = BigRational::from_integer(pow10(k.unsigned_abs() as u32));
    if k >= 0 {
        r * p
    } else {
        r / p
    }
}

/// "-1,234.5e-3" -> rationnel exact. None si le texte n’est pas un nombre décimal.
fn lire_decimal(s: &str) -> Option<BigRational> {
    let (negatif, corps) = match s.strip_prefix('-') {
        Some(reste) => (true, reste),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };

    let (mantisse, exposant) = match corps.split_once(|c: char| c == 'e' || c == 'E') {
        Some((m, e)) => (m, e.parse::<i64>().ok()?),
        None => (corps, 0),
    };
    if exposant.abs() > EXPOSANT_MAX {
        return None;
    }

    let (entier, fraction) = mantisse.split_once('.').unwrap_or((mantisse, ""));
    let entier = retirer_groupes(entier)?;
    if entier.is_empty() && fraction.is_empty() {
        return None;
    }
    if !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let chiffres = format!("{entier}{fraction}");
    let mut n = BigInt::parse_bytes(chiffres.as_bytes(), 10)?;
    if negatif {
        n = -n;
    }

    Some(decaler(
        &BigRational::from_integer(n),
        exposant - fraction.len() as i64,
    ))
}

/* ------------------------ Arrondis ------------------------ */

fn nb_chiffres(n: &BigInt) -> i64 {
    n.magnitude().to_string().len() as i64
}

/// floor(log10(a)) pour a > 0 : 10^ordre <= a < 10^(ordre+1).
fn ordre_de_grandeur(a: &BigRational) -> i64 {
    let mut ordre = nb_chiffres(a.numer()) - nb_chiffres(a.denom());
    let un = BigRational::one();

    while decaler(&un, ordre) > *a {
        ordre -= 1;
    }
    while decaler(&un, ordre + 1) <= *a {
        ordre += 1;
    }
    ordre
}

/// Arrondi à `chiffres` significatifs (demi vers l’extérieur).
fn arrondir_significatif(x: &BigRational, chiffres: usize) -> BigRational {
    if x.is_zero() {
        return x.clone();
    }
    let ordre = ordre_de_grandeur(&x.abs());
    let echelle = chiffres as i64 - 1 - ordre;
    decaler(&decaler(x, echelle).round(), -echelle)
}

/// Arrondi à `decimales` chiffres après la virgule (demi vers l’extérieur).
fn arrondir_decimales(x: &BigRational, decimales: usize) -> BigRational {
    let k = decimales as i64;
    decaler(&decaler(x, k).round(), -k)
}

/* ------------------------ Rendu ------------------------ */

/// "1234567" -> "1,234,567"
fn grouper(chiffres: &str, separateur: Option<char>) -> String {
    let Some(sep) = separateur else {
        return chiffres.to_string();
    };

    let n = chiffres.len();
    let mut out = String::with_capacity(n + n / 3);
    for (k, c) in chiffres.chars().enumerate() {
        if k > 0 && (n - k) % 3 == 0 {
            out.push(sep);
        }
        out.push(c);
    }
    out
}

/// Rendu d’un rationnel ayant au plus `decimales` décimales.
fn rendre(x: &BigRational, decimales: usize, separateur: Option<char>) -> String {
    let a = x.abs();
    let entier = a.trunc();
    let fraction = ((&a - &entier) * BigRational::from_integer(pow10(decimales as u32))).to_integer();

    let mut out = String::new();
    if x.is_negative() {
        out.push('-');
    }
    out.push_str(&grouper(&entier.to_integer().to_string(), separateur));

    if !fraction.is_zero() {
        let brut = fraction.to_string();
        let complet = format!("{}{brut}", "0".repeat(decimales.saturating_sub(brut.len())));
        out.push('.');
        out.push_str(complet.trim_end_matches('0'));
    }

    out
}
