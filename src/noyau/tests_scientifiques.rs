//! Tests scientifiques (campagne) : identités + affichage + parcours complets.
//!
//! But : vérifier les propriétés de bout en bout sans faire chauffer la machine.
//! - budget temps global
//! - comparaisons numériques avec tolérance (le flottant n’est jamais exact)
//! - parcours "touche par touche" via l’API texte de la session

use std::time::{Duration, Instant};

use super::erreur::GenreErreur;
use super::eval::evaluer;
use super::fonctions::ModeAngle;
use super::format::formater_resultat;
use super::validation::peut_ajouter;
use super::Session;

const DEG: ModeAngle = ModeAngle::Degres;
const RAD: ModeAngle = ModeAngle::Radians;

const EPS: f64 = 1e-9;

fn eval_ok(expr: &str, mode: ModeAngle) -> f64 {
    evaluer(expr, mode).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn assert_proche(expr: &str, mode: ModeAngle, attendu: f64) {
    let v = eval_ok(expr, mode);
    assert!(
        (v - attendu).abs() < EPS,
        "expr={expr:?} ({mode}) = {v}, attendu ≈ {attendu}"
    );
}

/// Affichage final d’une expression (comme après "=").
fn affiche(expr: &str, mode: ModeAngle) -> String {
    formater_resultat(&super::eval::serialiser(eval_ok(expr, mode)))
}

/// Rejoue une suite d’événements (type, contenu) sur une session neuve.
fn rejouer(mode: ModeAngle, evenements: &[(&str, Option<&str>)]) -> Session {
    let mut s = Session::default();
    if mode == RAD {
        s = s.appliquer(&super::Entree::BasculerAngle);
    }
    for (t, c) in evenements {
        s = s
            .traiter_entree(t, *c)
            .unwrap_or_else(|e| panic!("événement {t:?} refusé: {e}"));
    }
    s
}

/// Budget global anti-gel (scientifique + safe).
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Identités trig (deux modes) ------------------------ */

#[test]
fn sci_sin_30_degres_egal_sin_pi_sur_6_radians() {
    let deg = eval_ok("sin(30)", DEG);
    let rad = eval_ok("sin(pi/6)", RAD);
    assert!((deg - rad).abs() < EPS);
    assert!((deg - 0.5).abs() < EPS);

    // même valeur à l’affichage
    assert_eq!(affiche("sin(30)", DEG), "0.5");
    assert_eq!(affiche("sin(pi/6)", RAD), "0.5");
}

#[test]
fn sci_inverses_en_degres() {
    assert_proche("asin(0.5)", DEG, 30.0);
    assert_proche("acos(0.5)", DEG, 60.0);
    assert_proche("atan(1)", DEG, 45.0);

    assert_eq!(affiche("asin(0.5)", DEG), "30");
    assert_eq!(affiche("acos(0.5)", DEG), "60");
}

#[test]
fn sci_aller_retour_trig() {
    for angle in [0.0_f64, 10.0, 30.0, 45.0, 60.0, 89.0] {
        assert_proche(&format!("asin(sin({angle}))"), DEG, angle);
        assert_proche(&format!("acos(cos({angle}))"), DEG, angle);
    }
}

#[test]
fn sci_pythagore_trig() {
    for angle in ["0", "17", "30", "123.5", "-250"] {
        assert_proche(&format!("sin({angle})^2 + cos({angle})^2"), DEG, 1.0);
        assert_proche(&format!("sin({angle})^2 + cos({angle})^2"), RAD, 1.0);
    }
}

#[test]
fn sci_symetries() {
    assert_proche("sin(-30) + sin(30)", DEG, 0.0);
    assert_proche("cos(-60) - cos(60)", DEG, 0.0);
    assert_proche("tan(-pi/3) + tan(pi/3)", RAD, 0.0);
}

#[test]
fn sci_residus_trig_affiches_zero() {
    // cos(90°) ≈ 6e-17 : l’affichage doit montrer 0, pas un résidu ni "-0"
    assert_eq!(affiche("cos(90)", DEG), "0");
    assert_eq!(affiche("sin(180)", DEG), "0");
    assert_eq!(affiche("sin(pi)", RAD), "0");
}

/* ------------------------ Logarithmes ------------------------ */

#[test]
fn sci_log_et_ln() {
    assert_eq!(affiche("log(100)", DEG), "2");
    assert_eq!(affiche("ln(e)", DEG), "1");
    assert_proche("log(10^7)", DEG, 7.0);
    assert_proche("ln(e^3)", RAD, 3.0);

    // le mode d’angle n’a aucun effet hors trig
    assert_eq!(eval_ok("ln(5)", DEG), eval_ok("ln(5)", RAD));
    assert_eq!(eval_ok("sqrt(2)", DEG), eval_ok("sqrt(2)", RAD));
}

#[test]
fn sci_produit_log() {
    // log(a*b) = log(a) + log(b)
    for (a, b) in [(2.0, 5.0), (3.5, 7.25), (1e3, 1e-2)] {
        let gauche = eval_ok(&format!("log({a}*{b})"), DEG);
        let droite = eval_ok(&format!("log({a}) + log({b})"), DEG);
        assert!((gauche - droite).abs() < EPS, "a={a} b={b}");
    }
}

/* ------------------------ Domaine ------------------------ */

#[test]
fn sci_hors_domaine() {
    for expr in ["ln(0)", "ln(-1)", "log(0)", "sqrt(-1)", "asin(1.0001)", "acos(-2)", "1/0", "7%0"] {
        let e = evaluer(expr, DEG).expect_err(expr);
        assert_eq!(e.genre(), GenreErreur::Domaine, "expr={expr:?}");
    }
}

#[test]
fn sci_debordement_non_fini() {
    // 10^400 déborde : refusé plutôt qu’affiché "inf"
    let e = evaluer("10^400", DEG).expect_err("10^400");
    assert_eq!(e.genre(), GenreErreur::Domaine);
}

/* ------------------------ Formateur ------------------------ */

#[test]
fn sci_formateur_exemples() {
    assert_eq!(formater_resultat("1000"), "1,000");
    assert_eq!(formater_resultat("0.4999999999999999"), "0.5");
    assert_eq!(formater_resultat("3.14159265358979"), "3.1415926536");
    assert_eq!(formater_resultat("Error"), "Error");
    assert_eq!(formater_resultat(""), "");
}

#[test]
fn sci_formateur_idempotent_sur_resultats() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    for expr in ["1/3", "2/3", "1e6/7", "pi*1000", "sqrt(2)", "-e^10", "0.1+0.2", "2^40"] {
        budget(t0, max);
        let une = affiche(expr, RAD);
        assert_eq!(formater_resultat(&une), une, "expr={expr:?}");
    }
}

/* ------------------------ Validateur ------------------------ */

#[test]
fn sci_validateur() {
    assert!(!peut_ajouter("12.3", "."));
    assert!(!peut_ajouter("12+", "+"));
    assert!(peut_ajouter("12", "+"));
    assert!(peut_ajouter("12+3", "."));
}

/* ------------------------ Parcours complets (session) ------------------------ */

#[test]
fn sci_parcours_addition() {
    let s = rejouer(
        DEG,
        &[
            ("NUMBER", Some("5")),
            ("OPERATOR", Some("+")),
            ("NUMBER", Some("3")),
            ("EQUALS", None),
        ],
    );
    assert_eq!(s.apercu().valeur, "8");
    assert_eq!(s.apercu().expression, "5+3 =");
    assert_eq!(s.historique(), ["5+3 = 8"]);
}

#[test]
fn sci_parcours_sinus_degres() {
    let s = rejouer(
        DEG,
        &[
            ("FUNCTION", Some("sin")),
            ("NUMBER", Some("3")),
            ("NUMBER", Some("0")),
            ("PAREN_TOGGLE", None),
            ("EQUALS", None),
        ],
    );
    assert_eq!(s.apercu().valeur, "0.5");
    assert_eq!(s.historique(), ["sin(30) = 0.5"]);
}

#[test]
fn sci_parcours_division_par_zero_puis_clear() {
    let s = rejouer(
        DEG,
        &[
            ("NUMBER", Some("5")),
            ("OPERATOR", Some("/")),
            ("NUMBER", Some("0")),
            ("EQUALS", None),
        ],
    );
    assert_eq!(s.apercu().valeur, "Error");
    assert!(s.en_erreur());
    assert!(s.historique().is_empty());

    let s = s.traiter_entree("CLEAR", None).unwrap();
    assert_eq!(s.apercu().valeur, "0");
    assert!(!s.en_erreur());
}

#[test]
fn sci_parcours_continuation_et_nouveau_depart() {
    let s = rejouer(
        DEG,
        &[
            ("NUMBER", Some("4")),
            ("OPERATOR", Some("*")),
            ("NUMBER", Some("5")),
            ("EQUALS", None),
            ("OPERATOR", Some("-")),
            ("NUMBER", Some("2")),
            ("EQUALS", None),
        ],
    );
    assert_eq!(s.apercu().valeur, "18");
    assert_eq!(s.historique(), ["4*5 = 20", "20-2 = 18"]);

    // chiffre après "=" : nouveau départ, historique conservé
    let s = s.traiter_entree("NUMBER", Some("9")).unwrap();
    assert_eq!(s.apercu().valeur, "9");
    assert_eq!(s.apercu().expression, "");
    assert_eq!(s.historique().len(), 2);
}

#[test]
fn sci_parcours_radians_pi() {
    let s = rejouer(
        RAD,
        &[
            ("FUNCTION", Some("cos")),
            ("NUMBER", Some("pi")),
            ("PAREN_TOGGLE", None),
            ("EQUALS", None),
        ],
    );
    assert_eq!(s.apercu().mode_angle, RAD);
    assert_eq!(s.apercu().valeur, "-1");
}

#[test]
fn sci_parcours_clear_conserve_mode_et_historique() {
    let s = rejouer(
        RAD,
        &[
            ("NUMBER", Some("2")),
            ("OPERATOR", Some("^")),
            ("NUMBER", Some("1")),
            ("NUMBER", Some("0")),
            ("EQUALS", None),
            ("CLEAR", None),
        ],
    );
    assert_eq!(s.apercu().valeur, "0");
    assert_eq!(s.apercu().expression, "");
    assert_eq!(s.apercu().mode_angle, RAD);
    assert_eq!(s.historique(), ["2^10 = 1,024"]);
}

#[test]
fn sci_longue_session_sous_budget() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    // 1+1=, +1=, +1=, ... : chaque "=" alimente le suivant
    let mut s = rejouer(
        DEG,
        &[("NUMBER", Some("1")), ("OPERATOR", Some("+")), ("NUMBER", Some("1")), ("EQUALS", None)],
    );
    for _ in 0..200 {
        budget(t0, max);
        s = s.traiter_entree("OPERATOR", Some("+")).unwrap();
        s = s.traiter_entree("NUMBER", Some("1")).unwrap();
        s = s.traiter_entree("EQUALS", None).unwrap();
    }
    assert_eq!(s.apercu().valeur, "202");
    assert_eq!(s.historique().len(), 201);
}
