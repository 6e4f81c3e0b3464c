// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Affichage : expression validée, valeur courante, mode DEG/RAD
// - Boutons décrits par (libellé, type, contenu) et envoyés par l’API texte
// - Historique repliable, vidable
//
// Note :
// - Le clavier est géré dans app.rs (événements globaux), pas ici.

use eframe::egui;

use super::etat::AppCalc;

/// Ligne de fonctions : (libellé, type, contenu).
const FONCTIONS: [(&str, &str, Option<&str>); 10] = [
    ("sin", "FUNCTION", Some("sin")),
    ("cos", "FUNCTION", Some("cos")),
    ("tan", "FUNCTION", Some("tan")),
    ("asin", "FUNCTION", Some("asin")),
    ("acos", "FUNCTION", Some("acos")),
    ("atan", "FUNCTION", Some("atan")),
    ("ln", "FUNCTION", Some("ln")),
    ("log", "FUNCTION", Some("log")),
    ("√", "FUNCTION", Some("sqrt")),
    ("x²", "FUNCTION", Some("^2")),
];

/// Pavé principal, 4 colonnes.
const PAVE: [[(&str, &str, Option<&str>); 4]; 6] = [
    [
        ("C", "CLEAR", None),
        ("( )", "PAREN_TOGGLE", None),
        ("%", "OPERATOR", Some("%")),
        ("⌫", "DELETE", None),
    ],
    [
        ("π", "NUMBER", Some("pi")),
        ("e", "NUMBER", Some("e")),
        ("^", "OPERATOR", Some("^")),
        ("/", "OPERATOR", Some("/")),
    ],
    [
        ("7", "NUMBER", Some("7")),
        ("8", "NUMBER", Some("8")),
        ("9", "NUMBER", Some("9")),
        ("*", "OPERATOR", Some("*")),
    ],
    [
        ("4", "NUMBER", Some("4")),
        ("5", "NUMBER", Some("5")),
        ("6", "NUMBER", Some("6")),
        ("-", "OPERATOR", Some("-")),
    ],
    [
        ("1", "NUMBER", Some("1")),
        ("2", "NUMBER", Some("2")),
        ("3", "NUMBER", Some("3")),
        ("+", "OPERATOR", Some("+")),
    ],
    [
        ("0", "NUMBER", Some("0")),
        (".", "DECIMAL", None),
        ("DEG/RAD", "TOGGLE_ANGLE", None),
        ("=", "EQUALS", None),
    ],
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice scientifique");
                ui.add_space(6.0);

                self.ui_affichage(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_fonctions(ui);
                ui.add_space(6.0);
                self.ui_pave(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_historique(ui);
            });
    }

    fn ui_affichage(&mut self, ui: &mut egui::Ui) {
        let apercu = self.session.apercu();
        let en_erreur = self.session.en_erreur();

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());

                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(apercu.mode_angle.etiquette()).strong());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.monospace(&apercu.expression);
                    });
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let valeur = egui::RichText::new(&apercu.valeur).monospace().size(30.0);
                    if en_erreur {
                        ui.label(valeur.color(ui.visuals().error_fg_color));
                    } else {
                        ui.label(valeur);
                    }
                });
            });
    }

    fn ui_fonctions(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            for (libelle, type_entree, contenu) in FONCTIONS {
                self.bouton(ui, libelle, type_entree, contenu, [52.0, 28.0]);
            }
        });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_scientifique")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in PAVE {
                    for (libelle, type_entree, contenu) in ligne {
                        self.bouton(ui, libelle, type_entree, contenu, [72.0, 36.0]);
                    }
                    ui.end_row();
                }
            });
    }

    fn ui_historique(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Historique")
            .default_open(true)
            .show(ui, |ui| {
                if self.session.historique().is_empty() {
                    ui.weak("(vide)");
                    return;
                }

                // plus récent en haut
                for ligne in self.session.historique().iter().rev() {
                    ui.monospace(ligne);
                }

                ui.add_space(4.0);
                if ui.button("Vider l’historique").clicked() {
                    self.effacer_historique();
                }
            });
    }

    fn bouton(
        &mut self,
        ui: &mut egui::Ui,
        libelle: &str,
        type_entree: &str,
        contenu: Option<&str>,
        taille: [f32; 2],
    ) {
        if ui.add_sized(taille, egui::Button::new(libelle)).clicked() {
            self.envoyer_api(type_entree, contenu);
        }
    }
}
