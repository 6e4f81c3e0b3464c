// src/app.rs
//
// Calculatrice scientifique — module App (racine)
// -----------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Clavier : chiffres, opérateurs, ( ) . = Enter Backspace Escape.
// Tout passe par Entree::depuis_touche, puis par la session.

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use crate::noyau::Entree;

/// Événements clavier de la frame -> entrées de session (dans l’ordre).
fn entrees_clavier(ctx: &egui::Context) -> Vec<Entree> {
    ctx.input(|i| {
        let mut out = Vec::new();
        for ev in &i.events {
            match ev {
                egui::Event::Text(texte) => {
                    let mut tampon = [0u8; 4];
                    for c in texte.chars() {
                        out.extend(Entree::depuis_touche(c.encode_utf8(&mut tampon)));
                    }
                }
                egui::Event::Key {
                    key,
                    pressed: true,
                    ..
                } => {
                    let nom = match key {
                        egui::Key::Enter => "Enter",
                        egui::Key::Backspace => "Backspace",
                        egui::Key::Escape => "Escape",
                        _ => continue,
                    };
                    out.extend(Entree::depuis_touche(nom));
                }
                _ => {}
            }
        }
        out
    })
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for entree in entrees_clavier(ctx) {
            log::trace!("clavier: {entree:?}");
            self.envoyer(&entree);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
