// src/app.rs
//
// Calculatrice Math — module App (racine)
// ---------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
// - Traduire le clavier physique en identifiants de touche (même chemin que les boutons)

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

/// Caractères tapés acceptés tels quels comme touches ("*" et "/" compris).
const CARACTERES_TOUCHES: &str = "0123456789.+-*/^()=";

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ESC = AC (comme le bouton)
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.reset_total();
        }

        let touches = ctx.input(touches_clavier);
        for cle in touches {
            self.appuyer(&cle);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}

fn touches_clavier(i: &egui::InputState) -> Vec<String> {
    let mut out = Vec::new();

    for ev in &i.events {
        match ev {
            egui::Event::Text(t) => {
                out.extend(
                    t.chars()
                        .filter(|c| CARACTERES_TOUCHES.contains(*c))
                        .map(|c| c.to_string()),
                );
            }
            egui::Event::Key {
                key, pressed: true, ..
            } => {
                let cle = match key {
                    egui::Key::Enter => "=",
                    egui::Key::Backspace => "DEL",
                    egui::Key::ArrowLeft => "LEFT",
                    egui::Key::ArrowRight => "RIGHT",
                    _ => continue,
                };
                out.push(cle.to_string());
            }
            _ => {}
        }
    }

    out
}
