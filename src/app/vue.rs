// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Écran principal : dessin 2D de l’arbre Mise (fraction empilée, radical
//   surligné, exposant surélevé) ; "0" si vide ; résultat ou "Error" après "="
// - Écran secondaire : forme linéaire
// - Pavé façon calculatrice scientifique (chaque bouton = un identifiant de touche)

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::calculatrice::AFFICHAGE_VIDE;
use crate::noyau::erreur::AFFICHAGE_ERREUR;
use crate::noyau::{Ecran, Mise};

const TAILLE_TEXTE: f32 = 26.0;
const TAILLE_EXPOSANT: f32 = 16.0;
const TAILLE_BOUTON: [f32; 2] = [58.0, 38.0];

/// (libellé, identifiant de touche)
const PAVE: [[(&str, &str); 6]; 6] = [
    [
        ("sin", "sin"),
        ("cos", "cos"),
        ("tan", "tan"),
        ("ln", "ln"),
        ("log", "log"),
        ("√", "√"),
    ],
    [
        ("x□", "pow"),
        ("^", "^"),
        ("▭/▭", "frac"),
        ("(", "("),
        (")", ")"),
        ("◀", "LEFT"),
    ],
    [
        ("7", "7"),
        ("8", "8"),
        ("9", "9"),
        ("DEL", "DEL"),
        ("AC", "AC"),
        ("▶", "RIGHT"),
    ],
    [
        ("4", "4"),
        ("5", "5"),
        ("6", "6"),
        ("×", "×"),
        ("÷", "÷"),
        ("", ""),
    ],
    [
        ("1", "1"),
        ("2", "2"),
        ("3", "3"),
        ("+", "+"),
        ("-", "-"),
        ("", ""),
    ],
    [
        ("0", "0"),
        (".", "."),
        ("", ""),
        ("", ""),
        ("=", "="),
        ("", ""),
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
                ui.heading("Calculatrice Math");
                ui.add_space(6.0);

                self.ui_ecrans(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_pave(ui);

                ui.add_space(8.0);
                ui.separator();

                self.ui_demarche(ui);
            });
    }

    fn ui_ecrans(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.set_min_height(3.0 * TAILLE_TEXTE);

                match self.calc.ecran() {
                    Ecran::Saisie if self.calc.editeur().is_empty() => {
                        texte(ui, AFFICHAGE_VIDE, TAILLE_TEXTE);
                    }
                    Ecran::Saisie => {
                        let mise = self.calc.mise();
                        ui.horizontal_centered(|ui| dessiner(ui, &mise, TAILLE_TEXTE));
                    }
                    Ecran::Resultat(r) => texte(ui, r, TAILLE_TEXTE),
                    Ecran::Erreur => {
                        ui.colored_label(
                            ui.visuals().error_fg_color,
                            egui::RichText::new(AFFICHAGE_ERREUR)
                                .monospace()
                                .size(TAILLE_TEXTE),
                        );
                    }
                }
            });

        ui.add_space(4.0);

        let secondaire = self.calc.affichage().secondaire;
        ui.monospace(secondaire);
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_math")
            .num_columns(6)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for rangee in PAVE {
                    for (libelle, cle) in rangee {
                        if cle.is_empty() {
                            ui.label("");
                            continue;
                        }
                        let resp = ui.add_sized(TAILLE_BOUTON, egui::Button::new(libelle));
                        if resp.clicked() {
                            self.appuyer(cle);
                        }
                    }
                    ui.end_row();
                }
            });
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        let mut oui = self.afficher_demarche;
        if ui.checkbox(&mut oui, "Démarche").changed() {
            self.regler_demarche(oui);
        }
        if !self.afficher_demarche {
            return;
        }

        // remplie au prochain "="
        let d = self.calc.demarche();
        ui.group(|ui| {
            champ(ui, "Linéaire", &d.lineaire);
            champ(ui, "Hôte", &d.hote);
            champ(ui, "Jetons", &d.jetons);
            champ(ui, "RPN", &d.rpn);
            champ(ui, "Arbre", &d.arbre);
            champ(ui, "Note", &d.note);
        });
    }
}

fn champ(ui: &mut egui::Ui, titre: &str, contenu: &str) {
    ui.horizontal(|ui| {
        ui.label(format!("{titre} :"));
        ui.monospace(contenu);
    });
}

fn texte(ui: &mut egui::Ui, s: &str, taille: f32) {
    ui.label(egui::RichText::new(s).monospace().size(taille));
}

/// Dessin récursif de l’arbre de mise en page (une rangée horizontale).
fn dessiner(ui: &mut egui::Ui, mise: &[Mise], taille: f32) {
    for m in mise {
        match m {
            Mise::Texte(s) => texte(ui, s, taille),

            Mise::Fraction { haut, bas } => {
                ui.vertical(|ui| {
                    let h = ui.horizontal(|ui| dessiner(ui, haut, taille)).response.rect;
                    ui.add_space(4.0);
                    let b = ui.horizontal(|ui| dessiner(ui, bas, taille)).response.rect;

                    // barre de fraction : au moins une case de large, même vide
                    let x0 = h.left().min(b.left());
                    let x1 = h.right().max(b.right()).max(x0 + 0.6 * taille);
                    let y = (h.bottom() + b.top()) / 2.0;
                    let couleur = ui.visuals().text_color();
                    ui.painter().hline(
                        egui::Rangef::new(x0, x1),
                        y,
                        egui::Stroke::new(1.5, couleur),
                    );
                });
            }

            Mise::Racine(radicande) => {
                texte(ui, "√", taille);
                let r = ui.horizontal(|ui| dessiner(ui, radicande, taille)).response.rect;
                // barre du radical au-dessus du radicande
                let couleur = ui.visuals().text_color();
                ui.painter()
                    .hline(r.x_range(), r.top(), egui::Stroke::new(1.5, couleur));
            }

            Mise::Puissance { base, exposant } => {
                ui.horizontal(|ui| dessiner(ui, base, taille));
                ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                    ui.horizontal(|ui| dessiner(ui, exposant, TAILLE_EXPOSANT.min(taille)));
                });
            }

            Mise::Curseur => {
                ui.label(
                    egui::RichText::new("|")
                        .size(taille)
                        .color(ui.visuals().selection.stroke.color),
                );
            }
        }
    }
}
