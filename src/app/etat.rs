//! src/app/etat.rs
//!
//! État UI (sans dessin).
//!
//! Rôle : posséder la Calculatrice (noyau) et les réglages d’affichage, et
//! relayer les touches. Aucune évaluation ici : tout passe par le noyau.

use crate::noyau::Calculatrice;

#[derive(Clone, Debug)]
pub struct AppCalc {
    pub calc: Calculatrice,

    // --- UX ---
    pub afficher_demarche: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            calc: Calculatrice::new(),
            afficher_demarche: false,
        }
    }
}

impl AppCalc {
    /// Touche venant d’un bouton ou du clavier physique.
    pub fn appuyer(&mut self, cle: &str) {
        self.calc.appuyer(cle);
    }

    /// Case “Démarche” : le noyau ne trace le calcul que si elle est cochée.
    pub fn regler_demarche(&mut self, oui: bool) {
        self.afficher_demarche = oui;
        self.calc.suivre_demarche(oui);
    }

    /// AC (aussi sur Échap).
    pub fn reset_total(&mut self) {
        self.calc.appuyer("AC");
    }
}
