// src/noyau/edition.rs
//
// Éditeur de séquence : la seule donnée mutable du noyau.
//
// Contrats :
// - 0 <= curseur <= len, toujours.
// - curseur = "insérer AVANT cette position".
// - Seule la séquence de premier niveau est adressable ; les enfants d’une
//   fraction/racine/puissance sont remplis à la création, jamais édités ici.
// - Toutes les opérations sont totales (aucune ne peut échouer).

use super::modele::Jeton;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Editeur {
    jetons: Vec<Jeton>,
    curseur: usize,
}

impl Editeur {
    pub fn jetons(&self) -> &[Jeton] {
        &self.jetons
    }

    pub fn curseur(&self) -> usize {
        self.curseur
    }

    pub fn len(&self) -> usize {
        self.jetons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jetons.is_empty()
    }

    /// Insère juste avant le curseur, puis avance le curseur.
    pub fn inserer(&mut self, jeton: Jeton) {
        self.jetons.insert(self.curseur, jeton);
        self.curseur += 1;
    }

    /// DEL : retire le jeton avant le curseur (un composite part en entier).
    /// Sans effet si le curseur est en tête.
    pub fn effacer_avant_curseur(&mut self) -> Option<Jeton> {
        if self.curseur == 0 {
            return None;
        }
        self.curseur -= 1;
        Some(self.jetons.remove(self.curseur))
    }

    /// AC : séquence vide, curseur en tête.
    pub fn reinitialiser(&mut self) {
        self.jetons.clear();
        self.curseur = 0;
    }

    /// Après un calcul réussi : le résultat devient l’amorce de l’expression suivante.
    pub fn remplacer_par_nombre(&mut self, texte: impl Into<String>) {
        self.jetons.clear();
        self.jetons.push(Jeton::Nombre(texte.into()));
        self.curseur = 1;
    }

    /// Flèche gauche (premier niveau seulement). false si déjà en tête.
    pub fn curseur_gauche(&mut self) -> bool {
        if self.curseur == 0 {
            return false;
        }
        self.curseur -= 1;
        true
    }

    /// Flèche droite (premier niveau seulement). false si déjà en fin.
    pub fn curseur_droite(&mut self) -> bool {
        if self.curseur >= self.len() {
            return false;
        }
        self.curseur += 1;
        true
    }
}
