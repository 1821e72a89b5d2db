// src/noyau/calculatrice.rs
//
// Calculatrice = Éditeur + état d’écran + aiguillage des touches.
//
// Machine d’état du calcul ("=") :
//   Saisie --=--> Resultat(texte)   (séquence remplacée par un Nombre = résultat)
//   Saisie --=--> Erreur            (séquence CONSERVÉE pour correction)
//   Resultat / Erreur --toute autre touche--> Saisie
//
// Touche inconnue : ignorée (aucun changement d’état).
//
// La démarche n’est remplie que si l’hôte la suit (panneau ouvert).

use log::{debug, info, warn};

use super::edition::Editeur;
use super::erreur::AFFICHAGE_ERREUR;
use super::eval::{evaluer, evaluer_avec_demarche, Demarche};
use super::format::format_resultat;
use super::lineaire::lineaire;
use super::mise::{mise_en_page, mise_en_page_avec_curseur, rendu_html, Mise};
use super::modele::{Fonction, Jeton, Operateur, Parenthese};

/// Écran principal quand la séquence est vide.
pub const AFFICHAGE_VIDE: &str = "0";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    Chiffre(char),
    Operateur(Operateur),
    Fonction(Fonction),
    Parenthese(Parenthese),
    Racine,
    Puissance,
    Fraction,
    ToutEffacer,
    Effacer,
    Egal,
    Gauche,
    Droite,
}

impl Touche {
    /// Identifiant de touche (bouton ou clavier) -> Touche. None si inconnu.
    pub fn depuis(cle: &str) -> Option<Self> {
        let mut chars = cle.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if c.is_ascii_digit() || c == '.' {
                return Some(Self::Chiffre(c));
            }
        }

        if let Some(op) = Operateur::depuis_symbole(cle) {
            return Some(Self::Operateur(op));
        }
        if let Some(f) = Fonction::depuis_nom(cle) {
            return Some(Self::Fonction(f));
        }

        match cle {
            "(" => Some(Self::Parenthese(Parenthese::Ouvrante)),
            ")" => Some(Self::Parenthese(Parenthese::Fermante)),
            "√" => Some(Self::Racine),
            "pow" | "x^" => Some(Self::Puissance),
            "frac" => Some(Self::Fraction),
            "AC" => Some(Self::ToutEffacer),
            "DEL" => Some(Self::Effacer),
            "=" => Some(Self::Egal),
            "LEFT" | "←" => Some(Self::Gauche),
            "RIGHT" | "→" => Some(Self::Droite),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum Ecran {
    #[default]
    Saisie,
    Resultat(String),
    Erreur,
}

/// Les deux textes à afficher tels quels par l’hôte.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Affichage {
    pub principal: String,
    pub secondaire: String,
}

#[derive(Clone, Debug, Default)]
pub struct Calculatrice {
    editeur: Editeur,
    ecran: Ecran,
    demarche: Demarche,
    suivre_demarche: bool,
}

impl Calculatrice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn editeur(&self) -> &Editeur {
        &self.editeur
    }

    pub fn ecran(&self) -> &Ecran {
        &self.ecran
    }

    /// Démarche du dernier calcul (vide si elle n’était pas suivie).
    pub fn demarche(&self) -> &Demarche {
        &self.demarche
    }

    pub fn suivre_demarche(&mut self, oui: bool) {
        self.suivre_demarche = oui;
    }

    /// Entrée brute de l’hôte. false si la touche est inconnue (ignorée).
    pub fn appuyer(&mut self, cle: &str) -> bool {
        match Touche::depuis(cle) {
            Some(t) => {
                self.appuyer_touche(t);
                true
            }
            None => {
                debug!("touche ignorée: {cle:?}");
                false
            }
        }
    }

    pub fn appuyer_touche(&mut self, touche: Touche) {
        if touche == Touche::Egal {
            self.calculer();
            return;
        }

        self.ecran = Ecran::Saisie;

        match touche {
            Touche::Chiffre(c) => {
                if let Some(j) = Jeton::chiffre(c) {
                    self.editeur.inserer(j);
                }
            }
            Touche::Operateur(op) => self.editeur.inserer(Jeton::Operateur(op)),
            Touche::Fonction(f) => self.editeur.inserer(Jeton::Fonction(f)),
            Touche::Parenthese(p) => self.editeur.inserer(Jeton::Parenthese(p)),
            Touche::Racine => self.editeur.inserer(Jeton::racine(Vec::new())),
            Touche::Puissance => self.editeur.inserer(Jeton::puissance_vide()),
            Touche::Fraction => self
                .editeur
                .inserer(Jeton::fraction(Vec::new(), Vec::new())),
            Touche::ToutEffacer => self.editeur.reinitialiser(),
            Touche::Effacer => {
                if let Some(j) = self.editeur.effacer_avant_curseur() {
                    debug!("DEL: {j:?}");
                }
            }
            Touche::Gauche => {
                self.editeur.curseur_gauche();
            }
            Touche::Droite => {
                self.editeur.curseur_droite();
            }
            Touche::Egal => {}
        }
    }

    /// "=" : évalue ; succès => le résultat devient l’amorce de la suite.
    fn calculer(&mut self) {
        let res = if self.suivre_demarche {
            let (res, demarche) = evaluer_avec_demarche(self.editeur.jetons());
            self.demarche = demarche;
            res
        } else {
            self.demarche = Demarche::default();
            evaluer(self.editeur.jetons())
        };

        match res {
            Ok(v) => {
                let texte = format_resultat(v);
                info!("calcul: {} = {texte}", self.lineaire());
                self.editeur.remplacer_par_nombre(texte.clone());
                self.ecran = Ecran::Resultat(texte);
            }
            Err(e) => {
                warn!("calcul impossible ({:?}): {e}", self.lineaire());
                self.ecran = Ecran::Erreur;
            }
        }
    }

    /// Arbre de mise en page de la saisie courante (avec curseur).
    pub fn mise(&self) -> Vec<Mise> {
        mise_en_page_avec_curseur(self.editeur.jetons(), self.editeur.curseur())
    }

    /// Forme linéaire de la saisie courante.
    pub fn lineaire(&self) -> String {
        lineaire(self.editeur.jetons())
    }

    pub fn affichage(&self) -> Affichage {
        match &self.ecran {
            Ecran::Saisie => {
                let principal = if self.editeur.is_empty() {
                    AFFICHAGE_VIDE.to_string()
                } else {
                    rendu_html(&mise_en_page(self.editeur.jetons()))
                };
                Affichage {
                    principal,
                    secondaire: self.lineaire(),
                }
            }
            Ecran::Resultat(texte) => Affichage {
                principal: texte.clone(),
                secondaire: String::new(),
            },
            Ecran::Erreur => Affichage {
                principal: AFFICHAGE_ERREUR.to_string(),
                secondaire: String::new(),
            },
        }
    }
}
