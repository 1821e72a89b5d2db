//! Noyau de saisie mathématique
//!
//! Organisation interne :
//! - modele.rs       : Jeton (saisie arborescente : fraction, racine, puissance)
//! - edition.rs      : Editeur (séquence + curseur)
//! - mise.rs         : mise en page 2D (arbre Mise + rendu HTML)
//! - lineaire.rs     : forme linéaire (affichage secondaire + entrée du calcul)
//! - jetons.rs       : lecture du texte hôte (littéraux exacts -> f64)
//! - rpn.rs          : shunting-yard + construction Expr
//! - expr.rs         : AST typé + évaluation f64
//! - eval.rs         : pipeline complet + démarche
//! - format.rs       : affichage du résultat
//! - erreur.rs       : ErreurCalcul (marqueur d’erreur)
//! - calculatrice.rs : touches + machine d’état du calcul

pub mod calculatrice;
pub mod edition;
pub mod erreur;
pub mod eval;
pub mod expr;
pub mod format;
pub mod jetons;
pub mod lineaire;
pub mod mise;
pub mod modele;
pub mod rpn;

#[cfg(test)]
mod tests_proprietes;


// Ce dont app/ a besoin
pub use calculatrice::{Calculatrice, Ecran};
pub use mise::Mise;
