// src/noyau/erreur.rs
//
// Marqueur d’erreur du calcul. Tout échec (lecture, syntaxe, NaN) s’arrête à
// la frontière de l’évaluateur sous cette forme ; l’écran affiche "Error".

use thiserror::Error;

/// Texte affiché à l’écran pour toute erreur de calcul.
pub const AFFICHAGE_ERREUR: &str = "Error";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurCalcul {
    #[error("entrée vide")]
    Vide,

    #[error("caractère inattendu: '{0}'")]
    Caractere(char),

    #[error("nombre invalide: {0}")]
    NombreInvalide(String),

    #[error("parenthèses non fermées")]
    ParentheseNonFermee,

    #[error("parenthèse fermante sans ouvrante")]
    ParentheseEnTrop,

    #[error("fonction inconnue: {0}")]
    FonctionInconnue(String),

    #[error("expression invalide: {0}")]
    Syntaxe(&'static str),

    #[error("résultat non numérique (NaN)")]
    PasUnNombre,
}
