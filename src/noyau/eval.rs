//! Noyau — évaluation (pipeline réel)
//!
//! jetons de saisie -> forme linéaire -> substitution des fonctions (noms hôtes)
//!        -> tokenize -> RPN -> Expr -> f64 -> contrôle NaN
//!
//! Toute erreur s’arrête ici sous forme d’ErreurCalcul : rien ne remonte plus haut.

use super::erreur::ErreurCalcul;
use super::jetons::{format_tokens, tokenize};
use super::lineaire::lineaire;
use super::modele::Jeton;
use super::rpn::{from_rpn, to_rpn};

/// Préfixes d’appel de la calculatrice => noms de la bibliothèque hôte (méthodes f64).
const SUBSTITUTIONS: [(&str, &str); 5] = [
    ("sin(", "sin("),
    ("cos(", "cos("),
    ("tan(", "tan("),
    ("log(", "log10("),
    ("ln(", "ln("),
];

/// Trace lisible du pipeline (panneau “Démarche”).
#[derive(Default, Clone, Debug, PartialEq)]
pub struct Demarche {
    pub lineaire: String,
    pub hote: String,
    pub jetons: String,
    pub rpn: String,
    pub arbre: String,
    pub note: String,
}

/// API principale : évalue la séquence de saisie.
pub fn evaluer(jetons: &[Jeton]) -> Result<f64, ErreurCalcul> {
    evaluer_avec_demarche(jetons).0
}

/// Évalue directement un texte linéaire (ex: "(1)/(2)+sqrt(9)").
#[cfg(test)]
pub fn evaluer_lineaire(texte: &str) -> Result<f64, ErreurCalcul> {
    let mut d = Demarche::default();
    evaluer_texte(texte, &mut d)
}

/// Comme evaluer(), en gardant la démarche (remplie jusqu’à l’étape atteinte).
pub fn evaluer_avec_demarche(jetons: &[Jeton]) -> (Result<f64, ErreurCalcul>, Demarche) {
    let mut d = Demarche::default();
    let res = evaluer_texte(&lineaire(jetons), &mut d);
    d.note = match &res {
        Ok(_) => String::new(),
        Err(e) => e.to_string(),
    };
    (res, d)
}

fn evaluer_texte(texte: &str, d: &mut Demarche) -> Result<f64, ErreurCalcul> {
    let s = texte.trim();
    d.lineaire = s.to_string();
    if s.is_empty() {
        return Err(ErreurCalcul::Vide);
    }

    // 1) Noms hôtes
    let hote = substituer_fonctions(s);
    d.hote = hote.clone();

    // 2) Jetons
    let toks = tokenize(&hote)?;
    d.jetons = format_tokens(&toks);

    // 3) RPN
    let rpn = to_rpn(&toks)?;
    d.rpn = format_tokens(&rpn);

    // 4) AST
    let expr = from_rpn(&rpn)?;
    d.arbre = expr.to_string();

    // 5) Valeur : NaN = échec ; ±inf accepté
    let v = expr.evaluer();
    if v.is_nan() {
        return Err(ErreurCalcul::PasUnNombre);
    }
    Ok(v)
}

/// Réécrit les préfixes d’appel en un seul passage gauche -> droite
/// (un texte déjà substitué n’est jamais relu).
pub fn substituer_fonctions(texte: &str) -> String {
    let mut out = String::with_capacity(texte.len() + 8);
    let mut reste = texte;

    'externe: while !reste.is_empty() {
        for (calc, hote) in SUBSTITUTIONS {
            if let Some(suite) = reste.strip_prefix(calc) {
                out.push_str(hote);
                reste = suite;
                continue 'externe;
            }
        }

        let mut chars = reste.chars();
        if let Some(c) = chars.next() {
            out.push(c);
        }
        reste = chars.as_str();
    }

    out
}
