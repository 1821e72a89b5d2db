// src/noyau/mise.rs
//
// Mise en page “jolie” (2D) : Jeton -> Mise (arbre de présentation).
// - Fraction  : deux étages (haut / bas)
// - Racine    : signe radical + radicande
// - Puissance : base + exposant surélevé
//
// Fonctions pures : même entrée => même sortie, aucun état caché.
// Séquence vide => rendu vide (l’appelant affiche "0").

use super::modele::Jeton;

#[derive(Clone, Debug, PartialEq)]
pub enum Mise {
    Texte(String),
    Fraction { haut: Vec<Mise>, bas: Vec<Mise> },
    Racine(Vec<Mise>),
    Puissance { base: Vec<Mise>, exposant: Vec<Mise> },

    /// Position du curseur (produit seulement par mise_en_page_avec_curseur).
    Curseur,
}

pub fn mise_en_page(jetons: &[Jeton]) -> Vec<Mise> {
    let mut out = Vec::with_capacity(jetons.len());
    for j in jetons {
        pousser(&mut out, mise_jeton(j));
    }
    out
}

/// Variante pour l’écran : insère un marqueur de curseur au premier niveau.
pub fn mise_en_page_avec_curseur(jetons: &[Jeton], curseur: usize) -> Vec<Mise> {
    let mut out = Vec::with_capacity(jetons.len() + 1);
    for (i, j) in jetons.iter().enumerate() {
        if i == curseur {
            out.push(Mise::Curseur);
        }
        pousser(&mut out, mise_jeton(j));
    }
    if curseur >= jetons.len() {
        out.push(Mise::Curseur);
    }
    out
}

fn mise_jeton(j: &Jeton) -> Mise {
    match j {
        Jeton::Fraction {
            numerateur,
            denominateur,
        } => Mise::Fraction {
            haut: mise_en_page(numerateur),
            bas: mise_en_page(denominateur),
        },
        Jeton::Racine { radicande } => Mise::Racine(mise_en_page(radicande)),
        Jeton::Puissance { base, exposant } => Mise::Puissance {
            base: mise_en_page(base),
            exposant: mise_en_page(exposant),
        },
        Jeton::Nombre(_)
        | Jeton::Operateur(_)
        | Jeton::Fonction(_)
        | Jeton::Parenthese(_)
        | Jeton::Emplacement => Mise::Texte(j.texte_plat().unwrap_or_default().to_string()),
    }
}

/// Fusionne les textes adjacents ("1", "2", "+" => "12+").
fn pousser(out: &mut Vec<Mise>, m: Mise) {
    if let Mise::Texte(s) = &m {
        if let Some(Mise::Texte(prev)) = out.last_mut() {
            prev.push_str(s);
            return;
        }
    }
    out.push(m);
}

/* ------------------------ Rendu texte riche (HTML) ------------------------ */

/// Rendu balisé pour un hôte “chaîne” (écran web).
pub fn rendu_html(mise: &[Mise]) -> String {
    let mut out = String::new();
    ecrire_html(&mut out, mise);
    out
}

fn ecrire_html(out: &mut String, mise: &[Mise]) {
    for m in mise {
        match m {
            Mise::Texte(s) => echapper(out, s),
            Mise::Fraction { haut, bas } => {
                out.push_str(r#"<span class="frac"><span class="top">"#);
                ecrire_html(out, haut);
                out.push_str(r#"</span><span class="bottom">"#);
                ecrire_html(out, bas);
                out.push_str("</span></span>");
            }
            Mise::Racine(radicande) => {
                out.push_str(r#"<span class="sqrt">√<span class="radicand">"#);
                ecrire_html(out, radicande);
                out.push_str("</span></span>");
            }
            Mise::Puissance { base, exposant } => {
                out.push_str(r#"<span class="power">"#);
                ecrire_html(out, base);
                out.push_str("<sup>");
                ecrire_html(out, exposant);
                out.push_str("</sup></span>");
            }
            Mise::Curseur => out.push_str(r#"<span class="cursor"></span>"#),
        }
    }
}

fn echapper(out: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}
