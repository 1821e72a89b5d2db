// src/noyau/format.rs
//
// Affichage d’un résultat numérique.
//
// Contrat : le texte produit est relu tel quel par jetons::tokenize, car il
// devient le premier jeton de l’expression suivante.
// - entier => sans partie décimale ("8")
// - décimal => plus courte écriture exacte aller-retour ("0.30000000000000004")
// - -0 => "0"
// - |v| >= 1e21 ou |v| < 1e-6 => forme exposant signée ("1e+21", "1.5e-7")
// - ±inf => "Infinity" / "-Infinity"

const SEUIL_EXPOSANT_HAUT: f64 = 1e21;
const SEUIL_EXPOSANT_BAS: f64 = 1e-6;

pub fn format_resultat(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }
    if v == 0.0 {
        return "0".to_string();
    }

    let a = v.abs();
    if a >= SEUIL_EXPOSANT_HAUT || a < SEUIL_EXPOSANT_BAS {
        return format_exposant(v);
    }

    format!("{v}")
}

/// "{:e}" donne "1e21" / "1.5e-7" ; on signe l’exposant positif.
fn format_exposant(v: f64) -> String {
    let s = format!("{v:e}");
    match s.split_once('e') {
        Some((mantisse, exp)) if !exp.starts_with('-') => format!("{mantisse}e+{exp}"),
        _ => s,
    }
}
