// src/noyau/jetons.rs
//
// Lecture du texte “hôte” (forme linéaire après substitution des fonctions).
//
// Les littéraux décimaux sont lus EXACTEMENT (BigRational) puis convertis une
// seule fois en f64 : arrondi correct, pas d’accumulation chiffre par chiffre.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{ToPrimitive, Zero};

use super::erreur::ErreurCalcul;

/// Au-delà, le littéral sort de toute façon du domaine f64 (inf ou 0).
const EXPOSANT_BORNE: i64 = 10_000;

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    // Nom de fonction hôte (sin, cos, tan, ln, log10, sqrt, pow) ou autre mot.
    // Le parse (rpn) décide si le nom est connu.
    Ident(String),

    Plus,
    Minus,
    Star,
    Slash,
    Caret, // ^

    // Moins unaire : jamais produit par tokenize, seulement par to_rpn.
    Neg,

    LPar,
    RPar,
    Virgule,
}

/// Tokenize le texte hôte.
/// Supporte:
/// - décimaux : 12, 1.5, .5, 5., 1e+21, 1.5e-7
/// - "Infinity" (insensible à la casse), pour relire un résultat infini
/// - opérateurs + - * / ^, parenthèses, virgule (arguments de pow)
/// - identifiants [a-zA-Z_][a-zA-Z0-9_]* (normalisés en minuscules)
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurCalcul> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        let simple = match c {
            '(' => Some(Tok::LPar),
            ')' => Some(Tok::RPar),
            ',' => Some(Tok::Virgule),
            '+' => Some(Tok::Plus),
            '-' => Some(Tok::Minus),
            '*' => Some(Tok::Star),
            '/' => Some(Tok::Slash),
            '^' => Some(Tok::Caret),
            _ => None,
        };
        if let Some(t) = simple {
            out.push(t);
            i += 1;
            continue;
        }

        // Identifiants ASCII
        if c.is_ascii_alphabetic() || c == '_' {
            let start = i;
            i += 1;
            while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '_') {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();
            let w = word.to_lowercase();

            if w == "infinity" {
                out.push(Tok::Num(f64::INFINITY));
            } else {
                out.push(Tok::Ident(w));
            }
            continue;
        }

        // Nombre décimal
        if c.is_ascii_digit() || c == '.' {
            let (valeur, fin) = lire_nombre(&chars, i)?;
            out.push(Tok::Num(valeur));
            i = fin;
            continue;
        }

        return Err(ErreurCalcul::Caractere(c));
    }

    Ok(out)
}

/// Lit un décimal à partir de `start`. Renvoie (valeur, indice de fin).
fn lire_nombre(chars: &[char], start: usize) -> Result<(f64, usize), ErreurCalcul> {
    let mut i = start;
    let mut chiffres = String::new();
    let mut nb_frac: i64 = 0;

    while i < chars.len() && chars[i].is_ascii_digit() {
        chiffres.push(chars[i]);
        i += 1;
    }
    if i < chars.len() && chars[i] == '.' {
        i += 1;
        while i < chars.len() && chars[i].is_ascii_digit() {
            chiffres.push(chars[i]);
            nb_frac += 1;
            i += 1;
        }
    }

    if chiffres.is_empty() {
        let brut: String = chars[start..i].iter().collect();
        return Err(ErreurCalcul::NombreInvalide(brut));
    }

    // Exposant : seulement si au moins un chiffre suit (sinon "e" reste un mot)
    let mut exposant: i64 = 0;
    if i < chars.len() && (chars[i] == 'e' || chars[i] == 'E') {
        let mut j = i + 1;
        let mut negatif = false;
        if j < chars.len() && (chars[j] == '+' || chars[j] == '-') {
            negatif = chars[j] == '-';
            j += 1;
        }
        if j < chars.len() && chars[j].is_ascii_digit() {
            let debut = j;
            while j < chars.len() && chars[j].is_ascii_digit() {
                j += 1;
            }
            let txt: String = chars[debut..j].iter().collect();
            let e = txt
                .parse::<i64>()
                .unwrap_or(EXPOSANT_BORNE)
                .min(EXPOSANT_BORNE);
            exposant = if negatif { -e } else { e };
            i = j;
        }
    }

    let valeur = decimal_vers_f64(&chiffres, exposant - nb_frac)?;
    Ok((valeur, i))
}

fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// chiffres × 10^exp10, arrondi une seule fois vers f64.
pub fn decimal_vers_f64(chiffres: &str, exp10: i64) -> Result<f64, ErreurCalcul> {
    let mantisse = BigInt::parse_bytes(chiffres.as_bytes(), 10)
        .ok_or_else(|| ErreurCalcul::NombreInvalide(chiffres.to_string()))?;
    if mantisse.is_zero() {
        return Ok(0.0);
    }

    // nombre de chiffres significatifs : la valeur est dans [10^(n-1+e), 10^(n+e))
    let n = chiffres.trim_start_matches('0').len() as i64;
    if n - 1 + exp10 > 309 {
        return Ok(f64::INFINITY);
    }
    if n + exp10 < -330 {
        return Ok(0.0);
    }

    let r = if exp10 >= 0 {
        BigRational::from_integer(mantisse * pow10(exp10 as usize))
    } else {
        BigRational::new(mantisse, pow10((-exp10) as usize))
    };

    // mantisse > 0 : seul un dépassement peut faire échouer la conversion
    Ok(r.to_f64().unwrap_or(f64::INFINITY))
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(v) => super::format::format_resultat(*v),
            Tok::Ident(name) => name.clone(),

            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::Caret => "^".to_string(),
            Tok::Neg => "neg".to_string(),

            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
            Tok::Virgule => ",".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
