// src/noyau/modele.rs
//
// Modèle de saisie : un Jeton = une unité indivisible de frappe.
// - Jetons plats : nombre, opérateur, fonction, parenthèse
// - Jetons composites : fraction, racine, puissance (enfants = séquences de jetons)
// - Emplacement : case vide visible dans la mise en page
//
// Arbre strict : chaque composite possède ses enfants (pas de partage, pas de cycle).

/// Glyphe d’une case vide (mise en page seulement, rien en linéaire).
pub const SYMBOLE_EMPLACEMENT: &str = "□";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
    Puissance,
}

impl Operateur {
    /// Reconnaît un symbole de touche (affichage ou ASCII).
    pub fn depuis_symbole(s: &str) -> Option<Self> {
        match s {
            "+" => Some(Self::Plus),
            "-" | "−" => Some(Self::Moins),
            "×" | "*" => Some(Self::Fois),
            "÷" | "/" => Some(Self::Divise),
            "^" => Some(Self::Puissance),
            _ => None,
        }
    }

    /// Symbole affiché.
    pub fn symbole(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Moins => "-",
            Self::Fois => "×",
            Self::Divise => "÷",
            Self::Puissance => "^",
        }
    }

    /// Symbole arithmétique ASCII (forme linéaire).
    pub fn ascii(self) -> &'static str {
        match self {
            Self::Fois => "*",
            Self::Divise => "/",
            _ => self.symbole(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Sin,
    Cos,
    Tan,
    Ln,
    Log,
}

impl Fonction {
    pub fn depuis_nom(nom: &str) -> Option<Self> {
        match nom {
            "sin" => Some(Self::Sin),
            "cos" => Some(Self::Cos),
            "tan" => Some(Self::Tan),
            "ln" => Some(Self::Ln),
            "log" => Some(Self::Log),
            _ => None,
        }
    }

    /// Forme textuelle : toujours collée à sa parenthèse ouvrante ("sin(").
    /// La fermante viendra d’un jeton Parenthese séparé.
    pub fn texte(self) -> &'static str {
        match self {
            Self::Sin => "sin(",
            Self::Cos => "cos(",
            Self::Tan => "tan(",
            Self::Ln => "ln(",
            Self::Log => "log(",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Parenthese {
    Ouvrante,
    Fermante,
}

impl Parenthese {
    pub fn texte(self) -> &'static str {
        match self {
            Self::Ouvrante => "(",
            Self::Fermante => ")",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Jeton {
    /// Un chiffre ou "." (touche), ou le texte complet d’un résultat.
    Nombre(String),
    Operateur(Operateur),
    Fonction(Fonction),
    Parenthese(Parenthese),

    Fraction {
        numerateur: Vec<Jeton>,
        denominateur: Vec<Jeton>,
    },
    Racine {
        radicande: Vec<Jeton>,
    },
    Puissance {
        base: Vec<Jeton>,
        exposant: Vec<Jeton>,
    },

    Emplacement,
}

impl Jeton {
    /// Chiffre 0-9 ou point décimal ; None pour tout autre caractère.
    pub fn chiffre(c: char) -> Option<Self> {
        if c.is_ascii_digit() || c == '.' {
            Some(Self::Nombre(c.to_string()))
        } else {
            None
        }
    }

    pub fn fraction(numerateur: Vec<Jeton>, denominateur: Vec<Jeton>) -> Self {
        Self::Fraction {
            numerateur,
            denominateur,
        }
    }

    pub fn racine(radicande: Vec<Jeton>) -> Self {
        Self::Racine { radicande }
    }

    pub fn puissance(base: Vec<Jeton>, exposant: Vec<Jeton>) -> Self {
        Self::Puissance { base, exposant }
    }

    /// Gabarit de puissance : une case vide dans chaque emplacement.
    pub fn puissance_vide() -> Self {
        Self::puissance(vec![Self::Emplacement], vec![Self::Emplacement])
    }

    /// Texte d’un jeton plat (None pour un composite).
    pub fn texte_plat(&self) -> Option<&str> {
        match self {
            Self::Nombre(s) => Some(s.as_str()),
            Self::Operateur(op) => Some(op.symbole()),
            Self::Fonction(f) => Some(f.texte()),
            Self::Parenthese(p) => Some(p.texte()),
            Self::Emplacement => Some(SYMBOLE_EMPLACEMENT),
            Self::Fraction { .. } | Self::Racine { .. } | Self::Puissance { .. } => None,
        }
    }
}
