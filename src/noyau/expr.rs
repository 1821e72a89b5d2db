// src/noyau/expr.rs
//
// AST arithmétique typé (f64 natif).
// - Construit par rpn::from_rpn, jamais à partir de code arbitraire.
// - evaluer() est pur : NaN / ±inf remontent tels quels (eval décide).

use std::fmt;

/// Fonctions unaires de la bibliothèque numérique hôte (méthodes f64).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FonctionHote {
    Sin,
    Cos,
    Tan,
    Ln,
    Log10,
    Sqrt,
}

impl FonctionHote {
    pub fn depuis_nom(nom: &str) -> Option<Self> {
        match nom {
            "sin" => Some(Self::Sin),
            "cos" => Some(Self::Cos),
            "tan" => Some(Self::Tan),
            "ln" => Some(Self::Ln),
            "log10" => Some(Self::Log10),
            "sqrt" => Some(Self::Sqrt),
            _ => None,
        }
    }

    pub fn nom(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Ln => "ln",
            Self::Log10 => "log10",
            Self::Sqrt => "sqrt",
        }
    }

    pub fn appliquer(self, x: f64) -> f64 {
        match self {
            Self::Sin => x.sin(),
            Self::Cos => x.cos(),
            Self::Tan => x.tan(),
            Self::Ln => x.ln(),
            Self::Log10 => x.log10(),
            Self::Sqrt => x.sqrt(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Nombre(f64),

    Neg(Box<Expr>),
    Appel(FonctionHote, Box<Expr>),
    Pow(Box<Expr>, Box<Expr>), // a^b et pow(a,b)

    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn evaluer(&self) -> f64 {
        use Expr::*;

        match self {
            Nombre(v) => *v,
            Neg(x) => -x.evaluer(),
            Appel(f, x) => f.appliquer(x.evaluer()),
            Pow(a, b) => a.evaluer().powf(b.evaluer()),
            Add(a, b) => a.evaluer() + b.evaluer(),
            Sub(a, b) => a.evaluer() - b.evaluer(),
            Mul(a, b) => a.evaluer() * b.evaluer(),
            Div(a, b) => a.evaluer() / b.evaluer(),
        }
    }
}

/* ------------------------ Affichage debug (démarche) ------------------------ */

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Expr::*;
        match self {
            Nombre(v) => write!(f, "{}", super::format::format_resultat(*v)),
            Neg(x) => write!(f, "(-{x})"),
            Appel(func, x) => write!(f, "{}({x})", func.nom()),
            Pow(a, b) => write!(f, "({a}^{b})"),
            Add(a, b) => write!(f, "({a}+{b})"),
            Sub(a, b) => write!(f, "({a}-{b})"),
            Mul(a, b) => write!(f, "({a}*{b})"),
            Div(a, b) => write!(f, "({a}/{b})"),
        }
    }
}
