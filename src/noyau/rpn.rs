// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> AST
// Objectif:
// - Convertir une suite de Tok en RPN (postfix)
// - Puis reconstruire Expr
//
// Règles:
// - Ident(name): fonction hôte, toujours suivie de '(' ; arité fixe
//   (sin, cos, tan, ln, log10, sqrt => 1 ; pow => 2)
// - Moins unaire: si '-' arrive quand on n’attend PAS une valeur => Tok::Neg
//   (préfixe, plus fort que * et /, plus faible que ^ : -2^2 = -4)
// - Plus unaire: ignoré
// - Grammaire stricte : deux valeurs juxtaposées, un opérateur orphelin,
//   "()" ou un argument vide sont des erreurs.

use super::erreur::ErreurCalcul;
use super::expr::{Expr, FonctionHote};
use super::jetons::Tok;

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash => 2,
        Tok::Neg => 3,
        Tok::Caret => 4,
        _ => 0,
    }
}

fn is_right_associative(t: &Tok) -> bool {
    matches!(t, Tok::Caret | Tok::Neg)
}

/// Nombre d’arguments d’une fonction hôte (None si inconnue).
fn arite(name: &str) -> Option<usize> {
    if name == "pow" {
        return Some(2);
    }
    FonctionHote::depuis_nom(name).map(|_| 1)
}

/// Un cadre par parenthèse ouvrante : appel de fonction ou simple groupe.
struct Cadre {
    fonction: Option<String>,
    args: usize,
}

/// Dépile les opérateurs jusqu’à la '(' (qui reste sur la pile).
fn depiler_jusqu_a_parenthese(ops: &mut Vec<Tok>, out: &mut Vec<Tok>) {
    while let Some(top) = ops.last() {
        if matches!(top, Tok::LPar) {
            break;
        }
        if let Some(t) = ops.pop() {
            out.push(t);
        }
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Ident("sqrt"), LPar, Num(9), RPar, Plus, Num(1)]
///   rpn:    [Num(9), Ident("sqrt"), Num(1), Plus]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurCalcul> {
    let mut out: Vec<Tok> = Vec::new();
    let mut ops: Vec<Tok> = Vec::new();
    let mut cadres: Vec<Cadre> = Vec::new();

    // “valeur” = un atome ou une expression fermée.
    // Sert à détecter le moins unaire et les juxtapositions.
    let mut prev_was_value = false;

    let mut iter = tokens.iter().cloned().peekable();

    while let Some(tok) = iter.next() {
        match tok {
            Tok::Num(_) => {
                if prev_was_value {
                    return Err(ErreurCalcul::Syntaxe("valeurs juxtaposées"));
                }
                out.push(tok);
                prev_was_value = true;
            }

            Tok::Ident(name) => {
                if arite(&name).is_none() {
                    return Err(ErreurCalcul::FonctionInconnue(name));
                }
                if prev_was_value {
                    return Err(ErreurCalcul::Syntaxe("valeurs juxtaposées"));
                }
                if !matches!(iter.peek(), Some(Tok::LPar)) {
                    return Err(ErreurCalcul::Syntaxe("fonction sans parenthèse"));
                }
                iter.next();

                // fonction : reste sur la pile sous sa '(' (elle sortira après ses arguments)
                ops.push(Tok::Ident(name.clone()));
                ops.push(Tok::LPar);
                cadres.push(Cadre {
                    fonction: Some(name),
                    args: 1,
                });
                prev_was_value = false;
            }

            Tok::LPar => {
                if prev_was_value {
                    return Err(ErreurCalcul::Syntaxe("valeurs juxtaposées"));
                }
                ops.push(tok);
                cadres.push(Cadre {
                    fonction: None,
                    args: 1,
                });
                prev_was_value = false;
            }

            Tok::Virgule => {
                if !prev_was_value {
                    return Err(ErreurCalcul::Syntaxe("argument manquant"));
                }
                match cadres.last_mut() {
                    Some(Cadre {
                        fonction: Some(_),
                        args,
                    }) => *args += 1,
                    _ => return Err(ErreurCalcul::Syntaxe("virgule hors d’un appel")),
                }
                depiler_jusqu_a_parenthese(&mut ops, &mut out);
                prev_was_value = false;
            }

            Tok::RPar => {
                let cadre = cadres.pop().ok_or(ErreurCalcul::ParentheseEnTrop)?;
                if !prev_was_value {
                    return Err(ErreurCalcul::Syntaxe("argument manquant"));
                }

                depiler_jusqu_a_parenthese(&mut ops, &mut out);
                ops.pop(); // la '('

                if let Some(name) = cadre.fonction {
                    if arite(&name) != Some(cadre.args) {
                        return Err(ErreurCalcul::Syntaxe("nombre d’arguments incorrect"));
                    }
                    // la fonction est juste sous sa '('
                    ops.pop();
                    out.push(Tok::Ident(name));
                }

                prev_was_value = true;
            }

            // Préfixes : pas de dépilement (ils s’appliquent à ce qui suit)
            Tok::Plus if !prev_was_value => {}
            Tok::Minus | Tok::Neg if !prev_was_value => ops.push(Tok::Neg),
            Tok::Neg => return Err(ErreurCalcul::Syntaxe("valeurs juxtaposées")),

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Caret => {
                if !prev_was_value {
                    return Err(ErreurCalcul::Syntaxe("opérande gauche manquant"));
                }

                // dépile tant que:
                // - on n'est pas bloqué par '('
                // - et la précédence/associativité exige de sortir l'opérateur du haut
                while let Some(top) = ops.last() {
                    if matches!(top, Tok::LPar) {
                        break;
                    }

                    let p_top = precedence(top);
                    let p_tok = precedence(&tok);

                    let doit_pop = if is_right_associative(&tok) {
                        p_top > p_tok
                    } else {
                        p_top >= p_tok
                    };

                    if !doit_pop {
                        break;
                    }
                    if let Some(t) = ops.pop() {
                        out.push(t);
                    }
                }

                ops.push(tok);
                prev_was_value = false;
            }
        }
    }

    if !cadres.is_empty() {
        return Err(ErreurCalcul::ParentheseNonFermee);
    }
    if !prev_was_value {
        return Err(ErreurCalcul::Syntaxe("expression incomplète"));
    }

    // vide la pile ops (plus aucune '(' possible ici)
    while let Some(op) = ops.pop() {
        out.push(op);
    }

    Ok(out)
}

/// Construit une Expr à partir d’une RPN.
pub fn from_rpn(rpn: &[Tok]) -> Result<Expr, ErreurCalcul> {
    const INVALIDE: ErreurCalcul = ErreurCalcul::Syntaxe("expression invalide");

    let mut st: Vec<Expr> = Vec::new();

    for tok in rpn.iter().cloned() {
        match tok {
            Tok::Num(v) => st.push(Expr::Nombre(v)),

            Tok::Neg => {
                let x = st.pop().ok_or(INVALIDE)?;
                st.push(Expr::Neg(Box::new(x)));
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Caret => {
                let b = Box::new(st.pop().ok_or(INVALIDE)?);
                let a = Box::new(st.pop().ok_or(INVALIDE)?);

                let e = match tok {
                    Tok::Plus => Expr::Add(a, b),
                    Tok::Minus => Expr::Sub(a, b),
                    Tok::Star => Expr::Mul(a, b),
                    Tok::Slash => Expr::Div(a, b),
                    _ => Expr::Pow(a, b),
                };

                st.push(e);
            }

            Tok::Ident(name) => {
                if name == "pow" {
                    let b = Box::new(st.pop().ok_or(INVALIDE)?);
                    let a = Box::new(st.pop().ok_or(INVALIDE)?);
                    st.push(Expr::Pow(a, b));
                } else {
                    let f = FonctionHote::depuis_nom(&name)
                        .ok_or(ErreurCalcul::FonctionInconnue(name))?;
                    let x = st.pop().ok_or(ErreurCalcul::Syntaxe("fonction sans argument"))?;
                    st.push(Expr::Appel(f, Box::new(x)));
                }
            }

            Tok::LPar | Tok::RPar | Tok::Virgule => {
                return Err(ErreurCalcul::Syntaxe("parenthèse inattendue en RPN"))
            }
        }
    }

    if st.len() != 1 {
        return Err(INVALIDE);
    }
    st.pop().ok_or(INVALIDE)
}
