// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> f64
// Objectif:
// - Convertir une suite de Tok en RPN (postfix)
// - Puis évaluer la pile en double précision
//
// Règles:
// - Précédence standard : * / au-dessus de + -, associativité à gauche
// - Moins unaire:
//    - si '-' arrive quand on n'attend PAS une valeur, on injecte 0 : "-x" => "0 x -"
//    - le '-' injecté est empilé SANS dépiler, pour que le 0 lui reste collé
//      ("2*-(3)" => "2 0 3 - *", pas "2 0 * 3 -")

use super::jetons::{tokenize, Tok};

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash => 2,
        _ => 0,
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(2), Star, LPar, Num(3), Plus, Num(4), RPar]
///   rpn:    [Num(2), Num(3), Num(4), Plus, Star]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, String> {
    let mut out: Vec<Tok> = Vec::new();
    let mut ops: Vec<Tok> = Vec::new();

    // "valeur" = un nombre ou une expression fermée.
    // Sert à détecter le moins unaire.
    let mut prev_was_value = false;

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) => {
                out.push(tok);
                prev_was_value = true;
            }

            Tok::LPar => {
                ops.push(tok);
                prev_was_value = false;
            }

            Tok::RPar => {
                // dépile jusqu'à '('
                let mut ouvrante_vue = false;
                while let Some(top) = ops.pop() {
                    if matches!(top, Tok::LPar) {
                        ouvrante_vue = true;
                        break;
                    }
                    out.push(top);
                }
                if !ouvrante_vue {
                    return Err("parenthèse fermante en trop".into());
                }
                prev_was_value = true;
            }

            Tok::Plus | Tok::Star | Tok::Slash => {
                depiler_selon_precedence(&mut out, &mut ops, &tok);
                ops.push(tok);
                prev_was_value = false;
            }

            Tok::Minus => {
                if prev_was_value {
                    // moins binaire
                    depiler_selon_precedence(&mut out, &mut ops, &Tok::Minus);
                } else {
                    // moins unaire : injecte 0, sans dépiler
                    out.push(Tok::Num(0.0));
                }
                ops.push(Tok::Minus);
                prev_was_value = false;
            }
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err("parenthèses non fermées".into());
        }
        out.push(op);
    }

    Ok(out)
}

fn depiler_selon_precedence(out: &mut Vec<Tok>, ops: &mut Vec<Tok>, tok: &Tok) {
    while let Some(top) = ops.last() {
        if matches!(top, Tok::LPar) {
            break;
        }
        if precedence(top) >= precedence(tok) {
            out.push(ops.pop().unwrap());
        } else {
            break;
        }
    }
}

/// Évalue une RPN sur une pile de f64.
pub fn eval_rpn(rpn: &[Tok]) -> Result<f64, String> {
    let mut st: Vec<f64> = Vec::new();

    for tok in rpn {
        match tok {
            Tok::Num(n) => st.push(*n),

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                let b = st.pop().ok_or("expression invalide")?;
                let a = st.pop().ok_or("expression invalide")?;

                let v = match tok {
                    Tok::Plus => a + b,
                    Tok::Minus => a - b,
                    Tok::Star => a * b,
                    Tok::Slash => {
                        if b == 0.0 {
                            return Err("division par zéro".into());
                        }
                        a / b
                    }
                    _ => unreachable!(),
                };

                st.push(v);
            }

            Tok::LPar | Tok::RPar => return Err("parenthèse inattendue en RPN".into()),
        }
    }

    if st.len() != 1 {
        return Err("expression invalide".into());
    }
    Ok(st.pop().unwrap())
}

/// Primitive arithmétique du pipeline : chaîne plate -> valeur finie.
///
/// Accepte nombres, + - * /, et des groupes de parenthèses résiduels.
/// Refuse tout résultat non fini (division par zéro déjà refusée dans eval_rpn).
pub fn evaluer_arithmetique(s: &str) -> Result<f64, String> {
    let jetons = tokenize(s)?;
    if jetons.is_empty() {
        return Err("expression vide".into());
    }

    let rpn = to_rpn(&jetons)?;
    let v = eval_rpn(&rpn)?;

    if !v.is_finite() {
        return Err("résultat non fini".into());
    }
    Ok(v)
}
