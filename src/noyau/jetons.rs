// src/noyau/jetons.rs

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    Plus,
    Minus,
    Star,
    Slash,

    LPar,
    RPar,
}

/// Tokenize une chaîne arithmétique plate en jetons.
/// Supporte:
/// - nombres décimaux (ex: 12, 3.5, .5)
/// - littéraux négatifs en position d'opérande (ex: "2*-0.95" -> Num(-0.95),
///   produits par la substitution des résultats trig)
/// - opérateurs + - * /
/// - parenthèses ( )
/// - espaces ignorés
pub fn tokenize(s: &str) -> Result<Vec<Tok>, String> {
    let chars: Vec<char> = s.chars().collect();
    let mut out = Vec::new();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        match c {
            '(' => {
                out.push(Tok::LPar);
                i += 1;
                continue;
            }
            ')' => {
                out.push(Tok::RPar);
                i += 1;
                continue;
            }
            '+' => {
                out.push(Tok::Plus);
                i += 1;
                continue;
            }
            '*' => {
                out.push(Tok::Star);
                i += 1;
                continue;
            }
            '/' => {
                out.push(Tok::Slash);
                i += 1;
                continue;
            }
            _ => {}
        }

        // '-' : littéral négatif si on attend une opérande et qu'un chiffre suit,
        // sinon opérateur (binaire ou unaire, tranché dans to_rpn).
        if c == '-' {
            let attend_operande = !matches!(out.last(), Some(Tok::Num(_)) | Some(Tok::RPar));
            let chiffre_suit =
                matches!(chars.get(i + 1), Some(s) if s.is_ascii_digit() || *s == '.');

            if attend_operande && chiffre_suit {
                let (n, fin) = lire_nombre(&chars, i + 1)?;
                out.push(Tok::Num(-n));
                i = fin;
            } else {
                out.push(Tok::Minus);
                i += 1;
            }
            continue;
        }

        if c.is_ascii_digit() || c == '.' {
            let (n, fin) = lire_nombre(&chars, i)?;
            out.push(Tok::Num(n));
            i = fin;
            continue;
        }

        return Err(format!("caractère inattendu: '{c}'"));
    }

    Ok(out)
}

/// Lit un nombre décimal à partir de `debut` ; retourne (valeur, index de fin).
fn lire_nombre(chars: &[char], debut: usize) -> Result<(f64, usize), String> {
    let mut i = debut;
    while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
        i += 1;
    }

    let txt: String = chars[debut..i].iter().collect();
    let n: f64 = txt
        .parse()
        .map_err(|_| format!("nombre invalide: '{txt}'"))?;

    Ok((n, i))
}
