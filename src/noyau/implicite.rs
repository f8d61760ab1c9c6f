// src/noyau/implicite.rs

/// Insère un `*` entre une fin d'opérande (chiffre, '.', ')') et un début
/// de fonction ou de groupe (lettre, '(').
///
/// Ex : ")tan(" -> ")*tan(", "2(3+4)" -> "2*(3+4)".
///
/// La passe ne fait qu'insérer, jamais retirer ni réordonner ; elle est
/// idempotente (un '*' déjà inséré ne redéclenche rien).
pub fn inserer_multiplication(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        out.push(c);

        if let Some(&suivant) = chars.get(i + 1) {
            let fin_operande = c.is_ascii_digit() || c == '.' || c == ')';
            let debut_appel = suivant.is_ascii_alphabetic() || suivant == '(';
            if fin_operande && debut_appel {
                out.push('*');
            }
        }
    }

    out
}
