// src/noyau/reduction.rs
//
// Réduction des groupes parenthésés internes.
//
// Un groupe interne (aucune parenthèse à l'intérieur) est remplacé par sa
// valeur numérique, SAUF s'il est l'argument d'un appel trig (une lettre
// précède l'ouvrante) : dans ce cas la réduction s'arrête net et laisse le
// texte entier à resoudre_trig, y compris les groupes plus à droite.

use super::format::format_nombre;
use super::rpn::evaluer_arithmetique;

/// Bornes (en indices de chars) d'un groupe interne `(...)`.
struct Groupe {
    ouvre: usize,
    ferme: usize,
}

/// Premier groupe entièrement fermé = groupe interne : on suit la dernière
/// ouvrante rencontrée, la première fermante la referme forcément (toute
/// ouvrante croisée entre-temps aurait déplacé le suivi).
fn trouver_groupe_interne(chars: &[char]) -> Option<Groupe> {
    let mut derniere_ouvrante: Option<usize> = None;

    for (i, &c) in chars.iter().enumerate() {
        if c == '(' {
            derniere_ouvrante = Some(i);
        } else if c == ')' {
            if let Some(ouvre) = derniere_ouvrante {
                return Some(Groupe { ouvre, ferme: i });
            }
        }
    }

    None
}

/// Nombre nu, signe compris : "(0-5)" se réduit en "(-5)", qui doit être
/// reconnu comme littéral et non ré-évalué comme soustraction (sinon la
/// boucle ne converge jamais).
fn est_nombre(s: &str) -> bool {
    !s.is_empty()
        && s.chars().all(|c| c.is_ascii_digit() || c == '.' || c == '-')
        && s.parse::<f64>().is_ok()
}

fn contient_operateur(s: &str) -> bool {
    s.chars().any(|c| matches!(c, '+' | '-' | '*' | '/'))
}

/// Réduit les groupes internes un par un jusqu'à stabilité.
///
/// - contenu arithmétique : évalué, remplacé par "(" + valeur + ")"
///   (les parenthèses restent, le contexte englobant voit toujours un terme
///   groupé)
/// - nombre nu précédé d'une lettre : argument trig, arrêt complet
/// - nombre nu sinon : parenthèses redondantes, retirées
/// - tout autre contenu, ou toute évaluation en échec : erreur
pub fn reduire_parentheses(texte: &str) -> Result<String, String> {
    let mut chars: Vec<char> = texte.chars().collect();

    while let Some(Groupe { ouvre, ferme }) = trouver_groupe_interne(&chars) {
        let contenu: String = chars[ouvre + 1..ferme].iter().collect();

        if est_nombre(&contenu) {
            let precede_lettre = ouvre > 0 && chars[ouvre - 1].is_ascii_alphabetic();
            if precede_lettre {
                break;
            }
            chars.splice(ouvre..=ferme, contenu.chars());
        } else if contient_operateur(&contenu) {
            let v = evaluer_arithmetique(&contenu)?;
            let remplacement = format!("({})", format_nombre(v));
            chars.splice(ouvre..=ferme, remplacement.chars());
        } else {
            // ni nombre nu, ni arithmétique (vide, "()", symbole isolé...)
            return Err(format!("groupe irréductible: ({contenu})"));
        }
    }

    Ok(chars.into_iter().collect())
}
