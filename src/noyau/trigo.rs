// src/noyau/trigo.rs
//
// Résolution textuelle des appels trig
// ------------------------------------
// Cherche la première occurrence de sin(...), cos(...) ou tan(...) dont
// l'argument ne contient aucune parenthèse, évalue l'argument, applique la
// primitive, substitue la valeur, et recommence jusqu'à épuisement.

use super::format::format_nombre;
use super::rpn::evaluer_arithmetique;

/* ------------------------ Primitives (radians) ------------------------ */

// Fonctions pures, sans état : l'unité d'angle est celle de f64 (radians).

pub fn sinus(x: f64) -> f64 {
    x.sin()
}

pub fn cosinus(x: f64) -> f64 {
    x.cos()
}

pub fn tangente(x: f64) -> f64 {
    x.tan()
}

/* ------------------------ Reconnaissance des appels ------------------------ */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FonctionTrig {
    Sin,
    Cos,
    Tan,
}

impl FonctionTrig {
    /// Préfixes reconnus, parenthèse ouvrante comprise.
    const PREFIXES: [(&'static str, FonctionTrig); 3] = [
        ("sin(", FonctionTrig::Sin),
        ("cos(", FonctionTrig::Cos),
        ("tan(", FonctionTrig::Tan),
    ];

    pub fn applique(self, x: f64) -> f64 {
        match self {
            FonctionTrig::Sin => sinus(x),
            FonctionTrig::Cos => cosinus(x),
            FonctionTrig::Tan => tangente(x),
        }
    }
}

/// Un appel trig reconnu : fonction + bornes (chars) du texte complet
/// "sin(...)" + argument brut (garanti sans parenthèse).
struct AppelTrig {
    fonction: FonctionTrig,
    debut: usize,
    ferme: usize,
    argument: String,
}

fn commence_par(chars: &[char], i: usize, prefixe: &str) -> bool {
    prefixe
        .chars()
        .enumerate()
        .all(|(k, p)| chars.get(i + k) == Some(&p))
}

/// Premier appel dont l'argument est sans parenthèse, en balayant de gauche
/// à droite. Une position dont l'argument contient une ouvrante (appel
/// imbriqué) ne matche pas : on continue plus à droite, ce qui ressort
/// l'appel le plus interne en premier.
fn trouver_appel(chars: &[char]) -> Option<AppelTrig> {
    for i in 0..chars.len() {
        for (prefixe, fonction) in FonctionTrig::PREFIXES {
            if !commence_par(chars, i, prefixe) {
                continue;
            }

            let debut_arg = i + prefixe.len();
            let mut j = debut_arg;
            loop {
                match chars.get(j).copied() {
                    Some(')') => {
                        return Some(AppelTrig {
                            fonction,
                            debut: i,
                            ferme: j,
                            argument: chars[debut_arg..j].iter().collect(),
                        });
                    }
                    Some('(') | None => break,
                    Some(_) => j += 1,
                }
            }
        }
    }

    None
}

/// Retire les parenthèses englobantes redondantes d'un argument ("((2))" ->
/// "2") : on dépouille tant que l'intérieur reste évaluable, et on s'arrête
/// au premier échec.
fn nettoyer_argument(argument: &str) -> String {
    let mut s = argument.trim().to_string();

    while s.starts_with('(') && s.ends_with(')') {
        let interieur = s[1..s.len() - 1].trim().to_string();
        if evaluer_arithmetique(&interieur).is_ok() {
            s = interieur;
        } else {
            break;
        }
    }

    s
}

/// Résout tous les appels trig du texte, dans l'ordre de reconnaissance.
///
/// Après la boucle, tout "sin(" / "cos(" / "tan(" résiduel (appel mal formé
/// que le balayage n'a pas pu résoudre) est une erreur.
pub fn resoudre_trig(texte: &str) -> Result<String, String> {
    let mut chars: Vec<char> = texte.chars().collect();

    while let Some(appel) = trouver_appel(&chars) {
        let argument = nettoyer_argument(&appel.argument);
        if argument.is_empty() || argument.contains(['(', ')']) {
            return Err("argument trig vide ou irréductible".into());
        }

        let x = evaluer_arithmetique(&argument)?;
        let v = appel.fonction.applique(x);
        if !v.is_finite() {
            return Err("résultat trig non fini".into());
        }

        let remplacement = format_nombre(v);
        chars.splice(appel.debut..=appel.ferme, remplacement.chars());
    }

    let reste: String = chars.into_iter().collect();
    for (prefixe, _) in FonctionTrig::PREFIXES {
        if reste.contains(prefixe) {
            return Err(format!("appel trig non résolu: {prefixe}...)"));
        }
    }

    Ok(reste)
}
