//! Noyau — évaluation (pipeline réel)
//!
//! équilibre -> multiplication implicite -> réduction des groupes
//!          -> multiplication implicite -> résolution trig -> arithmétique finale
//!
//! Remarque : la multiplication implicite passe AVANT la réduction, sinon
//! "2(3+4)" se réduit en "2(7)" puis se recolle en "27" au retrait des
//! parenthèses redondantes. La seconde passe est idempotente.

use super::equilibre::parentheses_equilibrees;
use super::format::format_nombre;
use super::implicite::inserer_multiplication;
use super::reduction::reduire_parentheses;
use super::rpn::evaluer_arithmetique;
use super::trigo::resoudre_trig;

/// Sentinelle unique côté affichage : toute erreur interne s'y replie.
pub const ENTREE_INVALIDE: &str = "Invalid Input";

/// API publique : évalue le contenu du tampon de saisie.
///
/// Retourne le résultat en décimal (entier sans partie fractionnaire), ou
/// Err(raison interne). La couche de présentation replie toute erreur sur
/// [`ENTREE_INVALIDE`] ; les raisons ne servent qu'aux tests et au debug.
pub fn calculer(entree: &str) -> Result<String, String> {
    let s = entree.trim();
    if s.is_empty() {
        return Err("entrée vide".into());
    }

    // 1) Parenthèses équilibrées (validation pure, court-circuit)
    if !parentheses_equilibrees(s) {
        return Err("parenthèses non équilibrées".into());
    }

    // 2) Multiplication implicite, avant réduction
    let avec_mult = inserer_multiplication(s);

    // 3) Réduction des groupes internes (les arguments trig survivent)
    let reduit = reduire_parentheses(&avec_mult)?;

    // 4) Multiplication implicite, passe de couverture (idempotente)
    let avec_mult = inserer_multiplication(&reduit);

    // 5) Résolution des appels trig
    let sans_trig = resoudre_trig(&avec_mult)?;

    // 6) Arithmétique finale
    let v = evaluer_arithmetique(&sans_trig)?;

    Ok(format_nombre(v))
}
