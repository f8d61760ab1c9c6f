//! Noyau de la calculatrice trigo
//!
//! Organisation interne :
//! - saisie.rs    : tampon de saisie (touches, retour, vider)
//! - equilibre.rs : validation des parenthèses
//! - implicite.rs : insertion des multiplications implicites
//! - reduction.rs : réduction des groupes parenthésés internes
//! - trigo.rs     : résolution textuelle de sin/cos/tan + primitives
//! - jetons.rs    : tokenisation arithmétique
//! - rpn.rs       : shunting-yard + évaluation f64
//! - format.rs    : affichage décimal
//! - eval.rs      : pipeline complet

pub mod equilibre;
pub mod eval;
pub mod format;
pub mod implicite;
pub mod jetons;
pub mod reduction;
pub mod rpn;
pub mod saisie;
pub mod trigo;

#[cfg(test)]
mod tests_pipeline;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use eval::{calculer, ENTREE_INVALIDE};
pub use saisie::{touche_depuis_car, Saisie, Touche};
