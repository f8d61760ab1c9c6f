//! src/app/etat.rs
//!
//! État UI (sans vue, sans pipeline).
//!
//! Rôle : contenir l'état de la calculatrice (saisie, résultat) et offrir
//! les actions des boutons sans logique d'affichage.
//!
//! Contrats :
//! - Aucune évaluation ici hors de l'appel à noyau::calculer.
//! - Actions déterministes, sans effet de bord caché.
//! - Toute erreur du noyau se replie sur la sentinelle ENTREE_INVALIDE :
//!   la vue n'affiche jamais une raison interne.

use crate::noyau::{calculer, Saisie, Touche, ENTREE_INVALIDE};

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub saisie: Saisie,

    // --- sortie ---
    pub resultat: String,
}

impl AppCalc {
    /* ------------------------ Actions "boutons" ------------------------ */

    /// Touche d'insertion (chiffre, opérateur, parenthèse, fonction).
    pub fn touche(&mut self, touche: Touche) {
        self.saisie.ajouter(touche);
    }

    /// Retire le dernier caractère (sans effet sur une saisie vide).
    pub fn retour(&mut self) {
        self.saisie.retour();
    }

    /// Clear : remise à zéro de la saisie ET du résultat.
    pub fn vider(&mut self) {
        self.saisie.vider();
        self.resultat.clear();
    }

    /// "=" : évalue la saisie courante.
    pub fn egal(&mut self) {
        self.resultat = match calculer(self.saisie.texte()) {
            Ok(v) => v,
            Err(_) => ENTREE_INVALIDE.to_string(),
        };
    }
}
