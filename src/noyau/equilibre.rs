// src/noyau/equilibre.rs

/// Vérifie l'équilibre des parenthèses, sans aucune évaluation.
///
/// Parcours gauche-droite avec un compteur : +1 sur '(', -1 sur ')'.
/// Faux dès que le compteur devient négatif (une ')' sans ouvrante à sa
/// gauche), ou s'il n'est pas revenu à zéro en fin de chaîne.
pub fn parentheses_equilibrees(s: &str) -> bool {
    let mut compteur: i32 = 0;

    for c in s.chars() {
        match c {
            '(' => compteur += 1,
            ')' => {
                compteur -= 1;
                if compteur < 0 {
                    return false;
                }
            }
            _ => {}
        }
    }

    compteur == 0
}
