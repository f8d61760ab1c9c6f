// src/noyau/format.rs

/// Plage où un f64 entier se réécrit sans perte en i64.
const ENTIER_MAX: f64 = 1e15;

/// Affichage décimal "au plus court" d'un résultat.
///
/// - valeur entière -> sans partie fractionnaire ("14", pas "14.0")
/// - sinon, Display de Rust (forme la plus courte qui reparse à l'identique)
///
/// L'appelant garantit une valeur finie (le pipeline rejette inf/NaN en amont).
pub fn format_nombre(v: f64) -> String {
    if v == v.trunc() && v.abs() < ENTIER_MAX {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}
