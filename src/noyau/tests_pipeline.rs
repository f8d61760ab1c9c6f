//! Tests pipeline (campagne) : comportements observables de bout en bout.
//!
//! Tout passe par calculer() : c'est le seul point d'entrée que voit la
//! couche de présentation. Les sections suivent les étages du pipeline
//! (équilibre, implicite, réduction, trig, arithmétique finale).

use super::eval::calculer;
use super::format::format_nombre;

fn eval_ok(expr: &str) -> String {
    calculer(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn assert_vaut(expr: &str, attendu: &str) {
    assert_eq!(eval_ok(expr), attendu, "expr={expr:?}");
}

fn assert_invalide(expr: &str) {
    assert!(calculer(expr).is_err(), "expr={expr:?} aurait dû échouer");
}

/// Comparaison via f64 pour les valeurs trig (l'attendu est recalculé avec
/// les mêmes primitives, l'égalité est donc exacte).
fn assert_vaut_f64(expr: &str, attendu: f64) {
    assert_eq!(eval_ok(expr), format_nombre(attendu), "expr={expr:?}");
}

/* ------------------------ Équilibre ------------------------ */

#[test]
fn pipe_parentheses_desequilibrees() {
    assert_invalide("(1+2");
    assert_invalide("1+2)");
    assert_invalide("((1+2)");
    assert_invalide(")(");
}

/* ------------------------ Multiplication implicite ------------------------ */

#[test]
fn pipe_multiplication_implicite() {
    assert_vaut("2(3+4)", "14");
    assert_vaut("(1+1)(2+2)", "8");
    assert_vaut("2.5(2)", "5");
}

#[test]
fn pipe_implicite_entre_appels_trig() {
    // cos(0)tan(0) -> 1*0
    assert_vaut("cos(0)tan(0)", "0");
    assert_vaut_f64("2sin(1)", 2.0 * (1.0_f64).sin());
}

/* ------------------------ Réduction des groupes ------------------------ */

#[test]
fn pipe_parentheses_redondantes() {
    assert_vaut("((5))", "5");
    assert_vaut("(((1+2)))", "3");
}

#[test]
fn pipe_groupe_negatif_converge() {
    // (0-5) se réduit en littéral -5 sans boucler
    assert_vaut("(0-5)", "-5");
    assert_vaut("4*(2-3)", "-4");
    assert_vaut("(0-5)+10", "5");
}

#[test]
fn pipe_groupes_hors_argument_trig_laisses_puis_evalues() {
    // l'arrêt sur argument trig laisse (2+3) en place ; l'arithmétique
    // finale accepte ce niveau de groupement résiduel
    assert_vaut("sin(0)+(2+3)", "5");
    assert_vaut("sin(0)+(2+3)(4)", "20");
}

/* ------------------------ Trig ------------------------ */

#[test]
fn pipe_trig_valeurs_simples() {
    assert_vaut("sin(0)", "0");
    assert_vaut("cos(0)", "1");
    assert_vaut("tan(0)", "0");
}

#[test]
fn pipe_trig_argument_compose() {
    // l'argument est réduit à 5 avant application, pas terme à terme
    assert_vaut_f64("sin(2+3)", (5.0_f64).sin());
    assert_vaut_f64("cos(2*3)", (6.0_f64).cos());
}

#[test]
fn pipe_trig_imbriquee() {
    assert_vaut_f64("sin(cos(0))", (1.0_f64).sin());
    assert_vaut_f64("sin(2*cos(0))", (2.0_f64).sin());
}

#[test]
fn pipe_trig_dans_expression() {
    assert_vaut_f64("1+sin(0)*3", 1.0);
    assert_vaut_f64("tan(1)/tan(1)", 1.0);
}

#[test]
fn pipe_trig_mal_formee() {
    assert_invalide("sin()");
    assert_invalide("sin(2+)");
    assert_invalide("sin(2");
    // préfixe lettré inconnu : irrésolu, donc refusé
    assert_invalide("x(2)");
}

/* ------------------------ Arithmétique finale ------------------------ */

#[test]
fn pipe_precedence_et_associativite() {
    assert_vaut("2+3*4", "14");
    assert_vaut("10-4-3", "3");
    assert_vaut("16/4/2", "2");
}

#[test]
fn pipe_division_par_zero() {
    assert_invalide("1/0");
    assert_invalide("1/(2-2)");
    assert_invalide("sin(1/0)");
}

#[test]
fn pipe_operateurs_mal_places() {
    assert_invalide("1+");
    assert_invalide("*2");
    assert_invalide("1++2");
}

#[test]
fn pipe_decimaux() {
    assert_vaut("1.5+1.5", "3");
    assert_vaut("7/2", "3.5");
    assert_vaut(".5*4", "2");
}
