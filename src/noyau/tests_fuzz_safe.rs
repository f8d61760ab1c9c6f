//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariant clé : calculer() ne panique jamais ; en cas de succès le
//!   résultat est un décimal fini qui reparse en f64

use std::time::{Duration, Instant};

use super::eval::calculer;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d'expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    // petits nombres, 0 compris (utile pour provoquer des divisions par zéro)
    let n = rng.pick(8);
    if rng.coin() {
        format!("{n}")
    } else {
        format!("{n}.{}", rng.pick(10))
    }
}

fn gen_op(rng: &mut Rng) -> char {
    match rng.pick(4) {
        0 => '+',
        1 => '-',
        2 => '*',
        _ => '/',
    }
}

fn gen_trig(rng: &mut Rng) -> &'static str {
    match rng.pick(3) {
        0 => "sin",
        1 => "cos",
        _ => "tan",
    }
}

/// Expression équilibrée, profondeur bornée. Bien parenthésée par
/// construction, mais pas toujours évaluable : division par zéro possible,
/// et une variante volontairement dégénérée (appel trig sans argument).
fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_nombre(rng);
    }

    match rng.pick(8) {
        0 | 1 => gen_nombre(rng),
        2 => format!(
            "{}{}{}",
            gen_expr(rng, depth - 1),
            gen_op(rng),
            gen_expr(rng, depth - 1)
        ),
        3 => format!("({})", gen_expr(rng, depth - 1)),
        4 => format!("{}({})", gen_trig(rng), gen_expr(rng, depth - 1)),
        5 => format!(
            "({})({})",
            gen_expr(rng, depth - 1),
            gen_expr(rng, depth - 1)
        ),
        6 => format!("{}({})", gen_nombre(rng), gen_expr(rng, depth - 1)),
        _ => format!("{}()", gen_trig(rng)), // dégénéré : argument vide
    }
}

/// Soupe de caractères du clavier, équilibre non garanti.
fn gen_soupe(rng: &mut Rng, longueur: usize) -> String {
    const ALPHABET: &[u8] = b"0123456789.+-*/()sincostan";
    (0..longueur)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize] as char)
        .collect()
}

fn verifie_sortie(expr: &str) {
    if let Ok(v) = calculer(expr) {
        let reparse: f64 = v
            .parse()
            .unwrap_or_else(|_| panic!("sortie non décimale: expr={expr:?} v={v:?}"));
        assert!(
            reparse.is_finite(),
            "sortie non finie: expr={expr:?} v={v:?}"
        );
    }
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_expressions_equilibrees() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);
        match calculer(&expr) {
            Ok(_) => {
                verifie_sortie(&expr);
                seen_ok += 1;
            }
            Err(_) => seen_err += 1,
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne "balaye" rien.
    assert!(seen_ok > 10, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop \"sage\"");
}

#[test]
fn fuzz_safe_determinisme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    // Même seed => mêmes expressions => mêmes sorties
    let mut a = Rng::new(0xBADC0DE_u64);
    let mut b = a.clone();

    for _ in 0..120 {
        budget(t0, max);

        let ea = gen_expr(&mut a, 4);
        let eb = gen_expr(&mut b, 4);
        assert_eq!(ea, eb);
        assert_eq!(calculer(&ea), calculer(&eb));
    }
}

#[test]
fn fuzz_safe_soupe_de_caracteres() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xFACADE_u64);

    for _ in 0..400 {
        budget(t0, max);

        let len = 1 + rng.pick(24) as usize;
        let expr = gen_soupe(&mut rng, len);
        // aucune contrainte de validité : on vérifie juste l'absence de
        // panique et la forme de la sortie en cas de succès
        verifie_sortie(&expr);
    }
}

#[test]
fn fuzz_safe_imbrication_profonde() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    // ((((...1...)))) : réduction purement itérative, pas de récursion
    let n = 200;
    let expr = format!("{}1{}", "(".repeat(n), ")".repeat(n));

    budget(t0, max);
    assert_eq!(calculer(&expr).as_deref(), Ok("1"));
}
