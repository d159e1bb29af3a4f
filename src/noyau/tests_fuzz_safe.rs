//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - expressions générées valides : l'évaluation doit réussir (inf/NaN admis)
//! - soupe de caractères : jamais de panique, issue déterministe

use std::time::{Duration, Instant};

use super::contexte::{Contexte, ModeAngle};
use super::eval_expression;

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

/* ------------------------ Génération d'expressions valides ------------------------ */

fn gen_num(rng: &mut Rng) -> String {
    let n = rng.pick(10);
    if rng.coin() {
        format!("{n}")
    } else {
        format!("{n}.{}", rng.pick(100))
    }
}

fn gen_atom(rng: &mut Rng) -> String {
    match rng.pick(6) {
        0 | 1 => gen_num(rng),
        2 => "m".to_string(),
        3 => format!("abs({})", gen_num(rng)),
        4 => format!("sqrt({})", gen_num(rng)),
        // factorielle bornée : argument petit pour rester rapide
        _ => format!("fact({})", rng.pick(8)),
    }
}

fn gen_op(rng: &mut Rng) -> &'static str {
    match rng.pick(6) {
        0 => "+",
        1 => "-",
        2 => "*",
        3 => "/",
        4 => "%",
        _ => "^",
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_atom(rng);
    }

    match rng.pick(8) {
        0 => gen_atom(rng),
        1 => format!(
            "({}{}{})",
            gen_expr(rng, depth - 1),
            gen_op(rng),
            gen_expr(rng, depth - 1)
        ),
        2 => format!("-{}", gen_atom(rng)),
        3 => format!("sin({})", gen_expr(rng, depth - 1)),
        4 => format!("cos({})", gen_expr(rng, depth - 1)),
        5 => format!("tan({})", gen_expr(rng, depth - 1)),
        6 => format!("ncr({},{})", rng.pick(20), rng.pick(25)),
        _ => format!("npr({},{})", rng.pick(12), rng.pick(15)),
    }
}

/* ------------------------ Helper somme balancée anti pile ------------------------ */

fn somme_plate(terme: &str, n: usize) -> String {
    let items: Vec<&str> = (0..n).map(|_| terme).collect();
    items.join("+")
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_expressions_valides_evaluent() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    // Même seed => mêmes expressions => mêmes sorties (déterminisme)
    let mut rng = Rng::new(0xC0FFEE_u64);

    let ctx = Contexte::new();

    for _ in 0..200 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);

        // une expression générée est toujours bien formée : l'évaluation
        // réussit, la valeur peut être inf/NaN (IEEE)
        let v = eval_expression(&expr, &ctx)
            .unwrap_or_else(|e| panic!("expr générée refusée: {expr:?} err={e}"));

        // déterminisme bit-à-bit, contexte inchangé
        let w = eval_expression(&expr, &ctx).unwrap();
        assert_eq!(v.to_bits(), w.to_bits(), "non déterministe: {expr:?}");
    }
}

#[test]
fn fuzz_safe_mode_degres_ne_change_pas_la_forme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let mut rng = Rng::new(0xBADC0DE_u64);

    let mut ctx = Contexte::new();
    ctx.mode_angle = ModeAngle::Degres;

    for _ in 0..80 {
        budget(t0, max);

        let expr = format!("sin({})", gen_expr(&mut rng, 3));
        let v = eval_expression(&expr, &ctx)
            .unwrap_or_else(|e| panic!("expr générée refusée: {expr:?} err={e}"));

        // sin borné quand l'argument est fini
        if v.is_finite() {
            assert!((-1.0..=1.0).contains(&v), "sin hors bornes: {expr:?} -> {v}");
        }
    }
}

#[test]
fn fuzz_safe_soupe_de_caracteres_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(400);

    let mut rng = Rng::new(0xFEED_u64);
    // pool sans 'c'/'p'/'f' : les fonctions à coût borné (sin, tan, abs,
    // sqrt, ln…) peuvent se former, pas fact/ncr/npr sur un argument géant
    let pool: Vec<char> = "0123456789+-*/^%(),.absinqrtlnm ".chars().collect();

    let ctx = Contexte::new();

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..400 {
        budget(t0, max);

        let len = 1 + rng.pick(24) as usize;
        let expr: String = (0..len)
            .map(|_| pool[rng.pick(pool.len() as u32) as usize])
            .collect();

        // jamais de panique ; l'issue (valeur ou erreur) est déterministe
        let a = eval_expression(&expr, &ctx);
        let b = eval_expression(&expr, &ctx);
        match (&a, &b) {
            (Ok(x), Ok(y)) => {
                assert_eq!(x.to_bits(), y.to_bits(), "non déterministe: {expr:?}");
                seen_ok += 1;
            }
            (Err(ea), Err(eb)) => {
                assert_eq!(ea, eb, "non déterministe: {expr:?}");
                seen_err += 1;
            }
            _ => panic!("issue instable pour {expr:?}"),
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
    assert_eq!(seen_ok + seen_err, 400);
}

#[test]
fn fuzz_safe_somme_plate_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let expr = somme_plate("1", 2000);
    budget(t0, max);

    let ctx = Contexte::new();
    let v = eval_expression(&expr, &ctx).unwrap_or_else(|e| panic!("err: {e}"));
    assert_eq!(v, 2000.0);
}
