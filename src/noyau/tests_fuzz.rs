//! Tests fuzz : robustesse + déterminisme + limites contrôlées.
//!
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - seule erreur acceptée sur entrée valide : division par zéro (et alors des deux côtés)

use std::time::{Duration, Instant};

use super::erreur::Genre;
use super::tests_proprietes::verifier_accord;
use super::{eval_postfix, eval_prefix, to_postfix, to_prefix, validate};

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
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn gen_atom(rng: &mut Rng) -> String {
    match rng.pick(6) {
        0 => "0".to_string(),
        1 => format!("{}.5", rng.pick(10)),
        2 => format!("{}", 10 + rng.pick(90)),
        _ => format!("{}", 1 + rng.pick(9)),
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

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_atom(rng);
    }

    match rng.pick(4) {
        0 => gen_atom(rng),
        // sans parenthèses : la précédence décide
        1 | 2 => format!(
            "{}{}{}",
            gen_expr(rng, depth - 1),
            gen_op(rng),
            gen_expr(rng, depth - 1)
        ),
        _ => format!("({})", gen_expr(rng, depth - 1)),
    }
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_accord_postfixe_prefixe_reference() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_div0 = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 5);
        assert_eq!(validate(&expr), Ok(()), "généré invalide: {expr:?}");

        let post = to_postfix(&expr).unwrap().resultat;
        let pre = to_prefix(&expr).unwrap().resultat;

        match (eval_postfix(&post), eval_prefix(&pre)) {
            (Ok(_), Ok(_)) => {
                verifier_accord(&expr);
                seen_ok += 1;
            }
            (Err(a), Err(b)) => {
                assert_eq!(a.genre(), Genre::DivisionByZero, "expr={expr:?}");
                assert_eq!(b.genre(), Genre::DivisionByZero, "expr={expr:?}");
                seen_div0 += 1;
            }
            (a, b) => panic!("désaccord pour {expr:?}: postfixe={a:?} préfixe={b:?}"),
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 100, "trop peu de succès: {seen_ok}");
    assert!(seen_div0 > 0, "aucune division par zéro vue: fuzz trop “sage”");
}

#[test]
fn fuzz_determinisme_des_demarches() {
    let mut a = Rng::new(0xBADC0DE_u64);
    let mut b = Rng::new(0xBADC0DE_u64);

    for _ in 0..50 {
        let ea = gen_expr(&mut a, 4);
        let eb = gen_expr(&mut b, 4);
        assert_eq!(ea, eb);

        let (pa, pb) = (to_postfix(&ea).unwrap(), to_postfix(&eb).unwrap());
        assert_eq!(pa.etapes.len(), pb.etapes.len());
        assert_eq!(pa, pb);
        assert_eq!(to_prefix(&ea).unwrap(), to_prefix(&eb).unwrap());
    }
}

#[test]
fn fuzz_profondeur_sans_recursion() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    // parenthésage profond : les deux algorithmes sont itératifs
    // (la démarche garde un instantané par étape : taille quadratique, on reste modeste)
    let n = 400;
    let expr = format!("{}1+1{}", "(".repeat(n), ")".repeat(n));
    let post = to_postfix(&expr).unwrap();
    let pre = to_prefix(&expr).unwrap();
    assert_eq!(post.resultat, "1 1 +");
    assert_eq!(pre.resultat, "+ 1 1");
    budget(t0, max);

    // longue chaîne à gauche : 300 termes
    let chaine = vec!["1"; 300].join("-");
    let post = to_postfix(&chaine).unwrap().resultat;
    let pre = to_prefix(&chaine).unwrap().resultat;
    assert_eq!(eval_postfix(&post).unwrap(), 1.0 - 299.0);
    assert_eq!(eval_prefix(&pre).unwrap(), 1.0 - 299.0);
    budget(t0, max);
}
