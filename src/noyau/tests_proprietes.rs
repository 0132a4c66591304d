//! Tests de propriétés : les deux chemins (postfixe, préfixe) doivent s'accorder
//! entre eux et avec une évaluation directe de l'infixe.
//!
//! L'évaluateur de référence est une descente récursive indépendante
//! (précédence usuelle, associativité à gauche), écrite ici pour ne rien
//! partager avec le shunting-yard.

use super::erreur::Genre;
use super::{eval_postfix, eval_prefix, to_postfix, to_prefix, validate};

/* ------------------------ Référence (descente récursive) ------------------------ */

struct Reference {
    chars: Vec<char>,
    i: usize,
}

impl Reference {
    fn new(src: &str) -> Self {
        Self {
            chars: src.chars().filter(|c| !c.is_whitespace()).collect(),
            i: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.i).copied()
    }

    // somme := produit (('+'|'-') produit)*
    fn somme(&mut self) -> f64 {
        let mut acc = self.produit();
        while let Some(c @ ('+' | '-')) = self.peek() {
            self.i += 1;
            let rhs = self.produit();
            acc = if c == '+' { acc + rhs } else { acc - rhs };
        }
        acc
    }

    // produit := atome (('*'|'/') atome)*
    fn produit(&mut self) -> f64 {
        let mut acc = self.atome();
        while let Some(c @ ('*' | '/')) = self.peek() {
            self.i += 1;
            let rhs = self.atome();
            acc = if c == '*' { acc * rhs } else { acc / rhs };
        }
        acc
    }

    fn atome(&mut self) -> f64 {
        if self.peek() == Some('(') {
            self.i += 1;
            let v = self.somme();
            assert_eq!(self.peek(), Some(')'), "référence: ')' attendue");
            self.i += 1;
            return v;
        }
        let start = self.i;
        while matches!(self.peek(), Some(c) if c.is_ascii_digit() || c == '.') {
            self.i += 1;
        }
        let mot: String = self.chars[start..self.i].iter().collect();
        mot.parse()
            .unwrap_or_else(|_| panic!("référence: nombre attendu, lu {mot:?}"))
    }
}

fn reference(expr: &str) -> f64 {
    let mut r = Reference::new(expr);
    let v = r.somme();
    assert_eq!(r.peek(), None, "référence: reste non lu dans {expr:?}");
    v
}

fn proche(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * (1.0 + a.abs().max(b.abs()))
}

/// Vérifie l'accord des trois évaluations et renvoie la valeur.
pub(super) fn verifier_accord(expr: &str) -> f64 {
    let post = to_postfix(expr).unwrap_or_else(|e| panic!("to_postfix({expr:?}): {e}"));
    let pre = to_prefix(expr).unwrap_or_else(|e| panic!("to_prefix({expr:?}): {e}"));

    let v_post = eval_postfix(&post.resultat)
        .unwrap_or_else(|e| panic!("eval_postfix({:?}): {e}", post.resultat));
    let v_pre = eval_prefix(&pre.resultat)
        .unwrap_or_else(|e| panic!("eval_prefix({:?}): {e}", pre.resultat));
    let v_ref = reference(expr);

    assert!(
        proche(v_post, v_pre),
        "postfixe/préfixe divergent pour {expr:?}: {v_post} vs {v_pre} ({:?} / {:?})",
        post.resultat,
        pre.resultat
    );
    assert!(
        proche(v_post, v_ref),
        "postfixe/référence divergent pour {expr:?}: {v_post} vs {v_ref}"
    );
    v_post
}

/* ------------------------ Aller-retour sur exemples ------------------------ */

#[test]
fn prop_exemples_de_reference() {
    let cas = [
        ("(2+3)*4", "2 3 + 4 *", "* + 2 3 4", 20.0),
        ("10+2*6", "10 2 6 * +", "+ 10 * 2 6", 22.0),
        ("2+3*4-5", "2 3 4 * + 5 -", "- + 2 * 3 4 5", 9.0),
    ];

    for (infixe, postfixe, prefixe, valeur) in cas {
        assert_eq!(to_postfix(infixe).unwrap().resultat, postfixe);
        assert_eq!(to_prefix(infixe).unwrap().resultat, prefixe);
        assert_eq!(eval_postfix(postfixe).unwrap(), valeur);
        assert_eq!(eval_prefix(prefixe).unwrap(), valeur);
        assert!(proche(verifier_accord(infixe), valeur));
    }
}

#[test]
fn prop_associativite_et_precedence() {
    for e in [
        "2-3-4",
        "100/10/5",
        "2*3/4*5",
        "1-2+3-4+5",
        "8/(4/2)",
        "(1+2)*(3+4)/(5-6)",
        "((((7))))",
        "1.5*4-0.25/0.5",
        "12-3*(4+5)/9",
    ] {
        verifier_accord(e);
    }
}

#[test]
fn prop_moins_en_tete_particularite() {
    // "-5+3" passe la validation mais le moins en tête n'a pas d'opérande gauche
    assert_eq!(validate("-5+3"), Ok(()));
    let post = to_postfix("-5+3").unwrap();
    assert_eq!(post.resultat, "5 - 3 +");
    assert_eq!(
        eval_postfix(&post.resultat).unwrap_err().genre(),
        Genre::InsufficientOperands
    );
}

#[test]
fn prop_moins_en_queue_particularite() {
    let pre = to_prefix("2-").unwrap();
    assert_eq!(pre.resultat, "- 2");
    assert_eq!(
        eval_prefix(&pre.resultat).unwrap_err().genre(),
        Genre::InsufficientOperands
    );
}

#[test]
fn prop_variables_convertibles_mais_pas_evaluables() {
    let post = to_postfix("a*(b+1)").unwrap();
    assert_eq!(post.resultat, "a b 1 + *");
    assert_eq!(
        eval_postfix(&post.resultat).unwrap_err().genre(),
        Genre::UnboundVariable
    );

    let pre = to_prefix("a*(b+1)").unwrap();
    assert_eq!(pre.resultat, "* a + b 1");
    assert_eq!(
        eval_prefix(&pre.resultat).unwrap_err().genre(),
        Genre::UnboundVariable
    );
}

#[test]
fn prop_idempotence_des_appels() {
    for e in ["(2+3)*4", "a-b-c", "x/(y*z)+1"] {
        let p1 = to_postfix(e).unwrap();
        let p2 = to_postfix(e).unwrap();
        assert_eq!(p1, p2);

        let q1 = to_prefix(e).unwrap();
        let q2 = to_prefix(e).unwrap();
        assert_eq!(q1, q2);
    }
}

#[test]
fn prop_appels_concurrents() {
    let poignees: Vec<_> = (0..4)
        .map(|k| {
            std::thread::spawn(move || {
                let e = format!("({k}+3)*4-{k}");
                (to_postfix(&e).unwrap(), to_prefix(&e).unwrap())
            })
        })
        .collect();

    for (k, p) in poignees.into_iter().enumerate() {
        let (post, pre) = p.join().expect("thread de conversion");
        let attendu = ((k as f64) + 3.0) * 4.0 - k as f64;
        assert_eq!(eval_postfix(&post.resultat).unwrap(), attendu);
        assert_eq!(eval_prefix(&pre.resultat).unwrap(), attendu);
    }
}
