//! Tests scientifiques (campagne) : invariants + propriétés + limites contrôlées.
//!
//! But : vérifier le pipeline de bout en bout, étape par étape.
//! - opérations binaires simples == arithmétique directe
//! - chaque famille d'erreur est levée par la bonne étape
//! - idempotence (aucun état caché entre deux appels)
//! - arbre : feuilles == opérateurs + 1
//! - stress borné (chaînes longues, imbrication profonde, profondeur plafonnée)

use super::erreur::Erreur;
use super::eval_expression;
use super::jetons::{tokenize, Tok};
use super::rpn::{from_rpn, to_rpn, MAX_PROFONDEUR};

fn eval_ok(expr: &str) -> f64 {
    eval_expression(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn meme_valeur(a: f64, b: f64) -> bool {
    (a.is_nan() && b.is_nan()) || a.to_bits() == b.to_bits() || a == b
}

/* ------------------------ Exemples de référence ------------------------ */

#[test]
fn sci_exemples_reference() {
    let cas: &[(&str, f64)] = &[
        ("3 + 5", 8.0),
        ("10 + 2 * 6", 22.0),
        ("100 * (2 + 12)", 1400.0),
        ("100 * (2 + 12) / 14", 100.0),
        ("2 ^ 3 ^ 2", 512.0),
        ("(-5 + 3) + 9 - 2 + (-2 + -5)", -2.0),
    ];
    for (expr, attendu) in cas {
        assert_eq!(eval_ok(expr), *attendu, "expr={expr:?}");
    }
}

/* ------------------------ "<a> <op> <b>" == arithmétique directe ------------------------ */

#[test]
fn sci_binaire_egal_arithmetique_directe() {
    let nombres: &[(&str, f64)] = &[
        ("0", 0.0),
        ("1", 1.0),
        ("7", 7.0),
        ("2.5", 2.5),
        (".5", 0.5),
        ("123.456", 123.456),
        ("-3", -3.0),
        ("-0.25", -0.25),
    ];
    let ops: &[(&str, fn(f64, f64) -> f64)] = &[
        ("+", |a, b| a + b),
        ("-", |a, b| a - b),
        ("*", |a, b| a * b),
        ("/", |a, b| a / b),
        ("^", f64::powf),
    ];

    for (ta, a) in nombres {
        for (tb, b) in nombres {
            for (top, f) in ops {
                let expr = format!("{ta} {top} {tb}");
                let r = eval_expression(&expr);
                if *top == "/" && *b == 0.0 {
                    assert!(matches!(r, Err(Erreur::Arithmetique(_))), "expr={expr:?}");
                    continue;
                }
                let v = r.unwrap_or_else(|e| panic!("expr={expr:?} err={e}"));
                let attendu = f(*a, *b);
                assert!(meme_valeur(v, attendu), "expr={expr:?} v={v} attendu={attendu}");
            }
        }
    }
}

/* ------------------------ Précédence / associativité ------------------------ */

#[test]
fn sci_soustraction_et_division_a_gauche() {
    assert_eq!(eval_ok("10 - 4 - 3"), 3.0);
    assert_eq!(eval_ok("64 / 4 / 2"), 8.0);
    assert_eq!(eval_ok("2 * 3 / 4 * 8"), 12.0);
}

#[test]
fn sci_puissance_a_droite_et_prioritaire() {
    assert_eq!(eval_ok("2 ^ 2 ^ 3"), 256.0);
    assert_eq!(eval_ok("2 * 3 ^ 2"), 18.0);
    assert_eq!(eval_ok("-2 ^ 2"), 4.0); // -2 est un littéral
    assert_eq!(eval_ok("0 - 2 ^ 2"), -4.0);
}

#[test]
fn sci_parentheses_redondantes() {
    assert_eq!(eval_ok("((((7))))"), 7.0);
    assert_eq!(eval_ok("((1 + 2)) * ((3))"), 9.0);
}

/* ------------------------ Erreurs : la bonne étape ------------------------ */

#[test]
fn sci_familles_erreurs() {
    let cas: &[(&str, &str)] = &[
        ("", "EvalError"),
        ("   ", "StructureError"),
        ("abc", "LexError"),
        ("3 + -", "LexError"),
        ("1..2", "LexError"),
        ("+ 3", "SyntaxError"),
        ("3 + + 4", "SyntaxError"),
        ("3 * / 4", "SyntaxError"),
        ("(3 + 4", "SyntaxError"),
        ("3 + 4)", "SyntaxError"),
        ("(+ 1)", "SyntaxError"),
        ("3 +", "StructureError"),
        ("3 4", "StructureError"),
        ("()", "StructureError"),
        ("5 / 0", "ArithmeticError"),
        ("5 / (2 - 2)", "ArithmeticError"),
        ("1 + 5 / -0", "ArithmeticError"),
    ];
    for (expr, genre) in cas {
        let e = eval_expression(expr).expect_err(expr);
        assert_eq!(e.genre(), *genre, "expr={expr:?} err={e}");
    }
}

#[test]
fn sci_jamais_interne_depuis_le_texte() {
    for expr in ["((", "))", ")1(", "1)(2", "-(", "^^", "*", "(((1 +)))", "1 ^ (", "."] {
        if let Err(e) = eval_expression(expr) {
            assert!(!matches!(e, Erreur::Interne(_)), "expr={expr:?} err={e:?}");
        }
    }
}

/* ------------------------ Idempotence ------------------------ */

#[test]
fn sci_idempotence() {
    for expr in ["3 + 5", "0.1 + 0.2", "2 ^ 0.5", "5 / 0", "(1", "x"] {
        let a = eval_expression(expr);
        let b = eval_expression(expr);
        match (a, b) {
            (Ok(x), Ok(y)) => assert_eq!(x.to_bits(), y.to_bits(), "expr={expr:?}"),
            (Err(x), Err(y)) => assert_eq!(x, y, "expr={expr:?}"),
            (a, b) => panic!("résultats différents pour {expr:?}: {a:?} / {b:?}"),
        }
    }
}

/* ------------------------ Arbre : feuilles == opérateurs + 1 ------------------------ */

#[test]
fn sci_feuilles_egal_operateurs_plus_un() {
    let exprs = [
        "1",
        "1 + 2",
        "(-5 + 3) + 9 - 2 + (-2 + -5)",
        "3 + 4 * 2 / (1 - 5) ^ 2 ^ 3",
        "((2))",
        "2 ^ 2 ^ 2 ^ 2",
    ];
    for expr in exprs {
        let jetons = tokenize(expr).unwrap();
        let rpn = to_rpn(&jetons).unwrap();
        let arbre = from_rpn(&rpn).unwrap();

        let ops_rpn = rpn.iter().filter(|t| t.est_operateur()).count();
        let nums_rpn = rpn.iter().filter(|t| matches!(t, Tok::Num(_))).count();

        assert_eq!(arbre.nb_feuilles(), arbre.nb_operateurs() + 1, "expr={expr:?}");
        assert_eq!(arbre.nb_operateurs(), ops_rpn, "expr={expr:?}");
        assert_eq!(arbre.nb_feuilles(), nums_rpn, "expr={expr:?}");
        // la RPN ne contient jamais de parenthèses
        assert_eq!(rpn.len(), ops_rpn + nums_rpn, "expr={expr:?}");
    }
}

/* ------------------------ Stress borné ------------------------ */

#[test]
#[ntest::timeout(5000)]
fn sci_chaine_longue() {
    let n = 2000;
    let expr = vec!["1"; n].join(" + ");
    assert_eq!(eval_ok(&expr), n as f64);
}

#[test]
#[ntest::timeout(5000)]
fn sci_imbrication_profonde() {
    let n = 500;
    let expr = format!("{}1{}", "(".repeat(n), ")".repeat(n));
    assert_eq!(eval_ok(&expr), 1.0);

    let desequilibre = format!("{}1{}", "(".repeat(n), ")".repeat(n - 1));
    assert!(matches!(eval_expression(&desequilibre), Err(Erreur::Syntaxe(_))));
}

#[test]
#[ntest::timeout(5000)]
fn sci_chaine_trop_profonde_refusee() {
    // l'arbre d'une chaîne associative à gauche est aussi profond qu'elle est longue
    let expr = vec!["1"; 300_000].join(" + ");
    let e = eval_expression(&expr).unwrap_err();
    assert_eq!(e, Erreur::structure("expression too deeply nested"));

    let cascade = vec!["2"; MAX_PROFONDEUR + 1].join(" ^ ");
    assert!(matches!(eval_expression(&cascade), Err(Erreur::Structure(_))));
}

#[test]
#[ntest::timeout(5000)]
fn sci_puissances_en_cascade() {
    // associatif à droite : arbre profond vers la droite
    let expr = vec!["1"; 2000].join(" ^ ");
    assert_eq!(eval_ok(&expr), 1.0);
}
