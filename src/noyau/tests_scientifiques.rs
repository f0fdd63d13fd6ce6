//! Tests scientifiques (campagne) : propriétés du découpage + cas limites.
//!
//! Notes importantes (aligné avec le comportement voulu du noyau) :
//! - Les propriétés binaires utilisent des littéraux NON négatifs : un '-' de tête
//!   dans un opérande est lui-même un marqueur de découpe ("2*-3" échoue).
//! - √ / trig / log passent par le double : comparaison avec tolérance.
//! - Associativité : on coupe à la première occurrence => récursion à DROITE.

use super::decimal::Decimal;
use super::evaluer_expression;
use super::format::formater_resultat;

const LITTERAUX: &[&str] = &[
    "0", "1", "7", "42", "0.5", "3.25", "10", "100", "2.000", "123456789012345678901234567890",
    "0.001", "99.99",
];

fn eval_txt(expr: &str) -> String {
    let v = evaluer_expression(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"));
    formater_resultat(&v)
}

fn lit(s: &str) -> Decimal {
    Decimal::lire(s).unwrap_or_else(|| panic!("littéral refusé: {s:?}"))
}

fn approx(expr: &str, attendu: f64) {
    let v = evaluer_expression(expr)
        .unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
        .vers_f64();
    assert!(
        (v - attendu).abs() < 1e-9,
        "expr={expr:?} obtenu={v} attendu={attendu}"
    );
}

fn assert_echec(expr: &str) {
    assert!(
        evaluer_expression(expr).is_err(),
        "échec attendu pour expr={expr:?}"
    );
}

/* ------------------------ Littéraux ------------------------ */

#[test]
fn sci_litteraux_exacts() {
    for s in LITTERAUX
        .iter()
        .copied()
        .chain(["-5", "-0.75", "+8", "1.5E3", "2e-4"])
    {
        assert_eq!(evaluer_expression(s), Ok(lit(s)), "expr={s:?}");
    }
}

/* ------------------------ Propriétés binaires ------------------------ */

#[test]
fn sci_addition_multiplication_par_morceaux() {
    for a in LITTERAUX {
        for b in LITTERAUX {
            let (da, db) = (lit(a), lit(b));

            assert_eq!(
                evaluer_expression(&format!("{a}+{b}")),
                da.ajouter(&db),
                "expr={a}+{b}"
            );
            assert_eq!(
                evaluer_expression(&format!("{a}*{b}")),
                da.multiplier(&db),
                "expr={a}*{b}"
            );
        }
    }
}

#[test]
fn sci_division_par_morceaux() {
    for a in LITTERAUX {
        for b in LITTERAUX {
            let (da, db) = (lit(a), lit(b));
            let expr = format!("{a}/{b}");
            if db.est_zero() {
                assert_echec(&expr);
            } else {
                assert_eq!(evaluer_expression(&expr), da.diviser(&db), "expr={expr}");
            }
        }
    }
}

#[test]
fn sci_puissance_exposant_tronque() {
    for a in ["0", "2", "1.5", "10"] {
        for (b, n) in [("0", 0), ("3", 3), ("3.7", 3), ("10", 10)] {
            assert_eq!(
                evaluer_expression(&format!("{a}^{b}")),
                lit(a).puissance(n),
                "expr={a}^{b}"
            );
        }
    }
}

/* ------------------------ Échecs ------------------------ */

#[test]
fn sci_division_par_zero() {
    assert_echec("1/0");
    assert_echec("42/0.00");
    assert_echec("0/0");
}

#[test]
fn sci_factorielle() {
    assert_eq!(eval_txt("0!"), "1");
    assert_eq!(eval_txt("1!"), "1");
    assert_eq!(eval_txt("5!"), "120");
    assert_eq!(eval_txt("10!"), "3628800");
    assert_echec("-1!");
    assert_echec("-7!");
}

#[test]
fn sci_racine_negative() {
    assert_echec("√-4");
    assert_echec("√");
    approx("√2", std::f64::consts::SQRT_2);
}

#[test]
fn sci_logarithme() {
    assert_echec("log0");
    assert_echec("log-5");
    approx("log100", 2.0);
    approx("log1000", 3.0);
    approx("log0.1", -1.0);
}

#[test]
fn sci_entrees_absurdes() {
    for s in [
        "abc", "", "++", "--", "**", "//", "^^", "!", "1..2", "sin", " 1", "1 + 1", "Error",
        // exposants de littéral hors i32 : échec, jamais de panique
        "1.5e-9223372036854775807",
        "1.5e-9223372036854775807+1",
        "1e99999999999999999999",
        "√1.5E-9223372036854775807",
    ] {
        assert_echec(s);
    }
}

#[test]
fn sci_grands_resultats_calcules() {
    assert_eq!(evaluer_expression("2^10001"), lit("2").puissance(10_001));
    assert!(evaluer_expression("2^10001").is_ok());
    assert_eq!(eval_txt("5001!").len(), 16_330);
    assert_eq!(eval_txt(&("1+".repeat(300) + "1")), "301");
}

/* ------------------------ Découpage (artefacts conservés) ------------------------ */

#[test]
fn sci_associativite_a_droite() {
    assert_eq!(eval_txt("1-2-3"), "2");
    assert_eq!(eval_txt("10-5-2"), "7");
    // coupe au premier ^ : "2" ^ "3^2" = 2^9
    assert_eq!(eval_txt("2^3^2"), "512");
}

#[test]
fn sci_trig_en_degres() {
    approx("sin90", 1.0);
    approx("cos0", 1.0);
    approx("tan45", 1.0);
    approx("sin30", 0.5);
    approx("cos180", -1.0);
    approx("sin0", 0.0);
}

#[test]
fn sci_scenarios_bout_en_bout() {
    assert_eq!(eval_txt("2+3*4"), "14");
    assert_eq!(eval_txt("2^10"), "1024");
    assert_eq!(eval_txt("100/4"), "25");
    assert_eq!(eval_txt("1/3"), "0.3333333333333333333333333333333333");
    assert_eq!(eval_txt("3!+4"), "10");
}
