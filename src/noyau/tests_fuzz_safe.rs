//! Fuzz déterministe du découpage.
//!
//! Saisies générées depuis une graine fixe, de longueur courte, sous un budget
//! de temps. Aucune panique ; tout succès s’affiche sous une forme qui se relit
//! comme littéral et se réévalue à l’identique.

use std::time::{Duration, Instant};

use super::decimal::Decimal;
use super::{evaluer_expression, texte_affichage};

/* ------------------------ Tirage ------------------------ */

/// Générateur congruentiel : même graine, même suite de saisies.
struct Tirage(u64);

impl Tirage {
    fn indice(&mut self, n: usize) -> usize {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        ((self.0 >> 32) as usize) % n.max(1)
    }

    fn parmi<'a>(&mut self, choix: &[&'a str]) -> &'a str {
        choix[self.indice(choix.len())]
    }
}

fn budget(debut: Instant, max: Duration) {
    assert!(debut.elapsed() <= max, "budget temps dépassé: {max:?}");
}

/* ------------------------ Génération (bornée) ------------------------ */

/// Libellés que les boutons ajoutent au texte (sans Clear ni =).
const LIBELLES: &[&str] = &[
    "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "+", "-", "*", "/", "^", "√", "sin", "cos",
    "log", "!", "tan",
];

/// Morceaux hors clavier : points, exposants, texte d’erreur déjà affiché, etc.
const MORCEAUX_LIBRES: &[&str] = &[".", "E", "e", "E+", " ", "Error", "π", "(", "0.", "1E-3"];

fn gen_saisie(tirage: &mut Tirage, longueur: usize, libre: bool) -> String {
    (0..longueur)
        .map(|_| {
            if libre && tirage.indice(4) == 0 {
                tirage.parmi(MORCEAUX_LIBRES)
            } else {
                tirage.parmi(LIBELLES)
            }
        })
        .collect()
}

fn check_invariant_succes(expr: &str) {
    if let Ok(v) = evaluer_expression(expr) {
        let texte = v.to_string();
        let relu = Decimal::lire(&texte)
            .unwrap_or_else(|| panic!("forme canonique illisible: expr={expr:?} texte={texte:?}"));
        assert_eq!(relu, v, "relecture différente: expr={expr:?}");
        assert_eq!(
            texte_affichage(&evaluer_expression(&texte)),
            texte,
            "réévaluation différente: expr={expr:?}"
        );
    }
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_saisies_clavier() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    let mut tirage = Tirage(0xC0FFEE);

    let mut succes = 0usize;
    let mut echecs = 0usize;

    for _ in 0..400 {
        budget(t0, max);

        let longueur = 1 + tirage.indice(8);
        let expr = gen_saisie(&mut tirage, longueur, false);

        check_invariant_succes(&expr);
        match evaluer_expression(&expr) {
            Ok(_) => succes += 1,
            Err(_) => echecs += 1,
        }
    }

    // les deux issues doivent apparaître
    assert!(succes > 10, "trop peu de succès: {succes}");
    assert!(echecs > 10, "trop peu d’échecs: {echecs}");
}

#[test]
fn fuzz_safe_saisies_libres_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    let mut tirage = Tirage(0xBADC0DE);

    for _ in 0..400 {
        budget(t0, max);

        let longueur = tirage.indice(12);
        let expr = gen_saisie(&mut tirage, longueur, true);

        check_invariant_succes(&expr);
    }
}

#[test]
fn fuzz_safe_determinisme() {
    let mut a = Tirage(42);
    let mut b = Tirage(42);

    for _ in 0..100 {
        let ea = gen_saisie(&mut a, 6, true);
        let eb = gen_saisie(&mut b, 6, true);
        assert_eq!(ea, eb);
        assert_eq!(
            texte_affichage(&evaluer_expression(&ea)),
            texte_affichage(&evaluer_expression(&eb))
        );
    }
}

#[test]
fn fuzz_safe_gros_nombres_sans_gel() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    // gros opérandes contrôlés (200 chiffres) et résultats de plusieurs milliers de chiffres
    let big = "9".repeat(200);
    for expr in [
        format!("{big}*{big}"),
        format!("{big}/7"),
        format!("{big}+1"),
        format!("2^{big}"),
        format!("{big}!"),
        "9^9999".to_string(),
        "2^10001".to_string(),
        "5001!".to_string(),
        "1+".repeat(300) + "1",
    ] {
        budget(t0, max);
        check_invariant_succes(&expr);
    }

    assert!(evaluer_expression("2^10001").is_ok());
    assert!(evaluer_expression("5001!").is_ok());

    // exposant hors i32, ou résultat de centaines de milliers de chiffres => échec rapide
    for expr in [format!("2^{big}"), format!("{big}!"), "9^999999".into(), "100000!".into()] {
        budget(t0, max);
        assert!(evaluer_expression(&expr).is_err(), "échec attendu: {expr}");
    }
}
