// src/noyau/scientifique.rs
//
// Fonctions scientifiques (√, sin/cos/tan en degrés, log10, n!)
// -------------------------------------------------------------
// - √ / trig / log passent par le double : décimal -> f64 -> fonction -> décimal.
//   Un NaN ou un infini (√ négative, log de 0 ou négatif) devient un échec.
// - n! reste exacte (big int) après troncature entière de l’opérande ;
//   produit par moitiés, taille du résultat bornée comme pour ^.

use std::f64::consts::{E, PI};

use num_bigint::BigInt;
use num_traits::One;
use tracing::trace;

use super::decimal::{Decimal, CHIFFRES_MAX};
use super::erreur::{EchecEvaluation, ResultatNoyau};
use super::regles::Fonction;

impl Fonction {
    pub fn appliquer(self, x: &Decimal) -> ResultatNoyau<Decimal> {
        match self {
            Fonction::Racine => racine(x),
            Fonction::Sin => sinus_degres(x),
            Fonction::Cos => cosinus_degres(x),
            Fonction::Log => log10(x),
            Fonction::Factorielle => factorielle(x),
            Fonction::Tan => tangente_degres(x),
        }
    }
}

pub fn racine(x: &Decimal) -> ResultatNoyau<Decimal> {
    Decimal::depuis_f64(x.vers_f64().sqrt())
}

pub fn sinus_degres(angle: &Decimal) -> ResultatNoyau<Decimal> {
    Decimal::depuis_f64(angle.vers_f64().to_radians().sin())
}

pub fn cosinus_degres(angle: &Decimal) -> ResultatNoyau<Decimal> {
    Decimal::depuis_f64(angle.vers_f64().to_radians().cos())
}

pub fn tangente_degres(angle: &Decimal) -> ResultatNoyau<Decimal> {
    Decimal::depuis_f64(angle.vers_f64().to_radians().tan())
}

pub fn log10(x: &Decimal) -> ResultatNoyau<Decimal> {
    Decimal::depuis_f64(x.vers_f64().log10())
}

/// n! = 2 × 3 × … × n, avec n = troncature entière de x.
/// 0! = 1! = 1 ; n négatif => échec.
pub fn factorielle(x: &Decimal) -> ResultatNoyau<Decimal> {
    let n = x.valeur_entiere()?;
    if n < 0 {
        trace!(n, "factorielle d’un négatif");
        return Err(EchecEvaluation::Indefini);
    }
    let chiffres = chiffres_factorielle(n);
    if chiffres > CHIFFRES_MAX as f64 {
        trace!(n, chiffres, "factorielle au-delà du garde-fou");
        return Err(EchecEvaluation::Indefini);
    }

    Ok(Decimal::entier(produit_intervalle(2, n as u64)))
}

/// Nombre de chiffres de n! (Stirling, légèrement par excès).
fn chiffres_factorielle(n: i32) -> f64 {
    if n < 2 {
        return 1.0;
    }
    let n = f64::from(n);
    n * (n / E).log10() + 0.5 * (2.0 * PI * n).log10() + 1.0
}

/// a × (a+1) × … × b ; vide => 1.
fn produit_intervalle(a: u64, b: u64) -> BigInt {
    if b < a {
        return BigInt::one();
    }
    if b - a < 16 {
        return (a..=b).fold(BigInt::one(), |p, i| p * i);
    }
    let milieu = a + (b - a) / 2;
    produit_intervalle(a, milieu) * produit_intervalle(milieu + 1, b)
}
