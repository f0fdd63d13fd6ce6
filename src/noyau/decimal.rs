// src/noyau/decimal.rs
//
// Décimal à précision arbitraire
// ------------------------------
// valeur = non_echelonne × 10^(-echelle)
//
// - lecture  : grammaire littérale classique (signe, chiffres, '.', exposant e/E)
// - affichage: forme canonique (simple, ou scientifique si l’exposant ajusté < -6)
// - + - × : exacts
// - ÷     : contexte 34 chiffres significatifs, arrondi demi-pair
// - ^n    : exposant entier >= 0, résultat borné en chiffres (anti-gel)
// - f64   : aller/retour via la représentation la plus courte du double

use std::cmp::Ordering;
use std::f64::consts::LOG10_2;
use std::fmt;

use num_bigint::BigInt;
use num_traits::{One, Signed, ToPrimitive, Zero};
use tracing::trace;

use super::erreur::{EchecEvaluation, ResultatNoyau};

/// Chiffres significatifs du quotient.
pub const PRECISION_DIVISION: u32 = 34;

/// Garde-fou : chiffres maximaux d’un résultat construit par `puissance` ou n!.
pub const CHIFFRES_MAX: u64 = 100_000;

/// Garde-fou : écart d’échelles maximal pour aligner deux décimaux.
const ECART_ECHELLE_MAX: i64 = CHIFFRES_MAX as i64;

fn pow10(n: u32) -> BigInt {
    BigInt::from(10).pow(n)
}

fn nombre_chiffres(n: &BigInt) -> usize {
    n.magnitude().to_str_radix(10).len()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decimal {
    non_echelonne: BigInt,
    echelle: i32,
}

impl Decimal {
    pub fn nouveau(non_echelonne: BigInt, echelle: i32) -> Self {
        Self {
            non_echelonne,
            echelle,
        }
    }

    /// Entier exact (échelle 0).
    pub fn entier(n: impl Into<BigInt>) -> Self {
        Self::nouveau(n.into(), 0)
    }

    pub fn est_zero(&self) -> bool {
        self.non_echelonne.is_zero()
    }

    /* ------------------------ Lecture ------------------------ */

    /// Lit un littéral décimal complet.
    ///
    /// `None` si le texte n’est pas un littéral (vide, espaces, lettres, signe seul...).
    pub fn lire(texte: &str) -> Option<Decimal> {
        let octets = texte.as_bytes();
        let mut i = 0;

        let negatif = match octets.first() {
            Some(b'-') => {
                i = 1;
                true
            }
            Some(b'+') => {
                i = 1;
                false
            }
            _ => false,
        };

        let mut chiffres = String::new();
        let mut fraction: i64 = 0;
        let mut point = false;

        while i < octets.len() {
            match octets[i] {
                c @ b'0'..=b'9' => {
                    chiffres.push(c as char);
                    if point {
                        fraction += 1;
                    }
                }
                b'.' if !point => point = true,
                b'e' | b'E' => break,
                _ => return None,
            }
            i += 1;
        }

        if chiffres.is_empty() {
            return None;
        }

        let exposant = if i < octets.len() {
            lire_exposant(&texte[i + 1..])?
        } else {
            0
        };

        let echelle = i32::try_from(fraction - i64::from(exposant)).ok()?;
        let mut n = BigInt::parse_bytes(chiffres.as_bytes(), 10)?;
        if negatif {
            n = -n;
        }

        Some(Self::nouveau(n, echelle))
    }

    /* ------------------------ Arithmétique exacte ------------------------ */

    /// Ramène les deux non-échelonnés sur la plus grande échelle.
    fn aligner(&self, autre: &Decimal) -> ResultatNoyau<(BigInt, BigInt, i32)> {
        match self.echelle.cmp(&autre.echelle) {
            Ordering::Equal => Ok((
                self.non_echelonne.clone(),
                autre.non_echelonne.clone(),
                self.echelle,
            )),
            Ordering::Less => {
                let k = ecart(self.echelle, autre.echelle)?;
                Ok((
                    &self.non_echelonne * pow10(k),
                    autre.non_echelonne.clone(),
                    autre.echelle,
                ))
            }
            Ordering::Greater => {
                let k = ecart(autre.echelle, self.echelle)?;
                Ok((
                    self.non_echelonne.clone(),
                    &autre.non_echelonne * pow10(k),
                    self.echelle,
                ))
            }
        }
    }

    pub fn ajouter(&self, autre: &Decimal) -> ResultatNoyau<Decimal> {
        let (a, b, echelle) = self.aligner(autre)?;
        Ok(Self::nouveau(a + b, echelle))
    }

    pub fn soustraire(&self, autre: &Decimal) -> ResultatNoyau<Decimal> {
        let (a, b, echelle) = self.aligner(autre)?;
        Ok(Self::nouveau(a - b, echelle))
    }

    pub fn multiplier(&self, autre: &Decimal) -> ResultatNoyau<Decimal> {
        let echelle = self
            .echelle
            .checked_add(autre.echelle)
            .ok_or(EchecEvaluation::Indefini)?;
        Ok(Self::nouveau(
            &self.non_echelonne * &autre.non_echelonne,
            echelle,
        ))
    }

    /// self^n, n entier >= 0 ; l’échelle est multipliée par n.
    pub fn puissance(&self, n: i32) -> ResultatNoyau<Decimal> {
        if n < 0 {
            trace!(n, "puissance : exposant négatif");
            return Err(EchecEvaluation::Indefini);
        }
        // 0^n et ±1^n restent petits quel que soit n
        let magnitude = self.non_echelonne.magnitude();
        if !magnitude.is_zero() && !magnitude.is_one() {
            let chiffres = (self.non_echelonne.bits() as f64 * f64::from(n) * LOG10_2).ceil();
            if chiffres > CHIFFRES_MAX as f64 {
                trace!(n, chiffres, "puissance : résultat au-delà du garde-fou");
                return Err(EchecEvaluation::Indefini);
            }
        }
        let echelle = self
            .echelle
            .checked_mul(n)
            .ok_or(EchecEvaluation::Indefini)?;
        Ok(Self::nouveau(self.non_echelonne.pow(n as u32), echelle))
    }

    /* ------------------------ Division (contexte 34 chiffres) ------------------------ */

    /// Quotient arrondi à `PRECISION_DIVISION` chiffres significatifs (demi-pair).
    ///
    /// Échelle préférée = échelle(self) - échelle(diviseur) :
    /// - quotient exact   => zéros de queue retirés jusqu’à l’échelle préférée
    /// - quotient inexact => les 34 chiffres sont gardés
    pub fn diviser(&self, diviseur: &Decimal) -> ResultatNoyau<Decimal> {
        if diviseur.est_zero() {
            trace!("division par zéro");
            return Err(EchecEvaluation::Indefini);
        }

        let preferee = self.echelle as i64 - diviseur.echelle as i64;

        if self.est_zero() {
            let echelle = preferee.clamp(i32::MIN as i64, i32::MAX as i64) as i32;
            return Ok(Self::nouveau(BigInt::zero(), echelle));
        }

        let negatif = self.non_echelonne.is_negative() != diviseur.non_echelonne.is_negative();
        let a = self.non_echelonne.abs();
        let b = diviseur.non_echelonne.abs();

        // exposant ajusté de a/b : floor(log10(a/b)), à une unité près par les longueurs
        let mut ajuste = nombre_chiffres(&a) as i64 - nombre_chiffres(&b) as i64;
        let sous_puissance = if ajuste >= 0 {
            a < &b * pow10(ajuste as u32)
        } else {
            &a * pow10((-ajuste) as u32) < b
        };
        if sous_puissance {
            ajuste -= 1;
        }

        // q ≈ (a/b) × 10^k possède exactement PRECISION_DIVISION chiffres
        let mut k = PRECISION_DIVISION as i64 - 1 - ajuste;
        let (numer, denom) = if k >= 0 {
            (a * pow10(k as u32), b)
        } else {
            (a, b * pow10((-k) as u32))
        };

        let mut q = &numer / &denom;
        let reste = &numer % &denom;
        let exact = reste.is_zero();

        if !exact {
            let double_reste: BigInt = reste * 2;
            let arrondir = match double_reste.cmp(&denom) {
                Ordering::Greater => true,
                Ordering::Equal => !(&q % 2u32).is_zero(),
                Ordering::Less => false,
            };
            if arrondir {
                q += BigInt::one();
            }
            // 9999...9 + 1 : un chiffre de trop
            if q == pow10(PRECISION_DIVISION) {
                q = pow10(PRECISION_DIVISION - 1);
                k -= 1;
            }
        }

        let mut echelle = k + preferee;
        if exact {
            let dix = BigInt::from(10);
            while echelle > preferee && (&q % &dix).is_zero() {
                q /= &dix;
                echelle -= 1;
            }
        }

        let echelle = i32::try_from(echelle).map_err(|_| EchecEvaluation::Indefini)?;
        if negatif {
            q = -q;
        }
        Ok(Self::nouveau(q, echelle))
    }

    /* ------------------------ Conversions ------------------------ */

    /// Troncature vers zéro, puis entier 32 bits (hors borne => échec).
    pub fn valeur_entiere(&self) -> ResultatNoyau<i32> {
        let tronque = if self.echelle <= 0 {
            if self.non_echelonne.is_zero() {
                BigInt::zero()
            } else if -(self.echelle as i64) > 10 {
                // au moins 10^11 : hors i32 quoi qu’il arrive
                return Err(EchecEvaluation::Indefini);
            } else {
                &self.non_echelonne * pow10((-self.echelle) as u32)
            }
        } else if self.echelle as usize > nombre_chiffres(&self.non_echelonne) {
            BigInt::zero()
        } else {
            &self.non_echelonne / pow10(self.echelle as u32)
        };

        tronque.to_i32().ok_or(EchecEvaluation::Indefini)
    }

    /// Valeur approchée en double (±inf si hors plage).
    pub fn vers_f64(&self) -> f64 {
        self.to_string().parse::<f64>().unwrap_or(f64::NAN)
    }

    /// Double -> décimal, via sa représentation la plus courte.
    ///
    /// Forme simple pour 1e-3 <= |x| < 1e7, scientifique sinon ; toujours au moins
    /// un chiffre après la virgule (1.0 garde l’échelle 1).
    /// NaN / ±inf => échec.
    pub fn depuis_f64(x: f64) -> ResultatNoyau<Decimal> {
        if !x.is_finite() {
            trace!(x, "double non fini");
            return Err(EchecEvaluation::Indefini);
        }
        if x == 0.0 {
            return Ok(Self::nouveau(BigInt::zero(), 1));
        }

        let sci = format!("{:e}", x.abs());
        let (mantisse, exposant) = sci.split_once('e').ok_or(EchecEvaluation::Indefini)?;
        let exposant: i64 = exposant.parse().map_err(|_| EchecEvaluation::Indefini)?;
        let chiffres: String = mantisse.chars().filter(|c| *c != '.').collect();
        let n = chiffres.len() as i64;

        // (échelle, zéros à ajouter au non-échelonné)
        let (echelle, complement) = if (-3..7).contains(&exposant) {
            let frac = (n - 1 - exposant).max(1);
            (frac, frac - (n - 1 - exposant))
        } else {
            let frac = (n - 1).max(1);
            (frac - exposant, frac - (n - 1))
        };

        let mut u = BigInt::parse_bytes(chiffres.as_bytes(), 10).ok_or(EchecEvaluation::Indefini)?;
        u *= pow10(complement as u32);
        if x < 0.0 {
            u = -u;
        }

        let echelle = i32::try_from(echelle).map_err(|_| EchecEvaluation::Indefini)?;
        Ok(Self::nouveau(u, echelle))
    }
}

fn ecart(petite: i32, grande: i32) -> ResultatNoyau<u32> {
    let d = grande as i64 - petite as i64;
    if d > ECART_ECHELLE_MAX {
        trace!(d, "écart d’échelles au-delà du garde-fou");
        return Err(EchecEvaluation::Indefini);
    }
    Ok(d as u32)
}

/// Exposant d’un littéral : signe optionnel puis au moins un chiffre, dans i32.
fn lire_exposant(texte: &str) -> Option<i32> {
    let (negatif, corps) = match texte.as_bytes().first() {
        Some(b'-') => (true, &texte[1..]),
        Some(b'+') => (false, &texte[1..]),
        _ => (false, texte),
    };
    if corps.is_empty() || !corps.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let v: i64 = corps.parse().ok()?;
    i32::try_from(if negatif { -v } else { v }).ok()
}

/* ------------------------ Affichage canonique ------------------------ */

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let chiffres = self.non_echelonne.magnitude().to_str_radix(10);
        let signe = if self.non_echelonne.is_negative() {
            "-"
        } else {
            ""
        };

        if self.echelle == 0 {
            return write!(f, "{signe}{chiffres}");
        }

        let ajuste = -(self.echelle as i64) + (chiffres.len() as i64 - 1);

        if self.echelle > 0 && ajuste >= -6 {
            let echelle = self.echelle as usize;
            if chiffres.len() > echelle {
                let (ent, frac) = chiffres.split_at(chiffres.len() - echelle);
                write!(f, "{signe}{ent}.{frac}")
            } else {
                let zeros = "0".repeat(echelle - chiffres.len());
                write!(f, "{signe}0.{zeros}{chiffres}")
            }
        } else {
            let (tete, queue) = chiffres.split_at(1);
            write!(f, "{signe}{tete}")?;
            if !queue.is_empty() {
                write!(f, ".{queue}")?;
            }
            if ajuste > 0 {
                write!(f, "E+{ajuste}")
            } else {
                write!(f, "E{ajuste}")
            }
        }
    }
}
