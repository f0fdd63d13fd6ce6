//! Noyau décimal à découpage
//!
//! Organisation interne :
//! - decimal.rs      : décimal big int + échelle (lecture, affichage, + - × ÷ ^)
//! - regles.rs       : table ordonnée (marqueur, règle de découpe)
//! - eval.rs         : évaluation récursive par découpage
//! - scientifique.rs : √, sin/cos/tan (degrés), log10, n!
//! - format.rs       : texte réécrit dans l’affichage ("Error" si échec)
//! - erreur.rs       : échec d’évaluation unique

pub mod decimal;
pub mod erreur;
pub mod eval;
pub mod format;
pub mod regles;
pub mod scientifique;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use eval::evaluer_expression;
pub use format::texte_affichage;
pub use regles::Fonction;
