// src/noyau/erreur.rs
//
// Échec d’évaluation : UN seul genre d’erreur.
// Littéral invalide, opérande manquante, division par zéro, √ négative,
// log non positif, factorielle négative... tout se replie ici.

use thiserror::Error;

/// Texte affiché par l’UI à la place d’un résultat.
pub const PLACEHOLDER_ERREUR: &str = "Error";

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EchecEvaluation {
    /// Expression non évaluable (cause volontairement non distinguée).
    #[error("Error")]
    Indefini,
}

/// Raccourci du noyau.
pub type ResultatNoyau<T> = Result<T, EchecEvaluation>;
