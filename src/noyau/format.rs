// src/noyau/format.rs
//
// Affichage du résultat (texte réécrit dans le champ)
// ---------------------------------------------------
// - succès : forme décimale canonique (25, 2.5, 1.0, 1.0E+10, 1E-7...)
// - échec  : le texte de remplacement "Error"

use super::decimal::Decimal;
use super::erreur::{ResultatNoyau, PLACEHOLDER_ERREUR};

/// Forme décimale canonique d’un résultat.
pub fn formater_resultat(valeur: &Decimal) -> String {
    valeur.to_string()
}

/// Texte à déposer dans l’affichage : résultat formaté, ou "Error".
pub fn texte_affichage(resultat: &ResultatNoyau<Decimal>) -> String {
    match resultat {
        Ok(v) => formater_resultat(v),
        Err(_) => PLACEHOLDER_ERREUR.to_string(),
    }
}
