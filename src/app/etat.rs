//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir le texte de l’affichage et appliquer les commandes des boutons
//! (ajout, Clear, =, fonctions) sans aucune logique d’affichage.
//!
//! Contrats :
//! - Les boutons chiffres/opérateurs n’évaluent RIEN : ils ajoutent leur libellé.
//! - "=" et les boutons fonction évaluent TOUT l’affichage, puis le remplacent
//!   par le résultat formaté, ou par "Error".

use tracing::debug;

use crate::noyau::{evaluer_expression, texte_affichage, Fonction};

/// Libellés de la grille, dans l’ordre d’affichage (4 colonnes).
pub const LIBELLES_BOUTONS: [&str; 23] = [
    "7", "8", "9", "/", //
    "4", "5", "6", "*", //
    "1", "2", "3", "-", //
    "0", "Clear", "=", "+", //
    "√", "^", "sin", "cos", //
    "log", "!", "tan",
];

/// Commande émise par un bouton.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Commande {
    /// Ajoute le libellé à la fin de l’affichage.
    Ajouter(String),
    /// "Clear" : vide l’affichage.
    Effacer,
    /// "=" : évalue l’affichage.
    Egal,
    /// √ sin cos log ! tan : évalue l’affichage puis applique la fonction au résultat.
    Fonction(Fonction),
}

impl Commande {
    /// Libellé de bouton -> commande (tout libellé inconnu est ajouté tel quel).
    pub fn depuis_libelle(libelle: &str) -> Self {
        match libelle {
            "Clear" => Commande::Effacer,
            "=" => Commande::Egal,
            _ => match Fonction::depuis_symbole(libelle) {
                Some(f) => Commande::Fonction(f),
                None => Commande::Ajouter(libelle.to_string()),
            },
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    /// Texte du champ (lecture seule pour l’utilisateur).
    pub affichage: String,
}

impl AppCalc {
    /* ------------------------ Actions “boutons” ------------------------ */

    pub fn appliquer(&mut self, commande: Commande) {
        debug!(?commande, affichage = %self.affichage, "commande");

        match commande {
            Commande::Ajouter(libelle) => self.ajouter(&libelle),
            Commande::Effacer => self.effacer(),
            Commande::Egal => self.calculer(),
            Commande::Fonction(f) => self.calculer_fonction(f),
        }
    }

    /// Raccourci pour la vue : clic sur un libellé.
    pub fn clic(&mut self, libelle: &str) {
        self.appliquer(Commande::depuis_libelle(libelle));
    }

    /// Ajout brut (pas d’évaluation).
    pub fn ajouter(&mut self, libelle: &str) {
        self.affichage.push_str(libelle);
    }

    /// Clear : affichage vide.
    pub fn effacer(&mut self) {
        self.affichage.clear();
    }

    /// "=" : résultat formaté ou "Error".
    pub fn calculer(&mut self) {
        let resultat = evaluer_expression(&self.affichage);
        self.affichage = texte_affichage(&resultat);
    }

    /// Bouton fonction : f(valeur de l’affichage), ou "Error".
    pub fn calculer_fonction(&mut self, f: Fonction) {
        let resultat = evaluer_expression(&self.affichage).and_then(|v| f.appliquer(&v));
        self.affichage = texte_affichage(&resultat);
    }
}
