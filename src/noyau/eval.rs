//! Noyau — évaluation par découpage récursif
//!
//! littéral ? -> sinon première règle de la table (regles.rs) -> récursion sur les morceaux
//!
//! Aucun arbre, aucune priorité : le texte est coupé tel quel, et chaque morceau
//! est réévalué par la même fonction. Conséquences voulues :
//! - "1-2-3" vaut 1-(2-3) = 2 (coupe à la première occurrence)
//! - "-1!" échoue (le moins de tête coupe avant la factorielle)
//!
//! Tout échec, à n’importe quelle profondeur, remonte tel quel via `?`.

use tracing::{debug, trace};

use super::decimal::Decimal;
use super::erreur::{EchecEvaluation, ResultatNoyau};
use super::regles::{premiere_decoupe, Decoupe, Fonction, Operateur};

/// Opération retenue en descendant la chaîne de découpes, appliquée en remontant.
enum EnAttente {
    Binaire(Operateur, Decimal),
    Unaire(Fonction),
}

/// API publique : évalue tout le texte de l’affichage.
pub fn evaluer_expression(expression: &str) -> ResultatNoyau<Decimal> {
    let resultat = evaluer_morceau(expression);
    if resultat.is_err() {
        debug!(expression, "expression non évaluable");
    }
    resultat
}

/// Le côté droit (ou l’opérande) est suivi en boucle, jamais par récursion :
/// "1+1+…+1" ne consomme pas de pile. Seul le côté gauche est récursif, et il
/// ne contient plus ni le marqueur coupé ni ceux qui le précèdent dans la table,
/// d’où une imbrication d’au plus cinq niveaux.
fn evaluer_morceau(expression: &str) -> ResultatNoyau<Decimal> {
    let mut en_attente = Vec::new();
    let mut reste = expression;

    let mut valeur = loop {
        // 1) Cas de base : littéral complet (prioritaire sur tout marqueur)
        if let Some(v) = Decimal::lire(reste) {
            break v;
        }

        // 2) Première règle présente, dans l’ordre de la table
        let Some(decoupe) = premiere_decoupe(reste) else {
            trace!(expression = reste, "ni littéral ni marqueur");
            return Err(EchecEvaluation::Indefini);
        };

        trace!(expression = reste, ?decoupe, "découpe");

        // 3) Gauche tout de suite, droite au tour suivant
        match decoupe {
            Decoupe::Binaire(op, gauche, droite) => {
                let a = evaluer_morceau(gauche)?;
                en_attente.push(EnAttente::Binaire(op, a));
                reste = droite;
            }
            Decoupe::Unaire(f, operande) => {
                en_attente.push(EnAttente::Unaire(f));
                reste = operande;
            }
        }
    };

    while let Some(operation) = en_attente.pop() {
        valeur = match operation {
            EnAttente::Binaire(op, a) => op.appliquer(&a, &valeur)?,
            EnAttente::Unaire(f) => f.appliquer(&valeur)?,
        };
    }
    Ok(valeur)
}

impl Operateur {
    pub fn appliquer(self, a: &Decimal, b: &Decimal) -> ResultatNoyau<Decimal> {
        match self {
            // exposant tronqué à l’entier
            Operateur::Puissance => a.puissance(b.valeur_entiere()?),
            Operateur::Plus => a.ajouter(b),
            Operateur::Moins => a.soustraire(b),
            Operateur::Fois => a.multiplier(b),
            Operateur::Divise => a.diviser(b),
        }
    }
}
