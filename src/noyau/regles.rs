// src/noyau/regles.rs
//
// Table ordonnée (marqueur, règle de découpe)
// ------------------------------------------
// Ce n’est PAS une grammaire : on teste la PRÉSENCE de chaque marqueur,
// dans l’ordre de la table, et la première règle qui s’applique gagne.
//
//   ^  +  -  *  /  √…  sin…  cos…  log…  …!  tan…
//
// Binaire : coupe à la PREMIÈRE occurrence, en exactement deux morceaux.
// Préfixe : le marqueur doit ouvrir le texte ; l’opérande est le reste.
// Suffixe : le marqueur doit fermer le texte ; l’opérande est le début.

use tracing::trace;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Puissance,
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operateur {
    pub fn symbole(self) -> &'static str {
        match self {
            Operateur::Puissance => "^",
            Operateur::Plus => "+",
            Operateur::Moins => "-",
            Operateur::Fois => "*",
            Operateur::Divise => "/",
        }
    }
}

/// Fonctions unaires (marqueurs du texte ET boutons de l’UI).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Racine,
    Sin,
    Cos,
    Log,
    Factorielle,
    Tan,
}

impl Fonction {
    pub fn symbole(self) -> &'static str {
        match self {
            Fonction::Racine => "√",
            Fonction::Sin => "sin",
            Fonction::Cos => "cos",
            Fonction::Log => "log",
            Fonction::Factorielle => "!",
            Fonction::Tan => "tan",
        }
    }

    /// Libellé de bouton -> fonction.
    pub fn depuis_symbole(s: &str) -> Option<Fonction> {
        [
            Fonction::Racine,
            Fonction::Sin,
            Fonction::Cos,
            Fonction::Log,
            Fonction::Factorielle,
            Fonction::Tan,
        ]
        .into_iter()
        .find(|f| f.symbole() == s)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Regle {
    Binaire(Operateur),
    Prefixe(Fonction),
    Suffixe(Fonction),
}

/// Résultat d’une règle qui s’applique : opérateur + morceaux de texte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decoupe<'a> {
    Binaire(Operateur, &'a str, &'a str),
    Unaire(Fonction, &'a str),
}

impl Regle {
    pub fn marqueur(self) -> &'static str {
        match self {
            Regle::Binaire(op) => op.symbole(),
            Regle::Prefixe(f) | Regle::Suffixe(f) => f.symbole(),
        }
    }

    /// Découpe le texte si la règle s’applique, sinon None.
    pub fn detecter(self, texte: &str) -> Option<Decoupe<'_>> {
        match self {
            Regle::Binaire(op) => texte
                .split_once(op.symbole())
                .map(|(gauche, droite)| Decoupe::Binaire(op, gauche, droite)),
            Regle::Prefixe(f) => texte
                .strip_prefix(f.symbole())
                .map(|reste| Decoupe::Unaire(f, reste)),
            Regle::Suffixe(f) => texte
                .strip_suffix(f.symbole())
                .map(|debut| Decoupe::Unaire(f, debut)),
        }
    }
}

/// Ordre FIXE des tests de présence (tan après la factorielle).
pub const REGLES: [Regle; 11] = [
    Regle::Binaire(Operateur::Puissance),
    Regle::Binaire(Operateur::Plus),
    Regle::Binaire(Operateur::Moins),
    Regle::Binaire(Operateur::Fois),
    Regle::Binaire(Operateur::Divise),
    Regle::Prefixe(Fonction::Racine),
    Regle::Prefixe(Fonction::Sin),
    Regle::Prefixe(Fonction::Cos),
    Regle::Prefixe(Fonction::Log),
    Regle::Suffixe(Fonction::Factorielle),
    Regle::Prefixe(Fonction::Tan),
];

/// Première règle de la table qui s’applique au texte.
pub fn premiere_decoupe(texte: &str) -> Option<Decoupe<'_>> {
    REGLES.iter().find_map(|regle| {
        let decoupe = regle.detecter(texte)?;
        trace!(marqueur = regle.marqueur(), "règle retenue");
        Some(decoupe)
    })
}
