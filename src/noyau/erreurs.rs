// src/noyau/erreurs.rs
//
// Erreurs du noyau, en trois familles stables :
// - Lexique      : un bout de texte ne correspond à aucun jeton
// - Syntaxe      : structure invalide (virgule, parenthèses, entrée vide)
// - Arithmetique : séquence RPN malformée ou domaine refusé (factorielle)
//
// Les résultats représentables en IEEE (1/0, ln(-1)…) ne sont PAS des
// erreurs : ils se propagent en inf/NaN.

use thiserror::Error;

/// Famille d'une erreur (genre stable, indépendant du message).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Genre {
    Lexique,
    Syntaxe,
    Arithmetique,
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ErreurCalc {
    #[error("caractère inattendu: '{0}'")]
    CaractereInattendu(char),

    #[error("nombre invalide: '{0}'")]
    NombreInvalide(String),

    #[error("Entrée vide")]
    EntreeVide,

    #[error("virgule hors d'un appel de fonction")]
    VirguleMalPlacee,

    #[error("parenthèses non équilibrées")]
    ParenthesesNonEquilibrees,

    #[error("opérandes insuffisantes pour '{0}'")]
    OperandesInsuffisantes(&'static str),

    #[error("expression invalide")]
    ExpressionInvalide,

    #[error("factorielle d'un nombre négatif")]
    FactorielleNegative,
}

impl ErreurCalc {
    /// Classement en famille (contrat d'interface : l'appelant peut
    /// router sur le genre sans analyser le message).
    pub fn genre(&self) -> Genre {
        use ErreurCalc::*;

        match self {
            CaractereInattendu(_) | NombreInvalide(_) => Genre::Lexique,

            EntreeVide | VirguleMalPlacee | ParenthesesNonEquilibrees => Genre::Syntaxe,

            OperandesInsuffisantes(_) | ExpressionInvalide | FactorielleNegative => {
                Genre::Arithmetique
            }
        }
    }
}
