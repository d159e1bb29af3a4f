//! Noyau d'évaluation scientifique
//!
//! Organisation interne :
//! - erreurs.rs   : taxonomie (lexique / syntaxe / arithmétique)
//! - jetons.rs    : tokenisation
//! - rpn.rs       : shunting-yard (précédence, fonctions, virgule)
//! - fonctions.rs : bibliothèque de fonctions (enum fermé, arité)
//! - contexte.rs  : mode d'angle + variables (case mémoire)
//! - eval.rs      : pipeline complet + évaluation RPN
//! - format.rs    : rendu d'un résultat pour affichage/historique

pub mod contexte;
pub mod erreurs;
pub mod eval;
pub mod fonctions;
pub mod format;
pub mod jetons;
pub mod rpn;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use eval::eval_expression;
