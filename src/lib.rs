//! # Moteur de calculatrice scientifique
//!
//! Évaluation d'expressions infixes libres : tokenisation, conversion en
//! notation polonaise inversée (shunting-yard), puis évaluation sur pile.
//!
//! - précédence et associativité usuelles : `2+3*4` donne `14`,
//!   `2^3^2` donne `512` (puissance associative à droite)
//! - fonctions nommées : `sin`, `cos`, `tan`, `asin`, `acos`, `atan`,
//!   `ln`, `log`, `sqrt`, `abs`, `fact`, `nCr(n,r)`, `nPr(n,r)`
//! - mode d'angle degrés/radians pour la trig (état de session)
//! - une variable mémoire `M` (MS/MR)
//! - factorielle et combinatoire comptées en entiers exacts (BigInt),
//!   converties en `f64` seulement à la frontière
//! - les résultats représentables en IEEE (`1/0`, `ln(-1)`…) se propagent
//!   en inf/NaN ; seules les fautes lexicales, syntaxiques ou de séquence
//!   RPN sont des erreurs
//!
//! La présentation (saisie, affichage) reste chez l'appelant ;
//! [`Historique`] fournit le puits de journal horodaté branché après une
//! évaluation réussie.
//!
//! ```
//! use calculatrice_sci::{ModeAngle, Moteur};
//!
//! let mut moteur = Moteur::new();
//! assert_eq!(moteur.evalue("2+3*4").unwrap(), 14.0);
//!
//! moteur.fixe_mode_angle(ModeAngle::Degres);
//! assert!((moteur.evalue("sin(90)").unwrap() - 1.0).abs() < 1e-12);
//!
//! moteur.memorise(7.0);
//! assert_eq!(moteur.evalue("M+1").unwrap(), 8.0);
//! ```

mod historique;
mod moteur;
pub mod noyau;

pub use historique::Historique;
pub use moteur::Moteur;
pub use noyau::contexte::{Contexte, ModeAngle};
pub use noyau::erreurs::{ErreurCalc, Genre};
pub use noyau::eval_expression;
pub use noyau::format::format_resultat;
