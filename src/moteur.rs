// src/moteur.rs
//
// Façade de session : le Moteur possède le Contexte pour toute la durée de
// vie de la session et expose le contrat consommé par la présentation
// (évaluer, mode d'angle, mémoire). Mono-thread, synchrone : l'appelant
// sérialise les accès ou crée un Moteur par thread.

use crate::noyau::contexte::{Contexte, ModeAngle};
use crate::noyau::erreurs::ErreurCalc;
use crate::noyau::eval_expression;

#[derive(Clone, Debug, Default)]
pub struct Moteur {
    contexte: Contexte,
}

impl Moteur {
    pub fn new() -> Self {
        Default::default()
    }

    /// Évalue une expression infixe dans le contexte de la session.
    /// Le contexte n'est jamais modifié par une évaluation : seules les
    /// opérations explicites ci-dessous le mutent.
    pub fn evalue(&self, expression: &str) -> Result<f64, ErreurCalc> {
        eval_expression(expression, &self.contexte)
    }

    /// Change le mode d'angle pour toutes les évaluations suivantes.
    pub fn fixe_mode_angle(&mut self, mode: ModeAngle) {
        self.contexte.mode_angle = mode;
    }

    pub fn mode_angle(&self) -> ModeAngle {
        self.contexte.mode_angle
    }

    /// MS : écrase la variable mémoire `M`.
    pub fn memorise(&mut self, valeur: f64) {
        self.contexte.memorise(valeur);
    }

    /// MR : rappelle la variable mémoire `M` (0.0 si jamais écrite).
    pub fn rappel(&self) -> f64 {
        self.contexte.rappel()
    }
}
