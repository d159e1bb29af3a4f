// src/noyau/contexte.rs
//
// État mutable d'une session d'évaluation :
// - mode d'angle (degrés / radians) pour la trig
// - variables nommées, dont la case mémoire "m"
//
// Créé une fois, muté seulement par les opérations explicites (mode,
// mémorisation). Jamais remis à zéro entre deux évaluations. Aucune
// synchronisation interne : l'appelant sérialise les accès.

use std::collections::HashMap;

/// Clé de la variable mémoire (les identifiants sont minuscules).
pub const MEMOIRE: &str = "m";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModeAngle {
    Degres,
    #[default]
    Radians,
}

impl ModeAngle {
    /// Argument de trig directe : degrés -> radians si nécessaire.
    pub fn en_radians(&self, x: f64) -> f64 {
        match self {
            ModeAngle::Degres => x.to_radians(),
            ModeAngle::Radians => x,
        }
    }

    /// Résultat de trig inverse : radians -> degrés si nécessaire.
    pub fn depuis_radians(&self, x: f64) -> f64 {
        match self {
            ModeAngle::Degres => x.to_degrees(),
            ModeAngle::Radians => x,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Contexte {
    pub mode_angle: ModeAngle,
    variables: HashMap<String, f64>,
}

impl Default for Contexte {
    fn default() -> Contexte {
        let mut variables = HashMap::new();
        variables.insert(MEMOIRE.to_string(), 0.0);
        Contexte {
            mode_angle: ModeAngle::default(),
            variables,
        }
    }
}

impl Contexte {
    pub fn new() -> Self {
        Default::default()
    }

    /// Valeur d'une variable ; 0.0 si elle n'existe pas.
    /// Les noms sont insensibles à la casse (clés stockées en minuscules).
    pub fn variable(&self, nom: &str) -> f64 {
        self.variables
            .get(&nom.to_lowercase())
            .copied()
            .unwrap_or(0.0)
    }

    /// Crée ou remplace une variable.
    pub fn fixe_variable(&mut self, nom: &str, valeur: f64) {
        self.variables.insert(nom.to_lowercase(), valeur);
    }

    /// MS : écrase la case mémoire.
    pub fn memorise(&mut self, valeur: f64) {
        self.variables.insert(MEMOIRE.to_string(), valeur);
    }

    /// MR : rappelle la case mémoire (0.0 si jamais écrite).
    pub fn rappel(&self) -> f64 {
        self.variable(MEMOIRE)
    }
}
