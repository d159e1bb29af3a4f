// src/noyau/fonctions.rs
//
// Bibliothèque de fonctions (enum fermé)
// --------------------------------------
// - trig directe : argument converti en radians selon le mode
// - trig inverse : résultat reconverti en degrés selon le mode
// - ln / log / sqrt / abs : aucune garde de domaine (NaN IEEE suffit)
// - fact / ncr / npr : comptage exact en BigInt, f64 seulement à la frontière

use num_bigint::BigInt;
use num_traits::{One, ToPrimitive};

use super::contexte::ModeAngle;
use super::erreurs::ErreurCalc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Ln,
    Log,
    Sqrt,
    Abs,
    Fact,
    Ncr,
    Npr,
}

impl Fonction {
    /// Résolution par nom (les identifiants sont déjà en minuscules).
    /// None => ce n'est pas une fonction, le convertisseur y verra une variable.
    pub fn par_nom(nom: &str) -> Option<Fonction> {
        use Fonction::*;

        match nom {
            "sin" => Some(Sin),
            "cos" => Some(Cos),
            "tan" => Some(Tan),
            "asin" => Some(Asin),
            "acos" => Some(Acos),
            "atan" => Some(Atan),
            "ln" => Some(Ln),
            "log" => Some(Log),
            "sqrt" => Some(Sqrt),
            "abs" => Some(Abs),
            "fact" => Some(Fact),
            "ncr" => Some(Ncr),
            "npr" => Some(Npr),
            _ => None,
        }
    }

    pub fn nom(&self) -> &'static str {
        use Fonction::*;

        match self {
            Sin => "sin",
            Cos => "cos",
            Tan => "tan",
            Asin => "asin",
            Acos => "acos",
            Atan => "atan",
            Ln => "ln",
            Log => "log",
            Sqrt => "sqrt",
            Abs => "abs",
            Fact => "fact",
            Ncr => "ncr",
            Npr => "npr",
        }
    }

    /// Nombre d'opérandes consommées sur la pile de valeurs.
    pub fn arite(&self) -> usize {
        match self {
            Fonction::Ncr | Fonction::Npr => 2,
            _ => 1,
        }
    }

    /// Applique la fonction. `args` contient exactement `arite()` valeurs,
    /// dans l'ordre logique (args[0] = premier argument écrit).
    pub fn applique(&self, args: &[f64], mode: ModeAngle) -> Result<f64, ErreurCalc> {
        use Fonction::*;

        let v = match self {
            Sin => mode.en_radians(args[0]).sin(),
            Cos => mode.en_radians(args[0]).cos(),
            Tan => mode.en_radians(args[0]).tan(),

            Asin => mode.depuis_radians(args[0].asin()),
            Acos => mode.depuis_radians(args[0].acos()),
            Atan => mode.depuis_radians(args[0].atan()),

            Ln => args[0].ln(),
            Log => args[0].log10(),
            Sqrt => args[0].sqrt(),
            Abs => args[0].abs(),

            Fact => factorielle(args[0])?,
            Ncr => combinaisons(args[0], args[1]),
            Npr => arrangements(args[0], args[1]),
        };

        Ok(v)
    }
}

/* ------------------------ Comptage exact (BigInt) ------------------------ */

/// fact(x) : x arrondi à l'entier le plus proche, produit 1·2·…·n exact,
/// converti en f64 à la fin (inf au-delà de la plage f64).
fn factorielle(x: f64) -> Result<f64, ErreurCalc> {
    let n = x.round() as i64;
    if n < 0 {
        return Err(ErreurCalc::FactorielleNegative);
    }

    let mut acc = BigInt::one();
    for k in 2..=n {
        acc *= k;
    }
    Ok(big_vers_f64(&acc))
}

/// nCr(n, r). Hors domaine (r<0, n<0, r>n) : 0, sans erreur.
/// Réduction par le plus petit de r et n-r pour limiter les intermédiaires.
fn combinaisons(n: f64, r: f64) -> f64 {
    let n = n.round() as i64;
    let r = r.round() as i64;

    if r < 0 || n < 0 || r > n {
        return 0.0;
    }

    let r = r.min(n - r);
    let mut acc = BigInt::one();
    for k in 0..r {
        // exact à chaque pas : le produit de k+1 entiers consécutifs
        // est divisible par (k+1)!
        acc *= n - k;
        acc /= k + 1;
    }
    big_vers_f64(&acc)
}

/// nPr(n, r). Hors domaine : 0, sans erreur.
fn arrangements(n: f64, r: f64) -> f64 {
    let n = n.round() as i64;
    let r = r.round() as i64;

    if r < 0 || n < 0 || r > n {
        return 0.0;
    }

    let mut acc = BigInt::one();
    for k in 0..r {
        acc *= n - k;
    }
    big_vers_f64(&acc)
}

fn big_vers_f64(x: &BigInt) -> f64 {
    x.to_f64().unwrap_or(f64::INFINITY)
}
