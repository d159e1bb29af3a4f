//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> RPN (shunting-yard) -> évaluation sur pile de valeurs
//!
//! La pile de valeurs et la pile d'opérateurs sont locales à l'appel :
//! une évaluation réussit ou échoue d'un bloc, sans mutation partielle
//! visible dans le contexte.

use log::{debug, trace};

use super::contexte::Contexte;
use super::erreurs::ErreurCalc;
use super::jetons::{format_jetons, tokenize, Tok};
use super::rpn::to_rpn;

/// API publique : évalue une expression infixe et retourne sa valeur.
///
/// - Entrée vide (après trim) : erreur de syntaxe.
/// - 1/0, ln(-1)… : inf/NaN IEEE, pas une erreur.
pub fn eval_expression(expr_str: &str, contexte: &Contexte) -> Result<f64, ErreurCalc> {
    let s = expr_str.trim();
    if s.is_empty() {
        return Err(ErreurCalc::EntreeVide);
    }

    // 1) Jetons
    let jetons = tokenize(s)?;
    trace!("jetons: {}", format_jetons(&jetons));

    // 2) RPN
    let rpn = to_rpn(&jetons)?;
    trace!("rpn: {}", format_jetons(&rpn));

    // 3) Évaluation sur pile
    let v = eval_rpn(&rpn, contexte)?;
    debug!("{s} = {v}");

    Ok(v)
}

fn nom_operateur(t: &Tok) -> &'static str {
    match t {
        Tok::Plus => "+",
        Tok::Minus => "-",
        Tok::Star => "*",
        Tok::Slash => "/",
        Tok::Caret => "^",
        Tok::Percent => "%",
        _ => "?",
    }
}

/// Évalue une séquence RPN contre une pile de valeurs.
///
/// - Num : empilé
/// - Ident : valeur de la variable (0.0 si absente)
/// - Fonction : dépile arite() opérandes, empile le résultat
/// - opérateur binaire : dépile droite puis gauche, empile gauche OP droite
///
/// À la fin, la pile doit contenir exactement une valeur.
pub fn eval_rpn(rpn: &[Tok], contexte: &Contexte) -> Result<f64, ErreurCalc> {
    let mut pile: Vec<f64> = Vec::new();

    for tok in rpn {
        match tok {
            Tok::Num(v) => pile.push(*v),

            Tok::Ident(nom) => pile.push(contexte.variable(nom)),

            Tok::Fonction(f) => {
                let arite = f.arite();
                if pile.len() < arite {
                    return Err(ErreurCalc::OperandesInsuffisantes(f.nom()));
                }
                // les arite() dernières valeurs, dans l'ordre d'empilement
                // (= l'ordre logique des arguments écrits)
                let args: Vec<f64> = pile.split_off(pile.len() - arite);
                pile.push(f.applique(&args, contexte.mode_angle)?);
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Caret | Tok::Percent => {
                let nom = nom_operateur(tok);
                let b = pile
                    .pop()
                    .ok_or(ErreurCalc::OperandesInsuffisantes(nom))?;
                let a = pile
                    .pop()
                    .ok_or(ErreurCalc::OperandesInsuffisantes(nom))?;

                let v = match tok {
                    Tok::Plus => a + b,
                    Tok::Minus => a - b,
                    Tok::Star => a * b,
                    Tok::Slash => a / b, // 1/0 => inf IEEE
                    Tok::Percent => a % b,
                    Tok::Caret => a.powf(b),
                    _ => unreachable!(),
                };
                pile.push(v);
            }

            // une RPN bien formée n'en contient jamais
            Tok::LPar | Tok::RPar | Tok::Virgule => return Err(ErreurCalc::ExpressionInvalide),
        }
    }

    if pile.len() != 1 {
        return Err(ErreurCalc::ExpressionInvalide);
    }
    Ok(pile.pop().unwrap())
}
