// src/noyau/rpn.rs
//
// Shunting-yard -> RPN (postfix)
// Objectif:
// - Convertir une suite de Tok infixe en RPN, prête pour eval_rpn
//
// Règles:
// - Ident(nom):
//    - si nom est une fonction connue => résolu en Tok::Fonction, mis sur la pile
//      (sortira après la parenthèse fermante de sa liste d'arguments)
//    - sinon => variable, sortie directe
// - Virgule: dépile les opérateurs jusqu'à '(' (virgule hors appel = erreur)
// - Moins unaire:
//    - si '-' arrive quand on n'attend PAS une valeur, on injecte 0 : "-x" => "0 x -"
//
// NOTE:
// - Une fonction n'est jamais traversée par le dépilage des opérateurs :
//   elle reste collée à sa liste d'arguments.

use super::erreurs::ErreurCalc;
use super::fonctions::Fonction;
use super::jetons::Tok;

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 2,
        Tok::Star | Tok::Slash | Tok::Percent => 3,
        Tok::Caret => 4,
        _ => 0,
    }
}

fn est_droite_associatif(t: &Tok) -> bool {
    matches!(t, Tok::Caret)
}

fn est_operateur(t: &Tok) -> bool {
    matches!(
        t,
        Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Caret | Tok::Percent
    )
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   jetons: [Ident("ncr"), LPar, Num(5), Virgule, Num(2), RPar]
///   rpn:    [Num(5), Num(2), Fonction(Ncr)]
pub fn to_rpn(jetons: &[Tok]) -> Result<Vec<Tok>, ErreurCalc> {
    let mut out: Vec<Tok> = Vec::new();
    let mut ops: Vec<Tok> = Vec::new();

    // “valeur” = un atome ou une expression fermée.
    // Sert à détecter le moins unaire.
    let mut prev_was_value = false;

    for tok in jetons.iter().cloned() {
        match tok {
            Tok::Num(_) => {
                out.push(tok);
                prev_was_value = true;
            }

            Tok::Ident(nom) => {
                if let Some(f) = Fonction::par_nom(&nom) {
                    // fonction : sur la pile (elle sortira après ses arguments)
                    ops.push(Tok::Fonction(f));
                    prev_was_value = false;
                } else {
                    // variable : sortie directe
                    out.push(Tok::Ident(nom));
                    prev_was_value = true;
                }
            }

            // tokenize n'en produit jamais ; accepté par symétrie
            Tok::Fonction(_) => {
                ops.push(tok);
                prev_was_value = false;
            }

            Tok::Virgule => {
                // dépile jusqu'à la '(' de l'appel englobant
                loop {
                    match ops.last() {
                        Some(Tok::LPar) => break,
                        Some(_) => {
                            let top = ops.pop().unwrap();
                            out.push(top);
                        }
                        None => return Err(ErreurCalc::VirguleMalPlacee),
                    }
                }
                prev_was_value = false;
            }

            Tok::LPar => {
                ops.push(tok);
                prev_was_value = false;
            }

            Tok::RPar => {
                // dépile jusqu'à '('
                let mut ouvrante_trouvee = false;
                while let Some(top) = ops.pop() {
                    if matches!(top, Tok::LPar) {
                        ouvrante_trouvee = true;
                        break;
                    }
                    out.push(top);
                }
                if !ouvrante_trouvee {
                    return Err(ErreurCalc::ParenthesesNonEquilibrees);
                }

                // si une fonction est au sommet, elle sort aussi : ses
                // arguments sont maintenant tous dans la sortie
                if let Some(Tok::Fonction(_)) = ops.last() {
                    out.push(ops.pop().unwrap());
                }

                prev_was_value = true;
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Caret | Tok::Percent => {
                // moins unaire : si pas de valeur avant, injecte 0
                if matches!(tok, Tok::Minus) && !prev_was_value {
                    out.push(Tok::Num(0.0));
                }

                // dépile tant que:
                // - le sommet est un opérateur (ni '(' ni fonction)
                // - et la précédence/associativité exige de le sortir
                while let Some(top) = ops.last() {
                    if !est_operateur(top) {
                        break;
                    }

                    let p_top = precedence(top);
                    let p_tok = precedence(&tok);

                    let doit_pop = if est_droite_associatif(&tok) {
                        p_tok < p_top
                    } else {
                        p_tok <= p_top
                    };

                    if doit_pop {
                        out.push(ops.pop().unwrap());
                    } else {
                        break;
                    }
                }

                ops.push(tok);
                prev_was_value = false;
            }
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar | Tok::RPar) {
            return Err(ErreurCalc::ParenthesesNonEquilibrees);
        }
        out.push(op);
    }

    Ok(out)
}
