// src/noyau/jetons.rs

use super::erreurs::ErreurCalc;
use super::fonctions::Fonction;

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    // Identifiants (tout ce qui n'est pas nombre / opérateur / ponctuation).
    // NOTE: c'est to_rpn qui décidera si c'est une fonction (sin/cos/...) ou une variable.
    Ident(String),

    // Jamais produit par tokenize : introduit par to_rpn quand un Ident
    // correspond à une fonction connue.
    Fonction(Fonction),

    Plus,
    Minus,
    Star,
    Slash,
    Caret,   // ^
    Percent, // %

    LPar,
    RPar,
    Virgule, // séparateur d'arguments
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - nombres décimaux (ex: 12, 3.5, .25)
/// - opérateurs + - * / ^ %
/// - glyphes d'affichage × et ÷ (normalisés en * et /)
/// - parenthèses ( ) et virgule d'arguments
/// - identifiants [a-zA-Z_][a-zA-Z0-9_]* (normalisés en minuscules)
///
/// Aucune multiplication implicite : `2(3)` reste tel quel et échouera
/// plus loin dans le pipeline.
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurCalc> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Parenthèses + virgule
        if c == '(' {
            out.push(Tok::LPar);
            i += 1;
            continue;
        }
        if c == ')' {
            out.push(Tok::RPar);
            i += 1;
            continue;
        }
        if c == ',' {
            out.push(Tok::Virgule);
            i += 1;
            continue;
        }

        // Opérateurs (× et ÷ sont les glyphes d'affichage)
        match c {
            '+' => {
                out.push(Tok::Plus);
                i += 1;
                continue;
            }
            '-' => {
                out.push(Tok::Minus);
                i += 1;
                continue;
            }
            '*' | '×' => {
                out.push(Tok::Star);
                i += 1;
                continue;
            }
            '/' | '÷' => {
                out.push(Tok::Slash);
                i += 1;
                continue;
            }
            '^' => {
                out.push(Tok::Caret);
                i += 1;
                continue;
            }
            '%' => {
                out.push(Tok::Percent);
                i += 1;
                continue;
            }
            _ => {}
        }

        // Identifiants ASCII : [a-zA-Z_][a-zA-Z0-9_]*
        if c.is_ascii_alphabetic() || c == '_' {
            let start = i;
            i += 1;
            while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '_') {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();
            out.push(Tok::Ident(word.to_lowercase()));
            continue;
        }

        // Nombre décimal : chiffres, éventuellement un point suivi de chiffres.
        // ".5" est accepté ; "5." laisse le point en rade (erreur lexicale).
        if c.is_ascii_digit() || (c == '.' && i + 1 < chars.len() && chars[i + 1].is_ascii_digit())
        {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            if i < chars.len()
                && chars[i] == '.'
                && i + 1 < chars.len()
                && chars[i + 1].is_ascii_digit()
            {
                i += 1;
                while i < chars.len() && chars[i].is_ascii_digit() {
                    i += 1;
                }
            }
            let num_str: String = chars[start..i].iter().collect();
            let v: f64 = num_str
                .parse()
                .map_err(|_| ErreurCalc::NombreInvalide(num_str.clone()))?;
            out.push(Tok::Num(v));
            continue;
        }

        return Err(ErreurCalc::CaractereInattendu(c));
    }

    Ok(out)
}

/// Format utilitaire (traces/tests) : liste de jetons en texte.
pub fn format_jetons(jetons: &[Tok]) -> String {
    let mut out = Vec::new();
    for t in jetons {
        let s = match t {
            Tok::Num(v) => format!("{v}"),
            Tok::Ident(nom) => nom.clone(),
            Tok::Fonction(f) => f.nom().to_string(),

            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::Caret => "^".to_string(),
            Tok::Percent => "%".to_string(),

            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
            Tok::Virgule => ",".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
