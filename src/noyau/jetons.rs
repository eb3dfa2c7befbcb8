// src/noyau/jetons.rs

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

use super::erreur::ErreurExpression;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tok {
    Num(BigRational),

    Plus,
    Minus,
    Star,
    Slash,
    Puissance, // **
}

/// Tokenize une chaîne en jetons.
/// Alphabet fermé :
/// - littéraux décimaux (ex: 12, 3.25, .5, 7.) -> Num exact (3.25 = 13/4)
/// - opérateurs + - * / et ** (deux étoiles collées)
///
/// Tout autre caractère (lettres, espaces, parenthèses, …) est refusé ici :
/// rien d’autre ne peut atteindre l’analyseur.
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurExpression> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

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
            '*' => {
                // "**" est un seul jeton ; "***" donnera Puissance puis Star (refusé au parse)
                if i + 1 < chars.len() && chars[i + 1] == '*' {
                    out.push(Tok::Puissance);
                    i += 2;
                } else {
                    out.push(Tok::Star);
                    i += 1;
                }
                continue;
            }
            '/' => {
                out.push(Tok::Slash);
                i += 1;
                continue;
            }
            _ => {}
        }

        if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            let litteral: String = chars[start..i].iter().collect();
            out.push(Tok::Num(lire_decimal(&litteral)?));
            continue;
        }

        return Err(ErreurExpression::CaractereInattendu(c));
    }

    Ok(out)
}

/// Littéral décimal -> rationnel exact.
/// Forme acceptée : chiffres, au plus un point, au moins un chiffre.
fn lire_decimal(litteral: &str) -> Result<BigRational, ErreurExpression> {
    let invalide = || ErreurExpression::NombreInvalide(litteral.to_string());

    let (entier, fraction) = match litteral.split_once('.') {
        Some((e, f)) => (e, f),
        None => (litteral, ""),
    };

    if fraction.contains('.') || (entier.is_empty() && fraction.is_empty()) {
        return Err(invalide());
    }

    let chiffres = format!("{entier}{fraction}");
    let n = BigInt::parse_bytes(chiffres.as_bytes(), 10).ok_or_else(invalide)?;

    let d = if fraction.is_empty() {
        BigInt::one()
    } else {
        BigInt::from(10).pow(fraction.len() as u32)
    };

    Ok(BigRational::new(n, d))
}

/// Format utilitaire (journal) : liste de jetons en texte.
pub fn format_jetons(tokens: &[Tok]) -> String {
    fn format_rat(r: &BigRational) -> String {
        let n = r.numer();
        let d = r.denom();
        if d.is_one() || n.is_zero() {
            format!("{n}")
        } else {
            format!("{n}/{d}")
        }
    }

    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(r) => format_rat(r),

            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::Puissance => "**".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
