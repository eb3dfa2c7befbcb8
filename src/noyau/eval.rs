//! Noyau — évaluation (pipeline réel)
//!
//! garde (vide / terminaison) -> jetons -> AST fermé -> valeur exacte bornée -> texte canonique
//!
//! Aucune étape ne panique : toute anomalie devient une `ErreurExpression`.

use num_rational::BigRational;
use num_traits::Zero;

use super::analyse::analyser;
use super::erreur::ErreurExpression;
use super::expr::Expr;
use super::format::format_decimal;
use super::jetons::{format_jetons, tokenize};
use super::puissance::puissance;
use crate::reglages::Reglages;

/// Caractères interdits en fin d’expression (opérateur ou point en attente).
pub const TERMINAISONS_INVALIDES: &str = "+-*/.";

/// Garde-fou : longueur (en jetons) d’une expression évaluable.
/// Borne aussi la profondeur de récursion de l’évaluation ("1+1+1+…").
const JETONS_MAX: usize = 2048;

/// API publique : évalue le texte d’une expression et retourne sa forme canonique.
pub fn eval_expression(texte: &str, reglages: &Reglages) -> Result<String, ErreurExpression> {
    let valeur = eval_valeur(texte, reglages)?;
    Ok(format_decimal(&valeur, reglages.chiffres))
}

/// Même pipeline, mais retourne la valeur exacte (tests + chaînage).
pub fn eval_valeur(texte: &str, reglages: &Reglages) -> Result<BigRational, ErreurExpression> {
    // 1) Garde : vide / opérateur ou point final
    let dernier = texte.chars().last().ok_or(ErreurExpression::Vide)?;
    if TERMINAISONS_INVALIDES.contains(dernier) {
        return Err(ErreurExpression::TerminaisonInvalide(dernier));
    }

    // 2) Jetons
    let jetons = tokenize(texte)?;
    if jetons.len() > JETONS_MAX {
        return Err(ErreurExpression::Depassement("expression trop longue"));
    }
    tracing::debug!(jetons = %format_jetons(&jetons), "jetons");

    // 3) AST
    let expr = analyser(&jetons)?;
    tracing::debug!(ast = %expr, profondeur = expr.profondeur(), "ast");

    // 4) Valeur
    valeur(&expr, reglages)
}

fn borne(r: BigRational, reglages: &Reglages) -> Result<BigRational, ErreurExpression> {
    if r.numer().bits() > reglages.bits_max || r.denom().bits() > reglages.bits_max {
        return Err(ErreurExpression::Depassement("valeur trop grande"));
    }
    Ok(r)
}

/// Évalue l’AST. Chaque nœud est dispatché vers une opération de la liste fermée.
fn valeur(expr: &Expr, reglages: &Reglages) -> Result<BigRational, ErreurExpression> {
    use Expr::*;

    let r = match expr {
        Nombre(r) => r.clone(),

        Neg(x) => -valeur(x, reglages)?,

        Add(a, b) => valeur(a, reglages)? + valeur(b, reglages)?,
        Sub(a, b) => valeur(a, reglages)? - valeur(b, reglages)?,
        Mul(a, b) => valeur(a, reglages)? * valeur(b, reglages)?,

        Div(a, b) => {
            let va = valeur(a, reglages)?;
            let vb = valeur(b, reglages)?;
            if vb.is_zero() {
                return Err(ErreurExpression::DivisionParZero);
            }
            va / vb
        }

        Pow(a, b) => {
            let va = valeur(a, reglages)?;
            let vb = valeur(b, reglages)?;
            puissance(&va, &vb, reglages)?
        }
    };

    borne(r, reglages)
}
