// src/noyau/expr.rs
//
// AST fermé (sans flottants, sans identifiants).
// - Nombre : rationnel exact
// - Neg    : moins unaire
// - Add/Sub/Mul/Div/Pow : les seuls opérateurs binaires admis
//
// IMPORTANT (SAFE):
// - aucun autre nœud n’existe : l’évaluation ne peut rien appeler d’autre
//   que ces opérations arithmétiques.

use num_rational::BigRational;
use num_traits::One;

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expr {
    Nombre(BigRational),

    Neg(Box<Expr>),

    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
    Pow(Box<Expr>, Box<Expr>),
}

impl Expr {
    /// Profondeur de l’arbre (journal + garde-fous de tests).
    pub fn profondeur(&self) -> usize {
        use Expr::*;

        match self {
            Nombre(_) => 1,
            Neg(x) => 1 + x.profondeur(),
            Add(a, b) | Sub(a, b) | Mul(a, b) | Div(a, b) | Pow(a, b) => {
                1 + a.profondeur().max(b.profondeur())
            }
        }
    }
}

/// Forme entièrement parenthésée : montre la structure réellement analysée
/// (ex: "-2**2" s’affiche "(-(2 ** 2))").
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Expr::*;

        match self {
            Nombre(r) => {
                if r.denom().is_one() {
                    write!(f, "{}", r.numer())
                } else {
                    write!(f, "{}/{}", r.numer(), r.denom())
                }
            }
            Neg(x) => write!(f, "(-{x})"),
            Add(a, b) => write!(f, "({a} + {b})"),
            Sub(a, b) => write!(f, "({a} - {b})"),
            Mul(a, b) => write!(f, "({a} * {b})"),
            Div(a, b) => write!(f, "({a} / {b})"),
            Pow(a, b) => write!(f, "({a} ** {b})"),
        }
    }
}
