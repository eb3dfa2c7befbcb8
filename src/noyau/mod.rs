//! Noyau exact Q-pur (grammaire restreinte)
//!
//! Organisation interne :
//! - jetons.rs       : tokenisation (alphabet fermé)
//! - analyse.rs      : descente récursive -> Expr
//! - expr.rs         : AST fermé
//! - puissance.rs    : ** exact + politique de dépassement
//! - format.rs       : forme décimale canonique
//! - eval.rs         : pipeline complet
//! - calculatrice.rs : état (expression + affichages récent/courant)

pub mod analyse;
pub mod calculatrice;
pub mod erreur;
pub mod eval;
pub mod expr;
pub mod format;
pub mod jetons;
pub mod puissance;

#[cfg(test)]
mod tests_scenarios;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use calculatrice::{Calculatrice, Phase};
