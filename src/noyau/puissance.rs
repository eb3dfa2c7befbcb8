// src/noyau/puissance.rs
//
// a ** b exact sur les rationnels, avec une politique de dépassement fixe :
// - exposant entier n : |n| <= exposant_max, et taille prévue du résultat <= bits_max
// - exposant p/q (non entier) : racine q-ième de base^p, exacte quand elle est
//   rationnelle (ex: 4**0.5 = 2), sinon approchée par défaut avec assez de
//   décimales pour `chiffres` chiffres significatifs (ex: 2**0.5)
// - base négative + exposant non entier : refusé (pas de résultat réel principal)

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};

use super::erreur::ErreurExpression;
use crate::reglages::Reglages;

pub fn puissance(
    base: &BigRational,
    exposant: &BigRational,
    reglages: &Reglages,
) -> Result<BigRational, ErreurExpression> {
    if exposant.denom().is_one() {
        let n = exposant_entier(exposant.numer(), reglages)?;
        return puissance_entiere(base, n, reglages);
    }

    // exposant = p/q (forme réduite, q > 1)
    let q = exposant
        .denom()
        .to_u32()
        .filter(|q| *q <= reglages.exposant_max)
        .ok_or(ErreurExpression::Depassement("dénominateur d’exposant trop grand"))?;

    if base.is_negative() {
        return Err(ErreurExpression::ExposantNonSupporte(
            "base négative avec exposant non entier",
        ));
    }

    // base^(p/q) = (base^p)^(1/q) : une seule approximation, jamais amplifiée
    let p = exposant_entier(exposant.numer(), reglages)?;
    let x = puissance_entiere(base, p, reglages)?;

    Ok(racine_exacte(&x, q).unwrap_or_else(|| racine_approchee(&x, q, reglages.chiffres)))
}

/// Décimales de marge au-delà des chiffres affichés.
const GARDE: usize = 8;

fn exposant_entier(n: &BigInt, reglages: &Reglages) -> Result<i64, ErreurExpression> {
    n.to_i64()
        .filter(|n| n.unsigned_abs() <= u64::from(reglages.exposant_max))
        .ok_or(ErreurExpression::Depassement("exposant trop grand"))
}

fn taille_bits(r: &BigRational) -> u64 {
    r.numer().bits().max(r.denom().bits())
}

fn puissance_entiere(
    base: &BigRational,
    n: i64,
    reglages: &Reglages,
) -> Result<BigRational, ErreurExpression> {
    if n == 0 {
        return Ok(BigRational::one());
    }
    if base.is_zero() {
        if n < 0 {
            return Err(ErreurExpression::DivisionParZero);
        }
        return Ok(BigRational::zero());
    }

    // minorant de la taille du résultat : |x| >= 2^(t-1) => |x^n| >= 2^((t-1)·n)
    let t = taille_bits(base);
    if t.saturating_sub(1).saturating_mul(n.unsigned_abs()) > reglages.bits_max {
        return Err(ErreurExpression::Depassement("puissance trop grande"));
    }

    let positif = rational_pow_int(base.clone(), n.unsigned_abs());
    let r = if n < 0 { positif.recip() } else { positif };

    if taille_bits(&r) > reglages.bits_max {
        return Err(ErreurExpression::Depassement("puissance trop grande"));
    }
    Ok(r)
}

/// Exponentiation rapide (carré-multiplie).
fn rational_pow_int(base: BigRational, exp: u64) -> BigRational {
    let mut e = exp;
    let mut acc = BigRational::one();
    let mut b = base;

    while e > 0 {
        if (e & 1) == 1 {
            acc *= b.clone();
        }
        e >>= 1;
        if e > 0 {
            b *= b.clone();
        }
    }
    acc
}

/// Racine q-ième exacte d’un rationnel positif, si elle existe.
fn racine_exacte(r: &BigRational, q: u32) -> Option<BigRational> {
    let n = racine_entiere_exacte(r.numer(), q)?;
    let d = racine_entiere_exacte(r.denom(), q)?;
    Some(BigRational::new(n, d))
}

/// Racine q-ième d’un rationnel positif, tronquée à k décimales :
/// floor(x^(1/q) · 10^k) = nth_root(floor(x · 10^(q·k)), q).
///
/// k couvre les zéros de tête : x >= 1/d  =>  x^(1/q) >= 10^-(chiffres(d)/q + 1).
fn racine_approchee(x: &BigRational, q: u32, chiffres: usize) -> BigRational {
    let zeros = x.denom().to_str_radix(10).len() / q as usize + 1;
    let k = chiffres + GARDE + zeros;

    let echelle = BigInt::from(10).pow(k as u32 * q);
    let y = (x.numer() * echelle / x.denom()).nth_root(q);
    BigRational::new(y, BigInt::from(10).pow(k as u32))
}

fn racine_entiere_exacte(x: &BigInt, q: u32) -> Option<BigInt> {
    let y = x.nth_root(q);
    if &y.pow(q) == x {
        Some(y)
    } else {
        None
    }
}
