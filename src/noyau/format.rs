// src/noyau/format.rs
//
// Forme canonique d’une valeur (texte décimal ré-analysable) :
// - entier : "8", "-3"
// - développement décimal fini assez court : exact ("2.5", "0.3")
// - sinon : troncature vers zéro à `chiffres` chiffres significatifs, comptés
//   depuis le premier chiffre non nul ("0.3333…", "0.0003333…")
// - la partie entière n’est jamais tronquée
// - zéros finaux retirés ; jamais de "-0"

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

pub fn format_decimal(r: &BigRational, chiffres: usize) -> String {
    if r.denom().is_one() {
        return format!("{}", r.numer());
    }

    let significatives = decimales_significatives(r, chiffres);
    let digits = match decimales_exactes(r.denom()) {
        Some(n) if n <= chiffres.max(significatives) => n,
        _ => significatives,
    };

    // entier “scalé” = r * 10^digits, tronqué vers zéro
    let scaled = (r.numer() * pow10(digits)) / r.denom();
    nettoie(scaled_to_decimal(scaled, digits))
}

/// Décimales nécessaires pour garder `chiffres` chiffres significatifs.
/// |r| >= 1 : chiffres - longueur de la partie entière (au moins 0).
/// |r| < 1  : zéros de tête après la virgule + chiffres.
fn decimales_significatives(r: &BigRational, chiffres: usize) -> usize {
    let n = r.numer().abs();
    let d = r.denom();

    let entier = &n / d;
    if !entier.is_zero() {
        return chiffres.saturating_sub(entier.to_str_radix(10).len());
    }

    let mut zeros = 0usize;
    let mut x = n * 10;
    while &x < d {
        x *= 10;
        zeros += 1;
    }
    zeros + chiffres
}

/// Nombre de décimales d’un développement fini, ou None s’il est infini.
/// d = 2^a · 5^b  =>  max(a, b) décimales.
fn decimales_exactes(d: &BigInt) -> Option<usize> {
    let deux = BigInt::from(2);
    let cinq = BigInt::from(5);

    let mut reste = d.clone();
    let mut a = 0usize;
    while (&reste % &deux).is_zero() {
        reste /= &deux;
        a += 1;
    }
    let mut b = 0usize;
    while (&reste % &cinq).is_zero() {
        reste /= &cinq;
        b += 1;
    }

    if reste.is_one() {
        Some(a.max(b))
    } else {
        None
    }
}

/// Convertit un entier “scalé” (×10^digits) en texte décimal.
fn scaled_to_decimal(mut scaled: BigInt, digits: usize) -> String {
    let neg = scaled.is_negative();
    if neg {
        scaled = -scaled;
    }

    let scale = pow10(digits);
    let int_part = &scaled / &scale;
    let frac_part = &scaled % &scale;

    let signe = if neg { "-" } else { "" };

    if digits == 0 {
        return format!("{signe}{int_part}");
    }

    let mut frac = frac_part.to_str_radix(10);
    while frac.len() < digits {
        frac.insert(0, '0');
    }

    format!("{signe}{int_part}.{frac}")
}

fn nettoie(s: String) -> String {
    let s = if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    };

    if s == "-0" {
        "0".to_string()
    } else {
        s
    }
}
