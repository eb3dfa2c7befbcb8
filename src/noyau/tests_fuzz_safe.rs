//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler la calculatrice sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - longueurs bornées
//! - budget temps global
//! - invariant clé : une évaluation ratée laisse expression vide + "Error",
//!   une évaluation réussie laisse un résultat ré-évaluable tel quel

use std::time::{Duration, Instant};

use super::calculatrice::{Calculatrice, Phase, MARQUEUR_ERREUR};
use super::erreur::ErreurExpression;
use super::eval::TERMINAISONS_INVALIDES;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération ------------------------ */

const ALPHABET: &[char] = &[
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '.', '+', '-', '*', '/',
];

/// Saisie brute (comme un utilisateur qui tape n’importe quoi au pavé).
fn gen_saisie(rng: &mut Rng) -> String {
    let n = rng.pick(24) as usize;
    (0..n)
        .map(|_| {
            // chiffres deux fois plus fréquents : plus de formes valides
            if rng.coin() {
                ALPHABET[rng.pick(10) as usize]
            } else {
                ALPHABET[rng.pick(ALPHABET.len() as u32) as usize]
            }
        })
        .collect()
}

/// Expression entière bien formée + sa valeur de référence (calculée à part).
/// Forme : ±(a*b*…) ± (c*…) … avec de petits entiers.
fn gen_somme_de_produits(rng: &mut Rng) -> (String, i64) {
    let mut texte = String::new();
    let mut total: i64 = 0;

    let termes = 1 + rng.pick(5);
    for t in 0..termes {
        let negatif = rng.coin();
        if t > 0 {
            texte.push(if negatif { '-' } else { '+' });
        } else if negatif {
            texte.push('-');
        }

        let facteurs = 1 + rng.pick(3);
        let mut produit: i64 = 1;
        for f in 0..facteurs {
            if f > 0 {
                texte.push('*');
            }
            let v = i64::from(rng.pick(100));
            texte.push_str(&v.to_string());
            produit *= v;
        }

        total += if negatif { -produit } else { produit };
    }

    (texte, total)
}

/// Somme plate "t+t+…+t" (n termes).
fn somme_plate(terme: &str, n: usize) -> String {
    vec![terme; n].join("+")
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_saisie_brute_invariants() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..400 {
        budget(t0, max);

        let saisie = gen_saisie(&mut rng);
        let mut c = Calculatrice::default();
        for ch in saisie.chars() {
            assert!(c.ajouter(ch));
        }

        match c.evaluer() {
            Ok(resultat) => {
                assert_eq!(c.expression(), resultat);
                assert_eq!(c.affichage_courant(), resultat);
                assert_eq!(c.affichage_recent(), saisie);
                assert_eq!(c.phase(), Phase::Evalue);

                // le résultat canonique est un point fixe
                let mut d = Calculatrice::default();
                for ch in resultat.chars() {
                    assert!(d.ajouter(ch), "résultat hors alphabet: {resultat:?}");
                }
                assert_eq!(d.evaluer(), Ok(resultat.clone()), "saisie={saisie:?}");
                seen_ok += 1;
            }
            Err(e) => {
                assert_eq!(c.expression(), "", "saisie={saisie:?} err={e}");
                assert_eq!(c.affichage_courant(), MARQUEUR_ERREUR);
                assert_eq!(c.affichage_recent(), saisie);
                assert_eq!(c.phase(), Phase::Saisie);
                seen_err += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 10, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 10, "trop peu d’erreurs: {seen_err}");
}

#[test]
fn fuzz_safe_terminaison_toujours_refusee() {
    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..200 {
        let mut saisie = gen_saisie(&mut rng);
        let fin = TERMINAISONS_INVALIDES
            .chars()
            .nth(rng.pick(5) as usize)
            .unwrap_or('+');
        saisie.push(fin);

        let mut c = Calculatrice::default();
        for ch in saisie.chars() {
            c.ajouter(ch);
        }
        assert_eq!(
            c.evaluer(),
            Err(ErreurExpression::TerminaisonInvalide(fin)),
            "saisie={saisie:?}"
        );
        assert_eq!(c.expression(), "");
    }
}

#[test]
fn fuzz_safe_precedence_contre_reference() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    let mut rng = Rng::new(0x5EED_u64);

    for _ in 0..300 {
        budget(t0, max);

        let (texte, attendu) = gen_somme_de_produits(&mut rng);
        let mut c = Calculatrice::default();
        for ch in texte.chars() {
            c.ajouter(ch);
        }
        assert_eq!(c.evaluer(), Ok(attendu.to_string()), "texte={texte:?}");
    }
}

#[test]
fn fuzz_safe_somme_plate_longue() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    // 500 termes "1/2" => 1999 jetons, sous la borne de longueur
    let mut c = Calculatrice::default();
    for ch in somme_plate("1/2", 500).chars() {
        c.ajouter(ch);
    }
    assert_eq!(c.evaluer(), Ok("250".to_string()));
    budget(t0, max);
}
