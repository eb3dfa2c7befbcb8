//! Scénarios d’usage (séquences de touches -> affichages).
//!
//! Chaque test rejoue une séquence telle que le shell la transmet :
//! chiffres/opérateurs via `ajouter`, puis "=" via `evaluer`.

use super::calculatrice::{Calculatrice, MARQUEUR_ERREUR};
use super::erreur::ErreurExpression;

fn tape(touches: &str) -> Calculatrice {
    let mut c = Calculatrice::default();
    for ch in touches.chars() {
        c.ajouter(ch);
    }
    c
}

#[test]
fn scenario_addition_simple() {
    let mut c = tape("2+3");
    assert!(c.evaluer().is_ok());
    assert_eq!(c.affichage_courant(), "5");
    assert_eq!(c.affichage_recent(), "2+3");
}

#[test]
fn scenario_operateur_final() {
    let mut c = tape("4*5-");
    assert_eq!(c.evaluer(), Err(ErreurExpression::TerminaisonInvalide('-')));
    assert_eq!(c.affichage_courant(), MARQUEUR_ERREUR);
    assert_eq!(c.affichage_recent(), "4*5-");
    assert_eq!(c.expression(), "");
}

#[test]
fn scenario_effacer_tout() {
    for touches in ["", "12", "3*", "2+3="] {
        let mut c = tape(touches.trim_end_matches('='));
        if touches.ends_with('=') {
            let _ = c.evaluer();
        }
        c.effacer();
        assert_eq!(c.affichage_courant(), "");
        assert_eq!(c.affichage_recent(), "");
        assert_eq!(c.expression(), "");
    }
}

#[test]
fn scenario_puissance() {
    let mut c = tape("2**3");
    assert_eq!(c.evaluer(), Ok("8".to_string()));
    assert_eq!(c.affichage_courant(), "8");
}

#[test]
fn scenario_racine_non_rationnelle() {
    let mut c = tape("2**0.5");
    assert_eq!(c.evaluer(), Ok("1.414213562373095".to_string()));
    assert_eq!(c.affichage_recent(), "2**0.5");

    // le résultat approché se réutilise comme n’importe quelle valeur
    c.ajouter('*');
    c.ajouter('2');
    assert_eq!(c.evaluer(), Ok("2.82842712474619".to_string()));
}

#[test]
fn scenario_tres_petite_valeur() {
    let mut c = tape("2**-60");
    assert_eq!(
        c.evaluer(),
        Ok("0.0000000000000000008673617379884035".to_string())
    );
    assert_ne!(c.affichage_courant(), "0");
}

#[test]
fn scenario_evaluer_des_la_construction() {
    let mut c = Calculatrice::default();
    assert_eq!(c.evaluer(), Err(ErreurExpression::Vide));
    assert_eq!(c.affichage_courant(), MARQUEUR_ERREUR);
    assert_eq!(c.affichage_recent(), "");
}

#[test]
fn scenario_division_par_zero() {
    let mut c = tape("6/0");
    assert_eq!(c.evaluer(), Err(ErreurExpression::DivisionParZero));
    assert_eq!(c.affichage_courant(), MARQUEUR_ERREUR);
    assert_eq!(c.expression(), "");
}

#[test]
fn scenario_point_final() {
    let mut c = tape("1.");
    assert_eq!(c.evaluer(), Err(ErreurExpression::TerminaisonInvalide('.')));
    assert_eq!(c.expression(), "");
}

#[test]
fn scenario_chaine_de_calculs() {
    // 7/2 = 3.5 ; 3.5*2 = 7 ; 7-10 = -3 ; -3**2 = -9
    let mut c = tape("7/2");
    assert_eq!(c.evaluer(), Ok("3.5".to_string()));
    for ch in "*2".chars() {
        c.ajouter(ch);
    }
    assert_eq!(c.evaluer(), Ok("7".to_string()));
    for ch in "-10".chars() {
        c.ajouter(ch);
    }
    assert_eq!(c.evaluer(), Ok("-3".to_string()));
    for ch in "**2".chars() {
        c.ajouter(ch);
    }
    assert_eq!(c.evaluer(), Ok("-9".to_string()));
    assert_eq!(c.affichage_recent(), "-3**2");
}

#[test]
fn scenario_correction_avant_evaluation() {
    let mut c = tape("4*5-");
    c.effacer_dernier();
    assert_eq!(c.affichage_courant(), "4*5");
    assert_eq!(c.evaluer(), Ok("20".to_string()));
}

#[test]
fn scenario_formes_hors_grammaire() {
    for touches in ["+3", "2//3", "2***3", "1..2", "3++2", "1.2.3"] {
        let mut c = tape(touches);
        assert!(c.evaluer().is_err(), "touches={touches:?}");
        assert_eq!(c.affichage_courant(), MARQUEUR_ERREUR);
        assert_eq!(c.expression(), "");
    }
}
