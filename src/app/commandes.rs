//! src/app/commandes.rs
//!
//! Table de répartition : chaque entrée (bouton, caractère tapé, touche)
//! correspond à UNE opération du noyau. Le shell possède cette table ;
//! le noyau ne connaît ni boutons ni clavier.

use crate::noyau::calculatrice::est_jeton_saisie;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Commande {
    Ajouter(char),
    EffacerDernier,
    Effacer,
    Evaluer,
}

/// Touches spéciales (indépendantes d’egui).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    Entree,
    Echap,
    Retour,
}

/// Caractère tapé au clavier : seuls les jetons de saisie comptent.
pub fn commande_pour_caractere(c: char) -> Option<Commande> {
    est_jeton_saisie(c).then_some(Commande::Ajouter(c))
}

pub fn commande_pour_touche(t: Touche) -> Commande {
    match t {
        Touche::Entree => Commande::Evaluer,
        Touche::Echap => Commande::Effacer,
        Touche::Retour => Commande::EffacerDernier,
    }
}

/// Libellé d’un bouton du pavé -> commande.
pub fn commande_pour_bouton(libelle: &str) -> Option<Commande> {
    match libelle {
        "=" => Some(Commande::Evaluer),
        "C" => Some(Commande::Effacer),
        "DEL" => Some(Commande::EffacerDernier),
        _ => {
            let mut it = libelle.chars();
            match (it.next(), it.next()) {
                (Some(c), None) => commande_pour_caractere(c),
                _ => None,
            }
        }
    }
}
