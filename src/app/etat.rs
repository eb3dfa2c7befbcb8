//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder la calculatrice du noyau et lui transmettre les commandes
//! venues de la table de répartition (boutons + clavier).
//!
//! Contrats (version UI) :
//! - Aucune évaluation ici : tout passe par `Calculatrice`.
//! - Une commande = un appel au noyau, rien de caché.

use super::commandes::Commande;
use crate::noyau::{Calculatrice, Phase};
use crate::reglages::Reglages;

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    pub calc: Calculatrice,
}

impl AppCalc {
    pub fn new(reglages: Reglages) -> Self {
        Self {
            calc: Calculatrice::avec_reglages(reglages),
        }
    }

    /// Applique une commande au noyau.
    /// Une erreur d’évaluation est déjà récupérée par le noyau (affichage "Error").
    pub fn executer(&mut self, commande: Commande) {
        tracing::debug!(?commande, expression = self.calc.expression(), "commande");
        match commande {
            Commande::Ajouter(c) => {
                self.calc.ajouter(c);
            }
            Commande::EffacerDernier => self.calc.effacer_dernier(),
            Commande::Effacer => self.calc.effacer(),
            Commande::Evaluer => {
                let _ = self.calc.evaluer();
            }
        }
    }

    pub fn affichage_recent(&self) -> &str {
        self.calc.affichage_recent()
    }

    pub fn affichage_courant(&self) -> &str {
        self.calc.affichage_courant()
    }

    /// Vrai si l’affichage courant est un résultat (et non une saisie ou "Error").
    pub fn montre_resultat(&self) -> bool {
        self.calc.phase() == Phase::Evalue
    }
}
