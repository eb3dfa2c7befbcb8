//! src/noyau/calculatrice.rs
//!
//! Évaluateur à état : une seule expression en cours + deux affichages.
//!
//! Contrats :
//! - `ajouter` / `effacer_dernier` / `effacer` ne peuvent pas échouer.
//! - `evaluer` ne remonte jamais de faute : une erreur vide l’expression
//!   et affiche `MARQUEUR_ERREUR` ; le motif sert au journal seulement.
//! - Aucun état global : deux instances sont indépendantes.

use super::erreur::ErreurExpression;
use super::eval::eval_expression;
use crate::reglages::Reglages;

/// Texte affiché (affichage courant) après une évaluation ratée.
pub const MARQUEUR_ERREUR: &str = "Error";

/// Jetons admis à la saisie (tout le reste est ignoré).
pub fn est_jeton_saisie(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | '*' | '/')
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// L’expression se modifie librement.
    #[default]
    Saisie,
    /// La dernière action est une évaluation réussie ; l’expression est son résultat.
    Evalue,
}

#[derive(Clone, Debug, Default)]
pub struct Calculatrice {
    expression: String,
    recent: String,
    courant: String,
    phase: Phase,
    reglages: Reglages,
}

impl Calculatrice {
    pub fn avec_reglages(reglages: Reglages) -> Self {
        Self {
            reglages: reglages.bornes(),
            ..Self::default()
        }
    }

    /* ------------------------ Lecture ------------------------ */

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn affichage_courant(&self) -> &str {
        &self.courant
    }

    pub fn affichage_recent(&self) -> &str {
        &self.recent
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /* ------------------------ Actions ------------------------ */

    /// Ajoute un jeton de saisie, sans contrôle de grammaire.
    /// Retourne false (sans rien changer) si `c` n’est pas un jeton admis.
    pub fn ajouter(&mut self, c: char) -> bool {
        if !est_jeton_saisie(c) {
            tracing::trace!(?c, "caractère ignoré");
            return false;
        }

        // après "=", on continue à partir du résultat
        self.expression.push(c);
        self.courant.clone_from(&self.expression);
        self.phase = Phase::Saisie;
        true
    }

    /// Retire le dernier caractère ; sans effet si l’expression est vide.
    pub fn effacer_dernier(&mut self) {
        if self.expression.pop().is_none() {
            return;
        }
        self.courant.clone_from(&self.expression);
        self.phase = Phase::Saisie;
    }

    /// Remise à zéro : expression + deux affichages.
    pub fn effacer(&mut self) {
        self.expression.clear();
        self.recent.clear();
        self.courant.clear();
        self.phase = Phase::Saisie;
    }

    /// Évalue l’expression courante.
    ///
    /// - succès : récent = texte évalué, expression = courant = résultat canonique
    /// - échec  : récent = texte évalué, courant = "Error", expression vidée
    pub fn evaluer(&mut self) -> Result<String, ErreurExpression> {
        let texte = std::mem::take(&mut self.expression);

        match eval_expression(&texte, &self.reglages) {
            Ok(resultat) => {
                tracing::info!(expression = %texte, %resultat, "évaluation");
                self.recent = texte;
                self.expression.clone_from(&resultat);
                self.courant.clone_from(&resultat);
                self.phase = Phase::Evalue;
                Ok(resultat)
            }
            Err(e) => {
                tracing::info!(expression = %texte, motif = %e, "expression invalide");
                self.recent = texte;
                self.courant = MARQUEUR_ERREUR.to_string();
                self.phase = Phase::Saisie;
                Err(e)
            }
        }
    }
}
