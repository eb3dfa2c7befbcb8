//! Réglages du noyau (précision d’affichage + bornes anti-dépassement).
//!
//! Fichier JSON optionnel, tous les champs facultatifs :
//!
//! ```json
//! { "chiffres": 16, "bits_max": 4096, "exposant_max": 4096 }
//! ```
//!
//! Chemin : variable `CALCULATRICE_REGLAGES`, sinon `calculatrice.json`
//! dans le répertoire courant. Fichier absent => valeurs par défaut.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Précision par défaut (chiffres significatifs quand l’écriture décimale est tronquée).
const CHIFFRES_DEFAUT: usize = 16;

/// Garde-fou : on borne la précision (anti-abus / anti-gel).
const CHIFFRES_MAX: usize = 200;
const CHIFFRES_MIN: usize = 1;

const BITS_MAX_DEFAUT: u64 = 4096;
const BITS_MAX_PLANCHER: u64 = 64;
const BITS_MAX_PLAFOND: u64 = 1 << 20;

const EXPOSANT_MAX_DEFAUT: u32 = 4096;

pub const VAR_CHEMIN: &str = "CALCULATRICE_REGLAGES";
const FICHIER_DEFAUT: &str = "calculatrice.json";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Reglages {
    /// Chiffres significatifs gardés (troncature) si l’écriture décimale est trop longue.
    pub chiffres: usize,
    /// Taille max (bits) du numérateur ou du dénominateur de toute valeur intermédiaire.
    pub bits_max: u64,
    /// |n| max pour un exposant entier (et dénominateur max d’un exposant fractionnaire).
    pub exposant_max: u32,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            chiffres: CHIFFRES_DEFAUT,
            bits_max: BITS_MAX_DEFAUT,
            exposant_max: EXPOSANT_MAX_DEFAUT,
        }
    }
}

impl Reglages {
    /// Ramène chaque champ dans sa plage admise.
    pub fn bornes(mut self) -> Self {
        self.chiffres = self.chiffres.clamp(CHIFFRES_MIN, CHIFFRES_MAX);
        self.bits_max = self.bits_max.clamp(BITS_MAX_PLANCHER, BITS_MAX_PLAFOND);
        self
    }

    pub fn depuis_json(texte: &str) -> Result<Self, ErreurReglages> {
        let r: Reglages = serde_json::from_str(texte)?;
        Ok(r.bornes())
    }
}

#[derive(Debug, Error)]
pub enum ErreurReglages {
    #[error("lecture du fichier de réglages: {0}")]
    Lecture(#[from] std::io::Error),

    #[error("réglages JSON invalides: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn chemin_reglages() -> PathBuf {
    std::env::var_os(VAR_CHEMIN)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(FICHIER_DEFAUT))
}

/// `Ok(None)` si le fichier n’existe pas.
pub fn lire_reglages(chemin: &Path) -> Result<Option<Reglages>, ErreurReglages> {
    let texte = match std::fs::read_to_string(chemin) {
        Ok(t) => t,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    Reglages::depuis_json(&texte).map(Some)
}

/// Réglages effectifs : jamais d’échec, un fichier invalide est signalé au journal.
pub fn charger_reglages() -> Reglages {
    let chemin = chemin_reglages();
    match lire_reglages(&chemin) {
        Ok(Some(r)) => {
            tracing::info!(chemin = %chemin.display(), ?r, "réglages chargés");
            r
        }
        Ok(None) => {
            tracing::debug!(chemin = %chemin.display(), "pas de fichier de réglages");
            Reglages::default()
        }
        Err(e) => {
            tracing::warn!(chemin = %chemin.display(), erreur = %e, "réglages ignorés");
            Reglages::default()
        }
    }
}
