// src/noyau/erreur.rs
//
// Une seule sorte d’erreur vue par l’interface : « expression invalide ».
// Les variantes ne servent qu’au journal et aux tests (le motif exact
// n’est jamais affiché : l’écran montre seulement "Error").

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurExpression {
    #[error("expression vide")]
    Vide,

    #[error("l’expression se termine par '{0}'")]
    TerminaisonInvalide(char),

    #[error("caractère inattendu: '{0}'")]
    CaractereInattendu(char),

    #[error("nombre invalide: {0:?}")]
    NombreInvalide(String),

    #[error("syntaxe invalide: {0}")]
    Syntaxe(&'static str),

    #[error("division par zéro")]
    DivisionParZero,

    #[error("dépassement: {0}")]
    Depassement(&'static str),

    #[error("exposant non supporté: {0}")]
    ExposantNonSupporte(&'static str),
}
