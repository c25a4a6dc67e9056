// src/noyau/erreur.rs

use thiserror::Error;

/// Erreurs locales du noyau.
///
/// Aucune ne remonte jusqu’à l’affichage : l’accumulateur les absorbe
/// (affichage "0", pourcentage sans effet, opérande lu comme 0).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurNoyau {
    /// Le tampon d’entrée ne commence par aucun nombre fini.
    #[error("nombre invalide: {0:?}")]
    NombreInvalide(String),
}

pub type Resultat<T> = std::result::Result<T, ErreurNoyau>;
