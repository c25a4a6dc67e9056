//! Noyau arithmétique (accumulateur)
//!
//! Organisation interne :
//! - accumulateur.rs : tampon d’entrée + opérande précédent + opérateur en attente
//! - operateur.rs    : + − × ÷ et "=" ; calculate (÷0 -> 0)
//! - nombre.rs       : texte <-> f64 du tampon
//! - format.rs       : afficheur principal (milliers, scientifique)
//! - erreur.rs       : erreurs locales (absorbées par l’accumulateur)

pub mod accumulateur;
pub mod erreur;
pub mod format;
pub mod nombre;
pub mod operateur;

#[cfg(test)]
mod tests_scenarios;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use accumulateur::Accumulateur;
pub use operateur::{Operateur, Operation};

#[cfg(test)]
pub use operateur::calculate;
