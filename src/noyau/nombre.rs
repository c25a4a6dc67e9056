// src/noyau/nombre.rs
//
// Texte <-> f64 pour le tampon d’entrée.
//
// Règles:
// - lecture : plus long préfixe numérique valide (signe, chiffres, fraction, exposant),
//   "5." -> 5, "1e-" -> 1, "12abc" -> 12 ; aucun préfixe -> NombreInvalide
// - écriture : plus courte forme décimale qui se relit à l’identique,
//   forme exposant si |x| >= 1e21 ou |x| < 1e-6 ("1e-7", "1.5e+21")

use super::erreur::{ErreurNoyau, Resultat};

/// Au-delà : forme exposant.
const BORNE_HAUTE_TEXTE: f64 = 1e21;

/// En dessous (hors zéro) : forme exposant.
const BORNE_BASSE_TEXTE: f64 = 1e-6;

/// Lit le plus long préfixe numérique de `texte`.
///
/// Les espaces de tête sont ignorés. Une valeur non finie (débordement) est refusée.
pub fn lire_nombre(texte: &str) -> Resultat<f64> {
    let s = texte.trim_start();
    let b = s.as_bytes();
    let mut i = 0usize;

    if i < b.len() && (b[i] == b'+' || b[i] == b'-') {
        i += 1;
    }

    let debut = i;
    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
    }
    let mut chiffres = i - debut;

    // fraction : le point n’est retenu que s’il touche au moins un chiffre
    if i < b.len() && b[i] == b'.' {
        let mut k = i + 1;
        while k < b.len() && b[k].is_ascii_digit() {
            k += 1;
        }
        let frac = k - (i + 1);
        if chiffres > 0 || frac > 0 {
            chiffres += frac;
            i = k;
        }
    }

    if chiffres == 0 {
        return Err(ErreurNoyau::NombreInvalide(texte.to_string()));
    }

    // exposant : seulement s’il est complet (e, signe optionnel, au moins un chiffre)
    if i < b.len() && (b[i] == b'e' || b[i] == b'E') {
        let mut k = i + 1;
        if k < b.len() && (b[k] == b'+' || b[k] == b'-') {
            k += 1;
        }
        let d = k;
        while k < b.len() && b[k].is_ascii_digit() {
            k += 1;
        }
        if k > d {
            i = k;
        }
    }

    let x: f64 = s[..i]
        .parse()
        .map_err(|_| ErreurNoyau::NombreInvalide(texte.to_string()))?;

    if !x.is_finite() {
        return Err(ErreurNoyau::NombreInvalide(texte.to_string()));
    }
    Ok(x)
}

/// Écrit `x` dans le tampon (forme courte, relisible par `lire_nombre`).
///
/// Zéro (y compris -0) et les valeurs non finies donnent "0".
pub fn nombre_vers_texte(x: f64) -> String {
    if x == 0.0 || !x.is_finite() {
        return "0".to_string();
    }

    let abs = x.abs();
    if abs >= BORNE_HAUTE_TEXTE || abs < BORNE_BASSE_TEXTE {
        return signer_exposant(format!("{x:e}"));
    }
    format!("{x}")
}

/// "1.5e21" -> "1.5e+21" ; "1e-7" inchangé.
fn signer_exposant(brut: String) -> String {
    match brut.split_once('e') {
        Some((mantisse, exp)) if !exp.starts_with('-') => format!("{mantisse}e+{exp}"),
        _ => brut,
    }
}
