// src/noyau/format.rs

use super::nombre::{lire_nombre, nombre_vers_texte};

/* ------------------------ Seuils d’affichage ------------------------ */

/// |x| au-delà -> notation scientifique.
const SEUIL_GRAND: f64 = 1e15;

/// |x| en dessous (hors zéro) -> notation scientifique.
const SEUIL_PETIT: f64 = 1e-6;

/// Arrondi maximal en notation décimale.
const DECIMALES_MAX: usize = 10;

/// Chiffres après la virgule de la mantisse scientifique.
const DECIMALES_SCIENTIFIQUES: usize = 6;

/* ------------------------ Affichage principal ------------------------ */

/// Texte de l’afficheur principal à partir du tampon d’entrée.
///
/// - tampon illisible -> "0"
/// - très grand / très petit -> "1.000000e-7", "1.234568e+16"
/// - sinon : arrondi à 10 décimales, zéros finaux retirés, séparateurs de milliers
pub fn format_affichage(tampon: &str) -> String {
    let x = match lire_nombre(tampon) {
        Ok(x) => x,
        Err(_) => return "0".to_string(),
    };

    let abs = x.abs();
    if abs > SEUIL_GRAND || (abs < SEUIL_PETIT && x != 0.0) {
        return format_scientifique(x);
    }

    // Arrondi à la main puis relecture : la relecture retire les zéros finaux.
    let arrondi = arrondir_decimales(x, DECIMALES_MAX);

    grouper_milliers(&nombre_vers_texte(arrondi))
}

/// Mantisse à 6 décimales + exposant signé.
///
/// Un cas exactement à mi-chemin s’arrondit vers le plus grand module
/// ("1234566500000000000" -> "1.234567e+18").
pub fn format_scientifique(x: f64) -> String {
    let (entier, fraction) = developpement_exact(x.abs());
    let chiffres: Vec<u8> = entier.bytes().chain(fraction.bytes()).collect();

    let Some(premier) = chiffres.iter().position(|&c| c != b'0') else {
        return format!("0.{}e+0", "0".repeat(DECIMALES_SCIENTIFIQUES));
    };
    let mut exposant = entier.len() as i64 - 1 - premier as i64;

    let significatifs = DECIMALES_SCIENTIFIQUES + 1;
    let mut mantisse: Vec<u8> = chiffres[premier..]
        .iter()
        .copied()
        .take(significatifs)
        .collect();
    mantisse.resize(significatifs, b'0');

    if arrondit_vers_le_haut(&chiffres, premier + significatifs) && incrementer(&mut mantisse) {
        // 9.9999995 -> 10.000000 -> 1.000000e+1
        mantisse.insert(0, b'1');
        mantisse.truncate(significatifs);
        exposant += 1;
    }

    let signe = if x < 0.0 { "-" } else { "" };
    let tete = char::from(mantisse[0]);
    let reste: String = mantisse[1..].iter().map(|&c| char::from(c)).collect();
    let exposant = if exposant >= 0 {
        format!("+{exposant}")
    } else {
        exposant.to_string()
    };
    format!("{signe}{tete}.{reste}e{exposant}")
}

/* ------------------------ Arrondi décimal ------------------------ */

/// Décimales suffisantes pour écrire exactement n’importe quel f64 fini.
const DECIMALES_EXACTES: usize = 1074;

/// Développement décimal exact de `abs` : (partie entière, partie fractionnaire).
fn developpement_exact(abs: f64) -> (String, String) {
    let texte = format!("{abs:.prec$}", prec = DECIMALES_EXACTES);
    match texte.split_once('.') {
        Some((entier, fraction)) => (entier.to_string(), fraction.to_string()),
        None => (texte, String::new()),
    }
}

/// Le chiffre coupé vaut 5 ou plus : sur un développement exact, c’est
/// l’arrondi au plus proche avec mi-chemin vers le plus grand module.
fn arrondit_vers_le_haut(chiffres: &[u8], coupure: usize) -> bool {
    chiffres.get(coupure).is_some_and(|&c| c >= b'5')
}

/// +1 sur le dernier chiffre, avec retenue. `true` si la retenue déborde.
fn incrementer(chiffres: &mut [u8]) -> bool {
    for c in chiffres.iter_mut().rev() {
        if *c == b'9' {
            *c = b'0';
        } else {
            *c += 1;
            return false;
        }
    }
    true
}

/// Arrondit `x` à `decimales` chiffres après la virgule, mi-chemin loin de zéro.
fn arrondir_decimales(x: f64, decimales: usize) -> f64 {
    let (entier, fraction) = developpement_exact(x.abs());
    let mut chiffres: Vec<u8> = entier
        .bytes()
        .chain(fraction.bytes().take(decimales))
        .collect();

    if arrondit_vers_le_haut(fraction.as_bytes(), decimales) && incrementer(&mut chiffres) {
        chiffres.insert(0, b'1');
    }

    let coupure = chiffres.len() - decimales;
    let mut texte = String::with_capacity(chiffres.len() + 2);
    if x < 0.0 {
        texte.push('-');
    }
    for (i, &c) in chiffres.iter().enumerate() {
        if i == coupure {
            texte.push('.');
        }
        texte.push(char::from(c));
    }
    lire_nombre(&texte).unwrap_or(x)
}

/// Insère ',' tous les 3 chiffres (depuis la droite) dans la partie entière.
///
/// Seule la première suite de chiffres est touchée : fraction et exposant restent tels quels.
pub fn grouper_milliers(texte: &str) -> String {
    let (signe, reste) = match texte.strip_prefix('-') {
        Some(r) => ("-", r),
        None => ("", texte),
    };

    let fin = reste
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(reste.len());
    let (entier, suite) = reste.split_at(fin);

    let mut out = String::with_capacity(texte.len() + entier.len() / 3);
    out.push_str(signe);
    for (i, c) in entier.chars().enumerate() {
        if i > 0 && (entier.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out.push_str(suite);
    out
}
