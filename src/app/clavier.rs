// src/app/clavier.rs
//
// Clavier -> Commande.
//
// - caractères (Event::Text) : 0-9 . , + - * / = % c C
// - touches nommées (Event::Key pressé) : Enter, Escape, Backspace
// Un caractère tapé arrive en Text, jamais en Key de notre table : pas de double déclenchement.

use eframe::egui;

use super::commande::Commande;
use crate::noyau::Operateur;

pub fn commande_pour_caractere(c: char) -> Option<Commande> {
    if let Some(d) = c.to_digit(10) {
        return Some(Commande::Chiffre(d as u8));
    }
    if let Some(o) = Operateur::depuis_caractere(c) {
        return Some(Commande::Operateur(o));
    }
    match c {
        '.' | ',' => Some(Commande::Decimale),
        '=' => Some(Commande::Egal),
        '%' => Some(Commande::Pourcent),
        'c' | 'C' => Some(Commande::Effacer),
        _ => None,
    }
}

pub fn commande_pour_touche(key: egui::Key) -> Option<Commande> {
    match key {
        egui::Key::Enter => Some(Commande::Egal),
        egui::Key::Escape => Some(Commande::Effacer),
        egui::Key::Backspace => Some(Commande::Retour),
        _ => None,
    }
}

/// Commandes de la frame, dans l’ordre des événements.
pub fn commandes_depuis_evenements(evenements: &[egui::Event]) -> Vec<Commande> {
    let mut out = Vec::new();
    for ev in evenements {
        match ev {
            egui::Event::Text(texte) => {
                out.extend(texte.chars().filter_map(commande_pour_caractere));
            }
            egui::Event::Key {
                key, pressed: true, ..
            } => {
                out.extend(commande_pour_touche(*key));
            }
            _ => {}
        }
    }
    out
}
