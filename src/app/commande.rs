// src/app/commande.rs
//
// Commandes du pavé / clavier -> accumulateur.
//
// Table de dispatch : chaque genre de commande a son gestionnaire (fn simple),
// appelé de façon synchrone depuis la boucle egui. Une commande inconnue
// n’existe pas : le clavier renvoie None avant d’arriver ici.

use crate::noyau::{Accumulateur, Operateur, Operation};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Commande {
    Chiffre(u8),
    Decimale,
    Operateur(Operateur),
    Egal,
    Effacer,
    Retour,
    Pourcent,
}

pub type Gestionnaire = fn(&mut Accumulateur, Commande);

/// Disposition du pavé (5 rangées x 4 colonnes), None = case vide.
pub const PAVE: [[Option<Commande>; 4]; 5] = [
    [
        Some(Commande::Effacer),
        Some(Commande::Retour),
        Some(Commande::Pourcent),
        Some(Commande::Operateur(Operateur::Divise)),
    ],
    [
        Some(Commande::Chiffre(7)),
        Some(Commande::Chiffre(8)),
        Some(Commande::Chiffre(9)),
        Some(Commande::Operateur(Operateur::Fois)),
    ],
    [
        Some(Commande::Chiffre(4)),
        Some(Commande::Chiffre(5)),
        Some(Commande::Chiffre(6)),
        Some(Commande::Operateur(Operateur::Moins)),
    ],
    [
        Some(Commande::Chiffre(1)),
        Some(Commande::Chiffre(2)),
        Some(Commande::Chiffre(3)),
        Some(Commande::Operateur(Operateur::Plus)),
    ],
    [
        Some(Commande::Chiffre(0)),
        Some(Commande::Decimale),
        Some(Commande::Egal),
        None,
    ],
];

impl Commande {
    pub fn gestionnaire(self) -> Gestionnaire {
        match self {
            Commande::Chiffre(_) => chiffre,
            Commande::Decimale => decimale,
            Commande::Operateur(_) => operateur,
            Commande::Egal => egal,
            Commande::Effacer => effacer,
            Commande::Retour => retour,
            Commande::Pourcent => pourcent,
        }
    }

    pub fn appliquer(self, accu: &mut Accumulateur) {
        (self.gestionnaire())(accu, self)
    }

    /// Texte du bouton.
    pub fn libelle(self) -> String {
        match self {
            Commande::Chiffre(d) => d.to_string(),
            Commande::Decimale => ".".into(),
            Commande::Operateur(o) => o.symbole().into(),
            Commande::Egal => "=".into(),
            Commande::Effacer => "C".into(),
            Commande::Retour => "DEL".into(),
            Commande::Pourcent => "%".into(),
        }
    }

    /// Bouton mis en avant (opérateurs et "=").
    pub fn est_operation(self) -> bool {
        matches!(self, Commande::Operateur(_) | Commande::Egal)
    }
}

/* ------------------------ Gestionnaires ------------------------ */

fn chiffre(accu: &mut Accumulateur, c: Commande) {
    if let Commande::Chiffre(d) = c {
        accu.input_digit(d);
    }
}

fn decimale(accu: &mut Accumulateur, _: Commande) {
    accu.input_decimal();
}

fn operateur(accu: &mut Accumulateur, c: Commande) {
    if let Commande::Operateur(o) = c {
        accu.apply_operator(Operation::Binaire(o));
    }
}

fn egal(accu: &mut Accumulateur, _: Commande) {
    accu.apply_operator(Operation::Egal);
}

fn effacer(accu: &mut Accumulateur, _: Commande) {
    accu.clear();
}

fn retour(accu: &mut Accumulateur, _: Commande) {
    accu.backspace();
}

fn pourcent(accu: &mut Accumulateur, _: Commande) {
    accu.percentage();
}
