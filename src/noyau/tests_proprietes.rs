//! Tests de propriétés (proptest) : invariants de l’accumulateur sur des séquences aléatoires.
//!
//! - séquences bornées (longueur) pour rester rapides
//! - toutes les touches du pavé sont générées, y compris C / DEL / %

use proptest::prelude::*;

use super::nombre::{lire_nombre, nombre_vers_texte};
use super::{calculate, Accumulateur, Operateur, Operation};

/* ------------------------ Stratégies ------------------------ */

#[derive(Clone, Copy, Debug)]
enum Touche {
    Chiffre(u8),
    Decimale,
    Op(Operateur),
    Egal,
    Effacer,
    Retour,
    Pourcent,
}

fn chiffre() -> impl Strategy<Value = u8> {
    0u8..=9u8
}

fn operateur() -> impl Strategy<Value = Operateur> {
    prop_oneof![
        Just(Operateur::Plus),
        Just(Operateur::Moins),
        Just(Operateur::Fois),
        Just(Operateur::Divise),
    ]
}

fn touche() -> impl Strategy<Value = Touche> {
    prop_oneof![
        6 => chiffre().prop_map(Touche::Chiffre),
        1 => Just(Touche::Decimale),
        2 => operateur().prop_map(Touche::Op),
        1 => Just(Touche::Egal),
        1 => Just(Touche::Effacer),
        1 => Just(Touche::Retour),
        1 => Just(Touche::Pourcent),
    ]
}

fn appuyer(a: &mut Accumulateur, t: Touche) {
    match t {
        Touche::Chiffre(d) => a.input_digit(d),
        Touche::Decimale => a.input_decimal(),
        Touche::Op(o) => a.apply_operator(Operation::Binaire(o)),
        Touche::Egal => a.apply_operator(Operation::Egal),
        Touche::Effacer => a.clear(),
        Touche::Retour => a.backspace(),
        Touche::Pourcent => a.percentage(),
    }
}

/* ------------------------ Propriétés ------------------------ */

proptest! {
    /// Chiffres tapés après C : concaténation littérale, zéros de tête absorbés.
    #[test]
    fn prop_chiffres_concatenes(chiffres in prop::collection::vec(chiffre(), 0..40)) {
        let mut a = Accumulateur::new();
        a.clear();
        for &d in &chiffres {
            a.input_digit(d);
        }

        let brut: String = chiffres.iter().map(|d| char::from(b'0' + d)).collect();
        let attendu = match brut.trim_start_matches('0') {
            "" => "0",
            s => s,
        };
        prop_assert_eq!(a.valeur_affichee(), attendu);
    }

    /// Un second point décimal ne change rien.
    #[test]
    fn prop_decimale_idempotente(seq in prop::collection::vec(touche(), 0..30)) {
        let mut a = Accumulateur::new();
        for t in seq {
            appuyer(&mut a, t);
        }

        a.input_decimal();
        let apres_un = a.clone();
        a.input_decimal();
        prop_assert_eq!(a, apres_un);
    }

    /// DEL répété finit toujours sur "0", et y reste.
    #[test]
    fn prop_retour_converge_vers_zero(seq in prop::collection::vec(touche(), 0..30)) {
        let mut a = Accumulateur::new();
        for t in seq {
            appuyer(&mut a, t);
        }

        let n = a.valeur_affichee().chars().count();
        for _ in 0..n {
            a.backspace();
        }
        prop_assert_eq!(a.valeur_affichee(), "0");

        a.backspace();
        prop_assert_eq!(a.valeur_affichee(), "0");
    }

    /// "=" juste après un opérateur : l’opérande précédent est réutilisé.
    #[test]
    fn prop_egal_repete_operande(n in 0u32..1_000_000, op in operateur()) {
        let mut a = Accumulateur::new();
        for c in n.to_string().chars() {
            a.input_digit(c as u8 - b'0');
        }
        a.apply_operator(Operation::Binaire(op));
        a.apply_operator(Operation::Egal);

        let x = f64::from(n);
        let attendu = nombre_vers_texte(calculate(x, x, Operation::Binaire(op)));
        prop_assert_eq!(a.valeur_affichee(), attendu.as_str());
        prop_assert!(a.est_au_repos());
    }

    /// Quelle que soit la séquence : tampon lisible (ou "0"), afficheur non vide.
    #[test]
    fn prop_tampon_toujours_lisible(seq in prop::collection::vec(touche(), 0..60)) {
        let mut a = Accumulateur::new();
        for t in seq {
            appuyer(&mut a, t);

            let tampon = a.valeur_affichee();
            prop_assert!(
                tampon == "0" || lire_nombre(tampon).is_ok(),
                "tampon illisible: {:?}", tampon
            );
            prop_assert!(!a.format_for_display().is_empty());
        }
    }

    /// Expression vide <=> aucun opérateur en attente.
    #[test]
    fn prop_expression_suit_l_operateur(seq in prop::collection::vec(touche(), 0..40)) {
        let mut a = Accumulateur::new();
        for t in seq {
            appuyer(&mut a, t);
            prop_assert_eq!(a.expression().is_empty(), a.operateur_en_attente().is_none());
            if let Some(o) = a.operateur_en_attente() {
                prop_assert!(a.expression().ends_with(o.symbole()));
            }
        }
    }
}
