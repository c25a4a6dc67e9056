//! Scénarios de bout en bout sur l’accumulateur : séquences de touches réelles,
//! lecture des deux lignes d’affichage après chaque étape.

use super::{calculate, Accumulateur, Operateur, Operation};

/// Rejoue une séquence façon pavé : chiffres, '.', '+', '-', '*', '/', '=', '%', 'C', '<'.
fn rejouer(sequence: &str) -> Accumulateur {
    let mut a = Accumulateur::new();
    for c in sequence.chars() {
        match c {
            '0'..='9' => a.input_digit(c as u8 - b'0'),
            '.' => a.input_decimal(),
            '=' => a.apply_operator(Operation::Egal),
            '%' => a.percentage(),
            'C' => a.clear(),
            '<' => a.backspace(),
            ' ' => {}
            _ => {
                let op = Operateur::depuis_caractere(c)
                    .unwrap_or_else(|| panic!("touche inconnue: {c:?}"));
                a.apply_operator(Operation::Binaire(op));
            }
        }
    }
    a
}

#[test]
fn addition_complete_revient_au_repos() {
    let mut a = rejouer("50+");
    assert_eq!(a.expression(), "50 +");
    assert_eq!(a.format_for_display(), "50");

    for d in [2, 5] {
        a.input_digit(d);
    }
    assert_eq!(a.format_for_display(), "25");

    a.apply_operator(Operation::Egal);
    assert_eq!(a.format_for_display(), "75");
    assert_eq!(a.valeur_precedente(), None);
    assert_eq!(a.operateur_en_attente(), None);
    assert_eq!(a.expression(), "");
}

#[test]
fn pourcentage_d_un_decimal() {
    let a = rejouer("1.5%");
    assert_eq!(a.format_for_display(), "0.15");
    assert_eq!(a.valeur_affichee(), "0.15");
}

#[test]
fn division_par_zero_affiche_zero() {
    let a = rejouer("3/0=");
    assert_eq!(a.format_for_display(), "0");
    assert!(a.est_au_repos());
}

#[test]
fn egal_juste_apres_operateur_repete_l_operande() {
    for (seq, attendu) in [("7+=", "14"), ("7-=", "0"), ("7*=", "49"), ("7/=", "1")] {
        let a = rejouer(seq);
        assert_eq!(a.format_for_display(), attendu, "seq={seq:?}");
    }

    let a = rejouer("12*=");
    assert_eq!(
        a.valeur_affichee(),
        calculate(12.0, 12.0, Operation::Binaire(Operateur::Fois)).to_string()
    );
}

#[test]
fn grand_nombre_groupe() {
    let a = rejouer("1234567");
    assert_eq!(a.format_for_display(), "1,234,567");
}

#[test]
fn tres_petit_nombre_scientifique() {
    let a = rejouer("0.0000001");
    assert_eq!(a.format_for_display(), "1.000000e-7");
}

#[test]
fn tres_grand_resultat_scientifique() {
    let a = rejouer("99999999*99999999=");
    // 9 999 999 800 000 001 : mantisse arrondie à 6 décimales
    assert_eq!(a.format_for_display(), "1.000000e+16");
}

#[test]
fn somme_flottante_arrondie_a_l_affichage() {
    let a = rejouer(".1+.2=");
    assert_eq!(a.valeur_affichee(), "0.30000000000000004");
    assert_eq!(a.format_for_display(), "0.3");
}

#[test]
fn expression_suit_le_resultat_intermediaire() {
    let mut a = rejouer("1000*2");
    a.apply_operator(Operation::Binaire(Operateur::Divise));
    assert_eq!(a.expression(), "2,000 ÷");
    assert_eq!(a.format_for_display(), "2,000");
}

#[test]
fn clear_en_milieu_de_chaine() {
    let a = rejouer("8*3C5");
    assert_eq!(a.valeur_affichee(), "5");
    assert_eq!(a.expression(), "");
    assert!(a.est_au_repos());
}

#[test]
fn retour_pendant_la_saisie() {
    let a = rejouer("123<<4");
    assert_eq!(a.valeur_affichee(), "14");

    let a = rejouer("9<<<");
    assert_eq!(a.valeur_affichee(), "0");
}

#[test]
fn pourcentage_apres_operateur_agit_sur_le_tampon() {
    // 200 + 10% : le tampon devient 0.1, puis 200 + 0.1
    let a = rejouer("200+10%=");
    assert_eq!(a.format_for_display(), "200.1");
}

#[test]
fn resultat_en_exposant_puis_nouvelle_saisie() {
    let mut a = rejouer("1/10000000=");
    assert_eq!(a.valeur_affichee(), "1e-7");
    assert_eq!(a.format_for_display(), "1.000000e-7");
    assert!(a.attend_nouvel_operande());

    // après "=" le chiffre démarre une nouvelle entrée
    a.input_digit(5);
    assert_eq!(a.valeur_affichee(), "5");

    // la chaîne continue depuis le résultat en exposant
    let a = rejouer("1/10000000=*2=");
    assert_eq!(a.valeur_affichee(), "2e-7");
    assert_eq!(a.format_for_display(), "2.000000e-7");
}

#[test]
fn chiffres_ajoutes_a_l_exposant() {
    // 10^24 puis % : le tampon passe en écriture exposant, sans attente d’opérande
    let mut a = rejouer("1000000000000000000000000%");
    assert_eq!(a.valeur_affichee(), "1e+22");
    assert_eq!(a.format_for_display(), "1.000000e+22");
    assert!(!a.attend_nouvel_operande());

    a.input_digit(5);
    assert_eq!(a.valeur_affichee(), "1e+225");
    assert_eq!(a.format_for_display(), "1.000000e+225");

    a.backspace();
    assert_eq!(a.valeur_affichee(), "1e+22");

    a.apply_operator(Operation::Binaire(Operateur::Fois));
    assert_eq!(a.expression(), "1e+22 ×");
}
