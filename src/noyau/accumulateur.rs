//! src/noyau/accumulateur.rs
//!
//! Accumulateur gauche-à-droite : UN opérateur en attente à la fois.
//!
//! Contrats :
//! - `valeur_affichee` se relit toujours comme un nombre fini, ou vaut "0".
//! - Aucune opération n’échoue : les erreurs locales (nombre illisible) sont absorbées.
//! - Pas de priorité des opérateurs : "2 + 3 × 4 =" donne 20.

use super::erreur::Resultat;
use super::format::{format_affichage, grouper_milliers};
use super::nombre::{lire_nombre, nombre_vers_texte};
use super::operateur::{calculate, Operateur, Operation};

/// Valeur de repos du tampon.
const ZERO: &str = "0";

#[derive(Clone, Debug, PartialEq)]
pub struct Accumulateur {
    valeur_affichee: String,
    valeur_precedente: Option<f64>,
    operateur_en_attente: Option<Operateur>,
    attend_operande: bool,
    texte_expression: String,
}

impl Default for Accumulateur {
    fn default() -> Self {
        Self {
            valeur_affichee: ZERO.to_string(),
            valeur_precedente: None,
            operateur_en_attente: None,
            attend_operande: false,
            texte_expression: String::new(),
        }
    }
}

impl Accumulateur {
    pub fn new() -> Self {
        Self::default()
    }

    /* ------------------------ Lecture d’état ------------------------ */

    /// Tampon brut (ce qui est tapé, ou le dernier résultat).
    pub fn valeur_affichee(&self) -> &str {
        &self.valeur_affichee
    }

    #[cfg(test)]
    pub fn valeur_precedente(&self) -> Option<f64> {
        self.valeur_precedente
    }

    pub fn operateur_en_attente(&self) -> Option<Operateur> {
        self.operateur_en_attente
    }

    /// Vrai juste après un opérateur ou "=" : le prochain chiffre démarre une nouvelle entrée.
    pub fn attend_nouvel_operande(&self) -> bool {
        self.attend_operande
    }

    /// Rien en attente (pas d’opérande gardé, pas d’opérateur).
    #[cfg(test)]
    pub fn est_au_repos(&self) -> bool {
        self.valeur_precedente.is_none() && self.operateur_en_attente.is_none()
    }

    /* ------------------------ Saisie ------------------------ */

    /// Chiffre 0..=9 (les autres valeurs sont ignorées).
    pub fn input_digit(&mut self, d: u8) {
        let Some(c) = char::from_digit(u32::from(d), 10) else {
            return;
        };

        if self.attend_operande {
            self.valeur_affichee = c.to_string();
            self.attend_operande = false;
        } else if self.valeur_affichee == ZERO {
            self.valeur_affichee = c.to_string();
        } else {
            // pas de borne de longueur
            self.valeur_affichee.push(c);
        }
    }

    /// Point décimal (idempotent tant qu’aucune nouvelle entrée ne démarre).
    pub fn input_decimal(&mut self) {
        if self.attend_operande {
            self.valeur_affichee = "0.".to_string();
            self.attend_operande = false;
            return;
        }

        if !self.valeur_affichee.contains('.') {
            self.valeur_affichee.push('.');
        }
    }

    /// Remise à zéro totale.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Retire le dernier caractère ; "0" si rien d’utile ne reste.
    pub fn backspace(&mut self) {
        if self.valeur_affichee.chars().count() <= 1 {
            self.valeur_affichee = ZERO.to_string();
            return;
        }

        self.valeur_affichee.pop();

        // "-5" -> "-" : plus aucun chiffre, on revient au repos
        if !self.valeur_affichee.chars().any(|c| c.is_ascii_digit()) {
            self.valeur_affichee = ZERO.to_string();
        }
    }

    /// Tampon / 100. Sans effet si le tampon est illisible.
    pub fn percentage(&mut self) {
        if let Err(e) = self.try_percentage() {
            tracing::debug!("pourcentage ignoré: {e}");
        }
    }

    fn try_percentage(&mut self) -> Resultat<()> {
        let x = lire_nombre(&self.valeur_affichee)?;
        self.valeur_affichee = nombre_vers_texte(x / 100.0);
        Ok(())
    }

    /* ------------------------ Opérateurs ------------------------ */

    /// Applique un opérateur binaire ou "=".
    ///
    /// - aucun opérande gardé : le tampon devient l’opérande précédent
    /// - sinon, si un opérateur attend : on calcule, le résultat remplace tampon + opérande
    /// - "=" termine la chaîne : plus rien en attente, le résultat est un point de départ neuf
    pub fn apply_operator(&mut self, op: Operation) {
        let courante = self.valeur_courante();

        match (self.valeur_precedente, self.operateur_en_attente) {
            (None, _) => self.valeur_precedente = Some(courante),
            (Some(precedente), Some(attente)) => {
                let r = calculate(precedente, courante, Operation::Binaire(attente));
                self.valeur_affichee = nombre_vers_texte(r);
                self.valeur_precedente = Some(r);
            }
            (Some(_), None) => {}
        }

        self.attend_operande = true;

        match op {
            Operation::Binaire(o) => {
                self.operateur_en_attente = Some(o);
                self.texte_expression = self.expression_pour(o);
            }
            Operation::Egal => {
                self.operateur_en_attente = None;
                self.valeur_precedente = None;
                self.texte_expression.clear();
            }
        }
    }

    /// Tampon lu comme opérande ; illisible -> 0.
    fn valeur_courante(&self) -> f64 {
        lire_nombre(&self.valeur_affichee).unwrap_or_else(|e| {
            tracing::warn!("opérande lu comme 0: {e}");
            0.0
        })
    }

    fn expression_pour(&self, o: Operateur) -> String {
        match self.valeur_precedente {
            Some(p) => format!(
                "{} {}",
                grouper_milliers(&nombre_vers_texte(p)),
                o.symbole()
            ),
            None => String::new(),
        }
    }

    /* ------------------------ Sorties ------------------------ */

    /// Afficheur principal.
    pub fn format_for_display(&self) -> String {
        format_affichage(&self.valeur_affichee)
    }

    /// Ligne secondaire : "<opérande précédent> <symbole>", vide au repos.
    pub fn expression(&self) -> &str {
        &self.texte_expression
    }
}
