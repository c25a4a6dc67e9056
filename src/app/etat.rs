//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder l’unique accumulateur, le thème et le magasin de préférences,
//! et appliquer les commandes. Aucune logique d’affichage ici.
//!
//! Contrats :
//! - Toute commande passe par `executer` (pavé ou clavier, même chemin).
//! - Le thème et le retour visuel ne touchent jamais à l’accumulateur.
//! - Un échec du magasin est journalisé, jamais propagé.

use crate::noyau::Accumulateur;

use super::commande::Commande;
use super::stockage::MagasinCleValeur;
use super::theme::Theme;

/// Durée du grossissement de l’afficheur après une commande (secondes).
pub const DUREE_IMPULSION: f64 = 0.1;

/// Échelle de l’afficheur pendant l’impulsion.
pub const ECHELLE_IMPULSION: f32 = 1.02;

pub struct AppCalc {
    pub accu: Accumulateur,
    pub theme: Theme,

    magasin: Box<dyn MagasinCleValeur>,

    // --- UX ---
    // Horloge egui (s) de la dernière commande, pour l’impulsion de l’afficheur.
    impulsion: Option<f64>,
    // Thème déjà poussé dans egui (None au démarrage).
    pub(super) theme_applique: Option<Theme>,
}

impl AppCalc {
    pub fn new(magasin: Box<dyn MagasinCleValeur>) -> Self {
        let theme = Theme::charger(&*magasin);
        tracing::info!("thème initial: {}", theme.valeur());

        Self {
            accu: Accumulateur::new(),
            theme,
            magasin,
            impulsion: None,
            theme_applique: None,
        }
    }

    /// Applique une commande puis arme l’impulsion de l’afficheur.
    pub fn executer(&mut self, cmd: Commande, maintenant: f64) {
        cmd.appliquer(&mut self.accu);
        self.impulsion = Some(maintenant);

        tracing::debug!(
            ?cmd,
            tampon = self.accu.valeur_affichee(),
            en_attente = ?self.accu.operateur_en_attente(),
            attend = self.accu.attend_nouvel_operande(),
            affichage = %self.accu.format_for_display(),
            expression = self.accu.expression(),
            "commande"
        );
    }

    /// Bascule clair/sombre et mémorise le choix tout de suite.
    pub fn basculer_theme(&mut self) {
        self.theme = self.theme.basculer();
        tracing::info!("thème: {}", self.theme.valeur());

        if let Err(e) = self.theme.sauver(&mut *self.magasin) {
            tracing::warn!("thème non mémorisé: {e}");
        }
    }

    /// Facteur d’échelle de l’afficheur à l’instant `maintenant`.
    pub fn echelle_afficheur(&self, maintenant: f64) -> f32 {
        match self.impulsion {
            Some(t0) if maintenant - t0 < DUREE_IMPULSION => ECHELLE_IMPULSION,
            _ => 1.0,
        }
    }

    /// Temps restant avant la fin de l’impulsion (pour programmer un repaint).
    pub fn reste_impulsion(&self, maintenant: f64) -> Option<f64> {
        self.impulsion
            .map(|t0| DUREE_IMPULSION - (maintenant - t0))
            .filter(|r| *r > 0.0)
    }
}
