// src/app/theme.rs
//
// Thème clair / sombre, mémorisé dans le magasin clé -> valeur.
// Aucun effet sur l’accumulateur.

use eframe::egui;

use super::stockage::{self, MagasinCleValeur};

/// Clé unique dans le magasin de préférences.
pub const CLE_THEME: &str = "calculator-theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Sombre,
    Clair,
}

impl Theme {
    /// Valeur stockée.
    pub fn valeur(self) -> &'static str {
        match self {
            Theme::Sombre => "dark",
            Theme::Clair => "light",
        }
    }

    pub fn depuis_valeur(s: &str) -> Option<Self> {
        match s {
            "dark" => Some(Theme::Sombre),
            "light" => Some(Theme::Clair),
            _ => None,
        }
    }

    pub fn basculer(self) -> Self {
        match self {
            Theme::Sombre => Theme::Clair,
            Theme::Clair => Theme::Sombre,
        }
    }

    /// Icône du bouton : ce qu’on obtiendra en cliquant.
    pub fn icone(self) -> &'static str {
        match self {
            Theme::Sombre => "☀",
            Theme::Clair => "🌙",
        }
    }

    pub fn egui(self) -> egui::Theme {
        match self {
            Theme::Sombre => egui::Theme::Dark,
            Theme::Clair => egui::Theme::Light,
        }
    }

    pub fn visuals(self) -> egui::Visuals {
        match self {
            Theme::Sombre => egui::Visuals::dark(),
            Theme::Clair => egui::Visuals::light(),
        }
    }

    /// Thème mémorisé ; absent, inconnu ou illisible -> sombre.
    pub fn charger(magasin: &dyn MagasinCleValeur) -> Self {
        match magasin.lire(CLE_THEME) {
            Ok(Some(v)) => Self::depuis_valeur(&v).unwrap_or_else(|| {
                tracing::warn!("thème inconnu {v:?}, sombre par défaut");
                Self::default()
            }),
            Ok(None) => Self::default(),
            Err(e) => {
                tracing::warn!("thème non lu: {e}");
                Self::default()
            }
        }
    }

    pub fn sauver(self, magasin: &mut dyn MagasinCleValeur) -> stockage::Resultat<()> {
        magasin.ecrire(CLE_THEME, self.valeur())
    }
}
