// src/app.rs
//
// Calculatrice — module App (racine)
// ----------------------------------
// Rôle:
// - Déclarer les sous-modules (état, vue, commandes, clavier, thème, stockage)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Ordre dans une frame : thème -> clavier -> vue.
// Clavier et pavé passent tous deux par AppCalc::executer.

pub mod clavier;
pub mod commande;
pub mod etat;
pub mod stockage;
pub mod theme;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

/// Rétrécissement d’un bouton enfoncé (retour tactile).
const EXPANSION_BOUTON_ENFONCE: f32 = -2.0;

impl AppCalc {
    /// Pousse le thème dans egui, seulement quand il change.
    fn appliquer_theme(&mut self, ctx: &egui::Context) {
        if self.theme_applique == Some(self.theme) {
            return;
        }

        let mut visuals = self.theme.visuals();
        visuals.widgets.active.expansion = EXPANSION_BOUTON_ENFONCE;
        // préférence fixée : egui ne suit plus le thème du système
        ctx.set_theme(self.theme.egui());
        ctx.set_visuals_of(self.theme.egui(), visuals);
        self.theme_applique = Some(self.theme);
    }
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.appliquer_theme(ctx);

        let (maintenant, commandes) =
            ctx.input(|i| (i.time, clavier::commandes_depuis_evenements(&i.events)));
        for cmd in commandes {
            self.executer(cmd, maintenant);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
