// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - En-tête : titre + bouton de thème
// - Afficheur : ligne d’expression (discrète) + valeur (grande, alignée à droite)
// - Pavé 4 colonnes (commande::PAVE)
//
// La vue relit format_for_display() / expression() à chaque frame :
// pas de copie d’état à synchroniser.

use std::time::Duration;

use eframe::egui;

use super::commande::{Commande, PAVE};
use super::etat::AppCalc;

const TAILLE_VALEUR: f32 = 40.0;
const TAILLE_EXPRESSION: f32 = 18.0;
const TAILLE_TOUCHE: f32 = 22.0;
const HAUTEUR_TOUCHE: f32 = 56.0;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        let maintenant = ui.input(|i| i.time);

        ui.spacing_mut().item_spacing = egui::vec2(8.0, 8.0);

        self.ui_entete(ui);
        ui.add_space(8.0);

        self.ui_afficheur(ui, maintenant);
        ui.add_space(12.0);

        self.ui_pave(ui, maintenant);
    }

    fn ui_entete(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading(crate::TITRE_APP);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let resp = ui
                    .button(egui::RichText::new(self.theme.icone()).size(TAILLE_TOUCHE))
                    .on_hover_text("Changer de thème");
                if resp.clicked() {
                    self.basculer_theme();
                }
            });
        });
    }

    fn ui_afficheur(&self, ui: &mut egui::Ui, maintenant: f64) {
        let echelle = self.echelle_afficheur(maintenant);
        if let Some(reste) = self.reste_impulsion(maintenant) {
            ui.ctx()
                .request_repaint_after(Duration::from_secs_f64(reste));
        }

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .inner_margin(egui::Margin::same(12))
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    // ligne vide gardée à hauteur constante
                    let expression = match self.accu.expression() {
                        "" => " ",
                        e => e,
                    };
                    ui.label(
                        egui::RichText::new(expression)
                            .monospace()
                            .size(TAILLE_EXPRESSION)
                            .weak(),
                    );
                    ui.label(
                        egui::RichText::new(self.accu.format_for_display())
                            .monospace()
                            .size(TAILLE_VALEUR * echelle)
                            .strong(),
                    );
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui, maintenant: f64) {
        let spacing = ui.spacing().item_spacing.x;
        let largeur = ((ui.available_width() - 3.0 * spacing) / 4.0).max(40.0);

        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([spacing, spacing])
            .show(ui, |ui| {
                for rangee in PAVE {
                    for case in rangee {
                        match case {
                            Some(cmd) => self.bouton(ui, cmd, [largeur, HAUTEUR_TOUCHE], maintenant),
                            None => {
                                ui.label("");
                            }
                        }
                    }
                    ui.end_row();
                }
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, cmd: Commande, taille: [f32; 2], maintenant: f64) {
        let texte = egui::RichText::new(cmd.libelle()).size(TAILLE_TOUCHE);
        let mut bouton = egui::Button::new(texte);
        if cmd.est_operation() {
            bouton = bouton.fill(ui.visuals().selection.bg_fill);
        }

        if ui.add_sized(taille, bouton).clicked() {
            self.executer(cmd, maintenant);
        }
    }
}
