// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Champ en lecture seule en haut, grille 4 colonnes dessous
// - Chaque clic => une commande (etat.rs) ; aucune évaluation ici

use eframe::egui;

use super::etat::{AppCalc, LIBELLES_BOUTONS};

/// Colonnes de la grille.
const COLONNES: usize = 4;

/// Taille d’un bouton.
const TAILLE_BOUTON: [f32; 2] = [72.0, 40.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(5.0, 5.0);

        self.ui_affichage(ui);

        ui.add_space(8.0);

        self.ui_boutons(ui);
    }

    fn ui_affichage(&self, ui: &mut egui::Ui) {
        // &str : egui le traite en lecture seule ; seuls les boutons modifient le texte
        let mut texte = self.affichage.as_str();
        ui.add(
            egui::TextEdit::singleline(&mut texte)
                .desired_width(ui.available_width())
                .id_source("affichage_calc")
                .font(egui::TextStyle::Monospace),
        );
    }

    fn ui_boutons(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("grille_boutons")
            .num_columns(COLONNES)
            .spacing([5.0, 5.0])
            .show(ui, |ui| {
                for (i, libelle) in LIBELLES_BOUTONS.iter().enumerate() {
                    let resp = ui.add_sized(TAILLE_BOUTON, egui::Button::new(*libelle));
                    if resp.clicked() {
                        self.clic(libelle);
                    }
                    if (i + 1) % COLONNES == 0 {
                        ui.end_row();
                    }
                }
            });
    }
}
