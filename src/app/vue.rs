// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Deux affichages en lecture seule : récent (petit) au-dessus de courant (grand)
// - Pavé 4×4 + ligne DEL / "="
// - Chaque bouton passe par la table de répartition (commandes.rs)
//
// Le clavier est lu dans app.rs (une seule fois par frame).

use eframe::egui;

use super::commandes::commande_pour_bouton;
use super::etat::AppCalc;

/// Pavé : même disposition que la calculatrice de bureau d’origine.
const PAVE: [[&str; 4]; 4] = [
    ["7", "8", "9", "/"],
    ["4", "5", "6", "*"],
    ["1", "2", "3", "-"],
    ["C", "0", ".", "+"],
];

const TAILLE_TOUCHE: [f32; 2] = [80.0, 52.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.ui_affichages(ui);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        self.ui_pave(ui);
    }

    fn ui_affichages(&self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());

                Self::ligne_droite(
                    ui,
                    egui::RichText::new(self.affichage_recent())
                        .monospace()
                        .size(14.0)
                        .weak(),
                );
                let mut courant = egui::RichText::new(self.affichage_courant())
                    .monospace()
                    .size(26.0)
                    .strong();
                if self.montre_resultat() {
                    courant = courant.color(ui.visuals().hyperlink_color);
                }
                Self::ligne_droite(ui, courant);
            });
    }

    fn ligne_droite(ui: &mut egui::Ui, texte: egui::RichText) {
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(texte);
        });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for rangee in PAVE {
                    for libelle in rangee {
                        self.bouton(ui, libelle);
                    }
                    ui.end_row();
                }
            });

        ui.add_space(6.0);

        ui.horizontal(|ui| {
            self.bouton(ui, "DEL");
            let largeur = 3.0 * TAILLE_TOUCHE[0] + 2.0 * 6.0;
            let eq = ui.add_sized([largeur, TAILLE_TOUCHE[1]], egui::Button::new("="));
            if eq.clicked() {
                self.clic("=");
            }
        });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, libelle: &str) {
        let resp = ui.add_sized(TAILLE_TOUCHE, egui::Button::new(libelle));
        if resp.clicked() {
            self.clic(libelle);
        }
    }

    fn clic(&mut self, libelle: &str) {
        match commande_pour_bouton(libelle) {
            Some(c) => self.executer(c),
            None => tracing::warn!(libelle, "bouton sans commande"),
        }
    }
}
