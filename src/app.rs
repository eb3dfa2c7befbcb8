// src/app.rs
//
// Calculatrice — module App (racine)
// ----------------------------------
// Rôle:
// - Déclarer les sous-modules (commandes.rs + etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Clavier (lu ici, une fois par frame) :
// - chiffres et + - * / . : saisie
// - Enter : évaluer ; Escape : tout effacer ; Backspace : dernier caractère

pub mod commandes;
pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use commandes::{commande_pour_caractere, commande_pour_touche, Commande, Touche};

fn touche_speciale(key: egui::Key) -> Option<Touche> {
    match key {
        egui::Key::Enter => Some(Touche::Entree),
        egui::Key::Escape => Some(Touche::Echap),
        egui::Key::Backspace => Some(Touche::Retour),
        _ => None,
    }
}

/// Traduit les événements clavier de la frame en commandes (dans l’ordre reçu).
fn commandes_clavier(ctx: &egui::Context) -> Vec<Commande> {
    ctx.input(|i| {
        let mut out = Vec::new();
        for ev in &i.events {
            match ev {
                egui::Event::Text(t) => out.extend(t.chars().filter_map(commande_pour_caractere)),
                egui::Event::Key {
                    key, pressed: true, ..
                } => {
                    if let Some(t) = touche_speciale(*key) {
                        out.push(commande_pour_touche(t));
                    }
                }
                _ => {}
            }
        }
        out
    })
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for c in commandes_clavier(ctx) {
            self.executer(c);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
