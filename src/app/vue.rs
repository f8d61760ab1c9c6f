// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Deux affichages : saisie en cours + dernier résultat
// - Pavé : chiffres, opérateurs, parenthèses, sin/cos/tan, DEL, Clear, "="
// - Disposition étroite (pavé 4 colonnes) ou large (deux rangées), selon
//   la place disponible
// - Clavier physique : chiffres/opérateurs insérés touche par touche,
//   Enter évalue, Backspace efface (ESC est géré dans app.rs)

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::{touche_depuis_car, Touche};

/// Largeur en dessous de laquelle on passe au pavé étroit.
const LARGEUR_PAVE_LARGE: f32 = 560.0;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité "calc"
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.clavier_physique(ui);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice trigo");
                ui.add_space(6.0);

                self.ui_affichages(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                if ui.available_width() >= LARGEUR_PAVE_LARGE {
                    self.ui_pave_large(ui);
                } else {
                    self.ui_pave_etroit(ui);
                }
            });
    }

    /* ------------------------ Clavier physique ------------------------ */

    fn clavier_physique(&mut self, ui: &mut egui::Ui) {
        let (enter, backspace, textes) = ui.input(|i| {
            let textes: Vec<String> = i
                .events
                .iter()
                .filter_map(|e| match e {
                    egui::Event::Text(t) => Some(t.clone()),
                    _ => None,
                })
                .collect();
            (
                i.key_pressed(egui::Key::Enter),
                i.key_pressed(egui::Key::Backspace),
                textes,
            )
        });

        for t in textes {
            for c in t.chars() {
                if let Some(touche) = touche_depuis_car(c) {
                    self.touche(touche);
                }
            }
        }
        if backspace {
            self.retour();
        }
        if enter {
            self.egal();
        }
    }

    /* ------------------------ Affichages ------------------------ */

    fn ui_affichages(&mut self, ui: &mut egui::Ui) {
        ui.label("Saisie :");
        Self::champ_monospace(ui, "saisie_out", self.saisie.texte());

        ui.add_space(6.0);

        ui.label("Résultat :");
        Self::champ_monospace(ui, "resultat_out", &self.resultat);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str) {
        // Affichage lecture seule "stable", sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(ui.text_style_height(&egui::TextStyle::Monospace));
                    ui.monospace(contenu);
                });
            });
    }

    /* ------------------------ Pavés ------------------------ */

    /// Pavé étroit : grille 4 colonnes, trig et parenthèses en dessous.
    fn ui_pave_etroit(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_etroit")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_touche(ui, "7", Touche::Chiffre(7));
                self.bouton_touche(ui, "8", Touche::Chiffre(8));
                self.bouton_touche(ui, "9", Touche::Chiffre(9));
                self.bouton_touche(ui, "+", Touche::Plus);
                ui.end_row();

                self.bouton_touche(ui, "4", Touche::Chiffre(4));
                self.bouton_touche(ui, "5", Touche::Chiffre(5));
                self.bouton_touche(ui, "6", Touche::Chiffre(6));
                self.bouton_touche(ui, "-", Touche::Moins);
                ui.end_row();

                self.bouton_touche(ui, "1", Touche::Chiffre(1));
                self.bouton_touche(ui, "2", Touche::Chiffre(2));
                self.bouton_touche(ui, "3", Touche::Chiffre(3));
                self.bouton_touche(ui, "*", Touche::Fois);
                ui.end_row();

                self.bouton_touche(ui, "0", Touche::Chiffre(0));
                self.bouton_touche(ui, ".", Touche::Point);
                self.bouton_egal(ui);
                self.bouton_touche(ui, "/", Touche::Division);
                ui.end_row();

                self.bouton_touche(ui, "sin", Touche::Sin);
                self.bouton_touche(ui, "cos", Touche::Cos);
                self.bouton_touche(ui, "tan", Touche::Tan);
                self.bouton_retour(ui);
                ui.end_row();
            });

        ui.add_space(6.0);

        ui.horizontal(|ui| {
            self.bouton_touche(ui, "(", Touche::Ouvrante);
            self.bouton_touche(ui, ")", Touche::Fermante);
            self.bouton_vider(ui);
        });
    }

    /// Pavé large : chiffres sur une rangée, le reste sur la suivante.
    fn ui_pave_large(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            for n in 0..=9u8 {
                self.bouton_touche(ui, &n.to_string(), Touche::Chiffre(n));
            }
            self.bouton_touche(ui, ".", Touche::Point);
        });

        ui.horizontal(|ui| {
            self.bouton_touche(ui, "sin", Touche::Sin);
            self.bouton_touche(ui, "cos", Touche::Cos);
            self.bouton_touche(ui, "tan", Touche::Tan);
            self.bouton_touche(ui, "(", Touche::Ouvrante);
            self.bouton_touche(ui, ")", Touche::Fermante);
            self.bouton_touche(ui, "+", Touche::Plus);
            self.bouton_touche(ui, "-", Touche::Moins);
            self.bouton_touche(ui, "*", Touche::Fois);
            self.bouton_touche(ui, "/", Touche::Division);
            self.bouton_egal(ui);
            self.bouton_retour(ui);
        });

        ui.add_space(6.0);

        ui.horizontal(|ui| {
            self.bouton_vider(ui);
        });
    }

    /* ------------------------ Boutons ------------------------ */

    fn bouton_touche(&mut self, ui: &mut egui::Ui, label: &str, touche: Touche) {
        let resp = ui.add_sized([46.0, 36.0], egui::Button::new(label));
        if resp.clicked() {
            self.touche(touche);
        }
    }

    fn bouton_retour(&mut self, ui: &mut egui::Ui) {
        let resp = ui
            .add_sized([46.0, 36.0], egui::Button::new("DEL"))
            .on_hover_text("Efface le dernier caractère");
        if resp.clicked() {
            self.retour();
        }
    }

    fn bouton_vider(&mut self, ui: &mut egui::Ui) {
        let resp = ui
            .add_sized([100.0, 36.0], egui::Button::new("Clear"))
            .on_hover_text("Efface la saisie et le résultat");
        if resp.clicked() {
            self.vider();
        }
    }

    fn bouton_egal(&mut self, ui: &mut egui::Ui) {
        // rien à évaluer sur une saisie vide
        let actif = !self.saisie.est_vide();
        let resp = ui.add_enabled(
            actif,
            egui::Button::new("=").min_size(egui::vec2(46.0, 36.0)),
        );
        if resp.clicked() {
            self.egal();
        }
    }
}
