// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Écran : expression en cours + aperçu du dernier résultat
// - Bandeau : ⌫ (retirer le dernier caractère)
// - Pavé : table d'actions STATIQUE (bouton -> Commande), rendue en
//   grille 5x4. La vue ne connaît aucune méthode du moteur : elle ne
//   fait qu'envoyer des Commande (dispatch fermé, pas d'appel par nom).
//
// Note : pas de saisie clavier — le produit est boutons-seulement.

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::jetons::format_jetons;
use crate::noyau::{Commande, Op};

/// Une touche du pavé : identité + symbole + info-bulle + commande.
struct ActionBouton {
    nom: &'static str,
    symbole: &'static str,
    description: &'static str,
    commande: Commande,
}

/// Table d'actions, ordre de lecture (5 lignes x 4 colonnes).
const ACTIONS: [ActionBouton; 20] = [
    ActionBouton { nom: "clear", symbole: "C", description: "efface tout", commande: Commande::Effacer },
    ActionBouton { nom: "parenthesis", symbole: "()", description: "ouvre ou ferme une parenthèse", commande: Commande::Parenthese },
    ActionBouton { nom: "percentage", symbole: "%", description: "pourcentage (divise par 100)", commande: Commande::Operateur(Op::Pourcent) },
    ActionBouton { nom: "divide", symbole: "/", description: "division", commande: Commande::Operateur(Op::Division) },

    ActionBouton { nom: "7", symbole: "7", description: "chiffre 7", commande: Commande::Chiffre('7') },
    ActionBouton { nom: "8", symbole: "8", description: "chiffre 8", commande: Commande::Chiffre('8') },
    ActionBouton { nom: "9", symbole: "9", description: "chiffre 9", commande: Commande::Chiffre('9') },
    ActionBouton { nom: "multiply", symbole: "x", description: "multiplication", commande: Commande::Operateur(Op::Fois) },

    ActionBouton { nom: "4", symbole: "4", description: "chiffre 4", commande: Commande::Chiffre('4') },
    ActionBouton { nom: "5", symbole: "5", description: "chiffre 5", commande: Commande::Chiffre('5') },
    ActionBouton { nom: "6", symbole: "6", description: "chiffre 6", commande: Commande::Chiffre('6') },
    ActionBouton { nom: "subtract", symbole: "-", description: "soustraction", commande: Commande::Operateur(Op::Moins) },

    ActionBouton { nom: "1", symbole: "1", description: "chiffre 1", commande: Commande::Chiffre('1') },
    ActionBouton { nom: "2", symbole: "2", description: "chiffre 2", commande: Commande::Chiffre('2') },
    ActionBouton { nom: "3", symbole: "3", description: "chiffre 3", commande: Commande::Chiffre('3') },
    ActionBouton { nom: "add", symbole: "+", description: "addition", commande: Commande::Operateur(Op::Plus) },

    ActionBouton { nom: "negate", symbole: "+/-", description: "négation de l'opérande", commande: Commande::Negatif },
    ActionBouton { nom: "0", symbole: "0", description: "chiffre 0", commande: Commande::Chiffre('0') },
    ActionBouton { nom: "point", symbole: ".", description: "point décimal", commande: Commande::Point },
    ActionBouton { nom: "equals", symbole: "=", description: "évalue et replie le résultat", commande: Commande::Egal },
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading("Calculatrice de poche");
        ui.add_space(6.0);

        self.ui_ecran(ui);

        ui.add_space(4.0);
        self.ui_bandeau(ui);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        self.ui_pave(ui);

        if !self.refus.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.refus);
        }

        ui.add_space(8.0);
        self.ui_jetons(ui);
    }

    /// Panneau repliable : la lecture lexicale de l'expression en cours
    /// (aperçu debug, fermé par défaut).
    fn ui_jetons(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Jetons")
            .default_open(false)
            .show(ui, |ui| {
                ui.monospace(format_jetons(&self.moteur.jetons()));
            });
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let texte = if self.ecran().is_empty() { "0" } else { self.ecran() };
                    ui.monospace(egui::RichText::new(texte).size(28.0));
                });

                // aperçu : rien à montrer tant que rien n'a été évalué
                if let Some(apercu) = self.apercu() {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.weak(egui::RichText::new(format!("= {apercu}")).monospace());
                    });
                }
            });
    }

    fn ui_bandeau(&mut self, ui: &mut egui::Ui) {
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let resp = ui
                .add_sized([56.0, 26.0], egui::Button::new("⌫"))
                .on_hover_text("retire le dernier caractère");
            if resp.clicked() {
                self.envoyer(Commande::Retirer);
            }
        });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for (i, action) in ACTIONS.iter().enumerate() {
                    let resp = ui
                        .add_sized([64.0, 44.0], egui::Button::new(action.symbole))
                        .on_hover_text(action.description);
                    if resp.clicked() {
                        log::debug!("touche {:?}", action.nom);
                        self.envoyer(action.commande);
                    }
                    if i % 4 == 3 {
                        ui.end_row();
                    }
                }
            });
    }
}
