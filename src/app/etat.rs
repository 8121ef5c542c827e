//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder EXPLICITEMENT l'instance du moteur (pas de singleton
//! partagé — une instance par fenêtre, injectée ici) et relayer les
//! commandes de la vue. Les événements boutons arrivent un par un :
//! le moteur n'a jamais besoin d'autre sérialisation que celle-ci.
//!
//! Contrats :
//! - Aucune logique d'affichage ici.
//! - Seul refus possible : ArgumentInvalide, gardé pour la vue.

use crate::noyau::{Commande, Moteur};

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    pub moteur: Moteur,

    // dernier refus synchrone (ArgumentInvalide), vidé à la commande suivante
    pub refus: String,
}

impl AppCalc {
    /// Point de passage unique vue -> moteur.
    pub fn envoyer(&mut self, cmd: Commande) {
        self.refus.clear();
        if let Err(e) = self.moteur.appliquer(cmd) {
            self.refus = e.to_string();
        }
    }

    /// Texte de l'écran principal : l'expression en cours.
    pub fn ecran(&self) -> &str {
        self.moteur.expression()
    }

    /// Aperçu du dernier résultat ; None = rien à prévisualiser
    /// (l'échec d'évaluation n'est PAS une faute applicative).
    pub fn apercu(&self) -> Option<String> {
        self.moteur.valeur().map(|v| format!("{v}"))
    }
}
