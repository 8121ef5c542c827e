// src/noyau/erreur.rs
//
// Erreurs du noyau.
//
// Deux familles seulement :
// - ArgumentInvalide : refus synchrone (ex: ajouter_nombre("abc")),
//   remonté tel quel à l'appelant.
// - Evaluation : l'expression ne donne pas de résultat fini.
//   JAMAIS remontée par Moteur::evaluer — le moteur la récupère
//   localement (valeur = None) et journalise le diagnostic.
// - ParentheseNonAppariee : utilisée SEULEMENT par la politique stricte
//   de rpn.rs ; la politique tolérante ne la produit jamais.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Erreur {
    #[error("argument invalide : {0}")]
    ArgumentInvalide(String),

    #[error("évaluation impossible : {0}")]
    Evaluation(String),

    #[error("parenthèses non appariées")]
    ParentheseNonAppariee,
}
