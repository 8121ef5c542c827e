//! Noyau calculatrice — moteur d'expression
//!
//! Organisation interne :
//! - jetons.rs : tokenisation (forme affichage / forme évaluation)
//! - rpn.rs    : shunting-yard (politique parenthèses explicite)
//! - eval.rs   : machine à pile RPN (f64 corrigés, plafond d'étapes)
//! - moteur.rs : état + opérations d'édition + commandes
//! - erreur.rs : erreurs typées

pub mod erreur;
pub mod eval;
pub mod jetons;
pub mod moteur;
pub mod rpn;

#[cfg(test)]
mod tests_moteur;

// API publique minimale
pub use erreur::Erreur;
pub use moteur::{Commande, Moteur, Op};
