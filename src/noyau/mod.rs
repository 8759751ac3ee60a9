//! Noyau flottant
//!
//! Organisation interne :
//! - erreur.rs   : erreur étiquetée par étape
//! - jetons.rs   : tokenisation (littéraux négatifs inclus)
//! - rpn.rs      : shunting-yard + construction de l'arbre
//! - arbre.rs    : arbre binaire + évaluation post-ordre
//! - format.rs   : affichage des résultats
//! - eval.rs     : pipeline complet

pub mod arbre;
pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod rpn;

#[cfg(test)]
mod tests_scientifiques;


// API publique minimale
pub use erreur::Erreur;
pub use eval::{eval_avec_demarche, eval_expression, DemarcheNoyau};
pub use format::format_resultat;
