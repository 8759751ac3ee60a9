// src/app.rs
//
// Calculatrice — module App (racine)
// ----------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + boucle.rs)
// - Ré-exporter ce dont main.rs a besoin
//
// Important:
// - Aucune arithmétique ici : tout passe par crate::noyau.

pub mod boucle;
pub mod etat;

pub use etat::EtatSession;
