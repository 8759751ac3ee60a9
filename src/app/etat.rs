//! src/app/etat.rs
//!
//! État de session (sans entrée/sortie, sans noyau).
//!
//! Rôle : contenir l’état de la calculatrice (dernière entrée, résultat, erreur, démarche,
//! précision d'affichage) et offrir des opérations simples, sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de parsing).
//! - Actions déterministes, sans effet de bord caché.
//! - Borne sur la précision (digits).

use crate::noyau::format::DIGITS_MAX;
use crate::noyau::DemarcheNoyau;

#[derive(Clone, Default, Debug)]
pub struct EtatSession {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub resultat: String, // valeur formatée du dernier succès
    pub erreur: String,   // message de la dernière erreur (vide si succès)

    // --- démarche (jetons / RPN / arbre) ---
    pub demarche: DemarcheNoyau,
    pub afficher_demarche: bool,

    // --- paramètres ---
    pub digits: Option<usize>, // None : représentation la plus courte

    // --- compteurs (journal de fin de session) ---
    pub nb_succes: usize,
    pub nb_erreurs: usize,
}

impl EtatSession {
    pub fn new(digits: Option<usize>, afficher_demarche: bool) -> Self {
        let mut etat = Self {
            afficher_demarche,
            ..Self::default()
        };
        etat.set_digits(digits);
        etat
    }

    /// Nouvelle ligne lue : on la garde, les sorties précédentes restent jusqu'au verdict.
    pub fn set_entree(&mut self, entree: &str) {
        self.entree.clear();
        self.entree.push_str(entree);
    }

    /// Placer une erreur.
    ///
    /// On CONSERVE `resultat` (dernier succès) ; la démarche n'est plus fiable, on l'efface.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.demarche = DemarcheNoyau::default();
        self.nb_erreurs += 1;
    }

    /// Déposer un résultat complet (valeur formatée + démarche).
    pub fn set_resultats(&mut self, resultat: impl Into<String>, demarche: DemarcheNoyau) {
        self.erreur.clear();
        self.resultat = resultat.into();
        self.demarche = demarche;
        self.nb_succes += 1;
    }

    /// Garde-fou : limite digits.
    pub fn set_digits(&mut self, digits: Option<usize>) {
        self.digits = digits.map(|d| d.min(DIGITS_MAX));
    }
}
