//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> RPN (shunting-yard) -> arbre -> évaluation post-ordre
//!
//! Chaque étape consomme la sortie de la précédente ; la première qui échoue
//! interrompt le pipeline avec son erreur.

use tracing::{debug, trace};

use super::arbre::{evaluer, Noeud};
use super::erreur::Erreur;
use super::jetons::{format_tokens, tokenize, Tok};
use super::rpn::{from_rpn, to_rpn};

/// Démarche : trace textuelle de chaque étape (affichée sur demande).
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct DemarcheNoyau {
    pub jetons: String,
    pub rpn: String,
    pub arbre: String,
}

/// API publique : évalue une expression et retourne sa valeur.
pub fn eval_expression(expr_str: &str) -> Result<f64, Erreur> {
    let resultat = etapes(expr_str).and_then(|(_jetons, _rpn, arbre)| evaluer(&arbre));
    journalise(expr_str, resultat.as_ref().map(|v| *v));
    resultat
}

/// Comme `eval_expression`, avec en plus la démarche (jetons, RPN, arbre).
pub fn eval_avec_demarche(expr_str: &str) -> Result<(f64, DemarcheNoyau), Erreur> {
    let resultat = etapes(expr_str).and_then(|(jetons, rpn, arbre)| {
        let valeur = evaluer(&arbre)?;
        let d = DemarcheNoyau {
            jetons: format_tokens(&jetons),
            rpn: format_tokens(&rpn),
            arbre: arbre.to_string(),
        };
        Ok((valeur, d))
    });
    journalise(expr_str, resultat.as_ref().map(|(v, _)| *v));
    resultat
}

fn journalise(entree: &str, resultat: Result<f64, &Erreur>) {
    match resultat {
        Ok(v) => debug!(entree = entree, valeur = v, "évaluation réussie"),
        Err(e) => debug!(entree = entree, genre = e.genre(), erreur = %e, "évaluation refusée"),
    }
}

/// Étapes 1 à 3 : jetons, RPN, arbre. L'évaluation reste à l'appelant.
fn etapes(expr_str: &str) -> Result<(Vec<Tok>, Vec<Tok>, Noeud), Erreur> {
    // ligne vide seulement : une ligne de blancs va jusqu'à l'arbre, qui la refuse
    if expr_str.is_empty() {
        return Err(Erreur::Vide);
    }

    // 1) Jetons
    let jetons = tokenize(expr_str)?;
    trace!(jetons = %format_tokens(&jetons));

    // 2) RPN
    let rpn = to_rpn(&jetons)?;
    trace!(rpn = %format_tokens(&rpn));

    // 3) Arbre
    let arbre = from_rpn(&rpn)?;
    trace!(
        feuilles = arbre.nb_feuilles(),
        operateurs = arbre.nb_operateurs(),
        profondeur = arbre.profondeur()
    );

    Ok((jetons, rpn, arbre))
}
