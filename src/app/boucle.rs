// src/app/boucle.rs
//
// Boucle de lecture (REPL) : invite -> ligne -> noyau -> "Result = ..." / "Error: ...".
// Écrite sur BufRead / Write pour être testable avec des tampons en mémoire.

use std::io::{BufRead, Write};

use anyhow::Context;
use tracing::{debug, info};

use super::etat::EtatSession;
use crate::config::Config;
use crate::noyau::{eval_avec_demarche, eval_expression, format_resultat, DemarcheNoyau, Erreur};

pub const AU_REVOIR: &str = "Goodbye!";

pub fn banniere(exit_keyword: &str) -> String {
    format!("Expression Calculator with Negative Number Support (type '{exit_keyword}' to quit)")
}

/// Boucle interactive. S'arrête sur le mot-clé de sortie ou en fin d'entrée.
pub fn executer<R: BufRead, W: Write>(
    etat: &mut EtatSession,
    config: &Config,
    entree: R,
    sortie: &mut W,
) -> anyhow::Result<()> {
    if config.banner() {
        writeln!(sortie, "{}", banniere(config.exit_keyword())).context("writing banner")?;
    }

    let mut lignes = entree.lines();
    loop {
        write!(sortie, "{}", config.prompt()).context("writing prompt")?;
        sortie.flush().context("flushing prompt")?;

        let ligne = match lignes.next() {
            Some(l) => l.context("reading input line")?,
            None => {
                // fin d'entrée : on termine la ligne d'invite
                writeln!(sortie).context("writing output")?;
                debug!("fin de l'entrée");
                break;
            }
        };

        if ligne == config.exit_keyword() {
            writeln!(sortie, "{AU_REVOIR}").context("writing output")?;
            break;
        }

        traiter_ligne(etat, &ligne, sortie)?;
    }

    info!(succes = etat.nb_succes, erreurs = etat.nb_erreurs, "fin de session");
    Ok(())
}

/// Évalue une ligne, met l'état à jour et affiche le verdict suivi d'une ligne vide.
pub fn traiter_ligne<W: Write>(
    etat: &mut EtatSession,
    ligne: &str,
    sortie: &mut W,
) -> anyhow::Result<()> {
    etat.set_entree(ligne);

    match evaluer_ligne(etat, ligne) {
        Ok((v, d)) => {
            etat.set_resultats(format_resultat(v, etat.digits), d);
            writeln!(sortie, "Result = {}", etat.resultat).context("writing output")?;
            if etat.afficher_demarche {
                ecrire_demarche(etat, sortie)?;
            }
        }
        Err(e) => {
            debug!(entree = %etat.entree, genre = e.genre(), "ligne refusée");
            etat.set_erreur(e.to_string());
            writeln!(sortie, "Error: {}", etat.erreur).context("writing output")?;
        }
    }

    writeln!(sortie).context("writing output")?;
    Ok(())
}

/// La démarche n'est construite que si elle sera affichée.
fn evaluer_ligne(etat: &EtatSession, ligne: &str) -> Result<(f64, DemarcheNoyau), Erreur> {
    if etat.afficher_demarche {
        eval_avec_demarche(ligne)
    } else {
        eval_expression(ligne).map(|v| (v, DemarcheNoyau::default()))
    }
}

fn ecrire_demarche<W: Write>(etat: &EtatSession, sortie: &mut W) -> anyhow::Result<()> {
    let d = &etat.demarche;
    writeln!(sortie, "  tokens : {}", d.jetons).context("writing output")?;
    writeln!(sortie, "  postfix: {}", d.rpn).context("writing output")?;
    writeln!(sortie, "  tree   : {}", d.arbre).context("writing output")?;
    Ok(())
}

/// Mode une-fois : évalue `expr`, affiche le résultat ; une erreur d'évaluation est remontée.
pub fn une_fois<W: Write>(
    etat: &mut EtatSession,
    expr: &str,
    sortie: &mut W,
) -> anyhow::Result<()> {
    etat.set_entree(expr);
    let (v, d) = evaluer_ligne(etat, expr)?;
    etat.set_resultats(format_resultat(v, etat.digits), d);
    writeln!(sortie, "Result = {}", etat.resultat).context("writing output")?;
    if etat.afficher_demarche {
        ecrire_demarche(etat, sortie)?;
    }
    Ok(())
}
