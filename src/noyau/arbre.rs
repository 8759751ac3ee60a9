// src/noyau/arbre.rs
//
// Arbre d'expression (flottant).
// - Feuille : littéral fini
// - Op      : opérateur binaire + deux enfants (gauche, droite), ordre significatif
//
// L'arbre est construit une fois (rpn::from_rpn), évalué une fois, puis jeté.
// Aucun partage, aucune mutation après construction.

use std::fmt;

use num_traits::{Pow, Zero};

use super::erreur::Erreur;
use super::jetons::Operateur;

#[derive(Clone, Debug, PartialEq)]
pub enum Noeud {
    Feuille(f64),
    Op(Operateur, Box<Noeud>, Box<Noeud>),
}

impl Noeud {
    pub fn op(op: Operateur, gauche: Noeud, droite: Noeud) -> Noeud {
        Noeud::Op(op, Box::new(gauche), Box::new(droite))
    }

    pub fn nb_feuilles(&self) -> usize {
        match self {
            Noeud::Feuille(_) => 1,
            Noeud::Op(_, g, d) => g.nb_feuilles() + d.nb_feuilles(),
        }
    }

    pub fn nb_operateurs(&self) -> usize {
        match self {
            Noeud::Feuille(_) => 0,
            Noeud::Op(_, g, d) => 1 + g.nb_operateurs() + d.nb_operateurs(),
        }
    }

    /// Profondeur (une feuille seule = 1).
    pub fn profondeur(&self) -> usize {
        match self {
            Noeud::Feuille(_) => 1,
            Noeud::Op(_, g, d) => 1 + g.profondeur().max(d.profondeur()),
        }
    }
}

/// Rendu entièrement parenthésé : "(2 ^ (3 ^ 2))".
impl fmt::Display for Noeud {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Noeud::Feuille(v) => write!(f, "{v}"),
            Noeud::Op(op, g, d) => write!(f, "({g} {} {d})", op.symbole()),
        }
    }
}

/// Applique un opérateur à deux valeurs déjà évaluées.
pub fn appliquer(op: Operateur, g: f64, d: f64) -> Result<f64, Erreur> {
    match op {
        Operateur::Plus => Ok(g + d),
        Operateur::Minus => Ok(g - d),
        Operateur::Star => Ok(g * d),
        Operateur::Slash => {
            // zéro exact uniquement (0.0 et -0.0)
            if d.is_zero() {
                return Err(Erreur::arithmetique("division by zero"));
            }
            Ok(g / d)
        }
        Operateur::Caret => Ok(g.pow(d)),
    }
}

/// Évaluation post-ordre : gauche, droite, puis le noeud.
/// Pas de court-circuit : les deux enfants sont toujours évalués.
pub fn evaluer(noeud: &Noeud) -> Result<f64, Erreur> {
    match noeud {
        Noeud::Feuille(v) => Ok(*v),
        Noeud::Op(op, g, d) => {
            let vg = evaluer(g)?;
            let vd = evaluer(d)?;
            appliquer(*op, vg, vd)
        }
    }
}
