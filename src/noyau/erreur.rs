// src/noyau/erreur.rs
//
// Erreur unique du pipeline.
// Une variante par étape : la première étape qui détecte un problème
// interrompt tout (pas de récupération partielle).

use std::fmt;

/// Erreur d'évaluation (étiquetée par étape).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Erreur {
    /// Entrée vide.
    Vide,
    /// Tokenizer : caractère invalide, signe moins mal placé, nombre illisible.
    Lexique(String),
    /// Conversion RPN : opérateur mal placé, parenthèses déséquilibrées.
    Syntaxe(String),
    /// Construction de l'arbre : la RPN ne se réduit pas à un seul arbre,
    /// ou l'arbre dépasse la profondeur maximale.
    Structure(String),
    /// Évaluation : division par zéro.
    Arithmetique(String),
    /// Invariant amont violé (jamais causé par l'utilisateur via `eval_expression`).
    Interne(String),
}

impl Erreur {
    pub fn lexique(msg: impl Into<String>) -> Self {
        Erreur::Lexique(msg.into())
    }

    pub fn syntaxe(msg: impl Into<String>) -> Self {
        Erreur::Syntaxe(msg.into())
    }

    pub fn structure(msg: impl Into<String>) -> Self {
        Erreur::Structure(msg.into())
    }

    pub fn arithmetique(msg: impl Into<String>) -> Self {
        Erreur::Arithmetique(msg.into())
    }

    pub fn interne(msg: impl Into<String>) -> Self {
        Erreur::Interne(msg.into())
    }

    /// Nom de la famille d'erreur (journaux, tests).
    pub fn genre(&self) -> &'static str {
        match self {
            Erreur::Vide => "EvalError",
            Erreur::Lexique(_) => "LexError",
            Erreur::Syntaxe(_) => "SyntaxError",
            Erreur::Structure(_) => "StructureError",
            Erreur::Arithmetique(_) => "ArithmeticError",
            Erreur::Interne(_) => "InternalError",
        }
    }

    /// Message lisible, sans le genre.
    pub fn message(&self) -> &str {
        match self {
            Erreur::Vide => "empty input",
            Erreur::Lexique(m)
            | Erreur::Syntaxe(m)
            | Erreur::Structure(m)
            | Erreur::Arithmetique(m)
            | Erreur::Interne(m) => m,
        }
    }
}

impl fmt::Display for Erreur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for Erreur {}
