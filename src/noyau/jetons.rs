// src/noyau/jetons.rs

use tracing::trace;

use super::erreur::Erreur;

/// Opérateurs binaires reconnus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Minus,
    Star,
    Slash,
    Caret, // ^
}

impl Operateur {
    pub fn depuis_char(c: char) -> Option<Operateur> {
        match c {
            '+' => Some(Operateur::Plus),
            '-' => Some(Operateur::Minus),
            '*' => Some(Operateur::Star),
            '/' => Some(Operateur::Slash),
            '^' => Some(Operateur::Caret),
            _ => None,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Minus => '-',
            Operateur::Star => '*',
            Operateur::Slash => '/',
            Operateur::Caret => '^',
        }
    }
}

/// Littéral numérique : lexème source + valeur déjà lue (toujours finie).
#[derive(Clone, Debug, PartialEq)]
pub struct Nombre {
    pub lexeme: String,
    pub valeur: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(Nombre),
    Op(Operateur),
    LPar,
    RPar,
}

impl Tok {
    /// Construit un jeton nombre à partir de son lexème.
    /// Erreur si le lexème n'est pas un f64 fini (".", "1.2.3", dépassement...).
    pub fn num(lexeme: &str) -> Result<Tok, Erreur> {
        match lexeme.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(Tok::Num(Nombre {
                lexeme: lexeme.to_string(),
                valeur: v,
            })),
            _ => Err(Erreur::lexique(format!("invalid number '{lexeme}'"))),
        }
    }

    pub fn est_operateur(&self) -> bool {
        matches!(self, Tok::Op(_))
    }
}

fn est_chiffre(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - nombres décimaux (ex: 12, 3.5, .5)
/// - littéraux négatifs (ex: -5) quand '-' arrive en tête, après un opérateur ou après '('
/// - opérateurs + - * / ^
/// - parenthèses ( )
/// Les blancs sont ignorés.
pub fn tokenize(s: &str) -> Result<Vec<Tok>, Erreur> {
    let mut out: Vec<Tok> = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Nombre : suite maximale de chiffres / '.'
        if est_chiffre(c) {
            let start = i;
            while i < chars.len() && est_chiffre(chars[i]) {
                i += 1;
            }
            let lexeme: String = chars[start..i].iter().collect();
            out.push(Tok::num(&lexeme)?);
            continue;
        }

        // Littéral négatif : '-' en tête, après un opérateur ou après '('
        if c == '-' && matches!(out.last(), None | Some(Tok::Op(_)) | Some(Tok::LPar)) {
            let start = i;
            i += 1;
            while i < chars.len() && est_chiffre(chars[i]) {
                i += 1;
            }
            if i == start + 1 {
                return Err(Erreur::lexique("invalid use of negative sign"));
            }
            let lexeme: String = chars[start..i].iter().collect();
            out.push(Tok::num(&lexeme)?);
            continue;
        }

        if let Some(op) = Operateur::depuis_char(c) {
            out.push(Tok::Op(op));
            i += 1;
            continue;
        }

        match c {
            '(' => out.push(Tok::LPar),
            ')' => out.push(Tok::RPar),
            _ => {
                return Err(Erreur::lexique(format!(
                    "invalid character '{c}' at column {}",
                    i + 1
                )))
            }
        }
        i += 1;
    }

    trace!(jetons = out.len(), "tokenize");
    Ok(out)
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::with_capacity(tokens.len());
    for t in tokens {
        let s = match t {
            Tok::Num(n) => n.lexeme.clone(),
            Tok::Op(op) => op.symbole().to_string(),
            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
