// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> arbre
// Objectif:
// - Convertir une suite de Tok en RPN (postfix), en refusant les formes mal placées
// - Puis reconstruire l'arbre binaire (Noeud)
//
// Règles:
// - précédence: ^ = 3, * / = 2, + - = 1
// - ^ associatif à droite (ne dépile jamais une précédence égale), les autres à gauche
// - un opérateur ne peut pas être en tête, ni suivre un opérateur ou '('
//   (le moins unaire est déjà absorbé par le tokenizer dans les littéraux négatifs)

use tracing::trace;

use super::arbre::Noeud;
use super::erreur::Erreur;
use super::jetons::{Operateur, Tok};

pub fn precedence(op: Operateur) -> u8 {
    match op {
        Operateur::Plus | Operateur::Minus => 1,
        Operateur::Star | Operateur::Slash => 2,
        Operateur::Caret => 3,
    }
}

/// Profondeur maximale de l'arbre : au-delà, l'évaluation, l'affichage et la
/// libération récursifs risqueraient de déborder la pile.
pub const MAX_PROFONDEUR: usize = 4096;

pub fn is_right_associative(op: Operateur) -> bool {
    matches!(op, Operateur::Caret)
}

fn parentheses_desequilibrees() -> Erreur {
    Erreur::syntaxe("mismatched parentheses")
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(100), Star, LPar, Num(2), Plus, Num(12), RPar]
///   rpn:    [Num(100), Num(2), Num(12), Plus, Star]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, Erreur> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    // balance courante des parenthèses (ne doit jamais devenir négative)
    let mut balance: i64 = 0;

    for (i, tok) in tokens.iter().enumerate() {
        match tok {
            Tok::Num(_) => out.push(tok.clone()),

            Tok::Op(op) => {
                let mal_place =
                    i == 0 || tokens[i - 1].est_operateur() || tokens[i - 1] == Tok::LPar;
                if mal_place {
                    return Err(Erreur::syntaxe(format!(
                        "operator '{}' in invalid position",
                        op.symbole()
                    )));
                }

                // dépile tant que le sommet est un opérateur de précédence >=,
                // sauf pour ^ (associatif à droite)
                while let Some(Tok::Op(top)) = ops.last() {
                    let doit_pop =
                        !is_right_associative(*op) && precedence(*top) >= precedence(*op);
                    if !doit_pop {
                        break;
                    }
                    out.push(Tok::Op(*top));
                    ops.pop();
                }

                ops.push(tok.clone());
            }

            Tok::LPar => {
                ops.push(Tok::LPar);
                balance += 1;
            }

            Tok::RPar => {
                balance -= 1;
                if balance < 0 {
                    return Err(parentheses_desequilibrees());
                }

                // dépile jusqu’à '('
                loop {
                    match ops.pop() {
                        Some(Tok::LPar) => break,
                        Some(top) => out.push(top),
                        None => return Err(parentheses_desequilibrees()),
                    }
                }
            }
        }
    }

    if balance != 0 {
        return Err(parentheses_desequilibrees());
    }

    // vide la pile ops
    while let Some(top) = ops.pop() {
        if matches!(top, Tok::LPar | Tok::RPar) {
            return Err(parentheses_desequilibrees());
        }
        out.push(top);
    }

    trace!(postfix = out.len(), "to_rpn");
    Ok(out)
}

/// Construit l'arbre à partir d’une RPN.
///
/// - Num => feuille
/// - Op  => dépile droite puis gauche (l'ordre des opérandes est conservé)
/// - exactement un arbre doit rester à la fin
/// - profondeur bornée par MAX_PROFONDEUR
pub fn from_rpn(rpn: &[Tok]) -> Result<Noeud, Erreur> {
    // chaque sous-arbre empilé avec sa profondeur
    let mut st: Vec<(Noeud, usize)> = Vec::new();

    for tok in rpn {
        match tok {
            Tok::Num(n) => st.push((Noeud::Feuille(n.valeur), 1)),

            Tok::Op(op) => {
                let droite = st.pop();
                let gauche = st.pop();
                match (gauche, droite) {
                    (Some((g, pg)), Some((d, pd))) => {
                        let profondeur = 1 + pg.max(pd);
                        if profondeur > MAX_PROFONDEUR {
                            return Err(Erreur::structure("expression too deeply nested"));
                        }
                        st.push((Noeud::op(*op, g, d), profondeur));
                    }
                    _ => {
                        return Err(Erreur::structure(format!(
                            "malformed expression: operator '{}' is missing an operand",
                            op.symbole()
                        )))
                    }
                }
            }

            Tok::LPar | Tok::RPar => {
                return Err(Erreur::interne("unexpected parenthesis in postfix sequence"))
            }
        }
    }

    let racine = st.pop();
    match (racine, st.len()) {
        (Some((r, _)), 0) => Ok(r),
        (None, _) => Err(Erreur::structure("malformed expression: nothing to evaluate")),
        (Some(_), reste) => Err(Erreur::structure(format!(
            "malformed expression: {} operands left without an operator",
            reste + 1
        ))),
    }
}
