// src/noyau/rpn.rs
//
// Shunting-yard : infix -> RPN (postfix)
//
// Règles :
// - Num : sortie directe
// - opérateur : dépile tant que le sommet est un opérateur de précédence
//   supérieure OU ÉGALE ('(' compte 0 et bloque), puis empile.
//   Le "ou égale" donne l'associativité à gauche : "2-7+1" se lit (2-7)+1
//   parce que le '+' entrant fait sortir le '-' déjà empilé.
// - '(' : empile sans condition
// - ')' : dépile vers la sortie jusqu'à '(' inclus (la '(' est jetée)
//
// Les parenthèses non appariées sont traitées selon la politique passée :
// - Tolerante : ')' orpheline = vidage simple ; '(' restante = flush en
//   sortie comme un opérateur. L'erreur ne surgira qu'à l'évaluation.
// - Stricte : Erreur::ParentheseNonAppariee dans les deux cas.

use super::erreur::Erreur;
use super::jetons::Tok;

/// Politique vis-à-vis des parenthèses non appariées.
///
/// Le moteur interactif utilise `Tolerante` : l'utilisateur tape une
/// expression incomplète en permanence, le convertisseur ne doit pas
/// la rejeter — c'est l'évaluation qui tranchera.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PolitiqueParentheses {
    Tolerante,
    Stricte,
}

/// Table de précédence statique : + - = 1, x / = 2, parenthèses = 0.
fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Mult | Tok::Slash => 2,
        _ => 0,
    }
}

/// Convertit une suite de jetons infix en RPN.
///
/// Exemple :
///   jetons : [2, +, 9, x, 2]
///   rpn    : [2, 9, 2, x, +]
pub fn vers_rpn(jetons: &[Tok], politique: PolitiqueParentheses) -> Result<Vec<Tok>, Erreur> {
    let mut out: Vec<Tok> = Vec::with_capacity(jetons.len());
    let mut ops: Vec<Tok> = Vec::new();

    for tok in jetons.iter().cloned() {
        match tok {
            Tok::Num(_) => out.push(tok),

            Tok::LPar => ops.push(tok),

            Tok::RPar => {
                let mut apparie = false;
                while let Some(top) = ops.pop() {
                    if matches!(top, Tok::LPar) {
                        apparie = true;
                        break;
                    }
                    out.push(top);
                }
                if !apparie && politique == PolitiqueParentheses::Stricte {
                    return Err(Erreur::ParentheseNonAppariee);
                }
                // tolérant : la ')' orpheline est simplement abandonnée
            }

            Tok::Plus | Tok::Minus | Tok::Mult | Tok::Slash => {
                while let Some(top) = ops.last() {
                    // '(' a précédence 0 : la boucle s'arrête d'elle-même dessus.
                    if precedence(top) >= precedence(&tok) {
                        out.push(ops.pop().unwrap());
                    } else {
                        break;
                    }
                }
                ops.push(tok);
            }

            // '%' doit avoir été développé par tokenize_evaluation ;
            // un jeton inconnu traverse et sera rejeté à l'évaluation.
            Tok::Percent | Tok::Autre(_) => out.push(tok),
        }
    }

    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) && politique == PolitiqueParentheses::Stricte {
            return Err(Erreur::ParentheseNonAppariee);
        }
        // tolérant : une '(' restante est flushée comme un opérateur
        out.push(op);
    }

    Ok(out)
}
