// src/noyau/eval.rs
//
// Machine à pile RPN sur f64.
//
// Contrats :
// - Num : parse f64 puis empile
// - opérateur : dépile DROITE puis GAUCHE (l'ordre compte pour - et /),
//   applique, corrige le flottant, rempile
// - tout autre jeton (dont une '(' flushée par la politique tolérante)
//   = Erreur::Evaluation
// - garde-fou : au plus MAX_ETAPES réductions (anti entrée pathologique)
//
// Opérande implicite :
// - si la RPN commence par [valeur, opérateur], l'expression d'origine
//   débutait par un opérateur ("-5", "x5"). On préfixe la valeur neutre :
//   0 pour +/-, 1 pour x et /. Ainsi "-5" s'évalue 0-5 et "x5" 1x5.
//
// NaN/∞ ne sont PAS bloqués ici : le résultat non fini remonte tel quel,
// c'est le moteur qui le convertit en "valeur indisponible".

use super::erreur::Erreur;
use super::jetons::Tok;

/// Plafond de réductions (défense en profondeur, hérité d'une ancienne
/// lignée du moteur ; une RPN honnête n'en approche jamais).
const MAX_ETAPES: usize = 1000;

/// Réduit une RPN à une seule valeur f64.
pub fn evaluer_rpn(rpn: &[Tok]) -> Result<f64, Erreur> {
    let rpn = avec_operande_implicite(rpn);

    let mut pile: Vec<f64> = Vec::with_capacity(8);
    let mut etapes: usize = 0;

    for tok in &rpn {
        match tok {
            Tok::Num(n) => {
                let v: f64 = n
                    .parse()
                    .map_err(|_| Erreur::Evaluation(format!("nombre illisible : {n:?}")))?;
                pile.push(v);
            }

            Tok::Plus | Tok::Minus | Tok::Mult | Tok::Slash => {
                etapes += 1;
                if etapes > MAX_ETAPES {
                    return Err(Erreur::Evaluation("plafond de réductions atteint".into()));
                }

                let droite = pile
                    .pop()
                    .ok_or_else(|| Erreur::Evaluation("opérande droit manquant".into()))?;
                let gauche = pile
                    .pop()
                    .ok_or_else(|| Erreur::Evaluation("opérande gauche manquant".into()))?;

                let brut = match tok {
                    Tok::Plus => gauche + droite,
                    Tok::Minus => gauche - droite,
                    Tok::Mult => gauche * droite,
                    Tok::Slash => gauche / droite,
                    _ => unreachable!(),
                };

                pile.push(corriger_flottant(brut));
            }

            autre => {
                return Err(Erreur::Evaluation(format!("jeton inattendu en RPN : {autre:?}")));
            }
        }
    }

    if pile.len() != 1 {
        return Err(Erreur::Evaluation(format!(
            "RPN déséquilibrée : {} valeur(s) restante(s)",
            pile.len()
        )));
    }
    Ok(pile[0])
}

/// Préfixe la valeur neutre quand la RPN trahit une expression qui
/// commençait par un opérateur (position 1 = opérateur).
fn avec_operande_implicite(rpn: &[Tok]) -> Vec<Tok> {
    let mut out = Vec::with_capacity(rpn.len() + 1);

    if let Some(op) = rpn.get(1) {
        match op {
            Tok::Plus | Tok::Minus => out.push(Tok::Num("0".to_string())),
            Tok::Mult | Tok::Slash => out.push(Tok::Num("1".to_string())),
            _ => {}
        }
    }

    out.extend(rpn.iter().cloned());
    out
}

/// Gomme la dérive de représentation binaire (0.1+0.2 => 0.3 exactement)
/// en arrondissant à 14 chiffres significatifs (~1e-14 relatif).
fn corriger_flottant(x: f64) -> f64 {
    if !x.is_finite() || x == 0.0 {
        return x;
    }
    // aller-retour par l'écriture scientifique : total et sans dépendance
    format!("{x:.13e}").parse().unwrap_or(x)
}
