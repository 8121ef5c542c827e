// src/noyau/jetons.rs

/// Jeton lexical d'une expression calculatrice.
///
/// Le nombre reste du TEXTE jusqu'à l'évaluation (le moteur d'édition
/// a besoin de la forme tapée, pas de la valeur).
#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(String),

    Plus,
    Minus,
    Mult, // 'x' (convention pavé de la calculatrice, pas '*')
    Slash,

    // '%' brut — conservé tel quel par tokenize_affichage,
    // réécrit en [Slash, Num("100")] par tokenize_evaluation.
    Percent,

    LPar,
    RPar,

    // Caractère non reconnu : laissé passer tel quel.
    // Pas de couche de validation dure ici — une entrée malformée
    // ne se manifeste qu'à l'évaluation.
    Autre(char),
}

impl Tok {
    pub fn est_operateur(&self) -> bool {
        matches!(self, Tok::Plus | Tok::Minus | Tok::Mult | Tok::Slash)
    }
}

/// Tokenize pour l'ÉDITION / l'affichage : le '%' reste un jeton '%'.
///
/// Les opérations d'édition (négation, point, parenthèse, garde opérateur)
/// doivent voir le DERNIER jeton réellement tapé ; développer '%' ici
/// ferait apparaître "100" en dernière position à leur place.
///
/// Règles :
/// - chiffres et '.' consécutifs s'accumulent en un seul Num
/// - tout autre caractère reconnu devient son propre jeton
/// - aucun jeton vide n'est émis
pub fn tokenize_affichage(s: &str) -> Vec<Tok> {
    let mut out: Vec<Tok> = Vec::new();
    let mut nombre = String::new();

    for c in s.chars() {
        if c.is_ascii_digit() || c == '.' {
            nombre.push(c);
            continue;
        }

        if !nombre.is_empty() {
            out.push(Tok::Num(std::mem::take(&mut nombre)));
        }

        out.push(match c {
            '+' => Tok::Plus,
            '-' => Tok::Minus,
            'x' => Tok::Mult,
            '/' => Tok::Slash,
            '%' => Tok::Percent,
            '(' => Tok::LPar,
            ')' => Tok::RPar,
            autre => Tok::Autre(autre),
        });
    }

    if !nombre.is_empty() {
        out.push(Tok::Num(nombre));
    }

    out
}

/// Tokenize pour l'ÉVALUATION : '%' est du sucre pour "diviser par 100",
/// développé dès maintenant ("42%" => [42, /, 100]).
pub fn tokenize_evaluation(s: &str) -> Vec<Tok> {
    let mut out = Vec::new();
    for tok in tokenize_affichage(s) {
        match tok {
            Tok::Percent => {
                out.push(Tok::Slash);
                out.push(Tok::Num("100".to_string()));
            }
            autre => out.push(autre),
        }
    }
    out
}

/// Liste de jetons en texte (journal de diagnostic + panneau debug UI).
pub fn format_jetons(jetons: &[Tok]) -> String {
    let mut out = Vec::with_capacity(jetons.len());
    for t in jetons {
        let s = match t {
            Tok::Num(n) => n.clone(),
            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Mult => "x".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::Percent => "%".to_string(),
            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
            Tok::Autre(c) => c.to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
