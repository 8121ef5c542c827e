// src/noyau/moteur.rs
//
// Moteur d'expression : l'état de la calculatrice + les opérations
// d'édition qui réécrivent l'expression au fil des touches.
//
// Contrats :
// - état = expression (texte brut) + dernière valeur calculée (Option)
// - chaque opération d'édition consulte tokenize_affichage (le '%' doit
//   rester visible en dernier jeton, pas son développement "100")
// - aucune opération ne laisse le moteur dans un état irrécupérable :
//   au pire, valeur = None et l'expression est conservée
// - un échec d'évaluation ne remonte JAMAIS : valeur = None + diagnostic
//   complet (expression, jetons, RPN) dans le journal

use super::erreur::Erreur;
use super::eval::evaluer_rpn;
use super::jetons::{format_jetons, tokenize_affichage, tokenize_evaluation, Tok};
use super::rpn::{vers_rpn, PolitiqueParentheses};

/// Opérateur au sens du pavé de la calculatrice.
///
/// '%' en fait partie côté clavier (il s'ajoute par le même chemin gardé
/// que + - x /) même si, côté évaluation, c'est du sucre pour "/100".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Plus,
    Moins,
    Fois,
    Division,
    Pourcent,
}

impl Op {
    fn caractere(self) -> char {
        match self {
            Op::Plus => '+',
            Op::Moins => '-',
            Op::Fois => 'x',
            Op::Division => '/',
            Op::Pourcent => '%',
        }
    }
}

/// Commande fermée : la table d'actions de l'UI se réduit à une liste
/// (bouton -> Commande), et le moteur dispatch par match — pas d'appel
/// de méthode par nom.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Commande {
    Chiffre(char),
    Operateur(Op),
    Negatif,
    Point,
    Parenthese,
    Retirer,
    Effacer,
    Evaluer,
    Egal,
}

/// Moteur d'expression — une instance par session UI, construite
/// explicitement et possédée par l'appelant (pas de singleton).
#[derive(Clone, Debug, Default)]
pub struct Moteur {
    expression: String,
    valeur: Option<f64>,
}

impl Moteur {
    pub fn new() -> Self {
        Self::default()
    }

    /* ------------------------ Accesseurs ------------------------ */

    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Dernière valeur calculée ; None = rien à prévisualiser
    /// (jamais évalué depuis le dernier effacement, ou échec).
    pub fn valeur(&self) -> Option<f64> {
        self.valeur
    }

    /// Jetons bruts de l'expression courante (aperçu / debug UI).
    pub fn jetons(&self) -> Vec<Tok> {
        tokenize_affichage(&self.expression)
    }

    /* ------------------------ Dispatch ------------------------ */

    /// Point d'entrée unique pour l'UI : applique une commande.
    /// Seule Chiffre peut échouer (ArgumentInvalide).
    pub fn appliquer(&mut self, cmd: Commande) -> Result<(), Erreur> {
        match cmd {
            Commande::Chiffre(c) => self.ajouter_nombre(&c.to_string())?,
            Commande::Operateur(op) => self.ajouter_operateur(op),
            Commande::Negatif => self.negatif(),
            Commande::Point => self.point(),
            Commande::Parenthese => self.parenthese(),
            Commande::Retirer => self.retirer(),
            Commande::Effacer => self.effacer(),
            Commande::Evaluer => self.evaluer(),
            Commande::Egal => self.egal(),
        }
        Ok(())
    }

    /* ------------------------ Édition ------------------------ */

    /// Ajoute un chiffre (ou un littéral numérique complet) en fin
    /// d'expression.
    ///
    /// Normalisation :
    /// - les '0' redondants en tête de l'expression sont gommés
    ///   ("0" puis "5" donne "5", "0" répété reste "0")
    /// - un '.' nu en tête récupère son '0' ("." tapé => "0.")
    pub fn ajouter_nombre(&mut self, brut: &str) -> Result<(), Erreur> {
        // alphabet décimal seulement : "nan", "1e5"… passent parse::<f64>
        // mais n'ont pas leur place dans l'expression
        let alphabet_ok = brut
            .chars()
            .all(|c| c.is_ascii_digit() || c == '.' || c == '-');
        if brut.is_empty() || !alphabet_ok || brut.parse::<f64>().is_err() {
            return Err(Erreur::ArgumentInvalide(format!(
                "ajouter_nombre attend un nombre, reçu {brut:?}"
            )));
        }

        let concat = format!("{}{brut}", self.expression);
        let sans_zeros = concat.trim_start_matches('0');

        self.expression = if sans_zeros.is_empty() {
            "0".to_string()
        } else if sans_zeros.starts_with('.') {
            format!("0{sans_zeros}")
        } else {
            sans_zeros.to_string()
        };

        Ok(())
    }

    /// Garde du chemin opérateur : expression non vide ET dernier jeton
    /// refermant une valeur (nombre, ')' ou '%'). Interdit d'empiler
    /// deux opérateurs ou d'ouvrir l'expression par un opérateur binaire.
    pub fn peut_ajouter_operateur(&self) -> bool {
        matches!(
            self.jetons().last(),
            Some(Tok::Num(_)) | Some(Tok::RPar) | Some(Tok::Percent)
        )
    }

    /// Ajoute + - x / ou % — seulement si la garde l'autorise, sinon
    /// no-op (l'opérande implicite d'eval.rs couvre ce qui passerait
    /// quand même par un autre chemin, ex. négation programmée).
    pub fn ajouter_operateur(&mut self, op: Op) {
        if self.peut_ajouter_operateur() {
            self.expression.push(op.caractere());
        }
    }

    pub fn additionner(&mut self) {
        self.ajouter_operateur(Op::Plus);
    }

    pub fn soustraire(&mut self) {
        self.ajouter_operateur(Op::Moins);
    }

    pub fn multiplier(&mut self) {
        self.ajouter_operateur(Op::Fois);
    }

    pub fn diviser(&mut self) {
        self.ajouter_operateur(Op::Division);
    }

    /// '%' littéral ; son sens (diviser par 100) n'est donné qu'au
    /// moment de tokenize_evaluation, jamais à la frappe.
    pub fn pourcent(&mut self) {
        self.ajouter_operateur(Op::Pourcent);
    }

    /// Touche +/- : ouvre un groupe négatif "(-" selon le contexte.
    ///
    /// - expression vide        : "(-"        (groupe en attente de valeur)
    /// - dernier jeton = nombre : le nombre est réécrit "(-nombre"
    /// - dernier jeton = '%'    : "x(-"       ('%' a déjà refermé une valeur)
    /// - sinon (opérateur, '(') : "(-"        (négera l'opérande à venir)
    ///
    /// Le groupe n'est JAMAIS refermé ici : c'est parenthese() (ou
    /// l'utilisateur) qui posera la ')'.
    pub fn negatif(&mut self) {
        match self.jetons().last().cloned() {
            Some(Tok::Num(n)) => {
                self.expression.truncate(self.expression.len() - n.len());
                self.expression.push_str("(-");
                self.expression.push_str(&n);
            }
            Some(Tok::Percent) => self.expression.push_str("x(-"),
            _ => self.expression.push_str("(-"),
        }
    }

    /// Touche '.' : démarre ou prolonge un nombre décimal selon le contexte.
    ///
    /// - expression vide          : "0."
    /// - dernier jeton = nombre   : "."   (prolonge)
    /// - dernier jeton = ')' / '%': "x0." (multiplication implicite)
    /// - sinon (opérateur, '(')   : "0."  (nouveau nombre à zéro)
    pub fn point(&mut self) {
        match self.jetons().last() {
            Some(Tok::Num(_)) => self.expression.push('.'),
            Some(Tok::RPar) | Some(Tok::Percent) => self.expression.push_str("x0."),
            _ => self.expression.push_str("0."),
        }
    }

    /// Touche '()' : ouvre ou ferme selon le contexte.
    ///
    /// Après une valeur (nombre, ')' ou '%') :
    /// - aucun groupe ouvert : "x(" (multiplication implicite)
    /// - un groupe est ouvert : ")"
    /// Sinon (vide, opérateur, '(') : "("
    pub fn parenthese(&mut self) {
        let apres_valeur = matches!(
            self.jetons().last(),
            Some(Tok::Num(_)) | Some(Tok::RPar) | Some(Tok::Percent)
        );

        if apres_valeur {
            let ouvrantes = self.expression.chars().filter(|c| *c == '(').count();
            let fermantes = self.expression.chars().filter(|c| *c == ')').count();
            if ouvrantes == fermantes {
                self.expression.push_str("x(");
            } else {
                self.expression.push(')');
            }
        } else {
            self.expression.push('(');
        }
    }

    /// Touche ⌫ : retire le dernier caractère (no-op si vide).
    pub fn retirer(&mut self) {
        self.expression.pop();
    }

    /// Touche C : expression vide + valeur indisponible.
    pub fn effacer(&mut self) {
        self.expression.clear();
        self.valeur = None;
    }

    /* ------------------------ Évaluation ------------------------ */

    /// Pipeline jetons -> RPN -> valeur, résultat déposé dans `valeur`.
    ///
    /// Récupération locale : tout échec (expression malformée, résultat
    /// non fini) donne valeur = None + diagnostic dans le journal.
    /// Rien ne remonte à l'appelant.
    pub fn evaluer(&mut self) {
        let jetons = tokenize_evaluation(&self.expression);

        // la politique tolérante ne produit jamais d'erreur
        let rpn = match vers_rpn(&jetons, PolitiqueParentheses::Tolerante) {
            Ok(rpn) => rpn,
            Err(e) => {
                self.signaler_echec(&jetons, &[], &e.to_string());
                return;
            }
        };

        match evaluer_rpn(&rpn) {
            Ok(v) if v.is_finite() => self.valeur = Some(v),
            Ok(v) => self.signaler_echec(&jetons, &rpn, &format!("résultat non fini : {v}")),
            Err(e) => self.signaler_echec(&jetons, &rpn, &e.to_string()),
        }
    }

    /// Touche '=' : évalue puis replie le résultat dans l'expression,
    /// prête à servir d'opérande au calcul suivant. La valeur repasse
    /// à None (l'affichage, c'est l'expression désormais).
    pub fn egal(&mut self) {
        self.evaluer();
        if let Some(v) = self.valeur.take() {
            self.expression = format_valeur(v);
        }
    }

    fn signaler_echec(&mut self, jetons: &[Tok], rpn: &[Tok], cause: &str) {
        log::warn!(
            "évaluation échouée : {cause} (expression={:?}, jetons=[{}], rpn=[{}])",
            self.expression,
            format_jetons(jetons),
            format_jetons(rpn),
        );
        self.valeur = None;
    }
}

/// f64 -> texte réinjectable dans l'expression (Display de f64 ne
/// produit jamais de notation scientifique).
fn format_valeur(v: f64) -> String {
    format!("{v}")
}
