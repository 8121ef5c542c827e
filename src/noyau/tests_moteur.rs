//! Campagne moteur : scénarios touche-par-touche, comme les tape
//! l'utilisateur. Chaque test part d'un moteur neuf et vérifie à la fois
//! l'expression produite et, quand elle a un sens, la valeur.

use super::moteur::{Commande, Moteur, Op};
use super::erreur::Erreur;

fn moteur_avec(expression_tapee: &str) -> Moteur {
    // rejoue une chaîne comme une suite de touches "nombre" brutes
    let mut m = Moteur::new();
    m.ajouter_nombre(expression_tapee)
        .unwrap_or_else(|e| panic!("saisie {expression_tapee:?} : {e}"));
    m
}

fn valeur_ok(m: &Moteur) -> f64 {
    m.valeur()
        .unwrap_or_else(|| panic!("valeur indisponible, expression={:?}", m.expression()))
}

/* ------------------------ État initial / effacement ------------------------ */

#[test]
fn demarre_vide() {
    let m = Moteur::new();
    assert_eq!(m.expression(), "");
    assert_eq!(m.valeur(), None);
}

#[test]
fn effacer_revient_toujours_a_l_etat_initial() {
    let mut m = moteur_avec("42");
    m.additionner();
    m.ajouter_nombre("7").unwrap();
    m.evaluer();
    assert!(m.valeur().is_some());

    m.effacer();
    assert_eq!(m.expression(), "");
    assert_eq!(m.valeur(), None);
}

/* ------------------------ Saisie de nombres ------------------------ */

#[test]
fn zeros_de_tete_gommes() {
    let mut m = Moteur::new();
    m.ajouter_nombre("0").unwrap();
    assert_eq!(m.expression(), "0");

    // '0' répété : reste "0"
    m.ajouter_nombre("0").unwrap();
    assert_eq!(m.expression(), "0");

    // puis '5' : jamais "05"
    m.ajouter_nombre("5").unwrap();
    assert_eq!(m.expression(), "5");
}

#[test]
fn point_de_tete_recupere_son_zero() {
    let mut m = Moteur::new();
    m.point();
    m.ajouter_nombre("5").unwrap();
    assert_eq!(m.expression(), "0.5");

    // "0" puis "." : le zéro survit devant le point
    let mut m = moteur_avec("0");
    m.point();
    m.ajouter_nombre("1").unwrap();
    assert_eq!(m.expression(), "0.1");
}

#[test]
fn entree_non_numerique_refusee() {
    let mut m = Moteur::new();
    let refus = m.ajouter_nombre("abc");
    assert!(matches!(refus, Err(Erreur::ArgumentInvalide(_))));
    // le refus ne touche pas l'état
    assert_eq!(m.expression(), "");

    // parse f64 ne suffit pas : l'alphabet de l'expression est décimal
    assert!(m.ajouter_nombre("nan").is_err());
    assert!(m.ajouter_nombre("1e5").is_err());

    assert!(matches!(
        m.appliquer(Commande::Chiffre('a')),
        Err(Erreur::ArgumentInvalide(_))
    ));
}

/* ------------------------ Garde opérateur ------------------------ */

#[test]
fn operateur_refuse_sur_expression_vide() {
    let mut m = Moteur::new();
    m.additionner();
    assert_eq!(m.expression(), "");
}

#[test]
fn operateurs_jamais_empiles() {
    let mut m = moteur_avec("5");
    m.additionner();
    assert_eq!(m.expression(), "5+");

    // second opérateur : no-op, quelle que soit la touche
    m.soustraire();
    m.multiplier();
    m.diviser();
    assert_eq!(m.expression(), "5+");
}

#[test]
fn operateur_accepte_apres_parenthese_fermante_et_pourcent() {
    let mut m = moteur_avec("5");
    m.pourcent();
    assert_eq!(m.expression(), "5%");
    m.additionner();
    assert_eq!(m.expression(), "5%+");

    let mut m = moteur_avec("5");
    m.negatif();
    m.parenthese();
    m.multiplier();
    assert_eq!(m.expression(), "(-5)x");
}

/* ------------------------ Quatre opérations + précédence ------------------------ */

#[test]
fn quatre_operations_bout_en_bout() {
    for (op, attendu) in [
        (Op::Plus, 12.0),
        (Op::Moins, 6.0),
        (Op::Fois, 27.0),
        (Op::Division, 3.0),
    ] {
        let mut m = moteur_avec("9");
        m.ajouter_operateur(op);
        m.ajouter_nombre("3").unwrap();
        m.evaluer();
        assert_eq!(valeur_ok(&m), attendu, "op={op:?}");
    }
}

#[test]
fn precedence_respectee() {
    let mut m = moteur_avec("2");
    m.additionner();
    m.ajouter_nombre("9").unwrap();
    m.multiplier();
    m.ajouter_nombre("2").unwrap();
    m.evaluer();
    assert_eq!(valeur_ok(&m), 20.0);
}

#[test]
fn correction_flottante_bout_en_bout() {
    let mut m = moteur_avec("0.1");
    m.additionner();
    m.ajouter_nombre("0.2").unwrap();
    m.evaluer();
    assert_eq!(valeur_ok(&m), 0.3);
}

/* ------------------------ Parenthèses ------------------------ */

#[test]
fn parenthese_scenario_complet() {
    // (9+1)x(5) — séquence du produit d'origine
    let mut m = Moteur::new();
    m.parenthese();
    m.ajouter_nombre("9").unwrap();
    m.additionner();
    m.ajouter_nombre("1").unwrap();
    m.parenthese(); // groupe ouvert -> ')'
    m.parenthese(); // équilibré, après valeur -> "x("
    m.ajouter_nombre("5").unwrap();
    m.parenthese();
    assert_eq!(m.expression(), "(9+1)x(5)");

    m.evaluer();
    assert_eq!(valeur_ok(&m), 50.0);
}

#[test]
fn parenthese_groupe_puis_multiplication() {
    // (2-7)x5 = -25
    let mut m = Moteur::new();
    m.parenthese();
    m.ajouter_nombre("2").unwrap();
    m.soustraire();
    m.ajouter_nombre("7").unwrap();
    m.parenthese();
    m.multiplier();
    m.ajouter_nombre("5").unwrap();
    m.evaluer();
    assert_eq!(valeur_ok(&m), -25.0);
}

/* ------------------------ Négation ------------------------ */

#[test]
fn negation_enveloppe_le_nombre() {
    let mut m = moteur_avec("5");
    m.negatif();
    m.parenthese();
    assert_eq!(m.expression(), "(-5)");

    m.evaluer();
    assert_eq!(valeur_ok(&m), -5.0);
}

#[test]
fn negation_sur_moteur_vide_ouvre_le_groupe() {
    let mut m = Moteur::new();
    m.negatif();
    assert_eq!(m.expression(), "(-");

    m.ajouter_nombre("8").unwrap();
    m.parenthese();
    m.evaluer();
    assert_eq!(valeur_ok(&m), -8.0);
}

#[test]
fn negation_apres_operateur_et_apres_pourcent() {
    let mut m = moteur_avec("2");
    m.additionner();
    m.negatif();
    assert_eq!(m.expression(), "2+(-");

    let mut m = moteur_avec("50");
    m.pourcent();
    m.negatif();
    // '%' a refermé une valeur : multiplication implicite
    assert_eq!(m.expression(), "50%x(-");
}

/* ------------------------ Pourcentage ------------------------ */

#[test]
fn pourcent_vaut_division_par_cent() {
    let mut m = moteur_avec("42");
    m.pourcent();
    assert_eq!(m.expression(), "42%");

    m.evaluer();
    assert_eq!(valeur_ok(&m), 0.42);
}

/* ------------------------ Point décimal ------------------------ */

#[test]
fn point_selon_contexte() {
    // après un opérateur : nouveau nombre à zéro
    let mut m = moteur_avec("1");
    m.additionner();
    m.point();
    assert_eq!(m.expression(), "1+0.");

    // après ')' : multiplication implicite
    let mut m = Moteur::new();
    m.parenthese();
    m.ajouter_nombre("2").unwrap();
    m.parenthese();
    m.point();
    assert_eq!(m.expression(), "(2)x0.");
}

/* ------------------------ Retirer ------------------------ */

#[test]
fn retirer_caractere_par_caractere() {
    let mut m = moteur_avec("12");
    m.additionner();
    m.retirer();
    assert_eq!(m.expression(), "12");
    m.retirer();
    assert_eq!(m.expression(), "1");
    m.retirer();
    assert_eq!(m.expression(), "");
    // no-op sur vide
    m.retirer();
    assert_eq!(m.expression(), "");
}

/* ------------------------ Évaluation : échecs récupérés ------------------------ */

#[test]
fn echec_d_evaluation_ne_remonte_pas() {
    // expression incomplète : opérateur traînant
    let mut m = moteur_avec("5");
    m.additionner();
    m.evaluer();
    assert_eq!(m.valeur(), None);
    // l'expression survit à l'échec
    assert_eq!(m.expression(), "5+");

    // groupe jamais refermé
    let mut m = Moteur::new();
    m.negatif();
    m.ajouter_nombre("5").unwrap();
    m.evaluer();
    assert_eq!(m.valeur(), None);
}

#[test]
fn division_par_zero_rend_la_valeur_indisponible() {
    let mut m = moteur_avec("1");
    m.diviser();
    m.ajouter_nombre("0").unwrap();
    m.evaluer();
    assert_eq!(m.valeur(), None);
}

/* ------------------------ Égal : repli du résultat ------------------------ */

#[test]
fn egal_replie_le_resultat_dans_l_expression() {
    let mut m = moteur_avec("2");
    m.additionner();
    m.ajouter_nombre("9").unwrap();
    m.multiplier();
    m.ajouter_nombre("2").unwrap();
    m.egal();

    assert_eq!(m.expression(), "20");
    assert_eq!(m.valeur(), None);

    // le résultat sert d'opérande au calcul suivant
    m.diviser();
    m.ajouter_nombre("4").unwrap();
    m.egal();
    assert_eq!(m.expression(), "5");
}

#[test]
fn egal_sur_echec_conserve_l_expression() {
    let mut m = moteur_avec("5");
    m.additionner();
    m.egal();
    assert_eq!(m.expression(), "5+");
    assert_eq!(m.valeur(), None);
}

/* ------------------------ Idempotence des accesseurs ------------------------ */

#[test]
fn accesseurs_idempotents() {
    let mut m = moteur_avec("3");
    m.multiplier();
    m.ajouter_nombre("7").unwrap();
    m.evaluer();

    assert_eq!(m.expression(), m.expression());
    assert_eq!(m.valeur(), m.valeur());
    assert_eq!(m.jetons(), m.jetons());
}

/* ------------------------ Dispatch par commandes ------------------------ */

#[test]
fn table_de_commandes_complete() {
    let mut m = Moteur::new();
    let touches = [
        Commande::Parenthese,
        Commande::Chiffre('2'),
        Commande::Operateur(Op::Moins),
        Commande::Chiffre('7'),
        Commande::Parenthese,
        Commande::Operateur(Op::Fois),
        Commande::Chiffre('5'),
        Commande::Evaluer,
    ];
    for t in touches {
        m.appliquer(t).unwrap();
    }
    assert_eq!(m.expression(), "(2-7)x5");
    assert_eq!(m.valeur(), Some(-25.0));

    m.appliquer(Commande::Egal).unwrap();
    assert_eq!(m.expression(), "-25");

    m.appliquer(Commande::Retirer).unwrap();
    assert_eq!(m.expression(), "-2");

    m.appliquer(Commande::Effacer).unwrap();
    assert_eq!(m.expression(), "");
    assert_eq!(m.valeur(), None);
}
