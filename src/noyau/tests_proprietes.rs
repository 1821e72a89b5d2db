//! Tests de propriétés : éditeur, rendus, évaluation, machine d’état.
//!
//! Chaque bloc vise un contrat précis du noyau :
//! - curseur toujours dans [0, len], insertion/effacement inverses
//! - rendus purs, forme linéaire fidèle
//! - fraction / racine / puissance évaluées
//! - erreurs contenues (jamais de panique au-delà de l’évaluateur)
//! - "=" remplace la séquence par le résultat

use super::calculatrice::{Calculatrice, Ecran, Touche, AFFICHAGE_VIDE};
use super::edition::Editeur;
use super::erreur::{ErreurCalcul, AFFICHAGE_ERREUR};
use super::eval::{
    evaluer, evaluer_avec_demarche, evaluer_lineaire, substituer_fonctions, Demarche,
};
use super::format::format_resultat;
use super::jetons::{tokenize, Tok};
use super::lineaire::lineaire;
use super::mise::{mise_en_page, mise_en_page_avec_curseur, rendu_html, Mise};
use super::modele::{Fonction, Jeton, Operateur, Parenthese, SYMBOLE_EMPLACEMENT};

fn n(s: &str) -> Jeton {
    Jeton::Nombre(s.to_string())
}

fn op(o: Operateur) -> Jeton {
    Jeton::Operateur(o)
}

fn taper(calc: &mut Calculatrice, touches: &[&str]) {
    for cle in touches {
        assert!(calc.appuyer(cle), "touche refusée: {cle:?}");
    }
}

fn calcul(touches: &[&str]) -> Calculatrice {
    let mut calc = Calculatrice::new();
    taper(&mut calc, touches);
    calc
}

fn assert_resultat(touches: &[&str], attendu: &str) {
    let calc = calcul(touches);
    assert_eq!(
        calc.ecran(),
        &Ecran::Resultat(attendu.to_string()),
        "touches={touches:?} démarche={:?}",
        calc.demarche()
    );
}

fn assert_erreur(touches: &[&str]) {
    let calc = calcul(touches);
    assert_eq!(calc.ecran(), &Ecran::Erreur, "touches={touches:?}");
    assert_eq!(calc.affichage().principal, AFFICHAGE_ERREUR);
}

/* ------------------------ Éditeur ------------------------ */

#[test]
fn editeur_insertion_avance_le_curseur() {
    let mut ed = Editeur::default();
    assert!(ed.is_empty());
    assert_eq!(ed.curseur(), 0);

    ed.inserer(n("1"));
    ed.inserer(op(Operateur::Plus));
    ed.inserer(n("2"));

    assert_eq!(ed.len(), 3);
    assert_eq!(ed.curseur(), 3);
    assert_eq!(ed.jetons(), &[n("1"), op(Operateur::Plus), n("2")]);
}

#[test]
fn editeur_effacer_en_tete_sans_effet() {
    let mut ed = Editeur::default();
    assert_eq!(ed.effacer_avant_curseur(), None);
    assert_eq!(ed.curseur(), 0);

    ed.inserer(n("7"));
    assert!(ed.curseur_gauche());
    assert_eq!(ed.effacer_avant_curseur(), None);
    assert_eq!(ed.jetons(), &[n("7")]);
}

#[test]
fn editeur_insertion_puis_effacement_inverse() {
    // pour chaque position p, insérer T puis DEL restaure la séquence et le curseur
    let base = vec![n("1"), op(Operateur::Fois), n("2"), op(Operateur::Moins), n("3")];
    let t = Jeton::fraction(vec![n("4")], vec![n("5")]);

    for p in 0..=base.len() {
        let mut ed = Editeur::default();
        for j in &base {
            ed.inserer(j.clone());
        }
        while ed.curseur() > p {
            ed.curseur_gauche();
        }
        let avant = ed.clone();

        ed.inserer(t.clone());
        assert_eq!(ed.curseur(), p + 1);
        assert_eq!(ed.effacer_avant_curseur(), Some(t.clone()));

        assert_eq!(ed, avant, "p={p}");
        assert_eq!(ed.curseur(), p);
    }
}

#[test]
fn editeur_composite_efface_en_bloc() {
    let mut ed = Editeur::default();
    ed.inserer(n("2"));
    ed.inserer(Jeton::racine(vec![n("9"), op(Operateur::Plus), n("7")]));

    ed.effacer_avant_curseur();
    assert_eq!(ed.jetons(), &[n("2")]);
    assert_eq!(ed.curseur(), 1);
}

#[test]
fn editeur_curseur_borne_par_les_fleches() {
    let mut ed = Editeur::default();
    assert!(!ed.curseur_droite());
    ed.inserer(n("1"));
    ed.inserer(n("2"));
    assert!(!ed.curseur_droite());
    assert!(ed.curseur_gauche());
    assert!(ed.curseur_gauche());
    assert!(!ed.curseur_gauche());
    assert_eq!(ed.curseur(), 0);
    assert!(ed.curseur_droite());
    assert_eq!(ed.curseur(), 1);
}

#[test]
fn editeur_reinitialiser_et_remplacer() {
    let mut ed = Editeur::default();
    ed.inserer(n("1"));
    ed.inserer(n("2"));

    ed.remplacer_par_nombre("8");
    assert_eq!(ed.jetons(), &[n("8")]);
    assert_eq!(ed.curseur(), 1);

    ed.reinitialiser();
    assert!(ed.is_empty());
    assert_eq!(ed.curseur(), 0);
}

/* ------------------------ Mise en page ------------------------ */

#[test]
fn mise_textes_adjacents_fusionnes() {
    let seq = vec![n("1"), n("2"), op(Operateur::Fois), Jeton::Fonction(Fonction::Sin)];
    assert_eq!(mise_en_page(&seq), vec![Mise::Texte("12×sin(".to_string())]);
}

#[test]
fn mise_composites_recursifs() {
    let seq = vec![
        n("1"),
        op(Operateur::Plus),
        Jeton::fraction(vec![Jeton::racine(vec![n("2")])], vec![n("3")]),
    ];

    assert_eq!(
        mise_en_page(&seq),
        vec![
            Mise::Texte("1+".to_string()),
            Mise::Fraction {
                haut: vec![Mise::Racine(vec![Mise::Texte("2".to_string())])],
                bas: vec![Mise::Texte("3".to_string())],
            },
        ]
    );
}

#[test]
fn mise_puissance_vide_montre_les_cases() {
    let case = Mise::Texte(SYMBOLE_EMPLACEMENT.to_string());
    assert_eq!(
        mise_en_page(&[Jeton::puissance_vide()]),
        vec![Mise::Puissance {
            base: vec![case.clone()],
            exposant: vec![case],
        }]
    );
}

#[test]
fn mise_sequence_vide() {
    assert!(mise_en_page(&[]).is_empty());
    assert_eq!(rendu_html(&[]), "");
    assert_eq!(mise_en_page_avec_curseur(&[], 0), vec![Mise::Curseur]);
}

#[test]
fn mise_curseur_au_premier_niveau() {
    let seq = vec![n("1"), op(Operateur::Plus), n("2")];
    assert_eq!(
        mise_en_page_avec_curseur(&seq, 1),
        vec![
            Mise::Texte("1".to_string()),
            Mise::Curseur,
            Mise::Texte("+2".to_string()),
        ]
    );
}

#[test]
fn mise_rendu_html() {
    let seq = vec![
        Jeton::fraction(vec![n("1")], vec![n("2")]),
        op(Operateur::Plus),
        Jeton::racine(vec![n("9")]),
        Jeton::puissance(vec![n("2")], vec![n("3")]),
    ];
    assert_eq!(
        rendu_html(&mise_en_page(&seq)),
        concat!(
            r#"<span class="frac"><span class="top">1</span><span class="bottom">2</span></span>"#,
            r#"+<span class="sqrt">√<span class="radicand">9</span></span>"#,
            r#"<span class="power">2<sup>3</sup></span>"#,
        )
    );
}

/* ------------------------ Forme linéaire ------------------------ */

#[test]
fn lineaire_plat_fidele() {
    let seq = vec![
        n("1"),
        n("2"),
        op(Operateur::Fois),
        n("3"),
        op(Operateur::Divise),
        n("4"),
        op(Operateur::Moins),
        n("5"),
        op(Operateur::Plus),
        n("."),
        n("5"),
        op(Operateur::Puissance),
        n("2"),
    ];
    assert_eq!(lineaire(&seq), "12*3/4-5+.5^2");
}

#[test]
fn lineaire_composites() {
    assert_eq!(lineaire(&[Jeton::fraction(vec![n("1")], vec![n("2")])]), "(1)/(2)");
    assert_eq!(lineaire(&[Jeton::racine(vec![n("9")])]), "sqrt(9)");
    assert_eq!(lineaire(&[Jeton::puissance(vec![n("2")], vec![n("3")])]), "pow(2,3)");
    assert_eq!(lineaire(&[Jeton::puissance_vide()]), "pow(,)");
    assert_eq!(
        lineaire(&[
            Jeton::Fonction(Fonction::Log),
            n("1"),
            n("0"),
            Jeton::Parenthese(Parenthese::Fermante),
        ]),
        "log(10)"
    );
}

/* ------------------------ Évaluation ------------------------ */

#[test]
fn eval_fraction_racine_puissance() {
    assert_eq!(evaluer(&[Jeton::fraction(vec![n("1")], vec![n("2")])]), Ok(0.5));
    assert_eq!(evaluer(&[Jeton::racine(vec![n("9")])]), Ok(3.0));
    assert_eq!(
        evaluer(&[Jeton::puissance(vec![n("2")], vec![n("3")])]),
        Ok(8.0)
    );
}

#[test]
fn eval_precedence_et_associativite() {
    assert_eq!(evaluer_lineaire("2+3*4"), Ok(14.0));
    assert_eq!(evaluer_lineaire("(2+3)*4"), Ok(20.0));
    assert_eq!(evaluer_lineaire("8/4/2"), Ok(1.0));
    assert_eq!(evaluer_lineaire("10-4-3"), Ok(3.0));
    assert_eq!(evaluer_lineaire("2^3^2"), Ok(512.0));
    assert_eq!(evaluer_lineaire("-2^2"), Ok(-4.0));
    assert_eq!(evaluer_lineaire("2*-3"), Ok(-6.0));
    assert_eq!(evaluer_lineaire("2^-1"), Ok(0.5));
    assert_eq!(evaluer_lineaire("+5-+2"), Ok(3.0));
    assert_eq!(evaluer_lineaire("-3-2"), Ok(-5.0));
}

#[test]
fn eval_fonctions_hote() {
    assert_eq!(evaluer_lineaire("sin(0)"), Ok(0.0));
    assert_eq!(evaluer_lineaire("cos(0)"), Ok(1.0));
    assert_eq!(evaluer_lineaire("ln(1)"), Ok(0.0));
    assert_eq!(evaluer_lineaire("log(100)"), Ok(2.0));
    assert_eq!(evaluer_lineaire("sqrt(16)+pow(2,10)"), Ok(1028.0));
    assert_eq!(evaluer_lineaire("pow(2,1+2)"), Ok(8.0));
}

#[test]
fn eval_infini_accepte_nan_refuse() {
    assert_eq!(evaluer_lineaire("1/0"), Ok(f64::INFINITY));
    assert_eq!(evaluer_lineaire("-1/0"), Ok(f64::NEG_INFINITY));
    assert_eq!(evaluer_lineaire("log(0)"), Ok(f64::NEG_INFINITY));
    assert_eq!(evaluer_lineaire("0/0"), Err(ErreurCalcul::PasUnNombre));
    assert_eq!(evaluer_lineaire("sqrt(-1)"), Err(ErreurCalcul::PasUnNombre));
}

#[test]
fn eval_erreurs_contenues() {
    assert_eq!(evaluer(&[]), Err(ErreurCalcul::Vide));
    assert_eq!(
        evaluer(&[Jeton::Parenthese(Parenthese::Ouvrante)]),
        Err(ErreurCalcul::ParentheseNonFermee)
    );
    assert_eq!(evaluer_lineaire(")"), Err(ErreurCalcul::ParentheseEnTrop));
    assert_eq!(evaluer_lineaire("sin(1"), Err(ErreurCalcul::ParentheseNonFermee));
    assert_eq!(
        evaluer_lineaire("x+1"),
        Err(ErreurCalcul::FonctionInconnue("x".to_string()))
    );
    assert_eq!(evaluer_lineaire("2#"), Err(ErreurCalcul::Caractere('#')));
    assert_eq!(
        evaluer_lineaire("."),
        Err(ErreurCalcul::NombreInvalide(".".to_string()))
    );

    for texte in ["2+", "*2", "2(3)", "()", "1.2.3", "pow(,)", "pow(2)", "sqrt(1,2)", "(1,2)", "sin"] {
        assert!(
            matches!(evaluer_lineaire(texte), Err(ErreurCalcul::Syntaxe(_))),
            "texte={texte:?} => {:?}",
            evaluer_lineaire(texte)
        );
    }
}

#[test]
fn eval_demarche_remplie() {
    let (res, d) = evaluer_avec_demarche(&[
        Jeton::Fonction(Fonction::Log),
        n("1"),
        n("0"),
        Jeton::Parenthese(Parenthese::Fermante),
    ]);
    assert_eq!(res, Ok(1.0));
    assert_eq!(d.lineaire, "log(10)");
    assert_eq!(d.hote, "log10(10)");
    assert_eq!(d.rpn, "10 log10");
    assert_eq!(d.arbre, "log10(10)");
    assert!(d.note.is_empty());

    let (res, d) = evaluer_avec_demarche(&[n("1"), op(Operateur::Plus)]);
    assert!(res.is_err());
    assert_eq!(d.lineaire, "1+");
    assert!(!d.note.is_empty());
}

#[test]
fn substitution_en_un_passage() {
    assert_eq!(substituer_fonctions("log(100)+ln(1)"), "log10(100)+ln(1)");
    assert_eq!(substituer_fonctions("sin(cos(tan(0)))"), "sin(cos(tan(0)))");
    assert_eq!(substituer_fonctions("log(log(10))"), "log10(log10(10))");
    assert_eq!(substituer_fonctions("sqrt(2)"), "sqrt(2)");
}

/* ------------------------ Lecture des littéraux ------------------------ */

#[test]
fn lecture_decimaux() {
    assert_eq!(tokenize("0.1"), Ok(vec![Tok::Num(0.1)]));
    assert_eq!(tokenize(".5"), Ok(vec![Tok::Num(0.5)]));
    assert_eq!(tokenize("5."), Ok(vec![Tok::Num(5.0)]));
    assert_eq!(tokenize("1e+21"), Ok(vec![Tok::Num(1e21)]));
    assert_eq!(tokenize("2.5e-3"), Ok(vec![Tok::Num(0.0025)]));
    assert_eq!(tokenize("Infinity"), Ok(vec![Tok::Num(f64::INFINITY)]));
    assert_eq!(tokenize("1e999"), Ok(vec![Tok::Num(f64::INFINITY)]));
    assert_eq!(tokenize("1e-999"), Ok(vec![Tok::Num(0.0)]));
    assert_eq!(
        tokenize("2e"),
        Ok(vec![Tok::Num(2.0), Tok::Ident("e".to_string())])
    );
}

/* ------------------------ Format ------------------------ */

#[test]
fn format_comme_l_ecran() {
    assert_eq!(format_resultat(8.0), "8");
    assert_eq!(format_resultat(0.5), "0.5");
    assert_eq!(format_resultat(-3.0), "-3");
    assert_eq!(format_resultat(-0.0), "0");
    assert_eq!(format_resultat(0.1 + 0.2), "0.30000000000000004");
    assert_eq!(format_resultat(1e21), "1e+21");
    assert_eq!(format_resultat(1.5e-7), "1.5e-7");
    assert_eq!(format_resultat(123456.789), "123456.789");
    assert_eq!(format_resultat(f64::INFINITY), "Infinity");
    assert_eq!(format_resultat(f64::NEG_INFINITY), "-Infinity");
}

/* ------------------------ Touches + machine d’état ------------------------ */

#[test]
fn touches_reconnues() {
    assert_eq!(Touche::depuis("7"), Some(Touche::Chiffre('7')));
    assert_eq!(Touche::depuis("."), Some(Touche::Chiffre('.')));
    assert_eq!(Touche::depuis("×"), Some(Touche::Operateur(Operateur::Fois)));
    assert_eq!(Touche::depuis("−"), Some(Touche::Operateur(Operateur::Moins)));
    assert_eq!(Touche::depuis("^"), Some(Touche::Operateur(Operateur::Puissance)));
    assert_eq!(Touche::depuis("ln"), Some(Touche::Fonction(Fonction::Ln)));
    assert_eq!(Touche::depuis("√"), Some(Touche::Racine));
    assert_eq!(Touche::depuis("pow"), Some(Touche::Puissance));
    assert_eq!(Touche::depuis("frac"), Some(Touche::Fraction));
    assert_eq!(Touche::depuis("AC"), Some(Touche::ToutEffacer));
    assert_eq!(Touche::depuis("DEL"), Some(Touche::Effacer));
    assert_eq!(Touche::depuis("="), Some(Touche::Egal));
    assert_eq!(Touche::depuis("12"), None);
    assert_eq!(Touche::depuis("SHIFT"), None);
    assert_eq!(Touche::depuis(""), None);
}

#[test]
fn touche_inconnue_ignoree() {
    let mut calc = calcul(&["1", "+"]);
    let avant = calc.editeur().clone();
    assert!(!calc.appuyer("SHIFT"));
    assert_eq!(calc.editeur(), &avant);
    assert_eq!(calc.ecran(), &Ecran::Saisie);
}

#[test]
fn affichage_vide_et_saisie() {
    let calc = Calculatrice::new();
    let a = calc.affichage();
    assert_eq!(a.principal, AFFICHAGE_VIDE);
    assert_eq!(a.secondaire, "");

    let calc = calcul(&["1", "2", "×", "3"]);
    let a = calc.affichage();
    assert_eq!(a.principal, "12×3");
    assert_eq!(a.secondaire, "12*3");

    let calc = calcul(&["frac"]);
    assert!(calc.affichage().principal.contains(r#"class="frac""#));
    assert_eq!(calc.affichage().secondaire, "()/()");
}

#[test]
fn calcul_remplace_la_sequence() {
    let calc = calcul(&["2", "^", "3", "="]);
    assert_eq!(calc.ecran(), &Ecran::Resultat("8".to_string()));
    assert_eq!(calc.editeur().jetons(), &[n("8")]);
    assert_eq!(calc.editeur().curseur(), 1);

    let a = calc.affichage();
    assert_eq!(a.principal, "8");
    assert_eq!(a.secondaire, "");
}

#[test]
fn calcul_resultat_negatif_reste_une_valeur() {
    // -5 repris puis ^2 : (-5)^2, pas -(5^2)
    let mut calc = calcul(&["0", "-", "5", "="]);
    assert_eq!(calc.ecran(), &Ecran::Resultat("-5".to_string()));
    assert_eq!(calc.editeur().jetons(), &[n("-5")]);

    taper(&mut calc, &["^", "2"]);
    assert_eq!(calc.affichage().secondaire, "(-5)^2");
    taper(&mut calc, &["="]);
    assert_eq!(calc.ecran(), &Ecran::Resultat("25".to_string()));

    // chiffres tapés juste après : ils prolongent le nombre
    let mut calc = calcul(&["0", "-", "5", "=", "3", "^", "2"]);
    assert_eq!(calc.lineaire(), "(-53)^2");
    taper(&mut calc, &["="]);
    assert_eq!(calc.ecran(), &Ecran::Resultat("2809".to_string()));

    let mut calc = calcul(&["1", "÷", "0", "×", "-", "1", "="]);
    assert_eq!(calc.ecran(), &Ecran::Resultat("-Infinity".to_string()));
    taper(&mut calc, &["+", "1", "="]);
    assert_eq!(calc.ecran(), &Ecran::Resultat("-Infinity".to_string()));
}

#[test]
fn lineaire_nombre_negatif_entre_parentheses() {
    assert_eq!(lineaire(&[n("-2.5"), op(Operateur::Fois), n("4")]), "(-2.5)*4");
    assert_eq!(lineaire(&[n("-1"), n("2"), op(Operateur::Puissance), n("2")]), "(-12)^2");
    assert_eq!(lineaire(&[n("1"), op(Operateur::Moins), n("2")]), "1-2");
    assert_eq!(evaluer(&[n("-3"), op(Operateur::Puissance), n("2")]), Ok(9.0));
}

#[test]
fn calcul_demarche_suivie_a_la_demande() {
    let calc = calcul(&["2", "^", "3", "="]);
    assert_eq!(calc.demarche(), &Demarche::default());

    let mut calc = Calculatrice::new();
    calc.suivre_demarche(true);
    taper(&mut calc, &["2", "^", "3", "="]);
    assert_eq!(calc.ecran(), &Ecran::Resultat("8".to_string()));
    assert_eq!(calc.demarche().lineaire, "2^3");
    assert_eq!(calc.demarche().rpn, "2 3 ^");

    taper(&mut calc, &["+", "="]);
    assert_eq!(calc.ecran(), &Ecran::Erreur);
    assert!(!calc.demarche().note.is_empty());

    calc.suivre_demarche(false);
    taper(&mut calc, &["1", "="]);
    assert_eq!(calc.ecran(), &Ecran::Resultat("9".to_string()));
    assert_eq!(calc.demarche(), &Demarche::default());
}

#[test]
fn calcul_resultat_sert_d_amorce() {
    let mut calc = calcul(&["1", "÷", "4", "="]);
    assert_eq!(calc.ecran(), &Ecran::Resultat("0.25".to_string()));

    taper(&mut calc, &["×", "4"]);
    assert_eq!(calc.ecran(), &Ecran::Saisie);
    assert_eq!(calc.affichage().secondaire, "0.25*4");

    taper(&mut calc, &["="]);
    assert_eq!(calc.ecran(), &Ecran::Resultat("1".to_string()));
}

#[test]
fn calcul_infini_relu() {
    let mut calc = calcul(&["1", "÷", "0", "="]);
    assert_eq!(calc.ecran(), &Ecran::Resultat("Infinity".to_string()));

    taper(&mut calc, &["-", "1", "="]);
    assert_eq!(calc.ecran(), &Ecran::Resultat("Infinity".to_string()));
}

#[test]
fn calcul_erreur_conserve_la_saisie() {
    assert_erreur(&["="]);
    assert_erreur(&["(", "="]);
    assert_erreur(&["0", "÷", "0", "="]);
    assert_erreur(&["√", "="]);
    assert_erreur(&["pow", "="]);

    let mut calc = calcul(&["1", "+", "="]);
    assert_eq!(calc.ecran(), &Ecran::Erreur);
    assert_eq!(calc.editeur().len(), 2);
    assert_eq!(calc.affichage().secondaire, "");

    // toute touche relance la saisie
    taper(&mut calc, &["2"]);
    assert_eq!(calc.ecran(), &Ecran::Saisie);
    assert_eq!(calc.affichage().secondaire, "1+2");

    taper(&mut calc, &["="]);
    assert_eq!(calc.ecran(), &Ecran::Resultat("3".to_string()));
}

#[test]
fn calcul_fonctions_au_clavier() {
    assert_resultat(&["sin", "0", ")", "="], "0");
    assert_resultat(&["log", "1", "0", "0", ")", "="], "2");
    assert_resultat(&["ln", "1", ")", "+", "2", "="], "2");
    assert_resultat(&["(", "1", "+", "2", ")", "×", "3", "="], "9");
    assert_resultat(&["-", "2", "^", "2", "="], "-4");
    assert_resultat(&[".", "5", "+", ".", "2", "5", "="], "0.75");
}

#[test]
fn calcul_fleches_et_del() {
    let mut calc = calcul(&["1", "2", "LEFT", "3"]);
    assert_eq!(calc.lineaire(), "132");

    taper(&mut calc, &["RIGHT", "DEL"]);
    assert_eq!(calc.lineaire(), "13");

    taper(&mut calc, &["AC"]);
    assert!(calc.editeur().is_empty());
    assert_eq!(calc.affichage().principal, AFFICHAGE_VIDE);

    // DEL après un résultat : le nombre part en entier
    let mut calc = calcul(&["1", "2", "+", "3", "4", "="]);
    assert_eq!(calc.ecran(), &Ecran::Resultat("46".to_string()));
    taper(&mut calc, &["DEL"]);
    assert!(calc.editeur().is_empty());
}
