// src/noyau/lineaire.rs
//
// Forme linéaire : Jeton -> texte arithmétique plat.
// Sert à la fois d’affichage secondaire et d’entrée de l’évaluateur.
//
//   Nombre négatif (résultat repris) => (-5), chiffres collés compris : (-53)
//     une seule valeur, jamais un moins unaire devant la suite
//   Fraction  => (num)/(den)
//   Racine    => sqrt(rad)
//   Puissance => pow(base,exp)
//   Emplacement => rien

use super::modele::Jeton;

pub fn lineaire(jetons: &[Jeton]) -> String {
    let mut out = String::new();
    ecrire(&mut out, jetons);
    out
}

fn ecrire(out: &mut String, jetons: &[Jeton]) {
    let mut i = 0;
    while i < jetons.len() {
        let j = &jetons[i];
        i += 1;

        match j {
            Jeton::Nombre(s) if s.starts_with('-') => {
                out.push('(');
                out.push_str(s);
                while let Some(Jeton::Nombre(suite)) = jetons.get(i) {
                    out.push_str(suite);
                    i += 1;
                }
                out.push(')');
            }
            Jeton::Nombre(s) => out.push_str(s),
            Jeton::Operateur(op) => out.push_str(op.ascii()),
            Jeton::Fonction(f) => out.push_str(f.texte()),
            Jeton::Parenthese(p) => out.push_str(p.texte()),

            Jeton::Fraction {
                numerateur,
                denominateur,
            } => {
                out.push('(');
                ecrire(out, numerateur);
                out.push_str(")/(");
                ecrire(out, denominateur);
                out.push(')');
            }

            Jeton::Racine { radicande } => {
                out.push_str("sqrt(");
                ecrire(out, radicande);
                out.push(')');
            }

            Jeton::Puissance { base, exposant } => {
                out.push_str("pow(");
                ecrire(out, base);
                out.push(',');
                ecrire(out, exposant);
                out.push(')');
            }

            Jeton::Emplacement => {}
        }
    }
}
