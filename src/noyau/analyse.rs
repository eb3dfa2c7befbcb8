// src/noyau/analyse.rs
//
// Descente récursive (grammaire fermée) -> Expr
//
// Grammaire :
//   somme     := produit (('+' | '-') produit)*
//   produit   := facteur (('*' | '/') facteur)*
//   facteur   := '-' facteur | puissance
//   puissance := nombre ('**' facteur)?
//
// Conséquences :
// - * / lient plus fort que + - ; associativité à gauche
// - ** associatif à droite et plus fort qu’un moins unaire à sa gauche :
//   "-2**2" = -(2**2) ; mais l’exposant peut être négatif : "2**-1"
// - pas de plus unaire, pas de parenthèses, pas d’identifiants

use super::erreur::ErreurExpression;
use super::expr::Expr;
use super::jetons::Tok;

/// Garde-fou : profondeur de récursion (ex: "--------…-1" ou "2**2**2**…").
const PROFONDEUR_MAX: usize = 512;

/// Construit l’AST à partir des jetons ; tous les jetons doivent être consommés.
pub fn analyser(jetons: &[Tok]) -> Result<Expr, ErreurExpression> {
    let mut a = Analyseur {
        jetons,
        pos: 0,
        profondeur: 0,
    };

    let e = a.somme()?;
    if a.pos != jetons.len() {
        return Err(ErreurExpression::Syntaxe("jeton en trop"));
    }
    Ok(e)
}

struct Analyseur<'a> {
    jetons: &'a [Tok],
    pos: usize,
    profondeur: usize,
}

impl Analyseur<'_> {
    fn courant(&self) -> Option<&Tok> {
        self.jetons.get(self.pos)
    }

    fn avance(&mut self) {
        self.pos += 1;
    }

    fn somme(&mut self) -> Result<Expr, ErreurExpression> {
        let mut gauche = self.produit()?;

        while let Some(tok) = self.courant() {
            let construire: fn(Box<Expr>, Box<Expr>) -> Expr = match tok {
                Tok::Plus => Expr::Add,
                Tok::Minus => Expr::Sub,
                _ => break,
            };
            self.avance();
            let droite = self.produit()?;
            gauche = construire(Box::new(gauche), Box::new(droite));
        }

        Ok(gauche)
    }

    fn produit(&mut self) -> Result<Expr, ErreurExpression> {
        let mut gauche = self.facteur()?;

        while let Some(tok) = self.courant() {
            let construire: fn(Box<Expr>, Box<Expr>) -> Expr = match tok {
                Tok::Star => Expr::Mul,
                Tok::Slash => Expr::Div,
                _ => break,
            };
            self.avance();
            let droite = self.facteur()?;
            gauche = construire(Box::new(gauche), Box::new(droite));
        }

        Ok(gauche)
    }

    fn facteur(&mut self) -> Result<Expr, ErreurExpression> {
        self.profondeur += 1;
        if self.profondeur > PROFONDEUR_MAX {
            return Err(ErreurExpression::Depassement("expression trop imbriquée"));
        }

        let e = if matches!(self.courant(), Some(Tok::Minus)) {
            self.avance();
            Expr::Neg(Box::new(self.facteur()?))
        } else {
            self.puissance()?
        };

        self.profondeur -= 1;
        Ok(e)
    }

    fn puissance(&mut self) -> Result<Expr, ErreurExpression> {
        let base = self.nombre()?;

        if matches!(self.courant(), Some(Tok::Puissance)) {
            self.avance();
            // exposant = facteur : autorise "2**-1" et l’associativité à droite
            let exposant = self.facteur()?;
            return Ok(Expr::Pow(Box::new(base), Box::new(exposant)));
        }

        Ok(base)
    }

    fn nombre(&mut self) -> Result<Expr, ErreurExpression> {
        match self.courant() {
            Some(Tok::Num(r)) => {
                let e = Expr::Nombre(r.clone());
                self.avance();
                Ok(e)
            }
            Some(Tok::Plus) => Err(ErreurExpression::Syntaxe("plus unaire non admis")),
            Some(_) => Err(ErreurExpression::Syntaxe("opérande attendu")),
            None => Err(ErreurExpression::Syntaxe("expression incomplète")),
        }
    }
}
