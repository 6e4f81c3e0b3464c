// src/noyau/expr.rs
//
// Arbre d’expression (flottants double précision).
// - Lit      : littéral numérique
// - Const    : pi / e
// - Binaire  : + - * / % ^
// - Fonction : fonction unaire de la table (angle-mode appliqué à l’évaluation)
//
// Construit à neuf à chaque évaluation, jamais conservé entre deux appels.
// Le moins unaire est représenté par 0 - x (voir rpn.rs).

use std::fmt;

use super::erreur::ErreurCalcul;
use super::fonctions::{Constante, Fonction, ModeAngle};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpBinaire {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
}

impl OpBinaire {
    pub fn symbole(self) -> char {
        match self {
            OpBinaire::Add => '+',
            OpBinaire::Sub => '-',
            OpBinaire::Mul => '*',
            OpBinaire::Div => '/',
            OpBinaire::Mod => '%',
            OpBinaire::Pow => '^',
        }
    }

    /// Applique l’opérateur. Division et modulo par zéro => erreur de domaine.
    pub fn appliquer(self, a: f64, b: f64) -> Result<f64, ErreurCalcul> {
        match self {
            OpBinaire::Add => Ok(a + b),
            OpBinaire::Sub => Ok(a - b),
            OpBinaire::Mul => Ok(a * b),
            OpBinaire::Div | OpBinaire::Mod if b == 0.0 => Err(ErreurCalcul::DivisionParZero),
            OpBinaire::Div => Ok(a / b),
            // modulo "plancher" : le signe suit le diviseur
            OpBinaire::Mod => Ok(a - b * (a / b).floor()),
            OpBinaire::Pow => Ok(a.powf(b)),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Lit(f64),
    Const(Constante),
    Binaire(OpBinaire, Box<Expr>, Box<Expr>),
    Fonction(Fonction, Box<Expr>),
}

impl Expr {
    /// Réduit l’arbre à un nombre. Tout résultat non fini est une erreur de domaine.
    pub fn reduire(&self, mode: ModeAngle) -> Result<f64, ErreurCalcul> {
        let v = match self {
            Expr::Lit(v) => *v,
            Expr::Const(k) => k.valeur(),
            Expr::Fonction(f, x) => f.appliquer(x.reduire(mode)?, mode)?,
            Expr::Binaire(op, a, b) => op.appliquer(a.reduire(mode)?, b.reduire(mode)?)?,
        };

        if v.is_finite() {
            Ok(v)
        } else {
            Err(ErreurCalcul::NonFini)
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Lit(v) => write!(f, "{v}"),
            Expr::Const(k) => f.write_str(k.nom()),
            Expr::Fonction(fo, x) => write!(f, "{}({x})", fo.nom()),
            Expr::Binaire(op, a, b) => write!(f, "({a}{}{b})", op.symbole()),
        }
    }
}
