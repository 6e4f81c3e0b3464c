// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> AST
// Objectif:
// - Convertir une suite de Tok en RPN (postfix)
// - Puis reconstruire Expr
//
// Précédences (basse -> haute):
//   + -  (gauche)  <  * / %  (gauche)  <  moins unaire  <  ^  (droite)
//
// Règles:
// - Moins unaire : '-' quand on n’attend PAS d’opérateur => Tok::Neg (préfixe).
//   -2^2 = -(2^2) ; 2^-1 = 2^(-1) ; --3 = 3.
// - Plus unaire : accepté, sans effet (compte dans la série de signes).
// - Fonction : collée à son argument, soit un groupe "( ... )" (sortie après la
//   parenthèse fermante), soit un atome (nombre / constante) qui la suit directement.

use super::erreur::ErreurCalcul;
use super::expr::{Expr, OpBinaire};
use super::jetons::Tok;

/// Série maximale de signes unaires consécutifs ("--3" ok, "---------3" refusé).
pub const MAX_SIGNES_UNAIRES: usize = 8;

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash | Tok::Percent => 2,
        Tok::Neg => 3,
        Tok::Caret => 4,
        _ => 0,
    }
}

fn is_right_associative(t: &Tok) -> bool {
    matches!(t, Tok::Caret | Tok::Neg)
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Fonc(sin), LPar, Const(pi), Slash, Num(6), RPar]
///   rpn:    [Const(pi), Num(6), Slash, Fonc(sin)]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurCalcul> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    // “valeur” = un atome ou une expression fermée.
    // Sert à détecter le moins unaire et les opérandes manquants.
    let mut prev_was_value = false;
    let mut signes_unaires = 0usize;

    let mut iter = tokens.iter().cloned().peekable();

    while let Some(tok) = iter.next() {
        if !matches!(tok, Tok::Plus | Tok::Minus) || prev_was_value {
            signes_unaires = 0;
        }

        match tok {
            Tok::Num(_) | Tok::Const(_) => {
                if prev_was_value {
                    return Err(ErreurCalcul::OperateurManquant);
                }
                out.push(tok);
                prev_was_value = true;
            }

            Tok::Fonc(f) => {
                if prev_was_value {
                    return Err(ErreurCalcul::OperateurManquant);
                }
                match iter.peek().cloned() {
                    // groupe : la fonction attend sa parenthèse fermante sur la pile
                    Some(Tok::LPar) => {
                        ops.push(Tok::Fonc(f));
                        prev_was_value = false;
                    }
                    // atome : sortie immédiate "x f"
                    Some(atome @ (Tok::Num(_) | Tok::Const(_))) => {
                        iter.next();
                        out.push(atome);
                        out.push(Tok::Fonc(f));
                        prev_was_value = true;
                    }
                    _ => return Err(ErreurCalcul::FonctionSansArgument(f.nom())),
                }
            }

            Tok::LPar => {
                if prev_was_value {
                    return Err(ErreurCalcul::OperateurManquant);
                }
                ops.push(tok);
                prev_was_value = false;
            }

            Tok::RPar => {
                // "()" ou "(2+)" : opérande manquant
                if !prev_was_value {
                    return Err(ErreurCalcul::OperandeManquant);
                }

                // dépile jusqu’à '('
                let mut ouverte = false;
                while let Some(top) = ops.pop() {
                    if matches!(top, Tok::LPar) {
                        ouverte = true;
                        break;
                    }
                    out.push(top);
                }
                if !ouverte {
                    return Err(ErreurCalcul::ParenthesesDesequilibrees);
                }

                // si une fonction est au sommet, elle sort avec son groupe
                if matches!(ops.last(), Some(Tok::Fonc(_))) {
                    if let Some(f) = ops.pop() {
                        out.push(f);
                    }
                }

                prev_was_value = true;
            }

            Tok::Plus | Tok::Minus if !prev_was_value => {
                signes_unaires += 1;
                if signes_unaires > MAX_SIGNES_UNAIRES {
                    return Err(ErreurCalcul::SignesUnairesExcessifs);
                }
                // préfixe : ne dépile rien
                if matches!(tok, Tok::Minus) {
                    ops.push(Tok::Neg);
                }
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Percent | Tok::Caret => {
                // "2 + * 3", "* 3" : opérande gauche manquant
                if !prev_was_value {
                    return Err(ErreurCalcul::OperandeManquant);
                }

                // dépile tant que:
                // - on n'est pas bloqué par '(' ou par une fonction en attente de son groupe
                // - et la précédence/associativité exige de sortir l'opérateur du haut
                while let Some(top) = ops.last() {
                    if matches!(top, Tok::LPar | Tok::Fonc(_)) {
                        break;
                    }

                    let p_top = precedence(top);
                    let p_tok = precedence(&tok);

                    let doit_pop = if is_right_associative(&tok) {
                        p_top > p_tok
                    } else {
                        p_top >= p_tok
                    };

                    if !doit_pop {
                        break;
                    }
                    if let Some(top) = ops.pop() {
                        out.push(top);
                    }
                }

                ops.push(tok);
                prev_was_value = false;
            }

            Tok::Neg => return Err(ErreurCalcul::CaractereInattendu('-')),
        }
    }

    // vide / opérateur final / fonction ou '(' en attente
    if !prev_was_value {
        return Err(ErreurCalcul::OperandeManquant);
    }

    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar | Tok::Fonc(_)) {
            return Err(ErreurCalcul::ParenthesesDesequilibrees);
        }
        out.push(op);
    }

    Ok(out)
}

/// Construit une Expr à partir d’une RPN.
pub fn from_rpn(rpn: &[Tok]) -> Result<Expr, ErreurCalcul> {
    let mut st: Vec<Expr> = Vec::new();

    for tok in rpn.iter().cloned() {
        let e = match tok {
            Tok::Num(v) => Expr::Lit(v),
            Tok::Const(k) => Expr::Const(k),

            Tok::Neg => {
                let x = st.pop().ok_or(ErreurCalcul::OperandeManquant)?;
                Expr::Binaire(OpBinaire::Sub, Box::new(Expr::Lit(0.0)), Box::new(x))
            }

            Tok::Fonc(f) => {
                let x = st.pop().ok_or(ErreurCalcul::FonctionSansArgument(f.nom()))?;
                Expr::Fonction(f, Box::new(x))
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Percent | Tok::Caret => {
                let b = st.pop().ok_or(ErreurCalcul::OperandeManquant)?;
                let a = st.pop().ok_or(ErreurCalcul::OperandeManquant)?;

                let op = match tok {
                    Tok::Plus => OpBinaire::Add,
                    Tok::Minus => OpBinaire::Sub,
                    Tok::Star => OpBinaire::Mul,
                    Tok::Slash => OpBinaire::Div,
                    Tok::Percent => OpBinaire::Mod,
                    _ => OpBinaire::Pow,
                };
                Expr::Binaire(op, Box::new(a), Box::new(b))
            }

            Tok::LPar | Tok::RPar => return Err(ErreurCalcul::ParenthesesDesequilibrees),
        };

        st.push(e);
    }

    match (st.pop(), st.is_empty()) {
        (Some(e), true) => Ok(e),
        (None, _) => Err(ErreurCalcul::OperandeManquant),
        (Some(_), false) => Err(ErreurCalcul::OperateurManquant),
    }
}
