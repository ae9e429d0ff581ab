//! Syntax tree definition.
//!
//! A chain such as `1 + 1 + ... + 1` folds into a left-deep tree as deep as
//! the chain is long, so traversals in this module avoid recursion.

use std::{fmt, mem};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Integer(i64),
    Binary {
        lhs: Box<Expr>,
        op: BinOp,
        rhs: Box<Expr>,
    },
}

impl Expr {
    pub fn binary(lhs: Expr, op: BinOp, rhs: Expr) -> Self {
        Self::Binary {
            lhs: Box::new(lhs),
            op,
            rhs: Box::new(rhs),
        }
    }
}

impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = vec![];
        take_subtrees(self, &mut pending);
        while let Some(mut expr) = pending.pop() {
            take_subtrees(&mut expr, &mut pending);
        }
    }
}

/// Moves non-leaf children of `expr` into `pending`, leaving leaves behind.
fn take_subtrees(expr: &mut Expr, pending: &mut Vec<Expr>) {
    if let Expr::Binary { lhs, rhs, .. } = expr {
        for child in [lhs, rhs] {
            if matches!(**child, Expr::Binary { .. }) {
                pending.push(mem::replace(&mut **child, Expr::Integer(0)));
            }
        }
    }
}

/// Renders the tree in prefix notation, e.g. `(+ 1 (* 2 3))`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        enum Item<'a> {
            Expr(&'a Expr),
            Text(&'static str),
        }

        let mut stack = vec![Item::Expr(self)];
        while let Some(item) = stack.pop() {
            match item {
                Item::Text(text) => f.write_str(text)?,
                Item::Expr(Expr::Integer(n)) => write!(f, "{}", n)?,
                Item::Expr(Expr::Binary { lhs, op, rhs }) => {
                    write!(f, "({} ", op)?;
                    stack.push(Item::Text(")"));
                    stack.push(Item::Expr(rhs));
                    stack.push(Item::Text(" "));
                    stack.push(Item::Expr(lhs));
                }
            }
        }
        Ok(())
    }
}
