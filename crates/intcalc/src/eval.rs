//! Tree-walking evaluator.

use crate::{
    ast::{BinOp, Expr},
    error::ArithmeticError,
};

/// Computes the value of `expr`.
///
/// The left operand of a binary node is always evaluated before the right
/// one. Division truncates toward zero, and every operation is checked so
/// that overflow is reported instead of wrapping.
pub fn evaluate(expr: &Expr) -> Result<i64, ArithmeticError> {
    let span = tracing::trace_span!("evaluate");
    let _entered = span.enter();

    // post-order walk with explicit stacks; left-deep chains are as deep
    // as they are long.
    enum Work<'a> {
        Eval(&'a Expr),
        Apply(BinOp),
    }

    let mut work = vec![Work::Eval(expr)];
    let mut values: Vec<i64> = vec![];
    while let Some(item) = work.pop() {
        match item {
            Work::Eval(Expr::Integer(n)) => values.push(*n),
            Work::Eval(Expr::Binary { lhs, op, rhs }) => {
                work.push(Work::Apply(*op));
                work.push(Work::Eval(rhs));
                work.push(Work::Eval(lhs));
            }
            Work::Apply(op) => {
                let (Some(rhs), Some(lhs)) = (values.pop(), values.pop()) else {
                    unreachable!("operand stack underflow");
                };
                values.push(apply(op, lhs, rhs)?);
            }
        }
    }
    match values.pop() {
        Some(value) if values.is_empty() => Ok(value),
        _ => unreachable!("unbalanced operand stack"),
    }
}

fn apply(op: BinOp, lhs: i64, rhs: i64) -> Result<i64, ArithmeticError> {
    let res = match op {
        BinOp::Add => lhs.checked_add(rhs),
        BinOp::Sub => lhs.checked_sub(rhs),
        BinOp::Mul => lhs.checked_mul(rhs),
        BinOp::Div => {
            if rhs == 0 {
                return Err(ArithmeticError::DivisionByZero);
            }
            lhs.checked_div(rhs)
        }
    };
    tracing::trace!("{} {} {} = {:?}", lhs, op, rhs, res);
    res.ok_or(ArithmeticError::Overflow)
}
