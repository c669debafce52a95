use std::fmt;

use crate::config::TAN_EPSILON;
use crate::error::{CalcError, DomainError, StructuralError};

/// Binding strength, weakest first.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy)]
pub enum Precedence {
    Addition,
    Multiplication,
    Exponentiation,
    Function,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    Mod,
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sqrt,
    Ln,
    Log,
}

/// What the scanner reads at one position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Number(f64),
    Operator(Operator),
    Open,
    Close,
}

/// An entry of the operator stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pending {
    Open,
    Operator(Operator),
}

impl Operator {
    pub fn from_symbol(c: char) -> Option<Operator> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            '^' => Some(Operator::Pow),
            _ => None,
        }
    }

    pub fn precedence(self) -> Precedence {
        match self {
            Operator::Add | Operator::Sub => Precedence::Addition,
            Operator::Mul | Operator::Div => Precedence::Multiplication,
            Operator::Pow => Precedence::Exponentiation,
            // mod binds like a function even though it takes two operands
            Operator::Mod
            | Operator::Sin
            | Operator::Cos
            | Operator::Tan
            | Operator::Asin
            | Operator::Acos
            | Operator::Atan
            | Operator::Sqrt
            | Operator::Ln
            | Operator::Log => Precedence::Function,
        }
    }

    pub fn operands(self) -> usize {
        match self {
            Operator::Add
            | Operator::Sub
            | Operator::Mul
            | Operator::Div
            | Operator::Pow
            | Operator::Mod => 2,
            _ => 1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
            Operator::Pow => "^",
            Operator::Mod => "mod",
            Operator::Sin => "sin",
            Operator::Cos => "cos",
            Operator::Tan => "tan",
            Operator::Asin => "asin",
            Operator::Acos => "acos",
            Operator::Atan => "atan",
            Operator::Sqrt => "sqrt",
            Operator::Ln => "ln",
            Operator::Log => "log",
        }
    }

    /// Reduces this operator over `args`, oldest operand first.
    ///
    /// `sqrt`, `ln` and `log` happily return NaN or -inf for bad input; the
    /// formatter rejects that later. Only `/` and `tan` refuse here.
    pub fn apply(self, args: &[f64]) -> Result<f64, CalcError> {
        let result = match (self, args) {
            (Operator::Add, &[left, right]) => left + right,
            (Operator::Sub, &[left, right]) => left - right,
            (Operator::Mul, &[left, right]) => left * right,
            (Operator::Div, &[left, right]) => {
                if right == 0.0 {
                    return Err(DomainError::DivisionByZero.into());
                }
                left / right
            }
            (Operator::Pow, &[left, right]) => left.powf(right),
            // float % is C fmod: sign of the dividend, NaN for a zero divisor
            (Operator::Mod, &[left, right]) => left % right,
            (Operator::Sin, &[x]) => x.sin(),
            (Operator::Cos, &[x]) => x.cos(),
            (Operator::Tan, &[x]) => {
                if x.cos().abs() <= TAN_EPSILON {
                    return Err(DomainError::TanPole.into());
                }
                let t = x.tan();
                if t.abs() <= TAN_EPSILON {
                    0.0
                } else {
                    t
                }
            }
            (Operator::Asin, &[x]) => x.asin(),
            (Operator::Acos, &[x]) => x.acos(),
            (Operator::Atan, &[x]) => x.atan(),
            (Operator::Sqrt, &[x]) => x.sqrt(),
            (Operator::Ln, &[x]) => x.ln(),
            (Operator::Log, &[x]) => x.log10(),
            _ => return Err(StructuralError::MissingOperand(self).into()),
        };
        Ok(result)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
