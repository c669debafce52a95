use thiserror::Error;

use crate::config::MAX_EXPRESSION_LEN;
use crate::token::Operator;

/// Coarse failure class, one per stage that can reject an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Syntax,
    Structural,
    Domain,
    Numeric,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SyntaxError {
    #[error("expression is {0} characters long, the limit is {limit}", limit = MAX_EXPRESSION_LEN)]
    TooLong(usize),
    #[error("unknown identifier '{0}'")]
    UnknownIdentifier(String),
    #[error("illegal character '{0}'")]
    IllegalCharacter(char),
    #[error("empty expression")]
    Empty,
    #[error("expression cannot start with '{0}'")]
    BadStart(char),
    #[error("expression cannot end with '{0}'")]
    BadEnd(char),
    #[error("too many closing brackets")]
    ExcessClosingBracket,
    #[error("misplaced operator '{0}'")]
    MisplacedOperator(char),
    #[error("cannot calculate error, NaN or inf")]
    ErrorToken(char),
    #[error("unrecognized character '{0}'")]
    Unrecognized(char),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StructuralError {
    #[error("not enough operands for operator {0}")]
    MissingOperand(Operator),
    #[error("bracket left open")]
    UnclosedBracket,
    #[error("{0} operands left after evaluation")]
    LeftoverOperands(usize),
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("tangent is undefined here")]
    TanPole,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("{reason}")]
    Syntax {
        reason: SyntaxError,
        /// Byte offset into the raw input, for checks that run before normalization.
        pos: Option<usize>,
    },
    #[error("{0}")]
    Structural(StructuralError),
    #[error("{0}")]
    Domain(DomainError),
    #[error("result is not a finite number ({0})")]
    NonFinite(f64),
}

impl CalcError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CalcError::Syntax { .. } => ErrorKind::Syntax,
            CalcError::Structural(_) => ErrorKind::Structural,
            CalcError::Domain(_) => ErrorKind::Domain,
            CalcError::NonFinite(_) => ErrorKind::Numeric,
        }
    }

    pub fn position(&self) -> Option<usize> {
        match self {
            CalcError::Syntax { pos, .. } => *pos,
            _ => None,
        }
    }

    pub(crate) fn syntax(reason: SyntaxError) -> Self {
        CalcError::Syntax { reason, pos: None }
    }

    pub(crate) fn syntax_at(reason: SyntaxError, pos: usize) -> Self {
        CalcError::Syntax {
            reason,
            pos: Some(pos),
        }
    }
}

impl From<StructuralError> for CalcError {
    fn from(err: StructuralError) -> Self {
        CalcError::Structural(err)
    }
}

impl From<DomainError> for CalcError {
    fn from(err: DomainError) -> Self {
        CalcError::Domain(err)
    }
}
