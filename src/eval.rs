//! Single-pass scanner that tokenizes and evaluates at the same time.
//!
//! Numbers go straight onto the operand stack, operators onto the operator
//! stack, and every reduction runs as soon as precedence allows it. There is no
//! intermediate token list or RPN queue.

use std::f64::consts::PI;

use crate::debug::debug_println;
use crate::error::{CalcError, StructuralError, SyntaxError};
use crate::token::{Operator, Pending, Token};

/// Evaluates a string that already went through `validate::check_input`.
pub fn evaluate_normalized(input: &str) -> Result<f64, CalcError> {
    Evaluator::new(input).run()
}

/// Scratch state for one evaluation. Built fresh per call and consumed by `run`.
pub struct Evaluator<'a> {
    input: &'a str,
    cursor: usize,
    operands: Vec<f64>,
    operators: Vec<Pending>,
}

impl<'a> Evaluator<'a> {
    pub fn new(input: &'a str) -> Self {
        Evaluator {
            input,
            cursor: 0,
            operands: Vec::new(),
            operators: Vec::new(),
        }
    }

    pub fn run(mut self) -> Result<f64, CalcError> {
        debug_println(&format!("Evaluating: {}", self.input));

        while let Some(token) = self.next_token()? {
            debug_println(&format!("Processing token: {:?}", token));
            match token {
                Token::Number(value) => {
                    debug_println(&format!("  Pushed number: {}", value));
                    self.operands.push(value);
                }
                Token::Operator(op) if op.operands() == 2 && op != Operator::Mod => {
                    self.push_binary(op)?;
                }
                // functions and mod wait for their argument, no reduction on the way in
                Token::Operator(op) => self.operators.push(Pending::Operator(op)),
                Token::Open => self.operators.push(Pending::Open),
                Token::Close => self.close_bracket()?,
            }
            debug_println(&format!("  Operands: {:?}", self.operands));
            debug_println(&format!("  Operator stack: {:?}", self.operators));
        }

        while let Some(pending) = self.operators.pop() {
            match pending {
                Pending::Operator(op) => self.reduce(op)?,
                Pending::Open => return Err(StructuralError::UnclosedBracket.into()),
            }
        }

        if self.operands.len() != 1 {
            return Err(StructuralError::LeftoverOperands(self.operands.len()).into());
        }
        let result = self.operands[0];
        debug_println(&format!("Result: {}", result));
        Ok(result)
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.input.as_bytes().get(self.cursor + offset).copied()
    }

    /// Reads one token and moves the cursor past it. `None` at the end of input.
    fn next_token(&mut self) -> Result<Option<Token>, CalcError> {
        let c = match self.peek_at(0) {
            Some(c) => c,
            None => return Ok(None),
        };

        let token = match c {
            b'0'..=b'9' => Token::Number(self.read_number()),
            b'P' => {
                self.cursor += 2;
                Token::Number(PI)
            }
            b's' | b'c' | b't' | b'l' | b'm' | b'a' => Token::Operator(self.read_function(c)?),
            b'(' => {
                self.cursor += 1;
                if self.peek_at(0) == Some(b'+') {
                    self.cursor += 1;
                }
                Token::Open
            }
            b')' => {
                self.cursor += 1;
                Token::Close
            }
            b'+' | b'-' | b'*' | b'/' | b'^' => {
                self.cursor += 1;
                // a sign straight after a binary operator is unary
                if matches!(self.peek_at(0), Some(b'+') | Some(b'-')) {
                    self.cursor += 1;
                }
                match Operator::from_symbol(c as char) {
                    Some(op) => Token::Operator(op),
                    None => return Err(self.unrecognized(c)),
                }
            }
            b'E' | b'n' | b'i' | b'x' => {
                return Err(CalcError::syntax(SyntaxError::ErrorToken(c as char)))
            }
            _ => return Err(self.unrecognized(c)),
        };

        Ok(Some(token))
    }

    fn unrecognized(&self, c: u8) -> CalcError {
        let ch = self
            .input
            .get(self.cursor..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or(c as char);
        CalcError::syntax(SyntaxError::Unrecognized(ch))
    }

    /// Digits with at most one decimal point, surrounded by optional whitespace.
    fn read_number(&mut self) -> f64 {
        let bytes = self.input.as_bytes();
        while self.cursor < bytes.len() && bytes[self.cursor].is_ascii_whitespace() {
            self.cursor += 1;
        }

        let start = self.cursor;
        let mut seen_point = false;
        while self.cursor < bytes.len() {
            match bytes[self.cursor] {
                b'0'..=b'9' => {}
                b'.' if !seen_point => seen_point = true,
                _ => break,
            }
            self.cursor += 1;
        }
        let text = &self.input[start..self.cursor];

        while self.cursor < bytes.len() && bytes[self.cursor].is_ascii_whitespace() {
            self.cursor += 1;
        }

        // f64 parsing saturates to infinity on overflow
        text.parse::<f64>().unwrap_or(0.0)
    }

    /// Resolves the keyword starting at the cursor by its first one or two letters.
    fn read_function(&mut self, c: u8) -> Result<Operator, CalcError> {
        let (op, len) = match (c, self.peek_at(1)) {
            (b's', Some(b'q')) => (Operator::Sqrt, 4),
            (b's', _) => (Operator::Sin, 3),
            (b'c', _) => (Operator::Cos, 3),
            (b't', _) => (Operator::Tan, 3),
            (b'l', Some(b'n')) => (Operator::Ln, 2),
            (b'l', _) => (Operator::Log, 3),
            (b'm', _) => (Operator::Mod, 3),
            (b'a', Some(b's')) => (Operator::Asin, 4),
            (b'a', Some(b'c')) => (Operator::Acos, 4),
            (b'a', _) => (Operator::Atan, 4),
            _ => return Err(self.unrecognized(c)),
        };
        self.cursor += len;
        Ok(op)
    }

    /// Reduces while the operator on top binds at least as tightly, then pushes `op`.
    /// Equal precedence reduces first, so `2^3^2` is `(2^3)^2`.
    fn push_binary(&mut self, op: Operator) -> Result<(), CalcError> {
        while let Some(&Pending::Operator(top)) = self.operators.last() {
            if op.precedence() > top.precedence() {
                break;
            }
            self.operators.pop();
            self.reduce(top)?;
        }
        self.operators.push(Pending::Operator(op));
        Ok(())
    }

    fn close_bracket(&mut self) -> Result<(), CalcError> {
        loop {
            match self.operators.pop() {
                Some(Pending::Open) => return Ok(()),
                Some(Pending::Operator(op)) => self.reduce(op)?,
                None => return Err(CalcError::syntax(SyntaxError::ExcessClosingBracket)),
            }
        }
    }

    /// Pops the operands `op` needs, applies it and pushes the result.
    fn reduce(&mut self, op: Operator) -> Result<(), CalcError> {
        let count = op.operands();
        if self.operands.len() < count {
            return Err(StructuralError::MissingOperand(op).into());
        }
        let args = self.operands.split_off(self.operands.len() - count);
        let result = op.apply(&args)?;
        debug_println(&format!("  Applied {} to {:?}: {}", op, args, result));
        self.operands.push(result);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DomainError, ErrorKind};

    fn eval(input: &str) -> f64 {
        match evaluate_normalized(input) {
            Ok(value) => value,
            Err(err) => panic!("{:?} failed: {}", input, err),
        }
    }

    fn assert_close(input: &str, expected: f64) {
        let got = eval(input);
        assert!(
            (got - expected).abs() < 1e-7,
            "{:?}: expected {}, got {}",
            input,
            expected,
            got
        );
    }

    #[test]
    fn precedence_and_brackets() {
        assert_eq!(eval("2+3*4"), 14.0);
        assert_eq!(eval("(2+3)*4"), 20.0);
        assert_eq!(eval("10-4-3"), 3.0);
        assert_eq!(eval("2*3^2"), 18.0);
        assert_eq!(eval("((1))"), 1.0);
    }

    #[test]
    fn equal_precedence_reduces_left_to_right() {
        assert_eq!(eval("2^3^2"), 64.0);
        assert_eq!(eval("100/10/5"), 2.0);
    }

    #[test]
    fn functions_bind_tighter_than_power() {
        assert_close("sin(0.5)^2+cos(0.5)^2", 1.0);
        assert_close("sqrt(16)*2", 8.0);
        assert_close("ln(10)+log(10)", 3.302585093);
    }

    #[test]
    fn function_names_are_told_apart() {
        assert_close("asin(0.5)", 0.5f64.asin());
        assert_close("acos(0.5)", 0.5f64.acos());
        assert_close("atan(0.5)", 0.5f64.atan());
        assert_close("sqrt(2)", 2f64.sqrt());
        assert_close("ln(2)", 2f64.ln());
        assert_close("log(2)", 2f64.log10());
        assert_close("tan(0.5)", 0.5f64.tan());
    }

    #[test]
    fn mod_is_binary_with_function_precedence() {
        assert_eq!(eval("7mod3"), 1.0);
        assert_eq!(eval("2*5mod3"), 4.0);
        assert_eq!(eval("5mod3+1"), 3.0);
        assert!(eval("5mod0").is_nan());
    }

    #[test]
    fn pi_is_a_constant() {
        assert_close("Pi", PI);
        assert_close("2*Pi", 2.0 * PI);
    }

    #[test]
    fn number_literals() {
        assert_eq!(eval("1.5"), 1.5);
        assert_eq!(eval("2."), 2.0);
        assert_eq!(eval("3 "), 3.0);
        assert_eq!(eval("1 +2"), 3.0);
        assert_eq!(eval(&"9".repeat(400)), f64::INFINITY);
    }

    #[test]
    fn second_decimal_point_is_rejected() {
        let err = evaluate_normalized("1.2.3").unwrap_err();
        assert_eq!(err, CalcError::syntax(SyntaxError::Unrecognized('.')));
    }

    #[test]
    fn opening_bracket_swallows_a_plus() {
        assert_eq!(eval("(+3)*2"), 6.0);
    }

    #[test]
    fn division_by_zero_aborts() {
        assert_eq!(
            evaluate_normalized("1+10/0"),
            Err(CalcError::Domain(DomainError::DivisionByZero))
        );
        assert_eq!(
            evaluate_normalized("10/(1-1)").unwrap_err().kind(),
            ErrorKind::Domain
        );
    }

    #[test]
    fn tan_pole_aborts() {
        assert_eq!(
            evaluate_normalized("tan(Pi/2)"),
            Err(CalcError::Domain(DomainError::TanPole))
        );
        assert_eq!(eval("tan(Pi)"), 0.0);
    }

    #[test]
    fn bad_results_propagate_as_nan() {
        assert!(eval("sqrt(0-1)").is_nan());
        assert!(eval("ln(0-1)").is_nan());
        assert_eq!(eval("log(0)"), f64::NEG_INFINITY);
    }

    #[test]
    fn structural_failures() {
        assert_eq!(
            evaluate_normalized("2sin(0)"),
            Err(CalcError::Structural(StructuralError::LeftoverOperands(2)))
        );
        assert_eq!(
            evaluate_normalized("(1+2"),
            Err(CalcError::Structural(StructuralError::UnclosedBracket))
        );
        assert_eq!(
            evaluate_normalized("*2"),
            Err(CalcError::Structural(StructuralError::MissingOperand(
                Operator::Mul
            )))
        );
        assert_eq!(
            evaluate_normalized("").unwrap_err().kind(),
            ErrorKind::Structural
        );
    }

    #[test]
    fn stray_closing_bracket() {
        assert_eq!(
            evaluate_normalized("1)"),
            Err(CalcError::syntax(SyntaxError::ExcessClosingBracket))
        );
    }

    #[test]
    fn error_tokens_are_refused() {
        for (input, c) in [("Error", 'E'), ("nan", 'n'), ("inf", 'i'), ("2x", 'x')] {
            assert_eq!(
                evaluate_normalized(input),
                Err(CalcError::syntax(SyntaxError::ErrorToken(c))),
                "{}",
                input
            );
        }
        assert_eq!(
            evaluate_normalized("1#2"),
            Err(CalcError::syntax(SyntaxError::Unrecognized('#')))
        );
    }
}
