//! A single literal raised to a real exponent, the leaf of the algebra engine.
//! The literal is the identity of the variable (it never changes once built), the exponent
//! is free to move while monomials multiply and divide.
use crate::algebra::algebra_error::{AlgebraError, Result};
use crate::algebra::parse_expr::parse_variable;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    literal: char,
    exponent: f64,
}

impl Variable {
    /// builds `literal^exponent`; the literal must be alphabetic and the exponent finite
    pub fn new(literal: char, exponent: f64) -> Result<Self> {
        if !literal.is_alphabetic() || !exponent.is_finite() {
            return Err(AlgebraError::InvalidVariableFormat(format!(
                "{}^{}",
                literal, exponent
            )));
        }
        Ok(Self { literal, exponent })
    }

    pub fn from_literal(literal: char) -> Result<Self> {
        Self::new(literal, 1.0)
    }

    /// "x", "x^3", "y^-2", "z^(0.5)"
    pub fn parse(input: &str) -> Result<Self> {
        parse_variable(input)
    }

    pub fn literal(&self) -> char {
        self.literal
    }

    pub fn exponent(&self) -> f64 {
        self.exponent
    }

    pub fn set_exponent(&mut self, exponent: f64) {
        self.exponent = exponent;
    }

    pub fn literal_to_string(&self) -> String {
        self.literal.to_string()
    }

    /// same literal, whatever the exponents are
    pub fn same_literal(&self, other: &Variable) -> bool {
        self.literal == other.literal
    }

    // chunk of a monomial signature: literal followed by the exponent, f.i. "x2" or "y-0.5"
    pub(crate) fn signature(&self) -> String {
        format!("{}{}", self.literal, self.exponent)
    }
}

impl FromStr for Variable {
    type Err = AlgebraError;

    fn from_str(s: &str) -> Result<Self> {
        Variable::parse(s)
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.exponent == 1.0 {
            write!(f, "{}", self.literal)
        } else {
            write!(f, "{}^{}", self.literal, self.exponent)
        }
    }
}
