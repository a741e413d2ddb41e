//! # Monomial
//!
//! A coefficient times a product of distinct variables, f.i. `3x^2y^-1`.
//!
//! Variables are kept in a `BTreeMap` keyed by literal, so the map order is the alphabetical
//! order of the literals and the *signature* built from it (`"x2y-1"`) does not depend on the
//! order in which the variables were supplied. Two monomials with equal signatures are like terms.
//!
//! Invariant: at most one entry per literal, and no entry with exponent 0.
use crate::algebra::algebra_error::{AlgebraError, Result};
use crate::algebra::parse_expr::parse_monomial;
use crate::algebra::variable::Variable;
use itertools::Itertools;
use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Mul, MulAssign, Neg};

#[derive(Debug, Clone, PartialEq)]
pub struct Monomial {
    coefficient: f64,
    variables: BTreeMap<char, Variable>,
}

impl Monomial {
    /// fails with `DuplicateVariable` if two variables share a literal; zero exponents are dropped
    pub fn new(coefficient: f64, variables: Vec<Variable>) -> Result<Self> {
        let mut map = BTreeMap::new();
        for variable in variables {
            let literal = variable.literal();
            if map.insert(literal, variable).is_some() {
                return Err(AlgebraError::DuplicateVariable(literal));
            }
        }
        map.retain(|_, v: &mut Variable| v.exponent() != 0.0);
        Ok(Self {
            coefficient,
            variables: map,
        })
    }

    pub fn constant(coefficient: f64) -> Self {
        Self {
            coefficient,
            variables: BTreeMap::new(),
        }
    }

    /// coefficient 1, no variables
    pub fn unit() -> Self {
        Self::constant(1.0)
    }

    /// `1 * literal^1`
    pub fn from_literal(literal: char) -> Result<Self> {
        Ok(Self::from_variable(1.0, Variable::from_literal(literal)?))
    }

    pub fn from_variable(coefficient: f64, variable: Variable) -> Self {
        let mut variables = BTreeMap::new();
        if variable.exponent() != 0.0 {
            variables.insert(variable.literal(), variable);
        }
        Self {
            coefficient,
            variables,
        }
    }

    /// "3x^2y", "-z^-1", "0.5"
    pub fn parse(input: &str) -> Result<Self> {
        parse_monomial(input)
    }

    pub fn coefficient(&self) -> f64 {
        self.coefficient
    }

    pub fn set_coefficient(&mut self, coefficient: f64) {
        self.coefficient = coefficient;
    }

    /// variables in literal order
    pub fn variables(&self) -> impl Iterator<Item = &Variable> {
        self.variables.values()
    }

    pub fn variable(&self, literal: char) -> Option<&Variable> {
        self.variables.get(&literal)
    }

    pub fn number_of_variables(&self) -> usize {
        self.variables.len()
    }

    pub fn is_constant(&self) -> bool {
        self.variables.is_empty()
    }

    pub fn is_zero(&self) -> bool {
        self.coefficient == 0.0
    }

    /// canonical like-term key, f.i. `"x2y1"`; empty for a constant
    pub fn signature(&self) -> String {
        self.variables.values().map(|v| v.signature()).collect()
    }

    /// true if a variable with the same literal is present, whatever its exponent
    pub fn contains_variable(&self, variable: &Variable) -> bool {
        self.variables.contains_key(&variable.literal())
    }

    /// true if every literal of `other` is also a literal of this monomial
    pub fn is_multiple(&self, other: &Monomial) -> bool {
        other
            .variables
            .keys()
            .all(|literal| self.variables.contains_key(literal))
    }

    /// same literals with the same exponents
    pub fn has_same_variables(&self, other: &Monomial) -> bool {
        self.variables == other.variables
    }

    /// true if `self / other` leaves no negative exponent behind
    pub fn is_divisible_by(&self, other: &Monomial) -> bool {
        other.variables.values().all(|v| {
            self.variables
                .get(&v.literal())
                .is_some_and(|own| own.exponent() >= v.exponent())
        })
    }

    /// maximum exponent among the variables, 0 for a constant
    pub fn grade(&self) -> f64 {
        self.variables
            .values()
            .map(|v| v.exponent())
            .fold(None, |acc: Option<f64>, e| Some(acc.map_or(e, |a| a.max(e))))
            .unwrap_or(0.0)
    }

    /// sum of the exponents
    pub fn total_degree(&self) -> f64 {
        self.variables.values().map(|v| v.exponent()).sum()
    }

    //___________________________________ARITHMETIC____________________________________

    /// coefficients multiply, exponents of common literals add; a literal whose exponent
    /// cancels to 0 disappears
    pub fn multiply(&self, other: &Monomial) -> Monomial {
        let mut result = self.clone();
        result.coefficient *= other.coefficient;
        for variable in other.variables.values() {
            result.multiply_variable(variable);
        }
        result
    }

    /// coefficients divide, exponents of `other` are subtracted; literals absent from `self`
    /// come in with a negated exponent
    pub fn divide(&self, other: &Monomial) -> Result<Monomial> {
        if other.is_zero() {
            return Err(AlgebraError::DivisionByZero);
        }
        let mut result = self.clone();
        result.coefficient /= other.coefficient;
        for variable in other.variables.values() {
            let literal = variable.literal();
            let exponent = result
                .variables
                .get(&literal)
                .map_or(0.0, |v| v.exponent())
                - variable.exponent();
            result.put_exponent(variable, exponent);
        }
        Ok(result)
    }

    /// only defined for like terms
    pub fn try_add(&self, other: &Monomial) -> Result<Monomial> {
        self.check_compatible(other)?;
        let mut result = self.clone();
        result.coefficient += other.coefficient;
        Ok(result)
    }

    pub fn try_sub(&self, other: &Monomial) -> Result<Monomial> {
        self.check_compatible(other)?;
        let mut result = self.clone();
        result.coefficient -= other.coefficient;
        Ok(result)
    }

    fn check_compatible(&self, other: &Monomial) -> Result<()> {
        if self.has_same_variables(other) {
            Ok(())
        } else {
            Err(AlgebraError::IncompatibleTerms {
                left: self.to_string(),
                right: other.to_string(),
            })
        }
    }

    pub fn scale(&self, scalar: f64) -> Monomial {
        let mut result = self.clone();
        result.coefficient *= scalar;
        result
    }

    pub fn divide_scalar(&self, scalar: f64) -> Result<Monomial> {
        if scalar == 0.0 {
            return Err(AlgebraError::DivisionByZero);
        }
        let mut result = self.clone();
        result.coefficient /= scalar;
        Ok(result)
    }

    /// repeated multiplication; `pow(0)` is the unit monomial
    pub fn pow(&self, exponent: u32) -> Monomial {
        (0..exponent).fold(Monomial::unit(), |acc, _| acc.multiply(self))
    }

    /// `1 / self`. The result is a monomial object with negative exponents,
    /// it does not fit the mathematical notion of a monomial any more
    pub fn inverse(&self) -> Result<Monomial> {
        Monomial::unit().divide(self)
    }

    /// in place multiplication by `1 * variable`
    pub fn multiply_variable(&mut self, variable: &Variable) {
        let exponent = self
            .variables
            .get(&variable.literal())
            .map_or(0.0, |v| v.exponent())
            + variable.exponent();
        self.put_exponent(variable, exponent);
    }

    /// in place division by `1 * variable`; a literal not present is left alone
    pub fn divide_variable(&mut self, variable: &Variable) {
        if let Some(own) = self.variables.get(&variable.literal()) {
            let exponent = own.exponent() - variable.exponent();
            self.put_exponent(variable, exponent);
        }
    }

    fn put_exponent(&mut self, like: &Variable, exponent: f64) {
        if exponent == 0.0 {
            self.variables.remove(&like.literal());
        } else {
            let mut variable = like.clone();
            variable.set_exponent(exponent);
            self.variables.insert(variable.literal(), variable);
        }
    }
}

impl Mul<&Monomial> for &Monomial {
    type Output = Monomial;

    fn mul(self, rhs: &Monomial) -> Monomial {
        self.multiply(rhs)
    }
}

impl Mul for Monomial {
    type Output = Monomial;

    fn mul(self, rhs: Monomial) -> Monomial {
        self.multiply(&rhs)
    }
}

impl MulAssign<&Monomial> for Monomial {
    fn mul_assign(&mut self, rhs: &Monomial) {
        *self = self.multiply(rhs);
    }
}

impl Neg for &Monomial {
    type Output = Monomial;

    fn neg(self) -> Monomial {
        self.scale(-1.0)
    }
}

impl Neg for Monomial {
    type Output = Monomial;

    fn neg(self) -> Monomial {
        -&self
    }
}

impl fmt::Display for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.variables.is_empty() {
            return write!(f, "{}", self.coefficient);
        }
        let variables = self.variables.values().join("");
        if self.coefficient == 1.0 {
            write!(f, "{}", variables)
        } else if self.coefficient == -1.0 {
            write!(f, "-{}", variables)
        } else {
            write!(f, "{}{}", self.coefficient, variables)
        }
    }
}
