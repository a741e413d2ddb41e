//! # Polynomial
//!
//! Sum-of-monomials canonical form: a constant term plus a map `signature -> Monomial`.
//!
//! ## Canonical form
//! Every monomial enters the map through `insert_or_accumulate`:
//! - a monomial without variables is folded into the constant term
//! - a monomial whose signature is already stored is summed into it, and the entry is removed
//!   if the sum is 0
//! - otherwise it becomes a new entry (zero monomials are never stored)
//!
//! so after any operation no two entries share a signature and no entry has coefficient 0.
//! Equality is structural on that canonical form.
//!
//! ## Long division
//! `div_rem` returns `(quotient, remainder)`. At each step the leading term of the remainder
//! (highest grade, ties broken by total degree then by signature) is divided by the leading term
//! of the divisor; the step stops once the remainder's leading term has a lower grade than the
//! divisor or is no longer divisible by the divisor's leading term. `/` and `%` are thin views
//! over that pair.
use crate::algebra::algebra_error::{AlgebraError, Result};
use crate::algebra::monomial::Monomial;
use crate::algebra::parse_expr::parse_polynomial;
use crate::algebra::polynomial_roots::{DEFAULT_LITERAL, PolynomialRoots};
use crate::algebra::polynomic_equation::PolynomicEquation;
use itertools::Itertools;
use log::{debug, warn};
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Rem, Sub, SubAssign};

// safety net for multivariate dividends, univariate division ends long before
const MAX_DIVISION_STEPS: usize = 10_000;

#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    coefficient: f64,
    monomials: BTreeMap<String, Monomial>,
}

impl Default for Polynomial {
    fn default() -> Self {
        Self::zero()
    }
}

impl Polynomial {
    pub fn zero() -> Self {
        Self::constant(0.0)
    }

    pub fn constant(coefficient: f64) -> Self {
        Self {
            coefficient,
            monomials: BTreeMap::new(),
        }
    }

    pub fn from_monomial(monomial: Monomial) -> Self {
        Self::from_monomials(0.0, [monomial])
    }

    pub fn from_monomials<I>(coefficient: f64, monomials: I) -> Self
    where
        I: IntoIterator<Item = Monomial>,
    {
        let mut polynomial = Self::constant(coefficient);
        for monomial in monomials {
            polynomial.insert_or_accumulate(monomial);
        }
        polynomial
    }

    /// "3x^2+5x-2", "x^2y-xy^2+4"
    pub fn parse(input: &str) -> Result<Self> {
        parse_polynomial(input)
    }

    /// the degree-0 term
    pub fn constant_term(&self) -> f64 {
        self.coefficient
    }

    /// stored monomials in signature order (the constant term is not among them)
    pub fn monomials(&self) -> impl Iterator<Item = &Monomial> {
        self.monomials.values()
    }

    pub fn monomial(&self, signature: &str) -> Option<&Monomial> {
        self.monomials.get(signature)
    }

    pub fn number_of_monomials(&self) -> usize {
        self.monomials.len()
    }

    pub fn is_constant(&self) -> bool {
        self.monomials.is_empty()
    }

    pub fn is_zero(&self) -> bool {
        self.coefficient == 0.0 && self.monomials.values().all(Monomial::is_zero)
    }

    /// the literals present in any monomial, sorted
    pub fn distinct_variables(&self) -> Vec<char> {
        self.monomials
            .values()
            .flat_map(|m| m.variables().map(|v| v.literal()))
            .collect::<BTreeSet<char>>()
            .into_iter()
            .collect()
    }

    /// maximum grade over the stored monomials; a constant polynomial has grade 0
    pub fn grade(&self) -> f64 {
        self.monomials
            .values()
            .map(Monomial::grade)
            .fold(None, |acc: Option<f64>, g| Some(acc.map_or(g, |a| a.max(g))))
            .unwrap_or(0.0)
    }

    /// highest-grade stored monomial, `None` for a constant polynomial
    pub fn leading_monomial(&self) -> Option<&Monomial> {
        self.monomials.values().max_by(|a, b| leading_order(a, b))
    }

    // leading monomial, or the constant term as a monomial when there is none
    fn leading_term(&self) -> Option<Monomial> {
        match self.leading_monomial() {
            Some(monomial) => Some(monomial.clone()),
            None if self.coefficient != 0.0 => Some(Monomial::constant(self.coefficient)),
            None => None,
        }
    }

    fn insert_or_accumulate(&mut self, monomial: Monomial) {
        if monomial.is_constant() {
            self.coefficient += monomial.coefficient();
            return;
        }
        let key = monomial.signature();
        if let Some(stored) = self.monomials.get_mut(&key) {
            let sum = stored.coefficient() + monomial.coefficient();
            if sum == 0.0 {
                self.monomials.remove(&key);
            } else {
                stored.set_coefficient(sum);
            }
        } else if !monomial.is_zero() {
            self.monomials.insert(key, monomial);
        }
    }

    // removes a term that is known to be cancelled, whatever rounding left in it
    fn drop_term(&mut self, term: &Monomial) {
        if term.is_constant() {
            self.coefficient = 0.0;
        } else {
            self.monomials.remove(&term.signature());
        }
    }

    //___________________________________ADDITION____________________________________

    pub fn add_scalar(&self, scalar: f64) -> Polynomial {
        let mut result = self.clone();
        result.coefficient += scalar;
        result
    }

    pub fn add_monomial(&self, monomial: &Monomial) -> Polynomial {
        let mut result = self.clone();
        result.insert_or_accumulate(monomial.clone());
        result
    }

    pub fn sub_monomial(&self, monomial: &Monomial) -> Polynomial {
        let mut result = self.clone();
        result.insert_or_accumulate(-monomial);
        result
    }

    fn plus(&self, other: &Polynomial) -> Polynomial {
        let mut result = self.clone();
        result.coefficient += other.coefficient;
        for monomial in other.monomials.values() {
            result.insert_or_accumulate(monomial.clone());
        }
        result
    }

    fn minus(&self, other: &Polynomial) -> Polynomial {
        let mut result = self.clone();
        result.coefficient -= other.coefficient;
        for monomial in other.monomials.values() {
            result.insert_or_accumulate(-monomial);
        }
        result
    }

    //___________________________________MULTIPLICATION____________________________________

    pub fn scale(&self, scalar: f64) -> Polynomial {
        if scalar == 0.0 {
            return Polynomial::zero();
        }
        Polynomial::from_monomials(
            self.coefficient * scalar,
            self.monomials.values().map(|m| m.scale(scalar)),
        )
    }

    /// distributes the monomial over every term; products whose signatures collide are
    /// re-accumulated and products that lose all their variables fall into the constant term
    pub fn mul_monomial(&self, monomial: &Monomial) -> Polynomial {
        if monomial.is_zero() {
            return Polynomial::zero();
        }
        let mut result = Polynomial::zero();
        for term in self.monomials.values() {
            result.insert_or_accumulate(term.multiply(monomial));
        }
        if self.coefficient != 0.0 {
            result.insert_or_accumulate(monomial.scale(self.coefficient));
        }
        result
    }

    fn times(&self, other: &Polynomial) -> Polynomial {
        other
            .monomials
            .values()
            .fold(self.scale(other.coefficient), |acc, monomial| {
                acc.plus(&self.mul_monomial(monomial))
            })
    }

    /// repeated multiplication, `pow(0)` is the constant 1
    pub fn pow(&self, exponent: u32) -> Polynomial {
        (0..exponent).fold(Polynomial::constant(1.0), |acc, _| acc.times(self))
    }

    //___________________________________DIVISION____________________________________

    pub fn divide_scalar(&self, scalar: f64) -> Result<Polynomial> {
        if scalar == 0.0 {
            return Err(AlgebraError::DivisionByZero);
        }
        Ok(self.scale(1.0 / scalar))
    }

    /// every term divided by the monomial; the constant term becomes `c / monomial`
    pub fn divide_monomial(&self, monomial: &Monomial) -> Result<Polynomial> {
        if monomial.is_zero() {
            return Err(AlgebraError::DivisionByZero);
        }
        let mut result = Polynomial::zero();
        for term in self.monomials.values() {
            result.insert_or_accumulate(term.divide(monomial)?);
        }
        if self.coefficient != 0.0 {
            result.insert_or_accumulate(Monomial::constant(self.coefficient).divide(monomial)?);
        }
        Ok(result)
    }

    /// polynomial long division, returns `(quotient, remainder)` with
    /// `quotient * divisor + remainder == self`
    pub fn div_rem(&self, divisor: &Polynomial) -> Result<(Polynomial, Polynomial)> {
        let divisor_lead = divisor
            .leading_term()
            .ok_or(AlgebraError::DivisionByZero)?;
        let divisor_grade = divisor.grade();
        let mut quotient = Polynomial::zero();
        let mut remainder = self.clone();
        let mut steps = 0;
        while let Some(lead) = remainder.leading_term() {
            if lead.grade() < divisor_grade || !lead.is_divisible_by(&divisor_lead) {
                break;
            }
            if steps == MAX_DIVISION_STEPS {
                warn!(
                    "long division of {} by {} stopped after {} steps",
                    self, divisor, steps
                );
                break;
            }
            let term = lead.divide(&divisor_lead)?;
            let product = divisor.mul_monomial(&term);
            remainder = remainder.minus(&product);
            remainder.drop_term(&lead);
            debug!(
                "division step {}: quotient term {}, remainder {}",
                steps, term, remainder
            );
            quotient.insert_or_accumulate(term);
            steps += 1;
        }
        Ok((quotient, remainder))
    }

    pub fn quotient(&self, divisor: &Polynomial) -> Result<Polynomial> {
        self.div_rem(divisor).map(|(quotient, _)| quotient)
    }

    pub fn remainder(&self, divisor: &Polynomial) -> Result<Polynomial> {
        self.div_rem(divisor).map(|(_, remainder)| remainder)
    }

    //___________________________________ROOTS____________________________________

    /// roots of `self = 0` as a factored form. Only grades 0, 1 and 2 have a closed form;
    /// non-real roots are an error.
    ///
    /// Equal solutions are merged into one root whose multiplicity counts them, so the double
    /// root of `x^2-2x+1` comes back as `(x-1)^2` rather than `(x-1)`. Inserting every solution
    /// with multiplicity 1 would lose it under the overwrite policy of
    /// [`PolynomialRoots::insert_root`], and expanding the result would no longer give back
    /// the polynomial (up to its leading coefficient).
    pub fn get_roots_polynomial(&self) -> Result<PolynomialRoots> {
        let equation = PolynomicEquation::new(self.clone());
        let solutions = equation.solve()?;
        if solutions.iter().any(|s| !s.is_finite()) {
            return Err(AlgebraError::UnsupportedEquation(format!(
                "{} has no real roots",
                equation
            )));
        }
        let mut roots = PolynomialRoots::new();
        for solution in solutions {
            let seen = roots.multiplicity(solution).unwrap_or(0);
            roots.insert_root(solution, seen + 1);
        }
        Ok(roots)
    }

    /// compares with the expanded form of the roots, over this polynomial's variable
    pub fn equals_roots(&self, roots: &PolynomialRoots) -> bool {
        roots
            .get_explicit_polynomial(self.main_literal())
            .is_ok_and(|explicit| &explicit == self)
    }

    /// adds the expanded factored form, over this polynomial's variable
    pub fn add_roots(&self, roots: &PolynomialRoots) -> Result<Polynomial> {
        Ok(self.plus(&roots.get_explicit_polynomial(self.main_literal())?))
    }

    // first literal of the polynomial, the default one for a constant
    fn main_literal(&self) -> char {
        self.distinct_variables()
            .first()
            .copied()
            .unwrap_or(DEFAULT_LITERAL)
    }

    //___________________________________COLLECTIONS____________________________________

    pub fn add_all<'a, I>(&self, others: I) -> Polynomial
    where
        I: IntoIterator<Item = &'a Polynomial>,
    {
        others
            .into_iter()
            .fold(self.clone(), |acc, other| acc.plus(other))
    }

    pub fn sub_all<'a, I>(&self, others: I) -> Polynomial
    where
        I: IntoIterator<Item = &'a Polynomial>,
    {
        others
            .into_iter()
            .fold(self.clone(), |acc, other| acc.minus(other))
    }

    pub fn mul_all<'a, I>(&self, others: I) -> Polynomial
    where
        I: IntoIterator<Item = &'a Polynomial>,
    {
        others
            .into_iter()
            .fold(self.clone(), |acc, other| acc.times(other))
    }

    /// successive quotients, remainders are dropped at every step
    pub fn div_all<'a, I>(&self, divisors: I) -> Result<Polynomial>
    where
        I: IntoIterator<Item = &'a Polynomial>,
    {
        divisors
            .into_iter()
            .try_fold(self.clone(), |acc, divisor| acc.quotient(divisor))
    }
}

// grade first, then total degree, then the alphabetically first signature wins
fn leading_order(a: &Monomial, b: &Monomial) -> Ordering {
    a.grade()
        .total_cmp(&b.grade())
        .then(a.total_degree().total_cmp(&b.total_degree()))
        .then_with(|| b.signature().cmp(&a.signature()))
}

//////////////////////////////////OPERATORS/////////////////////////////////
impl Add<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: &Polynomial) -> Polynomial {
        self.plus(rhs)
    }
}

impl Add for Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: Polynomial) -> Polynomial {
        self.plus(&rhs)
    }
}

impl Sub<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: &Polynomial) -> Polynomial {
        self.minus(rhs)
    }
}

impl Sub for Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: Polynomial) -> Polynomial {
        self.minus(&rhs)
    }
}

impl Mul<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: &Polynomial) -> Polynomial {
        self.times(rhs)
    }
}

impl Mul for Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: Polynomial) -> Polynomial {
        self.times(&rhs)
    }
}

impl Mul<&Monomial> for &Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: &Monomial) -> Polynomial {
        self.mul_monomial(rhs)
    }
}

/// the factored form is expanded over the polynomial's variable
impl Add<&PolynomialRoots> for &Polynomial {
    type Output = Result<Polynomial>;

    fn add(self, rhs: &PolynomialRoots) -> Result<Polynomial> {
        self.add_roots(rhs)
    }
}

impl<'a> Sum<&'a Polynomial> for Polynomial {
    fn sum<I: Iterator<Item = &'a Polynomial>>(iter: I) -> Polynomial {
        Polynomial::zero().add_all(iter)
    }
}

impl<'a> Product<&'a Polynomial> for Polynomial {
    fn product<I: Iterator<Item = &'a Polynomial>>(iter: I) -> Polynomial {
        Polynomial::constant(1.0).mul_all(iter)
    }
}

/// quotient of the long division
impl Div<&Polynomial> for &Polynomial {
    type Output = Result<Polynomial>;

    fn div(self, rhs: &Polynomial) -> Result<Polynomial> {
        self.quotient(rhs)
    }
}

/// remainder of the long division
impl Rem<&Polynomial> for &Polynomial {
    type Output = Result<Polynomial>;

    fn rem(self, rhs: &Polynomial) -> Result<Polynomial> {
        self.remainder(rhs)
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        self.scale(-1.0)
    }
}

impl Neg for Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        -&self
    }
}

impl AddAssign<&Polynomial> for Polynomial {
    fn add_assign(&mut self, rhs: &Polynomial) {
        *self = self.plus(rhs);
    }
}

impl SubAssign<&Polynomial> for Polynomial {
    fn sub_assign(&mut self, rhs: &Polynomial) {
        *self = self.minus(rhs);
    }
}

impl MulAssign<&Polynomial> for Polynomial {
    fn mul_assign(&mut self, rhs: &Polynomial) {
        *self = self.times(rhs);
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut terms: Vec<String> = self
            .monomials
            .values()
            .sorted_by(|a, b| leading_order(b, a))
            .map(|m| m.to_string())
            .collect();
        if self.coefficient != 0.0 || terms.is_empty() {
            terms.push(self.coefficient.to_string());
        }
        write!(f, "{}", terms.join("+").replace("+-", "-"))
    }
}
