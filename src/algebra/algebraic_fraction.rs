//! # Algebraic fraction
//!
//! A numerator and a denominator polynomial, manipulated without reduction to lowest terms.
//!
//! - a zero denominator never gets in: construction collapses the fraction to `0/1`
//! - add/sub with structurally equal denominators combine the numerators directly, otherwise
//!   the denominators are unified through their least common multiple: with `L = lcm(d1, d2)`
//!   the result is `(n1·(L/d1) ± n2·(L/d2)) / L`
//! - mul/div multiply straight across
//!
//! The LCM goes through the factored form of the denominators, so the cross-denominator path
//! only works for denominators of grade ≤ 2 with real roots and fails otherwise.
use crate::algebra::algebra_error::{AlgebraError, Result};
use crate::algebra::lcm::{LeastCommonMultiple, RootsLcm};
use crate::algebra::parse_expr::parse_fraction;
use crate::algebra::polynomial::Polynomial;
use crate::algebra::polynomial_roots::DEFAULT_LITERAL;
use approx::abs_diff_eq;
use log::{debug, warn};
use std::fmt;
use std::ops::Mul;

// remainders of L / d below this are rounding noise of the root computation
const REMAINDER_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, PartialEq)]
pub struct AlgebraicFraction {
    numerator: Polynomial,
    denominator: Polynomial,
}

impl AlgebraicFraction {
    /// a zero denominator turns the whole fraction into `0/1`
    pub fn new(numerator: Polynomial, denominator: Polynomial) -> Self {
        if denominator.is_zero() {
            warn!(
                "fraction ({})/({}) has a zero denominator, replaced by 0/1",
                numerator, denominator
            );
            return Self::from_scalar(0.0);
        }
        Self {
            numerator,
            denominator,
        }
    }

    pub fn from_scalar(value: f64) -> Self {
        Self::from_polynomial(Polynomial::constant(value))
    }

    /// `polynomial / 1`
    pub fn from_polynomial(numerator: Polynomial) -> Self {
        Self {
            numerator,
            denominator: Polynomial::constant(1.0),
        }
    }

    /// "(x+1)/(x^2-1)"
    pub fn parse(input: &str) -> Result<Self> {
        parse_fraction(input)
    }

    pub fn numerator(&self) -> &Polynomial {
        &self.numerator
    }

    pub fn denominator(&self) -> &Polynomial {
        &self.denominator
    }

    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    /// structural comparison of the canonical forms, not mathematical equivalence
    pub fn has_same_denominator(&self, other: &AlgebraicFraction) -> bool {
        self.denominator == other.denominator
    }

    pub fn try_add(&self, other: &AlgebraicFraction) -> Result<AlgebraicFraction> {
        self.try_add_with(other, &RootsLcm)
    }

    pub fn try_sub(&self, other: &AlgebraicFraction) -> Result<AlgebraicFraction> {
        self.try_sub_with(other, &RootsLcm)
    }

    pub fn try_add_with<L>(&self, other: &AlgebraicFraction, lcm: &L) -> Result<AlgebraicFraction>
    where
        L: LeastCommonMultiple + ?Sized,
    {
        self.combine(other, lcm, |a, b| a + b)
    }

    pub fn try_sub_with<L>(&self, other: &AlgebraicFraction, lcm: &L) -> Result<AlgebraicFraction>
    where
        L: LeastCommonMultiple + ?Sized,
    {
        self.combine(other, lcm, |a, b| a - b)
    }

    fn combine<L, F>(&self, other: &AlgebraicFraction, lcm: &L, op: F) -> Result<AlgebraicFraction>
    where
        L: LeastCommonMultiple + ?Sized,
        F: Fn(&Polynomial, &Polynomial) -> Polynomial,
    {
        if self.has_same_denominator(other) {
            return Ok(Self::new(
                op(&self.numerator, &other.numerator),
                self.denominator.clone(),
            ));
        }
        let (common, left_factor, right_factor) = self.common_denominator(other, lcm)?;
        let numerator = op(
            &(&self.numerator * &left_factor),
            &(&other.numerator * &right_factor),
        );
        Ok(Self::new(numerator, common))
    }

    // L = lcm(d1, d2) together with L/d1 and L/d2
    fn common_denominator<L>(
        &self,
        other: &AlgebraicFraction,
        lcm: &L,
    ) -> Result<(Polynomial, Polynomial, Polynomial)>
    where
        L: LeastCommonMultiple + ?Sized,
    {
        let literal = self
            .denominator
            .distinct_variables()
            .into_iter()
            .chain(other.denominator.distinct_variables())
            .next()
            .unwrap_or(DEFAULT_LITERAL);
        let roots = lcm.lcm(&[self.denominator.clone(), other.denominator.clone()])?;
        let common = roots.get_explicit_polynomial(literal)?;
        debug!(
            "common denominator of ({}) and ({}): {}",
            self.denominator, other.denominator, common
        );
        let left_factor = exact_quotient(&common, &self.denominator)?;
        let right_factor = exact_quotient(&common, &other.denominator)?;
        Ok((common, left_factor, right_factor))
    }

    pub fn try_div(&self, other: &AlgebraicFraction) -> Result<AlgebraicFraction> {
        Ok(self * &other.reciprocal()?)
    }

    /// swaps numerator and denominator, fails on a zero numerator
    pub fn reciprocal(&self) -> Result<AlgebraicFraction> {
        if self.numerator.is_zero() {
            return Err(AlgebraError::DivisionByZero);
        }
        Ok(Self::new(self.denominator.clone(), self.numerator.clone()))
    }

    pub fn try_add_polynomial(&self, polynomial: &Polynomial) -> Result<AlgebraicFraction> {
        self.try_add(&Self::from_polynomial(polynomial.clone()))
    }

    pub fn try_sub_polynomial(&self, polynomial: &Polynomial) -> Result<AlgebraicFraction> {
        self.try_sub(&Self::from_polynomial(polynomial.clone()))
    }

    pub fn mul_polynomial(&self, polynomial: &Polynomial) -> AlgebraicFraction {
        Self::new(&self.numerator * polynomial, self.denominator.clone())
    }

    pub fn try_div_polynomial(&self, polynomial: &Polynomial) -> Result<AlgebraicFraction> {
        self.try_div(&Self::from_polynomial(polynomial.clone()))
    }
}

impl AlgebraicFraction {
    /// left fold of `try_add`, stops at the first failure
    pub fn try_add_all<'a, I>(&self, others: I) -> Result<AlgebraicFraction>
    where
        I: IntoIterator<Item = &'a AlgebraicFraction>,
    {
        others
            .into_iter()
            .try_fold(self.clone(), |acc, other| acc.try_add(other))
    }

    pub fn try_sub_all<'a, I>(&self, others: I) -> Result<AlgebraicFraction>
    where
        I: IntoIterator<Item = &'a AlgebraicFraction>,
    {
        others
            .into_iter()
            .try_fold(self.clone(), |acc, other| acc.try_sub(other))
    }

    pub fn mul_all<'a, I>(&self, others: I) -> AlgebraicFraction
    where
        I: IntoIterator<Item = &'a AlgebraicFraction>,
    {
        others
            .into_iter()
            .fold(self.clone(), |acc, other| &acc * other)
    }

    pub fn try_div_all<'a, I>(&self, others: I) -> Result<AlgebraicFraction>
    where
        I: IntoIterator<Item = &'a AlgebraicFraction>,
    {
        others
            .into_iter()
            .try_fold(self.clone(), |acc, other| acc.try_div(other))
    }
}

// L / d where d is known to divide L; a remainder above the tolerance means it does not
fn exact_quotient(common: &Polynomial, denominator: &Polynomial) -> Result<Polynomial> {
    let (quotient, rest) = common.div_rem(denominator)?;
    let negligible = abs_diff_eq!(rest.constant_term(), 0.0, epsilon = REMAINDER_TOLERANCE)
        && rest
            .monomials()
            .all(|m| abs_diff_eq!(m.coefficient(), 0.0, epsilon = REMAINDER_TOLERANCE));
    if !negligible {
        return Err(AlgebraError::UnsupportedEquation(format!(
            "{} does not divide the common denominator {} (remainder {})",
            denominator, common, rest
        )));
    }
    Ok(quotient)
}

impl Mul<&AlgebraicFraction> for &AlgebraicFraction {
    type Output = AlgebraicFraction;

    fn mul(self, rhs: &AlgebraicFraction) -> AlgebraicFraction {
        AlgebraicFraction::new(
            &self.numerator * &rhs.numerator,
            &self.denominator * &rhs.denominator,
        )
    }
}

impl Mul for AlgebraicFraction {
    type Output = AlgebraicFraction;

    fn mul(self, rhs: AlgebraicFraction) -> AlgebraicFraction {
        &self * &rhs
    }
}

impl fmt::Display for AlgebraicFraction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({})/({})", self.numerator, self.denominator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::polynomial_roots::PolynomialRoots;
    use approx::assert_relative_eq;

    fn p(input: &str) -> Polynomial {
        Polynomial::parse(input).unwrap()
    }

    fn frac(n: &str, d: &str) -> AlgebraicFraction {
        AlgebraicFraction::new(p(n), p(d))
    }

    #[test]
    fn test_zero_denominator_collapses() {
        let f = AlgebraicFraction::new(p("x^2+1"), Polynomial::zero());
        assert_eq!(f, AlgebraicFraction::from_scalar(0.0));
        assert_eq!(f.denominator(), &Polynomial::constant(1.0));
        assert!(f.is_zero());
    }

    #[test]
    fn test_add_same_denominator() {
        let sum = frac("x", "x+1").try_add(&frac("1", "x+1")).unwrap();
        assert_eq!(sum, frac("x+1", "x+1"));
        let diff = frac("x", "x+1").try_sub(&frac("1", "x+1")).unwrap();
        assert_eq!(diff, frac("x-1", "x+1"));
    }

    #[test]
    fn test_add_through_lcm() {
        let sum = frac("1", "x-1").try_add(&frac("1", "x+1")).unwrap();
        assert_eq!(sum.denominator(), &p("x^2-1"));
        assert_eq!(sum.numerator(), &p("2x"));
    }

    #[test]
    fn test_sub_through_lcm() {
        let diff = frac("1", "x-1").try_sub(&frac("1", "x+1")).unwrap();
        assert_eq!(diff, frac("2", "x^2-1"));
    }

    #[test]
    fn test_lcm_keeps_shared_factor_once() {
        // 1/(x^2-1) + 1/(x-1) = (1 + (x+1)) / (x^2-1)
        let sum = frac("1", "x^2-1").try_add(&frac("1", "x-1")).unwrap();
        assert_eq!(sum, frac("x+2", "x^2-1"));
    }

    #[test]
    fn test_lcm_with_leading_coefficient() {
        // 1/(2x-4) + 1/(x-2) = 1.5/(x-2)
        let sum = frac("1", "2x-4").try_add(&frac("1", "x-2")).unwrap();
        assert_eq!(sum, frac("1.5", "x-2"));
    }

    #[test]
    fn test_lcm_with_decimal_double_root() {
        // 1/(x-0.1) + 1/(x-0.1)^2 = (x-0.1+1)/(x-0.1)^2
        let sum = frac("1", "x-0.1").try_add(&frac("1", "x^2-0.2x+0.01")).unwrap();
        assert_eq!(sum.numerator().number_of_monomials(), 1);
        assert_relative_eq!(sum.numerator().monomial("x1").unwrap().coefficient(), 1.0);
        assert_relative_eq!(sum.numerator().constant_term(), 0.9);
        let denominator = sum.denominator();
        assert_eq!(denominator.grade(), 2.0);
        assert_relative_eq!(denominator.monomial("x1").unwrap().coefficient(), -0.2);
        assert_relative_eq!(denominator.constant_term(), 0.01, epsilon = 1e-15);
    }

    #[test]
    fn test_add_polynomial() {
        // 1/(x-1) + 1 = x/(x-1)
        let sum = frac("1", "x-1").try_add_polynomial(&Polynomial::constant(1.0)).unwrap();
        assert_eq!(sum, frac("x", "x-1"));
    }

    #[test]
    fn test_cross_denominator_unsupported_grade() {
        let res = frac("1", "x^3-1").try_add(&frac("1", "x-1"));
        assert_eq!(res, Err(AlgebraError::UnsupportedDegree(3.0)));
        let res = frac("1", "x^2+1").try_add(&frac("1", "x"));
        assert!(matches!(res, Err(AlgebraError::UnsupportedEquation(_))));
    }

    #[test]
    fn test_injected_lcm_service() {
        struct CountingLcm(std::cell::Cell<usize>);
        impl LeastCommonMultiple for CountingLcm {
            fn lcm_of_roots(&self, roots: &[PolynomialRoots]) -> PolynomialRoots {
                self.0.set(self.0.get() + 1);
                RootsLcm.lcm_of_roots(roots)
            }
        }
        let service = CountingLcm(std::cell::Cell::new(0));
        let sum = frac("1", "x").try_add_with(&frac("1", "x+1"), &service).unwrap();
        assert_eq!(service.0.get(), 1);
        assert_eq!(sum, frac("2x+1", "x^2+x"));
        frac("1", "x").try_add_with(&frac("3", "x"), &service).unwrap();
        assert_eq!(service.0.get(), 1);
    }

    #[test]
    fn test_multiply_without_reduction() {
        let product = &frac("x", "x+1") * &frac("x+1", "x");
        assert_eq!(product, frac("x^2+x", "x^2+x"));
        assert_eq!(frac("x", "2").mul_polynomial(&p("x")), frac("x^2", "2"));
    }

    #[test]
    fn test_divide() {
        let q = frac("x", "x+1").try_div(&frac("x", "x-1")).unwrap();
        assert_eq!(q, frac("x^2-x", "x^2+x"));
        assert_eq!(
            frac("x", "x+1").try_div(&AlgebraicFraction::from_scalar(0.0)),
            Err(AlgebraError::DivisionByZero)
        );
        assert_eq!(
            frac("x", "1").try_div_polynomial(&p("x")).unwrap(),
            frac("x", "x")
        );
    }

    #[test]
    fn test_collection_operations() {
        let others = [frac("1", "x+1"), frac("2", "x+1")];
        assert_eq!(
            frac("x", "x+1").try_add_all(&others).unwrap(),
            frac("x+3", "x+1")
        );
        assert_eq!(
            frac("x", "x+1").try_sub_all(&others).unwrap(),
            frac("x-3", "x+1")
        );
        assert_eq!(
            frac("1", "x").try_add_all(&[frac("1", "x-1")]).unwrap(),
            frac("2x-1", "x^2-x")
        );
        assert_eq!(
            frac("x", "1").mul_all(&[frac("x", "2"), frac("1", "x")]),
            frac("x^2", "2x")
        );
        assert_eq!(
            frac("x", "1").try_div_all(&[frac("x", "2"), frac("1", "x")]).unwrap(),
            frac("2x^2", "x")
        );
        assert_eq!(
            frac("x", "1").try_div_all(&[AlgebraicFraction::from_scalar(0.0)]),
            Err(AlgebraError::DivisionByZero)
        );
        assert_eq!(frac("x", "2").try_add_all(&[]).unwrap(), frac("x", "2"));
    }

    #[test]
    fn test_parse_and_display() {
        let f = AlgebraicFraction::parse("(x+1)/(x^2-1)").unwrap();
        assert_eq!(f, frac("x+1", "x^2-1"));
        assert_eq!(f.to_string(), "(x+1)/(x^2-1)");
        assert!(AlgebraicFraction::parse("(x+1)/").is_err());
    }
}
