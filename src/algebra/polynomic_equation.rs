//! The equation `content = 0` and its closed-form solutions.
//!
//! | grade | policy |
//! |---|---|
//! | 0 | no solutions |
//! | 1 | `x = -c / a` |
//! | 2 | `x = (-b ± sqrt(b^2 - 4ac)) / 2a`, both values returned even when the discriminant is negative (they are NaN then) |
//! | other | `UnsupportedDegree`, which is not a claim that no real root exists |
//!
//! Equations in more than one variable, or with exponents a polynomial of that grade cannot
//! have (negative or fractional), are `UnsupportedEquation`.
use crate::algebra::algebra_error::{AlgebraError, Result};
use crate::algebra::parse_expr::parse_equation;
use crate::algebra::polynomial::Polynomial;
use crate::algebra::polynomial_roots::{DEFAULT_LITERAL, PolynomialRoots};
use approx::relative_eq;
use log::{debug, info, warn};
use std::fmt;

const DOUBLE_ROOT_TOLERANCE: f64 = 1e-12;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PolynomicEquation {
    content: Polynomial,
}

impl PolynomicEquation {
    pub fn new(content: Polynomial) -> Self {
        Self { content }
    }

    /// equation of the expanded factored form, over the default literal
    pub fn from_roots(roots: &PolynomialRoots) -> Result<Self> {
        Ok(Self::new(roots.get_explicit_polynomial(DEFAULT_LITERAL)?))
    }

    /// "x^2-1", "x^2-1=0" or "x^2=1"
    pub fn parse(input: &str) -> Result<Self> {
        parse_equation(input)
    }

    pub fn content(&self) -> &Polynomial {
        &self.content
    }

    pub fn set_content(&mut self, content: Polynomial) {
        self.content = content;
    }

    pub fn variables(&self) -> Vec<char> {
        self.content.distinct_variables()
    }

    pub fn number_of_distinct_variables(&self) -> usize {
        self.variables().len()
    }

    pub fn solve(&self) -> Result<Vec<f64>> {
        let variables = self.variables();
        if variables.len() > 1 {
            return Err(AlgebraError::UnsupportedEquation(format!(
                "{} has {} variables, only univariate equations are solved",
                self,
                variables.len()
            )));
        }
        let grade = self.content.grade();
        let solutions = if grade == 0.0 {
            Vec::new()
        } else if grade == 1.0 {
            self.solve_linear()?
        } else if grade == 2.0 {
            self.solve_quadratic()?
        } else {
            debug!("no closed form for {} (grade {})", self, grade);
            return Err(AlgebraError::UnsupportedDegree(grade));
        };
        info!("{} solved: {:?}", self, solutions);
        Ok(solutions)
    }

    // mx + n = 0
    fn solve_linear(&self) -> Result<Vec<f64>> {
        let m = self.coefficient_of_grade(1.0)?;
        Ok(vec![-self.content.constant_term() / m])
    }

    // ax^2 + bx + c = 0
    fn solve_quadratic(&self) -> Result<Vec<f64>> {
        let a = self.coefficient_of_grade(2.0)?;
        let b = self.coefficient_of_grade(1.0).unwrap_or(0.0);
        let c = self.content.constant_term();
        let two_a = 2.0 * a;
        // b^2 and 4ac equal up to rounding mean a double root, not a pair of nearby ones
        let discriminant = if relative_eq!(
            b.powi(2),
            4.0 * a * c,
            epsilon = 0.0,
            max_relative = DOUBLE_ROOT_TOLERANCE
        ) {
            0.0
        } else {
            b.powi(2) - 4.0 * a * c
        };
        if discriminant < 0.0 {
            warn!(
                "{} has a negative discriminant {}, solutions are not real",
                self, discriminant
            );
        }
        let sqrt = discriminant.sqrt();
        Ok(vec![(-b + sqrt) / two_a, (-b - sqrt) / two_a])
    }

    // the content must be made only of terms of grade 1 or 2 plus the constant
    fn coefficient_of_grade(&self, grade: f64) -> Result<f64> {
        if let Some(odd) = self
            .content
            .monomials()
            .find(|m| m.grade() != 1.0 && m.grade() != 2.0)
        {
            return Err(AlgebraError::UnsupportedEquation(format!(
                "term {} of {} is not a polynomial term",
                odd, self
            )));
        }
        self.content
            .monomials()
            .find(|m| m.grade() == grade)
            .map(|m| m.coefficient())
            .ok_or_else(|| {
                AlgebraError::UnsupportedEquation(format!("{} has no term of grade {}", self, grade))
            })
    }

    /// solutions without the NaN values of a negative discriminant
    pub fn real_solutions(&self) -> Result<Vec<f64>> {
        Ok(self
            .solve()?
            .into_iter()
            .filter(|s| s.is_finite())
            .collect())
    }

    /// true if `solve` gives at least one value; an unsupported grade counts as no solution
    pub fn has_solution(&self) -> bool {
        match self.solve() {
            Ok(solutions) => !solutions.is_empty(),
            Err(e) => {
                debug!("{}: {}", self, e);
                false
            }
        }
    }

    /// the negation of `has_solution`
    pub fn has_no_solution(&self) -> bool {
        !self.has_solution()
    }
}

impl fmt::Display for PolynomicEquation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}=0", self.content)
    }
}
