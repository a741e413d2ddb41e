//! Factored form of a univariate polynomial: `(x - r1)^m1 (x - r2)^m2 ...` stored as
//! `root -> multiplicity` pairs. Inserting a root that is already present overwrites its
//! multiplicity, it does not add to it.
//!
//! Roots are identified up to [`ROOT_TOLERANCE`]: lookup, insertion and equality all treat two
//! values within that distance (absolute or relative) as the same root, so roots recovered from
//! an expanded product match the ones it was built from.
use crate::algebra::algebra_error::Result;
use crate::algebra::monomial::Monomial;
use crate::algebra::parse_expr::parse_roots;
use crate::algebra::polynomial::Polynomial;
use crate::algebra::polynomic_equation::PolynomicEquation;
use approx::relative_eq;
use log::debug;
use std::fmt;

/// literal used when a factored form is expanded and nothing says otherwise
pub const DEFAULT_LITERAL: char = 'x';

pub const ROOT_TOLERANCE: f64 = 1e-9;

/// true if `a` and `b` denote the same root up to [`ROOT_TOLERANCE`]
pub fn same_root(a: f64, b: f64) -> bool {
    relative_eq!(a, b, epsilon = ROOT_TOLERANCE, max_relative = ROOT_TOLERANCE)
}

#[derive(Debug, Clone, Default)]
pub struct PolynomialRoots {
    roots: Vec<(f64, u32)>,
}

impl PolynomialRoots {
    pub fn new() -> Self {
        Self { roots: Vec::new() }
    }

    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (f64, u32)>,
    {
        let mut roots = Self::new();
        for (root, multiplicity) in pairs {
            roots.insert_root(root, multiplicity);
        }
        roots
    }

    /// "(x-1)(x+2)^3", "(x)^2(x-0.5)"
    pub fn parse(input: &str) -> Result<Self> {
        parse_roots(input)
    }

    /// overwrites the multiplicity of an existing root (the stored value is kept);
    /// multiplicity 0 removes the root
    pub fn insert_root(&mut self, root: f64, multiplicity: u32) {
        let position = self.roots.iter().position(|(r, _)| same_root(*r, root));
        match (position, multiplicity) {
            (Some(i), 0) => {
                self.roots.remove(i);
            }
            (Some(i), m) => self.roots[i].1 = m,
            (None, 0) => {}
            (None, m) => self.roots.push((root, m)),
        }
    }

    pub fn multiplicity(&self, root: f64) -> Option<u32> {
        self.roots
            .iter()
            .find(|(r, _)| same_root(*r, root))
            .map(|(_, m)| *m)
    }

    /// `(root, multiplicity)` pairs in insertion order
    pub fn roots(&self) -> impl Iterator<Item = (f64, u32)> + '_ {
        self.roots.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// sum of the multiplicities
    pub fn degree(&self) -> u32 {
        self.roots.iter().map(|(_, m)| m).sum()
    }

    /// expands the product over `literal`; the empty product is the constant 1
    pub fn get_explicit_polynomial(&self, literal: char) -> Result<Polynomial> {
        let variable = Monomial::from_literal(literal)?;
        let mut explicit = Polynomial::constant(1.0);
        for (root, multiplicity) in &self.roots {
            let factor = Polynomial::from_monomials(-root, [variable.clone()]);
            explicit *= &factor.pow(*multiplicity);
        }
        debug!("{} expanded to {}", self, explicit);
        Ok(explicit)
    }

    /// true if the expanded polynomial, as an equation, has a closed-form solution
    pub fn has_root(&self) -> bool {
        PolynomicEquation::from_roots(self).is_ok_and(|equation| equation.has_solution())
    }

    /// compares with the factored form of the polynomial
    pub fn equals_polynomial(&self, polynomial: &Polynomial) -> bool {
        polynomial
            .get_roots_polynomial()
            .is_ok_and(|roots| &roots == self)
    }
}

/// order-insensitive, roots matched up to [`ROOT_TOLERANCE`]
impl PartialEq for PolynomialRoots {
    fn eq(&self, other: &Self) -> bool {
        self.roots.len() == other.roots.len()
            && self
                .roots
                .iter()
                .all(|(root, m)| other.multiplicity(*root) == Some(*m))
    }
}

impl fmt::Display for PolynomialRoots {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.roots.is_empty() {
            return write!(f, "1");
        }
        for (root, multiplicity) in &self.roots {
            if *root > 0.0 {
                write!(f, "({}-{})", DEFAULT_LITERAL, root)?;
            } else if *root < 0.0 {
                write!(f, "({}+{})", DEFAULT_LITERAL, -root)?;
            } else {
                write!(f, "({})", DEFAULT_LITERAL)?;
            }
            if *multiplicity != 1 {
                write!(f, "^{}", multiplicity)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_root_overwrites_multiplicity() {
        let mut roots = PolynomialRoots::new();
        roots.insert_root(2.0, 1);
        roots.insert_root(2.0, 3);
        assert_eq!(roots.len(), 1);
        assert_eq!(roots.multiplicity(2.0), Some(3));
        roots.insert_root(2.0, 0);
        assert!(roots.is_empty());
    }

    #[test]
    fn test_near_equal_roots_are_one_root() {
        let mut roots = PolynomialRoots::new();
        roots.insert_root(0.1, 1);
        roots.insert_root(0.09999999999999998, 2);
        assert_eq!(roots.len(), 1);
        assert_eq!(roots.multiplicity(0.1), Some(2));
        assert_eq!(roots.multiplicity(0.30000000000000004), None);
        roots.insert_root(0.1 + 1e-12, 0);
        assert!(roots.is_empty());
        assert!(same_root(0.0, -1e-12));
        assert!(!same_root(0.1, 0.1001));
    }

    #[test]
    fn test_fractional_roots_survive_expansion() {
        let roots = PolynomialRoots::from_pairs([(0.1, 1), (0.7, 1)]);
        let explicit = roots.get_explicit_polynomial(DEFAULT_LITERAL).unwrap();
        assert_eq!(explicit.get_roots_polynomial().unwrap(), roots);
        assert!(roots.equals_polynomial(&explicit));
        let roots = PolynomialRoots::from_pairs([(0.3, 1), (-0.6, 1)]);
        let explicit = roots.get_explicit_polynomial(DEFAULT_LITERAL).unwrap();
        assert_eq!(explicit.get_roots_polynomial().unwrap(), roots);
    }

    #[test]
    fn test_explicit_polynomial() {
        let roots = PolynomialRoots::from_pairs([(1.0, 2), (-3.0, 1)]);
        // (x-1)^2 (x+3) = x^3 + x^2 - 5x + 3
        let explicit = roots.get_explicit_polynomial('x').unwrap();
        assert_eq!(explicit, Polynomial::parse("x^3+x^2-5x+3").unwrap());
        assert_eq!(roots.degree(), 3);
    }

    #[test]
    fn test_explicit_polynomial_other_literal() {
        let roots = PolynomialRoots::from_pairs([(2.0, 1)]);
        assert_eq!(
            roots.get_explicit_polynomial('t').unwrap(),
            Polynomial::parse("t-2").unwrap()
        );
        assert!(roots.get_explicit_polynomial('1').is_err());
    }

    #[test]
    fn test_empty_roots_expand_to_one() {
        let roots = PolynomialRoots::new();
        assert_eq!(
            roots.get_explicit_polynomial(DEFAULT_LITERAL).unwrap(),
            Polynomial::constant(1.0)
        );
        assert!(!roots.has_root());
    }

    #[test]
    fn test_equality_ignores_order() {
        let a = PolynomialRoots::from_pairs([(1.0, 2), (3.0, 1)]);
        let b = PolynomialRoots::from_pairs([(3.0, 1), (1.0, 2)]);
        let c = PolynomialRoots::from_pairs([(3.0, 2), (1.0, 2)]);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, PolynomialRoots::from_pairs([(1.0, 2)]));
    }

    #[test]
    fn test_has_root_follows_solvability() {
        assert!(PolynomialRoots::from_pairs([(4.0, 1)]).has_root());
        assert!(PolynomialRoots::from_pairs([(1.0, 1), (2.0, 1)]).has_root());
        // grade 3, no closed form
        assert!(!PolynomialRoots::from_pairs([(1.0, 3)]).has_root());
    }

    #[test]
    fn test_equals_polynomial() {
        let roots = PolynomialRoots::from_pairs([(1.0, 1), (-1.0, 1)]);
        assert!(roots.equals_polynomial(&Polynomial::parse("x^2-1").unwrap()));
        assert!(!roots.equals_polynomial(&Polynomial::parse("x^2-4").unwrap()));
    }

    #[test]
    fn test_parse_and_display() {
        let roots = PolynomialRoots::parse("(x-1)(x+2)^3(x)").unwrap();
        assert_eq!(roots.multiplicity(1.0), Some(1));
        assert_eq!(roots.multiplicity(-2.0), Some(3));
        assert_eq!(roots.multiplicity(0.0), Some(1));
        assert_eq!(roots.to_string(), "(x-1)(x+2)^3(x)");
    }
}
