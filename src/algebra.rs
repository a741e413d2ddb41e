//! # Polynomial algebra
//!
//! Exact (up to `f64`) manipulation of polynomials in one or more variables:
//! - [`variable::Variable`], [`monomial::Monomial`] and the canonical sum-of-monomials
//!   [`polynomial::Polynomial`] with ring arithmetic and long division
//! - [`polynomial_roots::PolynomialRoots`], the factored form of a univariate polynomial
//! - [`polynomic_equation::PolynomicEquation`], closed-form solving of linear and quadratic
//!   equations
//! - [`algebraic_fraction::AlgebraicFraction`], quotients of polynomials whose denominators are
//!   unified through the [`lcm::LeastCommonMultiple`] service
//!
//! # Example
//! ```
//! use RustedAlgebra::algebra::polynomial::Polynomial;
//! use RustedAlgebra::algebra::algebraic_fraction::AlgebraicFraction;
//!
//! let a = Polynomial::parse("x^3-2x^2-4").unwrap();
//! let b = Polynomial::parse("x-3").unwrap();
//! let (q, r) = a.div_rem(&b).unwrap();
//! assert_eq!(q.to_string(), "x^2+x+3");
//! assert_eq!(r.to_string(), "5");
//!
//! let roots = Polynomial::parse("x^2-5x+6").unwrap().get_roots_polynomial().unwrap();
//! assert_eq!(roots.multiplicity(2.0), Some(1));
//!
//! let f = AlgebraicFraction::parse("(1)/(x-1)").unwrap();
//! let g = AlgebraicFraction::parse("(1)/(x+1)").unwrap();
//! println!("{}", f.try_add(&g).unwrap()); // (2x)/(x^2-1)
//! ```
/// error type shared by the whole module
pub mod algebra_error;
/// a literal raised to a real exponent
pub mod variable;
pub mod monomial;
/// canonical polynomial, ring arithmetic, long division, factorization of grade ≤ 2
pub mod polynomial;
pub mod polynomial_roots;
/// linear and quadratic solver
pub mod polynomic_equation;
pub mod algebraic_fraction;
/// least common multiple of polynomials through their roots
pub mod lcm;
/// nom parser behind the `parse` constructors
pub mod parse_expr;
mod algebra_tests;
