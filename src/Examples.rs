//! examples of usage of RustedAlgebra
/// polynomials, division, roots, LCM and fractions
pub mod algebra_examples;
