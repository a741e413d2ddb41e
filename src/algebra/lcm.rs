//! Least common multiple of polynomials through their factored forms: every input is turned
//! into `PolynomialRoots`, and every root keeps the highest multiplicity seen among the inputs.
//!
//! The service holds no state; components that need it get it passed in.
use crate::algebra::algebra_error::Result;
use crate::algebra::polynomial::Polynomial;
use crate::algebra::polynomial_roots::PolynomialRoots;
use log::debug;

pub trait LeastCommonMultiple {
    /// per-root maximum multiplicity
    fn lcm_of_roots(&self, roots: &[PolynomialRoots]) -> PolynomialRoots;

    /// fails for inputs without a closed-form factorization (grade 3 and above, non-real roots)
    fn lcm(&self, polynomials: &[Polynomial]) -> Result<PolynomialRoots> {
        let roots = polynomials
            .iter()
            .map(Polynomial::get_roots_polynomial)
            .collect::<Result<Vec<_>>>()?;
        Ok(self.lcm_of_roots(&roots))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RootsLcm;

impl RootsLcm {
    pub fn new() -> Self {
        RootsLcm
    }
}

impl LeastCommonMultiple for RootsLcm {
    fn lcm_of_roots(&self, roots: &[PolynomialRoots]) -> PolynomialRoots {
        let mut lcm = PolynomialRoots::new();
        for (root, multiplicity) in roots.iter().flat_map(|r| r.roots()) {
            if lcm
                .multiplicity(root)
                .is_none_or(|seen| multiplicity > seen)
            {
                lcm.insert_root(root, multiplicity);
            }
        }
        debug!("lcm of {} factored forms: {}", roots.len(), lcm);
        lcm
    }
}
