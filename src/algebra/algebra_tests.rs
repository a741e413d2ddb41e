//! cross-module properties of the algebra types
//___________________________________TESTS____________________________________

#[cfg(test)]
mod tests {
    use crate::algebra::algebra_error::AlgebraError;
    use crate::algebra::algebraic_fraction::AlgebraicFraction;
    use crate::algebra::lcm::{LeastCommonMultiple, RootsLcm};
    use crate::algebra::monomial::Monomial;
    use crate::algebra::polynomial::Polynomial;
    use crate::algebra::polynomial_roots::{DEFAULT_LITERAL, PolynomialRoots};
    use crate::algebra::polynomic_equation::PolynomicEquation;
    use approx::assert_relative_eq;
    use std::collections::BTreeSet;

    fn p(input: &str) -> Polynomial {
        Polynomial::parse(input).unwrap()
    }

    fn sample() -> Vec<Polynomial> {
        ["3x^2+5x-2", "x^2y+3xy-7", "x-3", "4", "x^3-3x^2+3x-1", "z^2+xy-3"]
            .iter()
            .map(|s| p(s))
            .collect()
    }

    #[test]
    fn test_canonical_form_has_unique_nonzero_signatures() {
        let a = p("x^2+3x+5");
        let b = p("x^2-3x+y");
        for poly in [&a + &b, &a - &b, &a * &b, (&a * &b).pow(2)] {
            let signatures: BTreeSet<String> = poly.monomials().map(Monomial::signature).collect();
            assert_eq!(signatures.len(), poly.number_of_monomials());
            for monomial in poly.monomials() {
                assert_eq!(poly.monomial(&monomial.signature()), Some(monomial));
            }
            assert!(poly.monomials().all(|m| m.coefficient() != 0.0));
            assert!(poly.monomials().all(|m| !m.is_constant()));
        }
    }

    #[test]
    fn test_additive_identity_and_inverse() {
        let zero = Polynomial::zero();
        for poly in sample() {
            assert_eq!(&poly + &zero, poly);
            assert!((&poly - &poly).is_zero());
            assert!((&poly + &(-&poly)).is_zero());
        }
    }

    #[test]
    fn test_distributivity() {
        let a = p("x^2+2y");
        let b = p("x-3");
        let c = p("xy+4");
        assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
        assert_eq!(&(&a + &b) * &c, &(&a * &c) + &(&b * &c));
    }

    #[test]
    fn test_multiplication_commutes() {
        let polys = sample();
        for a in &polys {
            for b in &polys {
                assert_eq!(a * b, b * a);
            }
        }
    }

    #[test]
    fn test_division_reconstructs_dividend() {
        let cases = [
            ("x^3-2x^2-4", "x-3"),
            ("4x^3+2x+2", "2x+1"),
            ("x^3-3x^2+3x-1", "x-1"),
            ("x^2+3x+5", "x^2+1"),
            ("5x-2", "x^2"),
            ("x^2y+xy^2", "x+y"),
        ];
        for (a, b) in cases {
            let (a, b) = (p(a), p(b));
            let (q, r) = a.div_rem(&b).unwrap();
            let rebuilt = &(&q * &b) + &r;
            assert_eq!(rebuilt, a, "{} / {}", a, b);
            if !r.is_zero() && b.distinct_variables().len() == 1 {
                assert!(r.grade() < b.grade());
            }
        }
    }

    #[test]
    fn test_operators_match_div_rem() {
        let a = p("x^3-2x^2-4");
        let b = p("x-3");
        assert_eq!((&a / &b).unwrap(), p("x^2+x+3"));
        assert_eq!((&a % &b).unwrap(), Polynomial::constant(5.0));
        assert_eq!(&a / &Polynomial::zero(), Err(AlgebraError::DivisionByZero));
    }

    #[test]
    fn test_roots_round_trip() {
        for input in ["x^2-5x+6", "x^2-4x+4", "2x-4", "x^2-x"] {
            let poly = p(input);
            let roots = poly.get_roots_polynomial().unwrap();
            let leading = poly.leading_monomial().unwrap().coefficient();
            let explicit = roots.get_explicit_polynomial(DEFAULT_LITERAL).unwrap();
            assert_eq!(explicit.scale(leading), poly, "{}", input);
        }
    }

    #[test]
    fn test_fractional_roots_round_trip() {
        let cases = [
            vec![(0.1, 1), (0.7, 1)],
            vec![(0.3, 1), (-0.6, 1)],
            vec![(-1.25, 1), (2.5, 1)],
            vec![(1.0 / 3.0, 1), (2.2, 1)],
            vec![(0.1, 2)],
            vec![(-0.35, 2)],
            vec![(0.45, 1)],
        ];
        for pairs in cases {
            let roots = PolynomialRoots::from_pairs(pairs);
            let explicit = roots.get_explicit_polynomial(DEFAULT_LITERAL).unwrap();
            let back = explicit.get_roots_polynomial().unwrap();
            assert_eq!(back, roots, "{} -> {} -> {}", roots, explicit, back);
            assert!(roots.equals_polynomial(&explicit));
        }
    }

    #[test]
    fn test_decimal_text_round_trip() {
        for input in ["3.5", "x-0.1", "2.25x^2-0.5x+0.125", "x^0.5+1.5"] {
            let poly = p(input);
            assert_eq!(p(&poly.to_string()), poly, "{}", input);
        }
        assert_relative_eq!(p("x-10.25").constant_term(), -10.25);
    }

    #[test]
    fn test_factored_form_round_trip() {
        let roots = PolynomialRoots::from_pairs([(1.0, 2), (-3.0, 1)]);
        let explicit = roots.get_explicit_polynomial(DEFAULT_LITERAL).unwrap();
        assert_eq!(explicit.grade(), 3.0);
        assert_eq!(roots.to_string(), "(x-1)^2(x+3)");
        assert_eq!(PolynomialRoots::parse(&roots.to_string()).unwrap(), roots);
    }

    #[test]
    fn test_lcm_idempotent_and_commutative() {
        let a = p("x^2-3x+2");
        let b = p("x^2-1");
        let lcm = RootsLcm::new();
        let aa = lcm.lcm(&[a.clone(), a.clone()]).unwrap();
        assert_eq!(aa, a.get_roots_polynomial().unwrap());
        assert_eq!(
            lcm.lcm(&[a.clone(), b.clone()]).unwrap(),
            lcm.lcm(&[b, a]).unwrap()
        );
    }

    #[test]
    fn test_solving() {
        let mut solutions = PolynomicEquation::parse("x^2-5x+6=0").unwrap().solve().unwrap();
        solutions.sort_by(f64::total_cmp);
        assert_relative_eq!(solutions[0], 2.0);
        assert_relative_eq!(solutions[1], 3.0);

        let solutions = PolynomicEquation::parse("2x+3").unwrap().solve().unwrap();
        assert_eq!(solutions.len(), 1);
        assert_relative_eq!(solutions[0], -1.5);

        let cubic = PolynomicEquation::parse("x^3-1").unwrap();
        assert_eq!(cubic.solve(), Err(AlgebraError::UnsupportedDegree(3.0)));
        assert!(!cubic.has_solution());
        assert!(cubic.has_no_solution());
    }

    #[test]
    fn test_fraction_denominator_never_zero() {
        let f = AlgebraicFraction::new(p("x+1"), Polynomial::zero());
        assert!(!f.denominator().is_zero());
        let g = AlgebraicFraction::new(p("x"), p("x-1"));
        let product = &f * &g;
        assert!(!product.denominator().is_zero());
        assert!(product.is_zero());
    }

    #[test]
    fn test_fraction_sum_evaluates_correctly() {
        // 1/(x-1) + 2/(x+2) = ((x+2) + 2(x-1)) / ((x-1)(x+2))
        let sum = AlgebraicFraction::parse("(1)/(x-1)")
            .unwrap()
            .try_add(&AlgebraicFraction::parse("(2)/(x+2)").unwrap())
            .unwrap();
        assert_eq!(sum.denominator(), &p("x^2+x-2"));
        assert_eq!(sum.numerator(), &p("3x"));
    }

    #[test]
    fn test_monomial_cancellation() {
        let a = Monomial::parse("2x^2y").unwrap();
        let b = Monomial::parse("x^2y").unwrap();
        let quotient = a.divide(&b).unwrap();
        assert!(quotient.is_constant());
        assert_relative_eq!(quotient.coefficient(), 2.0);
        let product = a.multiply(&b.inverse().unwrap());
        assert_eq!(product, quotient);
    }
}
