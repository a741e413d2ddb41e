// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
#![allow(non_snake_case)]

use crate::Utils::config::AlgebraSettings;
use crate::Utils::logger::init_logger;
use crate::algebra::algebra_error::Result;
use crate::algebra::algebraic_fraction::AlgebraicFraction;
use crate::algebra::lcm::{LeastCommonMultiple, RootsLcm};
use crate::algebra::monomial::Monomial;
use crate::algebra::polynomial::Polynomial;
use crate::algebra::polynomial_roots::{DEFAULT_LITERAL, PolynomialRoots};
use crate::algebra::polynomic_equation::PolynomicEquation;

/// walk-through of the algebra module; `example` picks the scenario
pub fn algebra_examples(example: usize) {
    if let Err(e) = run_example(example) {
        println!("example {} failed: {}", example, e);
    }
}

fn run_example(example: usize) -> Result<()> {
    match example {
        0 => {
            // MONOMIALS AND POLYNOMIALS
            let m = Monomial::parse("3x^2y")?;
            let n = Monomial::parse("2xy^-1")?;
            println!("{} * {} = {}", m, n, &m * &n);
            println!("{} / {} = {}", m, n, m.divide(&n)?);
            // like terms are merged, cancelled terms disappear
            let a = Polynomial::parse("3x^2 + 5x - 2 + x^2 - 5x")?;
            let b = Polynomial::parse("x - 1")?;
            println!("a = {}, b = {}", a, b);
            println!("a + b = {}", &a + &b);
            println!("a - b = {}", &a - &b);
            println!("a * b = {}", &a * &b);
            println!("b^3 = {}", b.pow(3));
            println!("variables of a*b: {:?}, grade {}", (&a * &b).distinct_variables(), (&a * &b).grade());
        }
        1 => {
            // LONG DIVISION
            let a = Polynomial::parse("x^3 - 2x^2 - 4")?;
            let b = Polynomial::parse("x - 3")?;
            let (q, r) = a.div_rem(&b)?;
            println!("({}) / ({}) = {} remainder {}", a, b, q, r);
            println!("check: q*b + r = {}", &(&q * &b) + &r);
            // the operators are views over div_rem
            println!("a / b = {}, a % b = {}", (&a / &b)?, (&a % &b)?);
        }
        2 => {
            // EQUATIONS AND ROOTS
            for input in ["2x + 3 = 0", "x^2 - 5x + 6", "x^2 = 4x - 4", "x^2 + 1", "x^3 - 1"] {
                let equation = PolynomicEquation::parse(input)?;
                match equation.solve() {
                    Ok(solutions) => println!("{}: {:?}", equation, solutions),
                    Err(e) => println!("{}: {}", equation, e),
                }
            }
            let roots = Polynomial::parse("x^2 - 4x + 4")?.get_roots_polynomial()?;
            println!("factored form: {}", roots);
            let roots = PolynomialRoots::parse("(x-1)^2(x+3)")?;
            println!("{} expanded: {}", roots, roots.get_explicit_polynomial(DEFAULT_LITERAL)?);
        }
        3 => {
            // LEAST COMMON MULTIPLE
            let lcm = RootsLcm::new();
            let polynomials = [
                Polynomial::parse("x^2 - 3x + 2")?,
                Polynomial::parse("x^2 - 1")?,
                Polynomial::parse("x^2 - 2x + 1")?,
            ];
            let roots = lcm.lcm(&polynomials)?;
            println!("lcm = {} = {}", roots, roots.get_explicit_polynomial(DEFAULT_LITERAL)?);
        }
        4 => {
            // ALGEBRAIC FRACTIONS
            let f = AlgebraicFraction::parse("(1)/(x - 1)")?;
            let g = AlgebraicFraction::parse("(x)/(x + 1)")?;
            println!("{} + {} = {}", f, g, f.try_add(&g)?);
            println!("{} - {} = {}", f, g, f.try_sub(&g)?);
            println!("{} * {} = {}", f, g, &f * &g);
            println!("{} / {} = {}", f, g, f.try_div(&g)?);
            // a zero denominator never survives construction
            let guarded = AlgebraicFraction::new(Polynomial::parse("x")?, Polynomial::zero());
            println!("x/0 becomes {}", guarded);
        }
        5 => {
            // same computation with debug records on the console
            let settings = AlgebraSettings::from_toml_str("log_level = \"debug\"")?;
            init_logger(&settings);
            let a = Polynomial::parse("4x^3 + 2x + 2")?;
            let b = Polynomial::parse("2x + 1")?;
            let (q, r) = a.div_rem(&b)?;
            println!("({}) / ({}) = {} remainder {}", a, b, q, r);
        }
        _ => {
            println!("no such example, choose 0..=5");
        }
    }
    Ok(())
}
