//! # Text parser for algebraic expressions
//!
//! nom grammar behind every `parse` constructor of the algebra types. Whitespace is ignored.
//!
//! ```text
//! number     := digits [ "." digits ] | "." digits
//! signed     := [ "+" | "-" ] number
//! exponent   := "^" ( signed | "(" signed ")" )
//! variable   := letter [ exponent ]
//! term       := [ number ] variable*            (not empty)
//! polynomial := [ sign ] term ( sign term )*
//! equation   := polynomial [ "=" polynomial ]
//! factor     := "(" letter [ signed ] ")" [ "^" ( digits | "(" digits ")" ) ]
//! roots      := factor+
//! fraction   := "(" polynomial ")" "/" "(" polynomial ")"
//! ```
//! Raw nom failures become `MalformedExpression`, except for `parse_variable` which reports
//! `InvalidVariableFormat`. Semantic checks (duplicate literals, finite exponents) are left to the
//! constructors of the built types.
use crate::algebra::algebra_error::{AlgebraError, Result};
use crate::algebra::algebraic_fraction::AlgebraicFraction;
use crate::algebra::monomial::Monomial;
use crate::algebra::polynomial::Polynomial;
use crate::algebra::polynomial_roots::PolynomialRoots;
use crate::algebra::polynomic_equation::PolynomicEquation;
use crate::algebra::variable::Variable;
use nom::{
    IResult, Parser,
    branch::alt,
    character::complete::{char, digit0, digit1, one_of, satisfy},
    combinator::{all_consuming, map, map_res, opt, verify},
    multi::{many0, many1},
    sequence::{delimited, pair, preceded, separated_pair},
};
use std::iter;

type RawVariable = (char, f64);
// (sign, (coefficient, variables))
type RawTerm = (f64, (Option<f64>, Vec<RawVariable>));
// (literal, root, multiplicity)
type RawFactor = (char, f64, u32);

//___________________________________GRAMMAR____________________________________

fn unsigned_number(input: &str) -> IResult<&str, f64> {
    alt((
        map_res(
            pair(digit1, opt(preceded(char('.'), digit0))),
            |(integer, fraction): (&str, Option<&str>)| {
                format!("{}.{}0", integer, fraction.unwrap_or("")).parse::<f64>()
            },
        ),
        map_res(preceded(char('.'), digit1), |fraction: &str| {
            format!("0.{}", fraction).parse::<f64>()
        }),
    ))
    .parse(input)
}

fn sign(input: &str) -> IResult<&str, f64> {
    map(one_of("+-"), |s| if s == '-' { -1.0 } else { 1.0 }).parse(input)
}

fn signed_number(input: &str) -> IResult<&str, f64> {
    map(pair(opt(sign), unsigned_number), |(s, value)| {
        s.unwrap_or(1.0) * value
    })
    .parse(input)
}

fn exponent(input: &str) -> IResult<&str, f64> {
    preceded(
        char('^'),
        alt((signed_number, delimited(char('('), signed_number, char(')')))),
    )
    .parse(input)
}

fn literal(input: &str) -> IResult<&str, char> {
    satisfy(|c: char| c.is_alphabetic()).parse(input)
}

fn variable(input: &str) -> IResult<&str, RawVariable> {
    pair(literal, map(opt(exponent), |e| e.unwrap_or(1.0))).parse(input)
}

fn term(input: &str) -> IResult<&str, (Option<f64>, Vec<RawVariable>)> {
    verify(
        pair(opt(unsigned_number), many0(variable)),
        |(coefficient, variables): &(Option<f64>, Vec<RawVariable>)| {
            coefficient.is_some() || !variables.is_empty()
        },
    )
    .parse(input)
}

fn leading_term(input: &str) -> IResult<&str, RawTerm> {
    pair(map(opt(sign), |s| s.unwrap_or(1.0)), term).parse(input)
}

fn polynomial_terms(input: &str) -> IResult<&str, Vec<RawTerm>> {
    map(
        pair(leading_term, many0(pair(sign, term))),
        |(first, rest)| iter::once(first).chain(rest).collect(),
    )
    .parse(input)
}

fn multiplicity(input: &str) -> IResult<&str, u32> {
    map_res(digit1, |s: &str| s.parse::<u32>()).parse(input)
}

fn root_factor(input: &str) -> IResult<&str, RawFactor> {
    map(
        pair(
            delimited(char('('), pair(literal, opt(signed_number)), char(')')),
            opt(preceded(
                char('^'),
                alt((multiplicity, delimited(char('('), multiplicity, char(')')))),
            )),
        ),
        |((l, shift), m)| (l, shift.map_or(0.0, |v| -v), m.unwrap_or(1)),
    )
    .parse(input)
}

fn parenthesized(input: &str) -> IResult<&str, Vec<RawTerm>> {
    delimited(char('('), polynomial_terms, char(')')).parse(input)
}

//___________________________________BUILDERS____________________________________

fn strip_whitespace(input: &str) -> String {
    input.chars().filter(|c| !c.is_whitespace()).collect()
}

// runs the parser over the whole input
fn run<'a, O>(
    parser: impl Parser<&'a str, Output = O, Error = nom::error::Error<&'a str>>,
    input: &'a str,
) -> std::result::Result<O, String> {
    all_consuming(parser)
        .parse(input)
        .map(|(_, output)| output)
        .map_err(|e| e.to_string())
}

fn malformed(input: &str, reason: String) -> AlgebraError {
    AlgebraError::MalformedExpression(format!("'{}': {}", input, reason))
}

fn build_variable((literal, exponent): RawVariable) -> Result<Variable> {
    Variable::new(literal, exponent)
}

fn build_monomial((sign, (coefficient, variables)): RawTerm) -> Result<Monomial> {
    let variables = variables
        .into_iter()
        .map(build_variable)
        .collect::<Result<Vec<_>>>()?;
    Monomial::new(sign * coefficient.unwrap_or(1.0), variables)
}

fn build_polynomial(terms: Vec<RawTerm>) -> Result<Polynomial> {
    let monomials = terms
        .into_iter()
        .map(build_monomial)
        .collect::<Result<Vec<_>>>()?;
    Ok(Polynomial::from_monomials(0.0, monomials))
}

//___________________________________ENTRY POINTS____________________________________

/// "x", "y^3", "z^-2", "z^(0.5)"
pub fn parse_variable(input: &str) -> Result<Variable> {
    let cleaned = strip_whitespace(input);
    let raw = run(variable, &cleaned).map_err(|e| {
        AlgebraError::InvalidVariableFormat(format!("'{}': {}", input, e))
    })?;
    build_variable(raw)
}

/// "3x^2y", "-x", "0.5", "2xz^3"
pub fn parse_monomial(input: &str) -> Result<Monomial> {
    let cleaned = strip_whitespace(input);
    let raw = run(leading_term, &cleaned).map_err(|e| malformed(input, e))?;
    build_monomial(raw)
}

/// "3x^2+5x-2", "x^2y-xy^2+4"
pub fn parse_polynomial(input: &str) -> Result<Polynomial> {
    let cleaned = strip_whitespace(input);
    let terms = run(polynomial_terms, &cleaned).map_err(|e| malformed(input, e))?;
    build_polynomial(terms)
}

/// "x^2-4", "x^2-4=0", "x^2=4"; an equation `lhs = rhs` is stored as `lhs - rhs = 0`
pub fn parse_equation(input: &str) -> Result<PolynomicEquation> {
    let cleaned = strip_whitespace(input);
    let (lhs, rhs) = run(
        pair(polynomial_terms, opt(preceded(char('='), polynomial_terms))),
        &cleaned,
    )
    .map_err(|e| malformed(input, e))?;
    let mut content = build_polynomial(lhs)?;
    if let Some(rhs) = rhs {
        content -= &build_polynomial(rhs)?;
    }
    Ok(PolynomicEquation::new(content))
}

/// "(x-1)(x+2)^3(x)"; all the factors must use the same literal
pub fn parse_roots(input: &str) -> Result<PolynomialRoots> {
    let cleaned = strip_whitespace(input);
    let factors = run(many1(root_factor), &cleaned).map_err(|e| malformed(input, e))?;
    if let Some((first, _, _)) = factors.first() {
        if let Some((other, _, _)) = factors.iter().find(|(l, _, _)| l != first) {
            return Err(malformed(
                input,
                format!("factors over both {} and {}", first, other),
            ));
        }
    }
    Ok(PolynomialRoots::from_pairs(
        factors.into_iter().map(|(_, root, m)| (root, m)),
    ))
}

/// "(x+1)/(x^2-1)"
pub fn parse_fraction(input: &str) -> Result<AlgebraicFraction> {
    let cleaned = strip_whitespace(input);
    let (numerator, denominator) = run(
        separated_pair(parenthesized, char('/'), parenthesized),
        &cleaned,
    )
    .map_err(|e| malformed(input, e))?;
    Ok(AlgebraicFraction::new(
        build_polynomial(numerator)?,
        build_polynomial(denominator)?,
    ))
}
