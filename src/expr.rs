//! Parsing of linear tap and nonlinear Boolean function notation.
//!
//! Both grammars are sums of terms joined by `+`. A variable is written
//! `x<N>` or `X<N>` with a 1-based `N`; everything parsed here is stored with
//! 0-based indices so the step engine and the evaluator never see the
//! surface numbering. Integer terms and factors only matter through their
//! parity.

use core::fmt;

use log::debug;

use crate::error::{Error, Result};

/// Linear feedback function of one register.
///
/// `bits()[i]` is 1 iff `x(i+1)` occurs an odd number of times in the tap
/// expression. An odd integer term counts as one more occurrence of
/// position 0, so `1+x1` cancels to an untapped first bit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TapMask {
    bits: Vec<u8>,
}

impl TapMask {
    pub fn bits(&self) -> &[u8] {
        &self.bits
    }

    /// Register length the mask was parsed against.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }
}

impl fmt::Display for TapMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .bits
            .iter()
            .enumerate()
            .filter(|(_, b)| **b == 1)
            .map(|(i, _)| format!("x{}", i + 1))
            .collect();
        if parts.is_empty() {
            return f.write_str("0");
        }
        f.write_str(&parts.join("+"))
    }
}

/// One summand of a nonlinear function.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Term {
    /// The literal 1.
    Constant,
    /// AND of the bits at these 0-based positions.
    Product(Vec<usize>),
}

/// A Boolean function written as a sum of products over GF(2).
///
/// Terms are kept in input order and are never merged: `x1+x1` holds two
/// `Product([0])` terms, which evaluate to 0 together, but the list is not
/// reduced to a canonical polynomial.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NonlinearFunction {
    terms: Vec<Term>,
}

impl NonlinearFunction {
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Largest 0-based variable index referenced, if any.
    pub fn max_variable(&self) -> Option<usize> {
        self.terms
            .iter()
            .filter_map(|term| match term {
                Term::Constant => None,
                Term::Product(vars) => vars.iter().copied().max(),
            })
            .max()
    }

    /// Number of input bits the function needs.
    pub fn arity(&self) -> usize {
        self.max_variable().map_or(0, |v| v + 1)
    }

    /// Fails unless every variable fits in an input of `width` bits.
    pub fn check_width(&self, width: usize) -> Result<()> {
        let arity = self.arity();
        if arity > width {
            return Err(Error::VariableOutOfRange {
                index: arity,
                width,
            });
        }
        Ok(())
    }
}

impl fmt::Display for NonlinearFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return f.write_str("0");
        }
        let rendered: Vec<String> = self
            .terms
            .iter()
            .map(|term| match term {
                Term::Constant => "1".to_string(),
                Term::Product(vars) => vars
                    .iter()
                    .map(|v| format!("x{}", v + 1))
                    .collect::<Vec<_>>()
                    .join("*"),
            })
            .collect();
        f.write_str(&rendered.join("+"))
    }
}

fn is_decimal(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

// Only called on decimal strings; the last digit decides the parity.
fn is_odd(digits: &str) -> bool {
    digits.bytes().last().is_some_and(|b| (b - b'0') & 1 == 1)
}

/// `None` when `term` is not a variable reference, otherwise its 1-based index.
fn variable_index(term: &str) -> Option<Result<usize>> {
    let suffix = term.strip_prefix(|c: char| c == 'x' || c == 'X')?;
    let invalid = || Error::InvalidIndex {
        term: term.to_string(),
    };
    if !is_decimal(suffix) {
        return Some(Err(invalid()));
    }
    Some(match suffix.parse::<usize>() {
        Ok(0) | Err(_) => Err(invalid()),
        Ok(index) => Ok(index),
    })
}

/// Parses a linear feedback expression against a register of `len` bits.
///
/// ```
/// let taps = keystream::parse_taps("x2+x4", 7).unwrap();
/// assert_eq!(taps.bits(), &[0, 1, 0, 1, 0, 0, 0]);
/// ```
pub fn parse_taps(expr: &str, len: usize) -> Result<TapMask> {
    let mut bits = vec![0u8; len];
    for term in expr.split('+') {
        if term.is_empty() {
            return Err(Error::EmptyTerm {
                expr: expr.to_string(),
            });
        }
        if let Some(index) = variable_index(term) {
            let index = index?;
            if index > len {
                return Err(Error::TapOutOfRange { index, len });
            }
            bits[index - 1] ^= 1;
        } else if is_decimal(term) {
            if is_odd(term) {
                if let Some(first) = bits.first_mut() {
                    *first ^= 1;
                }
            }
        } else {
            return Err(Error::UnknownTerm {
                term: term.to_string(),
            });
        }
    }
    let taps = TapMask { bits };
    debug!("parsed taps {expr} -> {taps}");
    Ok(taps)
}

/// Parses a sum-of-products expression such as `x1*x4+x5*x7+x11+1`.
pub fn parse_nonlinear(expr: &str) -> Result<NonlinearFunction> {
    let mut terms = Vec::new();
    for term in expr.split('+') {
        if is_decimal(term) {
            if is_odd(term) {
                terms.push(Term::Constant);
            }
            continue;
        }
        if let Some(vars) = parse_product(expr, term)? {
            terms.push(Term::Product(vars));
        }
    }
    let function = NonlinearFunction { terms };
    debug!("parsed function {expr} -> {function}");
    Ok(function)
}

// An even factor zeroes the whole product, and so does a product with no
// variables left: both yield `None`.
fn parse_product(expr: &str, term: &str) -> Result<Option<Vec<usize>>> {
    let mut vars = Vec::new();
    for factor in term.split('*') {
        if factor.is_empty() {
            return Err(Error::EmptyFactor {
                expr: expr.to_string(),
            });
        }
        if let Some(index) = variable_index(factor) {
            vars.push(index? - 1);
        } else if is_decimal(factor) {
            if !is_odd(factor) {
                return Ok(None);
            }
        } else {
            return Err(Error::UnknownTerm {
                term: factor.to_string(),
            });
        }
    }
    Ok((!vars.is_empty()).then_some(vars))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn product(vars: &[usize]) -> Term {
        Term::Product(vars.to_vec())
    }

    #[test]
    fn taps_mark_odd_occurrences() {
        let taps = parse_taps("x2+x4", 7).unwrap();
        assert_eq!(taps.bits(), &[0, 1, 0, 1, 0, 0, 0]);

        // the constant and x1 both land on position 0 and cancel
        let taps = parse_taps("1+x1+x2+x3+x2+x5", 7).unwrap();
        assert_eq!(taps.bits(), &[0, 0, 1, 0, 1, 0, 0]);
        assert_eq!(taps.to_string(), "x3+x5");
    }

    #[test]
    fn odd_constant_taps_first_position() {
        let taps = parse_taps("1+x3", 4).unwrap();
        assert_eq!(taps.bits(), &[1, 0, 1, 0]);
        let taps = parse_taps("7+4", 2).unwrap();
        assert_eq!(taps.bits(), &[1, 0]);
    }

    #[test]
    fn taps_constants_cancel_by_parity() {
        let taps = parse_taps("3+x1+5+X1+12", 3).unwrap();
        assert_eq!(taps.bits(), &[0, 0, 0]);
        assert_eq!(taps.to_string(), "0");
    }

    #[test]
    fn taps_accept_upper_bound_index() {
        let taps = parse_taps("x5", 5).unwrap();
        assert_eq!(taps.bits(), &[0, 0, 0, 0, 1]);
        let taps = parse_taps("X1", 1).unwrap();
        assert_eq!(taps.bits(), &[1]);
    }

    #[test]
    fn taps_reject_bad_input() {
        assert_eq!(
            parse_taps("x9", 5).unwrap_err(),
            Error::TapOutOfRange { index: 9, len: 5 }
        );
        assert_eq!(parse_taps("x0", 5).unwrap_err().kind(), ErrorKind::Parse);
        assert_eq!(
            parse_taps("x1++x2", 5).unwrap_err(),
            Error::EmptyTerm {
                expr: "x1++x2".to_string()
            }
        );
        assert_eq!(parse_taps("", 5).unwrap_err().kind(), ErrorKind::Parse);
        assert_eq!(
            parse_taps("xa", 5).unwrap_err(),
            Error::InvalidIndex {
                term: "xa".to_string()
            }
        );
        assert_eq!(
            parse_taps("x1+y2", 5).unwrap_err(),
            Error::UnknownTerm {
                term: "y2".to_string()
            }
        );
        assert_eq!(parse_taps("x 1", 5).unwrap_err().kind(), ErrorKind::Parse);
        assert_eq!(
            parse_taps("x99999999999999999999999", 5).unwrap_err().kind(),
            ErrorKind::Parse
        );
    }

    #[test]
    fn nonlinear_keeps_terms_in_order() {
        let function = parse_nonlinear("x1*x2*x5+x1+9+3*x6+2*x7+1").unwrap();
        assert_eq!(
            function.terms(),
            &[
                product(&[0, 1, 4]),
                product(&[0]),
                Term::Constant,
                product(&[5]),
                Term::Constant,
            ]
        );
        assert_eq!(function.to_string(), "x1*x2*x5+x1+1+x6+1");
    }

    #[test]
    fn nonlinear_does_not_merge_duplicates() {
        let function = parse_nonlinear("x1+x1+X1*x2").unwrap();
        assert_eq!(
            function.terms(),
            &[product(&[0]), product(&[0]), product(&[0, 1])]
        );
    }

    #[test]
    fn nonlinear_drops_zero_products() {
        // even factor: the remaining factors are not looked at
        let function = parse_nonlinear("4*x1*junk+x2").unwrap();
        assert_eq!(function.terms(), &[product(&[1])]);
        // odd constants only, no variable
        let function = parse_nonlinear("3*5+8").unwrap();
        assert!(function.terms().is_empty());
        assert_eq!(function.to_string(), "0");
    }

    #[test]
    fn nonlinear_rejects_bad_input() {
        assert_eq!(
            parse_nonlinear("x1*+x2").unwrap_err(),
            Error::EmptyFactor {
                expr: "x1*+x2".to_string()
            }
        );
        assert_eq!(parse_nonlinear("x1+").unwrap_err().kind(), ErrorKind::Parse);
        assert_eq!(parse_nonlinear("").unwrap_err().kind(), ErrorKind::Parse);
        assert_eq!(
            parse_nonlinear("x1*xq").unwrap_err(),
            Error::InvalidIndex {
                term: "xq".to_string()
            }
        );
        assert_eq!(
            parse_nonlinear("x1*z").unwrap_err(),
            Error::UnknownTerm {
                term: "z".to_string()
            }
        );
        assert_eq!(parse_nonlinear("x0").unwrap_err().kind(), ErrorKind::Parse);
    }

    #[test]
    fn width_checks_use_largest_variable() {
        let function = parse_nonlinear("x1*x4+x5*x7+x11").unwrap();
        assert_eq!(function.max_variable(), Some(10));
        assert_eq!(function.arity(), 11);
        assert!(function.check_width(11).is_ok());
        assert_eq!(
            function.check_width(10).unwrap_err(),
            Error::VariableOutOfRange {
                index: 11,
                width: 10
            }
        );
        assert_eq!(parse_nonlinear("1").unwrap().arity(), 0);
    }

    #[test]
    fn long_constants_only_need_parity() {
        let function = parse_nonlinear("123456789012345678901234567890123+x1").unwrap();
        assert_eq!(function.terms(), &[Term::Constant, product(&[0])]);
        let taps = parse_taps("98765432109876543210987654321", 2).unwrap();
        assert_eq!(taps.bits(), &[1, 0]);
    }
}
