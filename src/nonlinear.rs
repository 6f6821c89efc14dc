//! Evaluation of a parsed Boolean function over a bit vector.

use crate::error::{Error, Result};
use crate::expr::{NonlinearFunction, Term};

// Callers guarantee `bits.len() >= function.arity()`.
pub(crate) fn sum_terms(bits: &[u8], function: &NonlinearFunction) -> u8 {
    function.terms().iter().fold(0u8, |sum, term| {
        let value = match term {
            Term::Constant => 1,
            Term::Product(vars) => vars.iter().fold(1u8, |acc, &v| acc & bits[v]),
        };
        sum ^ value
    }) & 1
}

/// Evaluates `function` over `bits`, returning 0 or 1.
///
/// Fails with an index error if the function references a variable past the
/// end of `bits`.
pub fn evaluate(bits: &[u8], function: &NonlinearFunction) -> Result<u8> {
    if let Some(var) = function.max_variable() {
        if var >= bits.len() {
            return Err(Error::BitIndexOutOfRange {
                index: var + 1,
                len: bits.len(),
            });
        }
    }
    Ok(sum_terms(bits, function))
}

impl NonlinearFunction {
    pub fn evaluate(&self, bits: &[u8]) -> Result<u8> {
        evaluate(bits, self)
    }
}
