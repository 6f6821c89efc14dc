//! Filter and combining keystream generators.
//!
//! A generator owns its registers and parsed functions for the lifetime of
//! one session. Everything is validated in the constructor, so iterating
//! never fails.

use log::debug;

use crate::bits::{bits_to_string, parse_seed};
use crate::error::{Error, Result};
use crate::expr::{parse_nonlinear, NonlinearFunction};
use crate::lfsr::Lfsr;
use crate::nonlinear::sum_terms;

/// One register whose full post-shift state feeds the filter function.
#[derive(Debug, Clone)]
pub struct FilterGenerator {
    register: Lfsr,
    function: NonlinearFunction,
}

impl FilterGenerator {
    pub fn new(seed: &str, tap_expr: &str, function_expr: &str) -> Result<Self> {
        let register = Lfsr::new(seed, tap_expr)?;
        let function = parse_nonlinear(function_expr)?;
        function.check_width(register.len())?;
        debug!(
            "filter generator: register length {}, {} terms",
            register.len(),
            function.terms().len()
        );
        Ok(Self { register, function })
    }
}

impl Iterator for FilterGenerator {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        self.register.clock();
        Some(sum_terms(self.register.state(), &self.function))
    }
}

/// Several independent registers; each tick the bits they shift out form
/// the input of the combining function, in register order.
#[derive(Debug, Clone)]
pub struct CombiningGenerator {
    registers: Vec<Lfsr>,
    function: NonlinearFunction,
    outputs: Vec<u8>,
}

impl CombiningGenerator {
    pub fn new<S, T>(seeds: &[S], tap_exprs: &[T], function_expr: &str) -> Result<Self>
    where
        S: AsRef<str>,
        T: AsRef<str>,
    {
        if seeds.is_empty() {
            return Err(Error::NoRegisters);
        }
        if seeds.len() != tap_exprs.len() {
            return Err(Error::RegisterCountMismatch {
                seeds: seeds.len(),
                taps: tap_exprs.len(),
            });
        }
        let states = seeds
            .iter()
            .map(|seed| parse_seed(seed.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        let function = parse_nonlinear(function_expr)?;
        let registers = states
            .into_iter()
            .zip(tap_exprs)
            .map(|(state, expr)| Lfsr::from_state(state, expr.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        function.check_width(registers.len())?;
        debug!(
            "combining generator: register lengths {:?}, {} terms",
            registers.iter().map(Lfsr::len).collect::<Vec<_>>(),
            function.terms().len()
        );
        let outputs = vec![0; registers.len()];
        Ok(Self {
            registers,
            function,
            outputs,
        })
    }
}

impl Iterator for CombiningGenerator {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        for (out, register) in self.outputs.iter_mut().zip(self.registers.iter_mut()) {
            *out = register.clock();
        }
        Some(sum_terms(&self.outputs, &self.function))
    }
}

/// Runs a filter generator for `length` ticks.
///
/// # Examples
/// ```
/// let bits = keystream::filter_generator("1011", "x1+x4", "x4", 8).unwrap();
/// assert_eq!(bits, "00100011");
/// ```
pub fn filter_generator(
    seed: &str,
    tap_expr: &str,
    function_expr: &str,
    length: usize,
) -> Result<String> {
    let generator = FilterGenerator::new(seed, tap_expr, function_expr)?;
    Ok(bits_to_string(generator.take(length)))
}

/// Runs a combining generator for `length` ticks. `seeds[k]` and
/// `tap_exprs[k]` describe register `k`, which the function sees as `x(k+1)`.
pub fn combining_generator<S, T>(
    seeds: &[S],
    tap_exprs: &[T],
    function_expr: &str,
    length: usize,
) -> Result<String>
where
    S: AsRef<str>,
    T: AsRef<str>,
{
    let generator = CombiningGenerator::new(seeds, tap_exprs, function_expr)?;
    Ok(bits_to_string(generator.take(length)))
}
