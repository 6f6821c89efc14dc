//! Linear feedback shift register.
//!
//! The register shifts towards index 0: the bit at index 0 leaves, every
//! other bit moves down one place and the feedback bit enters at the tail.

use crate::bits::parse_seed;
use crate::error::Result;
use crate::expr::{parse_taps, TapMask};

/// Mod-2 sum of the tapped state bits.
pub fn feedback(state: &[u8], taps: &TapMask) -> u8 {
    state
        .iter()
        .zip(taps.bits())
        .fold(0, |acc, (s, t)| acc ^ (s & t))
        & 1
}

/// Computes one tick without touching `state`.
///
/// Returns the next state and the bit shifted out (`state[0]`).
pub fn advance(state: &[u8], taps: &TapMask) -> (Vec<u8>, u8) {
    let Some((&out, rest)) = state.split_first() else {
        return (Vec::new(), 0);
    };
    let mut next = Vec::with_capacity(state.len());
    next.extend_from_slice(rest);
    next.push(feedback(state, taps));
    (next, out)
}

/// A register together with its feedback function, clocked in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lfsr {
    state: Vec<u8>,
    taps: TapMask,
}

impl Lfsr {
    /// Builds a register from a binary seed and a tap expression parsed
    /// against the seed's length.
    pub fn new(seed: &str, tap_expr: &str) -> Result<Self> {
        Self::from_state(parse_seed(seed)?, tap_expr)
    }

    // `state` must already be a validated, non-empty bit vector.
    pub(crate) fn from_state(state: Vec<u8>, tap_expr: &str) -> Result<Self> {
        let taps = parse_taps(tap_expr, state.len())?;
        Ok(Self { state, taps })
    }

    pub fn state(&self) -> &[u8] {
        &self.state
    }

    pub fn taps(&self) -> &TapMask {
        &self.taps
    }

    pub fn len(&self) -> usize {
        self.state.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    #[inline]
    fn shift_out(reg: &mut [u8], new_bit: u8) -> u8 {
        let out = reg[0];
        for i in 1..reg.len() {
            reg[i - 1] = reg[i];
        }
        reg[reg.len() - 1] = new_bit & 1;
        out
    }

    /// Advances one tick and returns the bit that left the register.
    pub fn clock(&mut self) -> u8 {
        let fb = feedback(&self.state, &self.taps);
        Self::shift_out(&mut self.state, fb)
    }
}
