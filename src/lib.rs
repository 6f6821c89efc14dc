//! LFSR keystream generators crate
//!
//! Builds filter and combining generators from linear feedback shift
//! registers. Feedback functions and Boolean output functions are given in
//! a compact algebraic notation (`x2+x4+x7+x12`, `x1*x4+x5*x7+x11`), and the
//! keystream comes back as a string of `'0'`/`'1'` characters.
//!
//! # Example
//!
//! ```
//! let ks = keystream::filter_generator(
//!     "1101111011010011",
//!     "x2+x4+x7+x12",
//!     "x1*x4+x5*x7+x11",
//!     16,
//! )
//! .unwrap();
//! assert_eq!(ks, "0111111000100000");
//!
//! let ct = keystream::xor_bits("1100101011110000", &ks).unwrap();
//! let pt = keystream::xor_bits(&ct, &ks).unwrap();
//! assert_eq!(pt, "1100101011110000");
//! ```

pub mod bits;
pub mod error;
pub mod expr;
pub mod generator;
pub mod lfsr;
pub mod nonlinear;


pub use bits::{bits_to_string, parse_seed, xor_bits};
pub use error::{Error, ErrorKind, Result};
pub use expr::{parse_nonlinear, parse_taps, NonlinearFunction, TapMask, Term};
pub use generator::{combining_generator, filter_generator, CombiningGenerator, FilterGenerator};
pub use lfsr::{advance, Lfsr};
pub use nonlinear::evaluate;
