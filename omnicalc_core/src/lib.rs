//! # omnicalc_core
//!
//! Pure calculation engine behind a catalog of everyday single-page
//! calculators: loans and interest, body composition, dates and age,
//! fractions and percentages, triangles, random numbers, passwords, GPA,
//! and a scientific keypad.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: every calculation is a pure function from an input
//!   struct to a result struct; the few stateful engines are plain value
//!   types the caller owns
//! - **JSON-first**: all inputs, results, and errors serialize cleanly so
//!   any front end can drive the engine
//! - **Rich errors**: bad input yields a structured [`CalcError`] naming the
//!   field, the offending value, and the reason; callers keep their previous
//!   display on error
//! - **No I/O**: the engine never reads the clock, the filesystem, or the
//!   network; randomness is injected by the caller
//!
//! ## Example
//!
//! ```rust
//! use omnicalc_core::calculations::loan::{self, LoanInput, PaymentFrequency};
//!
//! let input = LoanInput {
//!     principal: 25_000.0,
//!     annual_rate_pct: 5.0,
//!     term_years: 5.0,
//!     frequency: PaymentFrequency::Monthly,
//! };
//!
//! let result = loan::calculate(&input).unwrap();
//! assert!((result.payment - 471.78).abs() < 0.01);
//! ```

pub mod calculations;
pub mod catalog;
pub mod errors;
pub mod units;

pub use errors::{CalcError, CalcResult};
