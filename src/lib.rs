//! Parsing and evaluation of dice notation with keep/threshold filters and 2d20-style combat dice.
//!
//! Expressions combine dice terms (`2d20`), integer constants, combat dice (`3c`), addition,
//! subtraction, and parenthesized groups. Postfix filters apply to the preceding term or group:
//!
//! - `h`/`kh`/`l`/`kl` with an optional count keep the highest/lowest members of a pool
//!   (`2d20h`, `(1d4 + 1d6 + 1d8)kh2`).
//! - `>N`, `>=N`, `<N`, `<=N` count the members that pass the comparison.
//! - `->N` and `<-N` are the crit-aware versions of `>=N` and `<=N`: a die that hits with its
//!   best possible roll counts double, and a die that misses with its worst possible roll adds
//!   an *effect* to the result instead.
//! - Combat dice roll a d6 apiece and score 1, 2, 0, 0, or 1 plus an effect.
//!
//! ```
//! use diceydice::{dice::roller::Max, format::Formatter, eval_expr};
//!
//! let out = eval_expr("2d20h", Formatter::Plain, &mut Max)?;
//! assert_eq!(out, "20 <= high([20], 20)");
//! # Ok::<(), diceydice::format::Error>(())
//! ```

#![warn(
	missing_docs,
	missing_debug_implementations,
	unreachable_pub,
	unused_qualifications,
	clippy::pedantic,
	clippy::str_to_string,
	clippy::unwrap_used
)]

pub mod dice;
pub mod eval;
pub mod expr;
pub mod filter;
pub mod format;
#[cfg(feature = "parse")]
pub mod parse;

pub use dice::Dice;
pub use expr::Expr;
#[cfg(feature = "parse")]
pub use format::eval_expr;
#[cfg(feature = "parse")]
pub use parse::expr as parser;

#[cfg(test)]
mod tests;
