//! Unit test modules

#[cfg(feature = "parse")]
mod eval;
mod expr;
