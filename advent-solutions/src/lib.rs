//! Puzzle solution modules for the advent harness
//!
//! Each module registers itself for a day number with the
//! `AutoRegisterSolver` derive macro. Linking this crate into the `advent`
//! binary is enough for the harness to find them.

#[cfg(feature = "sample")]
pub mod sample;
