//! # Introduction
//!
//! Factree builds the prime-factorization tree of a number: a binary tree
//! where every composite node is the product of its two children and every
//! leaf is prime.  The tree is shown as a flat factorization on the terminal
//! and can be written to a text file in an indented nested format.
//!
//! ## Pipeline
//!
//! ```text
//! Input line → Command → Factor tree → Flat factorization / rendered text
//! ```
//!
//! 1. [`console`] — reads and parses user input, clears the display.
//! 2. [`factor`] — trial-division primality testing and recursive
//!    [`factor::FactorNode`] construction.
//! 3. [`render`] — serializes a tree to indented lines and writes them to a
//!    file.
//!
//! The binary wires these into an interactive prompt loop; the library API
//! is pure and usable on its own.

pub mod console;
pub mod factor;
pub mod render;
