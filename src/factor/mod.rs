//! Factorization core: primality testing and factor-tree construction.
//!
//! [`prime::is_prime`] decides primality by trial division; [`tree::build`]
//! uses it to recursively split a number into a binary [`tree::FactorNode`]
//! whose leaves are prime.

pub mod prime;
pub mod tree;

pub use prime::is_prime;
pub use tree::{build, FactorNode};
