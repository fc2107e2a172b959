// Factor tree construction

use super::prime::is_prime;

/// One node of a binary factorization tree.
///
/// A composite node's value equals the product of its two children's values;
/// children are exclusively owned, so dropping the root drops the whole tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FactorNode {
    /// Terminal node: a prime value (or 1, which this program treats as prime).
    Leaf(u64),
    /// A value split into two factors, each factored further in turn.
    Composite {
        value: u64,
        left: Box<FactorNode>,
        right: Box<FactorNode>,
    },
}

impl FactorNode {
    /// The number this node represents.
    pub fn value(&self) -> u64 {
        match self {
            FactorNode::Leaf(n) => *n,
            FactorNode::Composite { value, .. } => *value,
        }
    }

    pub fn is_composite(&self) -> bool {
        matches!(self, FactorNode::Composite { .. })
    }

    /// Leaf values in left-to-right depth-first order.
    ///
    /// This is the flat factorization: the product of the returned values
    /// equals the root value, and each is prime. The order matches the
    /// order in which the leaves were discovered during construction.
    pub fn leaves(&self) -> Vec<u64> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves(&self, out: &mut Vec<u64>) {
        match self {
            FactorNode::Leaf(n) => out.push(*n),
            FactorNode::Composite { left, right, .. } => {
                left.collect_leaves(out);
                right.collect_leaves(out);
            }
        }
    }
}

/// Builds the factor tree for `n`.
///
/// Defined for `n >= 2`. Primes become leaves; a composite is split into
/// `(f1, f2)` and both halves are factored recursively.
///
/// The split policy is fixed: an even number always splits off 2; an odd
/// number takes the first divisor found by scanning every integer from 3
/// while `i < n / 2`. The bound is deliberately strict — matching the
/// behavior this program has always had — and a composite the scan cannot
/// split stays a leaf.
pub fn build(n: u64) -> FactorNode {
    debug_assert!(n >= 2);

    if is_prime(n) {
        return FactorNode::Leaf(n);
    }

    match split(n) {
        Some((f1, f2)) => FactorNode::Composite {
            value: n,
            left: Box::new(build(f1)),
            right: Box::new(build(f2)),
        },
        None => FactorNode::Leaf(n),
    }
}

/// Finds the factor pair for a composite `n`, smallest factor first.
fn split(n: u64) -> Option<(u64, u64)> {
    if n % 2 == 0 {
        return Some((2, n / 2));
    }
    let mut i = 3;
    while i < n / 2 {
        if n % i == 0 {
            return Some((i, n / i));
        }
        i += 1;
    }
    None
}
