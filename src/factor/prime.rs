// Trial-division primality testing

/// Returns whether `n` is prime.
///
/// By convention of this program, `1` counts as prime: it may appear as a
/// terminal node in a factor tree and in the flat factorization display.
/// For `n >= 2` this is plain trial division over `[2, n / 2]` — O(n), fine
/// for interactive inputs.
///
/// Callers never pass `0`.
pub fn is_prime(n: u64) -> bool {
    if n == 1 {
        // 1 is treated as prime for this purpose
        return true;
    }
    for i in 2..=n / 2 {
        if n % i == 0 {
            return false;
        }
    }
    true
}
