//! Chebyshev expansion evaluation via Clenshaw recurrence.
//!
//! Standard algorithm ("Numerical Recipes"; Chebyshev polynomial
//! definition). Kernel segments store one coefficient list per
//! Cartesian component.

/// Evaluate `sum(c_k * T_k(s))` for normalised time `s` in [-1, 1].
pub fn clenshaw(coeffs: &[f64], s: f64) -> f64 {
    let n = coeffs.len();
    if n == 0 {
        return 0.0;
    }
    if n == 1 {
        return coeffs[0];
    }

    let two_s = 2.0 * s;
    let mut b_next = 0.0;
    let mut b_after = 0.0;

    for &c in coeffs[1..].iter().rev() {
        let b = two_s * b_next - b_after + c;
        b_after = b_next;
        b_next = b;
    }

    s * b_next - b_after + coeffs[0]
}
