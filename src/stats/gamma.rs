//! Regularized incomplete gamma functions.
//!
//! Numerically stable building blocks for the chi-square survival function:
//! a Lanczos log-gamma, the lower-tail series expansion, and the upper-tail
//! Lentz continued fraction. Double precision throughout, far beyond the
//! 4-decimal reporting precision the engine needs.

const MAX_ITERATIONS: usize = 500;
const EPSILON: f64 = 1e-14;
const TINY: f64 = 1e-300;

/// Lanczos coefficients for g = 7, n = 9.
const LANCZOS: [f64; 9] = [
    0.999_999_999_999_809_93,
    676.520_368_121_885_1,
    -1_259.139_216_722_402_8,
    771.323_428_777_653_13,
    -176.615_029_162_140_59,
    12.507_343_278_686_905,
    -0.138_571_095_265_720_12,
    9.984_369_578_019_571_6e-6,
    1.505_632_735_149_311_6e-7,
];

/// Natural log of the gamma function for positive arguments.
pub fn ln_gamma(z: f64) -> f64 {
    if z < 0.5 {
        // Reflection: Gamma(z) * Gamma(1 - z) = pi / sin(pi * z)
        let pi = std::f64::consts::PI;
        return (pi / (pi * z).sin()).ln() - ln_gamma(1.0 - z);
    }

    let z = z - 1.0;
    let mut x = LANCZOS[0];
    for (i, &c) in LANCZOS.iter().enumerate().skip(1) {
        x += c / (z + i as f64);
    }
    let t = z + 7.5;

    0.5 * (2.0 * std::f64::consts::PI).ln() + (z + 0.5) * t.ln() - t + x.ln()
}

/// Regularized upper incomplete gamma function `Q(a, x) = 1 - P(a, x)`.
///
/// For `x < a + 1` the lower-tail series converges fastest, so `Q` is
/// computed as its complement; otherwise the continued fraction is used
/// directly.
pub fn regularized_gamma_upper(a: f64, x: f64) -> f64 {
    debug_assert!(a > 0.0);
    if x <= 0.0 {
        return 1.0;
    }

    if x < a + 1.0 {
        1.0 - lower_series(a, x)
    } else {
        upper_continued_fraction(a, x)
    }
}

/// Series expansion of the regularized lower incomplete gamma `P(a, x)`.
fn lower_series(a: f64, x: f64) -> f64 {
    let mut term = 1.0 / a;
    let mut sum = term;
    for n in 1..=MAX_ITERATIONS {
        term *= x / (a + n as f64);
        sum += term;
        if term.abs() < sum.abs() * EPSILON {
            break;
        }
    }

    sum * (a * x.ln() - x - ln_gamma(a)).exp()
}

/// Modified Lentz continued fraction for the upper tail `Q(a, x)`.
fn upper_continued_fraction(a: f64, x: f64) -> f64 {
    let mut b = x + 1.0 - a;
    let mut c = 1.0 / TINY;
    let mut d = 1.0 / b;
    let mut h = d;

    for i in 1..=MAX_ITERATIONS {
        let an = -(i as f64) * (i as f64 - a);
        b += 2.0;
        d = an * d + b;
        if d.abs() < TINY {
            d = TINY;
        }
        c = b + an / c;
        if c.abs() < TINY {
            c = TINY;
        }
        d = 1.0 / d;
        let delta = d * c;
        h *= delta;
        if (delta - 1.0).abs() < EPSILON {
            break;
        }
    }

    (a * x.ln() - x - ln_gamma(a)).exp() * h
}
