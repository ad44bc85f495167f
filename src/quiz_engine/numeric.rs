use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Uniform integer in `lo..=hi`. Bounds may be given in either order.
pub fn rand_int<R: Rng>(rng: &mut R, lo: i64, hi: i64) -> i64 {
    if lo <= hi {
        rng.gen_range(lo..=hi)
    } else {
        rng.gen_range(hi..=lo)
    }
}

/// Greatest common divisor; `gcd(0, 0) == 0`.
pub fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// Render `doubled / 2` exactly: whole numbers bare, halves with ".5".
pub fn format_half(doubled: i64) -> String {
    if doubled % 2 == 0 {
        (doubled / 2).to_string()
    } else {
        let sign = if doubled < 0 { "-" } else { "" };
        format!("{}{}.5", sign, (doubled / 2).abs())
    }
}

/// `" + n"`, `" - n"` or `""` for zero; used to print trailing constants.
pub fn signed_term(n: i64) -> String {
    match n {
        0 => String::new(),
        n if n > 0 => format!(" + {}", n),
        n => format!(" - {}", -n),
    }
}

/// A fraction as written, *not* automatically reduced: `2/6` stays `2/6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fraction {
    pub num: i64,
    pub den: i64,
}

impl Fraction {
    /// Sign is normalised onto the numerator.
    pub fn new(num: i64, den: i64) -> Self {
        if den < 0 {
            Fraction { num: -num, den: -den }
        } else {
            Fraction { num, den }
        }
    }

    pub fn reduced(self) -> Self {
        let g = gcd(self.num, self.den).max(1);
        Fraction { num: self.num / g, den: self.den / g }
    }

    /// Same rational value, compared by cross-multiplication.
    pub fn equivalent(self, other: Fraction) -> bool {
        self.num * other.den == other.num * self.den
    }

    pub fn is_proper(self) -> bool {
        self.num.abs() < self.den
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}
