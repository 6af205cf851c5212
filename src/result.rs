use std::fmt;
use std::fmt::{Display, Formatter};

use num_rational::BigRational;
use num_traits::ToPrimitive;

/// A struct that holds the result of a calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvalResult {
    /// The result value, kept as an exact rational
    pub val: BigRational,
}

impl EvalResult {
    /// Approximates the result as a float.
    ///
    /// Returns `None` when the value does not fit in an `f64`.
    pub fn to_f64(&self) -> Option<f64> {
        self.val.to_f64()
    }
}

impl Display for EvalResult {
    fn fmt(&self, out: &mut Formatter) -> fmt::Result {
        if self.val.is_integer() {
            return self.val.numer().fmt(out);
        }

        match self.val.to_f64() {
            Some(approx) => approx.fmt(out),
            // too big for a float, show the exact form instead
            None => self.val.fmt(out),
        }
    }
}
