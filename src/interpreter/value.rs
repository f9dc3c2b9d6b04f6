use crate::util::num::f64_to_i64_exact;

/// Represents the final result of evaluating an expression.
///
/// The stack machine computes in double precision throughout; the
/// integer/real distinction is decided once, on the final value, by
/// [`Value::from_evaluated`]. The rule applies uniformly to every
/// operator's output, so `5 / 1` presents as the integer `5` even though
/// true division produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// An integer result (64 bit integer).
    Integer(i64),
    /// A floating-point result (double precision).
    Real(f64),
}

impl Value {
    /// Applies the final presentation rule to an evaluated number.
    ///
    /// A finite value that equals its own truncation and is exactly
    /// representable as `i64` presents as [`Integer`](Self::Integer);
    /// everything else — fractional values, infinities, and integral
    /// magnitudes beyond the `i64` range — presents as
    /// [`Real`](Self::Real).
    ///
    /// # Example
    /// ```
    /// use shunta::interpreter::value::Value;
    ///
    /// assert_eq!(Value::from_evaluated(3.0), Value::Integer(3));
    /// assert_eq!(Value::from_evaluated(2.5), Value::Real(2.5));
    /// assert_eq!(Value::from_evaluated(1e30), Value::Real(1e30));
    /// ```
    #[must_use]
    pub fn from_evaluated(value: f64) -> Self {
        f64_to_i64_exact(value).map_or(Self::Real(value), Self::Integer)
    }

    /// Returns `true` if the value is [`Integer`](Self::Integer).
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(..))
    }

    /// Returns `true` if the value is [`Real`](Self::Real).
    #[must_use]
    pub const fn is_real(&self) -> bool {
        matches!(self, Self::Real(..))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{r}"),
        }
    }
}
