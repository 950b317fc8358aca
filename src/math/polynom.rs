use crate::error::{ensure_finite, ConstructionError, Result};

/// Highest supported degree.
const MAX_DEGREE: usize = 3;

/// A polynomial `c0 + c1·x + c2·x² + c3·x³` of degree at most 3.
///
/// Coefficients are given highest power first, the way the polynomial is
/// written, and stored by ascending power. A non-vertical line reduces to a
/// degree-1 polynomial `slope·x + intercept`.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynom {
    coefficients: Vec<f64>,
}

impl Polynom {
    /// Creates a polynomial from coefficients written highest power first.
    ///
    /// `Polynom::new(&[1.0, 0.0, 0.0])` is `x²`.
    ///
    /// # Errors
    ///
    /// Returns an error if no coefficient is given, more than four are given,
    /// or any coefficient is not finite.
    pub fn new(coefficients: &[f64]) -> Result<Self> {
        if coefficients.is_empty() || coefficients.len() > MAX_DEGREE + 1 {
            return Err(ConstructionError::Degenerate(format!(
                "a polynom takes 1 to {} coefficients, got {}",
                MAX_DEGREE + 1,
                coefficients.len()
            ))
            .into());
        }
        let coefficients = coefficients
            .iter()
            .rev()
            .map(|&c| ensure_finite("polynom coefficient", c))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { coefficients })
    }

    /// The line polynomial `slope·x + intercept`.
    #[must_use]
    pub(crate) fn linear(slope: f64, intercept: f64) -> Self {
        Self {
            coefficients: vec![intercept, slope],
        }
    }

    /// Number of stored coefficients minus one.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Coefficients by ascending power.
    #[must_use]
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Evaluates the polynomial at `x` (Horner's scheme).
    #[must_use]
    pub fn value_at(&self, x: f64) -> f64 {
        self.coefficients
            .iter()
            .rev()
            .fold(0.0, |acc, &c| acc * x + c)
    }

    fn coefficient(&self, power: usize) -> f64 {
        self.coefficients.get(power).copied().unwrap_or(0.0)
    }

    /// Coefficient of `x⁰`.
    #[must_use]
    pub fn absolute_coefficient(&self) -> f64 {
        self.coefficient(0)
    }

    /// Coefficient of `x¹`; zero when the degree is lower.
    #[must_use]
    pub fn linear_coefficient(&self) -> f64 {
        self.coefficient(1)
    }

    /// Coefficient of `x²`; zero when the degree is lower.
    #[must_use]
    pub fn quadratic_coefficient(&self) -> f64 {
        self.coefficient(2)
    }

    /// Coefficient of `x³`; zero when the degree is lower.
    #[must_use]
    pub fn cubic_coefficient(&self) -> f64 {
        self.coefficient(3)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn written_order_maps_to_powers() {
        let p = Polynom::new(&[4.0, 3.0, 2.0, 1.0]).unwrap();
        assert_eq!(p.degree(), 3);
        assert_eq!(p.absolute_coefficient(), 1.0);
        assert_eq!(p.linear_coefficient(), 2.0);
        assert_eq!(p.quadratic_coefficient(), 3.0);
        assert_eq!(p.cubic_coefficient(), 4.0);
    }

    #[test]
    fn square_evaluates() {
        let p = Polynom::new(&[1.0, 0.0, 0.0]).unwrap();
        assert_eq!(p.value_at(2.0), 4.0);
        assert_eq!(p.value_at(-3.0), 9.0);
    }

    #[test]
    fn missing_powers_are_zero() {
        let p = Polynom::linear(2.0, -1.0);
        assert_eq!(p.degree(), 1);
        assert_eq!(p.quadratic_coefficient(), 0.0);
        assert_eq!(p.cubic_coefficient(), 0.0);
        assert_eq!(p.value_at(3.0), 5.0);
    }

    #[test]
    fn degree_above_three_is_rejected() {
        assert!(Polynom::new(&[1.0, 0.0, 0.0, 0.0, 0.0]).is_err());
        assert!(Polynom::new(&[]).is_err());
    }

    #[test]
    fn non_finite_coefficient_is_rejected() {
        assert!(Polynom::new(&[f64::NAN, 1.0]).is_err());
    }
}
