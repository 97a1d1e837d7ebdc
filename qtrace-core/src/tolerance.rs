//! Shared numeric tolerances
//!
//! Every layer that compares magnitudes against "equal up to noise"
//! or clamps eigenvalues uses the same pair of thresholds, fixed at
//! construction time.

/// Numeric tolerances used across the simulator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    /// Threshold for "equal up to noise" tests on magnitudes
    ///
    /// Default: 1e-9
    pub magnitude: f64,

    /// Threshold for eigenvalue clamping
    ///
    /// Eigenvalues in (-eigenvalue, 0) are treated as 0; anything
    /// below -eigenvalue is a numerical failure.
    ///
    /// Default: 1e-7
    pub eigenvalue: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            magnitude: 1e-9,
            eigenvalue: 1e-7,
        }
    }
}

impl Tolerance {
    /// Create the default tolerance set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the magnitude threshold
    pub fn with_magnitude(mut self, magnitude: f64) -> Self {
        self.magnitude = magnitude;
        self
    }

    /// Set the eigenvalue clamping threshold
    pub fn with_eigenvalue(mut self, eigenvalue: f64) -> Self {
        self.eigenvalue = eigenvalue;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.magnitude <= 0.0 || !self.magnitude.is_finite() {
            return Err(format!(
                "magnitude tolerance must be a positive finite value, got {}",
                self.magnitude
            ));
        }
        if self.eigenvalue <= 0.0 || !self.eigenvalue.is_finite() {
            return Err(format!(
                "eigenvalue tolerance must be a positive finite value, got {}",
                self.eigenvalue
            ));
        }
        Ok(())
    }
}
