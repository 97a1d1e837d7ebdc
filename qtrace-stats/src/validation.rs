//! Input validation for the statistics layer
//!
//! Every statistic starts from a density matrix that is supposed to be
//! Hermitian with unit trace. Violations beyond tolerance are numerical
//! failures of the upstream computation and are rejected rather than
//! silently absorbed.

use crate::error::{Result, StatsError};
use qtrace_core::Tolerance;
use qtrace_state::DensityMatrix;

/// Reject a density matrix that is not Hermitian or not trace-1
pub fn validate_density(rho: &DensityMatrix, tolerance: &Tolerance) -> Result<()> {
    if !rho.is_hermitian(tolerance.magnitude) {
        return Err(StatsError::NotHermitian {
            tolerance: tolerance.magnitude,
        });
    }
    let trace = rho.trace();
    if (trace - 1.0).abs() > tolerance.magnitude {
        return Err(StatsError::TraceDeviation { trace });
    }
    Ok(())
}

/// Require an exact density-matrix dimension
pub fn require_dimension(rho: &DensityMatrix, expected: usize) -> Result<()> {
    if rho.dimension() != expected {
        return Err(StatsError::WrongDimension {
            expected,
            actual: rho.dimension(),
        });
    }
    Ok(())
}
