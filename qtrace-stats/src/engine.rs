//! Statistics engine
//!
//! Owns the injected eigendecomposition oracle and the tolerance set,
//! and exposes the per-matrix statistics plus the batch helpers that
//! sweep a whole register: one partial trace per qubit or per pair,
//! taken directly from the state vector so no 4^n object ever exists.

use crate::eigen::{DenseEigensolver, Eigensolver};
use crate::error::{Result, StatsError};
use crate::magic::stabilizer_renyi_entropy;
use crate::pair::{pair_descriptors, PairDescriptors};
use crate::single_qubit::{single_qubit_descriptors, SingleQubitDescriptors};
use qtrace_core::Tolerance;
use qtrace_state::{DensityMatrix, StateVector};

/// Statistics engine with an injected eigensolver
///
/// # Example
///
/// ```
/// use qtrace_gates::constants;
/// use qtrace_state::{evolver, ControlMask, StateVector};
/// use qtrace_stats::StatsEngine;
///
/// let psi = StateVector::new(2).unwrap();
/// let psi = evolver::apply_single_qubit(&psi, &constants::HADAMARD, 0, &ControlMask::none()).unwrap();
/// let psi = evolver::apply_single_qubit(&psi, &constants::PAULI_X, 1, &ControlMask::on(0)).unwrap();
///
/// let engine = StatsEngine::new();
/// let per_qubit = engine.all_single_qubit(&psi).unwrap();
/// assert!((per_qubit[0].purity - 0.5).abs() < 1e-9);
/// ```
pub struct StatsEngine<E: Eigensolver = DenseEigensolver> {
    solver: E,
    tolerance: Tolerance,
}

impl StatsEngine<DenseEigensolver> {
    /// Create an engine with the default solver and tolerances
    pub fn new() -> Self {
        Self {
            solver: DenseEigensolver::new(),
            tolerance: Tolerance::default(),
        }
    }
}

impl Default for StatsEngine<DenseEigensolver> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Eigensolver> StatsEngine<E> {
    /// Create an engine with a custom eigensolver
    pub fn with_solver(solver: E) -> Self {
        Self {
            solver,
            tolerance: Tolerance::default(),
        }
    }

    /// Replace the tolerance set
    ///
    /// # Errors
    /// Returns an error if any tolerance is not a positive finite
    /// value; a zero or non-finite threshold would turn every
    /// downstream accept/reject test into noise.
    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Result<Self> {
        if let Err(reason) = tolerance.validate() {
            return Err(StatsError::InvalidTolerance { reason });
        }
        self.tolerance = tolerance;
        Ok(self)
    }

    /// The engine's tolerance set
    pub fn tolerance(&self) -> &Tolerance {
        &self.tolerance
    }

    /// Single-qubit descriptors of a 2x2 density matrix
    pub fn single_qubit(&self, rho: &DensityMatrix) -> Result<SingleQubitDescriptors> {
        single_qubit_descriptors(rho, &self.solver, &self.tolerance)
    }

    /// Pair descriptors of a 4x4 density matrix
    pub fn qubit_pair(&self, rho: &DensityMatrix) -> Result<PairDescriptors> {
        pair_descriptors(rho, &self.solver, &self.tolerance)
    }

    /// Second stabilizer Rényi entropy of a density matrix
    pub fn stabilizer_renyi_entropy(&self, rho: &DensityMatrix) -> Result<f64> {
        stabilizer_renyi_entropy(rho, &self.tolerance)
    }

    /// Descriptors of every qubit, each via its own partial trace
    pub fn all_single_qubit(&self, psi: &StateVector) -> Result<Vec<SingleQubitDescriptors>> {
        let mut out = Vec::with_capacity(psi.num_qubits());
        for qubit in 0..psi.num_qubits() {
            let reduced = psi.reduced_density_matrix(&[qubit])?;
            out.push(self.single_qubit(&reduced)?);
        }
        Ok(out)
    }

    /// Descriptors of every qubit pair (i < j), each via its own
    /// partial trace
    pub fn all_pairs(&self, psi: &StateVector) -> Result<Vec<((usize, usize), PairDescriptors)>> {
        let n = psi.num_qubits();
        let mut out = Vec::with_capacity(n * (n.saturating_sub(1)) / 2);
        for i in 0..n {
            for j in (i + 1)..n {
                let reduced = psi.reduced_density_matrix(&[i, j])?;
                out.push(((i, j), self.qubit_pair(&reduced)?));
            }
        }
        Ok(out)
    }
}
