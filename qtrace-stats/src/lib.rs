//! Derived statistics over reduced density matrices
//!
//! This crate turns the reduced density matrices produced by
//! `qtrace-state` into numbers: per-qubit probability, phase, Bloch
//! coordinates, purity, linear and von Neumann entropy; per-pair
//! purity, entropy, ZZ correlation, and Wootters concurrence; and the
//! second stabilizer Rényi entropy for multi-qubit magic.
//!
//! Spectra come from an eigendecomposition oracle injected behind the
//! [`Eigensolver`] trait; [`DenseEigensolver`] is the default backend.
//! A [`StatsEngine`] bundles the solver with the numeric tolerances
//! and adds whole-register batch sweeps.

pub mod eigen;
pub mod engine;
pub mod error;
pub mod magic;
pub mod pair;
pub mod single_qubit;
pub mod spectrum;
pub mod validation;

pub use eigen::{DenseEigensolver, Eigendecomposition, Eigensolver};
pub use engine::StatsEngine;
pub use error::{Result, StatsError};
pub use magic::stabilizer_renyi_entropy;
pub use pair::{pair_descriptors, PairDescriptors};
pub use single_qubit::{single_qubit_descriptors, SingleQubitDescriptors};
pub use spectrum::von_neumann_entropy;
