//! Convention-aware gate library
//!
//! Wire ordering is a process-wide decision: the basis-index LSB is
//! either wire 0 (the default here) or wire n-1 (the textbook
//! convention). Mixing the two within one run produces silently wrong
//! circuits, so the choice is fixed when the library is constructed
//! and every multi-qubit constant is handed out in the selected
//! orientation.

use crate::constants;
use qtrace_core::Matrix4x4;

/// Gate library bound to one wire-ordering convention
///
/// # Example
///
/// ```
/// use qtrace_gates::GateLibrary;
///
/// let lib = GateLibrary::new();
/// assert!(!lib.uses_textbook_convention());
///
/// // CX as stored: wire 0 (LSB) is the control
/// let cx = lib.cx();
/// assert_eq!(cx[1][3].re, 1.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct GateLibrary {
    textbook_convention: bool,
}

impl GateLibrary {
    /// Create a library using the default convention (wire 0 = LSB is
    /// the CX control)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a library using the textbook convention (high bit is the
    /// CX control)
    pub fn textbook() -> Self {
        Self {
            textbook_convention: true,
        }
    }

    /// Whether this library hands out textbook-oriented two-qubit gates
    #[inline]
    pub fn uses_textbook_convention(&self) -> bool {
        self.textbook_convention
    }

    /// The CX constant in the library's orientation
    pub fn cx(&self) -> Matrix4x4 {
        if self.textbook_convention {
            constants::CX_TEXTBOOK
        } else {
            constants::CX
        }
    }

    /// The SWAP constant (identical in both orientations)
    pub fn swap(&self) -> Matrix4x4 {
        constants::SWAP
    }
}
