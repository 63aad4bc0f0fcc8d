//! Grid storage for the conserved fields and interface fluxes.
//!
//! Each conserved quantity carries three parallel sequences: the
//! per-cell values and the reconstructed values on the left/right side
//! of each interface. Interface `i` separates cells `i − 1` and `i`;
//! indices `0` and `n − 1` are ghost interfaces whose fluxes are filled
//! by duplication at the end of a sweep.

use thiserror::Error;

use super::EulerState;

/// Error type for grid-array shape violations.
#[derive(Debug, Error, PartialEq)]
pub enum FieldError {
    /// A field's sequences disagree in length.
    #[error("{field} arrays must share one length: expected {expected}, got {got}")]
    ShapeMismatch {
        field: &'static str,
        expected: usize,
        got: usize,
    },

    /// The grid has no interior interface.
    #[error("grid too short: {n} cells, need at least 3")]
    TooShort { n: usize },

    /// Flux buffer length does not match the fields.
    #[error("flux buffer holds {buffer} interfaces but fields hold {fields}")]
    BufferMismatch { fields: usize, buffer: usize },
}

/// One conserved quantity on the grid.
#[derive(Clone, Debug)]
pub struct FieldData {
    /// Per-cell values.
    pub cell: Vec<f64>,
    /// Reconstructed value on the left side of each interface.
    pub left: Vec<f64>,
    /// Reconstructed value on the right side of each interface.
    pub right: Vec<f64>,
}

impl FieldData {
    /// Create a field from cell values, with zeroed interface sequences.
    pub fn from_cells(cell: Vec<f64>) -> Self {
        let n = cell.len();
        Self {
            cell,
            left: vec![0.0; n],
            right: vec![0.0; n],
        }
    }

    /// Number of cells (and interfaces).
    pub fn len(&self) -> usize {
        self.cell.len()
    }

    /// Whether the field holds no cells.
    pub fn is_empty(&self) -> bool {
        self.cell.is_empty()
    }

    fn check(&self, name: &'static str, expected: usize) -> Result<(), FieldError> {
        for len in [self.cell.len(), self.left.len(), self.right.len()] {
            if len != expected {
                return Err(FieldError::ShapeMismatch {
                    field: name,
                    expected,
                    got: len,
                });
            }
        }
        Ok(())
    }
}

/// The three conserved fields of the 1D Euler system.
///
/// Construction validates that all nine sequences share one length and
/// that the grid has at least one interior interface. After that the
/// accessors index without further checks.
#[derive(Clone, Debug)]
pub struct EulerFields {
    /// Density ρ
    pub rho: FieldData,
    /// Momentum density ρu
    pub rho_u: FieldData,
    /// Total energy density ρE
    pub rho_e: FieldData,
}

impl EulerFields {
    /// Assemble the system from its three fields.
    pub fn new(rho: FieldData, rho_u: FieldData, rho_e: FieldData) -> Result<Self, FieldError> {
        let n = rho.cell.len();
        if n < 3 {
            return Err(FieldError::TooShort { n });
        }
        rho.check("density", n)?;
        rho_u.check("momentum", n)?;
        rho_e.check("energy", n)?;
        Ok(Self { rho, rho_u, rho_e })
    }

    /// Build the system from per-cell values, with zeroed interface
    /// sequences.
    pub fn from_cells(
        rho: Vec<f64>,
        rho_u: Vec<f64>,
        rho_e: Vec<f64>,
    ) -> Result<Self, FieldError> {
        Self::new(
            FieldData::from_cells(rho),
            FieldData::from_cells(rho_u),
            FieldData::from_cells(rho_e),
        )
    }

    /// Number of cells (equal to the number of interfaces).
    pub fn n_cells(&self) -> usize {
        self.rho.cell.len()
    }

    /// Conserved state of cell `i`.
    pub fn cell_state(&self, i: usize) -> EulerState {
        EulerState::new(self.rho.cell[i], self.rho_u.cell[i], self.rho_e.cell[i])
    }

    /// State reconstructed on the left side of interface `i`.
    pub fn left_state(&self, i: usize) -> EulerState {
        EulerState::new(self.rho.left[i], self.rho_u.left[i], self.rho_e.left[i])
    }

    /// State reconstructed on the right side of interface `i`.
    pub fn right_state(&self, i: usize) -> EulerState {
        EulerState::new(self.rho.right[i], self.rho_u.right[i], self.rho_e.right[i])
    }

    /// First-order interface population: `left[i] = cell[i − 1]`,
    /// `right[i] = cell[i]`.
    ///
    /// The ghost interface 0 takes the first cell's value on both
    /// sides. Higher-order reconstruction belongs to the caller; this
    /// is the piecewise-constant baseline.
    pub fn reconstruct_piecewise_constant(&mut self) {
        for f in [&mut self.rho, &mut self.rho_u, &mut self.rho_e] {
            f.left[0] = f.cell[0];
            f.right[0] = f.cell[0];
            for i in 1..f.cell.len() {
                f.left[i] = f.cell[i - 1];
                f.right[i] = f.cell[i];
            }
        }
    }
}

/// Per-interface numerical fluxes for the three conserved fields.
///
/// Caller-owned output buffer of a sweep; reusable across time steps.
#[derive(Clone, Debug, Default)]
pub struct InterfaceFlux {
    /// Mass flux per interface.
    pub rho: Vec<f64>,
    /// Momentum flux per interface.
    pub rho_u: Vec<f64>,
    /// Energy flux per interface.
    pub rho_e: Vec<f64>,
}

impl InterfaceFlux {
    /// Create a zero-filled buffer for `n` interfaces.
    pub fn zeros(n: usize) -> Self {
        Self {
            rho: vec![0.0; n],
            rho_u: vec![0.0; n],
            rho_e: vec![0.0; n],
        }
    }

    /// Number of interfaces.
    pub fn len(&self) -> usize {
        self.rho.len()
    }

    /// Whether the buffer holds no interfaces.
    pub fn is_empty(&self) -> bool {
        self.rho.is_empty()
    }

    /// Flux triple at interface `i`.
    pub fn state(&self, i: usize) -> EulerState {
        EulerState::new(self.rho[i], self.rho_u[i], self.rho_e[i])
    }

    /// Write the flux triple at interface `i`.
    pub fn set(&mut self, i: usize, f: EulerState) {
        self.rho[i] = f.rho;
        self.rho_u[i] = f.rho_u;
        self.rho_e[i] = f.rho_e;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_short_grid() {
        let err = EulerFields::from_cells(vec![1.0; 2], vec![0.0; 2], vec![2.5; 2]);
        assert_eq!(err.unwrap_err(), FieldError::TooShort { n: 2 });
    }

    #[test]
    fn test_rejects_mismatched_lengths() {
        let err = EulerFields::from_cells(vec![1.0; 5], vec![0.0; 4], vec![2.5; 5]);
        assert_eq!(
            err.unwrap_err(),
            FieldError::ShapeMismatch {
                field: "momentum",
                expected: 5,
                got: 4
            }
        );
    }

    #[test]
    fn test_rejects_mismatched_interface_arrays() {
        let mut rho = FieldData::from_cells(vec![1.0; 5]);
        rho.left.pop();
        let err = EulerFields::new(
            rho,
            FieldData::from_cells(vec![0.0; 5]),
            FieldData::from_cells(vec![2.5; 5]),
        );
        assert!(matches!(
            err.unwrap_err(),
            FieldError::ShapeMismatch {
                field: "density",
                ..
            }
        ));
    }

    #[test]
    fn test_piecewise_constant_reconstruction() {
        let mut fields =
            EulerFields::from_cells(vec![1.0, 2.0, 3.0, 4.0], vec![0.0; 4], vec![2.5; 4])
                .unwrap();
        fields.reconstruct_piecewise_constant();

        // Interface i sits between cells i-1 and i.
        assert_eq!(fields.rho.left[2], 2.0);
        assert_eq!(fields.rho.right[2], 3.0);
        // Ghost interface takes the first cell on both sides.
        assert_eq!(fields.rho.left[0], 1.0);
        assert_eq!(fields.rho.right[0], 1.0);
    }

    #[test]
    fn test_flux_buffer_roundtrip() {
        let mut flux = InterfaceFlux::zeros(4);
        let f = EulerState::new(0.1, 1.0, 0.2);
        flux.set(2, f);
        assert_eq!(flux.state(2), f);
        assert_eq!(flux.state(1), EulerState::zero());
    }
}
