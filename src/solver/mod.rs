//! State containers and the full-grid Roe flux sweep.
//!
//! - [`EulerState`]: one conserved state (ρ, ρu, ρE)
//! - [`FieldData`], [`EulerFields`]: per-cell values plus reconstructed
//!   left/right interface values for the three conserved fields
//! - [`InterfaceFlux`]: caller-owned per-interface flux buffer
//! - [`RoeConfig`], [`RoeSolver`]: entropy-fix configuration and the
//!   sweep that fills the flux buffer

mod fields;
mod state;
mod sweep;

pub use fields::{EulerFields, FieldData, FieldError, InterfaceFlux};
pub use state::EulerState;
pub use sweep::{ConfigError, DEFAULT_EPSILON, RoeConfig, RoeSolver};
