//! Ideal-gas equation of state.
//!
//! Closes the Euler system by relating pressure to the conserved
//! variables:
//!
//! p = (γ − 1) (ρE − (ρu)² / 2ρ)
//!
//! where γ is the ratio of specific heats. All other thermodynamic
//! quantities used by the flux kernels (sound speed, specific total
//! enthalpy) derive from this relation.
//!
//! # Units
//!
//! The crate is unit-agnostic: any consistent set works. The classic
//! shock-tube test cases are posed in nondimensional units.

use thiserror::Error;

use crate::solver::EulerState;

/// Ratio of specific heats for a diatomic gas (air).
pub const GAMMA_AIR: f64 = 1.4;

/// Error type for equation-of-state construction.
#[derive(Debug, Error, PartialEq)]
pub enum EquationError {
    /// Ratio of specific heats must be finite and greater than one.
    #[error("ratio of specific heats must be finite and > 1, got {0}")]
    InvalidGamma(f64),
}

/// Ideal-gas pressure law parameterized by the ratio of specific heats.
///
/// # Example
///
/// ```
/// use euler_rs::IdealGas;
///
/// let gas = IdealGas::air();
/// // Uniform gas at rest: rho = 1, rho*u = 0, rho*E = 2.5
/// let p = gas.pressure(1.0, 0.0, 2.5);
/// assert!((p - 1.0).abs() < 1e-14);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IdealGas {
    /// Ratio of specific heats γ (> 1).
    pub gamma: f64,
}

impl IdealGas {
    /// Create a pressure law with the given ratio of specific heats.
    ///
    /// Rejects a non-finite gamma or one at/below unity, for which the
    /// sound speed is undefined.
    pub fn new(gamma: f64) -> Result<Self, EquationError> {
        if !gamma.is_finite() || gamma <= 1.0 {
            return Err(EquationError::InvalidGamma(gamma));
        }
        Ok(Self { gamma })
    }

    /// Diatomic gas, γ = 1.4.
    pub fn air() -> Self {
        Self { gamma: GAMMA_AIR }
    }

    /// Pressure from the conserved variables.
    ///
    /// p = (γ − 1)(ρE − (ρu)²/2ρ). No positivity guard: a vacuum or
    /// otherwise non-physical state propagates NaN/inf to the caller.
    pub fn pressure(&self, rho: f64, rho_u: f64, rho_e: f64) -> f64 {
        (self.gamma - 1.0) * (rho_e - 0.5 * rho_u * rho_u / rho)
    }

    /// Pressure of a conserved state.
    pub fn pressure_of(&self, q: &EulerState) -> f64 {
        self.pressure(q.rho, q.rho_u, q.rho_e)
    }

    /// Sound speed c = sqrt(γ p / ρ).
    pub fn sound_speed(&self, rho: f64, p: f64) -> f64 {
        (self.gamma * p / rho).sqrt()
    }

    /// Specific total enthalpy H = (ρE + p) / ρ.
    pub fn enthalpy(&self, q: &EulerState) -> f64 {
        (q.rho_e + self.pressure_of(q)) / q.rho
    }

    /// Total energy density from primitive variables.
    ///
    /// ρE = p/(γ − 1) + ρu²/2
    pub fn total_energy(&self, rho: f64, u: f64, p: f64) -> f64 {
        p / (self.gamma - 1.0) + 0.5 * rho * u * u
    }
}

impl Default for IdealGas {
    fn default() -> Self {
        Self::air()
    }
}
