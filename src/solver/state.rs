//! Conserved state for the 1D Euler equations.
//!
//! State vector (ρ, ρu, ρE) where:
//! - ρ  = density
//! - ρu = momentum density
//! - ρE = total energy density (internal + kinetic)

use std::ops::{Add, Mul, Sub};

/// Euler conserved state: (ρ, ρu, ρE).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EulerState {
    /// Density ρ
    pub rho: f64,
    /// Momentum density ρu
    pub rho_u: f64,
    /// Total energy density ρE
    pub rho_e: f64,
}

impl EulerState {
    /// Create a new conserved state.
    pub fn new(rho: f64, rho_u: f64, rho_e: f64) -> Self {
        Self { rho, rho_u, rho_e }
    }

    /// Build a conserved state from primitive variables (ρ, u, p).
    ///
    /// The total energy closes as ρE = p/(γ − 1) + ρu²/2.
    pub fn from_primitives(rho: f64, u: f64, p: f64, gamma: f64) -> Self {
        Self {
            rho,
            rho_u: rho * u,
            rho_e: p / (gamma - 1.0) + 0.5 * rho * u * u,
        }
    }

    /// Velocity u = ρu / ρ.
    ///
    /// No vacuum guard: ρ = 0 yields NaN/inf, surfacing a non-physical
    /// upstream state instead of masking it.
    pub fn velocity(&self) -> f64 {
        self.rho_u / self.rho
    }

    /// Specific total energy e = ρE / ρ.
    pub fn specific_energy(&self) -> f64 {
        self.rho_e / self.rho
    }

    /// Create a zero state.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Convert to array representation [ρ, ρu, ρE].
    pub fn to_array(&self) -> [f64; 3] {
        [self.rho, self.rho_u, self.rho_e]
    }

    /// Create from array representation [ρ, ρu, ρE].
    pub fn from_array(arr: [f64; 3]) -> Self {
        Self {
            rho: arr[0],
            rho_u: arr[1],
            rho_e: arr[2],
        }
    }
}

impl Add for EulerState {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            rho: self.rho + other.rho,
            rho_u: self.rho_u + other.rho_u,
            rho_e: self.rho_e + other.rho_e,
        }
    }
}

impl Sub for EulerState {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            rho: self.rho - other.rho,
            rho_u: self.rho_u - other.rho_u,
            rho_e: self.rho_e - other.rho_e,
        }
    }
}

impl Mul<f64> for EulerState {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self {
            rho: self.rho * scalar,
            rho_u: self.rho_u * scalar,
            rho_e: self.rho_e * scalar,
        }
    }
}

impl Mul<EulerState> for f64 {
    type Output = EulerState;

    fn mul(self, state: EulerState) -> EulerState {
        state * self
    }
}
