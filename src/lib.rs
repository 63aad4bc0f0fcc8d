//! # euler-rs
//!
//! A finite-volume flux core for the 1D compressible Euler equations.
//!
//! This crate provides the interface-flux stage of a finite-volume
//! time-marching scheme:
//! - Ideal-gas equation of state (pressure, sound speed, enthalpy)
//! - Physical flux functions for mass, momentum, and total energy
//! - Roe approximate Riemann solver with Harten entropy fix
//! - Grid containers for reconstructed left/right interface states
//! - A full-grid sweep producing one numerical flux per interface
//!
//! Grid generation, physical boundary conditions, high-order
//! reconstruction, and time integration are left to the caller; the
//! sweep consumes pre-populated interface states and writes fluxes into
//! a caller-owned buffer.

pub mod equations;
pub mod flux;
pub mod solver;

// Re-export main types for convenience
pub use equations::{
    EquationError, Euler1D, GAMMA_AIR, IdealGas, energy_flux, mass_flux, momentum_flux,
};
pub use flux::{RoeAverage, harten, roe_average, roe_flux_euler, wave_strengths};
pub use solver::{
    ConfigError, DEFAULT_EPSILON, EulerFields, EulerState, FieldData, FieldError, InterfaceFlux,
    RoeConfig, RoeSolver,
};
