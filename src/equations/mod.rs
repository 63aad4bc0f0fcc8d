//! Physical model for the 1D compressible Euler equations.
//!
//! The system evolves three conserved variables:
//!
//! ∂ρ/∂t  + ∂(ρu)/∂x = 0                 (mass)
//! ∂(ρu)/∂t + ∂(ρu² + p)/∂x = 0          (momentum)
//! ∂(ρE)/∂t + ∂(u(ρE + p))/∂x = 0        (total energy)
//!
//! closed by the ideal-gas pressure law p = (γ−1)(ρE − ρu²/2).

mod euler;
mod ideal_gas;

pub use euler::{Euler1D, energy_flux, mass_flux, momentum_flux};
pub use ideal_gas::{EquationError, GAMMA_AIR, IdealGas};
