//! Numerical flux functions.
//!
//! Per-interface flux kernels for the finite-volume scheme:
//! - [`roe_flux_euler`]: Roe approximate Riemann solver with Harten
//!   entropy fix
//! - [`roe_average`], [`wave_strengths`], [`harten`]: the kernel's
//!   stages, exposed for testing and for callers that need the
//!   linearized state (e.g. characteristic-based limiters)

mod roe;

pub use roe::{RoeAverage, harten, roe_average, roe_flux_euler, wave_strengths};
