//! Full-grid Roe flux sweep.
//!
//! Evaluates the Roe kernel at every interior interface and duplicates
//! the first/last interior flux into the ghost slots, writing a
//! caller-owned [`InterfaceFlux`] buffer. Interfaces are independent,
//! so a rayon-parallel sweep is available behind the `parallel`
//! feature; it produces bitwise-identical results.

use thiserror::Error;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::equations::IdealGas;
use crate::flux::roe_flux_euler;

use super::{EulerFields, EulerState, FieldError, InterfaceFlux};

/// Default entropy-fix threshold.
pub const DEFAULT_EPSILON: f64 = 0.15;

/// Error type for solver configuration.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// Entropy-fix threshold must be a positive finite value.
    #[error("entropy-fix threshold must be positive and finite, got {0}")]
    InvalidEpsilon(f64),
}

/// Roe solver configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoeConfig {
    /// Entropy-fix threshold ε; eigenvalues with magnitude below 2ε are
    /// regularized.
    pub epsilon: f64,
}

impl RoeConfig {
    /// Create a configuration with the given entropy-fix threshold.
    ///
    /// The quadratic branch of the fix divides by ε, so zero, negative,
    /// and non-finite thresholds are rejected.
    pub fn new(epsilon: f64) -> Result<Self, ConfigError> {
        if !epsilon.is_finite() || epsilon <= 0.0 {
            return Err(ConfigError::InvalidEpsilon(epsilon));
        }
        Ok(Self { epsilon })
    }
}

impl Default for RoeConfig {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
        }
    }
}

/// Roe flux evaluator for the whole grid.
///
/// # Example
///
/// ```
/// use euler_rs::{EulerFields, IdealGas, InterfaceFlux, RoeSolver};
///
/// let mut fields = EulerFields::from_cells(
///     vec![1.0; 5],
///     vec![0.0; 5],
///     vec![2.5; 5],
/// ).unwrap();
/// fields.reconstruct_piecewise_constant();
///
/// let solver = RoeSolver::with_default_fix(IdealGas::air());
/// let mut flux = InterfaceFlux::zeros(fields.n_cells());
/// solver.compute_fluxes(&fields, &mut flux).unwrap();
///
/// // Uniform gas at rest: only the pressure survives, in the momentum flux.
/// assert!((flux.rho_u[2] - 1.0).abs() < 1e-14);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct RoeSolver {
    gas: IdealGas,
    config: RoeConfig,
}

impl RoeSolver {
    /// Create a solver from a pressure law and configuration.
    pub fn new(gas: IdealGas, config: RoeConfig) -> Self {
        Self { gas, config }
    }

    /// Create a solver with the default entropy-fix threshold.
    pub fn with_default_fix(gas: IdealGas) -> Self {
        Self::new(gas, RoeConfig::default())
    }

    /// The solver's pressure law.
    pub fn gas(&self) -> &IdealGas {
        &self.gas
    }

    /// The entropy-fix threshold in use.
    pub fn epsilon(&self) -> f64 {
        self.config.epsilon
    }

    /// Compute the numerical flux at every interface.
    ///
    /// Sweeps the interior interfaces `1..=n−2`, evaluating the Roe
    /// kernel on the reconstructed left/right states, then fills the
    /// ghost slots by duplication: `f[0] = f[1]`, `f[n−1] = f[n−2]`.
    ///
    /// Fails before any write if the buffer length does not match the
    /// fields. The interface states must be populated beforehand (by
    /// the caller's reconstruction or
    /// [`EulerFields::reconstruct_piecewise_constant`]).
    pub fn compute_fluxes(
        &self,
        fields: &EulerFields,
        flux: &mut InterfaceFlux,
    ) -> Result<(), FieldError> {
        let n = self.check_buffer(fields, flux)?;

        for i in 1..n - 1 {
            flux.set(i, self.interface_flux(fields, i));
        }

        duplicate_ghost_fluxes(flux, n);
        Ok(())
    }

    /// Parallel variant of [`RoeSolver::compute_fluxes`].
    ///
    /// Interior interfaces are independent, so they are evaluated with
    /// rayon and scattered into the buffer; the ghost duplication then
    /// runs as in the serial sweep. Results are bitwise identical.
    #[cfg(feature = "parallel")]
    pub fn compute_fluxes_parallel(
        &self,
        fields: &EulerFields,
        flux: &mut InterfaceFlux,
    ) -> Result<(), FieldError> {
        let n = self.check_buffer(fields, flux)?;

        let interior: Vec<EulerState> = (1..n - 1)
            .into_par_iter()
            .map(|i| self.interface_flux(fields, i))
            .collect();
        for (k, f) in interior.into_iter().enumerate() {
            flux.set(k + 1, f);
        }

        duplicate_ghost_fluxes(flux, n);
        Ok(())
    }

    fn interface_flux(&self, fields: &EulerFields, i: usize) -> EulerState {
        roe_flux_euler(
            &fields.left_state(i),
            &fields.right_state(i),
            &self.gas,
            self.config.epsilon,
        )
    }

    fn check_buffer(
        &self,
        fields: &EulerFields,
        flux: &InterfaceFlux,
    ) -> Result<usize, FieldError> {
        let n = fields.n_cells();
        if n < 3 {
            return Err(FieldError::TooShort { n });
        }
        for len in [flux.rho.len(), flux.rho_u.len(), flux.rho_e.len()] {
            if len != n {
                return Err(FieldError::BufferMismatch {
                    fields: n,
                    buffer: len,
                });
            }
        }
        Ok(n)
    }
}

/// Zero-gradient treatment on the flux array: the ghost slots take the
/// adjacent interior flux.
fn duplicate_ghost_fluxes(flux: &mut InterfaceFlux, n: usize) {
    let first = flux.state(1);
    let last = flux.state(n - 2);
    flux.set(0, first);
    flux.set(n - 1, last);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_rejects_bad_epsilon() {
        assert_eq!(
            RoeConfig::new(0.0),
            Err(ConfigError::InvalidEpsilon(0.0))
        );
        assert!(RoeConfig::new(-0.1).is_err());
        assert!(RoeConfig::new(f64::NAN).is_err());
        assert!(RoeConfig::new(f64::INFINITY).is_err());
        assert_eq!(RoeConfig::new(0.15).unwrap(), RoeConfig::default());
    }

    #[test]
    fn test_rejects_mismatched_buffer() {
        let fields =
            EulerFields::from_cells(vec![1.0; 5], vec![0.0; 5], vec![2.5; 5]).unwrap();
        let solver = RoeSolver::with_default_fix(IdealGas::air());

        let mut flux = InterfaceFlux::zeros(4);
        let err = solver.compute_fluxes(&fields, &mut flux).unwrap_err();
        assert_eq!(
            err,
            FieldError::BufferMismatch {
                fields: 5,
                buffer: 4
            }
        );
    }

    #[test]
    fn test_ghost_fluxes_duplicate_interior() {
        let rho = vec![1.0, 0.8, 0.6, 0.5, 0.4];
        let rho_e = vec![2.5, 2.2, 2.0, 1.9, 1.8];
        let mut fields = EulerFields::from_cells(rho, vec![0.0; 5], rho_e).unwrap();
        fields.reconstruct_piecewise_constant();

        let solver = RoeSolver::with_default_fix(IdealGas::air());
        let mut flux = InterfaceFlux::zeros(5);
        solver.compute_fluxes(&fields, &mut flux).unwrap();

        assert_eq!(flux.state(0), flux.state(1));
        assert_eq!(flux.state(4), flux.state(3));
    }
}
