//! 1D compressible Euler equations.
//!
//! State vector: q = [ρ, ρu, ρE]
//! Flux: f(q) = [ρu, ρu² + p, u(ρE + p)]
//!
//! The flux components are exposed both as scalar functions (one per
//! conserved variable, taking exactly the quantities that variable's
//! flux depends on) and as a vector-valued method on [`Euler1D`].

use super::IdealGas;
use crate::solver::EulerState;

/// Mass flux F_ρ = ρu.
#[inline]
pub fn mass_flux(rho_u: f64) -> f64 {
    rho_u
}

/// Momentum flux F_ρu = ρu² + p.
#[inline]
pub fn momentum_flux(rho: f64, rho_u: f64, p: f64) -> f64 {
    rho_u * rho_u / rho + p
}

/// Energy flux F_ρE = u(ρE + p).
#[inline]
pub fn energy_flux(rho: f64, rho_u: f64, rho_e: f64, p: f64) -> f64 {
    rho_u / rho * (rho_e + p)
}

/// 1D compressible Euler equations with an ideal-gas closure.
///
/// Owns the pressure law and provides the flux and characteristic
/// information consumed by Riemann solvers and by the caller's CFL
/// computation.
#[derive(Clone, Copy, Debug)]
pub struct Euler1D {
    /// Ideal-gas pressure law.
    pub gas: IdealGas,
}

impl Euler1D {
    /// Create the equation set for the given gas.
    pub fn new(gas: IdealGas) -> Self {
        Self { gas }
    }

    /// Physical flux f(q).
    pub fn flux(&self, q: &EulerState) -> EulerState {
        let p = self.gas.pressure_of(q);
        EulerState::new(
            mass_flux(q.rho_u),
            momentum_flux(q.rho, q.rho_u, p),
            energy_flux(q.rho, q.rho_u, q.rho_e, p),
        )
    }

    /// Eigenvalues of the flux Jacobian: [u, u + c, u − c].
    pub fn eigenvalues(&self, q: &EulerState) -> [f64; 3] {
        let u = q.velocity();
        let c = self.gas.sound_speed(q.rho, self.gas.pressure_of(q));
        [u, u + c, u - c]
    }

    /// Maximum absolute wave speed |u| + c, for CFL computation.
    pub fn max_wave_speed(&self, q: &EulerState) -> f64 {
        let u = q.velocity();
        let c = self.gas.sound_speed(q.rho, self.gas.pressure_of(q));
        u.abs() + c
    }
}

impl Default for Euler1D {
    fn default() -> Self {
        Self::new(IdealGas::air())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-13;

    #[test]
    fn test_flux_matches_scalar_components() {
        let eqs = Euler1D::default();
        let q = EulerState::new(1.2, 0.9, 3.1);
        let p = eqs.gas.pressure_of(&q);

        let f = eqs.flux(&q);
        assert!((f.rho - mass_flux(q.rho_u)).abs() < TOL);
        assert!((f.rho_u - momentum_flux(q.rho, q.rho_u, p)).abs() < TOL);
        assert!((f.rho_e - energy_flux(q.rho, q.rho_u, q.rho_e, p)).abs() < TOL);
    }

    #[test]
    fn test_flux_gas_at_rest() {
        // At rest only the pressure term survives in the momentum flux.
        let eqs = Euler1D::default();
        let q = EulerState::new(1.0, 0.0, 2.5);

        let f = eqs.flux(&q);
        assert!(f.rho.abs() < TOL);
        assert!((f.rho_u - 1.0).abs() < TOL);
        assert!(f.rho_e.abs() < TOL);
    }

    #[test]
    fn test_eigenvalues_ordering() {
        let eqs = Euler1D::default();
        let q = EulerState::new(1.0, 0.5, 2.6);

        let [l1, l2, l3] = eqs.eigenvalues(&q);
        let u = q.velocity();
        assert!((l1 - u).abs() < TOL);
        assert!(l2 > l1 && l1 > l3);
        assert!((eqs.max_wave_speed(&q) - l2.abs().max(l3.abs())).abs() < TOL);
    }
}
