//! Roe approximate Riemann solver for the 1D Euler equations.
//!
//! The Roe solver linearizes the Riemann problem at each interface
//! using density-square-root-weighted averages:
//!
//! F* = 0.5 * (F_L + F_R) - 0.5 * Σ λ_i * α_i * r_i
//!
//! where λ_i are the entropy-fixed characteristic speeds, α_i the wave
//! strengths, and r_i the right eigenvectors of the linearized flux
//! Jacobian. The entropy fix replaces |λ| by a quadratic near zero so
//! a vanishing characteristic speed cannot admit an expansion shock.
//!
//! Reference: Toro, "Riemann Solvers and Numerical Methods for Fluid
//! Dynamics", ch. 11.

use crate::equations::{IdealGas, energy_flux, mass_flux, momentum_flux};
use crate::solver::EulerState;

/// Harten entropy fix.
///
/// Returns the regularized magnitude of a characteristic speed:
/// - |alpha| < 2ε: alpha²/(4ε) + ε   (smooth quadratic, minimum ε)
/// - otherwise:    |alpha|
///
/// Both branches evaluate to exactly 2ε at |alpha| = 2ε, so the result
/// is continuous, and it is positive for every alpha and ε > 0.
#[inline]
pub fn harten(alpha: f64, epsilon: f64) -> f64 {
    if alpha.abs() < 2.0 * epsilon {
        alpha * alpha / (4.0 * epsilon) + epsilon
    } else {
        alpha.abs()
    }
}

/// Roe-averaged interface state.
///
/// Satisfies F(q_r) − F(q_l) = A(q̄) (q_r − q_l) for the linearized
/// Jacobian A evaluated at this state.
#[derive(Clone, Copy, Debug)]
pub struct RoeAverage {
    /// Averaged density ρ̄ = sqrt(ρ_l ρ_r)
    pub rho: f64,
    /// Averaged velocity ū
    pub u: f64,
    /// Averaged specific total enthalpy h̄
    pub h: f64,
    /// Averaged sound speed c̄ = sqrt((γ−1)(h̄ − ū²/2))
    pub c: f64,
}

/// Compute the Roe average of two interface states.
pub fn roe_average(q_l: &EulerState, q_r: &EulerState, gas: &IdealGas) -> RoeAverage {
    let sqrt_rho_l = q_l.rho.sqrt();
    let sqrt_rho_r = q_r.rho.sqrt();
    let w = sqrt_rho_l + sqrt_rho_r;

    let u = (q_l.velocity() * sqrt_rho_l + q_r.velocity() * sqrt_rho_r) / w;
    let h = (gas.enthalpy(q_l) * sqrt_rho_l + gas.enthalpy(q_r) * sqrt_rho_r) / w;
    let c = ((gas.gamma - 1.0) * (h - 0.5 * u * u)).sqrt();

    RoeAverage {
        rho: sqrt_rho_l * sqrt_rho_r,
        u,
        h,
        c,
    }
}

/// Characteristic jumps across an interface.
///
/// Returns [dw1, dw2, dw3] for the entropy wave and the two acoustic
/// waves:
///
/// dw1 = Δρ − Δp/c̄²
/// dw2 = Δu + Δp/(ρ̄c̄)
/// dw3 = Δu − Δp/(ρ̄c̄)
///
/// Scaled by ρ̄/2c̄ these reproduce the textbook acoustic wave
/// strengths (Δp ± ρ̄c̄Δu)/2c̄²; the assembly in [`roe_flux_euler`]
/// applies that factor together with the eigenvector components.
pub fn wave_strengths(
    q_l: &EulerState,
    q_r: &EulerState,
    gas: &IdealGas,
    avg: &RoeAverage,
) -> [f64; 3] {
    let du = q_r.velocity() - q_l.velocity();
    let dp = gas.pressure_of(q_r) - gas.pressure_of(q_l);

    [
        (q_r.rho - q_l.rho) - dp / (avg.c * avg.c),
        du + dp / (avg.rho * avg.c),
        du - dp / (avg.rho * avg.c),
    ]
}

/// Roe numerical flux with Harten entropy fix.
///
/// Computes the interface flux from the reconstructed left/right
/// conserved states as the arithmetic-mean physical flux minus the
/// characteristic dissipation.
///
/// # Arguments
/// * `q_l` - State reconstructed from the cell left of the interface
/// * `q_r` - State reconstructed from the cell right of the interface
/// * `gas` - Ideal-gas pressure law
/// * `epsilon` - Entropy-fix threshold
///
/// Degenerate inputs (vacuum, non-positive density) are not trapped;
/// NaN/inf propagate into the result per the upstream-precondition
/// contract.
pub fn roe_flux_euler(
    q_l: &EulerState,
    q_r: &EulerState,
    gas: &IdealGas,
    epsilon: f64,
) -> EulerState {
    let p_l = gas.pressure_of(q_l);
    let p_r = gas.pressure_of(q_r);

    let avg = roe_average(q_l, q_r, gas);
    let [dw1, dw2, dw3] = wave_strengths(q_l, q_r, gas, &avg);

    // Entropy-fixed characteristic speeds (magnitudes).
    let lambda_1 = harten(avg.u, epsilon);
    let lambda_2 = harten(avg.u + avg.c, epsilon);
    let lambda_3 = harten(avg.u - avg.c, epsilon);

    // Acoustic wave-strength factor ρ̄/2c̄ shared by the u±c waves.
    let w = avg.rho / (2.0 * avg.c);

    let f_rho = 0.5 * (mass_flux(q_r.rho_u) + mass_flux(q_l.rho_u))
        - 0.5 * (lambda_1 * dw1 + lambda_2 * w * dw2 - lambda_3 * w * dw3);

    let f_rho_u = 0.5
        * (momentum_flux(q_r.rho, q_r.rho_u, p_r) + momentum_flux(q_l.rho, q_l.rho_u, p_l))
        - 0.5
            * (lambda_1 * dw1 * avg.u
                + lambda_2 * w * dw2 * (avg.u + avg.c)
                - lambda_3 * w * dw3 * (avg.u - avg.c));

    let f_rho_e = 0.5
        * (energy_flux(q_r.rho, q_r.rho_u, q_r.rho_e, p_r)
            + energy_flux(q_l.rho, q_l.rho_u, q_l.rho_e, p_l))
        - 0.5
            * (lambda_1 * dw1 * (0.5 * avg.u * avg.u)
                + lambda_2 * w * dw2 * (avg.h + avg.c * avg.u)
                - lambda_3 * w * dw3 * (avg.h - avg.c * avg.u));

    EulerState::new(f_rho, f_rho_u, f_rho_e)
}
