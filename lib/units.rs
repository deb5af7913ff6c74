#![allow(non_upper_case_globals)]

//! Physical constants and conversions needed to put a potential energy surface
//! and a reduced mass into atomic units (Bohr radii/electron
//! masses/Hartrees) before solving.
//!
//! Concrete physical constants are taken from NIST.

use std::f64::consts::PI;

/// Planck constant (kg m^2 s^-1)
pub const h: f64 = 6.62607015e-34;
//             +/- 0 (exact)

/// reduced Planck constant (kg m^2 s^-1)
pub const hbar: f64 = h / 2.0 / PI;
//                +/- 0 (exact)

/// speed of light in vacuum (m s^-1)
pub const c: f64 = 2.99792458e8;
//             +/- 0 (exact)

/// electron mass (kg)
pub const me: f64 = 9.1093837015e-31;
//              +/- 0.0000000028e-31

/// unified atomic mass unit (kg)
pub const amu: f64 = 1.66053906660e-27;
//              +/- 0.00000000050e-27

/// Bohr radius (m)
pub const a0: f64 = 5.29177210903e-11;
//              +/- 0.00000000080e-11

/// Hartree energy (J) = 2\*Rinf\*h\*c
pub const Eh: f64 = 4.3597447222071e-18;
//              +/- 0.0000000000085e-18

/// electron volt (J)
pub const eV: f64 = 1.602176634e-19;
//              +/- 0 (exact)

/// Compute the reduced mass `m1 m2 / (m1 + m2)` of a two-body system.
pub fn reduced_mass(m1: f64, m2: f64) -> f64 {
    m1 * m2 / (m1 + m2)
}

/// Convert a mass in unified atomic mass units to electron masses.
pub fn amu_to_au(m: f64) -> f64 {
    m * amu / me
}

/// Convert a length in Ångströms to Bohr radii.
pub fn angstrom_to_bohr(x: f64) -> f64 {
    x * 1e-10 / a0
}

/// Convert an energy in Hartrees to wavenumbers (cm^-1).
pub fn hartree_to_wavenumber(e: f64) -> f64 {
    e * Eh / (h * c) / 100.0
}

/// Convert an energy in wavenumbers (cm^-1) to Hartrees.
pub fn wavenumber_to_hartree(k: f64) -> f64 {
    k * 100.0 * h * c / Eh
}

/// Convert an energy in Hartrees to electron volts.
pub fn hartree_to_ev(e: f64) -> f64 {
    e * Eh / eV
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions() {
        // 1 Eh ≈ 219474.63 cm^-1 ≈ 27.211386 eV
        assert!((hartree_to_wavenumber(1.0) - 219474.6313).abs() < 1e-3);
        assert!((hartree_to_ev(1.0) - 27.211386).abs() < 1e-5);
        assert!((wavenumber_to_hartree(hartree_to_wavenumber(0.37)) - 0.37).abs() < 1e-14);
        assert!((angstrom_to_bohr(1.0) - 1.8897261).abs() < 1e-6);
        // atomic mass unit and proton mass in electron masses
        assert!((amu / me - 1822.888486).abs() < 1e-5);
        assert!((amu_to_au(1.007276466621) - 1836.15267).abs() < 1e-3);
    }

    #[test]
    fn reduced_mass_symmetric() {
        assert!((reduced_mass(2.0, 2.0) - 1.0).abs() < 1e-15);
        assert_eq!(reduced_mass(1.0, 3.0), reduced_mass(3.0, 1.0));
    }
}
