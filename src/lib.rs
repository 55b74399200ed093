//! Logstrain -- Logarithmic strain framework for finite strain solid mechanics
//!
//! This crate allows small-strain constitutive models, written in terms of the
//! Hencky strain E = ½ ln C and its dual stress T, to be used in finite-strain
//! analyses. The [handler::LogStrainHandler] computes the Hencky strain from the
//! deformation gradient and converts stresses and tangent moduli to and from the
//! second Piola-Kirchhoff (Lagrangian) or Cauchy (Eulerian) measures.

/// Defines a type alias for the error type as a static string
pub type StrError = &'static str;

pub mod base;
pub mod handler;
pub mod prelude;
pub mod tensile;
