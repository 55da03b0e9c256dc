use std::fmt;

use crate::error::{CatalogError, Result};

/// Characteristic strength values, in N/mm².
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrengthProperties {
    /// Bending strength `f_m,k`.
    pub bending: f64,
    /// Tension parallel to grain `f_t,0,k`.
    pub tension_parallel: f64,
    /// Tension perpendicular to grain `f_t,90,k`.
    pub tension_perpendicular: f64,
    /// Compression parallel to grain `f_c,0,k`.
    pub compression_parallel: f64,
    /// Compression perpendicular to grain `f_c,90,k`.
    pub compression_perpendicular: f64,
    /// Shear strength `f_v,k`.
    pub shear: f64,
    /// Rolling shear strength `f_r,k`.
    pub rolling_shear: f64,
}

/// Elastic and shear moduli, in N/mm².
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StiffnessProperties {
    pub e_0_mean: f64,
    pub e_0_05: f64,
    pub e_90_mean: f64,
    pub e_90_05: f64,
    pub g_mean: f64,
    pub g_05: f64,
    pub g_rolling_mean: f64,
    pub g_rolling_05: f64,
}

/// Densities, in kg/m³.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DensityProperties {
    /// Characteristic density.
    pub characteristic: f64,
    /// Mean density.
    pub mean: f64,
}

/// Structural material of an element.
///
/// The default is glulam strength class GL26.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialProperty {
    pub name: String,
    pub class: String,
    pub strength: StrengthProperties,
    pub stiffness: StiffnessProperties,
    pub density: DensityProperties,
}

impl MaterialProperty {
    /// Creates a new material.
    ///
    /// # Errors
    ///
    /// Returns an error if any strength, stiffness or density value is not
    /// positive and finite.
    pub fn new(
        name: impl Into<String>,
        class: impl Into<String>,
        strength: StrengthProperties,
        stiffness: StiffnessProperties,
        density: DensityProperties,
    ) -> Result<Self> {
        let s = &strength;
        let k = &stiffness;
        let checks = [
            ("f_m,k", s.bending),
            ("f_t,0,k", s.tension_parallel),
            ("f_t,90,k", s.tension_perpendicular),
            ("f_c,0,k", s.compression_parallel),
            ("f_c,90,k", s.compression_perpendicular),
            ("f_v,k", s.shear),
            ("f_r,k", s.rolling_shear),
            ("E_0,mean", k.e_0_mean),
            ("E_0,05", k.e_0_05),
            ("E_90,mean", k.e_90_mean),
            ("E_90,05", k.e_90_05),
            ("G_mean", k.g_mean),
            ("G_05", k.g_05),
            ("G_r,mean", k.g_rolling_mean),
            ("G_r,05", k.g_rolling_05),
            ("rho_k", density.characteristic),
            ("rho_mean", density.mean),
        ];
        if let Some((property, value)) = checks
            .into_iter()
            .find(|(_, v)| !(v.is_finite() && *v > 0.0))
        {
            return Err(CatalogError::NonPositiveProperty { property, value }.into());
        }

        Ok(Self {
            name: name.into(),
            class: class.into(),
            strength,
            stiffness,
            density,
        })
    }
}

impl Default for MaterialProperty {
    fn default() -> Self {
        Self {
            name: "Glulam".to_owned(),
            class: "GL26".to_owned(),
            strength: StrengthProperties {
                bending: 26.0,
                tension_parallel: 19.0,
                tension_perpendicular: 0.5,
                compression_parallel: 23.5,
                compression_perpendicular: 2.5,
                shear: 3.5,
                rolling_shear: 1.2,
            },
            stiffness: StiffnessProperties {
                e_0_mean: 12_000.0,
                e_0_05: 10_000.0,
                e_90_mean: 300.0,
                e_90_05: 250.0,
                g_mean: 650.0,
                g_05: 542.0,
                g_rolling_mean: 65.0,
                g_rolling_05: 54.0,
            },
            density: DensityProperties {
                characteristic: 385.0,
                mean: 420.0,
            },
        }
    }
}

impl fmt::Display for MaterialProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<MaterialProperty> {} ({})", self.name, self.class)
    }
}
