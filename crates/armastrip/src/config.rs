//! Fastener parameters and their TOML configuration file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use armastrip_cutter::{hex_circumradius, HoleShape};
use armastrip_holes::SelectionMode;
use armastrip_strip::StripParams;

use crate::error::{FastenerError, Result};

/// Which face of the target part a nut pocket is sunk into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PocketSide {
    /// From the highest Z face downward.
    #[default]
    Top,
    /// From the lowest Z face upward.
    Bottom,
}

/// Bolt hole parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoltHoleParams {
    /// Nominal bolt diameter (mm).
    pub bolt_diameter: f64,
    /// Extra diameter added to the nominal size (mm).
    pub clearance: f64,
    /// Cross-section of the hole.
    pub shape: HoleShape,
    /// Which strip holes get a bolt hole.
    pub selection: SelectionMode,
    /// Margin past each face of the part so the cut goes fully through (mm).
    pub z_extra: f64,
    /// Distance under which strip circles are merged into one hole (mm).
    pub center_tol: f64,
    /// Return the cutters without subtracting them.
    pub preview: bool,
}

impl Default for BoltHoleParams {
    fn default() -> Self {
        Self {
            bolt_diameter: 3.2,
            clearance: 0.0,
            shape: HoleShape::Round,
            selection: SelectionMode::All,
            z_extra: 1.0,
            center_tol: 0.1,
            preview: false,
        }
    }
}

impl BoltHoleParams {
    /// Effective hole radius: `(diameter + clearance) / 2`.
    pub fn hole_radius(&self) -> f64 {
        (self.bolt_diameter + self.clearance) / 2.0
    }

    /// Validate parameters.
    pub fn validate(&self) -> Result<()> {
        positive("bolt_diameter", self.bolt_diameter)?;
        non_negative("clearance", self.clearance)?;
        non_negative("z_extra", self.z_extra)?;
        non_negative("center_tol", self.center_tol)?;
        if let HoleShape::Teardrop { steps, .. } = self.shape {
            if steps < 1 {
                return Err(FastenerError::InvalidParameter(
                    "teardrop steps must be >= 1".into(),
                ));
            }
        }
        Ok(())
    }
}

/// Hex nut pocket parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NutPocketParams {
    /// Nut width across flats (mm).
    pub nut_across_flats: f64,
    /// Extra width added across flats (mm).
    pub clearance: f64,
    /// Pocket depth below the chosen face (mm).
    pub depth: f64,
    /// Face the pocket is cut from.
    pub side: PocketSide,
    /// Overcut past the face along Z (mm).
    pub offset: f64,
    /// Which strip holes get a pocket.
    pub selection: SelectionMode,
    /// Distance under which strip circles are merged into one hole (mm).
    pub center_tol: f64,
    /// Return the cutters without subtracting them.
    pub preview: bool,
}

impl Default for NutPocketParams {
    fn default() -> Self {
        Self {
            nut_across_flats: 5.5,
            clearance: 0.0,
            depth: 2.5,
            side: PocketSide::Top,
            offset: 0.0,
            selection: SelectionMode::All,
            center_tol: 0.1,
            preview: false,
        }
    }
}

impl NutPocketParams {
    /// Circumradius of the pocket hexagon.
    pub fn circumradius(&self) -> f64 {
        hex_circumradius(self.nut_across_flats + self.clearance)
    }

    /// Validate parameters.
    pub fn validate(&self) -> Result<()> {
        positive("nut_across_flats", self.nut_across_flats)?;
        non_negative("clearance", self.clearance)?;
        positive("depth", self.depth)?;
        non_negative("offset", self.offset)?;
        non_negative("center_tol", self.center_tol)
    }
}

/// Every tunable in one file.
///
/// ```toml
/// [strip]
/// hole_pitch = 15.0
/// layout = { mode = "length", length = 90.0 }
///
/// [bolt_holes]
/// bolt_diameter = 3.2
/// selection = { mode = "step", every_n = 3, start_index = 1 }
///
/// [nut_pockets]
/// side = "bottom"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FastenerConfig {
    /// Strip layout.
    pub strip: StripParams,
    /// Bolt hole cutting.
    pub bolt_holes: BoltHoleParams,
    /// Nut pocket cutting.
    pub nut_pockets: NutPocketParams,
}

impl FastenerConfig {
    /// Parse and validate a TOML document. Missing keys take defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Serialize to TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| FastenerError::Config(e.to_string()))
    }

    /// Validate every section.
    pub fn validate(&self) -> Result<()> {
        self.strip.validate()?;
        self.bolt_holes.validate()?;
        self.nut_pockets.validate()
    }
}

fn positive(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(FastenerError::InvalidParameter(format!(
            "{name} must be finite and > 0, got {value}"
        )));
    }
    Ok(())
}

fn non_negative(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(FastenerError::InvalidParameter(format!(
            "{name} must be finite and >= 0, got {value}"
        )));
    }
    Ok(())
}
