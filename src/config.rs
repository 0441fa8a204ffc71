use serde::Deserialize;

use crate::error::{ConfigError, Result};

/// Startup options for a flow field. Every key is optional; missing keys take
/// the defaults below.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldConfig {
    /// Lattice bounding box, centred in the viewport.
    pub box_width: f64,
    pub box_height: f64,
    /// Distance between rows; column spacing follows from it.
    pub y_spacing: f64,
    /// Total length of each drawn segment.
    pub deflect_length: f64,
    pub line_width: f64,
    /// Off leaves previous frames on the canvas (trails).
    pub clear_each_frame: bool,
    /// Initial state of the glow toggle.
    pub glow: bool,
    pub glow_layers: Vec<GlowLayer>,
}

/// One additive glow composite drawn over the base strokes.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GlowLayer {
    pub width: f64,
    pub alpha: f64,
    pub blur: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            box_width: 250.0,
            box_height: 200.0,
            y_spacing: 50.0,
            deflect_length: 20.0,
            line_width: 1.0,
            clear_each_frame: true,
            glow: false,
            glow_layers: vec![
                GlowLayer {
                    width: 3.0,
                    alpha: 0.5,
                    blur: 6.0,
                },
                GlowLayer {
                    width: 1.5,
                    alpha: 1.0,
                    blur: 2.0,
                },
            ],
        }
    }
}

impl FieldConfig {
    /// Parse and validate an options object serialised as JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let cfg: FieldConfig = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        positive("boxWidth", self.box_width)?;
        positive("boxHeight", self.box_height)?;
        positive("ySpacing", self.y_spacing)?;
        positive("lineWidth", self.line_width)?;
        non_negative("deflectLength", self.deflect_length)?;
        for layer in &self.glow_layers {
            positive("glowLayers.width", layer.width)?;
            non_negative("glowLayers.blur", layer.blur)?;
            if !(0.0..=1.0).contains(&layer.alpha) {
                return Err(ConfigError::OutOfRange {
                    field: "glowLayers.alpha",
                    value: layer.alpha,
                    min: 0.0,
                    max: 1.0,
                }
                .into());
            }
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f64) -> std::result::Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f64) -> std::result::Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}
