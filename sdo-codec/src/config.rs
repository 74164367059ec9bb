//! Codec options.

use serde::{Deserialize, Serialize};

use crate::error::SdoError;
use sdo_types::DEFAULT_ARC_SEGMENTS;

/// When the encoder stores axis-aligned rectangular polygons as two corner points.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RectanglePolicy {
    /// Every qualifying polygon.
    #[default]
    Always,
    /// Only polygons without a spatial reference identifier.
    SridLess,
    /// Never, rings are always written in full.
    Never,
}

/// Options of the encoder and the decoder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Write single unmeasured points into the POINT field instead of the ordinate array.
    pub point_shortcut: bool,
    /// Rectangle optimization policy.
    pub rectangles: RectanglePolicy,
    /// Number of segments per arc used when decoded curves are linearized.
    pub arc_segments: usize,
    /// Decode elements without a counterpart in the geometry model as absent instead of failing.
    pub skip_unrepresentable: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            point_shortcut: true,
            rectangles: RectanglePolicy::Always,
            arc_segments: DEFAULT_ARC_SEGMENTS,
            skip_unrepresentable: true,
        }
    }
}

impl CodecConfig {
    /// Parses configuration from JSON. Missing fields take default values.
    pub fn from_json(json: &str) -> Result<Self, SdoError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Sets [`CodecConfig::point_shortcut`].
    pub fn with_point_shortcut(mut self, point_shortcut: bool) -> Self {
        self.point_shortcut = point_shortcut;
        self
    }

    /// Sets [`CodecConfig::rectangles`].
    pub fn with_rectangles(mut self, rectangles: RectanglePolicy) -> Self {
        self.rectangles = rectangles;
        self
    }

    /// Sets [`CodecConfig::arc_segments`].
    pub fn with_arc_segments(mut self, arc_segments: usize) -> Self {
        self.arc_segments = arc_segments;
        self
    }

    /// Sets [`CodecConfig::skip_unrepresentable`].
    pub fn with_skip_unrepresentable(mut self, skip: bool) -> Self {
        self.skip_unrepresentable = skip;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn json_with_defaults() {
        let config = CodecConfig::from_json(r#"{"rectangles": "srid_less", "arc_segments": 8}"#)
            .unwrap();
        assert_eq!(
            config,
            CodecConfig::default()
                .with_rectangles(RectanglePolicy::SridLess)
                .with_arc_segments(8)
        );
        assert!(config.point_shortcut);

        assert_eq!(CodecConfig::from_json("{}").unwrap(), CodecConfig::default());
    }

    #[test]
    fn invalid_json() {
        assert_matches!(
            CodecConfig::from_json(r#"{"rectangles": "sometimes"}"#),
            Err(SdoError::Config(_))
        );
    }

    #[test]
    fn serialize_round_trip() {
        let config = CodecConfig::default()
            .with_point_shortcut(false)
            .with_skip_unrepresentable(false);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(CodecConfig::from_json(&json).unwrap(), config);
    }
}
