//! Capture ratio negotiation.
//!
//! Cameras on some platforms let the app pick one of several picture aspect
//! ratios, reported as `"h:w"` strings (e.g. `"16:9"`). The preview should use
//! the one closest to the screen's own aspect so the live view fills the screen
//! without letterboxing.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error produced when a ratio string is not of the form `"h:w"`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RatioParseError {
    #[error("ratio `{0}` is not of the form h:w")]
    Malformed(String),
    #[error("ratio `{0}` has a non-positive or non-numeric component")]
    InvalidComponent(String),
}

/// A capture aspect ratio as exposed by the camera hardware.
///
/// The original label is kept so the exact string reported by the device can
/// be handed back to it.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptureRatio {
    label: String,
    height: f64,
    width: f64,
}

impl CaptureRatio {
    /// Decimal value `h / w`.
    pub fn value(&self) -> f64 {
        self.height / self.width
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl FromStr for CaptureRatio {
    type Err = RatioParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (h, w) = s
            .split_once(':')
            .ok_or_else(|| RatioParseError::Malformed(s.to_string()))?;
        let parse = |part: &str| -> Result<f64, RatioParseError> {
            let value: f64 = part
                .trim()
                .parse()
                .map_err(|_| RatioParseError::InvalidComponent(s.to_string()))?;
            if !value.is_finite() || value <= 0.0 {
                return Err(RatioParseError::InvalidComponent(s.to_string()));
            }
            Ok(value)
        };

        Ok(Self {
            label: s.trim().to_string(),
            height: parse(h)?,
            width: parse(w)?,
        })
    }
}

impl fmt::Display for CaptureRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Ratio chosen for the live camera view.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SelectedRatio {
    /// No negotiable ratio; the hardware default applies.
    #[default]
    Unset,
    Ratio(CaptureRatio),
}

impl SelectedRatio {
    pub fn as_ratio(&self) -> Option<&CaptureRatio> {
        match self {
            SelectedRatio::Unset => None,
            SelectedRatio::Ratio(ratio) => Some(ratio),
        }
    }
}

/// Physical screen size used to derive the target aspect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenMetrics {
    pub width: f64,
    pub height: f64,
}

impl ScreenMetrics {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// `height / width`, the same orientation as the `h:w` ratios.
    pub fn aspect(&self) -> f64 {
        self.height / self.width
    }
}

/// Pick the supported ratio closest to `screen_aspect`.
///
/// Ties keep the earliest candidate in input order. An empty list means the
/// platform exposes no negotiable ratio and yields [`SelectedRatio::Unset`].
pub fn negotiate_ratio(supported: &[CaptureRatio], screen_aspect: f64) -> SelectedRatio {
    let mut best: Option<(&CaptureRatio, f64)> = None;
    for ratio in supported {
        let distance = (ratio.value() - screen_aspect).abs();
        let closer = match best {
            None => true,
            Some((_, best_distance)) => distance < best_distance,
        };
        if closer {
            best = Some((ratio, distance));
        }
    }

    best.map(|(ratio, _)| SelectedRatio::Ratio(ratio.clone()))
        .unwrap_or(SelectedRatio::Unset)
}
