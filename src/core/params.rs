use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::PageSize;

/// Margin applied to all four page edges.
pub const ZERO_MARGIN: &str = "0.0in";

/// Default badge width in centimeters.
pub const DEFAULT_WIDTH_CM: f64 = 8.5;

/// Default badge height in centimeters.
pub const DEFAULT_HEIGHT_CM: f64 = 5.4;

/// Layout options applied identically to every rendered row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderOptions {
    pub page_size: PageSize,
    /// Page width in cm; only honoured for `PageSize::Custom`
    pub width_cm: f64,
    /// Page height in cm; only honoured for `PageSize::Custom`
    pub height_cm: f64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            page_size: PageSize::default(),
            width_cm: DEFAULT_WIDTH_CM,
            height_cm: DEFAULT_HEIGHT_CM,
        }
    }
}

impl RenderOptions {
    /// Width and height must be positive only for `PageSize::Custom`;
    /// named presets ignore them.
    pub fn new(page_size: PageSize, width_cm: f64, height_cm: f64) -> Result<Self> {
        for (arg, value) in [("width", width_cm), ("height", height_cm)] {
            if page_size.is_custom() && (!value.is_finite() || value <= 0.0) {
                return Err(Error::InvalidArgument {
                    arg,
                    value: value.to_string(),
                });
            }
        }
        Ok(Self {
            page_size,
            width_cm,
            height_cm,
        })
    }

    /// Backend flags for these options, in the order they are passed.
    /// Margins are always zero, outlines are off and local file access is on.
    pub fn to_backend_args(&self) -> Vec<String> {
        let mut args = vec!["--enable-local-file-access".to_string()];
        match &self.page_size {
            PageSize::Named(name) => {
                args.push("--page-size".to_string());
                args.push(name.clone());
            }
            PageSize::Custom => {
                args.push("--page-width".to_string());
                args.push(format!("{}cm", self.width_cm));
                args.push("--page-height".to_string());
                args.push(format!("{}cm", self.height_cm));
            }
        }
        for side in ["top", "right", "bottom", "left"] {
            args.push(format!("--margin-{}", side));
            args.push(ZERO_MARGIN.to_string());
        }
        args.push("--no-outline".to_string());
        args
    }
}
