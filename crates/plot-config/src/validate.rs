//! Plot config validation.

use plot_core::Real;

use crate::schema::{AxisBound, PlotConfig, PlotXAxisVal};

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Inverted bounds: {axis} min {min} > max {max}")]
    InvertedBounds { axis: &'static str, min: Real, max: Real },

    #[error("Missing x-axis path for x-axis mode {mode:?}")]
    MissingXAxisPath { mode: PlotXAxisVal },
}

/// Structural checks on a loaded config.
///
/// The x-axis path requirement of the custom modes is not checked here; the
/// panel surfaces it through [`PlotConfig::x_axis_path`].
pub fn validate_plot_config(config: &PlotConfig) -> Result<(), ValidationError> {
    for (idx, path) in config.paths.iter().enumerate() {
        if let Some(size) = path.line_size {
            if !size.is_finite() || size <= 0.0 {
                return Err(invalid(
                    format!("paths[{idx}].lineSize"),
                    size,
                    "must be a positive number",
                ));
            }
        }
    }

    if !config.sidebar_dimension.is_finite() || config.sidebar_dimension < 0.0 {
        return Err(invalid(
            "sidebarDimension".to_string(),
            config.sidebar_dimension,
            "must be a non-negative number",
        ));
    }

    if let Some(width) = config.following_view_width {
        if !width.is_finite() || width <= 0.0 {
            return Err(invalid(
                "followingViewWidth".to_string(),
                width,
                "must be a positive number",
            ));
        }
    }

    for (field, bound) in [
        ("minXValue", config.min_x_value),
        ("maxXValue", config.max_x_value),
    ] {
        if let Some(v) = bound {
            if !v.is_finite() {
                return Err(invalid(field.to_string(), v, "must be finite"));
            }
        }
    }
    if let (Some(min), Some(max)) = (config.min_x_value, config.max_x_value) {
        if min > max {
            return Err(ValidationError::InvertedBounds { axis: "x", min, max });
        }
    }

    for (field, bound) in [
        ("minYValue", &config.min_y_value),
        ("maxYValue", &config.max_y_value),
    ] {
        if let Some(AxisBound::Numeric(v)) = bound {
            if !v.is_finite() {
                return Err(invalid(field.to_string(), *v, "must be finite"));
            }
        }
    }
    let min_y = config.min_y_value.as_ref().and_then(AxisBound::resolve);
    let max_y = config.max_y_value.as_ref().and_then(AxisBound::resolve);
    if let (Some(min), Some(max)) = (min_y, max_y) {
        if min > max {
            return Err(ValidationError::InvertedBounds { axis: "y", min, max });
        }
    }

    Ok(())
}

fn invalid(field: String, value: Real, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
