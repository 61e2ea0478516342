//! Plot panel configuration schema.

use plot_core::{Real, Time, parse_float_prefix};
use serde::{Deserialize, Serialize};

use crate::validate::ValidationError;

/// Key under which the host's generic panel-title mechanism stores a title override.
pub const PANEL_TITLE_CONFIG_KEY: &str = "foxglovePanelTitle";

pub const DEFAULT_SIDEBAR_DIMENSION: Real = 240.0;

/// A path expression into the message space, plus whether it contributes to the plot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct BasePlotPath {
    pub value: String,
    pub enabled: bool,
}

/// Which timestamp of a message positions its samples on a `timestamp` x-axis.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "camelCase")]
pub enum TimestampMethod {
    #[default]
    ReceiveTime,
    HeaderStamp,
}

/// One plotted series.
///
/// `label` and `color` keep absent and empty apart: an empty label is written
/// back as `""`, an absent one is omitted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlotPath {
    pub value: String,
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub timestamp_method: TimestampMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_line: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_size: Option<Real>,
}

impl PlotPath {
    /// An enabled receive-time series with no display overrides.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            enabled: true,
            color: None,
            label: None,
            timestamp_method: TimestampMethod::ReceiveTime,
            show_line: None,
            line_size: None,
        }
    }
}

/// How the x-axis is populated.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "camelCase")]
pub enum PlotXAxisVal {
    /// Receive time or header stamp since start, per series timestamp method.
    #[default]
    Timestamp,
    /// Array index of each item from the latest message; y is the item value.
    Index,
    /// Values of the x-axis path across accumulated messages, paired with
    /// series values by array index.
    Custom,
    /// Like `Custom`, restricted to the latest message for x and every series.
    CurrentCustom,
}

impl PlotXAxisVal {
    pub fn requires_x_axis_path(self) -> bool {
        match self {
            PlotXAxisVal::Timestamp | PlotXAxisVal::Index => false,
            PlotXAxisVal::Custom | PlotXAxisVal::CurrentCustom => true,
        }
    }

    pub fn uses_latest_message_only(self) -> bool {
        match self {
            PlotXAxisVal::Index | PlotXAxisVal::CurrentCustom => true,
            PlotXAxisVal::Timestamp | PlotXAxisVal::Custom => false,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "camelCase")]
pub enum LegendDisplay {
    #[default]
    Floating,
    Top,
    Left,
    None,
}

/// A y-axis bound: either a literal number or a symbolic string such as `""` or `"auto"`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum AxisBound {
    Numeric(Real),
    Symbolic(String),
}

impl AxisBound {
    /// Numeric value of the bound, or `None` when the axis should auto-scale.
    ///
    /// Symbolic bounds holding a number (e.g. `"10"`) resolve leniently, the same
    /// way reference-line values are read.
    pub fn resolve(&self) -> Option<Real> {
        match self {
            AxisBound::Numeric(v) => v.is_finite().then_some(*v),
            AxisBound::Symbolic(s) => parse_float_prefix(s).filter(|v| v.is_finite()),
        }
    }
}

impl From<Real> for AxisBound {
    fn from(v: Real) -> Self {
        AxisBound::Numeric(v)
    }
}

impl From<&str> for AxisBound {
    fn from(s: &str) -> Self {
        AxisBound::Symbolic(s.to_string())
    }
}

/// One item produced by the message-path evaluator. The value shape is owned by
/// the evaluator and carried opaquely.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MessagePathDataItem {
    pub value: serde_json::Value,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constant_name: Option<String>,
}

/// Evaluated samples for one path against one message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlotDataItem {
    pub queried_data: Vec<MessagePathDataItem>,
    pub receive_time: Time,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_stamp: Option<Time>,
}

impl PlotDataItem {
    /// Timestamp selected by `method`; `None` for header stamps on headerless messages.
    pub fn timestamp(&self, method: TimestampMethod) -> Option<Time> {
        match method {
            TimestampMethod::ReceiveTime => Some(self.receive_time),
            TimestampMethod::HeaderStamp => self.header_stamp,
        }
    }

    /// Seconds elapsed from `start` to this item's timestamp.
    pub fn elapsed_since(&self, start: Time, method: TimestampMethod) -> Option<Real> {
        let t = self.timestamp(method)?;
        Some(t.checked_sub(start)?.to_sec())
    }
}

/// Legacy fields still accepted from older layouts. Current code reads them once
/// during migration and never writes them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DeprecatedPlotConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_sidebar: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sidebar_width: Option<Real>,
}

impl DeprecatedPlotConfig {
    pub fn is_empty(&self) -> bool {
        self.show_sidebar.is_none() && self.sidebar_width.is_none()
    }
}

/// Full persisted state of a plot panel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlotConfig {
    #[serde(flatten)]
    pub deprecated: DeprecatedPlotConfig,
    pub paths: Vec<PlotPath>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_x_value: Option<Real>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_x_value: Option<Real>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_y_value: Option<AxisBound>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_y_value: Option<AxisBound>,
    pub show_legend: bool,
    pub legend_display: LegendDisplay,
    pub show_plot_values_in_legend: bool,
    #[serde(rename = "showXAxisLabels")]
    pub show_x_axis_labels: bool,
    #[serde(rename = "showYAxisLabels")]
    pub show_y_axis_labels: bool,
    pub is_synced: bool,
    pub x_axis_val: PlotXAxisVal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_axis_path: Option<BasePlotPath>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub following_view_width: Option<Real>,
    pub sidebar_dimension: Real,
    #[serde(
        rename = "foxglovePanelTitle",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub panel_title: Option<String>,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            deprecated: DeprecatedPlotConfig::default(),
            paths: vec![PlotPath::new("")],
            min_x_value: None,
            max_x_value: None,
            min_y_value: None,
            max_y_value: None,
            show_legend: true,
            legend_display: LegendDisplay::Floating,
            show_plot_values_in_legend: false,
            show_x_axis_labels: true,
            show_y_axis_labels: true,
            is_synced: true,
            x_axis_val: PlotXAxisVal::Timestamp,
            x_axis_path: None,
            following_view_width: None,
            sidebar_dimension: DEFAULT_SIDEBAR_DIMENSION,
            panel_title: None,
        }
    }
}

impl PlotConfig {
    /// The x-axis path the current mode needs.
    ///
    /// `Ok(None)` for modes that take x from time or index; an error when a custom
    /// mode has no path configured, which the panel shows as a missing x-axis path.
    pub fn x_axis_path(&self) -> Result<Option<&BasePlotPath>, ValidationError> {
        match self.x_axis_val {
            PlotXAxisVal::Timestamp | PlotXAxisVal::Index => Ok(None),
            PlotXAxisVal::Custom | PlotXAxisVal::CurrentCustom => match &self.x_axis_path {
                Some(path) => Ok(Some(path)),
                None => Err(ValidationError::MissingXAxisPath {
                    mode: self.x_axis_val,
                }),
            },
        }
    }

    /// Enabled paths whose value is a numeric literal, with their positions.
    pub fn reference_lines(&self) -> impl Iterator<Item = (usize, &PlotPath)> {
        self.paths
            .iter()
            .enumerate()
            .filter(|(_, p)| p.enabled && crate::is_reference_line_plot_path_type(*p))
    }

    /// Enabled paths evaluated against messages, with their positions.
    pub fn data_series(&self) -> impl Iterator<Item = (usize, &PlotPath)> {
        self.paths
            .iter()
            .enumerate()
            .filter(|(_, p)| p.enabled && !crate::is_reference_line_plot_path_type(*p))
    }
}
