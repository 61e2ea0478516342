//! Migration from the persisted (possibly legacy) shape to [`PlotConfig`].

use plot_core::Real;
use serde::{Deserialize, Serialize};

use crate::schema::{
    AxisBound, BasePlotPath, DEFAULT_SIDEBAR_DIMENSION, DeprecatedPlotConfig, LegendDisplay,
    PlotConfig, PlotPath, PlotXAxisVal,
};

/// The config as found in a saved layout. Every field may be missing; older
/// layouts carry `showSidebar`/`sidebarWidth` instead of `legendDisplay`/`sidebarDimension`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct StoredPlotConfig {
    #[serde(flatten)]
    pub deprecated: DeprecatedPlotConfig,
    pub paths: Option<Vec<PlotPath>>,
    pub min_x_value: Option<Real>,
    pub max_x_value: Option<Real>,
    pub min_y_value: Option<AxisBound>,
    pub max_y_value: Option<AxisBound>,
    pub show_legend: Option<bool>,
    pub legend_display: Option<LegendDisplay>,
    pub show_plot_values_in_legend: Option<bool>,
    #[serde(rename = "showXAxisLabels")]
    pub show_x_axis_labels: Option<bool>,
    #[serde(rename = "showYAxisLabels")]
    pub show_y_axis_labels: Option<bool>,
    pub is_synced: Option<bool>,
    pub x_axis_val: Option<PlotXAxisVal>,
    pub x_axis_path: Option<BasePlotPath>,
    pub following_view_width: Option<Real>,
    pub sidebar_dimension: Option<Real>,
    #[serde(rename = "foxglovePanelTitle")]
    pub panel_title: Option<String>,
}

impl From<PlotConfig> for StoredPlotConfig {
    fn from(config: PlotConfig) -> Self {
        Self {
            deprecated: config.deprecated,
            paths: Some(config.paths),
            min_x_value: config.min_x_value,
            max_x_value: config.max_x_value,
            min_y_value: config.min_y_value,
            max_y_value: config.max_y_value,
            show_legend: Some(config.show_legend),
            legend_display: Some(config.legend_display),
            show_plot_values_in_legend: Some(config.show_plot_values_in_legend),
            show_x_axis_labels: Some(config.show_x_axis_labels),
            show_y_axis_labels: Some(config.show_y_axis_labels),
            is_synced: Some(config.is_synced),
            x_axis_val: Some(config.x_axis_val),
            x_axis_path: config.x_axis_path,
            following_view_width: config.following_view_width,
            sidebar_dimension: Some(config.sidebar_dimension),
            panel_title: config.panel_title,
        }
    }
}

/// Fill defaults and fold deprecated fields into their successors.
///
/// The returned config never carries deprecated fields.
pub fn migrate_plot_config(stored: StoredPlotConfig) -> PlotConfig {
    let defaults = PlotConfig::default();
    let legacy = stored.deprecated;

    let legend_display = match stored.legend_display {
        Some(legend) => legend,
        None if legacy.show_sidebar == Some(true) => {
            tracing::debug!("legacy showSidebar=true migrated to legendDisplay=left");
            LegendDisplay::Left
        }
        None => defaults.legend_display,
    };

    let sidebar_dimension = match (stored.sidebar_dimension, legacy.sidebar_width) {
        (Some(dim), _) => dim,
        (None, Some(width)) => {
            tracing::debug!(width, "legacy sidebarWidth migrated to sidebarDimension");
            width
        }
        (None, None) => DEFAULT_SIDEBAR_DIMENSION,
    };

    if !legacy.is_empty() {
        tracing::debug!(?legacy, "dropping deprecated plot config fields");
    }

    PlotConfig {
        deprecated: DeprecatedPlotConfig::default(),
        paths: stored.paths.unwrap_or(defaults.paths),
        min_x_value: stored.min_x_value,
        max_x_value: stored.max_x_value,
        min_y_value: stored.min_y_value,
        max_y_value: stored.max_y_value,
        show_legend: stored.show_legend.unwrap_or(defaults.show_legend),
        legend_display,
        show_plot_values_in_legend: stored
            .show_plot_values_in_legend
            .unwrap_or(defaults.show_plot_values_in_legend),
        show_x_axis_labels: stored
            .show_x_axis_labels
            .unwrap_or(defaults.show_x_axis_labels),
        show_y_axis_labels: stored
            .show_y_axis_labels
            .unwrap_or(defaults.show_y_axis_labels),
        is_synced: stored.is_synced.unwrap_or(defaults.is_synced),
        x_axis_val: stored.x_axis_val.unwrap_or(defaults.x_axis_val),
        x_axis_path: stored.x_axis_path,
        following_view_width: stored.following_view_width,
        sidebar_dimension,
        panel_title: stored.panel_title,
    }
}
