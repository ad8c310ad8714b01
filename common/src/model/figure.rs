//! Chart payloads exchanged with the browser-side renderer.
//!
//! The dashboard endpoints answer with a [`Figure`], the `{data, layout}`
//! pair the plotting library consumes verbatim. The types here model only the
//! attributes the dashboard actually emits; everything optional is skipped
//! during serialization so the resulting JSON stays close to what a
//! hand-written figure would look like.

use serde::{Deserialize, Serialize};

/// A complete chart description: the plotted traces plus the layout frame
/// around them. Built fresh on every request and discarded after the render.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

/// One plotted series. The renderer distinguishes trace kinds by their
/// `"type"` field, which the tagged inner structs emit.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum Trace {
    Scatter(ScatterTrace),
    Histogram(HistogramTrace),
}

/// Point, line, or rug series (`"type": "scatter"`).
///
/// Covers the three shapes the dashboard draws with it: region markers on the
/// scatter chart, density curves on the distribution chart, and the rug strip
/// under them (where `y` carries one group label per sample).
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(tag = "type", rename = "scatter")]
pub struct ScatterTrace {
    /// Horizontal coordinates; a missing source value serializes as `null`,
    /// which the renderer skips.
    pub x: Vec<Option<f64>>,
    pub y: SeriesValues,
    /// Per-point hover text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Vec<String>>,
    pub mode: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legendgroup: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showlegend: Option<bool>,
}

/// Binned series (`"type": "histogram"`) with explicit bins.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename = "histogram")]
pub struct HistogramTrace {
    pub x: Vec<f64>,
    pub name: String,
    pub legendgroup: String,
    /// Normalization mode, e.g. `"probability density"`.
    pub histnorm: String,
    /// Disabled so `xbins` is honored instead of automatic binning.
    pub autobinx: bool,
    pub xbins: XBins,
    pub opacity: f64,
    pub marker: Marker,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<String>,
}

/// Vertical coordinates of a scatter-family trace: numeric samples, or one
/// category label per sample for rug strips.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum SeriesValues {
    Numbers(Vec<Option<f64>>),
    Labels(Vec<String>),
}

impl Default for SeriesValues {
    fn default() -> Self {
        SeriesValues::Numbers(Vec::new())
    }
}

/// Explicit histogram binning: fixed-width bins spanning `[start, end]`.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct XBins {
    pub start: f64,
    pub end: f64,
    pub size: f64,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct Marker {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<MarkerLine>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct MarkerLine {
    pub width: f64,
    pub color: String,
}

/// The frame around the traces: axes, margins, and chart-wide modes.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct Layout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis2: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<Margin>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovermode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barmode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Fraction of the plotting area this axis spans.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<[f64; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zeroline: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dtick: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showticklabels: Option<bool>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Margin {
    pub l: f64,
    pub b: f64,
    pub t: f64,
    pub r: f64,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Legend {
    pub traceorder: String,
}
