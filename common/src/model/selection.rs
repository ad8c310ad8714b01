use serde::{Deserialize, Serialize};

/// The three user-controlled dashboard inputs: a country and the two metrics
/// plotted against each other.
///
/// The browser page keeps one `Selection` in its dropdowns and sends it as
/// URL query parameters (`country`, `xaxis`, `yaxis`) whenever it re-fetches
/// the scatter or distribution figure, so both charts always observe the same
/// snapshot. The server holds no per-client copy.
///
/// A `Selection` is not validated beyond membership in the option sets served
/// by `/api/dashboard/options`; the page only offers valid values, and an
/// unknown name surfaces as that chart's error response.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    /// Country whose subnational rows feed both charts.
    pub country: String,
    /// Display label of the metric on the horizontal axis.
    pub xaxis: String,
    /// Display label of the metric on the vertical axis.
    pub yaxis: String,
}

impl Default for Selection {
    /// The selection shown before the user touches any dropdown.
    fn default() -> Self {
        Selection {
            country: "Uganda".to_string(),
            xaxis: "Health Index".to_string(),
            yaxis: "Income Index".to_string(),
        }
    }
}
