//! Distribution figure for the `GET /api/dashboard/distplot` endpoint.
//!
//! ## Workflow
//!
//! 1. Filter the table to the selected country and keep only complete rows
//!    (a row missing any metric cell is dropped entirely).
//! 2. Extract the two selected metric columns and standardize each one
//!    independently over this filtered subset (zero mean, unit variance).
//! 3. Assemble the figure: per metric one probability-density histogram with
//!    a fixed bin width of 0.2, one gaussian-KDE curve sampled at 500 points
//!    across the metric's range, and one rug strip on a second y-axis.
//!
//! Fewer than two complete rows, or a constant metric column, makes
//! standardization undefined; the transform returns an error which the
//! handler maps to `422 Unprocessable Entity` so the page can show the
//! chart's error state without touching the other chart.

use crate::dataset::{Dataset, Record};
use crate::stats::{standardize, GaussianKde};
use actix_web::{web, HttpResponse, Responder};
use common::model::figure::{
    Axis, Figure, HistogramTrace, Layout, Legend, Marker, ScatterTrace, SeriesValues, Trace,
    XBins,
};
use common::model::selection::Selection;

/// Histogram bin width on the standardized axis.
const BIN_SIZE: f64 = 0.2;
/// Evaluation points for each density curve.
const CURVE_POINTS: usize = 500;
/// Per-metric trace colors, the renderer's default palette order.
const COLORS: [&str; 2] = ["rgb(31, 119, 180)", "rgb(255, 127, 14)"];

pub(crate) async fn process(
    dataset: web::Data<Dataset>,
    selection: web::Query<Selection>,
) -> impl Responder {
    match distplot_figure(&dataset, &selection) {
        Ok(figure) => HttpResponse::Ok().json(figure),
        Err(e) => HttpResponse::UnprocessableEntity().body(e),
    }
}

pub(crate) fn distplot_figure(dataset: &Dataset, selection: &Selection) -> Result<Figure, String> {
    let x_col = dataset.metric_column(&selection.xaxis)?;
    let y_col = dataset.metric_column(&selection.yaxis)?;

    let complete: Vec<&Record> = dataset
        .country_records(&selection.country)
        .filter(|r| r.is_complete())
        .collect();

    let groups = [
        (selection.xaxis.as_str(), extract_column(&complete, x_col)),
        (selection.yaxis.as_str(), extract_column(&complete, y_col)),
    ];

    let mut histograms = Vec::with_capacity(groups.len());
    let mut curves = Vec::with_capacity(groups.len());
    let mut rugs = Vec::with_capacity(groups.len());

    for (i, (label, values)) in groups.iter().enumerate() {
        let standardized = standardize(values)
            .map_err(|e| format!("{} for '{}' in {}", e, label, selection.country))?;
        let color = COLORS[i % COLORS.len()];
        histograms.push(histogram_trace(label, &standardized, color));
        curves.push(curve_trace(label, &standardized, color)?);
        rugs.push(rug_trace(label, &standardized, color));
    }

    let mut data = histograms;
    data.extend(curves);
    data.extend(rugs);

    Ok(Figure {
        data,
        layout: distplot_layout(),
    })
}

/// Metric cells of the given column; the rows are already complete, so the
/// output length equals the row count.
fn extract_column(records: &[&Record], column: usize) -> Vec<f64> {
    records.iter().filter_map(|r| r.value(column)).collect()
}

fn bounds(values: &[f64]) -> (f64, f64) {
    values.iter().fold(
        (f64::INFINITY, f64::NEG_INFINITY),
        |(lo, hi), &v| (lo.min(v), hi.max(v)),
    )
}

fn histogram_trace(label: &str, values: &[f64], color: &str) -> Trace {
    let (start, end) = bounds(values);
    Trace::Histogram(HistogramTrace {
        x: values.to_vec(),
        name: label.to_string(),
        legendgroup: label.to_string(),
        histnorm: "probability density".to_string(),
        autobinx: false,
        xbins: XBins {
            start,
            end,
            size: BIN_SIZE,
        },
        opacity: 0.7,
        marker: Marker {
            color: Some(color.to_string()),
            ..Default::default()
        },
        xaxis: Some("x1".to_string()),
        yaxis: Some("y1".to_string()),
    })
}

/// Smoothed density estimate over the metric's range, drawn above the bars
/// in the same legend group.
fn curve_trace(label: &str, values: &[f64], color: &str) -> Result<Trace, String> {
    let kde = GaussianKde::fit(values)?;
    let (start, end) = bounds(values);
    let step = (end - start) / CURVE_POINTS as f64;

    let xs: Vec<f64> = (0..CURVE_POINTS)
        .map(|i| start + i as f64 * step)
        .collect();
    let ys: Vec<Option<f64>> = xs.iter().map(|&x| Some(kde.density(x))).collect();

    Ok(Trace::Scatter(ScatterTrace {
        x: xs.into_iter().map(Some).collect(),
        y: SeriesValues::Numbers(ys),
        text: None,
        mode: "lines".to_string(),
        name: label.to_string(),
        marker: Some(Marker {
            color: Some(color.to_string()),
            ..Default::default()
        }),
        xaxis: Some("x1".to_string()),
        yaxis: Some("y1".to_string()),
        legendgroup: Some(label.to_string()),
        showlegend: Some(false),
    }))
}

/// One tick per sample on the strip below the chart.
fn rug_trace(label: &str, values: &[f64], color: &str) -> Trace {
    Trace::Scatter(ScatterTrace {
        x: values.iter().map(|&v| Some(v)).collect(),
        y: SeriesValues::Labels(vec![label.to_string(); values.len()]),
        text: None,
        mode: "markers".to_string(),
        name: label.to_string(),
        marker: Some(Marker {
            color: Some(color.to_string()),
            symbol: Some("line-ns-open".to_string()),
            ..Default::default()
        }),
        xaxis: Some("x1".to_string()),
        yaxis: Some("y2".to_string()),
        legendgroup: Some(label.to_string()),
        showlegend: Some(false),
    })
}

/// Two stacked panels sharing the x axis: densities on top, rug strip below.
fn distplot_layout() -> Layout {
    Layout {
        xaxis: Some(Axis {
            domain: Some([0.0, 1.0]),
            anchor: Some("y2".to_string()),
            zeroline: Some(false),
            ..Default::default()
        }),
        yaxis: Some(Axis {
            domain: Some([0.35, 1.0]),
            anchor: Some("free".to_string()),
            position: Some(0.0),
            ..Default::default()
        }),
        yaxis2: Some(Axis {
            domain: Some([0.0, 0.25]),
            anchor: Some("x1".to_string()),
            dtick: Some(1.0),
            showticklabels: Some(false),
            ..Default::default()
        }),
        barmode: Some("overlay".to_string()),
        hovermode: Some("closest".to_string()),
        legend: Some(Legend {
            traceorder: "reversed".to_string(),
        }),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::METRIC_COLUMNS;
    use approx::assert_abs_diff_eq;

    fn record(
        country: &str,
        region: &str,
        year: i32,
        health: Option<f64>,
        income: Option<f64>,
    ) -> Record {
        let mut values = vec![Some(0.5); METRIC_COLUMNS.len()];
        values[1] = health;
        values[2] = income;
        Record {
            country: country.to_string(),
            region: region.to_string(),
            year,
            values,
        }
    }

    fn fixture() -> Dataset {
        Dataset::new(vec![
            record("Uganda", "Central", 1990, Some(0.45), Some(0.28)),
            record("Uganda", "Northern", 1990, Some(0.38), Some(0.20)),
            record("Uganda", "Central", 2000, Some(0.52), Some(0.34)),
            record("Uganda", "Western", 2000, Some(0.41), Some(0.25)),
            // Incomplete row, must be dropped before standardization.
            record("Uganda", "Eastern", 2000, None, Some(0.22)),
            record("Djibouti", "Djibouti", 2017, Some(0.60), Some(0.55)),
        ])
    }

    fn selection() -> Selection {
        Selection {
            country: "Uganda".to_string(),
            xaxis: "Health Index".to_string(),
            yaxis: "Income Index".to_string(),
        }
    }

    fn histogram_values(figure: &Figure) -> Vec<&[f64]> {
        figure
            .data
            .iter()
            .filter_map(|t| match t {
                Trace::Histogram(h) => Some(h.x.as_slice()),
                Trace::Scatter(_) => None,
            })
            .collect()
    }

    #[test]
    fn emits_histogram_curve_and_rug_per_metric() {
        let figure = distplot_figure(&fixture(), &selection()).unwrap();
        assert_eq!(figure.data.len(), 6);

        // Histograms first, then curves, then rugs.
        assert!(matches!(figure.data[0], Trace::Histogram(_)));
        assert!(matches!(figure.data[1], Trace::Histogram(_)));
        match &figure.data[2] {
            Trace::Scatter(curve) => {
                assert_eq!(curve.mode, "lines");
                assert_eq!(curve.x.len(), CURVE_POINTS);
            }
            other => panic!("expected curve, got {:?}", other),
        }
        match &figure.data[4] {
            Trace::Scatter(rug) => {
                assert_eq!(rug.mode, "markers");
                assert_eq!(rug.yaxis.as_deref(), Some("y2"));
                assert_eq!(
                    rug.y,
                    SeriesValues::Labels(vec!["Health Index".to_string(); 4])
                );
            }
            other => panic!("expected rug, got {:?}", other),
        }
    }

    #[test]
    fn output_length_equals_the_count_of_complete_rows() {
        let figure = distplot_figure(&fixture(), &selection()).unwrap();
        // Five Ugandan rows, one of them incomplete.
        for values in histogram_values(&figure) {
            assert_eq!(values.len(), 4);
        }
    }

    #[test]
    fn standardized_sequences_have_zero_mean_and_unit_deviation() {
        let figure = distplot_figure(&fixture(), &selection()).unwrap();
        for values in histogram_values(&figure) {
            let n = values.len() as f64;
            let mean = values.iter().sum::<f64>() / n;
            let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
            assert_abs_diff_eq!(mean, 0.0, epsilon = 1e-9);
            assert_abs_diff_eq!(variance.sqrt(), 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn bins_are_fixed_width_over_the_standardized_range() {
        let figure = distplot_figure(&fixture(), &selection()).unwrap();
        for trace in &figure.data {
            if let Trace::Histogram(h) = trace {
                assert_eq!(h.xbins.size, BIN_SIZE);
                let (lo, hi) = bounds(&h.x);
                assert_eq!(h.xbins.start, lo);
                assert_eq!(h.xbins.end, hi);
                assert_eq!(h.histnorm, "probability density");
            }
        }
    }

    #[test]
    fn single_row_country_is_rejected() {
        let mut selection = selection();
        selection.country = "Djibouti".to_string();
        let err = distplot_figure(&fixture(), &selection).unwrap_err();
        assert!(err.contains("at least 2"), "{}", err);
    }

    #[test]
    fn constant_metric_is_rejected() {
        let dataset = Dataset::new(vec![
            record("Uganda", "Central", 1990, Some(0.5), Some(0.28)),
            record("Uganda", "Northern", 1990, Some(0.5), Some(0.20)),
        ]);
        let err = distplot_figure(&dataset, &selection()).unwrap_err();
        assert!(err.contains("constant"), "{}", err);
    }

    #[test]
    fn country_with_no_rows_is_rejected() {
        let mut selection = selection();
        selection.country = "Atlantis".to_string();
        assert!(distplot_figure(&fixture(), &selection).is_err());
    }

    #[test]
    fn layout_splits_density_and_rug_panels() {
        let layout = distplot_layout();
        assert_eq!(layout.barmode.as_deref(), Some("overlay"));
        assert_eq!(layout.yaxis.unwrap().domain, Some([0.35, 1.0]));
        let rug_axis = layout.yaxis2.unwrap();
        assert_eq!(rug_axis.domain, Some([0.0, 0.25]));
        assert_eq!(rug_axis.showticklabels, Some(false));
    }
}
