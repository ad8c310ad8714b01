//! Scatter figure for the `GET /api/dashboard/scatter` endpoint.
//!
//! Filters the table to the selected country, groups the rows by region in
//! the order regions first appear, and emits one markers trace per region
//! with the selected metrics on the axes and the year as hover text. A
//! country without rows yields an empty figure rather than an error.

use crate::dataset::Dataset;
use actix_web::{web, HttpResponse, Responder};
use common::model::figure::{
    Axis, Figure, Layout, Margin, Marker, MarkerLine, ScatterTrace, SeriesValues, Trace,
};
use common::model::selection::Selection;

pub(crate) async fn process(
    dataset: web::Data<Dataset>,
    selection: web::Query<Selection>,
) -> impl Responder {
    match scatter_figure(&dataset, &selection) {
        Ok(figure) => HttpResponse::Ok().json(figure),
        Err(e) => HttpResponse::UnprocessableEntity().body(e),
    }
}

pub(crate) fn scatter_figure(dataset: &Dataset, selection: &Selection) -> Result<Figure, String> {
    let x_col = dataset.metric_column(&selection.xaxis)?;
    let y_col = dataset.metric_column(&selection.yaxis)?;

    // One slot per region, keyed by first appearance.
    let mut regions: Vec<String> = Vec::new();
    let mut series: Vec<(Vec<Option<f64>>, Vec<Option<f64>>, Vec<String>)> = Vec::new();

    for record in dataset.country_records(&selection.country) {
        let slot = match regions.iter().position(|r| r == &record.region) {
            Some(i) => i,
            None => {
                regions.push(record.region.clone());
                series.push(Default::default());
                regions.len() - 1
            }
        };
        let (xs, ys, years) = &mut series[slot];
        xs.push(record.value(x_col));
        ys.push(record.value(y_col));
        years.push(record.year.to_string());
    }

    let data = regions
        .into_iter()
        .zip(series)
        .map(|(region, (xs, ys, years))| {
            Trace::Scatter(ScatterTrace {
                x: xs,
                y: SeriesValues::Numbers(ys),
                text: Some(years),
                mode: "markers".to_string(),
                name: region,
                marker: Some(Marker {
                    size: Some(15.0),
                    opacity: Some(0.5),
                    line: Some(MarkerLine {
                        width: 0.5,
                        color: "white".to_string(),
                    }),
                    ..Default::default()
                }),
                ..Default::default()
            })
        })
        .collect();

    let layout = Layout {
        xaxis: Some(Axis {
            title: Some(selection.xaxis.clone()),
            ..Default::default()
        }),
        yaxis: Some(Axis {
            title: Some(selection.yaxis.clone()),
            ..Default::default()
        }),
        margin: Some(Margin {
            l: 40.0,
            b: 40.0,
            t: 10.0,
            r: 0.0,
        }),
        hovermode: Some("closest".to_string()),
        ..Default::default()
    };

    Ok(Figure { data, layout })
}
