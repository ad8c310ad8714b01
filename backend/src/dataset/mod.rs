//! The in-memory development-index table shared by every request handler.
//!
//! The table is built exactly once at startup by the [`loader`] module and
//! injected into the Actix application state as `web::Data<Dataset>` in
//! `main.rs`. Nothing ever writes to it afterwards, so handlers borrow it
//! concurrently without any locking discipline.
//!
//! Metric columns are addressed through a mapping from display label to
//! column index that is precomputed here, instead of resolving label strings
//! against the table on every chart request.

pub mod loader;

use std::collections::HashMap;

/// Raw source column identifier and the display label it is renamed to, in
/// the order the columns appear in the source table. The labels double as
/// the axis options offered to the user.
pub(crate) const METRIC_COLUMNS: &[(&str, &str)] = &[
    ("shdi", "Sub-National Human Development Index"),
    ("healthindex", "Health Index"),
    ("incindex", "Income Index"),
    ("edindex", "Educational Index"),
    ("lifexp", "Life Expectancy"),
    ("lgnic", "Log Gross National Income Per Capita"),
    ("esch", "Expected Years Schooling"),
    ("msch", "Mean Years Schooling"),
    ("pop", "Population (thousands)"),
];

/// One subnational row of the source table, immutable once loaded.
#[derive(Clone, Debug)]
pub struct Record {
    pub country: String,
    pub region: String,
    pub year: i32,
    /// Metric cells parallel to [`Dataset::metrics`]; an empty source cell
    /// is `None`.
    pub(crate) values: Vec<Option<f64>>,
}

impl Record {
    /// The metric cell at `column`, resolved via [`Dataset::metric_column`].
    pub fn value(&self, column: usize) -> Option<f64> {
        self.values.get(column).copied().flatten()
    }

    /// Whether every metric cell is present.
    pub fn is_complete(&self) -> bool {
        self.values.iter().all(Option::is_some)
    }
}

/// The loaded table plus the option sets derived from it.
#[derive(Debug)]
pub struct Dataset {
    records: Vec<Record>,
    countries: Vec<String>,
    metrics: Vec<String>,
    metric_index: HashMap<String, usize>,
}

impl Dataset {
    /// Derives the selectable-country list (distinct, order of first
    /// appearance) and the metric lookup tables from the loaded rows.
    pub(crate) fn new(records: Vec<Record>) -> Self {
        let mut countries: Vec<String> = Vec::new();
        for record in &records {
            if !countries.contains(&record.country) {
                countries.push(record.country.clone());
            }
        }

        let metrics: Vec<String> = METRIC_COLUMNS
            .iter()
            .map(|(_, label)| (*label).to_string())
            .collect();
        let metric_index = metrics
            .iter()
            .enumerate()
            .map(|(idx, label)| (label.clone(), idx))
            .collect();

        Dataset {
            records,
            countries,
            metrics,
            metric_index,
        }
    }

    /// Distinct country names in the order they first appear in the table.
    pub fn countries(&self) -> &[String] {
        &self.countries
    }

    /// Display labels of the selectable metrics, in source-column order.
    pub fn metrics(&self) -> &[String] {
        &self.metrics
    }

    /// Resolves a metric display label to its column index.
    pub fn metric_column(&self, label: &str) -> Result<usize, String> {
        self.metric_index
            .get(label)
            .copied()
            .ok_or_else(|| format!("Unknown metric '{}'", label))
    }

    /// All rows belonging to `country`, in table order.
    pub fn country_records<'a>(
        &'a self,
        country: &'a str,
    ) -> impl Iterator<Item = &'a Record> + 'a {
        self.records.iter().filter(move |r| r.country == country)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
