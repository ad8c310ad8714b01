//! # Dashboard Service Module
//!
//! This module aggregates the API endpoints behind the dashboard page. It
//! acts as a router, directing incoming HTTP requests under the
//! `/api/dashboard` path to the appropriate handler logic defined in its
//! sub-modules.
//!
//! ## Sub-modules:
//! - `options`: serves the dropdown option sets derived from the loaded table.
//! - `scatter`: builds the per-region scatter figure for a selection.
//! - `distplot`: builds the standardized distribution figure for a selection.

mod distplot;
mod options;
mod scatter;

use actix_web::web::{get, scope};
use actix_web::Scope;

/// The base path for all dashboard API endpoints.
const API_PATH: &str = "/api/dashboard";

/// Configures and returns the Actix `Scope` for the dashboard routes.
///
/// # Registered Routes:
///
/// *   **`GET /options`**:
///     - **Handler**: `options::process`
///     - **Description**: Returns the selectable countries, the selectable
///       metric labels, and the default selection as a `DashboardOptions`
///       JSON payload. The page calls this once to populate its dropdowns.
///
/// *   **`GET /scatter`**:
///     - **Handler**: `scatter::process`
///     - **Description**: Takes the selection as `country`/`xaxis`/`yaxis`
///       query parameters and returns the scatter `Figure` with one markers
///       trace per region of the selected country.
///
/// *   **`GET /distplot`**:
///     - **Handler**: `distplot::process`
///     - **Description**: Same query parameters; returns the distribution
///       `Figure` for the two standardized metric columns, or
///       `422 Unprocessable Entity` when standardization is undefined for
///       the selection.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/options", get().to(options::process))
        .route("/scatter", get().to(scatter::process))
        .route("/distplot", get().to(distplot::process))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Dataset, Record, METRIC_COLUMNS};
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};
    use common::model::options::DashboardOptions;

    fn record(country: &str, region: &str, year: i32, health: f64, income: f64) -> Record {
        let mut values = vec![Some(0.5); METRIC_COLUMNS.len()];
        values[1] = Some(health);
        values[2] = Some(income);
        Record {
            country: country.to_string(),
            region: region.to_string(),
            year,
            values,
        }
    }

    fn fixture() -> web::Data<Dataset> {
        web::Data::new(Dataset::new(vec![
            record("Uganda", "Central", 1990, 0.45, 0.28),
            record("Uganda", "Northern", 1990, 0.38, 0.20),
            record("Uganda", "Central", 2000, 0.52, 0.34),
            record("Djibouti", "Djibouti", 2017, 0.60, 0.55),
        ]))
    }

    #[actix_web::test]
    async fn options_endpoint_returns_the_loaded_sets() {
        let app =
            test::init_service(App::new().app_data(fixture()).service(configure_routes())).await;

        let req = test::TestRequest::get()
            .uri("/api/dashboard/options")
            .to_request();
        let options: DashboardOptions = test::call_and_read_body_json(&app, req).await;

        assert_eq!(options.countries, ["Uganda", "Djibouti"]);
        assert_eq!(options.metrics.len(), METRIC_COLUMNS.len());
        assert_eq!(options.defaults.country, "Uganda");
    }

    #[actix_web::test]
    async fn scatter_endpoint_answers_with_one_trace_per_region() {
        let app =
            test::init_service(App::new().app_data(fixture()).service(configure_routes())).await;

        let req = test::TestRequest::get()
            .uri("/api/dashboard/scatter?country=Uganda&xaxis=Health%20Index&yaxis=Income%20Index")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        let traces = body["data"].as_array().unwrap();
        assert_eq!(traces.len(), 2);
        assert_eq!(traces[0]["name"], "Central");
        assert_eq!(traces[0]["type"], "scatter");
        assert_eq!(body["layout"]["xaxis"]["title"], "Health Index");
    }

    #[actix_web::test]
    async fn degenerate_distplot_selection_answers_422() {
        let app =
            test::init_service(App::new().app_data(fixture()).service(configure_routes())).await;

        let req = test::TestRequest::get()
            .uri(
                "/api/dashboard/distplot?country=Djibouti&xaxis=Health%20Index&yaxis=Income%20Index",
            )
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
