use crate::dataset::Dataset;
use actix_web::{web, HttpResponse, Responder};
use common::model::options::DashboardOptions;
use common::model::selection::Selection;

pub(crate) async fn process(dataset: web::Data<Dataset>) -> impl Responder {
    HttpResponse::Ok().json(dashboard_options(&dataset))
}

fn dashboard_options(dataset: &Dataset) -> DashboardOptions {
    DashboardOptions {
        countries: dataset.countries().to_vec(),
        metrics: dataset.metrics().to_vec(),
        defaults: Selection::default(),
    }
}
