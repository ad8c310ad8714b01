use crate::model::selection::Selection;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Clone, Debug)]
/// Everything the page needs to populate its three dropdowns: the selectable
/// countries, the selectable metric labels, and the initial selection.
pub struct DashboardOptions {
    pub countries: Vec<String>,
    pub metrics: Vec<String>,
    pub defaults: Selection,
}
