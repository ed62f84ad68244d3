//! Static disease directory.

use axum::Json;

use crate::knowledge::disease_directory;
use crate::models::DiseaseDirectory;

/// `GET /api/directory`: categorized overview of known conditions.
pub async fn show() -> Json<DiseaseDirectory> {
    Json(disease_directory().clone())
}
