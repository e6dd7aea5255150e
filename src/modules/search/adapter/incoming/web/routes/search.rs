use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::search::application::domain::entities::SearchResults;
use crate::modules::search::application::domain::query::SearchQuery;
use crate::modules::search::application::ports::incoming::use_cases::SearchError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct SearchParams {
    /// Free text; an empty query returns empty lists
    #[serde(default)]
    pub q: String,
    /// Per-source result cap, 1..=50 (default 10)
    pub limit: Option<u32>,
}

/// Search products, published collections and users
#[utoipa::path(
    get,
    path = "/api/search",
    tag = "search",
    params(SearchParams),
    responses(
        (status = 200, description = "Results per source", body = inline(SuccessResponse<SearchResults>)),
        (status = 400, description = "Malformed query string", body = ErrorResponse),
    )
)]
#[get("/api/search")]
pub async fn search_handler(
    params: web::Query<SearchParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let params = params.into_inner();
    let query = SearchQuery::new(&params.q, params.limit);

    match data.search.search.execute(query).await {
        Ok(results) => ApiResponse::success(results),
        Err(SearchError::RepositoryError(e)) => {
            error!(q = %params.q, error = %e, "Search failed");
            ApiResponse::internal_error()
        }
    }
}
