use crate::dto::{ResolveQuery, ResolveResponse};
use crate::errors::ApiError;
use crate::state::AppState;
use axum::extract::{Query, State};
use axum::Json;
use doh_relay_domain::DomainError;
use tracing::{debug, instrument};

#[instrument(skip(state), name = "api_resolve")]
pub async fn resolve(
    State(state): State<AppState>,
    Query(params): Query<ResolveQuery>,
) -> Result<Json<ResolveResponse>, ApiError> {
    let name = params.url.as_deref().ok_or_else(|| {
        ApiError(DomainError::InvalidDomainName(
            "query parameter 'url' is required".to_string(),
        ))
    })?;

    debug!(domain = %name, record_type = %params.record_type, "Resolve request");

    let answer = state.resolve.execute(name, &params.record_type).await?;
    Ok(Json(answer.into()))
}
