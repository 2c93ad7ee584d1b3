use crate::error::{Result, ServiceError};
use crate::state::AppState;
use axum::{
    extract::{Multipart, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
};

/// Transforms an uploaded CP2K input file against the schema named by the
/// path segment. Returns the produced XML document.
pub async fn transform_input_file(
    State(state): State<AppState>,
    Path(template_id): Path<String>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse> {
    tracing::info!("transform request for schema '{}'", template_id);

    // 1. Pull the uploaded file out of the multipart body.
    let mut input: Option<Vec<u8>> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ServiceError::InvalidRequest(e.to_string()))?
    {
        if field.name() == Some("inputFile") {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| ServiceError::InvalidRequest(e.to_string()))?;
            input = Some(bytes.to_vec());
            break;
        }
    }
    let input = input.ok_or(ServiceError::MissingInputFile)?;

    // 2. Resolve the schema and run the conversion off the async runtime.
    let transformer = state.catalog.transformer(&template_id)?;
    let xml = tokio::task::spawn_blocking(move || transformer.convert(input.as_slice()))
        .await
        .map_err(|e| ServiceError::Internal(e.to_string()))??;

    tracing::info!(
        "transform completed for schema '{}' ({} bytes)",
        template_id,
        xml.len()
    );

    // 3. Return the document body.
    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/xml")],
        xml,
    ))
}
