//! `GET /image?url=` — proxy for allow-listed remote images.

#[cfg(test)]
#[path = "image_test.rs"]
mod tests;

use axum::extract::{Query, State};
use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE, ETAG, IF_NONE_MATCH};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use crate::services::image::{self, ImageProxyError};
use crate::state::AppState;

const CACHE_POLICY: &str = "public, max-age=86400";

#[derive(Debug, Deserialize)]
pub struct ImageQuery {
    pub url: Option<String>,
}

pub async fn proxy(
    State(state): State<AppState>,
    Query(query): Query<ImageQuery>,
    headers: HeaderMap,
) -> Result<Response, StatusCode> {
    let Some(url) = query.url.filter(|u| !u.trim().is_empty()) else {
        return Err(StatusCode::BAD_REQUEST);
    };

    let fetched = image::fetch_image(&state.image_client, &state.images, &url, state.config.image_proxy_timeout)
        .await
        .map_err(|e| {
            tracing::warn!(%url, error = %e, "image proxy refused");
            image_error_to_status(&e)
        })?;

    let not_modified = headers
        .get(IF_NONE_MATCH)
        .is_some_and(|v| image::etag_matches(&String::from_utf8_lossy(v.as_bytes()), &fetched.etag));
    if not_modified {
        return Ok((StatusCode::NOT_MODIFIED, [(ETAG, fetched.etag)]).into_response());
    }

    Ok((
        [(CONTENT_TYPE, fetched.content_type), (CACHE_CONTROL, CACHE_POLICY.to_owned()), (ETAG, fetched.etag)],
        fetched.body,
    )
        .into_response())
}

pub(crate) fn image_error_to_status(err: &ImageProxyError) -> StatusCode {
    match err {
        ImageProxyError::InvalidUrl(_) => StatusCode::BAD_REQUEST,
        ImageProxyError::HostNotAllowed(_) => StatusCode::FORBIDDEN,
        ImageProxyError::Upstream(e) if e.is_timeout() => StatusCode::GATEWAY_TIMEOUT,
        ImageProxyError::UpstreamStatus(404) => StatusCode::NOT_FOUND,
        ImageProxyError::TooLarge => StatusCode::PAYLOAD_TOO_LARGE,
        ImageProxyError::Upstream(_) | ImageProxyError::UpstreamStatus(_) | ImageProxyError::NotAnImage(_) => {
            StatusCode::BAD_GATEWAY
        }
    }
}
