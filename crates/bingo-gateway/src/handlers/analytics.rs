use crate::error::Result;
use crate::model::{TrackEventRequest, TrackEventResponse};
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{OriginalUri, State};
use axum::http::header::{HOST, REFERER, USER_AGENT};
use axum::http::{HeaderMap, Uri};
use axum::Json;
use bingo_core::AnalyticsEvent;
use serde_json::Value;
use tracing::{debug, warn};

const RECEIVED: TrackEventResponse = TrackEventResponse {
    message: "Event received",
};

/// Records a client event.
///
/// Only a missing event name is reported back. Storage and parse failures
/// are logged and acknowledged so tracking never breaks the page.
pub async fn track_event_handler(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    headers: HeaderMap,
    payload: std::result::Result<Json<TrackEventRequest>, JsonRejection>,
) -> Result<Json<TrackEventResponse>> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "unreadable analytics event");
            return Ok(Json(RECEIVED));
        }
    };

    let event_name = request
        .event_name
        .as_ref()
        .and_then(Value::as_str)
        .unwrap_or_default();
    let event = AnalyticsEvent::new(event_name, request.event_data)?
        .with_user_agent(header_value(&headers, USER_AGENT.as_str()))
        .with_referrer(header_value(&headers, REFERER.as_str()))
        .with_page_url(Some(page_url(&uri, &headers)));

    match state.events().record_event(&event).await {
        Ok(()) => {
            debug!(event_name = %event.event_name, "analytics event recorded");
            Ok(Json(TrackEventResponse {
                message: "Event tracked successfully",
            }))
        }
        Err(e) => {
            warn!(event_name = %event.event_name, error = %e, "failed to record analytics event");
            Ok(Json(RECEIVED))
        }
    }
}

/// Absolute URL of the request, rebuilt from `Host` when the request line
/// only carries a path.
fn page_url(uri: &Uri, headers: &HeaderMap) -> String {
    if uri.scheme().is_some() {
        return uri.to_string();
    }

    let path = uri.path_and_query().map_or("/", |path| path.as_str());
    match header_value(headers, HOST.as_str()) {
        Some(host) => {
            let scheme = header_value(headers, "x-forwarded-proto")
                .unwrap_or_else(|| "http".to_string());
            format!("{scheme}://{host}{path}")
        }
        None => path.to_string(),
    }
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
}
