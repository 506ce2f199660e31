//! HTTP calls to the announcement backend.

use common::model::announcement::{Announcement, AnnouncementRecord};
use common::requests::{Endpoints, PreviewResponse, SaveResponse};
use gloo_net::http::{Request, Response};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("falha de comunicação: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("o servidor respondeu {status}: {body}")]
    Status { status: u16, body: String },
    #[error("o servidor recusou a operação")]
    Rejected,
}

async fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        Ok(response)
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Status { status, body })
    }
}

/// Renders the artboard for `payload` and returns its HTML.
pub async fn render_preview(endpoints: &Endpoints, payload: &Announcement) -> Result<String, ApiError> {
    let response = Request::post(&endpoints.preview()).json(payload)?.send().await?;
    let preview: PreviewResponse = ensure_ok(response).await?.json().await?;
    Ok(preview.html)
}

pub async fn fetch_announcement(endpoints: &Endpoints, id: u32) -> Result<AnnouncementRecord, ApiError> {
    let response = Request::get(&endpoints.announcement(id)).send().await?;
    Ok(ensure_ok(response).await?.json().await?)
}

/// Updates the record `id`, or creates a new one when there is none yet.
///
/// A response with `success: false` is reported as `ApiError::Rejected`.
pub async fn save_announcement(
    endpoints: &Endpoints,
    id: Option<u32>,
    payload: &Announcement,
) -> Result<SaveResponse, ApiError> {
    let request = match id {
        Some(id) => Request::put(&endpoints.announcement(id)),
        None => Request::post(&endpoints.create()),
    };
    let response = request.json(payload)?.send().await?;
    let saved: SaveResponse = ensure_ok(response).await?.json().await?;
    if saved.success {
        Ok(saved)
    } else {
        Err(ApiError::Rejected)
    }
}
