//! Upload collaborator: takes file bytes, answers with a publicly reachable
//! URL. Everything written into an image or video selector must be hosted
//! there first: the preview engine and the render backend both fetch assets
//! by URL and cannot reach the user's disk or a provider's short-lived
//! attachment link.

use common::requests::UploadResponse;
use gloo_net::http::Request;
use thiserror::Error;

const UPLOAD_ENDPOINT: &str = "/api/upload";

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("upload request failed: {0}")]
    Request(String),
    #[error("upload rejected with status {0}")]
    Rejected(u16),
    #[error("could not fetch source asset: {0}")]
    SourceFetch(String),
}

/// Stores raw file bytes and returns the hosted URL.
pub async fn upload_bytes(filename: &str, bytes: Vec<u8>) -> Result<String, UploadError> {
    let body = js_sys::Uint8Array::from(bytes.as_slice());
    let response = Request::post(UPLOAD_ENDPOINT)
        .query([("filename", filename)])
        .header("Content-Type", "application/octet-stream")
        .body(body)
        .map_err(|err| UploadError::Request(err.to_string()))?
        .send()
        .await
        .map_err(|err| UploadError::Request(err.to_string()))?;

    if response.status() != 200 {
        return Err(UploadError::Rejected(response.status()));
    }
    let parsed: UploadResponse = response
        .json()
        .await
        .map_err(|err| UploadError::Request(err.to_string()))?;
    Ok(parsed.url)
}

/// Re-hosts an asset that only exists as a reference URL (sponsor logos):
/// fetches the bytes, then uploads them like any local file.
pub async fn rehost(source_url: &str) -> Result<String, UploadError> {
    let response = Request::get(source_url)
        .send()
        .await
        .map_err(|err| UploadError::SourceFetch(err.to_string()))?;
    if response.status() != 200 {
        return Err(UploadError::SourceFetch(format!(
            "asset answered {}",
            response.status()
        )));
    }
    let bytes = response
        .binary()
        .await
        .map_err(|err| UploadError::SourceFetch(err.to_string()))?;

    upload_bytes(filename_from_url(source_url), bytes).await
}

/// Last path segment of the source URL, used as the stored filename.
fn filename_from_url(url: &str) -> &str {
    url.rsplit('/')
        .next()
        .filter(|tail| !tail.is_empty())
        .unwrap_or("asset")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_is_the_last_path_segment() {
        assert_eq!(
            filename_from_url("https://cdn.example/logos/acme.png"),
            "acme.png"
        );
        assert_eq!(filename_from_url("https://cdn.example/"), "asset");
        assert_eq!(filename_from_url("plain"), "plain");
    }
}
