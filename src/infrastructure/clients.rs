use reqwest::header::AUTHORIZATION;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::errors::LookupError;

pub mod company;
pub mod job_category;

/// GET `{base_uri}/{id}` with the caller's Authorization header forwarded
/// verbatim, mapping the upstream response onto the lookup failure taxonomy.
/// The token never appears in logs or error messages.
pub(crate) async fn fetch_entity<T: DeserializeOwned>(
    http: &reqwest::Client,
    base_uri: &str,
    id: Uuid,
    token: &str,
) -> Result<T, LookupError> {
    let uri = format!("{}/{}", base_uri.trim_end_matches('/'), id);

    let response = http
        .get(&uri)
        .header(AUTHORIZATION, token)
        .send()
        .await
        .map_err(|e| LookupError::Unavailable(e.without_url().to_string()))?;

    let status = response.status();
    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(LookupError::NotFound);
    }
    if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
        return Err(LookupError::Unauthorized);
    }
    if !status.is_success() {
        return Err(LookupError::Unavailable(format!("unexpected status {status}")));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| LookupError::Unavailable(format!("malformed payload: {}", e.without_url())))
}
