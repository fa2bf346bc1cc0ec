use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    entities::company::Company,
    errors::LookupError,
    infrastructure::clients::fetch_entity,
};

/// Resolves a company id against the external company directory. The auth
/// token is forwarded as given, never inspected or modified.
#[async_trait]
pub trait CompanyLookup: Send + Sync {
    async fn company_by_id(&self, id: Uuid, token: &str) -> Result<Company, LookupError>;
}

#[derive(Clone)]
pub struct CompanyApiClient {
    http: reqwest::Client,
    base_uri: String,
}

impl CompanyApiClient {
    pub fn new(http: reqwest::Client, base_uri: String) -> Self {
        CompanyApiClient { http, base_uri }
    }
}

#[async_trait]
impl CompanyLookup for CompanyApiClient {
    async fn company_by_id(&self, id: Uuid, token: &str) -> Result<Company, LookupError> {
        fetch_entity(&self.http, &self.base_uri, id, token).await
    }
}
