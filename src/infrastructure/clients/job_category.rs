use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    entities::job_category::JobCategory,
    errors::LookupError,
    infrastructure::clients::fetch_entity,
};

/// Resolves a job-category id against the external taxonomy service.
#[async_trait]
pub trait JobCategoryLookup: Send + Sync {
    async fn job_category_by_id(&self, id: Uuid, token: &str)
        -> Result<JobCategory, LookupError>;
}

#[derive(Clone)]
pub struct JobCategoryApiClient {
    http: reqwest::Client,
    base_uri: String,
}

impl JobCategoryApiClient {
    pub fn new(http: reqwest::Client, base_uri: String) -> Self {
        JobCategoryApiClient { http, base_uri }
    }
}

#[async_trait]
impl JobCategoryLookup for JobCategoryApiClient {
    async fn job_category_by_id(
        &self,
        id: Uuid,
        token: &str,
    ) -> Result<JobCategory, LookupError> {
        fetch_entity(&self.http, &self.base_uri, id, token).await
    }
}
