use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Job-category record owned by the external taxonomy service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobCategory {
    pub id: Uuid,
    pub name: String,
}
