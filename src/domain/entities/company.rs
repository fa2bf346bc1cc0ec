use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Company record owned by the external company directory. Extra upstream
/// fields are ignored on deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
