use serde::{Deserialize, Serialize};

/// Claims decoded from the caller's bearer token by the auth middleware.
/// The service layer never sees these; role gating happens at the API edge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    #[serde(default)]
    pub roles: Vec<String>,
    pub exp: usize,
}

impl Claims {
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}
