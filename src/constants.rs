use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_CANDIDATE: &str = "candidate";
