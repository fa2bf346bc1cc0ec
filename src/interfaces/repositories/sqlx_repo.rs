/// Postgres-backed experience store.
#[derive(Clone)]
pub struct SqlxExperienceRepo {
    pub(crate) pool: sqlx::PgPool,
}

impl SqlxExperienceRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxExperienceRepo { pool }
    }
}
