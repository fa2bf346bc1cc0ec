pub mod experience;
pub mod sqlx_repo;
