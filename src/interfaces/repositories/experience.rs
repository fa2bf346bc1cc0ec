use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    entities::experience::{Experience, NewExperience},
    errors::{AppError, NotFoundKind},
    repositories::sqlx_repo::SqlxExperienceRepo,
};

/// CRUD persistence abstraction for experience records, keyed by id.
/// The store allocates ids on insert and owns the records exclusively.
#[async_trait]
pub trait ExperienceRepository: Send + Sync {
    /// Returns all stored records; order is not significant.
    async fn find_all(&self) -> Result<Vec<Experience>, AppError>;

    /// Returns the record with the given id, or None.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Experience>, AppError>;

    /// Persists a new record, allocating its id, and returns it.
    async fn insert(&self, new_experience: &NewExperience) -> Result<Experience, AppError>;

    /// Overwrites all data fields of the record with `experience.id`.
    async fn update(&self, experience: &Experience) -> Result<Experience, AppError>;

    /// Removes the record with the given id.
    async fn delete(&self, id: Uuid) -> Result<(), AppError>;
}

const EXPERIENCE_COLUMNS: &str =
    "id, job_title, job_category_id, company_id, start_date, end_date";

#[async_trait]
impl ExperienceRepository for SqlxExperienceRepo {
    async fn find_all(&self) -> Result<Vec<Experience>, AppError> {
        let experiences = sqlx::query_as::<_, Experience>(&format!(
            "SELECT {EXPERIENCE_COLUMNS} FROM experience"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(experiences)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Experience>, AppError> {
        let experience = sqlx::query_as::<_, Experience>(&format!(
            "SELECT {EXPERIENCE_COLUMNS} FROM experience WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(experience)
    }

    async fn insert(&self, new_experience: &NewExperience) -> Result<Experience, AppError> {
        let created = sqlx::query_as::<_, Experience>(&format!(
            "INSERT INTO experience (job_title, job_category_id, company_id, start_date, end_date)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {EXPERIENCE_COLUMNS}"
        ))
        .bind(&new_experience.job_title)
        .bind(new_experience.job_category_id)
        .bind(new_experience.company_id)
        .bind(new_experience.start_date)
        .bind(new_experience.end_date)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn update(&self, experience: &Experience) -> Result<Experience, AppError> {
        let updated = sqlx::query_as::<_, Experience>(&format!(
            "UPDATE experience
             SET job_title = $1, job_category_id = $2, company_id = $3,
                 start_date = $4, end_date = $5
             WHERE id = $6
             RETURNING {EXPERIENCE_COLUMNS}"
        ))
        .bind(&experience.job_title)
        .bind(experience.job_category_id)
        .bind(experience.company_id)
        .bind(experience.start_date)
        .bind(experience.end_date)
        .bind(experience.id)
        .fetch_optional(&self.pool)
        .await?;

        updated.ok_or(AppError::NotFound(NotFoundKind::Experience))
    }

    async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM experience WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            Err(AppError::NotFound(NotFoundKind::Experience))
        } else {
            Ok(())
        }
    }
}
