use uuid::Uuid;

use crate::{
    entities::experience::{DetailedExperience, Experience, ExperienceInput},
    errors::{AppError, Collaborator, LookupError, NotFoundKind, ValidationError},
    infrastructure::clients::{company::CompanyLookup, job_category::JobCategoryLookup},
    repositories::experience::ExperienceRepository,
};

/// Core orchestrator for experience records: validation-first CRUD against
/// the store, plus composition of a record with live company and job-category
/// lookups into a `DetailedExperience`.
///
/// All three collaborators are constructor-injected so tests can substitute
/// doubles.
pub struct ExperienceHandler<R, C, J>
where
    R: ExperienceRepository,
    C: CompanyLookup,
    J: JobCategoryLookup,
{
    pub experience_repo: R,
    pub companies: C,
    pub job_categories: J,
}

impl<R, C, J> ExperienceHandler<R, C, J>
where
    R: ExperienceRepository,
    C: CompanyLookup,
    J: JobCategoryLookup,
{
    pub fn new(experience_repo: R, companies: C, job_categories: J) -> Self {
        ExperienceHandler {
            experience_repo,
            companies,
            job_categories,
        }
    }

    /// Returns every stored experience. Never fails on an empty store.
    pub async fn get_all(&self) -> Result<Vec<Experience>, AppError> {
        tracing::info!("Getting all experiences");
        self.experience_repo.find_all().await
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Experience, AppError> {
        tracing::info!(%id, "Getting experience");
        self.experience_repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound(NotFoundKind::Experience))
    }

    /// Validates the input and persists a new record with a store-allocated id.
    pub async fn create(&self, input: ExperienceInput) -> Result<Experience, AppError> {
        tracing::info!("Creating experience");
        let new_experience = input.validate()?;
        let created = self.experience_repo.insert(&new_experience).await?;
        tracing::info!(id = %created.id, "Created experience");
        Ok(created)
    }

    /// Overwrites all five data fields of an existing record, keeping its id.
    pub async fn update(&self, input: ExperienceInput) -> Result<Experience, AppError> {
        let Some(id) = input.id else {
            return Err(ValidationError::MissingAttributes(vec!["id"]).into());
        };

        tracing::info!(%id, "Updating experience");
        let new_fields = input.validate()?;

        let mut existing = self.get_by_id(id).await?;
        existing.job_title = new_fields.job_title;
        existing.job_category_id = new_fields.job_category_id;
        existing.company_id = new_fields.company_id;
        existing.start_date = new_fields.start_date;
        existing.end_date = new_fields.end_date;

        self.experience_repo.update(&existing).await
    }

    /// Removes a record. The record is resolved first so a missing id is
    /// reported as NotFound rather than silently ignored.
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        tracing::info!(%id, "Deleting experience");
        let experience = self.get_by_id(id).await?;
        self.experience_repo.delete(experience.id).await
    }

    /// Resolves a record and enriches it with live company and job-category
    /// data, forwarding the caller's bearer token to both collaborators.
    ///
    /// The two lookups are independent and run concurrently; the company
    /// result is always inspected first so a double failure surfaces the
    /// company failure, matching what sequential execution would report.
    pub async fn get_detailed_by_id(
        &self,
        id: Uuid,
        token: &str,
    ) -> Result<DetailedExperience, AppError> {
        tracing::info!(%id, "Getting detailed experience");
        let experience = self.get_by_id(id).await?;

        let (company_result, job_category_result) = tokio::join!(
            self.companies.company_by_id(experience.company_id, token),
            self.job_categories.job_category_by_id(experience.job_category_id, token),
        );

        let company = company_result.map_err(|cause| {
            lookup_failure(Collaborator::Company, experience.company_id, cause)
        })?;
        let job_category = job_category_result.map_err(|cause| {
            lookup_failure(Collaborator::JobCategory, experience.job_category_id, cause)
        })?;

        Ok(DetailedExperience {
            id: experience.id,
            job_title: experience.job_title,
            start_date: experience.start_date,
            end_date: experience.end_date,
            company,
            job_category,
        })
    }
}

/// Maps a collaborator lookup failure onto the service taxonomy: an unknown
/// id stays a tagged NotFound, everything else is an upstream failure.
fn lookup_failure(collaborator: Collaborator, id: Uuid, cause: LookupError) -> AppError {
    match cause {
        LookupError::NotFound => {
            tracing::error!(%id, %collaborator, "Referenced entity not found upstream");
            let kind = match collaborator {
                Collaborator::Company => NotFoundKind::Company,
                Collaborator::JobCategory => NotFoundKind::JobCategory,
            };
            AppError::NotFound(kind)
        }
        cause => {
            tracing::error!(%id, %collaborator, %cause, "Collaborator lookup failed");
            AppError::Upstream { collaborator, id, cause }
        }
    }
}
