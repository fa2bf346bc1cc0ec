use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    domain::entities::{company::Company, job_category::JobCategory},
    errors::ValidationError,
};

/// A persisted employment-history record. The id is allocated by the store
/// on insert and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Experience {
    pub id: Uuid,
    pub job_title: String,
    pub job_category_id: Uuid,
    pub company_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Transient request payload for create and update. Every data field is
/// optional at the wire level so validation can report exactly which required
/// attributes are absent. `id` is ignored on create and selects the target
/// record on update.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ExperienceInput {
    pub id: Option<Uuid>,
    pub job_title: Option<String>,
    pub job_category_id: Option<Uuid>,
    pub company_id: Option<Uuid>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// The validated, fully-populated field set carried to the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExperience {
    pub job_title: String,
    pub job_category_id: Uuid,
    pub company_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl ExperienceInput {
    /// Checks all five required attributes and the date-range invariant.
    /// Has no side effects; runs before any persistence mutation.
    pub fn validate(&self) -> Result<NewExperience, ValidationError> {
        let mut missing = Vec::new();

        let job_title = match self.job_title.as_deref().map(str::trim) {
            Some(title) if !title.is_empty() => Some(title.to_owned()),
            _ => {
                missing.push("job_title");
                None
            }
        };
        if self.company_id.is_none() {
            missing.push("company_id");
        }
        if self.job_category_id.is_none() {
            missing.push("job_category_id");
        }
        if self.start_date.is_none() {
            missing.push("start_date");
        }
        if self.end_date.is_none() {
            missing.push("end_date");
        }

        match (job_title, self.company_id, self.job_category_id, self.start_date, self.end_date) {
            (Some(job_title), Some(company_id), Some(job_category_id), Some(start_date), Some(end_date)) => {
                // Equal start and end dates are valid (single-day engagement).
                if start_date > end_date {
                    return Err(ValidationError::InvalidDateRange);
                }
                Ok(NewExperience {
                    job_title,
                    job_category_id,
                    company_id,
                    start_date,
                    end_date,
                })
            }
            _ => Err(ValidationError::MissingAttributes(missing)),
        }
    }
}

/// Read-only aggregate built fresh on every request: an experience's own
/// fields plus the company and job category resolved live from their
/// collaborators. Never persisted, never cached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedExperience {
    pub id: Uuid,
    pub job_title: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub company: Company,
    pub job_category: JobCategory,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_input() -> ExperienceInput {
        ExperienceInput {
            id: None,
            job_title: Some("Engineer".to_string()),
            job_category_id: Some(Uuid::new_v4()),
            company_id: Some(Uuid::new_v4()),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1),
            end_date: NaiveDate::from_ymd_opt(2024, 6, 1),
        }
    }

    #[test]
    fn accepts_complete_input() {
        let input = full_input();
        let valid = input.validate().expect("complete input should validate");
        assert_eq!(valid.job_title, "Engineer");
        assert_eq!(valid.start_date, input.start_date.unwrap());
    }

    #[test]
    fn reports_exactly_the_missing_attributes() {
        let input = ExperienceInput {
            job_title: None,
            end_date: None,
            ..full_input()
        };
        let err = input.validate().unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingAttributes(vec!["job_title", "end_date"])
        );
    }

    #[test]
    fn blank_job_title_counts_as_missing() {
        let input = ExperienceInput {
            job_title: Some("   ".to_string()),
            ..full_input()
        };
        assert_eq!(
            input.validate().unwrap_err(),
            ValidationError::MissingAttributes(vec!["job_title"])
        );
    }

    #[test]
    fn all_fields_absent_reports_all_five() {
        let err = ExperienceInput::default().validate().unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingAttributes(vec![
                "job_title",
                "company_id",
                "job_category_id",
                "start_date",
                "end_date",
            ])
        );
    }

    #[test]
    fn equal_start_and_end_dates_are_valid() {
        let input = ExperienceInput {
            start_date: NaiveDate::from_ymd_opt(2024, 3, 15),
            end_date: NaiveDate::from_ymd_opt(2024, 3, 15),
            ..full_input()
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn rejects_start_date_after_end_date() {
        let input = ExperienceInput {
            start_date: NaiveDate::from_ymd_opt(2024, 6, 1),
            end_date: NaiveDate::from_ymd_opt(2024, 1, 1),
            ..full_input()
        };
        assert_eq!(input.validate().unwrap_err(), ValidationError::InvalidDateRange);
    }
}
