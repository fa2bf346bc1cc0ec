pub mod company;
pub mod experience;
pub mod job_category;
pub mod token;
