pub mod experience;
pub mod extractors;
