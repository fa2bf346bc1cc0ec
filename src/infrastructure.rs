pub mod auth;
pub mod clients;
pub mod db;
