pub mod health;
pub mod job;
pub mod transcript;
