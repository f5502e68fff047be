pub mod account;
pub mod assistant;
pub mod auth;
pub mod config;
pub mod profile;
pub mod session;
pub mod sound;
pub mod stats;
pub mod task;
pub mod timer;
