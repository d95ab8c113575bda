// src/lib.rs
pub mod config;
pub mod database;
pub mod dtos;
pub mod error;
pub mod filter;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod routes;
pub mod state;

pub use routes::build_app;
pub use state::AppState;
