// ============================================================================
// ECOAULA UCT - FRONTEND (YEW + WASM)
// ============================================================================
// Capas:
// - Models: estructuras compartidas con el backend Flask
// - Services: SOLO comunicación API
// - ViewModels: validación + casos de uso
// - Hooks: estado de UI sobre los view models
// - Components: vistas
// ============================================================================

pub mod components;
pub mod config;
pub mod context;
pub mod error;
pub mod hooks;
pub mod models;
pub mod routes;
pub mod services;
pub mod stores;
pub mod utils;
pub mod viewmodels;

pub use config::CONFIG;
pub use error::{ApiError, ValidationError};
