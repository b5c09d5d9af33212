// ============================================================================
// VIEWMODELS - casos de uso: validación + una llamada al servicio
// ============================================================================
// Devuelven valores; los hooks actualizan el estado de la UI
// ============================================================================

pub mod auth_viewmodel;
pub mod usuario_viewmodel;

pub use auth_viewmodel::{AuthViewModel, LoginOutcome};
pub use usuario_viewmodel::UsuarioViewModel;
