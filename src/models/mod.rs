pub mod api;
pub mod auth;
pub mod lectura;
pub mod usuario;

pub use api::{ApiMessage, Envelope};
pub use auth::{AuthResponse, LoginRequest, RegisterRequest, Role, SessionUser};
pub use lectura::{AirSample, AqiBand, DashboardSummary, RoomReading};
pub use usuario::{UpdateUsuarioRequest, Usuario, UsuarioForm, UsuarioResponse, UsuariosResponse};
