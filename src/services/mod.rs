pub mod api_client;
pub mod auth_service;
pub mod usuario_service;

pub use api_client::{into_result, ApiClient};
pub use auth_service::AuthService;
pub use usuario_service::UsuarioService;

use crate::error::ApiError;
use crate::models::{
    ApiMessage, AuthResponse, LoginRequest, RegisterRequest, UpdateUsuarioRequest, UsuarioResponse,
    UsuariosResponse,
};

/// Puerto de autenticación que usan los view models
#[allow(async_fn_in_trait)]
pub trait AuthGateway {
    async fn authenticate(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError>;
    async fn register(&self, request: &RegisterRequest) -> Result<ApiMessage, ApiError>;
    async fn register_conserje(&self, request: &RegisterRequest) -> Result<ApiMessage, ApiError>;
}

/// Puerto del CRUD de usuarios
#[allow(async_fn_in_trait)]
pub trait UsuarioGateway {
    async fn listar(&self) -> Result<UsuariosResponse, ApiError>;
    async fn obtener(&self, id: i64) -> Result<UsuarioResponse, ApiError>;
    async fn crear(&self, request: &RegisterRequest) -> Result<ApiMessage, ApiError>;
    async fn actualizar(&self, id: i64, request: &UpdateUsuarioRequest) -> Result<ApiMessage, ApiError>;
    async fn eliminar(&self, id: i64) -> Result<ApiMessage, ApiError>;
}
