use crate::error::ApiError;
use crate::models::{ApiMessage, RegisterRequest, UpdateUsuarioRequest, UsuarioResponse, UsuariosResponse};

use super::{ApiClient, UsuarioGateway};

/// Adaptador HTTP de `/usuario`
#[derive(Debug, Clone, PartialEq)]
pub struct UsuarioService {
    client: ApiClient,
}

impl Default for UsuarioService {
    fn default() -> Self {
        Self::new(&ApiClient::default())
    }
}

impl UsuarioService {
    /// `root` apunta a la raíz del backend; las rutas cuelgan de `/usuario`
    pub fn new(root: &ApiClient) -> Self {
        Self {
            client: root.scoped("usuario"),
        }
    }
}

impl UsuarioGateway for UsuarioService {
    async fn listar(&self) -> Result<UsuariosResponse, ApiError> {
        log::info!("👥 Listando usuarios...");
        let response: UsuariosResponse = self.client.get("listar").await?;
        log::info!("✅ {} usuarios recibidos", response.usuarios.len());
        Ok(response)
    }

    async fn obtener(&self, id: i64) -> Result<UsuarioResponse, ApiError> {
        log::info!("🔍 Obteniendo usuario {}", id);
        self.client.get(&id.to_string()).await
    }

    async fn crear(&self, request: &RegisterRequest) -> Result<ApiMessage, ApiError> {
        log::info!("➕ Creando usuario {} ({})", request.email, request.rol);
        self.client.post("crear", request).await
    }

    async fn actualizar(&self, id: i64, request: &UpdateUsuarioRequest) -> Result<ApiMessage, ApiError> {
        log::info!("📝 Actualizando usuario {}", id);
        self.client.put(&format!("{}/actualizar", id), request).await
    }

    async fn eliminar(&self, id: i64) -> Result<ApiMessage, ApiError> {
        log::info!("🗑️ Eliminando usuario {}", id);
        self.client.delete(&format!("{}/eliminar", id)).await
    }
}
