use serde::{Deserialize, Serialize};

use super::api::Envelope;
use super::auth::{lenient_role, RegisterRequest, Role};

/// Usuario tal como lo lista `GET /usuario/listar`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "UsuarioWire")]
pub struct Usuario {
    pub id: i64,
    pub email: String,
    pub nombre_completo: String,
    pub rol: Option<Role>,
}

/// Forma de entrada: el backend puede mandar `rol`, `rol_id` o ambos
#[derive(Deserialize)]
struct UsuarioWire {
    id: i64,
    email: String,
    nombre_completo: String,
    #[serde(default, deserialize_with = "lenient_role")]
    rol: Option<Role>,
    #[serde(default, deserialize_with = "lenient_role")]
    rol_id: Option<Role>,
}

impl From<UsuarioWire> for Usuario {
    fn from(wire: UsuarioWire) -> Self {
        Self {
            id: wire.id,
            email: wire.email,
            nombre_completo: wire.nombre_completo,
            // `rol` manda sobre `rol_id`
            rol: wire.rol.or(wire.rol_id),
        }
    }
}

/// Datos del formulario de alta/edición
#[derive(Debug, Clone, PartialEq)]
pub struct UsuarioForm {
    pub nombre: String,
    pub email: String,
    pub password: String,
    pub rol: Role,
}

impl Default for UsuarioForm {
    fn default() -> Self {
        Self {
            nombre: String::new(),
            email: String::new(),
            password: String::new(),
            rol: Role::Conserje,
        }
    }
}

impl UsuarioForm {
    /// Formulario precargado para editar un usuario existente
    pub fn from_usuario(usuario: &Usuario) -> Self {
        Self {
            nombre: usuario.nombre_completo.clone(),
            email: usuario.email.clone(),
            password: String::new(),
            rol: usuario.rol.unwrap_or(Role::Conserje),
        }
    }

    pub fn to_create_request(&self) -> RegisterRequest {
        RegisterRequest {
            nombre_completo: self.nombre.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            rol: self.rol,
        }
    }

    pub fn to_update_request(&self) -> UpdateUsuarioRequest {
        UpdateUsuarioRequest {
            nombre_completo: self.nombre.trim().to_string(),
            email: self.email.trim().to_string(),
            rol: self.rol,
        }
    }
}

/// Cuerpo de `PUT /usuario/:id/actualizar`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateUsuarioRequest {
    pub nombre_completo: String,
    pub email: String,
    pub rol: Role,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UsuariosResponse {
    pub success: bool,
    #[serde(default)]
    pub usuarios: Vec<Usuario>,
    #[serde(default)]
    pub message: Option<String>,
}

impl Envelope for UsuariosResponse {
    fn success(&self) -> bool {
        self.success
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UsuarioResponse {
    pub success: bool,
    #[serde(default)]
    pub usuario: Option<Usuario>,
    #[serde(default)]
    pub message: Option<String>,
}

impl Envelope for UsuarioResponse {
    fn success(&self) -> bool {
        self.success
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
