use crate::error::ApiError;
use crate::models::{Usuario, UsuarioForm};
use crate::services::{into_result, UsuarioGateway, UsuarioService};
use crate::utils::validation::{validate_profile, validate_registration};

/// ViewModel del CRUD de usuarios
pub struct UsuarioViewModel<G = UsuarioService> {
    gateway: G,
}

impl UsuarioViewModel<UsuarioService> {
    pub fn new() -> Self {
        Self::with_gateway(UsuarioService::default())
    }
}

impl Default for UsuarioViewModel<UsuarioService> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: UsuarioGateway> UsuarioViewModel<G> {
    pub fn with_gateway(gateway: G) -> Self {
        Self { gateway }
    }

    /// Lista ordenada por id
    pub async fn listar(&self) -> Result<Vec<Usuario>, ApiError> {
        let response = into_result(self.gateway.listar().await?, "No se pudo obtener la lista de usuarios")?;
        let mut usuarios = response.usuarios;
        usuarios.sort_by_key(|u| u.id);
        Ok(usuarios)
    }

    pub async fn obtener(&self, id: i64) -> Result<Usuario, ApiError> {
        let response = into_result(self.gateway.obtener(id).await?, "Usuario no encontrado")?;
        response
            .usuario
            .ok_or_else(|| ApiError::Server("Usuario no encontrado".to_string()))
    }

    /// Alta desde el panel de administración (la contraseña es obligatoria)
    pub async fn crear(&self, form: &UsuarioForm) -> Result<String, ApiError> {
        validate_registration(&form.nombre, form.email.trim(), &form.password, &form.password)?;
        let response = into_result(
            self.gateway.crear(&form.to_create_request()).await?,
            "No se pudo crear el usuario",
        )?;
        Ok(response.message.unwrap_or_else(|| "Usuario creado".to_string()))
    }

    /// Edición: nombre, correo y rol; la contraseña no se modifica aquí
    pub async fn actualizar(&self, id: i64, form: &UsuarioForm) -> Result<String, ApiError> {
        validate_profile(&form.nombre, form.email.trim())?;
        let response = into_result(
            self.gateway.actualizar(id, &form.to_update_request()).await?,
            "No se pudo actualizar el usuario",
        )?;
        Ok(response.message.unwrap_or_else(|| "Usuario actualizado".to_string()))
    }

    pub async fn eliminar(&self, id: i64) -> Result<String, ApiError> {
        let response = into_result(self.gateway.eliminar(id).await?, "No se pudo eliminar el usuario")?;
        Ok(response.message.unwrap_or_else(|| "Usuario eliminado".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::models::{ApiMessage, RegisterRequest, Role, UpdateUsuarioRequest, UsuarioResponse, UsuariosResponse};
    use std::cell::RefCell;

    /// Backend en memoria con la misma semántica que las rutas `/usuario`
    struct InMemoryUsuarios {
        usuarios: RefCell<Vec<Usuario>>,
        next_id: RefCell<i64>,
    }

    impl InMemoryUsuarios {
        fn seeded() -> Self {
            Self {
                usuarios: RefCell::new(vec![
                    Usuario {
                        id: 2,
                        email: "luis@uct.cl".to_string(),
                        nombre_completo: "Luis Soto".to_string(),
                        rol: Some(Role::Conserje),
                    },
                    Usuario {
                        id: 1,
                        email: "ana@uct.cl".to_string(),
                        nombre_completo: "Ana Pérez".to_string(),
                        rol: Some(Role::Admin),
                    },
                ]),
                next_id: RefCell::new(3),
            }
        }

        fn message(success: bool, message: &str) -> ApiMessage {
            ApiMessage {
                success,
                message: Some(message.to_string()),
            }
        }
    }

    impl UsuarioGateway for InMemoryUsuarios {
        async fn listar(&self) -> Result<UsuariosResponse, ApiError> {
            Ok(UsuariosResponse {
                success: true,
                usuarios: self.usuarios.borrow().clone(),
                message: None,
            })
        }

        async fn obtener(&self, id: i64) -> Result<UsuarioResponse, ApiError> {
            let usuario = self.usuarios.borrow().iter().find(|u| u.id == id).cloned();
            Ok(UsuarioResponse {
                success: usuario.is_some(),
                message: usuario.is_none().then(|| "Usuario no encontrado".to_string()),
                usuario,
            })
        }

        async fn crear(&self, request: &RegisterRequest) -> Result<ApiMessage, ApiError> {
            if self.usuarios.borrow().iter().any(|u| u.email == request.email) {
                return Ok(Self::message(false, "El correo ya existe"));
            }
            let id = *self.next_id.borrow();
            *self.next_id.borrow_mut() += 1;
            self.usuarios.borrow_mut().push(Usuario {
                id,
                email: request.email.clone(),
                nombre_completo: request.nombre_completo.clone(),
                rol: Some(request.rol),
            });
            Ok(Self::message(
                true,
                &format!("Usuario {} registrado como {}", request.nombre_completo, request.rol),
            ))
        }

        async fn actualizar(&self, id: i64, request: &UpdateUsuarioRequest) -> Result<ApiMessage, ApiError> {
            let mut usuarios = self.usuarios.borrow_mut();
            match usuarios.iter_mut().find(|u| u.id == id) {
                Some(u) => {
                    u.nombre_completo = request.nombre_completo.clone();
                    u.email = request.email.clone();
                    u.rol = Some(request.rol);
                    Ok(Self::message(true, "Usuario actualizado"))
                }
                None => Ok(Self::message(false, "Usuario no encontrado")),
            }
        }

        async fn eliminar(&self, id: i64) -> Result<ApiMessage, ApiError> {
            let mut usuarios = self.usuarios.borrow_mut();
            let before = usuarios.len();
            usuarios.retain(|u| u.id != id);
            if usuarios.len() == before {
                Ok(Self::message(false, "Usuario no encontrado"))
            } else {
                Ok(Self::message(true, "Usuario eliminado"))
            }
        }
    }

    fn form(nombre: &str, email: &str, password: &str, rol: Role) -> UsuarioForm {
        UsuarioForm {
            nombre: nombre.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            rol,
        }
    }

    #[tokio::test]
    async fn list_is_sorted_by_id() {
        let vm = UsuarioViewModel::with_gateway(InMemoryUsuarios::seeded());
        let ids: Vec<i64> = vm.listar().await.unwrap().iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn create_then_list_shows_new_user() {
        let vm = UsuarioViewModel::with_gateway(InMemoryUsuarios::seeded());
        let message = vm
            .crear(&form("Marta Díaz", "marta@uct.cl", "secreto1", Role::Conserje))
            .await
            .unwrap();
        assert_eq!(message, "Usuario Marta Díaz registrado como conserje");

        let usuarios = vm.listar().await.unwrap();
        assert_eq!(usuarios.len(), 3);
        assert_eq!(usuarios[2].email, "marta@uct.cl");
    }

    #[tokio::test]
    async fn duplicate_email_reports_server_message() {
        let vm = UsuarioViewModel::with_gateway(InMemoryUsuarios::seeded());
        let result = vm.crear(&form("Otra Ana", "ana@uct.cl", "secreto1", Role::Admin)).await;
        assert_eq!(result, Err(ApiError::Server("El correo ya existe".to_string())));
    }

    #[tokio::test]
    async fn create_requires_password() {
        let vm = UsuarioViewModel::with_gateway(InMemoryUsuarios::seeded());
        let result = vm.crear(&form("Marta", "marta@uct.cl", "", Role::Conserje)).await;
        assert_eq!(result, Err(ApiError::Validation(ValidationError::MissingCredentials)));
    }

    #[tokio::test]
    async fn update_changes_role_without_password() {
        let vm = UsuarioViewModel::with_gateway(InMemoryUsuarios::seeded());
        vm.actualizar(2, &form("Luis Soto", "luis@uct.cl", "", Role::Admin))
            .await
            .unwrap();
        assert_eq!(vm.obtener(2).await.unwrap().rol, Some(Role::Admin));
    }

    #[tokio::test]
    async fn delete_missing_user_fails() {
        let vm = UsuarioViewModel::with_gateway(InMemoryUsuarios::seeded());
        assert_eq!(vm.eliminar(1).await, Ok("Usuario eliminado".to_string()));
        assert_eq!(vm.eliminar(1).await, Err(ApiError::Server("Usuario no encontrado".to_string())));
        assert_eq!(vm.obtener(1).await, Err(ApiError::Server("Usuario no encontrado".to_string())));
    }
}
