use crate::error::ApiError;
use crate::models::{LoginRequest, RegisterRequest, Role, SessionUser};
use crate::services::{into_result, AuthGateway, AuthService};
use crate::utils::validation::{validate_login, validate_registration};

/// Resultado de un login aceptado
#[derive(Debug, Clone, PartialEq)]
pub struct LoginOutcome {
    pub user: SessionUser,
    pub message: String,
}

/// ViewModel de autenticación - SOLO lógica de negocio
pub struct AuthViewModel<G = AuthService> {
    gateway: G,
}

impl AuthViewModel<AuthService> {
    pub fn new() -> Self {
        Self::with_gateway(AuthService::default())
    }
}

impl Default for AuthViewModel<AuthService> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: AuthGateway> AuthViewModel<G> {
    pub fn with_gateway(gateway: G) -> Self {
        Self { gateway }
    }

    /// Valida, autentica y arma el usuario de sesión.
    /// El rol que informa el backend prevalece sobre el elegido en el formulario.
    pub async fn login(&self, email: &str, password: &str, selected_role: Role) -> Result<LoginOutcome, ApiError> {
        let email = email.trim();
        validate_login(email, password)?;

        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response = into_result(self.gateway.authenticate(&request).await?, "Credenciales inválidas")?;

        let rol = response.rol.unwrap_or(selected_role);
        if rol != selected_role {
            log::info!("ℹ️ Rol elegido {} reemplazado por el del servidor: {}", selected_role, rol);
        }

        let message = response
            .message
            .clone()
            .unwrap_or_else(|| format!("Autenticado como {}", rol));

        Ok(LoginOutcome {
            user: SessionUser {
                email: email.to_string(),
                rol,
                nombre: response.nombre_completo,
            },
            message,
        })
    }

    /// Registro público; los conserjes van a su propia ruta
    pub async fn register(
        &self,
        nombre: &str,
        email: &str,
        password: &str,
        confirm_password: &str,
        rol: Role,
    ) -> Result<String, ApiError> {
        validate_registration(nombre, email.trim(), password, confirm_password)?;

        let request = RegisterRequest {
            nombre_completo: nombre.trim().to_string(),
            email: email.trim().to_string(),
            password: password.to_string(),
            rol,
        };

        let response = match rol {
            Role::Admin => self.gateway.register(&request).await?,
            Role::Conserje => self.gateway.register_conserje(&request).await?,
        };
        let response = into_result(response, "No se pudo registrar el usuario")?;

        Ok(response
            .message
            .unwrap_or_else(|| format!("Usuario {} registrado como {}", request.nombre_completo, rol)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::models::{ApiMessage, AuthResponse};
    use std::cell::RefCell;

    #[derive(Default)]
    struct FakeAuth {
        calls: RefCell<Vec<String>>,
        login_reply: Option<AuthResponse>,
        offline: bool,
    }

    impl FakeAuth {
        fn replying(response: AuthResponse) -> Self {
            Self {
                login_reply: Some(response),
                ..Self::default()
            }
        }

        fn reply(&self, call: String) -> Result<ApiMessage, ApiError> {
            self.calls.borrow_mut().push(call);
            if self.offline {
                return Err(ApiError::Connection("Network error".to_string()));
            }
            Ok(ApiMessage { success: true, message: None })
        }
    }

    impl AuthGateway for FakeAuth {
        async fn authenticate(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
            self.calls.borrow_mut().push(format!("login:{}", request.email));
            if self.offline {
                return Err(ApiError::Connection("Network error".to_string()));
            }
            Ok(self.login_reply.clone().unwrap_or(AuthResponse {
                success: true,
                message: None,
                rol: None,
                nombre_completo: None,
            }))
        }

        async fn register(&self, request: &RegisterRequest) -> Result<ApiMessage, ApiError> {
            self.reply(format!("register:{}:{}", request.email, request.rol))
        }

        async fn register_conserje(&self, request: &RegisterRequest) -> Result<ApiMessage, ApiError> {
            self.reply(format!("register_conserje:{}", request.email))
        }
    }

    #[tokio::test]
    async fn invalid_email_never_reaches_the_server() {
        let vm = AuthViewModel::with_gateway(FakeAuth::default());
        let result = vm.login("ana.uct.cl", "secreto1", Role::Admin).await;
        assert_eq!(result, Err(ApiError::Validation(ValidationError::InvalidEmail)));
        assert!(vm.gateway.calls.borrow().is_empty());
    }

    #[tokio::test]
    async fn server_role_wins_over_selected_role() {
        let vm = AuthViewModel::with_gateway(FakeAuth::replying(AuthResponse {
            success: true,
            message: Some("Autenticado como ana@uct.cl".to_string()),
            rol: Some(Role::Conserje),
            nombre_completo: None,
        }));

        let outcome = vm.login(" ana@uct.cl ", "secreto1", Role::Admin).await.unwrap();
        assert_eq!(outcome.user.rol, Role::Conserje);
        assert_eq!(outcome.user.email, "ana@uct.cl");
        assert_eq!(outcome.message, "Autenticado como ana@uct.cl");
        assert_eq!(*vm.gateway.calls.borrow(), vec!["login:ana@uct.cl".to_string()]);
    }

    #[tokio::test]
    async fn selected_role_is_kept_when_server_omits_it() {
        let vm = AuthViewModel::with_gateway(FakeAuth::default());
        let outcome = vm.login("luis@uct.cl", "secreto1", Role::Conserje).await.unwrap();
        assert_eq!(outcome.user.rol, Role::Conserje);
        assert_eq!(outcome.message, "Autenticado como conserje");
    }

    #[tokio::test]
    async fn rejected_credentials_surface_server_message() {
        let vm = AuthViewModel::with_gateway(FakeAuth::replying(AuthResponse {
            success: false,
            message: Some("Credenciales inválidas".to_string()),
            rol: None,
            nombre_completo: None,
        }));
        let result = vm.login("ana@uct.cl", "secreto1", Role::Admin).await;
        assert_eq!(result, Err(ApiError::Server("Credenciales inválidas".to_string())));
    }

    #[tokio::test]
    async fn offline_login_is_a_connection_error() {
        let vm = AuthViewModel::with_gateway(FakeAuth {
            offline: true,
            ..FakeAuth::default()
        });
        let result = vm.login("ana@uct.cl", "secreto1", Role::Admin).await;
        assert!(matches!(result, Err(ApiError::Connection(_))));
    }

    #[tokio::test]
    async fn conserje_registration_uses_dedicated_route() {
        let vm = AuthViewModel::with_gateway(FakeAuth::default());
        let message = vm
            .register("Luis Soto", "luis@uct.cl", "secreto1", "secreto1", Role::Conserje)
            .await
            .unwrap();
        assert_eq!(message, "Usuario Luis Soto registrado como conserje");

        vm.register("Ana Pérez", "ana@uct.cl", "secreto1", "secreto1", Role::Admin)
            .await
            .unwrap();
        assert_eq!(
            *vm.gateway.calls.borrow(),
            vec!["register_conserje:luis@uct.cl".to_string(), "register:ana@uct.cl:admin".to_string()]
        );
    }

    #[tokio::test]
    async fn mismatched_confirmation_is_rejected_locally() {
        let vm = AuthViewModel::with_gateway(FakeAuth::default());
        let result = vm
            .register("Luis Soto", "luis@uct.cl", "secreto1", "secreto9", Role::Conserje)
            .await;
        assert_eq!(result, Err(ApiError::Validation(ValidationError::PasswordMismatch)));
        assert!(vm.gateway.calls.borrow().is_empty());
    }
}
