use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;

use super::api::Envelope;

/// Rol de la cuenta. En el backend viaja como nombre o como id de rol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Conserje,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Admin, Role::Conserje];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Conserje => "conserje",
        }
    }

    pub fn i18n_key(&self) -> &'static str {
        match self {
            Role::Admin => "role_admin",
            Role::Conserje => "role_conserje",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "admin" | "administrador" => Some(Role::Admin),
            "conserje" => Some(Role::Conserje),
            _ => None,
        }
    }

    /// Ids de la tabla `rol` del backend
    pub fn from_id(id: i64) -> Option<Self> {
        match id {
            1 => Some(Role::Admin),
            2 => Some(Role::Conserje),
            _ => None,
        }
    }

    fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::String(name) => Self::from_name(name),
            serde_json::Value::Number(n) => n.as_i64().and_then(Self::from_id),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Role::from_json(&value)
            .ok_or_else(|| de::Error::custom(format!("rol desconocido: {}", value)))
    }
}

/// Campo de rol opcional; valores desconocidos quedan en `None`
pub(crate) fn lenient_role<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Role>, D::Error> {
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(Role::from_json))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Cuerpo de `POST /auth/register` (y de `POST /usuario/crear`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub nombre_completo: String,
    pub email: String,
    pub password: String,
    pub rol: Role,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "lenient_role")]
    pub rol: Option<Role>,
    #[serde(default)]
    pub nombre_completo: Option<String>,
}

impl Envelope for AuthResponse {
    fn success(&self) -> bool {
        self.success
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// Usuario autenticado, guardado en localStorage bajo la clave `user`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub email: String,
    pub rol: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
}

impl SessionUser {
    pub fn is_admin(&self) -> bool {
        self.rol == Role::Admin
    }

    /// Nombre para el encabezado; sin nombre se usa el correo
    pub fn display_name(&self) -> &str {
        self.nombre.as_deref().unwrap_or(&self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn role_accepts_names_and_ids() {
        let roles: Vec<Role> = serde_json::from_value(json!(["admin", "Conserje", "administrador", 1, 2])).unwrap();
        assert_eq!(roles, vec![Role::Admin, Role::Conserje, Role::Admin, Role::Admin, Role::Conserje]);
        assert!(serde_json::from_value::<Role>(json!("superusuario")).is_err());
        assert!(serde_json::from_value::<Role>(json!(7)).is_err());
    }

    #[test]
    fn role_serializes_as_wire_name() {
        assert_eq!(serde_json::to_value(Role::Conserje).unwrap(), json!("conserje"));
        assert_eq!(serde_json::to_value(Role::Admin).unwrap(), json!("admin"));
    }

    #[test]
    fn auth_response_tolerates_missing_or_unknown_role() {
        let ok: AuthResponse = serde_json::from_value(json!({
            "success": true,
            "message": "Autenticado como ana@uct.cl",
            "rol": 2
        }))
        .unwrap();
        assert_eq!(ok.rol, Some(Role::Conserje));

        let failed: AuthResponse = serde_json::from_value(json!({
            "success": false,
            "message": "Credenciales inválidas"
        }))
        .unwrap();
        assert_eq!(failed.rol, None);
        assert_eq!(failed.message(), Some("Credenciales inválidas"));

        let odd: AuthResponse = serde_json::from_value(json!({ "success": true, "rol": 99 })).unwrap();
        assert_eq!(odd.rol, None);
    }

    #[test]
    fn register_body_uses_backend_field_names() {
        let body = RegisterRequest {
            nombre_completo: "Ana Pérez".to_string(),
            email: "ana@uct.cl".to_string(),
            password: "secreto1".to_string(),
            rol: Role::Admin,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "nombre_completo": "Ana Pérez",
                "email": "ana@uct.cl",
                "password": "secreto1",
                "rol": "admin"
            })
        );
    }

    #[test]
    fn session_user_roundtrips_through_storage_format() {
        let stored = r#"{"email":"luis@uct.cl","rol":"conserje"}"#;
        let user: SessionUser = serde_json::from_str(stored).unwrap();
        assert!(!user.is_admin());
        assert_eq!(user.display_name(), "luis@uct.cl");
        assert_eq!(serde_json::to_string(&user).unwrap(), stored);
    }
}
