// ============================================================================
// RUTAS - resolución de pantalla con control de rol
// ============================================================================

use crate::models::{Role, SessionUser};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Principal,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/",
            Route::Principal => "/principal",
        }
    }

    /// Rutas desconocidas vuelven al login
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "/principal" => Route::Principal,
            _ => Route::Login,
        }
    }

    pub fn is_protected(&self) -> bool {
        matches!(self, Route::Principal)
    }
}

/// Ruta actual según la barra de direcciones
pub fn current_route() -> Route {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .map(|path| Route::from_path(&path))
        .unwrap_or(Route::Login)
}

/// Refleja la ruta en el historial sin recargar la página
pub fn navigate(route: Route) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let already_there = window
        .location()
        .pathname()
        .map(|path| Route::from_path(&path) == route && path == route.path())
        .unwrap_or(false);
    if already_there {
        return;
    }
    if let Ok(history) = window.history() {
        if let Err(e) = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(route.path())) {
            log::warn!("⚠️ No se pudo actualizar la URL: {:?}", e);
        }
    }
}

/// Pantalla que corresponde mostrar para la ruta pedida.
///
/// Una ruta protegida sin sesión, o con un rol distinto al exigido,
/// termina en el login. Con sesión abierta el login lleva a la principal.
pub fn guard(requested: Route, session: Option<&SessionUser>, required_role: Option<Role>) -> Route {
    match (requested.is_protected(), session) {
        (true, None) => Route::Login,
        (true, Some(user)) => match required_role {
            Some(role) if user.rol != role => Route::Login,
            _ => requested,
        },
        (false, Some(_)) => Route::Principal,
        (false, None) => requested,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(rol: Role) -> SessionUser {
        SessionUser {
            email: "ana@uct.cl".to_string(),
            rol,
            nombre: None,
        }
    }

    #[test]
    fn protected_route_without_session_goes_to_login() {
        assert_eq!(guard(Route::Principal, None, None), Route::Login);
    }

    #[test]
    fn any_session_opens_principal() {
        let conserje = user(Role::Conserje);
        assert_eq!(guard(Route::Principal, Some(&conserje), None), Route::Principal);
    }

    #[test]
    fn wrong_role_is_sent_back_to_login() {
        let conserje = user(Role::Conserje);
        assert_eq!(guard(Route::Principal, Some(&conserje), Some(Role::Admin)), Route::Login);
        let admin = user(Role::Admin);
        assert_eq!(guard(Route::Principal, Some(&admin), Some(Role::Admin)), Route::Principal);
    }

    #[test]
    fn login_with_session_skips_to_principal() {
        let admin = user(Role::Admin);
        assert_eq!(guard(Route::Login, Some(&admin), None), Route::Principal);
        assert_eq!(guard(Route::Login, None, None), Route::Login);
    }

    #[test]
    fn unknown_paths_resolve_to_login() {
        assert_eq!(Route::from_path("/principal/"), Route::Principal);
        assert_eq!(Route::from_path("/admin"), Route::Login);
        assert_eq!(Route::from_path(""), Route::Login);
        assert_eq!(Route::Principal.path(), "/principal");
    }
}
