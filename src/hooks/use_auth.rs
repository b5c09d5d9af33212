// ============================================================================
// USE AUTH HOOK - controlador de login / registro / logout
// ============================================================================

use yew::prelude::*;

use super::StatusMessage;
use crate::context::use_language;
use crate::models::{Role, SessionUser};
use crate::routes::{navigate, Route};
use crate::stores::AuthStore;
use crate::viewmodels::AuthViewModel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Register,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegisterData {
    pub nombre: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Clone)]
pub struct UseAuthHandle {
    pub user: UseStateHandle<Option<SessionUser>>,
    pub selected_role: UseStateHandle<Role>,
    pub mode: UseStateHandle<AuthMode>,
    pub loading: UseStateHandle<bool>,
    pub message: UseStateHandle<Option<StatusMessage>>,
    pub login: Callback<(String, String)>,
    pub register: Callback<RegisterData>,
    pub logout: Callback<()>,
    pub select_role: Callback<Role>,
    pub show_register: Callback<()>,
    pub back_to_login: Callback<()>,
}

#[hook]
pub fn use_auth() -> UseAuthHandle {
    let i18n = use_language();
    // La sesión guardada se lee una sola vez al montar
    let user = use_state(AuthStore::load);
    let selected_role = use_state(|| Role::Admin);
    let mode = use_state(|| AuthMode::Login);
    let loading = use_state(|| false);
    let message = use_state(|| None::<StatusMessage>);

    let login = {
        let user = user.clone();
        let selected_role = selected_role.clone();
        let loading = loading.clone();
        let message = message.clone();
        let language = i18n.language;
        Callback::from(move |(email, password): (String, String)| {
            if *loading {
                return;
            }
            let role = *selected_role;
            let user = user.clone();
            let loading = loading.clone();
            let message = message.clone();
            loading.set(true);
            message.set(None);

            wasm_bindgen_futures::spawn_local(async move {
                let vm = AuthViewModel::new();
                match vm.login(&email, &password, role).await {
                    Ok(outcome) => {
                        log::info!("✅ Login exitoso: {} ({})", outcome.user.email, outcome.user.rol);
                        AuthStore::save(&outcome.user);
                        message.set(Some(StatusMessage::ok(outcome.message)));
                        user.set(Some(outcome.user));
                    }
                    Err(e) => {
                        log::error!("❌ Error en login: {}", e);
                        message.set(Some(StatusMessage::error(e.localized(language))));
                    }
                }
                loading.set(false);
            });
        })
    };

    let register = {
        let selected_role = selected_role.clone();
        let mode = mode.clone();
        let loading = loading.clone();
        let message = message.clone();
        let language = i18n.language;
        Callback::from(move |data: RegisterData| {
            if *loading {
                return;
            }
            let role = *selected_role;
            let mode = mode.clone();
            let loading = loading.clone();
            let message = message.clone();
            loading.set(true);
            message.set(None);

            wasm_bindgen_futures::spawn_local(async move {
                let vm = AuthViewModel::new();
                match vm
                    .register(&data.nombre, &data.email, &data.password, &data.confirm_password, role)
                    .await
                {
                    Ok(server_message) => {
                        log::info!("✅ Registro exitoso: {}", data.email);
                        message.set(Some(StatusMessage::ok(server_message)));
                        mode.set(AuthMode::Login);
                    }
                    Err(e) => {
                        log::error!("❌ Error en registro: {}", e);
                        message.set(Some(StatusMessage::error(e.localized(language))));
                    }
                }
                loading.set(false);
            });
        })
    };

    let logout = {
        let user = user.clone();
        let message = message.clone();
        Callback::from(move |_| {
            AuthStore::clear();
            message.set(None);
            user.set(None);
            navigate(Route::Login);
        })
    };

    let select_role = {
        let selected_role = selected_role.clone();
        Callback::from(move |role: Role| selected_role.set(role))
    };

    let show_register = {
        let mode = mode.clone();
        let message = message.clone();
        Callback::from(move |_| {
            message.set(None);
            mode.set(AuthMode::Register);
        })
    };

    let back_to_login = {
        let mode = mode.clone();
        let message = message.clone();
        Callback::from(move |_| {
            message.set(None);
            mode.set(AuthMode::Login);
        })
    };

    UseAuthHandle {
        user,
        selected_role,
        mode,
        loading,
        message,
        login,
        register,
        logout,
        select_role,
        show_register,
        back_to_login,
    }
}
