// ============================================================================
// USE USUARIOS HOOK - controlador del CRUD de usuarios
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use super::StatusMessage;
use crate::context::use_language;
use crate::models::{Usuario, UsuarioForm};
use crate::utils::i18n::Language;
use crate::utils::MESSAGE_TIMEOUT_MS;
use crate::viewmodels::UsuarioViewModel;

/// Qué está abierto en el modal de usuario
#[derive(Debug, Clone, PartialEq)]
pub enum Editor {
    Create,
    Edit(Usuario),
}

impl Editor {
    pub fn initial_form(&self) -> UsuarioForm {
        match self {
            Editor::Create => UsuarioForm::default(),
            Editor::Edit(usuario) => UsuarioForm::from_usuario(usuario),
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self, Editor::Edit(_))
    }
}

#[derive(Clone)]
pub struct UseUsuariosHandle {
    pub usuarios: UseStateHandle<Vec<Usuario>>,
    pub loading: UseStateHandle<bool>,
    pub message: UseStateHandle<Option<StatusMessage>>,
    pub editor: UseStateHandle<Option<Editor>>,
    pub refresh: Callback<()>,
    pub save: Callback<UsuarioForm>,
    pub delete: Callback<i64>,
    pub open_create: Callback<()>,
    pub open_edit: Callback<Usuario>,
    pub close_editor: Callback<()>,
}

/// Turno del último mensaje mostrado; un temporizador solo borra el suyo
#[derive(Debug, Default)]
pub struct StatusTicket {
    current: u64,
}

impl StatusTicket {
    /// Registra un mensaje nuevo; devuelve el turno si debe ocultarse solo
    pub fn issue(&mut self, status: Option<&StatusMessage>) -> Option<u64> {
        self.current += 1;
        status.filter(|s| !s.is_error).map(|_| self.current)
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.current == ticket
    }
}

#[derive(Default)]
struct Flash {
    ticket: StatusTicket,
    timer: Option<Timeout>,
}

type FlashRef = Rc<RefCell<Flash>>;
type MessageHandle = UseStateHandle<Option<StatusMessage>>;

/// Cambia la línea de estado; los mensajes de éxito se ocultan a los pocos segundos
fn show_status(message: &MessageHandle, flash: &FlashRef, status: Option<StatusMessage>) {
    let mut state = flash.borrow_mut();
    // Soltar el temporizador anterior lo cancela
    state.timer = None;
    if let Some(ticket) = state.ticket.issue(status.as_ref()) {
        let message = message.clone();
        let flash = flash.clone();
        state.timer = Some(Timeout::new(MESSAGE_TIMEOUT_MS, move || {
            if flash.borrow().ticket.is_current(ticket) {
                message.set(None);
            }
        }));
    }
    message.set(status);
}

/// Recarga la lista; los errores van a la línea de estado
async fn reload(usuarios: UseStateHandle<Vec<Usuario>>, message: MessageHandle, flash: FlashRef, language: Language) {
    match UsuarioViewModel::new().listar().await {
        Ok(list) => usuarios.set(list),
        Err(e) => {
            log::error!("❌ Error listando usuarios: {}", e);
            show_status(&message, &flash, Some(StatusMessage::error(e.localized(language))));
        }
    }
}

#[hook]
pub fn use_usuarios() -> UseUsuariosHandle {
    let i18n = use_language();
    let usuarios = use_state(Vec::<Usuario>::new);
    let loading = use_state(|| false);
    let message = use_state(|| None::<StatusMessage>);
    let editor = use_state(|| None::<Editor>);
    let flash = use_mut_ref(Flash::default);

    let refresh = {
        let usuarios = usuarios.clone();
        let loading = loading.clone();
        let message = message.clone();
        let flash = flash.clone();
        let language = i18n.language;
        Callback::from(move |_| {
            let usuarios = usuarios.clone();
            let loading = loading.clone();
            let message = message.clone();
            let flash = flash.clone();
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                reload(usuarios, message, flash, language).await;
                loading.set(false);
            });
        })
    };

    // Carga inicial
    {
        let refresh = refresh.clone();
        use_effect_with((), move |_| {
            refresh.emit(());
            || ()
        });
    }

    let save = {
        let usuarios = usuarios.clone();
        let loading = loading.clone();
        let message = message.clone();
        let editor = editor.clone();
        let flash = flash.clone();
        let language = i18n.language;
        Callback::from(move |form: UsuarioForm| {
            let Some(target) = (*editor).clone() else {
                return;
            };
            let usuarios = usuarios.clone();
            let loading = loading.clone();
            let message = message.clone();
            let editor = editor.clone();
            let flash = flash.clone();
            loading.set(true);

            wasm_bindgen_futures::spawn_local(async move {
                let vm = UsuarioViewModel::new();
                let result = match &target {
                    Editor::Create => vm.crear(&form).await,
                    Editor::Edit(usuario) => vm.actualizar(usuario.id, &form).await,
                };
                match result {
                    Ok(server_message) => {
                        editor.set(None);
                        show_status(&message, &flash, Some(StatusMessage::ok(server_message)));
                        reload(usuarios, message, flash, language).await;
                    }
                    Err(e) => {
                        log::error!("❌ Error guardando usuario: {}", e);
                        show_status(&message, &flash, Some(StatusMessage::error(e.localized(language))));
                    }
                }
                loading.set(false);
            });
        })
    };

    let delete = {
        let usuarios = usuarios.clone();
        let loading = loading.clone();
        let message = message.clone();
        let flash = flash.clone();
        let language = i18n.language;
        let confirm_text = i18n.get("confirm_delete");
        Callback::from(move |id: i64| {
            let confirmed = web_sys::window()
                .and_then(|w| w.confirm_with_message(&confirm_text).ok())
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            let usuarios = usuarios.clone();
            let loading = loading.clone();
            let message = message.clone();
            let flash = flash.clone();
            loading.set(true);

            wasm_bindgen_futures::spawn_local(async move {
                match UsuarioViewModel::new().eliminar(id).await {
                    Ok(server_message) => {
                        show_status(&message, &flash, Some(StatusMessage::ok(server_message)));
                        reload(usuarios, message, flash, language).await;
                    }
                    Err(e) => {
                        log::error!("❌ Error eliminando usuario {}: {}", id, e);
                        show_status(&message, &flash, Some(StatusMessage::error(e.localized(language))));
                    }
                }
                loading.set(false);
            });
        })
    };

    let open_create = {
        let editor = editor.clone();
        let message = message.clone();
        let flash = flash.clone();
        Callback::from(move |_| {
            show_status(&message, &flash, None);
            editor.set(Some(Editor::Create));
        })
    };

    let open_edit = {
        let editor = editor.clone();
        let message = message.clone();
        let flash = flash.clone();
        Callback::from(move |usuario: Usuario| {
            show_status(&message, &flash, None);
            editor.set(Some(Editor::Edit(usuario)));
        })
    };

    let close_editor = {
        let editor = editor.clone();
        Callback::from(move |_| editor.set(None))
    };

    UseUsuariosHandle {
        usuarios,
        loading,
        message,
        editor,
        refresh,
        save,
        delete,
        open_create,
        open_edit,
        close_editor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_messages_get_a_ticket_errors_do_not() {
        let mut ticket = StatusTicket::default();
        assert!(ticket.issue(Some(&StatusMessage::ok("Usuario creado"))).is_some());
        assert_eq!(ticket.issue(Some(&StatusMessage::error("Email inválido"))), None);
        assert_eq!(ticket.issue(None), None);
    }

    #[test]
    fn later_error_outlives_an_earlier_success_timer() {
        let mut ticket = StatusTicket::default();
        let saved = ticket.issue(Some(&StatusMessage::ok("Usuario actualizado"))).unwrap();
        assert!(ticket.is_current(saved));

        // el borrado falla antes de que venza el temporizador del guardado
        ticket.issue(Some(&StatusMessage::error("Error de conexión al servidor")));
        assert!(!ticket.is_current(saved));
    }

    #[test]
    fn newest_success_timer_is_the_one_that_clears() {
        let mut ticket = StatusTicket::default();
        let first = ticket.issue(Some(&StatusMessage::ok("Usuario creado"))).unwrap();
        let second = ticket.issue(Some(&StatusMessage::ok("Usuario eliminado"))).unwrap();
        assert!(!ticket.is_current(first));
        assert!(ticket.is_current(second));
    }
}
