// ============================================================================
// USER MODAL - alta y edición de usuarios
// ============================================================================

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::context::use_language;
use crate::hooks::{Editor, StatusMessage};
use crate::models::{Role, UsuarioForm};

#[derive(Properties, PartialEq)]
pub struct UserModalProps {
    pub editor: Editor,
    pub loading: bool,
    #[prop_or_default]
    pub message: Option<StatusMessage>,
    pub on_save: Callback<UsuarioForm>,
    pub on_close: Callback<()>,
}

#[function_component(UserModal)]
pub fn user_modal(props: &UserModalProps) -> Html {
    let i18n = use_language();
    let form = {
        let editor = props.editor.clone();
        use_state(move || editor.initial_form())
    };

    // Cada input reescribe un campo del formulario
    let on_text = |apply: fn(&mut UsuarioForm, String)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            apply(&mut next, input.value());
            form.set(next);
        })
    };

    let on_role = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(rol) = Role::from_name(&select.value()) {
                let mut next = (*form).clone();
                next.rol = rol;
                form.set(next);
            }
        })
    };

    let on_submit = {
        let form = form.clone();
        let on_save = props.on_save.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_save.emit((*form).clone());
        })
    };

    let is_edit = props.editor.is_edit();
    let title = if is_edit { i18n.get("edit_user") } else { i18n.get("new_user") };

    html! {
        <div class="modal active">
            <div class="modal-overlay" onclick={props.on_close.reform(|_| ())}></div>
            <div class="modal-content" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <div class="modal-header">
                    <h2>{ title }</h2>
                    <button class="btn-close" onclick={props.on_close.reform(|_| ())}>
                        {"✕"}
                    </button>
                </div>

                <form class="modal-body user-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="user-name">{ i18n.get("full_name") }</label>
                        <input
                            type="text"
                            id="user-name"
                            value={form.nombre.clone()}
                            oninput={on_text(|f, v| f.nombre = v)}
                        />
                    </div>

                    <div class="form-group">
                        <label for="user-email">{ i18n.get("email") }</label>
                        <input
                            type="email"
                            id="user-email"
                            value={form.email.clone()}
                            oninput={on_text(|f, v| f.email = v)}
                        />
                    </div>

                    // La contraseña solo se fija al crear
                    if !is_edit {
                        <div class="form-group">
                            <label for="user-password">{ i18n.get("password") }</label>
                            <input
                                type="password"
                                id="user-password"
                                autocomplete="new-password"
                                value={form.password.clone()}
                                oninput={on_text(|f, v| f.password = v)}
                            />
                        </div>
                    }

                    <div class="form-group">
                        <label for="user-role">{ i18n.get("col_role") }</label>
                        <select id="user-role" onchange={on_role}>
                            { for Role::ALL.iter().map(|role| html! {
                                <option value={role.as_str()} selected={form.rol == *role}>
                                    { i18n.get(role.i18n_key()) }
                                </option>
                            }) }
                        </select>
                    </div>

                    { for props.message.iter().map(|m| html! {
                        <div class={m.css_class()}>{ m.text.clone() }</div>
                    }) }

                    <div class="modal-footer">
                        <button type="button" class="btn-secondary" onclick={props.on_close.reform(|_| ())}>
                            { i18n.get("cancel") }
                        </button>
                        <button type="submit" class="btn-primary" disabled={props.loading}>
                            { if props.loading { i18n.get("loading") } else { i18n.get("save") } }
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
