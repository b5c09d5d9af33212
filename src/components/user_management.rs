use yew::prelude::*;

use super::UserModal;
use crate::context::use_language;
use crate::hooks::use_usuarios;

/// Tabla de usuarios con alta, edición y borrado
#[function_component(UserManagement)]
pub fn user_management() -> Html {
    let i18n = use_language();
    let handle = use_usuarios();
    let loading = *handle.loading;

    let rows = if handle.usuarios.is_empty() {
        html! {
            <tr>
                <td colspan="5" class="empty-value">
                    { if loading { i18n.get("loading") } else { i18n.get("no_users") } }
                </td>
            </tr>
        }
    } else {
        handle
            .usuarios
            .iter()
            .map(|usuario| {
                let role_key = usuario.rol.map(|r| r.i18n_key()).unwrap_or("role_unknown");
                let on_edit = {
                    let open_edit = handle.open_edit.clone();
                    let usuario = usuario.clone();
                    Callback::from(move |_| open_edit.emit(usuario.clone()))
                };
                let on_delete = {
                    let id = usuario.id;
                    handle.delete.reform(move |_| id)
                };
                html! {
                    <tr key={usuario.id}>
                        <td>{ usuario.id }</td>
                        <td>{ &usuario.nombre_completo }</td>
                        <td>{ &usuario.email }</td>
                        <td>{ i18n.get(role_key) }</td>
                        <td class="actions">
                            <button class="btn-edit" onclick={on_edit} disabled={loading}>
                                { i18n.get("edit") }
                            </button>
                            <button class="btn-delete" onclick={on_delete} disabled={loading}>
                                { i18n.get("delete") }
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect::<Html>()
    };

    // Con el modal abierto los mensajes se muestran dentro de él
    let modal_open = handle.editor.is_some();

    html! {
        <section class="user-management">
            <div class="section-header">
                <h2>{ i18n.get("users_title") }</h2>
                <div class="section-actions">
                    <button class="btn-secondary" onclick={handle.refresh.reform(|_| ())} disabled={loading}>
                        { format!("🔄 {}", i18n.get("refresh")) }
                    </button>
                    <button class="btn-primary" onclick={handle.open_create.reform(|_| ())}>
                        { format!("➕ {}", i18n.get("new_user")) }
                    </button>
                </div>
            </div>

            if !modal_open {
                { for handle.message.iter().map(|m| html! {
                    <div class={m.css_class()}>{ m.text.clone() }</div>
                }) }
            }

            <table class="user-table">
                <thead>
                    <tr>
                        <th>{ i18n.get("col_id") }</th>
                        <th>{ i18n.get("col_name") }</th>
                        <th>{ i18n.get("col_email") }</th>
                        <th>{ i18n.get("col_role") }</th>
                        <th>{ i18n.get("col_actions") }</th>
                    </tr>
                </thead>
                <tbody>{ rows }</tbody>
            </table>

            { for handle.editor.iter().map(|editor| html! {
                <UserModal
                    editor={editor.clone()}
                    loading={loading}
                    message={(*handle.message).clone()}
                    on_save={handle.save.clone()}
                    on_close={handle.close_editor.clone()}
                />
            }) }
        </section>
    }
}
