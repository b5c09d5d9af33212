use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::RoleToggle;
use crate::context::use_language;
use crate::hooks::{RegisterData, StatusMessage};
use crate::models::Role;

#[derive(Properties, PartialEq)]
pub struct RegisterViewProps {
    pub selected_role: Role,
    pub loading: bool,
    #[prop_or_default]
    pub message: Option<StatusMessage>,
    pub on_select_role: Callback<Role>,
    pub on_register: Callback<RegisterData>,
    pub on_back_to_login: Callback<()>,
}

fn input_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

#[function_component(RegisterView)]
pub fn register_view(props: &RegisterViewProps) -> Html {
    let i18n = use_language();
    let name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let confirm_ref = use_node_ref();

    let on_submit = {
        let name_ref = name_ref.clone();
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let confirm_ref = confirm_ref.clone();
        let on_register = props.on_register.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_register.emit(RegisterData {
                nombre: input_value(&name_ref),
                email: input_value(&email_ref),
                password: input_value(&password_ref),
                confirm_password: input_value(&confirm_ref),
            });
        })
    };

    html! {
        <div class="login-screen">
            <div class="login-container register-container">
                <div class="login-header">
                    <button
                        type="button"
                        class="btn-back"
                        onclick={props.on_back_to_login.reform(|_| ())}
                    >
                        { i18n.get("back_to_login") }
                    </button>
                    <h1>{ i18n.get("register_title") }</h1>
                    <p>{ i18n.get("app_title") }</p>
                </div>

                <RoleToggle
                    selected={props.selected_role}
                    on_select={props.on_select_role.clone()}
                    disabled={props.loading}
                />

                <form class="login-form register-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="register-name">{ i18n.get("full_name") }<span class="required">{"*"}</span></label>
                        <input
                            type="text"
                            id="register-name"
                            placeholder={i18n.get("full_name_placeholder")}
                            ref={name_ref}
                        />
                    </div>

                    <div class="form-group">
                        <label for="register-email">{ i18n.get("email") }<span class="required">{"*"}</span></label>
                        <input
                            type="email"
                            id="register-email"
                            placeholder={i18n.get("email_placeholder")}
                            ref={email_ref}
                        />
                    </div>

                    <div class="form-group">
                        <label for="register-password">{ i18n.get("password") }<span class="required">{"*"}</span></label>
                        <input
                            type="password"
                            id="register-password"
                            placeholder="********"
                            autocomplete="new-password"
                            ref={password_ref}
                        />
                    </div>

                    <div class="form-group">
                        <label for="register-confirm">{ i18n.get("confirm_password") }<span class="required">{"*"}</span></label>
                        <input
                            type="password"
                            id="register-confirm"
                            placeholder="********"
                            autocomplete="new-password"
                            ref={confirm_ref}
                        />
                    </div>

                    <button type="submit" class="btn-login" disabled={props.loading}>
                        <span class="btn-text">
                            { if props.loading { i18n.get("loading") } else { i18n.get("register_button") } }
                        </span>
                    </button>

                    { for props.message.iter().map(|m| html! {
                        <div class={m.css_class()}>{ m.text.clone() }</div>
                    }) }
                </form>
            </div>
        </div>
    }
}
