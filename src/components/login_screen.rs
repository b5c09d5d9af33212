use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::RoleToggle;
use crate::context::use_language;
use crate::hooks::StatusMessage;
use crate::models::Role;

#[derive(Properties, PartialEq)]
pub struct LoginScreenProps {
    pub selected_role: Role,
    pub loading: bool,
    #[prop_or_default]
    pub message: Option<StatusMessage>,
    pub on_select_role: Callback<Role>,
    pub on_login: Callback<(String, String)>,
    pub on_show_register: Callback<()>,
}

#[function_component(LoginScreen)]
pub fn login_screen(props: &LoginScreenProps) -> Html {
    let i18n = use_language();
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();

    let on_submit = {
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let on_login = props.on_login.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if let (Some(email_input), Some(password_input)) = (
                email_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) {
                // La validación la hace el view model
                on_login.emit((email_input.value(), password_input.value()));
            }
        })
    };

    html! {
        <div class="login-screen">
            <div class="login-container">
                <div class="login-header">
                    <div class="login-avatar">
                        <svg width="84" height="96" viewBox="0 0 72 84" fill="none">
                            <ellipse cx="36" cy="27" rx="20" ry="18" fill="#111827" />
                            <path d="M10 68c0-12 14-24 26-24s26 12 26 24H10z" fill="#111827" />
                        </svg>
                    </div>
                    <h1>{ i18n.get("app_title") }</h1>
                    <p>{ i18n.get("app_subtitle") }</p>
                </div>

                <RoleToggle
                    selected={props.selected_role}
                    on_select={props.on_select_role.clone()}
                    disabled={props.loading}
                />

                <form class="login-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="email">{ i18n.get("email") }</label>
                        <input
                            type="email"
                            id="email"
                            name="email"
                            placeholder={i18n.get("email_placeholder")}
                            autocomplete="username"
                            ref={email_ref}
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">{ i18n.get("password") }</label>
                        <input
                            type="password"
                            id="password"
                            name="password"
                            placeholder="********"
                            autocomplete="current-password"
                            ref={password_ref}
                        />
                    </div>

                    <button type="submit" class="btn-login" disabled={props.loading}>
                        <span class="btn-text">
                            { if props.loading { i18n.get("loading") } else { i18n.get("login_button") } }
                        </span>
                    </button>

                    { for props.message.iter().map(|m| html! {
                        <div class={m.css_class()}>{ m.text.clone() }</div>
                    }) }

                    <div class="login-footer">
                        <button
                            type="button"
                            class="btn-register-link"
                            onclick={props.on_show_register.reform(|_| ())}
                        >
                            { i18n.get("register_link") }
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
