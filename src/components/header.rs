use yew::prelude::*;

use crate::context::use_language;
use crate::models::SessionUser;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub user: SessionUser,
    pub on_toggle_settings: Callback<MouseEvent>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let i18n = use_language();
    let onclick = {
        let callback = props.on_toggle_settings.clone();
        Callback::from(move |e: MouseEvent| callback.emit(e))
    };

    html! {
        <header class="app-header">
            <h1>{ i18n.get("app_title") }</h1>
            <div class="header-user">
                <span class="user-name">{ props.user.display_name() }</span>
                <span class={classes!("role-badge", props.user.rol.as_str())}>
                    { i18n.get(props.user.rol.i18n_key()) }
                </span>
            </div>
            <button class="btn-settings" onclick={onclick}>
                {"⚙️"}
            </button>
        </header>
    }
}
