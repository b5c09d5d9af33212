// ============================================================================
// PÁGINA PRINCIPAL (protegida)
// ============================================================================

use yew::prelude::*;

use super::{Dashboard, Header, SettingsPopup, UserManagement};
use crate::context::use_language;
use crate::models::SessionUser;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Tab {
    Dashboard,
    Usuarios,
}

#[derive(Properties, PartialEq)]
pub struct PrincipalProps {
    pub user: SessionUser,
    pub on_logout: Callback<()>,
}

#[function_component(Principal)]
pub fn principal(props: &PrincipalProps) -> Html {
    let i18n = use_language();
    let tab = use_state(|| Tab::Dashboard);
    let show_settings = use_state(|| false);

    let on_toggle_settings = {
        let show_settings = show_settings.clone();
        Callback::from(move |_: MouseEvent| show_settings.set(!*show_settings))
    };
    let on_close_settings = {
        let show_settings = show_settings.clone();
        Callback::from(move |_| show_settings.set(false))
    };
    let select_tab = |target: Tab| {
        let tab = tab.clone();
        Callback::from(move |_: MouseEvent| tab.set(target))
    };

    // Los conserjes no administran usuarios
    let is_admin = props.user.is_admin();
    let active = if is_admin { *tab } else { Tab::Dashboard };
    let tab_class = |target: Tab| classes!("tab-btn", (active == target).then_some("active"));

    html! {
        <div class="principal">
            <Header user={props.user.clone()} on_toggle_settings={on_toggle_settings} />

            if *show_settings {
                <SettingsPopup on_close={on_close_settings} on_logout={props.on_logout.clone()} />
            }

            <main class="principal-content">
                <div class="welcome">
                    <h2>{ i18n.get("welcome") }</h2>
                    <p>{ i18n.get("logged_in") }</p>
                </div>

                <nav class="tabs">
                    <button class={tab_class(Tab::Dashboard)} onclick={select_tab(Tab::Dashboard)}>
                        { i18n.get("tab_dashboard") }
                    </button>
                    if is_admin {
                        <button class={tab_class(Tab::Usuarios)} onclick={select_tab(Tab::Usuarios)}>
                            { i18n.get("tab_users") }
                        </button>
                    }
                </nav>

                {
                    match active {
                        Tab::Dashboard => html! { <Dashboard /> },
                        Tab::Usuarios => html! { <UserManagement /> },
                    }
                }

                <button class="btn-logout" onclick={props.on_logout.reform(|_| ())}>
                    { i18n.get("logout") }
                </button>
            </main>
        </div>
    }
}
