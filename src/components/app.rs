use yew::prelude::*;

use super::{LoginScreen, Principal, RegisterView};
use crate::context::LanguageProvider;
use crate::hooks::{use_auth, AuthMode};
use crate::routes::{current_route, guard, navigate, Route};

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <LanguageProvider>
            <Shell />
        </LanguageProvider>
    }
}

/// Elige la pantalla según la ruta pedida y la sesión
#[function_component(Shell)]
fn shell() -> Html {
    let auth = use_auth();
    let requested = use_memo((), |_| current_route());
    let route = guard(*requested, (*auth.user).as_ref(), None);

    use_effect_with(route, |route| {
        navigate(*route);
        || ()
    });

    match (route, (*auth.user).clone()) {
        (Route::Principal, Some(user)) => html! {
            <Principal user={user} on_logout={auth.logout.clone()} />
        },
        _ => match *auth.mode {
            AuthMode::Login => html! {
                <LoginScreen
                    selected_role={*auth.selected_role}
                    loading={*auth.loading}
                    message={(*auth.message).clone()}
                    on_select_role={auth.select_role.clone()}
                    on_login={auth.login.clone()}
                    on_show_register={auth.show_register.clone()}
                />
            },
            AuthMode::Register => html! {
                <RegisterView
                    selected_role={*auth.selected_role}
                    loading={*auth.loading}
                    message={(*auth.message).clone()}
                    on_select_role={auth.select_role.clone()}
                    on_register={auth.register.clone()}
                    on_back_to_login={auth.back_to_login.clone()}
                />
            },
        },
    }
}
