use yew::prelude::*;

use crate::context::use_language;
use crate::models::Role;

#[derive(Properties, PartialEq)]
pub struct RoleToggleProps {
    pub selected: Role,
    pub on_select: Callback<Role>,
    #[prop_or_default]
    pub disabled: bool,
}

/// Selector de rol de dos posiciones (Administrador / Conserje)
#[function_component(RoleToggle)]
pub fn role_toggle(props: &RoleToggleProps) -> Html {
    let i18n = use_language();

    let hint_key = match props.selected {
        Role::Admin => "role_admin_hint",
        Role::Conserje => "role_conserje_hint",
    };

    html! {
        <div class="role-toggle">
            <div class="role-options">
                { for Role::ALL.iter().map(|role| {
                    let role = *role;
                    let checked = props.selected == role;
                    let onchange = props.on_select.reform(move |_: Event| role);
                    html! {
                        <label class={classes!("role-option", checked.then_some("active"))}>
                            { i18n.get(role.i18n_key()) }
                            <input
                                type="radio"
                                name="role"
                                value={role.as_str()}
                                checked={checked}
                                disabled={props.disabled}
                                onchange={onchange}
                            />
                            <span class={classes!("role-dot", checked.then_some("filled"))}></span>
                        </label>
                    }
                }) }
            </div>
            <div class="role-description">{ i18n.get(hint_key) }</div>
        </div>
    }
}
