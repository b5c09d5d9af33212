use yew::prelude::*;

use crate::context::use_language;
use crate::utils::i18n::Language;

#[derive(Properties, PartialEq)]
pub struct SettingsPopupProps {
    pub on_close: Callback<()>,
    pub on_logout: Callback<()>,
}

#[function_component(SettingsPopup)]
pub fn settings_popup(props: &SettingsPopupProps) -> Html {
    let i18n = use_language();

    // El contexto re-renderiza todo, no hace falta recargar la página
    let language_button = |language: Language, label: &'static str| {
        let set_language = i18n.set_language.clone();
        let class = if i18n.language == language { "toggle-btn active" } else { "toggle-btn" };
        html! {
            <button class={class} onclick={Callback::from(move |_| set_language.emit(language))}>
                { label }
            </button>
        }
    };

    html! {
        <div class="settings-popup active">
            <div class="settings-content">
                <div class="settings-header">
                    <h3>{ i18n.get("settings") }</h3>
                    <button class="btn-close-settings" onclick={props.on_close.reform(|_| ())}>
                        {"✕"}
                    </button>
                </div>
                <div class="settings-body">
                    <div class="language-section">
                        <div class="language-label">{ i18n.get("language") }</div>
                        <div class="language-toggle">
                            { language_button(Language::Spanish, "ES") }
                            { language_button(Language::English, "EN") }
                        </div>
                    </div>

                    <button class="btn-logout" onclick={props.on_logout.reform(|_| ())}>
                        { format!("🚪 {}", i18n.get("logout")) }
                    </button>
                </div>
            </div>
        </div>
    }
}
