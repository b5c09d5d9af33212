use std::collections::HashMap;
use std::rc::Rc;

use yew::prelude::*;

use crate::config::CONFIG;
use crate::utils::i18n::{get_translations, Language};
use crate::utils::{load_from_storage, save_to_storage, STORAGE_KEY_LANGUAGE};

#[derive(Clone)]
pub struct LanguageContext {
    pub language: Language,
    pub texts: Rc<HashMap<&'static str, &'static str>>,
    pub set_language: Callback<Language>,
}

impl PartialEq for LanguageContext {
    fn eq(&self, other: &Self) -> bool {
        self.language == other.language
    }
}

impl LanguageContext {
    pub fn new(language: Language, set_language: Callback<Language>) -> Self {
        Self {
            language,
            texts: Rc::new(get_translations(language)),
            set_language,
        }
    }

    pub fn get(&self, key: &str) -> String {
        self.texts
            .get(key)
            .map(|text| text.to_string())
            .unwrap_or_else(|| key.to_string())
    }
}

#[derive(Properties, PartialEq)]
pub struct LanguageProviderProps {
    pub children: Children,
}

#[function_component(LanguageProvider)]
pub fn language_provider(props: &LanguageProviderProps) -> Html {
    let language = use_state(get_current_language);

    let set_language = {
        let language = language.clone();
        Callback::from(move |new_language: Language| {
            set_saved_language(new_language);
            language.set(new_language);
        })
    };

    let context = LanguageContext::new(*language, set_language);

    html! {
        <ContextProvider<LanguageContext> context={context}>
            { props.children.clone() }
        </ContextProvider<LanguageContext>>
    }
}

/// Idioma guardado o, si no hay, el configurado en compilación
pub fn get_current_language() -> Language {
    load_from_storage::<String>(STORAGE_KEY_LANGUAGE)
        .map(|code| Language::from_code(&code))
        .unwrap_or_else(|| Language::from_code(&CONFIG.default_language))
}

fn set_saved_language(language: Language) {
    if let Err(e) = save_to_storage(STORAGE_KEY_LANGUAGE, &language.as_str()) {
        log::warn!("⚠️ {}", e);
    }
}

/// Contexto de idioma; fuera del provider se usa español sin setter
#[hook]
pub fn use_language() -> LanguageContext {
    use_context::<LanguageContext>()
        .unwrap_or_else(|| LanguageContext::new(Language::default(), Callback::noop()))
}
