use ecoaula_frontend::components::App;
use ecoaula_frontend::CONFIG;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!(
        "🚀 EcoAula UCT starting ({}, backend {})",
        CONFIG.environment,
        CONFIG.backend_url()
    );

    yew::Renderer::<App>::new().render();
}
