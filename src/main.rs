mod components;
mod config;
mod generator;
mod model;
mod state;
mod store;
mod util;

fn main() {
    console_error_panic_hook::set_once();
    util::init_logging(if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    });
    log::info!("Orangutan Quest starting");
    yew::Renderer::<components::app::App>::new().render();
}
