mod api;
mod app;
mod auth;
mod budget;
mod components;
mod config;
mod dashboard;
mod error;
mod models;
mod pages;
mod session;
mod storage;

fn main() {
    let log_config = tracing_wasm::WASMLayerConfigBuilder::new()
        .set_max_level(config::log_level())
        .build();
    tracing_wasm::set_as_global_default_with_config(log_config);

    yew::Renderer::<app::App>::new().render();
}
