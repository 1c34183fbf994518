use ui::{App, config::Config, logs};

fn main() {
    let config = Config::from_build_env();
    logs::init_logging(&config);
    yew::Renderer::<App>::new().render();
}
