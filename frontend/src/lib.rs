pub mod api;
pub mod components;
pub mod config;
pub mod error;
pub mod hooks;
pub mod navigation;
pub mod session;
pub mod submit;

use common::Role;
use components::{LoginForm, RoleSelector};
use config::Config;
use wasm_bindgen::prelude::*;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: Config,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let role = use_state(Role::default);

    let on_select = {
        let role = role.clone();
        Callback::from(move |selected: Role| {
            log::debug!("role selected: {}", selected);
            role.set(selected);
        })
    };

    html! {
        <div class="login-wrapper">
            <div class="login-card">
                <h2>{ "CarePortal Sign In" }</h2>
                <RoleSelector selected={*role} {on_select} />
                <LoginForm config={props.config.clone()} role={*role} />
            </div>
        </div>
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    console_error_panic_hook::set_once();

    let config = Config::from_env();
    let _ = console_log::init_with_level(config.log_level);
    log::info!("login page using {}", config.login_url);

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
