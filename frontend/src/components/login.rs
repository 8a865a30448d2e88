use crate::config::Config;
use crate::hooks::use_login;
use crate::submit::{LoginAttempt, LoginPhase};
use common::Role;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoginFormProps {
    pub config: Config,
    pub role: Role,
}

#[function_component(LoginForm)]
pub fn login_form(props: &LoginFormProps) -> Html {
    let username = use_state(String::new);
    let password = use_state(String::new);
    let login = use_login(props.config.clone());
    let is_submitting = login.phase == LoginPhase::Submitting;

    let oninput_username = {
        let username = username.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            username.set(input.value());
        })
    };

    let oninput_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let onsubmit = {
        let username = username.clone();
        let password = password.clone();
        let submit = login.submit.clone();
        let role = props.role;

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit.emit(LoginAttempt {
                username: (*username).clone(),
                password: (*password).clone(),
                role,
            });
        })
    };

    html! {
        <form class="login-form" {onsubmit}>
            <div class="field">
                <label for="username">{ "Username" }</label>
                <input
                    type="text"
                    id="username"
                    autocomplete="username"
                    value={(*username).clone()}
                    oninput={oninput_username}
                />
            </div>
            <div class="field">
                <label for="password">{ "Password" }</label>
                <input
                    type="password"
                    id="password"
                    autocomplete="current-password"
                    value={(*password).clone()}
                    oninput={oninput_password}
                />
            </div>
            <p id="error" class="error">{ login.error.unwrap_or_default() }</p>
            <button type="submit" class="login-btn" disabled={is_submitting}>
                if is_submitting {
                    { "Signing in..." }
                } else {
                    { "Login" }
                }
            </button>
        </form>
    }
}
