use crate::config::Config;
use crate::submit::{LoginAttempt, LoginPhase, LoginState, LoginSubmitter};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct LoginHandle {
    pub phase: LoginPhase,
    pub error: Option<&'static str>,
    pub submit: Callback<LoginAttempt>,
}

#[hook]
pub fn use_login(config: Config) -> LoginHandle {
    // The mutable copy is what the in-flight check reads; the state handle only
    // carries snapshots for rendering.
    let state = use_mut_ref(LoginState::default);
    let snapshot = use_state(LoginState::default);

    let submit = {
        let snapshot = snapshot.clone();

        Callback::from(move |attempt: LoginAttempt| {
            let state = state.clone();
            let snapshot = snapshot.clone();
            let submitter = LoginSubmitter::browser(&config);

            spawn_local(async move {
                submitter
                    .drive(&state, attempt, |current| snapshot.set(current))
                    .await;
            });
        })
    };

    LoginHandle {
        phase: snapshot.phase(),
        error: snapshot.error(),
        submit,
    }
}
