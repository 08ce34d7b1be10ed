use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::{ApiHandle, Route};
use crate::session::{self, BootstrapOutcome};

/// Landing route: tries to resume the session, then forwards to home or login.
#[function_component(BootstrapPage)]
pub fn bootstrap_page() -> Html {
    let api = use_context::<ApiHandle>().unwrap_or_default();
    let navigator = use_navigator();

    use_effect_with_deps(
        move |_| {
            spawn_local(async move {
                let outcome = session::bootstrap(&*api).await;
                let Some(navigator) = navigator else {
                    return;
                };
                match outcome {
                    BootstrapOutcome::Home => navigator.push(&Route::Home),
                    BootstrapOutcome::Login(failure) => {
                        navigator.push_with_state(&Route::Login, failure)
                    }
                }
            });
            || ()
        },
        (),
    );

    html! {
        <div class="page-container">
            <div class="loading-message">{"Checking session..."}</div>
        </div>
    }
}
