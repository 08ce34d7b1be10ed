use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::{ApiHandle, Route};
use crate::auth::{self, LoginForm};
use crate::session::RefreshFailure;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let api = use_context::<ApiHandle>().unwrap_or_default();
    let navigator = use_navigator();
    let form = use_state(LoginForm::default);
    let loading = use_state(|| false);
    let error = use_state(|| None::<String>);

    // set by the bootstrap page when silent renewal failed
    let notice = use_location()
        .and_then(|location| location.state::<RefreshFailure>())
        .and_then(|failure| failure.notice());

    let on_submit = {
        let form = form.clone();
        let loading = loading.clone();
        let error = error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            loading.set(true);
            error.set(None);

            let api = api.clone();
            let navigator = navigator.clone();
            let values = (*form).clone();
            let loading = loading.clone();
            let error = error.clone();
            spawn_local(async move {
                match auth::login(&*api, &values).await {
                    Ok(()) => {
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Home);
                        }
                    }
                    Err(msg) => error.set(Some(msg)),
                }
                loading.set(false);
            });
        })
    };

    let on_username = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(LoginForm {
                username: input.value(),
                ..(*form).clone()
            });
        })
    };

    let on_password = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(LoginForm {
                password: input.value(),
                ..(*form).clone()
            });
        })
    };

    html! {
        <div class="login-container">
            <form class="login-card" onsubmit={on_submit}>
                <h1 class="login-title">{"Login"}</h1>

                if let Some(msg) = notice {
                    <p class="login-notice">{ msg }</p>
                }
                if let Some(msg) = &*error {
                    <p class="login-error">{ msg.clone() }</p>
                }

                <div class="login-field">
                    <label>{"Username"}</label>
                    <input type="text" required={true} value={form.username.clone()} oninput={on_username} />
                </div>

                <div class="login-field">
                    <label>{"Password"}</label>
                    <input type="password" required={true} value={form.password.clone()} oninput={on_password} />
                </div>

                <button type="submit" disabled={*loading}>
                    { if *loading { "Logging in..." } else { "Login" } }
                </button>

                <p class="login-links">
                    <a href="/forgot-password">{"Forgot password?"}</a>
                </p>
                <p class="login-links">
                    {"Not registered? "}
                    <Link<Route> to={Route::Signup}>{"Sign up"}</Link<Route>>
                </p>
            </form>
        </div>
    }
}
