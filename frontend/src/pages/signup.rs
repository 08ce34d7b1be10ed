use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::{ApiHandle, Route};
use crate::auth::{self, SignupForm};

#[function_component(SignupPage)]
pub fn signup_page() -> Html {
    let api = use_context::<ApiHandle>().unwrap_or_default();
    let navigator = use_navigator();
    let form = use_state(SignupForm::default);
    let loading = use_state(|| false);
    let error = use_state(|| None::<String>);

    let on_submit = {
        let form = form.clone();
        let loading = loading.clone();
        let error = error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            error.set(None);

            let values = (*form).clone();
            if let Err(msg) = values.check() {
                error.set(Some(msg));
                return;
            }
            loading.set(true);

            let api = api.clone();
            let navigator = navigator.clone();
            let loading = loading.clone();
            let error = error.clone();
            spawn_local(async move {
                match auth::signup(&*api, &values).await {
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

    let field = |update: fn(&mut SignupForm, String)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            update(&mut next, input.value());
            form.set(next);
        })
    };

    html! {
        <div class="login-container">
            <form class="login-card" onsubmit={on_submit}>
                <h1 class="login-title">{"Sign Up"}</h1>

                if let Some(msg) = &*error {
                    <p class="login-error">{ msg.clone() }</p>
                }

                <div class="login-field">
                    <label>{"Username"}</label>
                    <input type="text" required={true} value={form.username.clone()}
                        oninput={field(|f, v| f.username = v)} />
                </div>

                <div class="login-field">
                    <label>{"Password"}</label>
                    <input type="password" required={true} value={form.password.clone()}
                        oninput={field(|f, v| f.password = v)} />
                </div>

                <div class="login-field">
                    <label>{"Confirm Password"}</label>
                    <input type="password" required={true} value={form.confirm_password.clone()}
                        oninput={field(|f, v| f.confirm_password = v)} />
                </div>

                <button type="submit" disabled={*loading}>
                    { if *loading { "Creating Account..." } else { "Sign Up" } }
                </button>

                <p class="login-links">
                    {"Already have an account? "}
                    <Link<Route> to={Route::Login}>{"Log in"}</Link<Route>>
                </p>
            </form>
        </div>
    }
}
