//! Root component, routes and the shared API handle.

use std::ops::Deref;
use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::{ApiClient, GlooTransport};
use crate::config::ApiConfig;
use crate::pages::{BootstrapPage, HomePage, LoginPage, SignupPage};
use crate::storage::BrowserTokenStore;

pub type Client = ApiClient<GlooTransport, BrowserTokenStore>;

/// API client shared through context by every page.
#[derive(Clone)]
pub struct ApiHandle(Rc<Client>);

impl ApiHandle {
    pub fn from_env() -> Self {
        let config = ApiConfig::from_env();
        let tokens = BrowserTokenStore::new(config.token_key.clone());
        Self(Rc::new(ApiClient::new(config, GlooTransport, tokens)))
    }
}

impl Default for ApiHandle {
    fn default() -> Self {
        Self::from_env()
    }
}

impl PartialEq for ApiHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for ApiHandle {
    type Target = Client;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Bootstrap,
    #[at("/Home")]
    Home,
    #[at("/login")]
    Login,
    #[at("/signup")]
    Signup,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Bootstrap => html! { <BootstrapPage /> },
        Route::Home => html! { <HomePage /> },
        Route::Login => html! { <LoginPage /> },
        Route::Signup => html! { <SignupPage /> },
        Route::NotFound => html! {
            <div class="page-container">
                <div class="error-message">
                    {"Page not found. "}
                    <Link<Route> to={Route::Bootstrap}>{"Back to start"}</Link<Route>>
                </div>
            </div>
        },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let api = use_state(ApiHandle::from_env);

    html! {
        <ContextProvider<ApiHandle> context={(*api).clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<ApiHandle>>
    }
}
