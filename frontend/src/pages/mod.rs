//! Routed pages.

mod bootstrap;
mod home;
mod login;
mod signup;

pub use bootstrap::BootstrapPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use signup::SignupPage;
