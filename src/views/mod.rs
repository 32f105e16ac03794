//! Pages
//!
//! One component per top-level page.

mod login;
mod signup;
mod dashboard;

pub use login::Login;
pub use signup::SignUp;
pub use dashboard::Dashboard;
