//! Session gate - auth-state driven page toggling, sign-out and the login form.

mod session_model;
mod session_traits;
mod session_gate;


pub use session_gate::{GateOutcome, LoginForm, SessionGate};
pub use session_model::{AuthError, AuthErrorCode, User};
pub use session_traits::{IdentityProviderTrait, LoginSurface, PageElement, SessionSurface};
