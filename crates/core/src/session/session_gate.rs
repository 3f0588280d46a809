//! Session gate and login form.

use std::sync::Arc;

use log::{debug, error, info};

use super::session_model::{AuthError, User};
use super::session_traits::{IdentityProviderTrait, LoginSurface, PageElement, SessionSurface};
use crate::constants::{HOME_PATH, LOGIN_PATH};

/// What [`SessionGate::apply`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    SignedIn { redirected: bool },
    SignedOut,
}

/// Toggles page chrome on authentication-state changes.
pub struct SessionGate {
    identity: Arc<dyn IdentityProviderTrait>,
    surface: Arc<dyn SessionSurface>,
}

impl SessionGate {
    pub fn new(identity: Arc<dyn IdentityProviderTrait>, surface: Arc<dyn SessionSurface>) -> Self {
        Self { identity, surface }
    }

    /// Applies the visibility rules for `user` and, when signed in on the
    /// login page, navigates home.
    pub fn apply(&self, user: Option<&User>) -> GateOutcome {
        match user {
            Some(user) => {
                info!(
                    "User is signed in: {}",
                    user.email.as_deref().unwrap_or(&user.uid)
                );
                self.toggle(true);

                let redirected = self.surface.current_path() == LOGIN_PATH;
                if redirected {
                    self.surface.navigate(HOME_PATH);
                }
                GateOutcome::SignedIn { redirected }
            }
            None => {
                info!("User is signed out");
                self.toggle(false);
                GateOutcome::SignedOut
            }
        }
    }

    fn toggle(&self, signed_in: bool) {
        self.set_if_present(PageElement::LoginNav, !signed_in);
        self.set_if_present(PageElement::LogoutNav, signed_in);
        self.set_if_present(PageElement::AuthRequired, signed_in);
        self.set_if_present(PageElement::SignedOutNotice, !signed_in);
        self.set_if_present(PageElement::ContentPanel, signed_in);
    }

    fn set_if_present(&self, element: PageElement, visible: bool) {
        if self.surface.has_element(element) {
            self.surface.set_visible(element, visible);
        } else {
            debug!("No {:?} on this page", element);
        }
    }

    /// Signs out and returns home. Failures are logged and leave the page as is.
    pub async fn sign_out(&self) -> Result<(), AuthError> {
        match self.identity.sign_out().await {
            Ok(()) => {
                self.surface.navigate(HOME_PATH);
                Ok(())
            }
            Err(e) => {
                error!("Logout error: {}", e);
                Err(e)
            }
        }
    }
}

/// The email/password sign-in form.
pub struct LoginForm {
    identity: Arc<dyn IdentityProviderTrait>,
    surface: Arc<dyn LoginSurface>,
}

impl LoginForm {
    pub fn new(identity: Arc<dyn IdentityProviderTrait>, surface: Arc<dyn LoginSurface>) -> Self {
        Self { identity, surface }
    }

    /// Signs in; on failure shows the message for the provider's error code.
    pub async fn submit(&self, email: &str, password: &str) -> Result<User, AuthError> {
        self.surface.clear_error();

        match self.identity.sign_in(email, password).await {
            Ok(user) => {
                info!(
                    "Login successful for: {}",
                    user.email.as_deref().unwrap_or(email)
                );
                self.surface.navigate(HOME_PATH);
                Ok(user)
            }
            Err(e) => {
                error!("Login error: {}", e);
                self.surface.show_error(e.code.user_message());
                Err(e)
            }
        }
    }
}
