use async_trait::async_trait;
use tokio::sync::watch;

use super::session_model::{AuthError, User};

/// External identity provider.
#[async_trait]
pub trait IdentityProviderTrait: Send + Sync {
    /// Authentication state; `None` while signed out.
    fn subscribe(&self) -> watch::Receiver<Option<User>>;

    async fn sign_in(&self, email: &str, password: &str) -> Result<User, AuthError>;

    async fn sign_out(&self) -> Result<(), AuthError>;
}

/// Page elements the gate toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageElement {
    LoginNav,
    LogoutNav,
    /// Blocks shown only to signed-in users
    AuthRequired,
    /// "Please sign in" notices
    SignedOutNotice,
    /// The page's main content (dashboard, stocks or mutual funds)
    ContentPanel,
}

pub trait SessionSurface: Send + Sync {
    fn has_element(&self, element: PageElement) -> bool;

    fn set_visible(&self, element: PageElement, visible: bool);

    fn current_path(&self) -> String;

    fn navigate(&self, path: &str);
}

pub trait LoginSurface: Send + Sync {
    fn clear_error(&self);

    fn show_error(&self, message: &str);

    fn navigate(&self, path: &str);
}
