#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Tabs on the auth page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthTab {
    #[default]
    Login,
    Register,
}

impl AuthTab {
    /// Label shown on the tab trigger.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Register => "Register",
        }
    }
}
