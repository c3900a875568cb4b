/// Active wallet connection. Both fields are set iff connected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    provider: Option<String>,
    account: Option<String>,
}

impl Session {
    /// A disconnected session
    pub fn disconnected() -> Self {
        Self::default()
    }

    pub fn connected(provider: impl Into<String>, account: impl Into<String>) -> Self {
        Self {
            provider: Some(provider.into()),
            account: Some(account.into()),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.provider.is_some()
    }

    pub fn provider(&self) -> Option<&str> {
        self.provider.as_deref()
    }

    pub fn account(&self) -> Option<&str> {
        self.account.as_deref()
    }
}
