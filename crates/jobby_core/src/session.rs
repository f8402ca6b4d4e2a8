use std::fmt;

/// Days a stored credential stays valid.
pub const CREDENTIAL_TTL_DAYS: i64 = 30;

/// Opaque bearer token.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn token(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` header.
    pub fn authorization(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

// Tokens must not leak through `{:?}` in logs or test output.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Credential(len={})", self.0.len())
    }
}

/// Password typed into the login form.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Password(String);

impl Password {
    pub fn new(password: impl Into<String>) -> Self {
        Self(password.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

/// Authentication context threaded through every screen. Fetch effects carry
/// a copy of the credential instead of reading a global store.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    credential: Option<Credential>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(credential: Credential) -> Self {
        Self {
            credential: Some(credential),
        }
    }

    pub fn credential(&self) -> Option<&Credential> {
        self.credential.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.credential.is_some()
    }

    pub(crate) fn sign_in(&mut self, credential: Credential) {
        self.credential = Some(credential);
    }

    pub(crate) fn sign_out(&mut self) {
        self.credential = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authorization_header_uses_bearer_scheme() {
        assert_eq!(Credential::new("abc").authorization(), "Bearer abc");
    }

    #[test]
    fn debug_output_hides_password() {
        let password = Password::new("hunter2-secret");
        assert_eq!(format!("{password:?}"), "Password(***)");
        assert_eq!(password.char_count(), 14);
    }

    #[test]
    fn debug_output_hides_token() {
        let rendered = format!("{:?}", Credential::new("secret-token"));
        assert!(!rendered.contains("secret"));
    }
}
