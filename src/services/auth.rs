//! Sign-in against the external credential capability.
//!
//! The admin panel only consumes "sign in with credentials"; the
//! [`Authenticator`] trait is the seam where a real identity provider would
//! plug in. The shipped implementation checks the credentials held in the
//! server configuration.

use thiserror::Error;

use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,
}

/// Credential-checking capability consumed by the sign-in route.
pub trait Authenticator {
    fn sign_in(&self, email: &str, password: &str) -> Result<AuthenticatedUser, AuthError>;
}

/// Authenticator backed by the admin credentials in [`ServerConfig`].
#[derive(Clone)]
pub struct ConfigAuthenticator {
    email: String,
    password: String,
}

impl ConfigAuthenticator {
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            email: config.admin_email.trim().to_lowercase(),
            password: config.admin_password.clone(),
        }
    }
}

impl Authenticator for ConfigAuthenticator {
    fn sign_in(&self, email: &str, password: &str) -> Result<AuthenticatedUser, AuthError> {
        let email = email.trim().to_lowercase();
        if email != self.email || password != self.password {
            return Err(AuthError::InvalidCredentials);
        }

        // Display name falls back to the mailbox part of the address.
        let name = email.split('@').next().unwrap_or("admin").to_string();
        Ok(AuthenticatedUser::new(email, name))
    }
}
