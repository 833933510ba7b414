//! Authenticated user claims and the request extractor that decodes them.
//!
//! The signed-in identity is a JWT stored through `actix-identity`; every
//! handler that declares an [`AuthenticatedUser`] parameter gets the decoded
//! claims or a 401, which [`crate::middleware::RedirectUnauthorized`] turns
//! into a redirect to the sign-in page.

use actix_identity::Identity;
use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest, error, web};
use futures_util::future::LocalBoxFuture;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::models::config::ServerConfig;

/// Lifetime of a signed-in session in seconds.
const TOKEN_TTL_SECS: i64 = 60 * 60 * 24;

#[derive(Clone, Debug, Serialize, Deserialize)]
/// JWT claims describing the current signed-in administrator.
pub struct AuthenticatedUser {
    /// Email address used to sign in.
    pub sub: String,
    /// Display name shown in the sidebar.
    pub name: String,
    /// Expiry as a unix timestamp.
    pub exp: i64,
}

impl AuthenticatedUser {
    /// Builds claims for a freshly authenticated administrator.
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            sub: email.into(),
            name: name.into(),
            exp: (chrono::Utc::now() + chrono::Duration::seconds(TOKEN_TTL_SECS)).timestamp(),
        }
    }

    pub fn email(&self) -> &str {
        &self.sub
    }

    /// Encodes the claims into the token stored in the identity cookie.
    pub fn to_jwt(&self, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
        encode(
            &Header::default(),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }

    /// Decodes and validates a token minted by [`Self::to_jwt`].
    pub fn from_jwt(token: &str, secret: &str) -> Result<Self, jsonwebtoken::errors::Error> {
        let data = decode::<AuthenticatedUser>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;
        Ok(data.claims)
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let identity_fut = Identity::from_request(req, payload);
        let req = req.clone();

        Box::pin(async move {
            let identity = identity_fut.await?;
            let token = identity.id().map_err(error::ErrorUnauthorized)?;

            let config = req
                .app_data::<web::Data<ServerConfig>>()
                .ok_or_else(|| error::ErrorInternalServerError("server config missing"))?;

            AuthenticatedUser::from_jwt(&token, &config.secret).map_err(error::ErrorUnauthorized)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jwt_round_trip() {
        let user = AuthenticatedUser::new("admin@example.com", "Admin");
        let token = user.to_jwt("secret").unwrap();
        let decoded = AuthenticatedUser::from_jwt(&token, "secret").unwrap();
        assert_eq!(decoded.email(), "admin@example.com");
        assert_eq!(decoded.name, "Admin");
    }

    #[test]
    fn jwt_rejects_wrong_secret() {
        let user = AuthenticatedUser::new("admin@example.com", "Admin");
        let token = user.to_jwt("secret").unwrap();
        assert!(AuthenticatedUser::from_jwt(&token, "other").is_err());
    }
}
