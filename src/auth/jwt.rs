use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::users::Role;

/// Claims issued by the identity collaborator.
///
/// The `sub` field is the user's UUID; `role` is the marketplace role the
/// identity service assigned at registration. The core trusts both once the
/// signature checks out.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// The user UUID.
    pub sub: String,
    /// Token expiration (Unix timestamp).
    pub exp: usize,
    /// Token issued-at (Unix timestamp).
    pub iat: Option<usize>,
    /// User's email.
    pub email: Option<String>,
    /// Display name.
    pub name: Option<String>,
    /// Marketplace role: admin, client, company, or bank.
    pub role: Option<String>,
}

impl Claims {
    /// Extract the user UUID from the `sub` claim.
    pub fn user_id(&self) -> Result<Uuid, String> {
        Uuid::parse_str(&self.sub).map_err(|e| format!("Invalid UUID in sub claim: {e}"))
    }

    /// Parse the role claim into the closed enum. Unknown or missing roles
    /// are rejected here rather than defaulted.
    pub fn user_role(&self) -> Result<Role, String> {
        let raw = self
            .role
            .as_deref()
            .ok_or_else(|| "No role in token claims".to_string())?;
        Role::parse(raw).ok_or_else(|| format!("Unknown role in token claims: {raw}"))
    }

    /// Best-effort display name: the name claim, else the email local part.
    pub fn display_name(&self) -> Option<String> {
        self.name.clone().or_else(|| {
            self.email
                .as_deref()
                .and_then(|e| e.split('@').next())
                .map(str::to_owned)
        })
    }
}

/// Validate an HS256 token against the shared secret and return the claims.
pub fn validate_token(token: &str, secret: &str) -> Result<Claims, String> {
    let validation = Validation::new(Algorithm::HS256);
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| format!("{:?}", e.kind()))
}
