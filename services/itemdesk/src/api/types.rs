//! API request/response types and internal auth types.

use serde::{Deserialize, Serialize};

/// Default access token lifetime (seconds).
pub(crate) const DEFAULT_TOKEN_TTL_SEC: u64 = 15 * 60;
/// JWT header algorithm accepted and emitted.
pub(crate) const TOKEN_ALG: &str = "HS256";

/// Login request.
#[derive(Debug, Deserialize)]
pub(crate) struct LoginRequest {
    #[serde(default)]
    pub(crate) email: Option<String>,
    #[serde(default)]
    pub(crate) password: Option<String>,
}

/// Login response.
#[derive(Debug, Serialize)]
pub(crate) struct LoginData {
    pub(crate) token: String,
}

/// Catalogue entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Item {
    pub(crate) id: u64,
    pub(crate) name: String,
}

/// Editable user profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Profile {
    pub(crate) name: String,
    pub(crate) email: String,
}

/// Partial profile update; absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ProfilePatch {
    #[serde(default)]
    pub(crate) name: Option<String>,
    #[serde(default)]
    pub(crate) email: Option<String>,
}

impl ProfilePatch {
    /// Apply the provided fields onto `profile`.
    pub(crate) fn apply_to(&self, profile: &mut Profile) {
        if let Some(name) = &self.name {
            profile.name = name.clone();
        }
        if let Some(email) = &self.email {
            profile.email = email.clone();
        }
    }
}

/// Stored account: login credentials plus the profile they own.
#[derive(Debug, Clone)]
pub(crate) struct Account {
    pub(crate) email: String,
    pub(crate) password: String,
    pub(crate) profile: Profile,
}

/// JWT header.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct TokenHeader {
    pub(crate) alg: String,
    #[serde(default)]
    pub(crate) typ: Option<String>,
}

/// Access token claims.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct AccessTokenClaims {
    /// Account key (login email).
    pub(crate) sub: String,
    pub(crate) email: String,
    pub(crate) iat: u64,
    pub(crate) exp: u64,
    pub(crate) jti: String,
}

/// Authenticated caller, attached to protected requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Identity {
    pub(crate) subject: String,
    pub(crate) expires_at: u64,
}

impl From<AccessTokenClaims> for Identity {
    fn from(claims: AccessTokenClaims) -> Self {
        Self {
            subject: claims.sub,
            expires_at: claims.exp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Profile, ProfilePatch};

    #[test]
    fn patch_touches_only_provided_fields() {
        let mut profile = Profile {
            name: "demo".to_string(),
            email: "demo@itemdesk.local".to_string(),
        };
        let patch = ProfilePatch {
            name: Some("Nama Baru".to_string()),
            email: None,
        };
        patch.apply_to(&mut profile);
        assert_eq!(profile.name, "Nama Baru");
        assert_eq!(profile.email, "demo@itemdesk.local");
    }

    #[test]
    fn missing_patch_fields_deserialize_as_none() {
        let patch: ProfilePatch = serde_json::from_str(r#"{"email":"x@y.z"}"#).unwrap();
        assert!(patch.name.is_none());
        assert_eq!(patch.email.as_deref(), Some("x@y.z"));
    }
}
