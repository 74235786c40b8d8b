//! Access token signing and verification (compact JWT, HS256).

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use hmac::{Hmac, Mac};
use serde::de::DeserializeOwned;
use sha2::Sha256;
use uuid::Uuid;

use crate::api::{
    error::ApiError,
    types::{AccessTokenClaims, Identity, TOKEN_ALG, TokenHeader},
};

type HmacSha256 = Hmac<Sha256>;

/// Current unix seconds.
pub(crate) fn unix_now() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

/// Issues and verifies access tokens with one shared secret.
#[derive(Clone)]
pub(crate) struct TokenService {
    secret: Vec<u8>,
    ttl_sec: u64,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("secret", &"<redacted>")
            .field("ttl_sec", &self.ttl_sec)
            .finish()
    }
}

impl TokenService {
    pub(crate) fn new(secret: impl Into<Vec<u8>>, ttl_sec: u64) -> Self {
        Self {
            secret: secret.into(),
            ttl_sec,
        }
    }

    pub(crate) fn ttl_sec(&self) -> u64 {
        self.ttl_sec
    }

    /// Sign a token for `subject`, valid from `now` for the configured TTL.
    pub(crate) fn issue(&self, subject: &str, now: u64) -> Result<String, ApiError> {
        let header = TokenHeader {
            alg: TOKEN_ALG.to_string(),
            typ: Some("JWT".to_string()),
        };
        let claims = AccessTokenClaims {
            sub: subject.to_string(),
            email: subject.to_string(),
            iat: now,
            exp: now.saturating_add(self.ttl_sec),
            jti: Uuid::new_v4().simple().to_string(),
        };

        let header_b64 = encode_segment(&header)?;
        let claims_b64 = encode_segment(&claims)?;
        let signing_input = format!("{header_b64}.{claims_b64}");
        let sig = self.mac(signing_input.as_bytes())?.finalize().into_bytes();
        Ok(format!("{signing_input}.{}", URL_SAFE_NO_PAD.encode(sig)))
    }

    /// Check format, algorithm, signature and expiry; return the embedded identity.
    pub(crate) fn verify(&self, token: &str, now: u64) -> Result<Identity, ApiError> {
        let mut parts = token.split('.');
        let header_b64 = parts.next().unwrap_or_default();
        let claims_b64 = parts.next().unwrap_or_default();
        let sig_b64 = parts.next().unwrap_or_default();
        if header_b64.is_empty()
            || claims_b64.is_empty()
            || sig_b64.is_empty()
            || parts.next().is_some()
        {
            return Err(ApiError::token_invalid("token format is invalid"));
        }

        let header: TokenHeader = decode_segment(header_b64, "token header is invalid")?;
        if header.alg != TOKEN_ALG {
            return Err(ApiError::token_invalid(format!(
                "token algorithm {} is not accepted",
                header.alg
            )));
        }

        let sig = URL_SAFE_NO_PAD
            .decode(sig_b64.as_bytes())
            .map_err(|_| ApiError::token_invalid("token signature encoding is invalid"))?;
        let mut mac = self.mac(header_b64.as_bytes())?;
        mac.update(b".");
        mac.update(claims_b64.as_bytes());
        mac.verify_slice(&sig)
            .map_err(|_| ApiError::token_invalid("token signature check failed"))?;

        let claims: AccessTokenClaims = decode_segment(claims_b64, "token claims are invalid")?;
        if claims.exp <= now {
            return Err(ApiError::token_expired());
        }

        Ok(claims.into())
    }

    /// Keyed HMAC primed with `payload`.
    fn mac(&self, payload: &[u8]) -> Result<HmacSha256, ApiError> {
        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .map_err(|_| ApiError::internal("signing key is invalid"))?;
        mac.update(payload);
        Ok(mac)
    }
}

fn encode_segment<T: serde::Serialize>(value: &T) -> Result<String, ApiError> {
    let raw = serde_json::to_vec(value)
        .map_err(|err| ApiError::internal(format!("encode token segment failed: {err}")))?;
    Ok(URL_SAFE_NO_PAD.encode(raw))
}

fn decode_segment<T: DeserializeOwned>(segment: &str, message: &'static str) -> Result<T, ApiError> {
    let raw = URL_SAFE_NO_PAD
        .decode(segment.as_bytes())
        .map_err(|_| ApiError::token_invalid(message))?;
    serde_json::from_slice(&raw).map_err(|_| ApiError::token_invalid(message))
}
