//! Configuration module:
//! 1. Read runtime settings from the environment (after loading `.env`).
//! 2. Supply defaults for everything except the signing secret.
//! 3. Describe the seeded account and item list the in-memory store starts from.

use std::net::SocketAddr;

use anyhow::{Context, anyhow, bail};

use crate::api::types::{Account, DEFAULT_TOKEN_TTL_SEC, Item, Profile};

/// Signing secret (required).
pub(crate) const JWT_SECRET_ENV: &str = "JWT_SECRET";
const PORT_ENV: &str = "PORT";
const HOST_ENV: &str = "HOST";
const TOKEN_TTL_ENV: &str = "TOKEN_TTL_SEC";
const USER_EMAIL_ENV: &str = "ITEMDESK_USER_EMAIL";
const USER_PASSWORD_ENV: &str = "ITEMDESK_USER_PASSWORD";
const USER_NAME_ENV: &str = "ITEMDESK_USER_NAME";

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_USER_EMAIL: &str = "demo@itemdesk.local";
const DEFAULT_USER_PASSWORD: &str = "demo-password";
const DEFAULT_USER_NAME: &str = "demo";

/// Resolved service configuration.
#[derive(Clone)]
pub(crate) struct AppConfig {
    pub(crate) host: String,
    pub(crate) port: u16,
    pub(crate) jwt_secret: String,
    pub(crate) token_ttl_sec: u64,
    pub(crate) seed_account: SeedAccount,
}

/// Account the store is seeded with at startup.
#[derive(Debug, Clone)]
pub(crate) struct SeedAccount {
    pub(crate) email: String,
    pub(crate) password: String,
    pub(crate) name: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("jwt_secret", &"<redacted>")
            .field("token_ttl_sec", &self.token_ttl_sec)
            .field("seed_email", &self.seed_account.email)
            .finish()
    }
}

impl AppConfig {
    /// Load `.env` (if any) and read the process environment.
    pub(crate) fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup.
    pub(crate) fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let jwt_secret = read(JWT_SECRET_ENV)
            .ok_or_else(|| anyhow!("environment variable {JWT_SECRET_ENV} is required"))?;

        let port = match read(PORT_ENV) {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("{PORT_ENV} must be a port number, got {raw:?}"))?,
            None => DEFAULT_PORT,
        };

        let token_ttl_sec = match read(TOKEN_TTL_ENV) {
            Some(raw) => raw
                .parse::<u64>()
                .with_context(|| format!("{TOKEN_TTL_ENV} must be seconds, got {raw:?}"))?,
            None => DEFAULT_TOKEN_TTL_SEC,
        };
        if token_ttl_sec == 0 {
            bail!("{TOKEN_TTL_ENV} must be greater than zero");
        }

        Ok(Self {
            host: read(HOST_ENV).unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            jwt_secret,
            token_ttl_sec,
            seed_account: SeedAccount {
                email: read(USER_EMAIL_ENV).unwrap_or_else(|| DEFAULT_USER_EMAIL.to_string()),
                password: read(USER_PASSWORD_ENV)
                    .unwrap_or_else(|| DEFAULT_USER_PASSWORD.to_string()),
                name: read(USER_NAME_ENV).unwrap_or_else(|| DEFAULT_USER_NAME.to_string()),
            },
        })
    }

    /// Listen address.
    pub(crate) fn listen_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid listen address {}:{}", self.host, self.port))
    }

    /// Accounts the store starts with.
    pub(crate) fn seed_accounts(&self) -> Vec<Account> {
        let seed = &self.seed_account;
        vec![Account {
            email: seed.email.clone(),
            password: seed.password.clone(),
            profile: Profile {
                name: seed.name.clone(),
                email: seed.email.clone(),
            },
        }]
    }

    /// Items the store starts with.
    pub(crate) fn seed_items(&self) -> Vec<Item> {
        vec![
            Item {
                id: 1,
                name: "Laptop".to_string(),
            },
            Item {
                id: 2,
                name: "Mouse Gaming".to_string(),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::AppConfig;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn secret_is_required() {
        let err = AppConfig::from_lookup(lookup(&[])).unwrap_err();
        assert!(err.to_string().contains("JWT_SECRET"));

        let err = AppConfig::from_lookup(lookup(&[("JWT_SECRET", "   ")])).unwrap_err();
        assert!(err.to_string().contains("JWT_SECRET"));
    }

    #[test]
    fn defaults_apply_when_only_secret_is_set() {
        let cfg = AppConfig::from_lookup(lookup(&[("JWT_SECRET", "s3cret")])).unwrap();
        assert_eq!(cfg.port, 5000);
        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.token_ttl_sec, 900);
        assert_eq!(cfg.seed_account.email, "demo@itemdesk.local");
        assert_eq!(cfg.listen_addr().unwrap().port(), 5000);
        assert_eq!(cfg.seed_items().len(), 2);
    }

    #[test]
    fn overrides_are_read() {
        let cfg = AppConfig::from_lookup(lookup(&[
            ("JWT_SECRET", "s3cret"),
            ("PORT", "8081"),
            ("HOST", "127.0.0.1"),
            ("TOKEN_TTL_SEC", "60"),
            ("ITEMDESK_USER_EMAIL", "ops@itemdesk.local"),
            ("ITEMDESK_USER_NAME", "ops"),
        ]))
        .unwrap();
        assert_eq!(cfg.listen_addr().unwrap().to_string(), "127.0.0.1:8081");
        assert_eq!(cfg.token_ttl_sec, 60);

        let accounts = cfg.seed_accounts();
        assert_eq!(accounts[0].email, "ops@itemdesk.local");
        assert_eq!(accounts[0].profile.name, "ops");
        assert_eq!(accounts[0].profile.email, "ops@itemdesk.local");
    }

    #[test]
    fn bad_numbers_are_errors() {
        assert!(AppConfig::from_lookup(lookup(&[("JWT_SECRET", "s"), ("PORT", "http")])).is_err());
        assert!(
            AppConfig::from_lookup(lookup(&[("JWT_SECRET", "s"), ("TOKEN_TTL_SEC", "0")]))
                .is_err()
        );
    }

    #[test]
    fn debug_output_hides_secret() {
        let cfg = AppConfig::from_lookup(lookup(&[("JWT_SECRET", "s3cret")])).unwrap();
        assert!(!format!("{cfg:?}").contains("s3cret"));
    }
}
