//! # Registry configuration.
//!
//! Provides [`RegistryConfig`]: which registries to probe and which package
//! names count as private.
//!
//! ## Field semantics
//! - `public_url`: the public registry base (defaults to npmjs.org)
//! - `private`: optional private registry with its credential
//! - `private_prefix`: name prefix marking a package as private; unset means
//!   no package is private

use url::Url;

use crate::error::ConfigError;

/// The default public npm registry.
pub const PUBLIC_NPM_REGISTRY: &str = "https://registry.npmjs.org";

/// A private registry endpoint and its credential.
#[derive(Clone, Debug)]
pub struct PrivateRegistry {
    /// Registry base URL.
    pub url: String,
    /// Value sent verbatim as the `Authorization` header, if any.
    pub auth_token: Option<String>,
}

/// Configuration for [`RegistryClient`](super::RegistryClient).
///
/// ## Example
/// ```
/// use pkgprobe::RegistryConfig;
///
/// let cfg = RegistryConfig::default();
/// assert!(cfg.validate().is_ok());
/// assert!(cfg.private.is_none());
/// ```
#[derive(Clone, Debug)]
pub struct RegistryConfig {
    /// Public registry base URL.
    pub public_url: String,
    /// Private registry, if the workspace uses one.
    pub private: Option<PrivateRegistry>,
    /// Name prefix marking a package as private (e.g. `@acme/`).
    pub private_prefix: Option<String>,
}

impl RegistryConfig {
    /// Checks that every configured registry base is a parseable URL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_url(&self.public_url)?;
        if let Some(private) = &self.private {
            validate_url(&private.url)?;
        }
        Ok(())
    }
}

impl Default for RegistryConfig {
    /// Default configuration: public npmjs.org, no private registry, no
    /// private prefix.
    fn default() -> Self {
        Self {
            public_url: PUBLIC_NPM_REGISTRY.to_string(),
            private: None,
            private_prefix: None,
        }
    }
}

fn validate_url(raw: &str) -> Result<(), ConfigError> {
    Url::parse(raw)
        .map(|_| ())
        .map_err(|source| ConfigError::InvalidRegistryUrl {
            url: raw.to_string(),
            source,
        })
}
