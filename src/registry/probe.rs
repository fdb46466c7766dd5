//! # Registry availability probing.
//!
//! A probe issues a `HEAD` request against the package's tarball URL and
//! classifies the answer:
//!
//! ```text
//! 2xx               → available
//! 404               → missing
//! other status      → ProbeError::UnexpectedStatus
//! transport failure → ProbeError::Http
//! ```
//!
//! Private packages are checked only against the private registry; public
//! packages against the public registry and, when one is configured, the
//! private registry too. A probe error is the caller's third outcome,
//! distinct from both "available" and "missing".

use std::time::Duration;

use reqwest::header::AUTHORIZATION;

use crate::error::ConfigError;

use super::config::RegistryConfig;
use super::error::ProbeError;
use super::package::Package;
use super::url::tarball_url;

/// Availability of one package across the configured registries.
///
/// `None` means the registry was not checked for this package: private
/// packages skip the public registry, and the private column is empty when
/// no private registry is configured.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PackageStatus {
    /// The probed package.
    pub package: Package,
    /// Availability on the public registry.
    pub public: Option<bool>,
    /// Availability on the private registry.
    pub private: Option<bool>,
}

impl PackageStatus {
    /// True when the package is missing from the registry that is supposed
    /// to serve it: the private registry for private packages, the public
    /// registry for everything else.
    pub fn is_problematic(&self) -> bool {
        if self.package.private {
            self.private != Some(true)
        } else {
            self.public != Some(true)
        }
    }
}

/// Probes registries for package tarball availability.
///
/// Holds one shared HTTP client; connection reuse across probes is what
/// makes a large workspace check cheap.
#[derive(Debug)]
pub struct RegistryClient {
    http: reqwest::Client,
    config: RegistryConfig,
}

impl RegistryClient {
    /// Creates a client for the given configuration.
    ///
    /// Validates the configured URLs and builds the HTTP client; both are
    /// construction-time failures.
    pub fn new(config: RegistryConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let http = reqwest::Client::builder()
            .user_agent(concat!("pkgprobe/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|source| ConfigError::HttpClient { source })?;
        Ok(Self { http, config })
    }

    /// Returns the configuration this client was built with.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Checks whether the package's tarball exists on the public registry.
    pub async fn exists_on_public(&self, package: &Package) -> Result<bool, ProbeError> {
        let url = tarball_url(&self.config.public_url, package);
        self.head(&url, None, package).await
    }

    /// Checks whether the package's tarball exists on the private registry.
    ///
    /// Fails with [`ProbeError::NoPrivateRegistry`] when none is configured.
    pub async fn exists_on_private(&self, package: &Package) -> Result<bool, ProbeError> {
        let Some(private) = &self.config.private else {
            return Err(ProbeError::NoPrivateRegistry {
                package: package.spec(),
            });
        };
        let url = tarball_url(&private.url, package);
        self.head(&url, private.auth_token.as_deref(), package).await
    }

    /// Probes every registry relevant to this package.
    pub async fn probe(&self, package: &Package) -> Result<PackageStatus, ProbeError> {
        if package.private {
            let private = self.exists_on_private(package).await?;
            return Ok(PackageStatus {
                package: package.clone(),
                public: None,
                private: Some(private),
            });
        }

        let public = self.exists_on_public(package).await?;
        let private = match &self.config.private {
            Some(_) => Some(self.exists_on_private(package).await?),
            None => None,
        };
        Ok(PackageStatus {
            package: package.clone(),
            public: Some(public),
            private,
        })
    }

    async fn head(
        &self,
        url: &str,
        auth_token: Option<&str>,
        package: &Package,
    ) -> Result<bool, ProbeError> {
        let mut request = self.http.head(url);
        if let Some(token) = auth_token {
            request = request.header(AUTHORIZATION, token);
        }

        let response = request.send().await.map_err(|source| ProbeError::Http {
            url: url.to_string(),
            source,
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(true);
        }
        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(false);
        }
        Err(ProbeError::UnexpectedStatus {
            status,
            package: package.spec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(private_pkg: bool, public: Option<bool>, private: Option<bool>) -> PackageStatus {
        PackageStatus {
            package: Package {
                name: "demo".to_string(),
                version: "1.0.0".to_string(),
                private: private_pkg,
            },
            public,
            private,
        }
    }

    #[test]
    fn private_package_needs_the_private_registry() {
        assert!(!status(true, None, Some(true)).is_problematic());
        assert!(status(true, None, Some(false)).is_problematic());
    }

    #[test]
    fn public_package_needs_the_public_registry() {
        assert!(!status(false, Some(true), Some(false)).is_problematic());
        assert!(status(false, Some(false), Some(true)).is_problematic());
        assert!(status(false, Some(false), None).is_problematic());
    }
}
