//! # Registry probing: package model, enumeration, and availability checks.
//!
//! Everything the probe tasks need:
//! - [`Package`] and workspace enumeration via `yarn info` ([`list_packages`]);
//! - tarball URL construction ([`tarball_url`]);
//! - [`RegistryConfig`] / [`RegistryClient`] for `HEAD`-probing registries;
//! - the registry error types ([`ListError`], [`ProbeError`]).
//!
//! Each probe is a plain async call with no concurrency of its own; the
//! [`TaskPool`](crate::TaskPool) provides the bounded fan-out.

mod config;
mod error;
mod package;
mod probe;
mod url;

pub use config::{PUBLIC_NPM_REGISTRY, PrivateRegistry, RegistryConfig};
pub use error::{ListError, ProbeError};
pub use package::{Package, list_packages};
pub use probe::{PackageStatus, RegistryClient};
pub use url::tarball_url;
