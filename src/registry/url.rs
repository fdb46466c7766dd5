//! # Tarball URL construction.
//!
//! Registries serve package tarballs at
//! `<registry>/<escaped-name>/-/<base>-<version>.tgz`, where a scoped name
//! keeps its leading `@` but percent-encodes the scope separator:
//! `@babel/core` → `@babel%2Fcore`, tarball `core-<version>.tgz`.

use super::package::Package;

/// Returns the full tarball URL for a package on the given registry.
///
/// A trailing slash on the registry base is tolerated.
pub fn tarball_url(registry: &str, package: &Package) -> String {
    let registry = registry.trim_end_matches('/');
    format!(
        "{registry}/{}/-/{}",
        escaped_name(&package.name),
        tarball_file_name(&package.name, &package.version)
    )
}

/// Builds the escaped name part of the URL.
///
/// npm names are restricted to URL-safe characters; the scope separator is
/// the only one the registry expects percent-encoded.
fn escaped_name(name: &str) -> String {
    match name.strip_prefix('@') {
        Some(rest) => format!("@{}", rest.replace('/', "%2F")),
        None => name.to_string(),
    }
}

/// Builds the tarball file name: the unscoped base name plus version.
fn tarball_file_name(name: &str, version: &str) -> String {
    let base = match name.split_once('/') {
        Some((_, base)) => base,
        None => name,
    };
    format!("{base}-{version}.tgz")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pkg(name: &str, version: &str) -> Package {
        Package {
            name: name.to_string(),
            version: version.to_string(),
            private: false,
        }
    }

    #[test]
    fn plain_package() {
        assert_eq!(
            tarball_url("https://registry.npmjs.org", &pkg("react", "18.2.0")),
            "https://registry.npmjs.org/react/-/react-18.2.0.tgz"
        );
    }

    #[test]
    fn scoped_package_escapes_the_separator() {
        assert_eq!(
            tarball_url("https://registry.npmjs.org", &pkg("@babel/core", "7.24.0")),
            "https://registry.npmjs.org/@babel%2Fcore/-/core-7.24.0.tgz"
        );
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        assert_eq!(
            tarball_url("https://npm.acme.dev/", &pkg("left-pad", "1.3.0")),
            "https://npm.acme.dev/left-pad/-/left-pad-1.3.0.tgz"
        );
    }
}
