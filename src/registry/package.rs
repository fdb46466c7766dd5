//! # Workspace package model and enumeration.
//!
//! A [`Package`] is one dependency of the current yarn workspace, identified
//! by name and resolved version. Enumeration shells out to
//! `yarn info --json --name-only -A`, which prints one JSON string per
//! locator:
//!
//! ```text
//! "react@npm:18.2.0"
//! "@acme/core@npm:1.4.0"
//! "my-app@workspace:."
//! ```
//!
//! Only `@npm:` locators describe registry-resolvable packages; workspace
//! and portal locators are skipped.

use tokio::process::Command;

use super::error::ListError;

/// One workspace dependency, as reported by yarn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Package {
    /// Package name, including scope (`@acme/core`).
    pub name: String,
    /// Resolved version (`1.4.0`).
    pub version: String,
    /// True when the name carries the configured private-scope prefix.
    pub private: bool,
}

impl Package {
    /// Returns the `name@version` specifier used in logs and reports.
    pub fn spec(&self) -> String {
        format!("{}@{}", self.name, self.version)
    }
}

/// Enumerates all packages of the workspace in the current directory.
///
/// Packages whose name starts with `private_prefix` are flagged private;
/// with no prefix configured, no package is. Returns an error when yarn is
/// missing, exits unsuccessfully, or prints something unparseable.
pub async fn list_packages(private_prefix: Option<&str>) -> Result<Vec<Package>, ListError> {
    let output = Command::new("yarn")
        .args(["info", "--json", "--name-only", "-A"])
        .output()
        .await
        .map_err(|source| ListError::Spawn { source })?;

    if !output.status.success() {
        return Err(ListError::Yarn {
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }

    let stdout = String::from_utf8(output.stdout).map_err(|_| ListError::InvalidUtf8)?;
    parse_locators(&stdout, private_prefix)
}

/// Parses `yarn info --json --name-only` output into packages.
pub(crate) fn parse_locators(
    raw: &str,
    private_prefix: Option<&str>,
) -> Result<Vec<Package>, ListError> {
    let mut packages = Vec::new();

    for line in raw.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let locator: String =
            serde_json::from_str(line).map_err(|source| ListError::Parse {
                line: line.to_string(),
                source,
            })?;

        // Scoped names start with '@' but never contain "@npm:", so the
        // first occurrence is always the name/version boundary.
        let Some((name, version)) = locator.split_once("@npm:") else {
            continue;
        };

        packages.push(Package {
            name: name.to_string(),
            version: version.to_string(),
            private: private_prefix.is_some_and(|prefix| name.starts_with(prefix)),
        });
    }

    Ok(packages)
}
