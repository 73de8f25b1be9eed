//! Project identity value objects

use crate::constants::PROJECT_PATH_SEPARATOR;
use crate::error::{Error, Result};
use crate::ports::Project;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a project within a build
///
/// The root project is identified by its name; nested projects by their
/// absolute path (`:app`, `:libs:core`). Deserialized values go through the
/// same checks as [`ProjectPath::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawProjectPath")]
pub struct ProjectPath {
    name: String,
    path: String,
}

#[derive(Deserialize)]
struct RawProjectPath {
    name: String,
    path: String,
}

impl TryFrom<RawProjectPath> for ProjectPath {
    type Error = Error;

    fn try_from(raw: RawProjectPath) -> Result<Self> {
        if raw.path.len() == 1 && raw.path.starts_with(PROJECT_PATH_SEPARATOR) {
            return Self::named_root(raw.name);
        }
        let parsed = Self::parse(&raw.path)?;
        if parsed.name != raw.name {
            return Err(Error::invalid_argument(format!(
                "Project name '{}' does not match path '{}'",
                raw.name, raw.path
            )));
        }
        Ok(parsed)
    }
}

impl ProjectPath {
    /// The root project of a build
    ///
    /// The name is expected to be non-empty; use [`ProjectPath::named_root`]
    /// when it comes from outside.
    pub fn root<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            path: PROJECT_PATH_SEPARATOR.to_string(),
        }
    }

    /// The root project of a build, rejecting an empty name
    pub fn named_root<S: Into<String>>(name: S) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::invalid_argument("Root project name cannot be empty"));
        }
        Ok(Self::root(name))
    }

    /// Parse an absolute path of a nested project such as `:libs:core`
    ///
    /// The bare root path `:` carries no name and is rejected; build the
    /// root with [`ProjectPath::named_root`] instead.
    pub fn parse(path: &str) -> Result<Self> {
        if !path.starts_with(PROJECT_PATH_SEPARATOR) {
            return Err(Error::invalid_argument(format!(
                "Project path '{path}' must be absolute"
            )));
        }
        let name = path
            .rsplit(PROJECT_PATH_SEPARATOR)
            .next()
            .unwrap_or_default();
        if name.is_empty() || path[1..].split(PROJECT_PATH_SEPARATOR).any(str::is_empty) {
            return Err(Error::invalid_argument(format!(
                "Project path '{path}' contains an empty segment"
            )));
        }
        Ok(Self {
            name: name.to_string(),
            path: path.to_string(),
        })
    }

    /// Nested project under this one
    pub fn child<S: AsRef<str>>(&self, name: S) -> Self {
        let name = name.as_ref();
        let path = if self.is_root() {
            format!("{PROJECT_PATH_SEPARATOR}{name}")
        } else {
            format!("{}{PROJECT_PATH_SEPARATOR}{name}", self.path)
        };
        Self {
            name: name.to_string(),
            path,
        }
    }

    /// Project name (last path segment, or the build name for the root)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Absolute project path
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Whether this is the root project
    pub fn is_root(&self) -> bool {
        self.path.len() == 1
    }
}

impl fmt::Display for ProjectPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            write!(f, "root project '{}'", self.name)
        } else {
            write!(f, "project '{}'", self.path)
        }
    }
}

impl Project for ProjectPath {
    fn display_name(&self) -> String {
        self.to_string()
    }
}
