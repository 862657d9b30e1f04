use std::fmt;

use thiserror::Error;

/// Errors that can occur while parsing an experience identifier from its
/// textual `kind:name` form
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExperienceIdError {
    /// The kind segment does not name a recognized asset kind
    #[error("unrecognized asset kind `{kind}`")]
    UnrecognizedKind { kind: String },
    /// The name segment is empty
    #[error("experience identifier has an empty name")]
    EmptyName,
}

/// Kind tag of a primary asset identifier. Only experience bundles are
/// addressable in this context.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AssetKind {
    ExperienceBundle,
}

impl AssetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetKind::ExperienceBundle => "ExperienceBundle",
        }
    }

    fn from_str(raw: &str) -> Option<Self> {
        if raw.eq_ignore_ascii_case("ExperienceBundle") {
            return Some(AssetKind::ExperienceBundle);
        }
        None
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Identifier naming an experience bundle: a (kind, name) pair. Immutable
/// once constructed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ExperienceId {
    kind: AssetKind,
    name: String,
}

impl ExperienceId {
    pub fn new(kind: AssetKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }

    /// Shorthand for an identifier of the experience-bundle kind
    pub fn experience(name: impl Into<String>) -> Self {
        Self::new(AssetKind::ExperienceBundle, name)
    }

    pub fn kind(&self) -> AssetKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this identifier actually names something. Candidate sources
    /// are allowed to produce invalid identifiers (e.g. from an empty option
    /// value); resolution discards them.
    pub fn is_valid(&self) -> bool {
        !self.name.is_empty()
    }

    /// Parses the external textual form. Accepts either `kind:name` or a
    /// bare `name`, which gets the experience-bundle kind.
    pub fn parse_type_and_name(raw: &str) -> Result<Self, ExperienceIdError> {
        let id = match raw.split_once(':') {
            Some((kind, name)) => {
                let Some(kind) = AssetKind::from_str(kind) else {
                    return Err(ExperienceIdError::UnrecognizedKind {
                        kind: kind.to_string(),
                    });
                };
                Self::new(kind, name)
            }
            None => Self::experience(raw),
        };
        if !id.is_valid() {
            return Err(ExperienceIdError::EmptyName);
        }
        Ok(id)
    }
}

impl fmt::Display for ExperienceId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.name)
    }
}
