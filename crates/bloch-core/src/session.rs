//! Session file serialization

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{SPHERE_RINGS, SPHERE_SECTORS};
use crate::state::BlochState;

/// A saved viewer session: state angles plus mesh resolution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// File format version
    pub version: u32,
    /// Session name
    pub name: String,
    /// Visualization state (trail snapshot is not persisted)
    pub state: BlochState,
    /// Sphere mesh latitude bands
    pub sphere_rings: u32,
    /// Sphere mesh longitude segments
    pub sphere_sectors: u32,
}

impl Default for Session {
    fn default() -> Self {
        Self::new("New Session")
    }
}

impl Session {
    /// Create a new session with default state
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            version: 1,
            name: name.into(),
            state: BlochState::default(),
            sphere_rings: SPHERE_RINGS,
            sphere_sectors: SPHERE_SECTORS,
        }
    }

    /// Save session to a file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SessionError> {
        let path = path.as_ref();
        let content = self.to_bytes()?;
        std::fs::write(path, content).map_err(|e| SessionError::Io(e.to_string()))?;
        tracing::info!(path = %path.display(), "saved session");
        Ok(())
    }

    /// Serialize session to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, SessionError> {
        let content = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| SessionError::Serialize(e.to_string()))?;
        Ok(content.into_bytes())
    }

    /// Load session from a file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SessionError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| SessionError::Io(e.to_string()))?;
        let session: Session =
            ron::from_str(&content).map_err(|e| SessionError::Deserialize(e.to_string()))?;
        tracing::info!(path = %path.display(), "loaded session");
        Ok(session)
    }

    /// Load session from bytes
    pub fn load_from_bytes(data: &[u8]) -> Result<Self, SessionError> {
        let content =
            std::str::from_utf8(data).map_err(|e| SessionError::Deserialize(e.to_string()))?;
        let session: Session =
            ron::from_str(content).map_err(|e| SessionError::Deserialize(e.to_string()))?;
        Ok(session)
    }
}

/// Session-related errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum SessionError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Serialization error: {0}")]
    Serialize(String),
    #[error("Deserialization error: {0}")]
    Deserialize(String),
}
