//! Generation errors.
//!
//! Every error here is fatal for the run: the same inputs always produce the
//! same error, so nothing is retried. `kind()` groups them for reporting.

use thiserror::Error;

use super::player::PlayerId;

/// Broad error category.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed, unknown, or out-of-range option values.
    Configuration,
    /// Entrance or region template inconsistency found while linking.
    Topology,
    /// Lookup of an unknown region, location, entrance or item name.
    Lookup,
    /// Item pool or placement invariant violated.
    Placement,
    /// Failure writing or encoding output.
    Output,
}

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("{player}: invalid option {option}: {reason}")]
    InvalidOption {
        player: PlayerId,
        option: String,
        reason: String,
    },

    #[error("{player}: duplicate region '{name}'")]
    DuplicateRegion { name: String, player: PlayerId },

    #[error("{player}: duplicate location '{name}'")]
    DuplicateLocation { name: String, player: PlayerId },

    #[error("{player}: duplicate entrance '{name}'")]
    DuplicateEntrance { name: String, player: PlayerId },

    #[error("{player}: entrance '{entrance}' has no target in the {table} table")]
    UnmappedEntrance {
        entrance: String,
        table: String,
        player: PlayerId,
    },

    #[error("{player}: entrance '{entrance}' is already linked")]
    AlreadyLinked { entrance: String, player: PlayerId },

    #[error("{player}: entrance '{entrance}' was never linked")]
    UnlinkedEntrance { entrance: String, player: PlayerId },

    #[error("{player}: region '{name}' not found")]
    RegionNotFound { name: String, player: PlayerId },

    #[error("{player}: location '{name}' not found")]
    LocationNotFound { name: String, player: PlayerId },

    #[error("{player}: entrance '{name}' not found")]
    EntranceNotFound { name: String, player: PlayerId },

    #[error("{player}: unknown item '{name}'")]
    UnknownItem { name: String, player: PlayerId },

    #[error("{player}: no world registered")]
    UnknownPlayer { player: PlayerId },

    #[error("{player}: location '{location}' already holds '{item}'")]
    LocationFilled {
        location: String,
        item: String,
        player: PlayerId,
    },

    #[error("{player}: location '{location}' has no item")]
    UnfilledLocation { location: String, player: PlayerId },

    #[error("{player}: item pool holds {items} items but {locations} locations are open")]
    PoolSizeMismatch {
        player: PlayerId,
        items: usize,
        locations: usize,
    },

    #[error("output I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("output serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("multidata encoding failed: {0}")]
    Encoding(#[from] bincode::Error),
}

impl GenerationError {
    /// Create an invalid option error.
    pub fn invalid_option(
        player: PlayerId,
        option: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidOption {
            player,
            option: option.into(),
            reason: reason.into(),
        }
    }

    /// Category of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidOption { .. } => ErrorKind::Configuration,
            Self::DuplicateRegion { .. }
            | Self::DuplicateLocation { .. }
            | Self::DuplicateEntrance { .. }
            | Self::UnmappedEntrance { .. }
            | Self::AlreadyLinked { .. }
            | Self::UnlinkedEntrance { .. } => ErrorKind::Topology,
            Self::RegionNotFound { .. }
            | Self::LocationNotFound { .. }
            | Self::EntranceNotFound { .. }
            | Self::UnknownItem { .. }
            | Self::UnknownPlayer { .. } => ErrorKind::Lookup,
            Self::LocationFilled { .. }
            | Self::UnfilledLocation { .. }
            | Self::PoolSizeMismatch { .. } => ErrorKind::Placement,
            Self::Io(_) | Self::Json(_) | Self::Encoding(_) => ErrorKind::Output,
        }
    }
}

pub type Result<T> = std::result::Result<T, GenerationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        let p = PlayerId::new(0);
        assert_eq!(
            GenerationError::invalid_option(p, "AmountOfStars", "out of range").kind(),
            ErrorKind::Configuration
        );
        assert_eq!(
            GenerationError::UnmappedEntrance {
                entrance: "x".into(),
                table: "canonical".into(),
                player: p
            }
            .kind(),
            ErrorKind::Topology
        );
        assert_eq!(
            GenerationError::LocationNotFound { name: "x".into(), player: p }.kind(),
            ErrorKind::Lookup
        );
        assert_eq!(
            GenerationError::PoolSizeMismatch { player: p, items: 1, locations: 2 }.kind(),
            ErrorKind::Placement
        );
    }

    #[test]
    fn test_error_messages() {
        let err = GenerationError::RegionNotFound {
            name: "Basement".into(),
            player: PlayerId::new(0),
        };
        assert_eq!(err.to_string(), "Player 1: region 'Basement' not found");
    }
}
