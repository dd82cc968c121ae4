//! Runtime error types.

use platformer_component::{AnimationKey, Entity};

/// The asset loader could not produce an asset.
#[derive(Debug, thiserror::Error)]
pub enum AssetLoadError {
    /// No asset exists at the requested path.
    #[error("asset not found: {0}")]
    NotFound(String),

    /// The asset exists but could not be decoded.
    #[error("failed to decode asset '{path}': {reason}")]
    Decode { path: String, reason: String },
}

/// Errors surfaced by world and system operations.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    /// Entity construction failed because its asset could not be loaded.
    #[error("failed to load {path}")]
    AssetLoad {
        path: String,
        #[source]
        source: AssetLoadError,
    },

    /// A frame set was requested that was never registered.
    #[error("{entity} has no animation registered for {key:?}")]
    UndefinedAnimation { entity: Entity, key: AnimationKey },

    /// An operation needed a component the entity does not have.
    #[error("{entity} has no {component} component")]
    MissingComponent {
        entity: Entity,
        component: &'static str,
    },

    /// A scratch slot index past the end of the entity's slots.
    #[error("scratch slot {index} out of range for {entity} ({len} slots)")]
    ScratchIndex {
        entity: Entity,
        index: usize,
        len: usize,
    },

    /// A typed scratch read asked for a different type than the slot holds.
    #[error("scratch slot {index} of {entity} holds {found}, not {expected}")]
    ScratchTypeMismatch {
        entity: Entity,
        index: usize,
        expected: &'static str,
        found: &'static str,
    },

    /// Configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}
