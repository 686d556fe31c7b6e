//! Error types for scene operations

use crate::config::ConfigError;
use crate::scene::ActorId;
use thiserror::Error;

/// Scene-level errors
///
/// Only genuinely invalid calls produce an error. Removing something that is
/// not present, or a pick that hits nothing, is reported through the return
/// value instead.
#[derive(Error, Debug)]
pub enum SceneError {
    /// An argument was absent or would break a tree invariant
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The actor id is stale or belongs to another scene
    #[error("Unknown actor: {0:?}")]
    UnknownActor(ActorId),

    /// Children can only be added to actors with the group capability
    #[error("Actor {0:?} is not a group")]
    NotAGroup(ActorId),

    /// Configuration failed to load
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Result alias for scene operations
pub type SceneResult<T> = Result<T, SceneError>;
