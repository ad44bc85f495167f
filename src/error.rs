//! Crate error type.
//!
//! Item generation is total and never fails. Errors only come from caller
//! contract violations (wrong grade, answering twice) and from I/O around
//! configuration and profile storage.

use thiserror::Error;

use crate::quiz_engine::models::{Grade, Topic};

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("grade {0} is outside 1-12")]
    InvalidGrade(u8),

    #[error("{topic} is not offered in {grade}")]
    TopicNotOffered { topic: Topic, grade: Grade },

    #[error("no item is loaded")]
    NoActiveItem,

    #[error("the current item has already been answered")]
    AlreadyAnswered,

    #[error("the current item has not been answered yet")]
    NotAnswered,

    #[error("option {index} does not exist (item has {len} options)")]
    OptionOutOfRange { index: usize, len: usize },

    #[error("need {needed} coins, have {available}")]
    InsufficientCoins { needed: u32, available: u32 },

    #[error("avatar already owned: {0}")]
    AlreadyOwned(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type EngineResult<T> = Result<T, EngineError>;
