use serde::{Deserialize, Serialize};

use crate::domain::Endpoint;

pub const CURRENT_POSITION_SUBJECT: &str = "current_pos";

/// One form field as it goes on the wire.
///
/// Input is never parsed: an empty field becomes the number `0`, anything else
/// is forwarded as the exact text the operator typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(i64),
}

impl FieldValue {
    pub fn from_input(raw: &str) -> Self {
        if raw.is_empty() {
            Self::Number(0)
        } else {
            Self::Text(raw.to_string())
        }
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        Self::Number(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveData {
    pub x: FieldValue,
    pub y: FieldValue,
    pub z: FieldValue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipetData {
    pub pipet_level: FieldValue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    Move {
        coordinate_system: String,
        data: MoveData,
    },
    PipetControl {
        data: PipetData,
    },
    Request {
        subject: String,
    },
}

impl Command {
    pub fn move_to(coordinate_system: impl Into<String>, x: &str, y: &str, z: &str) -> Self {
        Self::Move {
            coordinate_system: coordinate_system.into(),
            data: MoveData {
                x: FieldValue::from_input(x),
                y: FieldValue::from_input(y),
                z: FieldValue::from_input(z),
            },
        }
    }

    pub fn pipet_control(level: &str) -> Self {
        Self::PipetControl {
            data: PipetData {
                pipet_level: FieldValue::from_input(level),
            },
        }
    }

    pub fn request_current_position() -> Self {
        Self::Request {
            subject: CURRENT_POSITION_SUBJECT.to_string(),
        }
    }

    pub fn endpoint(&self) -> Endpoint {
        match self {
            Self::Move { .. } => Endpoint::Move,
            Self::PipetControl { .. } => Endpoint::PipetControl,
            Self::Request { .. } => Endpoint::Request,
        }
    }

    pub fn to_message(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
