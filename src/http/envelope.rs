//! Response envelope
//!
//! Every response body has the shape `{"data": ..., "meta": {"message", "status"}}`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    pub message: String,
    pub status: Status,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data: Option<T>,
    pub meta: Meta,
}

impl<T> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            data: Some(data),
            meta: Meta {
                message: message.into(),
                status: Status::Success,
            },
        }
    }
}

impl ApiResponse<()> {
    /// Success with `data: null`
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            data: None,
            meta: Meta {
                message: message.into(),
                status: Status::Success,
            },
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            data: None,
            meta: Meta {
                message: message.into(),
                status: Status::Error,
            },
        }
    }
}
