// src/notice.rs

//! User-facing acknowledgement of the last page operation.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum Notice {
  Info(String),
  Error(String),
}

impl Notice {
  pub fn info(message: impl Into<String>) -> Self {
    Notice::Info(message.into())
  }

  pub fn error(message: impl Into<String>) -> Self {
    Notice::Error(message.into())
  }

  pub fn is_error(&self) -> bool {
    matches!(self, Notice::Error(_))
  }
}
