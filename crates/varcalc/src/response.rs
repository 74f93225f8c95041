//! JSON response envelope

use serde::Serialize;
use varcalc_core::{VarError, VarResult};

/// `{"ok": true, ...result}` on success, `{"ok": false, "error": ...}` on failure
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Response {
    Success {
        ok: bool,
        #[serde(flatten)]
        result: VarResult,
    },
    Failure {
        ok: bool,
        error: String,
    },
}

impl Response {
    #[must_use]
    pub fn success(result: VarResult) -> Self {
        Response::Success { ok: true, result }
    }

    #[must_use]
    pub fn failure(error: impl ToString) -> Self {
        Response::Failure {
            ok: false,
            error: error.to_string(),
        }
    }

    #[must_use]
    pub fn is_ok(&self) -> bool {
        matches!(self, Response::Success { .. })
    }

    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

impl From<Result<VarResult, VarError>> for Response {
    fn from(outcome: Result<VarResult, VarError>) -> Self {
        match outcome {
            Ok(result) => Response::success(result),
            Err(e) => Response::failure(e),
        }
    }
}
