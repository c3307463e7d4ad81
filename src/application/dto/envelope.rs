//! Uniform success/failure wrapper returned by every tool.

use crate::shared::error::{ErrorCode, FieldError, SbomError};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Pagination {
    pub next_cursor: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuccessMeta {
    pub source: String,
    pub retrieved_at: String,
    pub pagination: Pagination,
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuccessEnvelope {
    pub ok: bool,
    pub data: Value,
    pub meta: SuccessMeta,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorBody {
    pub code: ErrorCode,
    pub message: String,
    pub details: Option<Vec<FieldError>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FailureMeta {
    pub retrieved_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FailureEnvelope {
    pub ok: bool,
    pub error: ErrorBody,
    pub meta: FailureMeta,
}

/// Envelope around every tool result
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ToolResponse {
    Success(SuccessEnvelope),
    Failure(FailureEnvelope),
}

impl ToolResponse {
    pub fn success(
        data: Value,
        source: impl Into<String>,
        retrieved_at: impl Into<String>,
        warnings: Vec<String>,
    ) -> Self {
        ToolResponse::Success(SuccessEnvelope {
            ok: true,
            data,
            meta: SuccessMeta {
                source: source.into(),
                retrieved_at: retrieved_at.into(),
                pagination: Pagination::default(),
                warnings,
            },
        })
    }

    pub fn failure(
        code: ErrorCode,
        message: impl Into<String>,
        details: Vec<FieldError>,
        retrieved_at: impl Into<String>,
    ) -> Self {
        ToolResponse::Failure(FailureEnvelope {
            ok: false,
            error: ErrorBody {
                code,
                message: message.into(),
                details: (!details.is_empty()).then_some(details),
            },
            meta: FailureMeta {
                retrieved_at: retrieved_at.into(),
            },
        })
    }

    /// Maps any error to a failure envelope.
    ///
    /// `SbomError` keeps its own code and details; anything else is an
    /// internal error carrying the full context chain as its message.
    pub fn from_error(err: &anyhow::Error, retrieved_at: impl Into<String>) -> Self {
        match err.downcast_ref::<SbomError>() {
            Some(sbom_error) => Self::failure(
                sbom_error.code(),
                sbom_error.to_string(),
                sbom_error.details().to_vec(),
                retrieved_at,
            ),
            None => Self::failure(
                ErrorCode::InternalError,
                format!("{:#}", err),
                Vec::new(),
                retrieved_at,
            ),
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, ToolResponse::Success(_))
    }

    pub fn data(&self) -> Option<&Value> {
        match self {
            ToolResponse::Success(envelope) => Some(&envelope.data),
            ToolResponse::Failure(_) => None,
        }
    }

    pub fn error_code(&self) -> Option<ErrorCode> {
        match self {
            ToolResponse::Success(_) => None,
            ToolResponse::Failure(envelope) => Some(envelope.error.code),
        }
    }

    pub fn warnings(&self) -> &[String] {
        match self {
            ToolResponse::Success(envelope) => &envelope.meta.warnings,
            ToolResponse::Failure(_) => &[],
        }
    }
}
