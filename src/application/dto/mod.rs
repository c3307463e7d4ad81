/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod create_sbom_request;
mod diff_sboms_request;
mod envelope;
mod merge_sboms_request;
mod sbom_response;
mod validation;

pub use create_sbom_request::CreateSbomRequest;
pub use diff_sboms_request::DiffSbomsRequest;
pub use envelope::{
    ErrorBody, FailureEnvelope, FailureMeta, Pagination, SuccessEnvelope, SuccessMeta,
    ToolResponse,
};
pub use merge_sboms_request::MergeSbomsRequest;
pub use sbom_response::{DiffResponse, SbomResponse, Warnings};
