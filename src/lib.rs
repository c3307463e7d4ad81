//! sbom-kit - create, merge, and diff Software Bills of Materials
//!
//! This library normalizes CycloneDX 1.5 and SPDX 2.3 JSON documents into a
//! shared component model, builds new documents from dependency lists,
//! merges documents across formats, and computes semantic diffs. It follows
//! hexagonal architecture.
//!
//! # Architecture
//!
//! - **Domain Layer** (`sbom_generation`): document models and the pure
//!   builder, merge, and diff engines
//! - **Application Layer** (`application`): request validation, use cases,
//!   response envelopes
//! - **Ports** (`ports`): interface definitions for infrastructure
//! - **Adapters** (`adapters`): stdio JSON-RPC transport, system clock
//! - **Shared** (`shared`): common error types
//!
//! # Example
//!
//! ```
//! use sbom_kit::prelude::*;
//! use serde_json::json;
//!
//! let service = SbomToolService::new(
//!     SystemIdentitySource,
//!     GeneratorSettings::default(),
//!     "sbom-kit",
//! );
//!
//! let response = service.create_sbom(&json!({
//!     "deps": [{ "ecosystem": "npm", "name": "lodash", "version": "4.17.21" }],
//!     "format": "cyclonedx"
//! }));
//! assert!(response.is_ok());
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod sbom_generation;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::inbound::StdioServer;
    pub use crate::adapters::outbound::system::SystemIdentitySource;
    pub use crate::application::dto::{
        CreateSbomRequest, DiffResponse, DiffSbomsRequest, MergeSbomsRequest, SbomResponse,
        ToolResponse,
    };
    pub use crate::application::tool_service::SbomToolService;
    pub use crate::application::use_cases::{
        CreateSbomUseCase, DiffSbomsUseCase, MergeSbomsUseCase,
    };
    pub use crate::ports::inbound::SbomToolPort;
    pub use crate::ports::outbound::IdentitySource;
    pub use crate::sbom_generation::domain::{
        ComponentRecord, Dependency, DiffReport, DocumentKind, GeneratorSettings, SbomDocument,
        SbomFormat, SbomMetadata, ToolInfo,
    };
    pub use crate::sbom_generation::services::{
        DiffEngine, FormatAdapter, MergeEngine, SbomBuilder, SbomGenerator,
    };
    pub use crate::shared::error::{ErrorCode, SbomError};
    pub use crate::shared::Result;
}
