mod diff_engine;
mod format_adapter;
mod merge_engine;
mod sbom_builder;
mod sbom_generator;

pub use diff_engine::DiffEngine;
pub use format_adapter::{package_spdx_id, FormatAdapter};
pub use merge_engine::MergeEngine;
pub use sbom_builder::SbomBuilder;
pub use sbom_generator::SbomGenerator;
