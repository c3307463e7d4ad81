/// Use cases for the application layer
///
/// Each use case implements one tool operation.
mod create_sbom;
mod diff_sboms;
mod merge_sboms;

pub use create_sbom::CreateSbomUseCase;
pub use diff_sboms::DiffSbomsUseCase;
pub use merge_sboms::MergeSbomsUseCase;
