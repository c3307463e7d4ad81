/// Domain layer - SBOM models and the format-normalization engine
///
/// This layer is pure: no I/O, no global state. Time and randomness come in
/// through the `IdentitySource` port.
pub mod domain;
pub mod services;
