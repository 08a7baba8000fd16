/// Open Packaging Conventions (OPC) implementation.
///
/// This module provides the read side of the OPC specification, which defines
/// the structure and packaging format for Office Open XML documents:
///
/// - ZIP-based physical packaging
/// - Content type resolution
/// - Package structure (parts, relationships)

pub mod constants;
pub mod error;
pub mod package;
pub mod packuri;
pub mod part;
pub mod phys_pkg;
pub mod pkgreader;
pub mod rel;

// Re-export commonly used types
pub use package::OpcPackage;
pub use packuri::PackURI;
pub use part::Part;
pub use rel::{Relationship, Relationships};
