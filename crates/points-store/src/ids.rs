//! Identifier generation.

use uuid::Uuid;

/// Produces fresh, collision-resistant identifiers.
///
/// No ordering or sequence is implied.
pub trait IdGenerator: Send + Sync {
    /// Returns a new identifier.
    fn generate(&self) -> String;
}

/// Random UUID v4 identifiers, hyphenated lowercase.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
