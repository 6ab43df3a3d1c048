//! Short code generation.

use rand::distr::Alphanumeric;
use rand::Rng;

/// Construction length of generated short codes.
pub const CODE_LENGTH: usize = 6;

/// Source of candidate short codes.
///
/// The production generator draws from process randomness; tests substitute
/// seeded or scripted implementations so allocation behavior is deterministic.
#[cfg_attr(test, mockall::automock)]
pub trait CodeGenerator: Send + Sync {
    /// Draws one candidate code. Uniqueness is not guaranteed here; the
    /// allocator checks candidates against the store.
    fn generate(&self) -> String;
}

/// Draws [`CODE_LENGTH`]-character codes from the 62-symbol alphanumeric
/// alphabet (upper and lower case letters plus digits).
pub struct RandomCodeGenerator;

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self) -> String {
        rand::rng()
            .sample_iter(Alphanumeric)
            .take(CODE_LENGTH)
            .map(char::from)
            .collect()
    }
}
