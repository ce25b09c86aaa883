//! Short code generation and content classification.

pub mod random;
pub mod seq;
pub mod url;

pub use random::RandomGenerator;
pub use seq::SeqGenerator;
pub use self::url::is_valid_url;

use tether_core::ShortCode;

/// Trait for generating candidate short codes.
///
/// Implementations are pure generators that don't interact with storage.
/// Uniqueness is not guaranteed; the link service checks candidates
/// against the store and retries on collision.
pub trait Generator: Send + Sync + 'static {
    type Output: Into<ShortCode>;

    /// Produces the next candidate code.
    fn generate(&self) -> Self::Output;
}
