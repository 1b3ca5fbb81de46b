pub mod pagination;
pub mod posts;

pub use pagination::PageDto;
pub use posts::PostDto;

use crate::domain::post::AuthorId;

/// Principal already authenticated by the upstream gateway. Passed explicitly
/// into commands so services never read ambient authentication state.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser {
    pub id: AuthorId,
}
