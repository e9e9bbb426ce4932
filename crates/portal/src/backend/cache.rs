//! Cache key for catalog responses.

/// Cache key for catalog reads.
///
/// Only the course list is cached. Module and material lists are read fresh
/// on every course view.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum CacheKey {
    Courses,
}
