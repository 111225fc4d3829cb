//! First present value out of a lazy sequence of optionals

use super::composition::identity;

/// Returns the first `Some` produced by `candidates`.
///
/// The iterator is advanced only until a present value shows up, so
/// expensive producers after it are never run. An empty or exhausted
/// sequence gives `None`.
pub fn coalesce<T, I>(candidates: I) -> Option<T>
where
    I: IntoIterator<Item = Option<T>>,
{
    candidates.into_iter().find_map(identity)
}

/// [`coalesce`] over deferred producers; each one runs only if every
/// earlier producer came back empty.
pub fn coalesce_with<T, F, I>(producers: I) -> Option<T>
where
    I: IntoIterator<Item = F>,
    F: FnOnce() -> Option<T>,
{
    coalesce(producers.into_iter().map(|produce| produce()))
}

/// Evaluates optional expressions left to right and stops at the first
/// `Some`.
///
/// ```
/// use physocts_core::coalesce;
///
/// let from_env: Option<&str> = None;
/// let port = coalesce!(from_env, Some("8080"), unreachable!());
/// assert_eq!(port, Some("8080"));
/// ```
#[macro_export]
macro_rules! coalesce {
    () => {
        ::core::option::Option::None
    };
    ($($candidate:expr),+ $(,)?) => {
        ::core::option::Option::None $(.or_else(|| $candidate))+
    };
}
