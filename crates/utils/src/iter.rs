//! Small iterator and slice accessors

/// First item of any iterable, if there is one
pub fn maybe_head<I: IntoIterator>(items: I) -> Option<I::Item> {
    items.into_iter().next()
}

/// First element of a slice, if there is one
pub fn try_get_first<T>(items: &[T]) -> Option<&T> {
    items.first()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_head_of_iterators_and_collections() {
        assert_eq!(maybe_head([1, 2, 3].into_iter()), Some(1));
        assert_eq!(maybe_head(Vec::<u8>::new()), None);
        assert_eq!(maybe_head(vec!["a", "b"]), Some("a"));

        let set: HashSet<u8> = [1, 2, 3].into_iter().collect();
        assert!(matches!(maybe_head(&set), Some(x) if set.contains(x)));
        assert_eq!(maybe_head(HashSet::<u8>::new()), None);
    }

    #[test]
    fn test_head_of_unbounded_iterator() {
        assert_eq!(maybe_head((10..).step_by(5)), Some(10));
    }

    #[test]
    fn test_first_of_slice() {
        assert_eq!(try_get_first(&[7, 8]), Some(&7));
        assert_eq!(try_get_first::<u8>(&[]), None);
    }
}
