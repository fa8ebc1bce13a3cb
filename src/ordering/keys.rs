//! Secondary sort keys applied before the topological pass.
//!
//! Keys live in a flat list and are compared in sequence; the first key that tells two
//! elements apart decides their order.

use std::cmp::Ordering;

/// Direction a [`SortKey`] sorts in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::Display)]
pub enum SortDirection {
    /// Smallest key first
    #[default]
    Ascending,
    /// Largest key first
    Descending,
}

impl SortDirection {
    /// Applies this direction to an ascending comparison result.
    #[must_use]
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

type Comparison<T> = Box<dyn Fn(&T, &T) -> Ordering>;

/// One entry of a tie-breaking key list: key extraction fused with its comparer.
pub(crate) struct SortKey<T> {
    compare: Comparison<T>,
    direction: SortDirection,
}

impl<T> SortKey<T> {
    /// Compares elements by the [`Ord`] implementation of an extracted key.
    pub(crate) fn by_key<K, F>(key: F, direction: SortDirection) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + 'static,
    {
        SortKey {
            compare: Box::new(move |a, b| key(a).cmp(&key(b))),
            direction,
        }
    }

    /// Compares elements with a caller supplied comparer over an extracted key.
    pub(crate) fn by_key_with<K, F, C>(key: F, compare: C, direction: SortDirection) -> Self
    where
        F: Fn(&T) -> K + 'static,
        C: Fn(&K, &K) -> Ordering + 'static,
    {
        SortKey {
            compare: Box::new(move |a, b| compare(&key(a), &key(b))),
            direction,
        }
    }

    pub(crate) fn compare(&self, a: &T, b: &T) -> Ordering {
        self.direction.apply((self.compare)(a, b))
    }
}

/// Compares two elements by every key in turn.
pub(crate) fn compare_by_keys<T>(keys: &[SortKey<T>], a: &T, b: &T) -> Ordering {
    keys.iter()
        .map(|key| key.compare(a, b))
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_apply() {
        assert_eq!(SortDirection::Ascending.apply(Ordering::Less), Ordering::Less);
        assert_eq!(SortDirection::Descending.apply(Ordering::Less), Ordering::Greater);
        assert_eq!(SortDirection::Descending.apply(Ordering::Equal), Ordering::Equal);
        assert_eq!(SortDirection::default(), SortDirection::Ascending);
        assert_eq!(SortDirection::Descending.to_string(), "Descending");
    }

    #[test]
    fn test_keys_compare_in_sequence() {
        let keys: Vec<SortKey<(u8, &str)>> = vec![
            SortKey::by_key(|pair: &(u8, &str)| pair.0, SortDirection::Ascending),
            SortKey::by_key(|pair: &(u8, &str)| pair.1.len(), SortDirection::Descending),
        ];

        assert_eq!(compare_by_keys(&keys, &(1, "a"), &(2, "a")), Ordering::Less);
        assert_eq!(compare_by_keys(&keys, &(1, "a"), &(1, "abc")), Ordering::Greater);
        assert_eq!(compare_by_keys(&keys, &(1, "ab"), &(1, "cd")), Ordering::Equal);
        assert_eq!(compare_by_keys(&[], &(9, "z"), &(1, "a")), Ordering::Equal);
    }

    #[test]
    fn test_custom_comparer() {
        let key = SortKey::by_key_with(
            |name: &&str| name.to_string(),
            |a: &String, b: &String| a.to_lowercase().cmp(&b.to_lowercase()),
            SortDirection::Ascending,
        );
        assert_eq!(key.compare(&"Beta", &"alpha"), Ordering::Greater);
        assert_eq!(key.compare(&"ALPHA", &"alpha"), Ordering::Equal);
    }
}
