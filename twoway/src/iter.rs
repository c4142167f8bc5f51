use std::iter::FusedIterator;

use indexmap::map;

/// Borrowing iterator over the pairs of a [`TwoWayMap`](crate::TwoWayMap), in insertion order.
pub struct Iter<'a, L, R>(pub(crate) map::Iter<'a, L, R>);

/// Owning iterator over the pairs of a [`TwoWayMap`](crate::TwoWayMap), in insertion order.
pub struct IntoIter<L, R>(pub(crate) map::IntoIter<L, R>);

pub struct Lefts<'a, L, R>(pub(crate) map::Keys<'a, L, R>);

pub struct Rights<'a, L, R>(pub(crate) map::Values<'a, L, R>);

macro_rules! forward_iterator {
    ($name:ident < $($lt:lifetime ,)? $l:ident , $r:ident >, $item:ty) => {
        impl<$($lt,)? $l, $r> Iterator for $name<$($lt,)? $l, $r> {
            type Item = $item;

            #[inline]
            fn next(&mut self) -> Option<Self::Item> {
                self.0.next()
            }

            #[inline]
            fn size_hint(&self) -> (usize, Option<usize>) {
                self.0.size_hint()
            }
        }

        impl<$($lt,)? $l, $r> DoubleEndedIterator for $name<$($lt,)? $l, $r> {
            #[inline]
            fn next_back(&mut self) -> Option<Self::Item> {
                self.0.next_back()
            }
        }

        impl<$($lt,)? $l, $r> ExactSizeIterator for $name<$($lt,)? $l, $r> {
            #[inline]
            fn len(&self) -> usize {
                self.0.len()
            }
        }

        impl<$($lt,)? $l, $r> FusedIterator for $name<$($lt,)? $l, $r> {}
    };
}

forward_iterator!(Iter<'a, L, R>, (&'a L, &'a R));
forward_iterator!(IntoIter<L, R>, (L, R));
forward_iterator!(Lefts<'a, L, R>, &'a L);
forward_iterator!(Rights<'a, L, R>, &'a R);

// Borrowing iterators restart cheaply, without requiring `L: Clone` or `R: Clone`

impl<L, R> Clone for Iter<'_, L, R> {
    fn clone(&self) -> Self {
        Iter(self.0.clone())
    }
}

impl<L, R> Clone for Lefts<'_, L, R> {
    fn clone(&self) -> Self {
        Lefts(self.0.clone())
    }
}

impl<L, R> Clone for Rights<'_, L, R> {
    fn clone(&self) -> Self {
        Rights(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use crate::TwoWayMap;

    #[test]
    fn test_iteration_follows_insertion_order() {
        let mut map = TwoWayMap::new();
        map.insert("a1", "b1").unwrap();
        map.insert("a2", "b2").unwrap();

        assert_eq!(
            map.iter().collect::<Vec<_>>(),
            vec![(&"a1", &"b1"), (&"a2", &"b2")]
        );
        assert_eq!(map.iter().rev().next(), Some((&"a2", &"b2")));
    }

    #[test]
    fn test_iteration_is_restartable() {
        let map = TwoWayMap::from_pairs([(1, 'x'), (2, 'y'), (3, 'z')]);

        let mut iter = map.iter();
        iter.next();
        let restarted = iter.clone();

        assert_eq!(iter.len(), 2);
        assert_eq!(restarted.collect::<Vec<_>>(), vec![(&2, &'y'), (&3, &'z')]);
        assert_eq!(map.iter().count(), 3);
    }

    #[test]
    fn test_lefts_and_rights() {
        let map = TwoWayMap::from_pairs([(1, 'x'), (2, 'y')]);

        assert_eq!(map.lefts().copied().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(map.rights().copied().collect::<Vec<_>>(), vec!['x', 'y']);
        assert_eq!(map.rights().len(), 2);
    }

    #[test]
    fn test_owned_iteration() {
        let map = TwoWayMap::from_pairs([("a".to_string(), 1), ("b".to_string(), 2)]);

        let pairs = map.into_iter().collect::<Vec<_>>();

        assert_eq!(pairs, vec![("a".to_string(), 1), ("b".to_string(), 2)]);
    }

    #[test]
    fn test_for_loop_over_reference() {
        let map = TwoWayMap::from_pairs([(1, 10), (2, 20)]);
        let mut sum = 0;

        for (left, right) in &map {
            sum += left * right;
        }

        assert_eq!(sum, 50);
    }
}
