use std::{
    borrow::Borrow,
    collections::HashMap,
    fmt::{self, Debug},
    hash::{BuildHasher, Hash},
};

use indexmap::IndexMap;
use rustc_hash::{FxBuildHasher, FxHashMap};

use crate::{
    base::{Side, debug, trace},
    errors::TwoWayError,
    iter::{IntoIter, Iter, Lefts, Rights},
};

/// A bijection between a set of left values and a set of right values.
///
/// Both directions are hash indices kept in lockstep: `left_to_right` is insertion-ordered
/// and drives iteration, `right_to_left` mirrors it.
#[derive(Clone)]
pub struct TwoWayMap<L, R> {
    left_to_right: IndexMap<L, R, FxBuildHasher>,
    right_to_left: FxHashMap<R, L>,
}

/// Pairs displaced by an upsert through [`TwoWayMap::set_right`] or [`TwoWayMap::set_left`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overwritten<L, R> {
    /// Neither value was present.
    Neither,
    /// The left value was paired with another right value.
    Left(L, R),
    /// The right value was paired with another left value.
    Right(L, R),
    /// The exact pair was already stored.
    Pair(L, R),
    /// Both values were present in two different pairs: `(left, old right)`, `(old left, right)`.
    Both((L, R), (L, R)),
}

impl<L, R> Default for TwoWayMap<L, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L, R> TwoWayMap<L, R> {
    pub fn new() -> Self {
        Self {
            left_to_right: IndexMap::with_hasher(FxBuildHasher),
            right_to_left: FxHashMap::with_hasher(FxBuildHasher),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            left_to_right: IndexMap::with_capacity_and_hasher(capacity, FxBuildHasher),
            right_to_left: FxHashMap::with_capacity_and_hasher(capacity, FxBuildHasher),
        }
    }

    pub fn len(&self) -> usize {
        self.left_to_right.len()
    }

    pub fn is_empty(&self) -> bool {
        self.left_to_right.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.left_to_right.capacity().min(self.right_to_left.capacity())
    }

    pub fn clear(&mut self) {
        self.left_to_right.clear();
        self.right_to_left.clear();
    }

    /// Pairs in the order their left values were first inserted.
    pub fn iter(&self) -> Iter<'_, L, R> {
        Iter(self.left_to_right.iter())
    }

    pub fn lefts(&self) -> Lefts<'_, L, R> {
        Lefts(self.left_to_right.keys())
    }

    /// Right values, ordered by the pair they belong to.
    pub fn rights(&self) -> Rights<'_, L, R> {
        Rights(self.left_to_right.values())
    }
}

impl<L, R> TwoWayMap<L, R>
where
    L: Clone + Eq + Hash,
    R: Clone + Eq + Hash,
{
    /// Bulk load with last-write-wins semantics, see [`TwoWayMap::set_right`].
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (L, R)>,
    {
        let mut map = Self::new();
        map.extend(pairs);
        map
    }

    pub fn from_reversed_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (R, L)>,
    {
        Self::from_pairs(pairs.into_iter().map(|(right, left)| (left, right)))
    }

    /// Copy a unidirectional `L -> R` mapping, rejecting any right value seen twice.
    pub fn try_from_left_map<I>(source: I) -> Result<Self, TwoWayError>
    where
        I: IntoIterator<Item = (L, R)>,
    {
        let source = source.into_iter();
        let mut map = Self::with_capacity(source.size_hint().0);

        for (left, right) in source {
            map.push_strict(left, right, Side::Left)?;
        }

        Ok(map)
    }

    /// Copy a unidirectional `R -> L` mapping, rejecting any left value seen twice.
    pub fn try_from_right_map<I>(source: I) -> Result<Self, TwoWayError>
    where
        I: IntoIterator<Item = (R, L)>,
    {
        let source = source.into_iter();
        let mut map = Self::with_capacity(source.size_hint().0);

        for (right, left) in source {
            map.push_strict(left, right, Side::Right)?;
        }

        Ok(map)
    }

    pub fn get_right<Q>(&self, left: &Q) -> Option<&R>
    where
        L: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.left_to_right.get(left)
    }

    pub fn get_left<Q>(&self, right: &Q) -> Option<&L>
    where
        R: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.right_to_left.get(right)
    }

    /// Right value paired with `left`, or [`TwoWayError::KeyNotFound`].
    pub fn right_of<Q>(&self, left: &Q) -> Result<&R, TwoWayError>
    where
        L: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.get_right(left).ok_or(TwoWayError::KeyNotFound(Side::Left))
    }

    /// Left value paired with `right`, or [`TwoWayError::KeyNotFound`].
    pub fn left_of<Q>(&self, right: &Q) -> Result<&L, TwoWayError>
    where
        R: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.get_left(right).ok_or(TwoWayError::KeyNotFound(Side::Right))
    }

    pub fn contains_left<Q>(&self, left: &Q) -> bool
    where
        L: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.left_to_right.contains_key(left)
    }

    pub fn contains_right<Q>(&self, right: &Q) -> bool
    where
        R: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.right_to_left.contains_key(right)
    }

    /// Add a new pair. Fails without touching the map if either value is already present,
    /// checking the left side first.
    pub fn insert(&mut self, left: L, right: R) -> Result<(), TwoWayError> {
        let side = if self.contains_left(&left) {
            Side::Left
        } else if self.contains_right(&right) {
            Side::Right
        } else {
            self.push_unchecked(left, right);
            trace!(len = self.len(), "inserted pair");
            return Ok(());
        };

        debug!(%side, "rejected insert of a duplicate key");
        Err(TwoWayError::DuplicateKey(side))
    }

    pub fn insert_reversed(&mut self, right: R, left: L) -> Result<(), TwoWayError> {
        self.insert(left, right)
    }

    /// Upsert: drop whatever pairs `left` and `right` belong to, then store `(left, right)`.
    ///
    /// A pair replacing the right value of an existing left value keeps that entry's position
    /// in the iteration order; otherwise the pair is appended.
    pub fn set_right(&mut self, left: L, right: R) -> Overwritten<L, R> {
        let by_left = self.take_left(&left);
        let by_right = self.take_right(&right);

        // Slot of the replaced left entry, shifted if the right-side removal happened before it
        let slot = by_left.as_ref().map(|(index, _, _)| match &by_right {
            Some((other, _, _)) if other < index => index - 1,
            _ => *index,
        });

        let overwritten = match (by_left, by_right) {
            (None, None) => Overwritten::Neither,
            (Some((_, l, r)), None) if r == right => Overwritten::Pair(l, r),
            (Some((_, l, r)), None) => Overwritten::Left(l, r),
            (None, Some((_, l, r))) => Overwritten::Right(l, r),
            (Some((_, l1, r1)), Some((_, l2, r2))) => Overwritten::Both((l1, r1), (l2, r2)),
        };

        match slot {
            Some(index) => {
                self.left_to_right.shift_insert(index, left.clone(), right.clone());
            }
            None => {
                self.left_to_right.insert(left.clone(), right.clone());
            }
        }
        self.right_to_left.insert(right, left);

        trace!(len = self.len(), "upserted pair");
        overwritten
    }

    pub fn set_left(&mut self, right: R, left: L) -> Overwritten<L, R> {
        self.set_right(left, right)
    }

    /// Remove the pair holding `left`, returning its right value.
    pub fn remove_left<Q>(&mut self, left: &Q) -> Option<R>
    where
        L: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let (_, _, right) = self.take_left(left)?;
        trace!(side = %Side::Left, len = self.len(), "removed pair");
        Some(right)
    }

    /// Remove the pair holding `right`, returning its left value.
    pub fn remove_right<Q>(&mut self, right: &Q) -> Option<L>
    where
        R: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let (_, left, _) = self.take_right(right)?;
        trace!(side = %Side::Right, len = self.len(), "removed pair");
        Some(left)
    }

    /// Remove `(left, right)` only if the two are paired with each other.
    pub fn remove_pair<QL, QR>(&mut self, left: &QL, right: &QR) -> bool
    where
        L: Borrow<QL>,
        R: Borrow<QR>,
        QL: ?Sized + Hash + Eq,
        QR: ?Sized + Hash + Eq,
    {
        if !self
            .get_right(left)
            .is_some_and(|paired| <R as Borrow<QR>>::borrow(paired) == right)
        {
            return false;
        }

        self.remove_left(left).is_some()
    }

    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&L, &R) -> bool,
    {
        let right_to_left = &mut self.right_to_left;
        self.left_to_right.retain(|left, right| {
            if keep(left, &*right) {
                return true;
            }
            right_to_left.remove(&*right);
            false
        });
    }

    pub fn reserve(&mut self, additional: usize) {
        self.left_to_right.reserve(additional);
        self.right_to_left.reserve(additional);
    }

    pub fn shrink_to_fit(&mut self) {
        self.left_to_right.shrink_to_fit();
        self.right_to_left.shrink_to_fit();
    }

    /// Swap the sides, keeping the iteration order.
    pub fn into_inverse(self) -> TwoWayMap<R, L> {
        let TwoWayMap {
            left_to_right,
            mut right_to_left,
        } = self;

        let inverse_forward = left_to_right
            .values()
            .filter_map(|right| right_to_left.remove_entry(right))
            .collect::<IndexMap<R, L, FxBuildHasher>>();

        TwoWayMap {
            left_to_right: inverse_forward,
            right_to_left: left_to_right.into_iter().collect(),
        }
    }

    // Helper methods

    fn push_unchecked(&mut self, left: L, right: R) {
        self.left_to_right.insert(left.clone(), right.clone());
        self.right_to_left.insert(right, left);
    }

    /// `keyed` is the side the source mapping was keyed by; a repeat on the other side is a
    /// [`TwoWayError::DuplicateValue`].
    pub(crate) fn push_strict(
        &mut self,
        left: L,
        right: R,
        keyed: Side,
    ) -> Result<(), TwoWayError> {
        let repeated = match keyed {
            Side::Left if self.contains_left(&left) => Some(TwoWayError::DuplicateKey(keyed)),
            Side::Right if self.contains_right(&right) => Some(TwoWayError::DuplicateKey(keyed)),
            _ if self.contains_left(&left) || self.contains_right(&right) => {
                Some(TwoWayError::DuplicateValue(keyed.opposite()))
            }
            _ => None,
        };

        if let Some(err) = repeated {
            debug!(%err, "rejected non-bijective source mapping");
            return Err(err);
        }

        self.push_unchecked(left, right);
        Ok(())
    }

    fn take_left<Q>(&mut self, left: &Q) -> Option<(usize, L, R)>
    where
        L: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let (index, left, right) = self.left_to_right.shift_remove_full(left)?;
        self.right_to_left.remove(&right);
        Some((index, left, right))
    }

    fn take_right<Q>(&mut self, right: &Q) -> Option<(usize, L, R)>
    where
        R: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let left = self.right_to_left.remove(right)?;
        self.left_to_right.shift_remove_full(&left)
    }
}

// Implementations

impl<L, R> Debug for TwoWayMap<L, R>
where
    L: Debug,
    R: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.left_to_right.iter()).finish()
    }
}

impl<L, R> PartialEq for TwoWayMap<L, R>
where
    L: Eq + Hash,
    R: Eq + Hash,
{
    fn eq(&self, other: &Self) -> bool {
        self.left_to_right == other.left_to_right
    }
}

impl<L, R> Eq for TwoWayMap<L, R>
where
    L: Eq + Hash,
    R: Eq + Hash,
{
}

impl<L, R> Extend<(L, R)> for TwoWayMap<L, R>
where
    L: Clone + Eq + Hash,
    R: Clone + Eq + Hash,
{
    fn extend<I: IntoIterator<Item = (L, R)>>(&mut self, pairs: I) {
        for (left, right) in pairs {
            self.set_right(left, right);
        }
    }
}

impl<L, R> FromIterator<(L, R)> for TwoWayMap<L, R>
where
    L: Clone + Eq + Hash,
    R: Clone + Eq + Hash,
{
    fn from_iter<I: IntoIterator<Item = (L, R)>>(pairs: I) -> Self {
        Self::from_pairs(pairs)
    }
}

impl<L, R, S> TryFrom<HashMap<L, R, S>> for TwoWayMap<L, R>
where
    L: Clone + Eq + Hash,
    R: Clone + Eq + Hash,
    S: BuildHasher,
{
    type Error = TwoWayError;

    fn try_from(source: HashMap<L, R, S>) -> Result<Self, Self::Error> {
        Self::try_from_left_map(source)
    }
}

impl<'a, L, R> IntoIterator for &'a TwoWayMap<L, R> {
    type Item = (&'a L, &'a R);
    type IntoIter = Iter<'a, L, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<L, R> IntoIterator for TwoWayMap<L, R> {
    type Item = (L, R);
    type IntoIter = IntoIter<L, R>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self.left_to_right.into_iter())
    }
}
