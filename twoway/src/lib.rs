//! A bidirectional map: pairs `(left, right)` where each side uniquely determines the other,
//! with average O(1) lookup from either direction.
//!
//! ```
//! use twoway::prelude::*;
//!
//! let mut map = TwoWayMap::new();
//! map.insert("x".to_string(), 1)?;
//!
//! assert_eq!(map.right_of("x")?, &1);
//! assert_eq!(map.left_of(&1)?, "x");
//! assert_eq!(map.insert("x".to_string(), 2), Err(TwoWayError::DuplicateKey(Side::Left)));
//! # Ok::<(), TwoWayError>(())
//! ```

pub mod base;
pub mod errors;
pub mod iter;
pub mod two_way_map;

#[cfg(feature = "serde")]
mod serde_impls;

// Re-exports

pub use base::Side;
pub use errors::TwoWayError;
pub use two_way_map::{Overwritten, TwoWayMap};

pub mod prelude {
    pub use crate::base::Side;
    pub use crate::errors::TwoWayError;
    pub use crate::two_way_map::{Overwritten, TwoWayMap};
}

/// Build a [`TwoWayMap`] from `left => right` pairs, last write winning on collisions.
///
/// ```
/// let map = twoway::two_way_map! { "a" => 1, "b" => 2 };
/// assert_eq!(map.left_of(&2), Ok(&"b"));
/// ```
#[macro_export]
macro_rules! two_way_map {
    () => {
        $crate::TwoWayMap::new()
    };
    ($($left:expr => $right:expr),+ $(,)?) => {
        $crate::TwoWayMap::from_pairs([$(($left, $right)),+])
    };
}
