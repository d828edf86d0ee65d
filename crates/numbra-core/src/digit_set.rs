//! A set of candidate digits for a single cell.

use std::{
    fmt::{self, Debug},
    iter::FusedIterator,
    ops::{BitAnd, BitOr},
};

use crate::Digit;

/// A set of digits 1-9, backed by a 9-bit mask.
///
/// Bit `i` represents digit `i + 1`. The representation makes the common
/// solver queries (set size, single remaining candidate, membership) cheap
/// enough to recompute on demand instead of caching across grid mutations.
///
/// # Examples
///
/// ```
/// use numbra_core::{Digit, DigitSet};
///
/// let mut set = DigitSet::EMPTY;
/// set.insert(Digit::D2);
/// set.insert(Digit::D7);
///
/// assert_eq!(set.len(), 2);
/// assert!(set.contains(Digit::D7));
/// assert_eq!(set.as_single(), None);
///
/// set.remove(Digit::D2);
/// assert_eq!(set.as_single(), Some(Digit::D7));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigitSet {
    bits: u16,
}

const MASK: u16 = 0x1ff;

impl DigitSet {
    /// The empty set.
    pub const EMPTY: Self = Self { bits: 0 };
    /// The set containing all nine digits.
    pub const FULL: Self = Self { bits: MASK };

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Creates a set containing a single digit.
    #[must_use]
    pub const fn from_elem(digit: Digit) -> Self {
        Self {
            bits: 1 << (digit.value() - 1),
        }
    }

    /// Inserts a digit. Returns `true` if the digit was not already present.
    pub const fn insert(&mut self, digit: Digit) -> bool {
        let bit = Self::from_elem(digit).bits;
        let inserted = self.bits & bit == 0;
        self.bits |= bit;
        inserted
    }

    /// Removes a digit. Returns `true` if the digit was present.
    pub const fn remove(&mut self, digit: Digit) -> bool {
        let bit = Self::from_elem(digit).bits;
        let removed = self.bits & bit != 0;
        self.bits &= !bit;
        removed
    }

    /// Returns `true` if the digit is in the set.
    #[must_use]
    pub const fn contains(self, digit: Digit) -> bool {
        self.bits & Self::from_elem(digit).bits != 0
    }

    /// Returns the number of digits in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` if the set contains no digits.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Returns the digit if the set contains exactly one, or `None` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use numbra_core::{Digit, DigitSet};
    ///
    /// assert_eq!(DigitSet::from_elem(Digit::D4).as_single(), Some(Digit::D4));
    /// assert_eq!(DigitSet::FULL.as_single(), None);
    /// assert_eq!(DigitSet::EMPTY.as_single(), None);
    /// ```
    #[must_use]
    pub fn as_single(self) -> Option<Digit> {
        if self.bits.count_ones() != 1 {
            return None;
        }
        let value = u8::try_from(self.bits.trailing_zeros()).ok()?;
        Digit::try_from_value(value + 1)
    }

    /// Returns an iterator over the digits in ascending order.
    #[must_use]
    pub const fn iter(self) -> Iter {
        Iter { bits: self.bits }
    }
}

impl Default for DigitSet {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Debug for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl BitOr for DigitSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self {
            bits: self.bits | rhs.bits,
        }
    }
}

impl BitAnd for DigitSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self {
            bits: self.bits & rhs.bits,
        }
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Digit>,
    {
        let mut set = Self::EMPTY;
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl IntoIterator for DigitSet {
    type Item = Digit;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

/// Iterator over the digits of a [`DigitSet`], in ascending order.
#[derive(Debug, Clone)]
pub struct Iter {
    bits: u16,
}

impl Iterator for Iter {
    type Item = Digit;

    fn next(&mut self) -> Option<Digit> {
        if self.bits == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let value = self.bits.trailing_zeros() as u8 + 1;
        self.bits &= self.bits - 1;
        Digit::try_from_value(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Iter {}
impl FusedIterator for Iter {}
