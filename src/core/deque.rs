use std::{
    cmp::Ordering,
    collections::{vec_deque, VecDeque},
    fmt::{self, Debug},
    hash::{Hash, Hasher},
    ops::{Add, AddAssign, Bound, Index, IndexMut, Mul, MulAssign, RangeBounds},
};

use serde::{Deserialize, Serialize};

use crate::{
    core::{DequeConfig, DequeError},
    traits::DoubleEnded,
};

/// A double-ended queue with an optional maximum length.
///
/// When the deque is bounded and full, inserting at one end silently evicts one element from the
/// other end. Equality, ordering, and hashing only look at the stored elements, so two deques with
/// different maximum lengths compare equal if they hold the same elements in the same order.
///
/// ```rust
/// use boundeque::prelude::*;
///
/// let mut d = BoundedDeque::from_iter_bounded([1, 2, 3], Some(5));
/// d.extend([4, 5, 6]);
/// assert_eq!(d, BoundedDeque::from([2, 3, 4, 5, 6]));
/// assert_eq!(format!("{:?}", d), "deque([2, 3, 4, 5, 6], maxlen=5)");
/// ```
#[derive(Clone, Serialize, Deserialize)]
#[serde(from = "DequeState<T>")]
pub struct BoundedDeque<T> {
    items: VecDeque<T>,
    maxlen: Option<usize>,
}

/// Wire form of a [`BoundedDeque`]. Loading goes through here so the length bound is re-applied
/// to untrusted input.
#[derive(Deserialize)]
struct DequeState<T> {
    items: Vec<T>,
    maxlen: Option<usize>,
}

impl<T> From<DequeState<T>> for BoundedDeque<T> {
    fn from(state: DequeState<T>) -> Self {
        Self::from_iter_bounded(state.items, state.maxlen)
    }
}

impl<T> Default for BoundedDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BoundedDeque<T> {
    /// Create an empty, unbounded deque.
    pub const fn new() -> Self {
        Self {
            items: VecDeque::new(),
            maxlen: None,
        }
    }

    /// Create an empty deque which holds at most `maxlen` elements.
    pub const fn with_maxlen(maxlen: usize) -> Self {
        Self {
            items: VecDeque::new(),
            maxlen: Some(maxlen),
        }
    }

    /// Create an empty deque from a [`DequeConfig`].
    pub fn from_config(config: &DequeConfig) -> Self {
        Self {
            items: VecDeque::with_capacity(config.initial_capacity()),
            maxlen: config.maxlen,
        }
    }

    /// Create a deque from `values` and an optional maximum length.
    ///
    /// If there are more than `maxlen` values, only the trailing `maxlen` of them are kept, in
    /// their original order.
    pub fn from_iter_bounded<I: IntoIterator<Item = T>>(values: I, maxlen: Option<usize>) -> Self {
        let mut deque = Self {
            items: VecDeque::new(),
            maxlen,
        };
        deque.extend(values);
        deque
    }

    /// The maximum length, or [`None`] if the deque is unbounded.
    pub const fn maxlen(&self) -> Option<usize> {
        self.maxlen
    }

    /// The number of elements in the deque.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the deque holds no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns `true` if the deque is bounded and any further insertion would evict an element.
    pub fn is_full(&self) -> bool {
        self.maxlen.map_or(false, |maxlen| self.items.len() >= maxlen)
    }

    fn over_capacity(&self) -> bool {
        self.maxlen.map_or(false, |maxlen| self.items.len() > maxlen)
    }

    /// Insert `value` at the back of the deque.
    ///
    /// If the deque was full, the front element is evicted and returned. A deque with a maximum
    /// length of zero hands `value` straight back.
    pub fn append(&mut self, value: T) -> Option<T> {
        self.items.push_back(value);
        if self.over_capacity() {
            self.items.pop_front()
        } else {
            None
        }
    }

    /// Insert `value` at the front of the deque.
    ///
    /// If the deque was full, the back element is evicted and returned.
    pub fn appendleft(&mut self, value: T) -> Option<T> {
        self.items.push_front(value);
        if self.over_capacity() {
            self.items.pop_back()
        } else {
            None
        }
    }

    /// [`appendleft`](Self::appendleft) every element of `values` in order, which leaves them
    /// reversed at the front of the deque.
    pub fn extendleft<I: IntoIterator<Item = T>>(&mut self, values: I) {
        <Self as DoubleEnded<T>>::extendleft(self, values);
    }

    /// Remove and return the back element.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop_back()
    }

    /// Remove and return the front element.
    pub fn popleft(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Remove every element. The maximum length is unchanged.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Insert `value` so that it ends up at position `index`. Indices past the end insert at the
    /// back.
    ///
    /// # Errors
    ///
    /// Returns [`DequeError::Full`] if the deque is bounded and already holds `maxlen` elements.
    /// Unlike [`append`](Self::append), an insertion in the middle has no opposite end to evict
    /// from.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), DequeError> {
        self.insert_or_return(index, value).map_err(|(err, _)| err)
    }

    /// Like [`insert`](Self::insert), but a rejected `value` is handed back to the caller.
    pub(crate) fn insert_or_return(
        &mut self,
        index: usize,
        value: T,
    ) -> Result<(), (DequeError, T)> {
        if let Some(maxlen) = self.maxlen {
            if self.items.len() >= maxlen {
                return Err((DequeError::Full { maxlen }, value));
            }
        }
        let index = index.min(self.items.len());
        self.items.insert(index, value);
        Ok(())
    }

    /// Move every element out, leaving the deque empty with the same maximum length.
    pub(crate) fn take_items(&mut self) -> VecDeque<T> {
        std::mem::take(&mut self.items)
    }

    /// Remove and return the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`DequeError::IndexOutOfRange`] if `index >= len`.
    pub fn remove_at(&mut self, index: usize) -> Result<T, DequeError> {
        let len = self.items.len();
        self.items
            .remove(index)
            .ok_or(DequeError::IndexOutOfRange { index, len })
    }

    /// Rotate the deque `n` steps to the right, so the back element moves to the front. Negative
    /// values rotate to the left.
    pub fn rotate(&mut self, n: isize) {
        let len = self.items.len();
        if len <= 1 {
            return;
        }
        let shift = n.unsigned_abs() % len;
        if n >= 0 {
            self.items.rotate_right(shift);
        } else {
            self.items.rotate_left(shift);
        }
    }

    /// Reverse the order of the elements in place.
    pub fn reverse(&mut self) {
        self.items.make_contiguous().reverse();
    }

    /// A reference to the front element.
    pub fn front(&self) -> Option<&T> {
        self.items.front()
    }

    /// A reference to the back element.
    pub fn back(&self) -> Option<&T> {
        self.items.back()
    }

    /// A reference to the element at `index`, counted from the front.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// A mutable reference to the element at `index`, counted from the front.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    /// Iterate over the elements from front to back.
    pub fn iter(&self) -> vec_deque::Iter<'_, T> {
        self.items.iter()
    }

    /// Iterate mutably over the elements from front to back.
    pub fn iter_mut(&mut self) -> vec_deque::IterMut<'_, T> {
        self.items.iter_mut()
    }
}

impl<T: PartialEq> BoundedDeque<T> {
    /// Remove the first element equal to `value`, scanning from the front.
    ///
    /// # Errors
    ///
    /// Returns [`DequeError::NotFound`] if no element equals `value`.
    pub fn remove(&mut self, value: &T) -> Result<T, DequeError> {
        let index = self.index(value)?;
        self.remove_at(index)
    }

    /// The number of elements equal to `value`.
    pub fn count(&self, value: &T) -> usize {
        self.items.iter().filter(|item| *item == value).count()
    }

    /// Returns `true` if any element equals `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.items.contains(value)
    }

    /// The position of the first element equal to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`DequeError::NotFound`] if no element equals `value`.
    pub fn index(&self, value: &T) -> Result<usize, DequeError> {
        self.index_in(value, ..)
    }

    /// The position of the first element equal to `value` within `range`. The range is clamped to
    /// the length of the deque, and the returned position is counted from the front of the deque.
    ///
    /// # Errors
    ///
    /// Returns [`DequeError::NotFound`] if no element in `range` equals `value`.
    pub fn index_in<R: RangeBounds<usize>>(&self, value: &T, range: R) -> Result<usize, DequeError> {
        let (start, end) = clamp_range(&range, self.items.len());
        if start >= end {
            return Err(DequeError::NotFound);
        }
        self.items
            .range(start..end)
            .position(|item| item == value)
            .map(|offset| start + offset)
            .ok_or(DequeError::NotFound)
    }
}

impl<T: Clone> BoundedDeque<T> {
    /// A new deque with clones of the same elements and the same maximum length.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Clone the elements into a [`Vec`], front to back.
    pub fn to_vec(&self) -> Vec<T> {
        self.items.iter().cloned().collect()
    }

    /// A new deque holding the elements repeated `n` times.
    ///
    /// A bounded result keeps the same maximum length and only the trailing `maxlen` elements of
    /// the full repetition, exactly as if every copy had been appended one element at a time.
    /// Repetitions which would be evicted are never built.
    ///
    /// # Panics
    ///
    /// Panics if the deque is unbounded and the repeated length overflows `usize`.
    pub fn repeat(&self, n: usize) -> Self {
        let mut out = Self {
            items: VecDeque::new(),
            maxlen: self.maxlen,
        };
        let len = self.items.len();
        if len == 0 || n == 0 {
            return out;
        }
        let kept = match (self.maxlen, len.checked_mul(n)) {
            (Some(maxlen), Some(total)) => total.min(maxlen),
            (Some(maxlen), None) => maxlen,
            (None, Some(total)) => total,
            (None, None) => panic!("capacity overflow"),
        };
        // the full repetition is a multiple of `len`, so the first survivor sits at -kept mod len
        let skip = (len - kept % len) % len;
        out.items.reserve(kept);
        out.items
            .extend(self.items.iter().cycle().skip(skip).take(kept).cloned());
        out
    }
}

fn clamp_range<R: RangeBounds<usize>>(range: &R, len: usize) -> (usize, usize) {
    let start = match range.start_bound() {
        Bound::Included(&s) => s,
        Bound::Excluded(&s) => s.saturating_add(1),
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&e) => e.saturating_add(1),
        Bound::Excluded(&e) => e,
        Bound::Unbounded => len,
    };
    (start.min(len), end.min(len))
}

/// Write `deque([a, b, ...])` or `deque([a, b, ...], maxlen=m)` into `w`, formatting each element
/// with its [`Debug`] implementation.
pub(crate) fn write_repr<'a, W, T, I>(w: &mut W, items: I, maxlen: Option<usize>) -> fmt::Result
where
    W: fmt::Write,
    T: Debug + 'a,
    I: IntoIterator<Item = &'a T>,
{
    w.write_str("deque([")?;
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            w.write_str(", ")?;
        }
        write!(w, "{:?}", item)?;
    }
    w.write_str("]")?;
    if let Some(maxlen) = maxlen {
        write!(w, ", maxlen={}", maxlen)?;
    }
    w.write_str(")")
}

impl<T: Debug> Debug for BoundedDeque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_repr(f, &self.items, self.maxlen)
    }
}

impl<T: PartialEq> PartialEq for BoundedDeque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq> Eq for BoundedDeque<T> {}

impl<T: PartialOrd> PartialOrd for BoundedDeque<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.items.iter().partial_cmp(other.items.iter())
    }
}

impl<T: Ord> Ord for BoundedDeque<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.items.iter().cmp(other.items.iter())
    }
}

impl<T: Hash> Hash for BoundedDeque<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.items.hash(state);
    }
}

impl<T> Index<usize> for BoundedDeque<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T> IndexMut<usize> for BoundedDeque<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.items[index]
    }
}

impl<T> Extend<T> for BoundedDeque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, values: I) {
        self.extend_back(values);
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for BoundedDeque<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, values: I) {
        self.extend_back(values.into_iter().copied());
    }
}

impl<T> FromIterator<T> for BoundedDeque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(values: I) -> Self {
        Self {
            items: values.into_iter().collect(),
            maxlen: None,
        }
    }
}

impl<T> From<Vec<T>> for BoundedDeque<T> {
    fn from(values: Vec<T>) -> Self {
        Self {
            items: values.into(),
            maxlen: None,
        }
    }
}

impl<T, const N: usize> From<[T; N]> for BoundedDeque<T> {
    fn from(values: [T; N]) -> Self {
        Self {
            items: values.into(),
            maxlen: None,
        }
    }
}

impl<T> From<VecDeque<T>> for BoundedDeque<T> {
    fn from(items: VecDeque<T>) -> Self {
        Self { items, maxlen: None }
    }
}

impl<T> From<BoundedDeque<T>> for VecDeque<T> {
    fn from(deque: BoundedDeque<T>) -> Self {
        deque.items
    }
}

impl<T> IntoIterator for BoundedDeque<T> {
    type Item = T;
    type IntoIter = vec_deque::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a BoundedDeque<T> {
    type Item = &'a T;
    type IntoIter = vec_deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut BoundedDeque<T> {
    type Item = &'a mut T;
    type IntoIter = vec_deque::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter_mut()
    }
}

impl<T: Clone> Mul<usize> for &BoundedDeque<T> {
    type Output = BoundedDeque<T>;

    fn mul(self, n: usize) -> BoundedDeque<T> {
        self.repeat(n)
    }
}

impl<T: Clone> Mul<usize> for BoundedDeque<T> {
    type Output = Self;

    fn mul(self, n: usize) -> Self {
        self.repeat(n)
    }
}

impl<T: Clone> MulAssign<usize> for BoundedDeque<T> {
    fn mul_assign(&mut self, n: usize) {
        *self = self.repeat(n);
    }
}

/// Concatenation keeps the maximum length of the left-hand side.
impl<T: Clone> Add<&BoundedDeque<T>> for &BoundedDeque<T> {
    type Output = BoundedDeque<T>;

    fn add(self, rhs: &BoundedDeque<T>) -> BoundedDeque<T> {
        let mut out = self.copy();
        out.extend(rhs.items.iter().cloned());
        out
    }
}

impl<T: Clone> AddAssign<&BoundedDeque<T>> for BoundedDeque<T> {
    fn add_assign(&mut self, rhs: &Self) {
        self.extend(rhs.items.iter().cloned());
    }
}

impl<T> DoubleEnded<T> for BoundedDeque<T> {
    fn len(&self) -> usize {
        self.items.len()
    }

    fn maxlen(&self) -> Option<usize> {
        self.maxlen
    }

    fn append(&mut self, value: T) -> Option<T> {
        Self::append(self, value)
    }

    fn appendleft(&mut self, value: T) -> Option<T> {
        Self::appendleft(self, value)
    }

    fn pop(&mut self) -> Option<T> {
        self.items.pop_back()
    }

    fn popleft(&mut self) -> Option<T> {
        self.items.pop_front()
    }
}
