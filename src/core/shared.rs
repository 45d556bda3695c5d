use std::{
    cell::RefCell,
    fmt::{self, Debug},
    iter::FusedIterator,
    sync::{Arc, Weak},
};

use parking_lot::ReentrantMutex;

use crate::{
    core::{deque::write_repr, maybe_warn, BoundedDeque, DequeConfig, DequeError},
    traits::DoubleEnded,
};

struct SharedState<T> {
    deque: BoundedDeque<T>,
    mutations: u64,
    in_repr: bool,
}

type Shared<T> = ReentrantMutex<RefCell<SharedState<T>>>;

/// A reference-counted handle to a single [`BoundedDeque`].
///
/// Cloning the handle does not clone the deque; every clone sees the same elements. This makes it
/// possible for an element to hold (ideally through a [`WeakDeque`]) a reference to the deque it
/// is stored in, and to modify that deque while it is being formatted, searched, or iterated.
///
/// The deque sits behind a reentrant lock, so the thread holding it may re-enter the deque from
/// inside an element's [`Debug`] or [`PartialEq`] implementation. Operations which call back into
/// element code ([`repr`](Self::repr), [`remove`](Self::remove), [`count`](Self::count), ...)
/// never hold a borrow of the deque while that code runs.
///
/// # Panics
///
/// The closure-based accessors [`with`](Self::with) and [`with_mut`](Self::with_mut) do hold a
/// borrow while the closure runs. Touching the same deque from inside such a closure panics.
pub struct SharedDeque<T> {
    inner: Arc<Shared<T>>,
}

/// A non-owning handle to a [`SharedDeque`], used to break reference cycles between a deque and
/// its elements.
pub struct WeakDeque<T> {
    inner: Weak<Shared<T>>,
}

impl<T> Clone for SharedDeque<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Clone for WeakDeque<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Weak::clone(&self.inner),
        }
    }
}

impl<T> WeakDeque<T> {
    /// Get a strong handle back, or [`None`] if every [`SharedDeque`] has been dropped.
    pub fn upgrade(&self) -> Option<SharedDeque<T>> {
        self.inner.upgrade().map(|inner| SharedDeque { inner })
    }
}

impl<T> Default for SharedDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<BoundedDeque<T>> for SharedDeque<T> {
    fn from(deque: BoundedDeque<T>) -> Self {
        Self::from_deque(deque)
    }
}

impl<T> SharedDeque<T> {
    /// Create a handle to an empty, unbounded deque.
    pub fn new() -> Self {
        Self::from_deque(BoundedDeque::new())
    }

    /// Create a handle to an empty deque which holds at most `maxlen` elements.
    pub fn with_maxlen(maxlen: usize) -> Self {
        Self::from_deque(BoundedDeque::with_maxlen(maxlen))
    }

    /// Create a handle to an empty deque built from a [`DequeConfig`].
    pub fn from_config(config: &DequeConfig) -> Self {
        Self::from_deque(BoundedDeque::from_config(config))
    }

    /// Wrap an existing deque.
    pub fn from_deque(deque: BoundedDeque<T>) -> Self {
        Self {
            inner: Arc::new(ReentrantMutex::new(RefCell::new(SharedState {
                deque,
                mutations: 0,
                in_repr: false,
            }))),
        }
    }

    /// Create a [`WeakDeque`] pointing at the same deque.
    pub fn downgrade(&self) -> WeakDeque<T> {
        WeakDeque {
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Returns `true` if both handles point at the same deque.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Run `f` with shared access to the deque.
    ///
    /// # Panics
    ///
    /// Panics if `f` modifies this deque through another handle.
    pub fn with<R>(&self, f: impl FnOnce(&BoundedDeque<T>) -> R) -> R {
        let guard = self.inner.lock();
        let state = guard.borrow();
        f(&state.deque)
    }

    /// Run `f` with exclusive access to the deque. Any running [`SharedIter`] or search is
    /// invalidated, whether or not `f` changes anything.
    ///
    /// # Panics
    ///
    /// Panics if `f` touches this deque through another handle. This includes the [`Drop`] of an
    /// element removed inside `f`; return removed elements from `f` instead, so they are dropped
    /// after the deque is released.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut BoundedDeque<T>) -> R) -> R {
        self.update(|d| (f(d), true))
    }

    /// Run `f` with exclusive access to the deque. `f` reports whether it changed the deque, and
    /// only a change invalidates running iterators and searches. Whatever `f` returns is dropped
    /// by the caller once the deque is released.
    fn update<R>(&self, f: impl FnOnce(&mut BoundedDeque<T>) -> (R, bool)) -> R {
        let guard = self.inner.lock();
        let mut state = guard.borrow_mut();
        let (result, changed) = f(&mut state.deque);
        if changed {
            state.mutations = state.mutations.wrapping_add(1);
        }
        result
    }

    /// The number of elements in the deque.
    pub fn len(&self) -> usize {
        self.with(BoundedDeque::len)
    }

    /// Returns `true` if the deque holds no elements.
    pub fn is_empty(&self) -> bool {
        self.with(BoundedDeque::is_empty)
    }

    /// The maximum length, or [`None`] if the deque is unbounded.
    pub fn maxlen(&self) -> Option<usize> {
        self.with(BoundedDeque::maxlen)
    }

    /// See [`BoundedDeque::append`].
    pub fn append(&self, value: T) -> Option<T> {
        self.update(|d| {
            let changed = d.maxlen() != Some(0);
            (d.append(value), changed)
        })
    }

    /// See [`BoundedDeque::appendleft`].
    pub fn appendleft(&self, value: T) -> Option<T> {
        self.update(|d| {
            let changed = d.maxlen() != Some(0);
            (d.appendleft(value), changed)
        })
    }

    /// See [`BoundedDeque::pop`].
    pub fn pop(&self) -> Option<T> {
        self.update(|d| {
            let popped = d.pop();
            let changed = popped.is_some();
            (popped, changed)
        })
    }

    /// See [`BoundedDeque::popleft`].
    pub fn popleft(&self) -> Option<T> {
        self.update(|d| {
            let popped = d.popleft();
            let changed = popped.is_some();
            (popped, changed)
        })
    }

    /// Append every element of `values`. The values are collected before the deque is touched,
    /// so `values` may itself read from this deque. Evicted elements are dropped after the deque
    /// is released.
    pub fn extend<I: IntoIterator<Item = T>>(&self, values: I) {
        let values: Vec<T> = values.into_iter().collect();
        let evicted: Vec<T> = self.update(|d| {
            let changed = !values.is_empty() && d.maxlen() != Some(0);
            (values.into_iter().filter_map(|v| d.append(v)).collect(), changed)
        });
        drop(evicted);
    }

    /// Prepend every element of `values`, see [`BoundedDeque::extendleft`].
    pub fn extendleft<I: IntoIterator<Item = T>>(&self, values: I) {
        let values: Vec<T> = values.into_iter().collect();
        let evicted: Vec<T> = self.update(|d| {
            let changed = !values.is_empty() && d.maxlen() != Some(0);
            (values.into_iter().filter_map(|v| d.appendleft(v)).collect(), changed)
        });
        drop(evicted);
    }

    /// See [`BoundedDeque::clear`]. The removed elements are dropped after the deque is released.
    pub fn clear(&self) {
        let removed = self.update(|d| {
            let removed = d.take_items();
            let changed = !removed.is_empty();
            (removed, changed)
        });
        drop(removed);
    }

    /// See [`BoundedDeque::insert`]. A rejected `value` is dropped after the deque is released.
    ///
    /// # Errors
    ///
    /// Returns [`DequeError::Full`] if the deque is bounded and already holds `maxlen` elements.
    pub fn insert(&self, index: usize, value: T) -> Result<(), DequeError> {
        self.update(|d| {
            let result = d.insert_or_return(index, value);
            let changed = result.is_ok();
            (result, changed)
        })
        .map_err(|(err, _rejected)| err)
    }

    /// See [`BoundedDeque::rotate`].
    pub fn rotate(&self, n: isize) {
        self.update(|d| {
            let len = d.len();
            let changed = len > 1 && n.unsigned_abs() % len != 0;
            d.rotate(n);
            ((), changed)
        });
    }

    /// See [`BoundedDeque::reverse`].
    pub fn reverse(&self) {
        self.update(|d| {
            let changed = d.len() > 1;
            d.reverse();
            ((), changed)
        });
    }
}

impl<T: Clone> SharedDeque<T> {
    /// A handle to a new, independent deque holding clones of the same elements and the same
    /// maximum length. The result is never [`ptr_eq`](Self::ptr_eq) to `self`.
    pub fn copy(&self) -> Self {
        Self::from_deque(self.with(BoundedDeque::copy))
    }

    /// Clone the elements into a [`Vec`], front to back.
    pub fn to_vec(&self) -> Vec<T> {
        self.with(BoundedDeque::to_vec)
    }

    /// A clone of the element at `index`.
    pub fn get(&self, index: usize) -> Option<T> {
        self.with(|d| d.get(index).cloned())
    }

    /// Iterate over clones of the elements. See [`SharedIter`].
    pub fn iter(&self) -> SharedIter<T> {
        let mutations = self.inner.lock().borrow().mutations;
        SharedIter {
            deque: self.clone(),
            index: 0,
            mutations,
            done: false,
        }
    }

    /// Visit clones of the elements from the front until `stop` returns `true`, returning the
    /// index it stopped at. `stop` runs with the deque unborrowed.
    fn scan<F: FnMut(&T) -> bool>(
        state: &RefCell<SharedState<T>>,
        mut stop: F,
    ) -> Result<Option<usize>, DequeError> {
        let mutations = state.borrow().mutations;
        let mut index = 0;
        loop {
            let item = state.borrow().deque.get(index).cloned();
            let Some(item) = item else {
                return Ok(None);
            };
            let hit = stop(&item);
            if state.borrow().mutations != mutations {
                return Err(DequeError::MutatedDuringIteration);
            }
            if hit {
                return Ok(Some(index));
            }
            index += 1;
        }
    }
}

impl<T: Clone + PartialEq> SharedDeque<T> {
    /// Remove the first element equal to `value`, scanning from the front.
    ///
    /// # Errors
    ///
    /// Returns [`DequeError::NotFound`] if no element equals `value`, or
    /// [`DequeError::MutatedDuringIteration`] if a comparison modified the deque.
    pub fn remove(&self, value: &T) -> Result<T, DequeError> {
        let guard = self.inner.lock();
        let index = Self::scan(&guard, |item| item == value)?.ok_or(DequeError::NotFound)?;
        let mut state = guard.borrow_mut();
        state.mutations = state.mutations.wrapping_add(1);
        state.deque.remove_at(index)
    }

    /// The position of the first element equal to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`DequeError::NotFound`] if no element equals `value`, or
    /// [`DequeError::MutatedDuringIteration`] if a comparison modified the deque.
    pub fn index(&self, value: &T) -> Result<usize, DequeError> {
        let guard = self.inner.lock();
        Self::scan(&guard, |item| item == value)?.ok_or(DequeError::NotFound)
    }

    /// Returns `true` if any element equals `value`.
    ///
    /// # Errors
    ///
    /// Returns [`DequeError::MutatedDuringIteration`] if a comparison modified the deque.
    pub fn contains(&self, value: &T) -> Result<bool, DequeError> {
        let guard = self.inner.lock();
        Ok(Self::scan(&guard, |item| item == value)?.is_some())
    }

    /// The number of elements equal to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`DequeError::MutatedDuringIteration`] if a comparison modified the deque.
    pub fn count(&self, value: &T) -> Result<usize, DequeError> {
        let guard = self.inner.lock();
        let mut count = 0;
        Self::scan(&guard, |item| {
            if item == value {
                count += 1;
            }
            false
        })?;
        Ok(count)
    }
}

impl<T: Clone + Debug> SharedDeque<T> {
    /// Render the deque as `deque([...])`, formatting each element with [`Debug`].
    ///
    /// The elements are cloned out before any of them is formatted, so an element may modify
    /// this deque from inside its own [`Debug`] implementation; the output then shows the
    /// contents from before formatting began. A deque which (indirectly) contains itself is
    /// rendered as `[...]` at the point of recursion.
    pub fn repr(&self) -> String {
        format!("{:?}", self)
    }
}

struct ReprReset<'a, T>(&'a RefCell<SharedState<T>>);

impl<T> Drop for ReprReset<'_, T> {
    fn drop(&mut self) {
        if let Ok(mut state) = self.0.try_borrow_mut() {
            state.in_repr = false;
        }
    }
}

impl<T: Clone + Debug> Debug for SharedDeque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.inner.lock();
        let (items, maxlen, mutations) = {
            let mut state = guard.borrow_mut();
            if state.in_repr {
                return f.write_str("[...]");
            }
            state.in_repr = true;
            (state.deque.to_vec(), state.deque.maxlen(), state.mutations)
        };
        let reset = ReprReset(&guard);
        let result = write_repr(f, &items, maxlen);
        drop(reset);
        if guard.borrow().mutations != mutations {
            maybe_warn("deque mutated during repr, output reflects its contents before formatting");
        }
        result
    }
}

impl<T: Clone + PartialEq> PartialEq for SharedDeque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.to_vec() == other.to_vec()
    }
}

impl<T> DoubleEnded<T> for SharedDeque<T> {
    fn len(&self) -> usize {
        Self::len(self)
    }

    fn maxlen(&self) -> Option<usize> {
        Self::maxlen(self)
    }

    fn append(&mut self, value: T) -> Option<T> {
        Self::append(self, value)
    }

    fn appendleft(&mut self, value: T) -> Option<T> {
        Self::appendleft(self, value)
    }

    fn pop(&mut self) -> Option<T> {
        Self::pop(self)
    }

    fn popleft(&mut self) -> Option<T> {
        Self::popleft(self)
    }
}

/// An iterator over clones of the elements of a [`SharedDeque`].
///
/// If the deque is modified while the iterator is live, the next call yields
/// `Err(DequeError::MutatedDuringIteration)` once and the iterator then stops.
pub struct SharedIter<T> {
    deque: SharedDeque<T>,
    index: usize,
    mutations: u64,
    done: bool,
}

impl<T: Clone> Iterator for SharedIter<T> {
    type Item = Result<T, DequeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let guard = self.deque.inner.lock();
        let state = guard.borrow();
        if state.mutations != self.mutations {
            self.done = true;
            return Some(Err(DequeError::MutatedDuringIteration));
        }
        if let Some(item) = state.deque.get(self.index) {
            self.index += 1;
            Some(Ok(item.clone()))
        } else {
            self.done = true;
            None
        }
    }
}

impl<T: Clone> FusedIterator for SharedIter<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    enum Item {
        Num(i64),
        Evil(Arc<BadRepr>),
        Parent(WeakDeque<Item>),
    }

    /// Pops from the deque it lives in while being formatted.
    struct BadRepr {
        deque: RefCell<Option<WeakDeque<Item>>>,
    }

    impl Debug for BadRepr {
        fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let deque = self.deque.borrow().as_ref().and_then(WeakDeque::upgrade);
            if let Some(deque) = deque {
                deque.pop();
            }
            Ok(())
        }
    }

    impl Debug for Item {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Self::Num(n) => write!(f, "{}", n),
                Self::Evil(bad) => bad.fmt(f),
                Self::Parent(weak) => match weak.upgrade() {
                    Some(deque) => deque.fmt(f),
                    None => f.write_str("<dropped>"),
                },
            }
        }
    }

    #[test]
    fn test_evil_repr_does_not_hang() {
        let bad = Arc::new(BadRepr {
            deque: RefCell::new(None),
        });
        let d = SharedDeque::from_deque(BoundedDeque::from([
            Item::Num(1),
            Item::Evil(Arc::clone(&bad)),
            Item::Num(2),
        ]));
        *bad.deque.borrow_mut() = Some(d.downgrade());
        assert_eq!(d.repr(), "deque([1, , 2])");
        assert_eq!(d.len(), 2);
        assert_eq!(d.repr(), "deque([1, ])");
        assert_eq!(d.len(), 1);
        assert_eq!(d.repr(), "deque([1])");
    }

    #[test]
    fn test_recursive_repr() {
        let d = SharedDeque::with_maxlen(3);
        d.append(Item::Num(1));
        d.append(Item::Parent(d.downgrade()));
        assert_eq!(d.repr(), "deque([1, [...]], maxlen=3)");
        assert_eq!(format!("{:?}", d), "deque([1, [...]], maxlen=3)");
    }

    #[test]
    fn test_handles_alias_one_deque() {
        let a = SharedDeque::new();
        let b = a.clone();
        a.extend([0, 1, 2]);
        b.append(1);
        a.appendleft(3);
        assert!(a.ptr_eq(&b));
        assert_eq!(b.to_vec(), vec![3, 0, 1, 2, 1]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_copy_is_not_identity() {
        let d = SharedDeque::from_deque(BoundedDeque::from_iter_bounded([1, 2, 3], Some(4)));
        let c = d.copy();
        assert!(!c.ptr_eq(&d));
        assert_eq!(c, d);
        assert_eq!(c.maxlen(), Some(4));
        c.clear();
        assert_eq!(d.len(), 3);
        assert!(c.is_empty());
    }

    #[test]
    fn test_bounded_operations() {
        let d = SharedDeque::from_deque(BoundedDeque::from_iter_bounded([1, 2, 3], Some(5)));
        d.extend([4, 5, 6]);
        assert_eq!(d.to_vec(), vec![2, 3, 4, 5, 6]);
        assert_eq!(d.remove(&4), Ok(4));
        assert_eq!(d.to_vec(), vec![2, 3, 5, 6]);
        assert_eq!(d.remove(&4), Err(DequeError::NotFound));
        d.insert(0, 1).unwrap();
        assert_eq!(d.insert(0, 0), Err(DequeError::Full { maxlen: 5 }));
        d.rotate(1);
        assert_eq!(d.to_vec(), vec![6, 1, 2, 3, 5]);
        d.reverse();
        assert_eq!(d.popleft(), Some(5));
        assert_eq!(d.pop(), Some(6));
        d.extendleft([7, 8]);
        assert_eq!(d.to_vec(), vec![8, 7, 3, 2, 1]);
        assert_eq!(d.index(&3), Ok(2));
        assert_eq!(d.count(&7), Ok(1));
        assert_eq!(d.contains(&9), Ok(false));
        assert_eq!(d.get(0), Some(8));
    }

    #[test]
    fn test_extend_from_own_iterator() {
        let d = SharedDeque::from_deque(BoundedDeque::from([1, 2, 3]));
        d.extend(d.iter().filter_map(Result::ok));
        assert_eq!(d.to_vec(), vec![1, 2, 3, 1, 2, 3]);
    }

    #[test]
    fn test_iter_detects_mutation() {
        let d = SharedDeque::from_deque(BoundedDeque::from([1, 2, 3]));
        let mut iter = d.iter();
        assert_eq!(iter.next(), Some(Ok(1)));
        d.append(4);
        assert_eq!(iter.next(), Some(Err(DequeError::MutatedDuringIteration)));
        assert_eq!(iter.next(), None);

        let collected: Result<Vec<_>, _> = d.iter().collect();
        assert_eq!(collected, Ok(vec![1, 2, 3, 4]));
    }

    /// Clears the deque it lives in when compared.
    #[derive(Clone)]
    struct Touchy {
        deque: Arc<RefCell<Option<WeakDeque<Touchy>>>>,
    }

    impl PartialEq for Touchy {
        fn eq(&self, _other: &Self) -> bool {
            let deque = self.deque.borrow().as_ref().and_then(WeakDeque::upgrade);
            if let Some(deque) = deque {
                deque.clear();
            }
            false
        }
    }

    #[test]
    fn test_search_detects_reentrant_mutation() {
        let link = Arc::new(RefCell::new(None));
        let touchy = Touchy {
            deque: Arc::clone(&link),
        };
        let d = SharedDeque::from_deque(BoundedDeque::from([touchy.clone(), touchy.clone()]));
        *link.borrow_mut() = Some(d.downgrade());
        assert_eq!(
            d.remove(&touchy).err(),
            Some(DequeError::MutatedDuringIteration)
        );
        assert!(d.is_empty());
    }

    /// Records the length of its parent deque when dropped.
    struct Watcher {
        parent: Arc<RefCell<Option<WeakDeque<Watcher>>>>,
        seen: Arc<RefCell<Vec<usize>>>,
    }

    impl Drop for Watcher {
        fn drop(&mut self) {
            let parent = self.parent.borrow().as_ref().and_then(WeakDeque::upgrade);
            if let Some(parent) = parent {
                self.seen.borrow_mut().push(parent.len());
            }
        }
    }

    fn watched(
        maxlen: Option<usize>,
    ) -> (
        SharedDeque<Watcher>,
        impl Fn() -> Watcher,
        Arc<RefCell<Vec<usize>>>,
    ) {
        let d = SharedDeque::from_deque(BoundedDeque::from_iter_bounded(Vec::new(), maxlen));
        let parent = Arc::new(RefCell::new(Some(d.downgrade())));
        let seen = Arc::new(RefCell::new(Vec::new()));
        let make = {
            let seen = Arc::clone(&seen);
            move || Watcher {
                parent: Arc::clone(&parent),
                seen: Arc::clone(&seen),
            }
        };
        (d, make, seen)
    }

    #[test]
    fn test_clear_drops_elements_after_release() {
        let (d, make, seen) = watched(None);
        d.extend([make(), make()]);
        d.clear();
        assert!(d.is_empty());
        assert_eq!(*seen.borrow(), vec![0, 0]);
    }

    #[test]
    fn test_evicting_extend_drops_elements_after_release() {
        let (d, make, seen) = watched(Some(1));
        d.extend([make(), make()]);
        assert_eq!(d.len(), 1);
        assert_eq!(*seen.borrow(), vec![1]);
        d.extendleft([make()]);
        assert_eq!(*seen.borrow(), vec![1, 1]);
        drop(d.append(make()));
        assert_eq!(*seen.borrow(), vec![1, 1, 1]);
    }

    #[test]
    fn test_rejected_insert_drops_value_after_release() {
        let (d, make, seen) = watched(Some(1));
        d.append(make());
        assert_eq!(d.insert(0, make()), Err(DequeError::Full { maxlen: 1 }));
        assert_eq!(*seen.borrow(), vec![1]);
    }

    #[test]
    fn test_noop_operations_keep_iterator_valid() {
        let d = SharedDeque::from_deque(BoundedDeque::from_iter_bounded([1, 2, 3], Some(3)));
        let mut iter = d.iter();
        assert_eq!(iter.next(), Some(Ok(1)));
        assert_eq!(d.insert(0, 0), Err(DequeError::Full { maxlen: 3 }));
        d.rotate(0);
        d.rotate(3);
        d.extend(Vec::new());
        assert_eq!(iter.next(), Some(Ok(2)));
        assert_eq!(d.index(&3), Ok(2));

        let drained = SharedDeque::from_deque(BoundedDeque::from([7]));
        assert_eq!(drained.popleft(), Some(7));
        let mut iter = drained.iter();
        drained.clear();
        assert_eq!(drained.pop(), None);
        assert_eq!(drained.popleft(), None);
        drained.reverse();
        assert_eq!(iter.next(), None);

        let mut live = d.iter();
        d.rotate(1);
        assert_eq!(live.next(), Some(Err(DequeError::MutatedDuringIteration)));
    }

    #[test]
    fn test_weak_handle() {
        let d = SharedDeque::<i64>::new();
        let weak = d.downgrade();
        assert!(weak.upgrade().map_or(false, |u| u.ptr_eq(&d)));
        drop(d);
        assert!(weak.upgrade().is_none());
    }

    #[test]
    fn test_double_ended_trait() {
        fn fill<D: DoubleEnded<i64>>(d: &mut D) {
            d.extend_back([1, 2, 3]);
            d.extendleft([0]);
        }
        let mut shared = SharedDeque::with_maxlen(3);
        fill(&mut shared);
        let mut owned = BoundedDeque::with_maxlen(3);
        fill(&mut owned);
        assert_eq!(shared.to_vec(), owned.to_vec());
        assert_eq!(owned.to_vec(), vec![0, 1, 2]);
        assert!(DoubleEnded::is_full(&shared));
    }

    #[test]
    fn test_from_config() {
        let mut config = DequeConfig::default();
        config.with_maxlen(1);
        let d = SharedDeque::from_config(&config);
        d.append(1);
        assert_eq!(d.append(2), Some(1));
        assert_eq!(d.repr(), "deque([2], maxlen=1)");
    }
}
