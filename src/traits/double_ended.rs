/// A trait for sequences which can grow and shrink at both ends and which may carry a maximum
/// length.
///
/// Implementors only need to provide the single-element operations. Bulk insertion is built on
/// top of them, so eviction is applied after every inserted element rather than once at the end.
pub trait DoubleEnded<T> {
    /// The number of elements currently stored.
    fn len(&self) -> usize;

    /// The maximum length, or [`None`] if the sequence is unbounded.
    fn maxlen(&self) -> Option<usize>;

    /// Insert `value` at the back, evicting and returning the front element if the sequence was
    /// already at its maximum length.
    fn append(&mut self, value: T) -> Option<T>;

    /// Insert `value` at the front, evicting and returning the back element if the sequence was
    /// already at its maximum length.
    fn appendleft(&mut self, value: T) -> Option<T>;

    /// Remove and return the back element.
    fn pop(&mut self) -> Option<T>;

    /// Remove and return the front element.
    fn popleft(&mut self) -> Option<T>;

    /// Returns `true` if the sequence holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if the sequence is bounded and any further insertion would evict an
    /// element.
    fn is_full(&self) -> bool {
        self.maxlen().map_or(false, |maxlen| self.len() >= maxlen)
    }

    /// [`append`](DoubleEnded::append) every element of `values` in order.
    fn extend_back<I: IntoIterator<Item = T>>(&mut self, values: I)
    where
        Self: Sized,
    {
        for value in values {
            self.append(value);
        }
    }

    /// [`appendleft`](DoubleEnded::appendleft) every element of `values` in order. The elements
    /// end up in reverse order at the front of the sequence.
    fn extendleft<I: IntoIterator<Item = T>>(&mut self, values: I)
    where
        Self: Sized,
    {
        for value in values {
            self.appendleft(value);
        }
    }
}
