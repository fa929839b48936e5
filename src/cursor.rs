//! Contains the iterator and cursor types.
//!
//! This is in its own module to not pollute the top-level namespace.
//!
//! Neither type holds on to a backing store. Both only remember indices and
//! go through their `MovableVec` for every access, so they always see
//! whatever store the vector owns right now.

use std::{
    cell::Ref,
    iter::FusedIterator,
    ops::Range,
};

use crate::{
    MovableVec,
    error::{Error, Result},
};


/// Iterator over the elements of a `MovableVec`, front to back.
///
/// Yields a read guard per element. Use the method [`MovableVec::iter`] or
/// the `IntoIterator` impl of `&MovableVec` to obtain an iterator of this
/// kind.
#[derive(Debug)]
pub struct Iter<'a, T> {
    mv: &'a MovableVec<T>,
    remaining: Range<usize>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(mv: &'a MovableVec<T>) -> Self {
        Self {
            remaining: 0..mv.len(),
            mv,
        }
    }

    fn guard(&self, idx: usize) -> Ref<'a, T> {
        // `remaining` is always within bounds: the vector is borrowed shared
        // for `'a` and can't shrink.
        Ref::map(self.mv.store.read(), |v| &v[idx])
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = Ref<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.remaining.next()?;
        Some(self.guard(idx))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.remaining.size_hint()
    }

    fn count(self) -> usize {
        self.len()
    }

    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let idx = self.remaining.next_back()?;
        Some(self.guard(idx))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.remaining.len()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}


/// A bidirectional cursor over a `MovableVec` that can also modify it.
///
/// A cursor sits *between* elements: [`next`][ListCursor::next] returns the
/// element after it, [`previous`][ListCursor::previous] the one before it.
/// `set` and `remove` act on the element returned last; they fail with
/// [`Error::IllegalState`] if there is none, i.e. before the first step and
/// after `remove` or `insert`.
///
/// Use [`MovableVec::cursor`] or [`MovableVec::cursor_at`] to obtain a cursor.
///
/// ```
/// use movable_vec::movable_vec;
///
/// let mut mv = movable_vec![1, 2, 3, 4];
/// let mut cursor = mv.cursor();
/// while cursor.has_next() {
///     let even = *cursor.next()? % 2 == 0;
///     if even {
///         cursor.remove()?;
///     }
/// }
/// assert_eq!(mv, [1, 3]);
/// # Ok::<(), movable_vec::Error>(())
/// ```
#[derive(Debug)]
pub struct ListCursor<'a, T> {
    mv: &'a mut MovableVec<T>,

    /// Index of the element the next call to `next()` returns.
    next: usize,

    /// Index of the element returned last, `None` if there is none.
    last: Option<usize>,
}

impl<'a, T> ListCursor<'a, T> {
    /// The caller checks `next <= mv.len()`.
    pub(crate) fn new(mv: &'a mut MovableVec<T>, next: usize) -> Self {
        Self {
            mv,
            next,
            last: None,
        }
    }

    /// Returns `true` if `next()` would return an element.
    pub fn has_next(&self) -> bool {
        self.next < self.mv.len()
    }

    /// Returns `true` if `previous()` would return an element.
    pub fn has_previous(&self) -> bool {
        self.next > 0
    }

    /// Index of the element a call to `next()` would return.
    pub fn next_index(&self) -> usize {
        self.next
    }

    /// Index of the element a call to `previous()` would return, or `None`
    /// at the front.
    pub fn previous_index(&self) -> Option<usize> {
        self.next.checked_sub(1)
    }

    /// Returns the next element and advances the cursor past it.
    ///
    /// Fails with `OutOfBounds` if the cursor is at the back.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<Ref<'_, T>> {
        let idx = self.next;
        let elem = self.mv.get(idx)?;
        self.last = Some(idx);
        self.next = idx + 1;
        Ok(elem)
    }

    /// Moves the cursor back by one and returns the element it passed.
    ///
    /// Fails with `BeforeFront` if the cursor is at the front.
    pub fn previous(&mut self) -> Result<Ref<'_, T>> {
        let idx = match self.next.checked_sub(1) {
            Some(idx) => idx,
            None => return Err(Error::BeforeFront { len: self.mv.len() }),
        };
        let elem = self.mv.get(idx)?;
        self.next = idx;
        self.last = Some(idx);
        Ok(elem)
    }

    /// Removes the element returned last from the vector and returns it.
    pub fn remove(&mut self) -> Result<T> {
        let idx = self.last.ok_or(Error::IllegalState)?;
        let elem = self.mv.remove(idx)?;
        self.next = idx;
        self.last = None;
        Ok(elem)
    }

    /// Replaces the element returned last with `elem` and returns the old
    /// one.
    pub fn set(&mut self, elem: T) -> Result<T> {
        let idx = self.last.ok_or(Error::IllegalState)?;
        self.mv.set(idx, elem)
    }

    /// Inserts `elem` right before the cursor. A following `next()` is
    /// unaffected; a following `previous()` returns `elem`.
    pub fn insert(&mut self, elem: T) -> Result<()> {
        self.mv.insert(self.next, elem)?;
        self.next += 1;
        self.last = None;
        Ok(())
    }
}
