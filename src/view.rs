//! Read-only views onto a backing store.

use std::{
    cell::Ref,
    fmt,
    ops::Range,
    rc::Rc,
};

use crate::store::SharedStore;


/// A read-only view of a backing store, or of a window of it.
///
/// Obtained via [`MovableVec::read_only_store`][crate::MovableVec::read_only_store]
/// or [`MovableVec::sub_view`][crate::MovableVec::sub_view].
///
/// The view is bound to the store that was current when it was created. It
/// keeps showing that store after the originating `MovableVec` moved or
/// swapped it away, including all changes the store's new owner makes.
/// It never follows the `MovableVec` to its new store.
///
/// ```
/// use movable_vec::{movable_vec, MovableVec};
///
/// let mut a = movable_vec![1, 2, 3];
/// let mut b = MovableVec::new();
///
/// let view = a.read_only_store();
/// a.move_to(&mut b);
///
/// assert!(a.is_empty());
/// assert_eq!(view, [1, 2, 3]);
///
/// b.push(4);
/// assert_eq!(view, [1, 2, 3, 4]);
/// ```
///
/// Reading never keeps the store locked once a call returns, so a view can
/// be held for as long as needed without getting in the way of whoever owns
/// the store now.
///
/// # Panics
///
/// Mutating the store through its owner from inside the closure passed to
/// [`with_slice`][ReadOnlyStore::with_slice] panics, just like a `RefCell`
/// does.
pub struct ReadOnlyStore<T> {
    store: SharedStore<T>,
    start: usize,

    /// `None` means "up to the end of the store", even if it grows.
    end: Option<usize>,
}

impl<T> ReadOnlyStore<T> {
    /// A view onto the whole store.
    pub(crate) fn whole(store: SharedStore<T>) -> Self {
        Self {
            store,
            start: 0,
            end: None,
        }
    }

    /// A view onto `range` of the store. The caller checks the bounds.
    pub(crate) fn window(store: SharedStore<T>, range: Range<usize>) -> Self {
        Self {
            store,
            start: range.start,
            end: Some(range.end),
        }
    }

    /// The range of the store this view currently covers. If the store
    /// shrank below the window, the window is truncated.
    fn bounds(&self, store_len: usize) -> Range<usize> {
        let end = match self.end {
            Some(end) => end.min(store_len),
            None => store_len,
        };
        let start = self.start.min(end);
        start..end
    }

    /// Read access to the viewed elements. Never returned to the caller.
    fn read(&self) -> Ref<'_, [T]> {
        Ref::map(self.store.borrow(), |v| {
            let bounds = self.bounds(v.len());
            &v[bounds]
        })
    }

    /// Calls `f` with the viewed elements as a slice and returns its result.
    ///
    /// The store is locked for reading only while `f` runs.
    pub fn with_slice<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&[T]) -> R,
    {
        f(&self.read())
    }

    /// Returns the number of viewed elements.
    pub fn len(&self) -> usize {
        self.bounds(self.store.borrow().len()).len()
    }

    /// Returns `true` if the view currently shows no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a clone of the element at `index` (relative to the start of
    /// this view), or `None` if there is no such element.
    pub fn get(&self, index: usize) -> Option<T>
    where
        T: Clone,
    {
        self.read().get(index).cloned()
    }

    /// Returns `true` if the view shows an element equal to `elem`.
    pub fn contains(&self, elem: &T) -> bool
    where
        T: PartialEq,
    {
        self.read().contains(elem)
    }

    /// Index of the first element equal to `elem`, relative to this view.
    pub fn index_of(&self, elem: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.read().iter().position(|e| e == elem)
    }

    /// Copies the viewed elements into a new `Vec`.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.read().to_vec()
    }

    /// Iterates over the viewed elements, cloning each.
    ///
    /// The iterator works by index and re-reads the store on every step, so
    /// the store is not locked between steps.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_
    where
        T: Clone,
    {
        let mut pos = 0;
        std::iter::from_fn(move || {
            let elem = self.get(pos);
            pos += 1;
            elem
        })
    }
}

impl<T> Clone for ReadOnlyStore<T> {
    /// Another view onto the same store and window. Does not copy elements.
    fn clone(&self) -> Self {
        Self {
            store: Rc::clone(&self.store),
            start: self.start,
            end: self.end,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ReadOnlyStore<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ReadOnlyStore ")?;
        f.debug_list().entries(self.read().iter()).finish()
    }
}

impl<T: PartialEq> PartialEq<[T]> for ReadOnlyStore<T> {
    fn eq(&self, other: &[T]) -> bool {
        *self.read() == *other
    }
}

impl<'other, T: PartialEq> PartialEq<&'other [T]> for ReadOnlyStore<T> {
    fn eq(&self, other: &&'other [T]) -> bool {
        *self.read() == **other
    }
}

impl<T: PartialEq> PartialEq<Vec<T>> for ReadOnlyStore<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        *self.read() == other[..]
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for ReadOnlyStore<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        *self.read() == other[..]
    }
}
