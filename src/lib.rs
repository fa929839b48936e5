//! A `Vec<T>`-like collection whose whole backing storage can be moved to or
//! swapped with another instance in O(1).
//!
//! This crate provides one main type: [`MovableVec`]. Its purpose is to hand
//! off or exchange bulk-owned sequence data between components without
//! copying, while guaranteeing that nobody keeps a usable reference to
//! storage that was moved away.
//!
//! ```
//! use movable_vec::{movable_vec, MovableVec};
//!
//! let mut incoming = movable_vec!['a', 'b', 'c'];
//! let mut owned = MovableVec::new();
//!
//! // O(1), no element is copied. `incoming` is empty afterwards.
//! incoming.move_to(&mut owned);
//! assert!(incoming.is_empty());
//! assert_eq!(owned, ['a', 'b', 'c']);
//! ```
//!
//! ---
//!
//! In order to use this crate, you have to include it into your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! movable-vec = "0.1"
//! ```

#![deny(missing_debug_implementations)]

use std::{
    cell::Ref,
    fmt,
    iter::FromIterator,
    mem,
    ops::Range,
};

use crate::store::Store;

pub use crate::{
    cursor::{Iter, ListCursor},
    error::{Error, Result},
    view::ReadOnlyStore,
};
use crate::error::{check_index, check_position};

/// Creates a [`MovableVec`] containing the arguments, like `vec![]`.
///
/// ```
/// use movable_vec::movable_vec;
///
/// let mv = movable_vec![1, 2, 3];
/// assert_eq!(mv, [1, 2, 3]);
///
/// let zeros = movable_vec![0; 4];
/// assert_eq!(zeros, [0, 0, 0, 0]);
/// ```
#[macro_export]
macro_rules! movable_vec {
    () => { $crate::MovableVec::new() };
    ($elem:expr; $n:expr) => { $crate::MovableVec::from(::std::vec![$elem; $n]) };
    ($($x:expr),+ $(,)?) => { $crate::MovableVec::from(::std::vec![$($x),+]) };
}

pub mod cursor;
mod error;
mod store;
mod view;



/// How [`MovableVec::from_other`] obtains its contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acquire {
    /// Clone the other vector's elements into a new backing store. The other
    /// vector stays untouched.
    Copy,

    /// Take over the other vector's backing store in O(1). The other vector
    /// is left with a new, empty store.
    Move,
}

/// A `Vec<T>`-like collection which can move or swap its entire backing
/// storage in O(1).
///
/// # Why?
///
/// Passing ownership of a big sequence from one component to another
/// usually means either copying it or handing out the inner `Vec`. The
/// former is slow; the latter gives up encapsulation: a component that
/// stored a `Vec` in a field may want to exchange its contents without ever
/// exposing the `Vec` itself.
///
/// A `MovableVec` owns exactly one backing store at all times and never
/// gives anyone mutable access to it. Instead it provides
/// [`move_to`][MovableVec::move_to] (the destination takes the store, the
/// source gets a fresh empty one) and [`swap_with`][MovableVec::swap_with]
/// (the two vectors exchange stores). Both are O(1) and don't touch a single
/// element.
///
///
/// # Views
///
/// [`read_only_store`][MovableVec::read_only_store] returns a
/// [`ReadOnlyStore`] bound to the store that is current at the time of the
/// call. If the store is later moved or swapped away, the view keeps showing
/// that store, not the vector's new one. Views can never write.
///
///
/// # Cursors
///
/// [`cursor`][MovableVec::cursor] returns a [`ListCursor`] which walks the
/// vector in both directions and can set, insert and remove elements. It
/// works purely by index through the vector.
///
///
/// # Threads
///
/// `MovableVec` is neither `Send` nor `Sync`. Share it between threads by
/// moving its contents out (e.g. via [`to_vec`][MovableVec::to_vec]) instead.
///
///
/// # Note
///
/// Element access returns read guards (`Ref<T>`) instead of plain
/// references, because views may read the same store. These guards borrow
/// the vector itself, so they can't outlive a move or swap of its store.
///
/// This type's interface is very similar to the `Vec<T>` interface from the
/// Rust standard library. When in doubt about what a method is doing, please
/// consult [the official `Vec<T>` documentation][vec-doc] first.
///
/// [vec-doc]: https://doc.rust-lang.org/stable/std/vec/struct.Vec.html
pub struct MovableVec<T> {
    /// The one backing store this vector owns.
    store: Store<T>,
}

impl<T> MovableVec<T> {
    /// Constructs a new, empty `MovableVec<T>`.
    ///
    /// The vector will not allocate element memory until elements are pushed
    /// onto it.
    pub fn new() -> Self {
        Self {
            store: Store::new(),
        }
    }

    /// Constructs a new, empty `MovableVec<T>` with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            store: Store::with_capacity(capacity),
        }
    }

    /// Constructs a `MovableVec` by cloning all elements of `slice`.
    pub fn from_slice(slice: &[T]) -> Self
    where
        T: Clone,
    {
        Self::from(slice.to_vec())
    }

    /// Constructs a `MovableVec` from the contents of `other`, either by
    /// copying or by moving them (see [`Acquire`]).
    ///
    /// The new and the given vector never share a backing store.
    ///
    /// ```
    /// use movable_vec::{movable_vec, Acquire, MovableVec};
    ///
    /// let mut a = movable_vec![1, 2];
    ///
    /// let copy = MovableVec::from_other(&mut a, Acquire::Copy);
    /// assert_eq!(a, [1, 2]);
    ///
    /// let moved = MovableVec::from_other(&mut a, Acquire::Move);
    /// assert!(a.is_empty());
    /// assert_eq!(copy, moved);
    /// ```
    pub fn from_other(other: &mut Self, acquire: Acquire) -> Self
    where
        T: Clone,
    {
        match acquire {
            Acquire::Copy => other.clone(),
            Acquire::Move => Self::take_from(other),
        }
    }

    /// Constructs a `MovableVec` that takes over the backing store of
    /// `other` in O(1). `other` is left with a new, empty store.
    pub fn take_from(other: &mut Self) -> Self {
        log::trace!("taking over backing store with {} elements", other.len());
        Self {
            store: mem::replace(&mut other.store, Store::new()),
        }
    }

    /// Moves the backing store of this vector to `destination` in O(1).
    ///
    /// This vector is empty afterwards. The previous backing store of
    /// `destination` is released.
    pub fn move_to(&mut self, destination: &mut Self) {
        Self::relocate(self, destination);
    }

    /// Exchanges the backing stores of this vector and `other` in O(1).
    pub fn swap_with(&mut self, other: &mut Self) {
        Self::swap(self, other);
    }

    /// Moves the backing store of `source` to `destination` in O(1) and
    /// gives `source` a new, empty one.
    ///
    /// No element is copied, cloned or dropped. Views of the moved store
    /// obtained from `source` keep working and now show what `destination`
    /// does with it. Views of `destination`'s previous store keep that store
    /// alive and unchanged.
    ///
    /// `source` and `destination` can't be the same vector: that would
    /// require two mutable borrows of one value.
    pub fn relocate(source: &mut Self, destination: &mut Self) {
        log::trace!(
            "moving backing store with {} elements, replacing one with {} elements",
            source.len(),
            destination.len(),
        );
        destination.store = mem::replace(&mut source.store, Store::new());
    }

    /// Exchanges the backing stores of `a` and `b` in O(1).
    ///
    /// No element is copied, cloned or dropped.
    pub fn swap(a: &mut Self, b: &mut Self) {
        log::trace!("swapping backing stores with {} and {} elements", a.len(), b.len());
        mem::swap(&mut a.store, &mut b.store);
    }

    /// Returns a read-only view of the current backing store.
    ///
    /// The view is bound to the store, not to this vector: moving or swapping
    /// the store away does not change what the view shows. See
    /// [`ReadOnlyStore`].
    pub fn read_only_store(&self) -> ReadOnlyStore<T> {
        ReadOnlyStore::whole(self.store.share())
    }

    /// Returns a read-only view of `range` of the current backing store.
    ///
    /// Like [`read_only_store`][MovableVec::read_only_store], the view stays
    /// bound to the current store. Indices of the view start at
    /// `range.start`.
    ///
    /// Fails with `InvalidArgument` if `range.start > range.end` and with
    /// `OutOfBounds` if `range.end > self.len()`.
    pub fn sub_view(&self, range: Range<usize>) -> Result<ReadOnlyStore<T>> {
        if range.start > range.end {
            return Err(Error::InvalidArgument {
                start: range.start,
                end: range.end,
            });
        }
        check_position(range.end, self.len())?;

        Ok(ReadOnlyStore::window(self.store.share(), range))
    }

    /// Returns the number of elements in this vector.
    pub fn len(&self) -> usize {
        self.store.read().len()
    }

    /// Returns `true` if the vector contains no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of elements the current backing store can hold
    /// without reallocating.
    pub fn capacity(&self) -> usize {
        self.store.read().capacity()
    }

    /// Reserves capacity for at least `additional` more elements to be
    /// inserted.
    pub fn reserve(&mut self, additional: usize) {
        self.store.write().reserve(additional);
    }

    /// Calls `shrink_to_fit()` on the current backing store.
    pub fn shrink_to_fit(&mut self) {
        self.store.write().shrink_to_fit();
    }

    /// Returns `true` if the vector contains an element equal to `elem`.
    pub fn contains(&self, elem: &T) -> bool
    where
        T: PartialEq,
    {
        self.store.read().contains(elem)
    }

    /// Returns `true` if every element of `elems` is contained in this
    /// vector. Returns `true` for an empty `elems`.
    pub fn contains_all<'e, I>(&self, elems: I) -> bool
    where
        T: PartialEq + 'e,
        I: IntoIterator<Item = &'e T>,
    {
        let store = self.store.read();
        elems.into_iter().all(|e| store.contains(e))
    }

    /// Returns the index of the first element equal to `elem`.
    pub fn index_of(&self, elem: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.store.read().iter().position(|e| e == elem)
    }

    /// Returns the index of the last element equal to `elem`.
    pub fn last_index_of(&self, elem: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.store.read().iter().rposition(|e| e == elem)
    }

    /// Returns a read guard for the element at `index`.
    ///
    /// Fails with `OutOfBounds` if `index >= self.len()`.
    pub fn get(&self, index: usize) -> Result<Ref<'_, T>> {
        let store = self.store.read();
        check_index(index, store.len())?;
        Ok(Ref::map(store, |v| &v[index]))
    }

    /// Replaces the element at `index` with `elem` and returns the old one.
    ///
    /// Fails with `OutOfBounds` if `index >= self.len()`.
    pub fn set(&mut self, index: usize, elem: T) -> Result<T> {
        let mut store = self.store.write();
        check_index(index, store.len())?;
        Ok(mem::replace(&mut store[index], elem))
    }

    /// Appends an element to the back of the vector.
    pub fn push(&mut self, elem: T) {
        self.store.write().push(elem);
    }

    /// Removes the last element and returns it, or `None` if the vector is
    /// empty.
    pub fn pop(&mut self) -> Option<T> {
        self.store.write().pop()
    }

    /// Inserts `elem` at `index`, shifting all elements after it to the
    /// right.
    ///
    /// Fails with `OutOfBounds` if `index > self.len()`.
    pub fn insert(&mut self, index: usize, elem: T) -> Result<()> {
        let mut store = self.store.write();
        check_position(index, store.len())?;
        store.insert(index, elem);
        Ok(())
    }

    /// Removes the element at `index` and returns it, shifting all elements
    /// after it to the left.
    ///
    /// Fails with `OutOfBounds` if `index >= self.len()`.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        let mut store = self.store.write();
        check_index(index, store.len())?;
        Ok(store.remove(index))
    }

    /// Removes the first element equal to `elem`. Returns `true` if there
    /// was one.
    pub fn remove_item(&mut self, elem: &T) -> bool
    where
        T: PartialEq,
    {
        let mut store = self.store.write();
        match store.iter().position(|e| e == elem) {
            Some(idx) => {
                store.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Appends all elements of `elems` in iteration order. Returns `true` if
    /// the vector changed.
    pub fn append_all<I>(&mut self, elems: I) -> bool
    where
        I: IntoIterator<Item = T>,
    {
        let mut store = self.store.write();
        let len_before = store.len();
        store.extend(elems);
        store.len() != len_before
    }

    /// Inserts all elements of `elems` at `index`, in iteration order.
    /// Returns `true` if the vector changed.
    ///
    /// Fails with `OutOfBounds` if `index > self.len()`; nothing is inserted
    /// in that case.
    pub fn insert_all<I>(&mut self, index: usize, elems: I) -> Result<bool>
    where
        I: IntoIterator<Item = T>,
    {
        let mut store = self.store.write();
        check_position(index, store.len())?;
        let len_before = store.len();
        store.splice(index..index, elems);
        Ok(store.len() != len_before)
    }

    /// Removes every element that is equal to some element of `elems`.
    /// Returns `true` if the vector changed.
    pub fn remove_all(&mut self, elems: &[T]) -> bool
    where
        T: PartialEq,
    {
        self.retain_counting(|e| !elems.contains(e))
    }

    /// Keeps only the elements that are equal to some element of `elems`,
    /// preserving their order. Returns `true` if the vector changed.
    pub fn retain_all(&mut self, elems: &[T]) -> bool
    where
        T: PartialEq,
    {
        self.retain_counting(|e| elems.contains(e))
    }

    /// Keeps only the elements for which `should_be_kept` returns `true`,
    /// preserving their order.
    pub fn retain<P>(&mut self, should_be_kept: P)
    where
        P: FnMut(&T) -> bool,
    {
        self.store.write().retain(should_be_kept);
    }

    fn retain_counting<P>(&mut self, should_be_kept: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        let mut store = self.store.write();
        let len_before = store.len();
        store.retain(should_be_kept);
        store.len() != len_before
    }

    /// Removes all elements. Keeps the backing store and its capacity.
    pub fn clear(&mut self) {
        self.store.write().clear();
    }

    /// Copies all elements into a new `Vec`.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.store.read().clone()
    }

    /// Calls `f` with all elements as a slice and returns its result.
    pub fn with_slice<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&[T]) -> R,
    {
        f(&self.store.read())
    }

    /// Returns an iterator over read guards of all elements, front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Returns a cursor positioned before the first element.
    pub fn cursor(&mut self) -> ListCursor<'_, T> {
        ListCursor::new(self, 0)
    }

    /// Returns a cursor positioned before the element at `index`. The first
    /// call to `next()` returns that element, the first call to `previous()`
    /// the one before it.
    ///
    /// Fails with `OutOfBounds` if `index > self.len()`.
    pub fn cursor_at(&mut self, index: usize) -> Result<ListCursor<'_, T>> {
        check_position(index, self.len())?;
        Ok(ListCursor::new(self, index))
    }
}

impl<T> Default for MovableVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for MovableVec<T> {
    /// Copies all elements into a new, independent backing store.
    fn clone(&self) -> Self {
        Self::from(self.to_vec())
    }
}

impl<T: fmt::Debug> fmt::Debug for MovableVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MovableVec ")?;
        f.debug_list().entries(self.store.read().iter()).finish()
    }
}

impl<T> From<Vec<T>> for MovableVec<T> {
    /// Uses `vec` as the backing store. No element is copied.
    fn from(vec: Vec<T>) -> Self {
        Self {
            store: Store::from_vec(vec),
        }
    }
}

impl<T: Clone> From<&[T]> for MovableVec<T> {
    fn from(slice: &[T]) -> Self {
        Self::from_slice(slice)
    }
}

impl<T: Clone, const N: usize> From<&[T; N]> for MovableVec<T> {
    fn from(array: &[T; N]) -> Self {
        Self::from_slice(array)
    }
}

impl<T> FromIterator<T> for MovableVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(Vec::from_iter(iter))
    }
}

impl<T> Extend<T> for MovableVec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.append_all(iter);
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for MovableVec<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.append_all(iter.into_iter().copied());
    }
}

impl<'a, T> IntoIterator for &'a MovableVec<T> {
    type Item = Ref<'a, T>;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for MovableVec<T> {
    fn eq(&self, other: &Self) -> bool {
        *self.store.read() == *other.store.read()
    }
}

impl<T: Eq> Eq for MovableVec<T> {}

impl<T: PartialEq> PartialEq<[T]> for MovableVec<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.store.read()[..] == *other
    }
}

impl<'other, T: PartialEq> PartialEq<&'other [T]> for MovableVec<T> {
    fn eq(&self, other: &&'other [T]) -> bool {
        self.store.read()[..] == **other
    }
}

impl<T: PartialEq> PartialEq<Vec<T>> for MovableVec<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        *self.store.read() == *other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for MovableVec<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.store.read()[..] == other[..]
    }
}
