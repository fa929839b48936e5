//! The backing store and the handle a `MovableVec` owns it through.
//!
//! A backing store is a plain `Vec<T>` living in a shared cell. Exactly one
//! `Store` (and thus one `MovableVec`) owns a given cell; read-only views
//! hold additional `Rc` handles but can never write through them.

use std::{
    cell::{Ref, RefCell, RefMut},
    rc::Rc,
};


/// Shared handle to a backing store. Only ever handed out read-only.
pub(crate) type SharedStore<T> = Rc<RefCell<Vec<T>>>;

/// The owning handle to a backing store.
///
/// Not `Clone`: two wrappers must never own the same store.
pub(crate) struct Store<T> {
    cell: SharedStore<T>,
}

impl<T> Store<T> {
    /// A fresh, empty store. Does not allocate element memory.
    pub(crate) fn new() -> Self {
        Self::from_vec(Vec::new())
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self::from_vec(Vec::with_capacity(capacity))
    }

    /// Adopts `vec` as the backing store without copying it.
    pub(crate) fn from_vec(vec: Vec<T>) -> Self {
        Self {
            cell: Rc::new(RefCell::new(vec)),
        }
    }

    /// Read access to the elements.
    ///
    /// Panics if a guard from `write()` is alive, which can't happen outside
    /// of this crate.
    pub(crate) fn read(&self) -> Ref<'_, Vec<T>> {
        self.cell.borrow()
    }

    /// Write access to the elements.
    ///
    /// Requires `&mut self` so that only the owner can mutate. Views only
    /// lock the store for the duration of a single call, so this can only
    /// panic when called from inside `ReadOnlyStore::with_slice`.
    pub(crate) fn write(&mut self) -> RefMut<'_, Vec<T>> {
        self.cell.borrow_mut()
    }

    /// Another read-only handle to this very store (not a copy).
    pub(crate) fn share(&self) -> SharedStore<T> {
        Rc::clone(&self.cell)
    }

    /// Returns `true` if both handles refer to the same store.
    #[cfg(test)]
    pub(crate) fn same_as(&self, shared: &SharedStore<T>) -> bool {
        Rc::ptr_eq(&self.cell, shared)
    }
}
