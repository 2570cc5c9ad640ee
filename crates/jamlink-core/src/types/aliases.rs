//! Type aliases for shared state.
//!
//! The settings view and the client model live on the UI thread and are
//! shared between the main window and the settings dialog, so they are held
//! as `Rc<RefCell<T>>`.
//!
//! ## Usage
//!
//! ```rust
//! use jamlink_core::types::{shared, Shared};
//!
//! let counter: Shared<u32> = shared(0);
//! *counter.borrow_mut() += 1;
//! assert_eq!(*counter.borrow(), 1);
//! ```

use std::cell::RefCell;
use std::rc::Rc;

/// A reference-counted, interior-mutable wrapper for single-threaded sharing.
///
/// Use when you need to share mutable state within a single thread (e.g. the
/// client model referenced by both the main window and the settings dialog).
pub type Shared<T> = Rc<RefCell<T>>;

/// A shared vector for single-threaded collection management.
pub type SharedVec<T> = Rc<RefCell<Vec<T>>>;

/// A UI callback that receives a single parameter, invoked on the UI thread
/// only.
pub type UiDataCallback<T> = Box<dyn Fn(T)>;

/// Create a new `Shared<T>` from a value.
#[inline]
pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}

/// Create a new empty `SharedVec<T>`.
#[inline]
pub fn shared_vec<T>() -> SharedVec<T> {
    Rc::new(RefCell::new(Vec::new()))
}
