//! Assorted utility types shared across the workspace.

use std::{
    cell::RefCell,
    rc::Rc,
    sync::{Arc, Mutex},
};

/// Shared mutable type able to be passed between types
/// allowing for circular referencing and interior mutability.
pub type SharedMut<T> = Rc<RefCell<T>>;

/// Shared thread type able to be passed between threads.
///
/// Significant performance overhead compared to `SharedMut`.
pub type SharedThread<T> = Arc<Mutex<T>>;
