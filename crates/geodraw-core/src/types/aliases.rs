//! Type aliases for commonly used complex types.
//!
//! Mode instances are shared between the registry that owns them and the host
//! that wires pointer handlers to them. The host tells handlers apart by
//! identity, so the same `Rc` must be handed out every time; these aliases
//! name that pattern.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use geodraw_core::types::*;
//!
//! // Instead of: Rc<RefCell<MyState>>
//! let state: Shared<MyState> = shared(MyState::default());
//! ```

use std::cell::RefCell;
use std::rc::Rc;

// =============================================================================
// SINGLE-THREADED SHARED TYPES (Rc<RefCell<T>>)
// =============================================================================

/// A reference-counted, interior-mutable wrapper for single-threaded sharing.
///
/// Interaction events are delivered serially, so no locking is involved.
///
/// # Example
/// ```rust,ignore
/// let state: Shared<AppState> = shared(AppState::default());
/// state.borrow_mut().update();
/// ```
pub type Shared<T> = Rc<RefCell<T>>;

/// A single-threaded callback receiving one value.
///
/// Interaction callbacks run on the event thread and may capture
/// non-`Send` state.
pub type LocalCallback<T> = Box<dyn FnMut(T)>;

// =============================================================================
// CONSTRUCTOR HELPERS
// =============================================================================

/// Create a new `Shared<T>` from a value.
///
/// # Example
/// ```rust,ignore
/// let state = shared(AppState::default());
/// ```
#[inline]
pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}

/// Returns true when both handles point at the same allocation.
///
/// Hosts use this to decide whether handler wiring must be rebuilt.
#[inline]
pub fn same_instance<T: ?Sized>(a: &Rc<RefCell<T>>, b: &Rc<RefCell<T>>) -> bool {
    Rc::ptr_eq(a, b)
}
