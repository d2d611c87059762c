//! Counter state record and transitions.
//!
//! The widget owns two pieces of state: the displayed count and the
//! visibility of the "cannot go below 0" error line. Both change only
//! through [`Counter::increment`] and [`Counter::decrement`], which are
//! pure immutable-update functions: each consumes the current record and
//! returns the next one. The host UI layer stores whichever record it was
//! last handed and re-renders from it, so no state is shared across the
//! widget boundary.

/// A user action on the counter widget.
///
/// One variant per click target in the rendered widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Click on the increment button.
    Increment,
    /// Click on the decrement button.
    Decrement,
}

/// Counter widget state.
///
/// # Invariants
///
/// - `count` never goes below zero: a decrement at zero is rejected and
///   raises the error line instead of changing the count.
/// - `error_visible` implies `count == 0`: the flag is only raised by a
///   rejected decrement (which leaves the count at zero), and any
///   increment clears it before the count moves off zero.
///
/// # Example
///
/// ```
/// use counter_model::Counter;
///
/// let counter = Counter::new().decrement();
/// assert_eq!(counter.count(), 0);
/// assert!(counter.error_visible());
///
/// let counter = counter.increment();
/// assert_eq!(counter.count(), 1);
/// assert!(!counter.error_visible());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counter {
    count: u32,
    error_visible: bool,
}

impl Counter {
    /// Create a counter in its mount state: zero, error line hidden.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current count.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Whether the "cannot go below 0" line is currently shown.
    pub fn error_visible(&self) -> bool {
        self.error_visible
    }

    /// Increment the count.
    ///
    /// Always succeeds, and clears the error line if it was showing.
    #[must_use]
    pub fn increment(self) -> Self {
        Self {
            count: self.count + 1,
            error_visible: false,
        }
    }

    /// Decrement the count.
    ///
    /// Rejected at zero: the count stays unchanged and the error line is
    /// raised. A successful decrement leaves the error flag as it was;
    /// only an increment clears it.
    #[must_use]
    pub fn decrement(self) -> Self {
        if self.count > 0 {
            Self {
                count: self.count - 1,
                ..self
            }
        } else {
            Self {
                error_visible: true,
                ..self
            }
        }
    }

    /// Apply a single action.
    #[must_use]
    pub fn apply(self, action: Action) -> Self {
        match action {
            Action::Increment => self.increment(),
            Action::Decrement => self.decrement(),
        }
    }
}
