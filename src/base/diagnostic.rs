use std::{
    cell::{Cell, RefCell},
    fmt::Display,
};

/// Represents a trait responsible for handling diagnostics produced while scanning.
pub trait Handler<T> {
    /// Receive an error and handles it.
    fn receive(&self, error: T);

    /// Whether any error has been received so far.
    fn has_received(&self) -> bool;
}

/// Handler that prints every received diagnostic to the standard error stream.
#[derive(Debug, Default)]
pub struct PrintHandler {
    printed: Cell<bool>,
}

impl PrintHandler {
    /// Creates a new [`PrintHandler`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T: Display> Handler<T> for PrintHandler {
    fn receive(&self, error: T) {
        eprintln!("{error}");
        self.printed.set(true);
    }

    fn has_received(&self) -> bool {
        self.printed.get()
    }
}

/// Handler that keeps every received diagnostic without printing it.
#[derive(Debug)]
pub struct SilentHandler<T> {
    received: RefCell<Vec<T>>,
}

impl<T> Default for SilentHandler<T> {
    fn default() -> Self {
        Self {
            received: RefCell::new(Vec::new()),
        }
    }
}

impl<T> SilentHandler<T> {
    /// Creates a new, empty [`SilentHandler`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Dissolves the handler into the diagnostics it received, in order of arrival.
    #[must_use]
    pub fn into_received(self) -> Vec<T> {
        self.received.into_inner()
    }
}

impl<T> Handler<T> for SilentHandler<T> {
    fn receive(&self, error: T) {
        self.received.borrow_mut().push(error);
    }

    fn has_received(&self) -> bool {
        !self.received.borrow().is_empty()
    }
}

/// Handler that discards every diagnostic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VoidHandler;

impl<T> Handler<T> for VoidHandler {
    fn receive(&self, _error: T) {}

    fn has_received(&self) -> bool {
        false
    }
}
