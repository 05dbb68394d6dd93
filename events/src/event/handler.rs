use std::{error::Error, fmt, rc::Rc};

use crate::{event::EventArgs, subscriber::Subscribe};

/// Error type returned by fallible handlers.
pub type HandlerError = Box<dyn Error + Send + Sync>;

type HandlerFn<S> = dyn Fn(&mut EventArgs<'_, S>) -> Result<(), HandlerError>;

/// A shared, identity-comparable callback registered on an [`Event`](super::Event).
///
/// Cloning a handler yields the same handler: clones compare equal and unsubscribing any clone
/// removes an occurrence of the original. Two handlers wrapping identical closures are still
/// distinct, since equality is pointer identity.
pub struct Handler<S: ?Sized> {
    inner: Rc<HandlerFn<S>>,
}

impl<S: ?Sized> Handler<S> {
    /// Wraps a callback that cannot fail.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&mut EventArgs<'_, S>) + 'static,
    {
        Self::try_new(move |args| {
            f(args);
            Ok(())
        })
    }

    /// Wraps a callback whose error aborts (or is collected by) the dispatch that invoked it.
    pub fn try_new<F>(f: F) -> Self
    where
        F: Fn(&mut EventArgs<'_, S>) -> Result<(), HandlerError> + 'static,
    {
        Self { inner: Rc::new(f) }
    }

    /// Adapts a shared [`Subscribe`] implementor into a handler.
    pub fn from_subscriber<T>(subscriber: Rc<T>) -> Self
    where
        T: Subscribe<S> + 'static,
    {
        Self::try_new(move |args| subscriber.handle(args))
    }

    #[inline]
    pub(crate) fn call(&self, args: &mut EventArgs<'_, S>) -> Result<(), HandlerError> {
        (self.inner)(args)
    }
}

impl<S: ?Sized> Clone for Handler<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S: ?Sized> PartialEq for Handler<S> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<S: ?Sized> Eq for Handler<S> {}

impl<S: ?Sized> fmt::Debug for Handler<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Handler")
            .field(&Rc::as_ptr(&self.inner).cast::<()>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn clones_are_equal() {
        let handler = Handler::<()>::new(|_| {});

        assert_eq!(handler, handler.clone());
    }

    #[test]
    fn identical_closures_are_distinct() {
        let a = Handler::<()>::new(|_| {});
        let b = Handler::<()>::new(|_| {});

        assert_ne!(a, b);
    }

    #[test]
    fn infallible_handler_returns_ok() {
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let handler = Handler::<()>::new(move |_| counter.set(counter.get() + 1));

        assert!(handler.call(&mut EventArgs::new(&())).is_ok());
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn fallible_handler_surfaces_error() {
        let handler = Handler::<()>::try_new(|_| Err("nope".into()));

        let err = handler.call(&mut EventArgs::new(&())).unwrap_err();

        assert_eq!(err.to_string(), "nope");
    }

    #[test]
    fn handler_sees_sender() {
        let handler = Handler::<u32>::try_new(|args| {
            if *args.sender() == 42 {
                Ok(())
            } else {
                Err(format!("unexpected sender {}", args.sender()).into())
            }
        });

        assert!(handler.call(&mut EventArgs::new(&42)).is_ok());
        assert!(handler.call(&mut EventArgs::new(&7)).is_err());
    }
}
