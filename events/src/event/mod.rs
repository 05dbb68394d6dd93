//! Named events with ordered, synchronous dispatch.
//!
//! An [`Event`] keeps its [`Handler`]s in subscription order. [`Event::dispatch`] calls each of
//! them in that order and doesn't return until the last one has. The same handler may be
//! subscribed more than once and then runs once per subscription.
//!
//! # Failures
//!
//! What happens when a handler returns an error is governed by the event's [`Policy`]:
//!
//! - [`Policy::FailFast`] (default): the dispatch stops at the failing handler and the error is
//!   returned as [`EventError::HandlerFailed`]. Handlers after it do not run.
//! - [`Policy::DeliverAll`]: every handler runs; failures are collected into
//!   [`EventError::HandlersFailed`].
//!
//! # Mutation during dispatch
//!
//! `dispatch` takes `&self` while `subscribe`/`unsubscribe` take `&mut self`, so the handler list
//! cannot change while a dispatch is in progress. The arguments, on the other hand, are handed to
//! each handler as `&mut`: a handler may add or replace [`Params`] entries and every handler after
//! it sees the change, as does the caller once `dispatch` returns.

pub mod args;
pub mod handler;

pub use args::{EventArgs, Params};
pub use handler::{Handler, HandlerError};

use log::{debug, trace, warn};

use crate::error::{EventError, HandlerFailure};

/// How a dispatch reacts to a failing handler.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Abort on the first failure.
    #[default]
    FailFast,
    /// Invoke every handler and report all failures afterwards.
    DeliverAll,
}

/// An ordered list of handlers for one named occurrence.
pub struct Event<S: ?Sized> {
    name: &'static str,
    policy: Policy,
    handlers: Vec<Handler<S>>,
}

impl<S: ?Sized> Event<S> {
    /// Creates an empty event using [`Policy::FailFast`].
    pub fn new(name: &'static str) -> Self {
        Self::with_policy(name, Policy::default())
    }

    /// Creates an empty event with the given failure policy.
    pub fn with_policy(name: &'static str, policy: Policy) -> Self {
        Self {
            name,
            policy,
            handlers: Vec::new(),
        }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Number of subscriptions, counting duplicates.
    #[inline]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Returns `true` if `handler` is subscribed at least once.
    pub fn contains(&self, handler: &Handler<S>) -> bool {
        self.handlers.contains(handler)
    }

    /// Appends `handler` to the end of the dispatch order.
    pub fn subscribe(&mut self, handler: Handler<S>) {
        self.handlers.push(handler);
        trace!(
            "subscribed handler to `{}` ({} total)",
            self.name,
            self.handlers.len()
        );
    }

    /// Removes the first subscription of `handler`.
    ///
    /// Later duplicates of the same handler stay subscribed.
    pub fn unsubscribe(&mut self, handler: &Handler<S>) -> Result<(), EventError> {
        let pos = self
            .handlers
            .iter()
            .position(|h| h == handler)
            .ok_or(EventError::HandlerNotFound { event: self.name })?;
        self.handlers.remove(pos);
        trace!(
            "unsubscribed handler #{} from `{}` ({} left)",
            pos,
            self.name,
            self.handlers.len()
        );
        Ok(())
    }

    /// Drops every subscription.
    pub fn clear(&mut self) {
        self.handlers.clear();
    }

    /// Invokes every subscribed handler with `args`, in subscription order.
    pub fn dispatch(&self, args: &mut EventArgs<'_, S>) -> Result<(), EventError> {
        debug!(
            "dispatching `{}` to {} handler(s)",
            self.name,
            self.handlers.len()
        );
        match self.policy {
            Policy::FailFast => self.dispatch_fail_fast(args),
            Policy::DeliverAll => self.dispatch_all(args),
        }
    }

    fn dispatch_fail_fast(&self, args: &mut EventArgs<'_, S>) -> Result<(), EventError> {
        for (index, handler) in self.handlers.iter().enumerate() {
            handler.call(args).map_err(|source| {
                warn!("handler #{} of `{}` failed: {}", index, self.name, source);
                EventError::HandlerFailed {
                    event: self.name,
                    index,
                    source,
                }
            })?;
        }
        Ok(())
    }

    fn dispatch_all(&self, args: &mut EventArgs<'_, S>) -> Result<(), EventError> {
        let failures: Vec<_> = self
            .handlers
            .iter()
            .enumerate()
            .filter_map(|(index, handler)| {
                let source = handler.call(&mut *args).err()?;
                warn!("handler #{} of `{}` failed: {}", index, self.name, source);
                Some(HandlerFailure { index, source })
            })
            .collect();

        if failures.is_empty() {
            Ok(())
        } else {
            Err(EventError::HandlersFailed {
                event: self.name,
                failures,
            })
        }
    }
}

impl<S: ?Sized> std::fmt::Debug for Event<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Event")
            .field("name", &self.name)
            .field("policy", &self.policy)
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
