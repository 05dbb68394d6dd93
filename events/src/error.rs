//! Error types raised while managing or dispatching events.

use thiserror::Error;

use crate::event::HandlerError;

/// A single handler failure captured during a [`Policy::DeliverAll`](crate::Policy::DeliverAll)
/// dispatch.
#[derive(Error, Debug)]
#[error("handler #{index} failed: {source}")]
pub struct HandlerFailure {
    /// Position of the failing handler in the event's subscription order.
    pub index: usize,
    /// The error returned by the handler.
    #[source]
    pub source: HandlerError,
}

/// Errors produced by [`Event`](crate::Event) and [`Publisher`](crate::Publisher) operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum EventError {
    /// `unsubscribe` was called with a handler that is not currently subscribed.
    #[error("handler is not subscribed to event `{event}`")]
    HandlerNotFound {
        /// Name of the event the removal was attempted on.
        event: &'static str,
    },

    /// A handler failed and the dispatch was aborted before the remaining handlers ran.
    #[error("handler #{index} of event `{event}` failed: {source}")]
    HandlerFailed {
        event: &'static str,
        index: usize,
        #[source]
        source: HandlerError,
    },

    /// One or more handlers failed during a dispatch that delivered to every handler.
    #[error("{} handler(s) of event `{event}` failed", .failures.len())]
    HandlersFailed {
        event: &'static str,
        failures: Vec<HandlerFailure>,
    },
}

impl EventError {
    /// Returns a short stable label (snake_case) for use in logs.
    pub fn as_label(&self) -> &'static str {
        match self {
            EventError::HandlerNotFound { .. } => "event_handler_not_found",
            EventError::HandlerFailed { .. } => "event_handler_failed",
            EventError::HandlersFailed { .. } => "event_handlers_failed",
        }
    }

    /// Name of the event the error originated from.
    pub fn event(&self) -> &'static str {
        match self {
            EventError::HandlerNotFound { event }
            | EventError::HandlerFailed { event, .. }
            | EventError::HandlersFailed { event, .. } => *event,
        }
    }
}
