//! Subscriber side of the event contract.
//!
//! Anything that can be called with an [`EventArgs`] can subscribe to an event. Closures are
//! wrapped directly with [`Handler::new`]/[`Handler::try_new`]; types that prefer a named method
//! implement [`Subscribe`] and are adapted with [`Handler::from_subscriber`].

use log::info;

use crate::{
    event::{EventArgs, Handler, HandlerError},
    publisher::Publisher,
};

/// Single-method capability for types that react to an event.
pub trait Subscribe<S: ?Sized> {
    fn handle(&self, args: &mut EventArgs<'_, S>) -> Result<(), HandlerError>;
}

impl<S: ?Sized, F> Subscribe<S> for F
where
    F: Fn(&mut EventArgs<'_, S>) -> Result<(), HandlerError>,
{
    fn handle(&self, args: &mut EventArgs<'_, S>) -> Result<(), HandlerError> {
        self(args)
    }
}

/// Example collaborator that logs publisher transitions at `info` level.
///
/// Its handlers are built once, so [`started_handler`](Self::started_handler) and
/// [`stopped_handler`](Self::stopped_handler) always return the same handler and can be used to
/// unsubscribe later.
pub struct LogSubscriber {
    name: String,
    started: Handler<Publisher>,
    stopped: Handler<Publisher>,
}

impl LogSubscriber {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            started: Self::transition(name.clone(), "started"),
            stopped: Self::transition(name.clone(), "stopped"),
            name,
        }
    }

    fn transition(subscriber: String, what: &'static str) -> Handler<Publisher> {
        Handler::<Publisher>::new(move |args| {
            info!("{}: {} {}", subscriber, args.sender().name(), what)
        })
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Handler meant for a publisher's start event.
    pub fn started_handler(&self) -> Handler<Publisher> {
        self.started.clone()
    }

    /// Handler meant for a publisher's stop event.
    pub fn stopped_handler(&self) -> Handler<Publisher> {
        self.stopped.clone()
    }
}
