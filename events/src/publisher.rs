use log::debug;

use crate::{
    error::EventError,
    event::{Event, EventArgs, Policy},
};

/// Owner of the start and stop events.
///
/// [`start`](Self::start) and [`stop`](Self::stop) dispatch their event with the publisher itself
/// as the sender. No lifecycle state is tracked: calling `stop` before `start`, or `start` twice,
/// simply dispatches again.
#[derive(Debug)]
pub struct Publisher {
    name: String,
    start_event: Event<Publisher>,
    stop_event: Event<Publisher>,
}

impl Publisher {
    /// Creates a publisher whose events abort on the first failing handler.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_policy(name, Policy::default())
    }

    /// Creates a publisher whose events both use `policy`.
    pub fn with_policy(name: impl Into<String>, policy: Policy) -> Self {
        Self {
            name: name.into(),
            start_event: Event::with_policy("start", policy),
            stop_event: Event::with_policy("stop", policy),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn start_event(&self) -> &Event<Publisher> {
        &self.start_event
    }

    #[inline]
    pub fn start_event_mut(&mut self) -> &mut Event<Publisher> {
        &mut self.start_event
    }

    #[inline]
    pub fn stop_event(&self) -> &Event<Publisher> {
        &self.stop_event
    }

    #[inline]
    pub fn stop_event_mut(&mut self) -> &mut Event<Publisher> {
        &mut self.stop_event
    }

    /// Triggers the start event.
    pub fn start(&self) -> Result<(), EventError> {
        self.on_start()
    }

    /// Triggers the stop event.
    pub fn stop(&self) -> Result<(), EventError> {
        self.on_stop()
    }

    fn on_start(&self) -> Result<(), EventError> {
        debug!("publisher `{}` starting", self.name);
        self.start_event.dispatch(&mut EventArgs::new(self))
    }

    fn on_stop(&self) -> Result<(), EventError> {
        debug!("publisher `{}` stopping", self.name);
        self.stop_event.dispatch(&mut EventArgs::new(self))
    }
}

impl Default for Publisher {
    fn default() -> Self {
        Self::new("publisher")
    }
}
