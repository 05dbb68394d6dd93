//! Synchronous publish/subscribe primitives.
//!
//! A [`Publisher`] owns a pair of named [`Event`]s (start and stop). Any callable taking an
//! [`EventArgs`] can be wrapped in a [`Handler`] and subscribed to an event; when the publisher
//! transitions, every handler runs in the order it was subscribed.
//!
//! ```rust
//! use std::{cell::RefCell, rc::Rc};
//! use rusty_events::{Handler, Publisher};
//!
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let mut publisher = Publisher::new("reactor");
//!
//! let sink = seen.clone();
//! publisher
//!     .start_event_mut()
//!     .subscribe(Handler::<Publisher>::new(move |args| {
//!         sink.borrow_mut().push(args.sender().name().to_owned());
//!     }));
//!
//! publisher.start().unwrap();
//! assert_eq!(*seen.borrow(), vec!["reactor".to_owned()]);
//! ```

pub mod error;
pub mod event;
pub mod logging;
pub mod publisher;
pub mod subscriber;

pub use error::{EventError, HandlerFailure};
pub use event::{Event, EventArgs, Handler, HandlerError, Params, Policy};
pub use publisher::Publisher;
pub use subscriber::{LogSubscriber, Subscribe};
