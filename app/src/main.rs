use std::error::Error;

use log::LevelFilter;
use rusty_events::{LogSubscriber, Publisher, logging};

fn main() -> Result<(), Box<dyn Error>> {
    let level = match std::env::args().nth(1) {
        Some(arg) => arg.parse::<LevelFilter>()?,
        None => LevelFilter::Info,
    };
    let log_recv = logging::init(level)?;

    let subscriber = LogSubscriber::new("console");
    let mut publisher = Publisher::new("demo");
    publisher
        .start_event_mut()
        .subscribe(subscriber.started_handler());
    publisher
        .stop_event_mut()
        .subscribe(subscriber.stopped_handler());

    publisher.start()?;
    publisher.stop()?;

    for message in log_recv.try_iter() {
        println!("{} - {}", message.level, message.message);
    }
    Ok(())
}
