use chrono::NaiveDate;
use clap::Parser;

use events_calendar::Calendar;
use events_calendar::Event;
use events_calendar::client::Client;
use events_calendar::clock::{Clock, FixedClock, SystemClock};
use events_calendar::config::DEFAULT_URL;

/// Fetch the events of a server, and display them as a calendar
#[derive(Parser, Debug)]
#[command(name = "events-calendar")]
#[command(version)]
struct Args {
    /// URL of the server that serves the events.
    #[arg(long, env = "EVENTS_CALENDAR_URL", default_value = DEFAULT_URL)]
    url: String,

    /// Use this date as today's date (YYYY-MM-DD).
    #[arg(long, value_name = "DATE")]
    today: Option<NaiveDate>,

    /// Add an event once the events have been fetched.
    #[arg(long, num_args = 3, value_names = ["TITLE", "START", "END"])]
    add: Option<Vec<String>>,

    /// Display the "new event" form.
    #[arg(long)]
    new_event: bool,
}

#[tokio::main]
async fn main() {
    env_logger::init();
    let args = Args::parse();

    let client = match Client::new(&args.url) {
        Ok(client) => client,
        Err(err) => {
            log::error!("Unable to use {}: {}", args.url, err);
            std::process::exit(1);
        }
    };

    let clock: Box<dyn Clock> = match args.today {
        Some(date) => Box::new(FixedClock::new(date)),
        None => Box::new(SystemClock),
    };

    let mut calendar = Calendar::mount(client, clock).await;

    if let Some([title, start, end]) = args.add.as_deref() {
        match Event::parse(title, start, end) {
            Ok(event) => calendar.add_event(event),
            Err(err) => {
                log::error!("Unable to add the event: {}", err);
                std::process::exit(1);
            }
        }
    }

    if args.new_event {
        calendar.toggle_new_event();
    }

    print!("{}", calendar.render());
}
