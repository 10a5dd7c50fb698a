use std::error::Error;
use std::io::{stdin, stdout, BufRead, Write};
use std::path::Path;

use chrono::NaiveDate;

use month_calendar::client::Client;
use month_calendar::local::LocalFile;
use month_calendar::traits::EventSource;
use month_calendar::{CalendarView, EventStore, LoadOutcome};

const HELP: &str = "Commands: n (next month), p (previous month), t (today), s <day> or s <YYYY-MM-DD> (select), q (quit)";


#[tokio::main]
async fn main() {
    env_logger::init();

    let location = std::env::args().nth(1)
        .unwrap_or_else(month_calendar::config::events_source_from_env);

    let source = match source_for(&location) {
        Ok(source) => source,
        Err(err) => {
            log::error!("Invalid events source {:?}: {}", location, err);
            return;
        }
    };

    let (store, outcome) = EventStore::initialize(&*source).await;
    if let LoadOutcome::Failed(_) = outcome {
        log::warn!("No events will be displayed");
    }

    let mut view = CalendarView::now();
    println!("Calendar");
    println!("Full Event Schedule");
    println!("{}", month_calendar::utils::format_long_date(view.today()));
    println!("{}\n", HELP);

    loop {
        month_calendar::utils::print_month(&view.snapshot(store.events()));

        match read_command() {
            Ok(Some(Command::Quit)) | Ok(None) => break,
            Ok(Some(command)) => apply(command, &mut view),
            Err(err) => println!("{}\n{}", err, HELP),
        }
    }
}

/// URLs are fetched over HTTP, anything else is considered a local path
fn source_for(location: &str) -> Result<Box<dyn EventSource + Send + Sync>, Box<dyn Error>> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Ok(Box::new(Client::new(location)?))
    } else {
        Ok(Box::new(LocalFile::new(Path::new(location))))
    }
}

#[derive(Debug, PartialEq)]
enum Command {
    Next,
    Previous,
    Today,
    SelectDay(u32),
    SelectDate(NaiveDate),
    Quit,
}

/// Returns `None` at the end of the input
fn read_command() -> Result<Option<Command>, Box<dyn Error>> {
    print!("> ");
    stdout().flush()?;

    let mut line = String::new();
    if stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    parse_command(&line).map(Some)
}

fn parse_command(line: &str) -> Result<Command, Box<dyn Error>> {
    let mut words = line.split_whitespace();
    let command = match (words.next(), words.next()) {
        (Some("n"), None) => Command::Next,
        (Some("p"), None) => Command::Previous,
        (Some("t"), None) => Command::Today,
        (Some("q"), None) => Command::Quit,
        (Some("s"), Some(arg)) => parse_selection(arg)?,
        (Some(arg), None) => parse_selection(arg)?,
        _ => return Err(format!("Unknown command {:?}", line.trim()).into()),
    };
    Ok(command)
}

fn parse_selection(arg: &str) -> Result<Command, Box<dyn Error>> {
    if let Ok(day) = arg.parse::<u32>() {
        return Ok(Command::SelectDay(day));
    }
    match NaiveDate::parse_from_str(arg, "%Y-%m-%d") {
        Ok(date) => Ok(Command::SelectDate(date)),
        Err(_) => Err(format!("Invalid day {:?}", arg).into()),
    }
}

fn apply(command: Command, view: &mut CalendarView) {
    match command {
        Command::Next => view.next_month(),
        Command::Previous => view.previous_month(),
        Command::Today => {
            view.go_to_today();
            let today = view.today();
            view.select(today);
        },
        Command::SelectDay(day) => {
            let month = view.reference_month();
            match NaiveDate::from_ymd_opt(month.year(), month.month(), day) {
                Some(date) => view.select(date),
                None => println!("{} has no day {}", month, day),
            }
        },
        Command::SelectDate(date) => view.select(date),
        Command::Quit => (),
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command("n\n").unwrap(), Command::Next);
        assert_eq!(parse_command(" p ").unwrap(), Command::Previous);
        assert_eq!(parse_command("s 12").unwrap(), Command::SelectDay(12));
        assert_eq!(parse_command("12").unwrap(), Command::SelectDay(12));
        assert_eq!(parse_command("s 2024-03-05").unwrap(), Command::SelectDate(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()));
        assert!(parse_command("").is_err());
        assert!(parse_command("s").is_err());
        assert!(parse_command("s tomorrow").is_err());
        assert!(parse_command("n n").is_err());
    }

    #[test]
    fn test_apply() {
        let mut view = CalendarView::new(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());
        apply(Command::Next, &mut view);
        apply(Command::SelectDay(29), &mut view);
        assert_eq!(view.selected(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        apply(Command::SelectDay(30), &mut view);
        assert_eq!(view.selected(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        apply(Command::Today, &mut view);
        assert_eq!(view.selected(), NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());
        assert_eq!(view.reference_month().month(), 1);
    }
}
