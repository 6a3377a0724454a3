pub mod catalog;
pub mod parser;
pub mod session;

use anyhow::{anyhow, Error};
use clap::{App, Arg};
use config::Config;
use log::LevelFilter;
use rustyline::Editor;
use session::Session;
use simplelog::{TermLogger, TerminalMode};

macro_rules! prompt {
    ($ed:ident, $prompt:expr) => {{
        use rustyline::error::ReadlineError;

        match $ed.readline($prompt) {
            Ok(line) => {
                $ed.add_history_entry(line.as_str());
                Ok(line)
            }

            Err(ReadlineError::Interrupted) => {
                continue;
            }

            Err(ReadlineError::Eof) => {
                println!("Exiting...Good bye!");
                break;
            }

            Err(e) => Err(e),
        }
    }};
}

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn print_help() {
    println!("Main help:");
    println!("h | help                             Shows this help");
    println!("q | quit                             Quit");
    println!("v | version                          Shows the version");
    println!("user(<id>, '<name>')                 Create a user");
    println!("movie(<id>, '<title>')               Create a movie");
    println!("rate(<user>, <movie>, <1-5>)         Rate a movie");
    println!("recommend(<user>)                    Recommend a movie");
    println!("average(<movie>)                     Average rating of a movie");
    println!("similarity(<user>, <user>)           Similarity score of two users");
    println!("query_user(<user>)                   Show a user");
    println!("query_movie(<movie>)                 Show a movie");
    println!("query_ratings(<movie>)               Ratings of a movie by user id");
    println!("watched(<user>)                      Movies rated by a user");
    println!("users | movies                       Everything rated so far");
    println!();
    println!("<user> and <movie> are either id(<n>) or name('<text>')");
}

fn main() -> Result<(), Error> {
    let matches = App::new("movie-recommender")
        .version(VERSION)
        .about("Collaborative filtering movie recommendations")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("FILE")
                .help("TOML configuration file")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("log-level")
                .short("l")
                .long("log-level")
                .value_name("LEVEL")
                .help("Overrides the configured log level")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("demo")
                .long("demo")
                .help("Start with the demo users, movies and ratings"),
        )
        .get_matches();

    let config = match matches.value_of("config") {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let level = match matches.value_of("log-level") {
        Some(level) => level
            .parse::<LevelFilter>()
            .map_err(|_| anyhow!("Unknown log level '{}'", level))?,
        None => config.log.level_filter()?,
    };

    TermLogger::init(level, simplelog::Config::default(), TerminalMode::Mixed)
        .map_err(|e| anyhow!("Couldn't initialize the logger: {}", e))?;

    let dataset = if matches.is_present("demo") {
        session::demo_dataset()
    } else {
        config.dataset.clone()
    };

    let mut session = Session::from_dataset(&dataset)?;

    println!("Welcome to movie-recommender {}", VERSION);
    let rl_config = rustyline::Config::builder()
        .max_history_size(config.repl.history)
        .build();
    let mut rl = Editor::<()>::with_config(rl_config);

    loop {
        let opt: String = prompt!(rl, &config.repl.prompt)?;

        match opt.trim() {
            "?" | "h" | "help" => print_help(),

            "q" | "quit" => {
                println!("Bye!");
                break;
            }

            "v" | "version" => {
                println!("version: {}", VERSION);
            }

            empty if empty.is_empty() => {}

            line => match parser::parse_line(line) {
                Some(statement) => match session.execute(statement) {
                    Ok(output) => println!("{}", output),
                    Err(e) => {
                        log::debug!("Statement '{}' failed", line);
                        println!("{}", e);
                    }
                },

                None => println!("Invalid syntax!"),
            },
        }
    }

    Ok(())
}
