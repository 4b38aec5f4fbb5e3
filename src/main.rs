//! varnamala main entry point
//!
//! A line-oriented trainer: prints the current letter card, reads a
//! command, updates the playback session, repeats. All the interesting
//! state lives in `PlaybackSession`; this file is presentation only.

use log::{debug, error, info};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;
use unicode_width::UnicodeWidthStr;
use varnamala::catalog::{self, LetterKind};
use varnamala::session::{Config, FilterMode, PlaybackSession};
use varnamala::speech::create_synth;
use varnamala::Result;

/// Width of the printed letter card
const CARD_WIDTH: usize = 44;

fn main() {
    // Parse command line arguments
    let args: Vec<String> = std::env::args().skip(1).collect();
    let debug_mode = args.iter().any(|arg| arg == "--debug" || arg == "-d");

    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(if debug_mode {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .init();

    info!("varnamala version {} starting", varnamala::VERSION);

    // Optional positional argument: catalog path
    let catalog_path = args
        .iter()
        .find(|arg| !arg.starts_with('-'))
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data/letters.yaml"));

    if let Err(e) = run(catalog_path) {
        error!("Fatal error: {}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(catalog_path: PathBuf) -> Result<()> {
    debug!("Initializing varnamala");

    let letters = catalog::load(&catalog_path)?;
    if letters.is_empty() {
        eprintln!("Catalog {:?} contains no letters", catalog_path);
        process::exit(1);
    }
    info!("Loaded {} letters from {:?}", letters.len(), catalog_path);

    let config = Config::load()?;
    info!("Configuration loaded from {:?}", config.path());

    let synth = create_synth()?;

    let mut session = PlaybackSession::new(letters, config, synth);

    println!("varnamala {} — Hindi alphabet trainer", varnamala::VERSION);
    println!("Commands: n(ext) p(rev) play slow v c b rate N repeat N delay N auto q(uit) ?");
    print_card(&session);

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        let mut parts = line.split_whitespace();
        let cmd = parts.next().unwrap_or("");
        let arg = parts.next();

        match cmd {
            "" => continue,
            "q" | "quit" | "exit" => break,
            "n" | "next" => {
                session.advance(1)?;
                print_card(&session);
            }
            "p" | "prev" => {
                session.advance(-1)?;
                print_card(&session);
            }
            "play" | "s" => session.play_current()?,
            "slow" => {
                let on = session.toggle_slow_mode();
                println!("slow mode {}", if on { "on" } else { "off" });
            }
            "v" | "vowels" => {
                session.set_filter(FilterMode::Vowels)?;
                print_card(&session);
            }
            "c" | "consonants" => {
                session.set_filter(FilterMode::Consonants)?;
                print_card(&session);
            }
            "b" | "both" => {
                session.set_filter(FilterMode::Both)?;
                print_card(&session);
            }
            "rate" => match arg.and_then(|a| a.parse().ok()) {
                Some(wpm) => {
                    session.set_rate_wpm(wpm);
                    println!("rate {} wpm", session.rate_wpm());
                }
                None => println!("usage: rate <wpm>"),
            },
            "repeat" => match arg.and_then(|a| a.parse().ok()) {
                Some(n) => {
                    session.set_repeat_count(n);
                    println!("repeat {}", session.repeat_count());
                }
                None => println!("usage: repeat <count>"),
            },
            "delay" => match arg.and_then(|a| a.parse().ok()) {
                Some(ms) => {
                    session.set_delay_ms(ms);
                    println!("delay {} ms", session.delay_ms());
                }
                None => println!("usage: delay <ms>"),
            },
            "auto" => {
                let on = !session.continuous();
                session.set_continuous(on);
                println!("auto-play {}", if on { "on" } else { "off" });
            }
            "?" | "help" => {
                println!("n/p navigate, play speak, slow segmented mode, v/c/b filter,");
                println!("rate/repeat/delay set parameters, auto toggle auto-play, q quit");
            }
            other => println!("unknown command: {}", other),
        }
    }

    Ok(())
}

/// Print the card for the current letter
fn print_card(session: &PlaybackSession) {
    let Some(letter) = session.current() else {
        println!("(no letters)");
        return;
    };

    let total = session.visible_indices().len();
    let category = match letter.kind {
        LetterKind::Vowel => "स्वर (Vowel)",
        LetterKind::Consonant => "व्यंजन (Consonant)",
        LetterKind::Unknown => "अन्य (Other)",
    };

    println!("+{}+", "-".repeat(CARD_WIDTH));
    println!("|{}|", centered(category, CARD_WIDTH));
    println!("|{}|", centered("", CARD_WIDTH));
    println!("|{}|", centered(&letter.symbol, CARD_WIDTH));
    println!("|{}|", centered(&letter.pronunciation, CARD_WIDTH));
    println!("|{}|", centered(&letter.english_approx, CARD_WIDTH));
    println!("+{}+", "-".repeat(CARD_WIDTH));
    if let Some(form) = &letter.dependent_form {
        println!("  dependent form: {}", form);
    }
    if let Some(example) = &letter.dependent_form_example {
        println!("  dependent form example: {}", example);
    }
    for line in letter.hint_lines() {
        println!("  {}", line);
    }
    if let Some(example) = &letter.example {
        println!("  example: {}", example);
    }
    if let Some(path) = letter.image_path() {
        println!("  image: {}", path);
    }
    println!(
        "  [{}/{}] filter: {}",
        session.position() + 1,
        total,
        session.filter().as_str()
    );
}

/// Center text in a field, accounting for display width
fn centered(text: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(text);
    if w >= width {
        return text.to_string();
    }
    let left = (width - w) / 2;
    let right = width - w - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}
