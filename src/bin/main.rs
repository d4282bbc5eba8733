use clap::Parser;
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};
use finder_core::{CultureTag, FinderConfig, FinderEngine, RankedTranslation};
use std::io::{stdin, stdout, Write};
use std::path::PathBuf;

/// Interactive console: type a phrase, see the closest existing translations.
#[derive(Parser)]
#[command(name = "finder", version)]
struct Args {
    /// Translation store to open (overrides the config file)
    #[arg(long)]
    store: Option<PathBuf>,
    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    let mut config = FinderConfig::load_or_default(args.config.as_deref())?;
    if let Some(store) = args.store {
        config.store_path = Some(store);
    }
    let count = config.suggestion_count;
    let mut engine = FinderEngine::from_config(config)?;
    let mut culture = engine.default_culture();
    let mut query = String::new();
    let mut status = String::from("Type a phrase to search. 'exit' to save and quit.");

    loop {
        let suggestions = match &culture {
            Some(c) => engine.get_suggestions(c, &query, count)?,
            None => Vec::new(),
        };
        print_ui(&engine, culture.as_ref(), &query, &suggestions, &status)?;

        let mut input = String::new();
        if stdin().read_line(&mut input)? == 0 {
            break;
        }
        let cmd = input.trim_end_matches(['\r', '\n']);

        status.clear();
        match cmd {
            "exit" => break,
            s if s.starts_with(":culture ") => match CultureTag::parse(&s[9..]) {
                Ok(tag) if engine.store().catalog(&tag).is_some() => culture = Some(tag),
                Ok(tag) => status = format!("No translations loaded for {tag}."),
                Err(e) => status = e.to_string(),
            },
            s if s.starts_with(':') && s.len() > 1 => {
                // Select suggestion :1, :2 etc
                match s[1..].parse::<usize>() {
                    Ok(n) if n > 0 && n <= suggestions.len() => {
                        let chosen = &suggestions[n - 1].translation;
                        status = format!("Use key `{}` ({})", chosen.key, chosen.text);
                    }
                    _ => status = format!("No suggestion {s}."),
                }
            }
            s if s.starts_with('+') => {
                let Some(c) = culture.clone() else {
                    status = "Select a culture first.".to_string();
                    continue;
                };
                let (key, text) = s[1..].split_once(' ').unwrap_or((&s[1..], ""));
                status = match engine.add_translation(&c, key, text) {
                    Ok(()) => format!("Added `{key}`."),
                    Err(e) => e.to_string(),
                };
            }
            s => query = s.to_string(),
        }
    }

    println!("\nSaving translations...");
    match engine.save() {
        Ok(()) => match engine.store_path() {
            Some(path) => println!("Saved to '{}'", path.display()),
            None => println!("No store path configured, nothing saved."),
        },
        Err(e) => eprintln!("[ERROR] Could not save translations: {e}"),
    }
    Ok(())
}

fn print_ui(
    engine: &FinderEngine,
    culture: Option<&CultureTag>,
    query: &str,
    suggestions: &[RankedTranslation],
    status: &str,
) -> std::io::Result<()> {
    let mut out = stdout();
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    writeln!(out, "{}", "Translation Finder".bold())?;
    writeln!(out, "---------------------------------------------------------------")?;
    writeln!(out, "':culture <tag>' switch, ':1' pick, '+Key text' add, 'exit' quit.\n")?;

    let cultures: Vec<String> = engine.store().cultures().map(|c| c.to_string()).collect();
    writeln!(out, "Cultures: {}", cultures.join(", "))?;
    match culture {
        Some(c) => writeln!(out, "Culture:  {}", c.to_string().green())?,
        None => writeln!(out, "Culture:  {}", "none loaded".red())?,
    }
    writeln!(out, "Query:    [{query}]")?;

    if suggestions.is_empty() {
        writeln!(out, "\nNo suggestions found.")?;
    } else {
        writeln!(out, "\nClosest translations:")?;
        for (i, ranked) in suggestions.iter().enumerate() {
            writeln!(
                out,
                "  :{}: {} = {} {}",
                i + 1,
                ranked.translation.key.as_str().cyan(),
                ranked.translation.text,
                format!("({:.2})", ranked.distance).dark_grey()
            )?;
        }
    }
    if !status.is_empty() {
        writeln!(out, "\n{}", status.yellow())?;
    }
    write!(out, "\n> ")?;
    out.flush()
}
