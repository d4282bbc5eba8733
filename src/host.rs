// File: src/host.rs
//! Line protocol spoken with an editor plugin over stdin/stdout.
//!
//! One command per line: a command word, a space, then tab-separated fields.
//!
//! ```text
//! CULTURE pl-PL            -> OK
//! QUERY Save the file      -> CANDIDATE 0\t0.940\tSaveFile\tSave file ... END
//! ADD Close\tClose         -> OK
//! UPDATE Close\tCloseTab\tClose tab
//! SAVE
//! EXIT
//! ```
use crate::core::engine::FinderEngine;
use crate::core::types::CultureTag;
use crate::error::{FinderError, Result};

/// Output lines for one command, plus whether the host should stop.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct HostReply {
    pub lines: Vec<String>,
    pub exit: bool,
}

impl HostReply {
    fn line(line: impl Into<String>) -> Self {
        Self {
            lines: vec![line.into()],
            exit: false,
        }
    }

    fn from_result(result: Result<()>) -> Self {
        match result {
            Ok(()) => Self::line("OK"),
            Err(e) => Self::line(format!("ERROR {e}")),
        }
    }
}

pub struct HostSession {
    engine: FinderEngine,
    culture: Option<CultureTag>,
}

impl HostSession {
    pub fn new(engine: FinderEngine) -> Self {
        let culture = engine.default_culture();
        Self { engine, culture }
    }

    pub fn engine(&self) -> &FinderEngine {
        &self.engine
    }

    pub fn culture(&self) -> Option<&CultureTag> {
        self.culture.as_ref()
    }

    pub fn handle_line(&mut self, line: &str) -> HostReply {
        let line = line.trim_end_matches(['\r', '\n']);
        let (command, args) = line.split_once(' ').unwrap_or((line, ""));
        tracing::debug!(command, "host command");

        match command {
            "CULTURE" => HostReply::from_result(self.select_culture(args)),
            "QUERY" => match self.query(args) {
                Ok(lines) => HostReply { lines, exit: false },
                Err(e) => HostReply::line(format!("ERROR {e}")),
            },
            "ADD" => HostReply::from_result(self.add(args)),
            "UPDATE" => HostReply::from_result(self.update(args)),
            "SAVE" => HostReply::from_result(self.engine.save()),
            "EXIT" => {
                let mut reply = HostReply::from_result(self.engine.save());
                reply.exit = true;
                reply
            }
            _ => {
                tracing::warn!(line, "unknown host command");
                HostReply::line("ERROR unknown command")
            }
        }
    }

    fn select_culture(&mut self, raw: &str) -> Result<()> {
        let culture = CultureTag::parse(raw)?;
        if self.engine.store().catalog(&culture).is_none() {
            return Err(FinderError::UnknownCulture(culture.as_str().to_string()));
        }
        self.culture = Some(culture);
        Ok(())
    }

    fn current_culture(&self) -> Result<&CultureTag> {
        self.culture
            .as_ref()
            .ok_or(FinderError::NoCultureSelected)
    }

    fn query(&self, text: &str) -> Result<Vec<String>> {
        let culture = self.current_culture()?;
        let count = self.engine.config().suggestion_count;
        let mut lines: Vec<String> = self
            .engine
            .get_suggestions(culture, text, count)?
            .into_iter()
            .enumerate()
            .map(|(i, ranked)| {
                format!(
                    "CANDIDATE {i}\t{:.3}\t{}\t{}",
                    ranked.distance,
                    ranked.translation.key,
                    escape_field(&ranked.translation.text)
                )
            })
            .collect();
        lines.push("END".to_string());
        Ok(lines)
    }

    fn add(&mut self, args: &str) -> Result<()> {
        let culture = self.current_culture()?.clone();
        let (key, text) = args.split_once('\t').ok_or(FinderError::MalformedCommand {
            command: "ADD",
            expected: "<key>\\t<text>",
        })?;
        self.engine.add_translation(&culture, key, &unescape_field(text))
    }

    fn update(&mut self, args: &str) -> Result<()> {
        let culture = self.current_culture()?.clone();
        let fields: Vec<&str> = args.splitn(3, '\t').collect();
        let [original, new_key, text] = fields.as_slice() else {
            return Err(FinderError::MalformedCommand {
                command: "UPDATE",
                expected: "<old>\\t<new>\\t<text>",
            });
        };
        self.engine
            .update_translation(&culture, original, new_key, &unescape_field(text))
    }
}

/// Texts travel on one line; tabs and newlines are escaped.
fn escape_field(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('\t', "\\t")
        .replace('\n', "\\n")
}

fn unescape_field(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}
