//! Human-readable console rendering of JSON records
//!
//! Each record arrives as one JSON line and leaves as
//! `<timestamp> <LVL> <caller> > <message> key=value...`.

use std::io::{self, Write};

use colored::Colorize;
use serde_json::{Map, Value};

use logwrapper_core_types::schema::{FIELD_CALLER, FIELD_LEVEL, FIELD_MESSAGE, FIELD_TIMESTAMP};

/// Writer that turns JSON records into console lines
#[derive(Debug)]
pub struct ConsoleWriter<W: Write> {
    out: W,
    no_color: bool,
}

impl<W: Write> ConsoleWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            no_color: false,
        }
    }

    /// Disable ANSI colors regardless of terminal detection
    pub fn without_color(mut self) -> Self {
        self.no_color = true;
        self
    }

    fn render(&self, mut fields: Map<String, Value>) -> String {
        let mut parts: Vec<String> = Vec::new();

        if let Some(timestamp) = fields.remove(FIELD_TIMESTAMP) {
            let timestamp = plain(&timestamp);
            parts.push(if self.no_color {
                timestamp
            } else {
                timestamp.dimmed().to_string()
            });
        }

        let level = fields.remove(FIELD_LEVEL).map(|v| plain(&v));
        parts.push(self.level_tag(level.as_deref()));

        if let Some(caller) = fields.remove(FIELD_CALLER) {
            let caller = plain(&caller);
            if self.no_color {
                parts.push(format!("{} >", caller));
            } else {
                parts.push(format!("{}{}", caller.bold(), " >".cyan()));
            }
        }

        if let Some(message) = fields.remove(FIELD_MESSAGE) {
            parts.push(plain(&message));
        }

        for (key, value) in &fields {
            let value = plain(value);
            if self.no_color {
                parts.push(format!("{}={}", key, value));
            } else {
                parts.push(format!("{}{}", format!("{}=", key).cyan(), value));
            }
        }

        let mut line = parts.join(" ");
        line.push('\n');
        line
    }

    fn level_tag(&self, level: Option<&str>) -> String {
        let tag = match level {
            Some("trace") => "TRC",
            Some("debug") => "DBG",
            Some("info") => "INF",
            Some("warn") => "WRN",
            Some("error") => "ERR",
            Some("fatal") => "FTL",
            Some("panic") => "PNC",
            _ => "???",
        };
        if self.no_color {
            return tag.to_string();
        }
        match level {
            Some("trace") => tag.magenta().to_string(),
            Some("debug") => tag.yellow().to_string(),
            Some("info") => tag.green().to_string(),
            Some("warn") => tag.red().to_string(),
            Some("error") | Some("fatal") | Some("panic") => tag.red().bold().to_string(),
            _ => tag.bold().to_string(),
        }
    }
}

fn plain(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl<W: Write> Write for ConsoleWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match serde_json::from_slice::<Map<String, Value>>(buf) {
            Ok(fields) => {
                let line = self.render(fields);
                self.out.write_all(line.as_bytes())?;
            }
            // Not a record; pass through untouched.
            Err(_) => self.out.write_all(buf)?,
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
