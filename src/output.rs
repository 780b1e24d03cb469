//! Record output
//!
//! Writes records either as JSON lines or as one summary line per user
//! profile. Records are opaque to the rest of the crate; only this module
//! knows the randomuser.me field names, and it falls back to compact JSON
//! for anything else.

use crate::error::Result;
use crate::types::{OutputFormat, Record};
use std::io::Write;

/// Writes records in the chosen format
#[derive(Debug)]
pub struct RecordWriter<W: Write> {
    out: W,
    format: OutputFormat,
}

impl<W: Write> RecordWriter<W> {
    /// Create a writer
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    /// Write one record; `index` is its zero-based position in the list
    pub fn write(&mut self, index: usize, record: &Record) -> Result<()> {
        match self.format {
            OutputFormat::Json => {
                writeln!(self.out, "{}", serde_json::to_string(record)?)?;
            }
            OutputFormat::Pretty => {
                writeln!(self.out, "{:>4}. {}", index + 1, summarize(record))?;
            }
        }
        Ok(())
    }

    /// Write a run of records starting at `first_index`
    pub fn write_all(&mut self, first_index: usize, records: &[Record]) -> Result<()> {
        for (offset, record) in records.iter().enumerate() {
            self.write(first_index + offset, record)?;
        }
        Ok(())
    }

    /// Write a free-form line
    pub fn line(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{text}")?;
        Ok(())
    }

    /// Flush the underlying writer
    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

/// One-line description of a user profile
pub fn summarize(record: &Record) -> String {
    let name = &record["name"];
    let full_name = ["title", "first", "last"]
        .iter()
        .filter_map(|field| name[*field].as_str())
        .collect::<Vec<_>>()
        .join(" ");

    if full_name.is_empty() {
        return record.to_string();
    }

    let mut line = full_name;
    if let Some(email) = record["email"].as_str() {
        line.push_str(&format!(" <{email}>"));
    }
    let location = &record["location"];
    if let (Some(city), Some(country)) =
        (location["city"].as_str(), location["country"].as_str())
    {
        line.push_str(&format!(" - {city}, {country}"));
    }
    line
}
