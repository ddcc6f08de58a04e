//! Ordered log of demonstration output lines.

use std::fmt;
use std::slice;

/// One line of the demonstration trace.
#[derive(Debug, Clone, PartialEq)]
pub enum TraceLine {
    /// `label: value`
    Value { label: String, value: String },
    /// Free-form text printed as-is.
    Text(String),
}

impl fmt::Display for TraceLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceLine::Value { label, value } => write!(f, "{label}: {value}"),
            TraceLine::Text(text) => f.write_str(text),
        }
    }
}

/// Trace lines in the order they were recorded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TraceLog {
    lines: Vec<TraceLine>,
}

impl TraceLog {
    #[inline]
    #[must_use]
    pub fn lines(&self) -> &[TraceLine] {
        &self.lines
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, TraceLine> {
        self.lines.iter()
    }

    pub fn value(&mut self, label: impl Into<String>, value: impl fmt::Display) {
        self.lines.push(TraceLine::Value {
            label: label.into(),
            value: value.to_string(),
        });
    }

    pub fn text(&mut self, text: impl Into<String>) {
        self.lines.push(TraceLine::Text(text.into()));
    }

    /// Rendered lines, one string per entry.
    #[must_use]
    pub fn rendered(&self) -> Vec<String> {
        self.iter().map(ToString::to_string).collect()
    }
}

impl fmt::Display for TraceLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a TraceLog {
    type Item = &'a TraceLine;
    type IntoIter = slice::Iter<'a, TraceLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
