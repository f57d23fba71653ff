//! Report output
//!
//! Every probe ends as exactly one line on the report sink. The reporter
//! also keeps a tally so the run can close with a summary.

use crate::core::constants::ERROR_BODY_EXCERPT;
use crate::core::provider::ProviderError;
use std::io::{self, Write};

/// Classified result of a single probe
#[derive(Debug)]
pub enum ProbeOutcome {
    /// 200 with a reply; holds the first reply text
    Success(String),

    /// 200 with no reply at all
    Empty,

    Failure(ProviderError),
}

impl ProbeOutcome {
    pub fn from_result(result: Result<Option<String>, ProviderError>) -> Self {
        match result {
            Ok(Some(text)) => ProbeOutcome::Success(text),
            Ok(None) => ProbeOutcome::Empty,
            Err(e) => ProbeOutcome::Failure(e),
        }
    }
}

/// Running counts of probe outcomes
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub succeeded: usize,
    pub empty: usize,
    pub failed: usize,
}

/// Line-oriented writer for the human-readable report
pub struct Reporter<W: Write> {
    out: W,
    tally: Tally,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            tally: Tally::default(),
        }
    }

    pub fn line(&mut self, text: impl AsRef<str>) -> io::Result<()> {
        writeln!(self.out, "{}", text.as_ref())
    }

    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    /// Print the single result line for a chat probe
    pub fn outcome(&mut self, label: &str, outcome: &ProbeOutcome) -> io::Result<()> {
        match outcome {
            ProbeOutcome::Success(text) => {
                self.tally.succeeded += 1;
                writeln!(self.out, "✅ {}: {}", label, text.trim())
            }
            ProbeOutcome::Empty => {
                self.tally.empty += 1;
                writeln!(self.out, "⚠️  {}: Empty response", label)
            }
            ProbeOutcome::Failure(ProviderError::Http { status, body }) => {
                self.tally.failed += 1;
                writeln!(
                    self.out,
                    "❌ {}: {} - {}",
                    label,
                    status,
                    truncate_chars(body, ERROR_BODY_EXCERPT)
                )
            }
            ProbeOutcome::Failure(err) => {
                self.tally.failed += 1;
                writeln!(self.out, "❌ {}: Error - {}", label, err)
            }
        }
    }

    /// Count a result that was reported with a custom line
    pub fn record(&mut self, ok: bool) {
        if ok {
            self.tally.succeeded += 1;
        } else {
            self.tally.failed += 1;
        }
    }

    pub fn summary(&mut self) -> io::Result<()> {
        let Tally {
            succeeded,
            empty,
            failed,
        } = self.tally;
        writeln!(
            self.out,
            "📊 Summary: {} succeeded, {} empty, {} failed",
            succeeded, empty, failed
        )
    }

    pub fn tally(&self) -> Tally {
        self.tally
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

/// First `max` characters of `text`
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Last `max` characters of `text`
fn tail_chars(text: &str, max: usize) -> &str {
    let count = text.chars().count();
    if count <= max {
        return text;
    }
    match text.char_indices().nth(count - max) {
        Some((idx, _)) => &text[idx..],
        None => text,
    }
}

/// Key shortened for section headers: `sk-ant-api...`
pub fn key_prefix(key: &str) -> String {
    format!("{}...", truncate_chars(key, 10))
}

/// Key shortened for the environment check: `sk-ant-api...wxyz`
pub fn mask_key(key: &str) -> String {
    format!("{}...{}", truncate_chars(key, 10), tail_chars(key, 4))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn render(outcome: ProbeOutcome) -> (String, Tally) {
        let mut reporter = Reporter::new(Vec::new());
        reporter.outcome("gemini-1.5-pro", &outcome).unwrap();
        let tally = reporter.tally();
        (String::from_utf8(reporter.into_inner()).unwrap(), tally)
    }

    #[test]
    fn test_success_line_trims_reply() {
        let (out, tally) = render(ProbeOutcome::Success("\n OK \n".to_string()));
        assert_eq!(out, "✅ gemini-1.5-pro: OK\n");
        assert_eq!(tally.succeeded, 1);
    }

    #[test]
    fn test_empty_line() {
        let (out, tally) = render(ProbeOutcome::Empty);
        assert_eq!(out, "⚠️  gemini-1.5-pro: Empty response\n");
        assert_eq!(tally.empty, 1);
        assert_eq!(tally.failed, 0);
    }

    #[test]
    fn test_http_failure_truncates_body() {
        let body = "x".repeat(250);
        let (out, tally) = render(ProbeOutcome::Failure(ProviderError::Http {
            status: 404,
            body,
        }));
        assert_eq!(out, format!("❌ gemini-1.5-pro: 404 - {}\n", "x".repeat(100)));
        assert_eq!(tally.failed, 1);
    }

    #[test]
    fn test_timeout_failure_line() {
        let (out, _) = render(ProbeOutcome::Failure(ProviderError::Timeout(
            Duration::from_secs(30),
        )));
        assert_eq!(
            out,
            "❌ gemini-1.5-pro: Error - request timed out after 30s\n"
        );
    }

    #[test]
    fn test_from_result() {
        assert!(matches!(
            ProbeOutcome::from_result(Ok(Some("OK".to_string()))),
            ProbeOutcome::Success(ref t) if t == "OK"
        ));
        assert!(matches!(ProbeOutcome::from_result(Ok(None)), ProbeOutcome::Empty));
        assert!(matches!(
            ProbeOutcome::from_result(Err(ProviderError::Transport("refused".into()))),
            ProbeOutcome::Failure(_)
        ));
    }

    #[test]
    fn test_truncation_is_char_safe() {
        assert_eq!(truncate_chars("héllo wörld", 5), "héllo");
        assert_eq!(truncate_chars("short", 100), "short");
        assert_eq!(tail_chars("héllo wörld", 4), "örld");
        assert_eq!(tail_chars("ab", 4), "ab");
    }

    #[test]
    fn test_key_masks() {
        let key = "sk-ant-REDACTED";
        assert_eq!(key_prefix(key), "sk-ant-api...");
        assert_eq!(mask_key(key), "sk-ant-api...wxyz");
        assert_eq!(mask_key("short"), "short...hort");
    }

    #[test]
    fn test_summary_line() {
        let mut reporter = Reporter::new(Vec::new());
        reporter.record(true);
        reporter.record(false);
        reporter.outcome("m", &ProbeOutcome::Empty).unwrap();
        reporter.summary().unwrap();
        let out = String::from_utf8(reporter.into_inner()).unwrap();
        assert!(out.ends_with("📊 Summary: 1 succeeded, 1 empty, 1 failed\n"));
    }
}
