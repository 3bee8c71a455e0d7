//! Output formatting for verified parts

use crate::runner::PartOutcome;
use chrono::TimeDelta;
use std::io::{self, Write};
use tracing::{debug, info};

/// Writes pass confirmations to stdout (or any writer) and timing to the log
pub struct OutputFormatter<W: Write> {
    out: W,
    start_time: std::time::Instant,
}

impl OutputFormatter<io::Stdout> {
    /// Formatter writing to the process stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> OutputFormatter<W> {
    /// Create a new output formatter
    pub fn new(out: W) -> Self {
        Self {
            out,
            start_time: std::time::Instant::now(),
        }
    }

    /// Confirm a verified part
    pub fn print_pass(&mut self, outcome: &PartOutcome) -> io::Result<()> {
        writeln!(self.out, "Part {} passed", outcome.part)?;
        self.out.flush()?;
        debug!(
            part = outcome.part,
            answer = %outcome.answer,
            parse = %format_duration(outcome.parse_duration),
            solve = %format_duration(outcome.solve_duration),
            "part verified"
        );
        Ok(())
    }

    /// Log total compute and wall-clock time after all parts passed
    pub fn log_summary(&self, outcomes: &[PartOutcome]) {
        let total_parse_time: TimeDelta = outcomes.iter().map(|o| o.parse_duration).sum();
        let total_solve_time: TimeDelta = outcomes.iter().map(|o| o.solve_duration).sum();
        info!(
            parts = outcomes.len(),
            parse = %format_duration(total_parse_time),
            solve = %format_duration(total_solve_time),
            elapsed = %format_std_duration(self.start_time.elapsed()),
            "all parts passed"
        );
    }

    /// Consume the formatter, returning the writer
    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Format a TimeDelta for display
pub fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

/// Format a std::time::Duration for display (used for wall-clock time)
fn format_std_duration(d: std::time::Duration) -> String {
    let micros = d.as_micros();
    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}
