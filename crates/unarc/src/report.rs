use std::io::{self, Write};

use console::style;
use unarc_core::{
    DirSkipReason, DirectoryOutcome, RemovalOutcome, Reporter, SkipReason, Summary,
};

use crate::cli::ReportStyle;

/// Writes the per-entry verbose report.
///
/// The first write failure is kept and returned by [`ConsoleReporter::finish`];
/// later outcomes are dropped.
pub struct ConsoleReporter<W: Write> {
    out:   W,
    style: ReportStyle,
    error: Option<io::Error>,
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W, style: ReportStyle) -> Self {
        Self {
            out,
            style,
            error: None,
        }
    }

    pub fn summary(&mut self, summary: &Summary) {
        self.emit(|out, _| writeln!(out, "{summary}"));
    }

    pub fn finish(mut self) -> io::Result<()> {
        match self.error.take() {
            Some(err) => Err(err),
            None => self.out.flush(),
        }
    }

    fn emit(&mut self, write: impl FnOnce(&mut W, &Painter) -> io::Result<()>) {
        if !self.style.verbose || self.error.is_some() {
            return;
        }
        let painter = Painter(self.style.color);
        if let Err(err) = write(&mut self.out, &painter) {
            self.error = Some(err);
        }
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn file(&mut self, outcome: &RemovalOutcome) {
        let reason = match outcome.skip {
            Some(SkipReason::VerificationFailed) => " (file failed verification)",
            Some(SkipReason::NotFound) => " (file not found in target directory)",
            None => "",
        };
        self.emit(|out, paint| {
            writeln!(out, "File: {}", paint.path(&outcome.path))?;
            writeln!(out, "      Exists : {}", paint.flag(outcome.existed))?;
            writeln!(out, "      Removed: {}{reason}", paint.flag(outcome.removed))
        });
    }

    fn directory(&mut self, outcome: &DirectoryOutcome) {
        let reason = match outcome.skip {
            Some(DirSkipReason::NotEmpty) => " (directory not empty)",
            Some(DirSkipReason::NotFound) => " (directory not found in target directory)",
            None => "",
        };
        self.emit(|out, paint| {
            writeln!(out, "Directory: {}", paint.path(&outcome.path))?;
            writeln!(out, "      Exists : {}", paint.flag(outcome.exists))?;
            writeln!(out, "      Empty  : {}", paint.flag(outcome.empty))?;
            writeln!(out, "      Removed: {}{reason}", paint.flag(outcome.removed))
        });
    }
}

struct Painter(bool);

impl Painter {
    fn flag(&self, value: bool) -> String {
        let text = if value { "Yes" } else { "No" };
        match (self.0, value) {
            (false, _) => text.to_string(),
            (true, true) => style(text).green().to_string(),
            (true, false) => style(text).red().to_string(),
        }
    }

    fn path(&self, path: &str) -> String {
        if self.0 {
            style(path).cyan().to_string()
        } else {
            path.to_string()
        }
    }
}
