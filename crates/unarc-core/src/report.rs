use crate::outcome::{DirectoryOutcome, RemovalOutcome};

/// Receives each outcome as soon as it is decided.
pub trait Reporter {
    fn file(&mut self, outcome: &RemovalOutcome);

    fn directory(&mut self, outcome: &DirectoryOutcome);
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn file(&mut self, outcome: &RemovalOutcome) { (**self).file(outcome) }

    fn directory(&mut self, outcome: &DirectoryOutcome) { (**self).directory(outcome) }
}

pub struct NullReporter;

impl Reporter for NullReporter {
    fn file(&mut self, _outcome: &RemovalOutcome) {}

    fn directory(&mut self, _outcome: &DirectoryOutcome) {}
}

/// Keeps every outcome in report order.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    pub files:       Vec<RemovalOutcome>,
    pub directories: Vec<DirectoryOutcome>,
}

impl Reporter for Recorder {
    fn file(&mut self, outcome: &RemovalOutcome) { self.files.push(outcome.clone()) }

    fn directory(&mut self, outcome: &DirectoryOutcome) { self.directories.push(outcome.clone()) }
}
