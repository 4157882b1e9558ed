use std::path::{Path, PathBuf};

/// Everything a run needs to decide and act, built once from configuration.
#[derive(Clone, Debug)]
pub struct RunContext {
    target:      PathBuf,
    dry_run:     bool,
    verify:      bool,
    remove_dirs: bool,
}

impl RunContext {
    pub fn new(target: impl Into<PathBuf>) -> Self {
        Self {
            target:      target.into(),
            dry_run:     false,
            verify:      false,
            remove_dirs: false,
        }
    }

    /// Decide and report, but never touch the filesystem.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Only remove files whose content digest matches the archive entry.
    pub fn verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    /// Sweep directories left empty after the file pass.
    pub fn remove_dirs(mut self, remove_dirs: bool) -> Self {
        self.remove_dirs = remove_dirs;
        self
    }

    pub fn target(&self) -> &Path { &self.target }

    pub fn is_dry_run(&self) -> bool { self.dry_run }

    pub fn is_verifying(&self) -> bool { self.verify }

    pub fn removes_dirs(&self) -> bool { self.remove_dirs }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_destructive_but_unverified() {
        let ctx = RunContext::new("/opt/app");
        assert_eq!(ctx.target(), Path::new("/opt/app"));
        assert!(!ctx.is_dry_run());
        assert!(!ctx.is_verifying());
        assert!(!ctx.removes_dirs());
    }

    #[test]
    fn builder_sets_flags() {
        let ctx = RunContext::new("t").dry_run(true).verify(true).remove_dirs(true);
        assert!(ctx.is_dry_run());
        assert!(ctx.is_verifying());
        assert!(ctx.removes_dirs());
    }
}
