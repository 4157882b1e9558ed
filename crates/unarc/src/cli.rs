use std::path::{Path, PathBuf};

use clap::Parser;
use unarc_archive::ArchiveType;
use unarc_core::RunContext;

use crate::exit_codes::Exit;

const TYPE_HELP: &str = "The archive type. Determined from the archive filename if not specified \
                         [possible values: .tar, .tar.gz, .tgz, .tar.bz2, .tbz2, .tbz, .tar.xz, \
                         .txz, .zip]";

#[derive(Clone, Debug, Parser)]
#[command(
    name = "unarc",
    version = env!("CARGO_PKG_VERSION"),
    about = "A tool to remove archive contents from a target directory.",
    long_about = None
)]
pub struct Cli {
    /// Enable verbose mode.
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable dry run mode. No files will be removed from target directory.
    #[arg(long)]
    pub dry_run: bool,

    /// Remove directories left empty once their files are gone.
    #[arg(long)]
    pub remove_dirs: bool,

    /// Only remove verified files.
    #[arg(long)]
    pub verify: bool,

    /// Disable color output in verbose mode.
    #[arg(long)]
    pub no_color: bool,

    #[arg(short = 't', long = "type", value_name = "TYPE", help = TYPE_HELP)]
    pub archive_type: Option<String>,

    /// The filename of the archive that will be compared to the target directory.
    #[arg(value_name = "ARCHIVE", value_parser = existing_file)]
    pub archive: PathBuf,

    /// The target directory from which to remove files.
    #[arg(value_name = "TARGET", value_parser = existing_dir)]
    pub target: PathBuf,
}

impl Cli {
    pub fn context(&self) -> RunContext {
        RunContext::new(&self.target)
            .dry_run(self.dry_run)
            .verify(self.verify)
            .remove_dirs(self.remove_dirs)
    }

    pub fn report_style(&self) -> ReportStyle {
        ReportStyle {
            verbose: self.verbose,
            color:   !self.no_color,
        }
    }

    /// The explicit `--type` wins; otherwise the archive's file name decides.
    pub fn resolve_type(&self) -> Result<ArchiveType, TypeError> {
        match &self.archive_type {
            Some(token) => token
                .parse()
                .map_err(|_| TypeError::Unrecognized(token.clone())),
            None => self
                .archive
                .file_name()
                .and_then(|name| ArchiveType::from_file_name(&name.to_string_lossy()))
                .ok_or(TypeError::Undetermined),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReportStyle {
    pub verbose: bool,
    pub color:   bool,
}

#[derive(Debug, thiserror::Error)]
pub enum TypeError {
    #[error("Unable to determine the file's archive type. Specify with the --type argument.")]
    Undetermined,
    #[error("The type '{0}' specified with the --type argument was not recognized.")]
    Unrecognized(String),
}

impl TypeError {
    pub fn exit(&self) -> Exit {
        match self {
            Self::Undetermined => Exit::TypeUndetermined,
            Self::Unrecognized(_) => Exit::TypeUnrecognized,
        }
    }
}

fn existing_file(value: &str) -> Result<PathBuf, String> {
    let path = Path::new(value);
    if path.is_file() {
        Ok(path.to_path_buf())
    } else if path.exists() {
        Err(format!("'{value}' is not a file"))
    } else {
        Err(format!("'{value}' does not exist"))
    }
}

fn existing_dir(value: &str) -> Result<PathBuf, String> {
    let path = Path::new(value);
    if path.is_dir() {
        Ok(path.to_path_buf())
    } else if path.exists() {
        Err(format!("'{value}' is not a directory"))
    } else {
        Err(format!("'{value}' does not exist"))
    }
}
