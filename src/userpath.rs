use colored::Colorize;
use shellexpand::LookupError;
use std::{env::VarError, path::PathBuf, str::FromStr};

/// A destination folder typed by the user, with `~` and `$VARS` expanded.
///
/// The folder is not required to exist: it is created along with the
/// project, and an unusable path only shows up when writing.
#[derive(Clone, PartialEq, Eq)]
pub struct UserDir {
    pub path_buf: PathBuf,
}

#[derive(Debug)]
pub enum UserPathErr {
    ShellExpandError(LookupError<VarError>),
    Empty,
}

impl From<LookupError<VarError>> for UserPathErr {
    fn from(err: LookupError<VarError>) -> Self {
        Self::ShellExpandError(err)
    }
}

impl std::fmt::Debug for UserDir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.path_buf.fmt(f)
    }
}

impl FromStr for UserDir {
    type Err = UserPathErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(UserPathErr::Empty);
        }
        let expanded = shellexpand::full(s)?;
        Ok(UserDir {
            path_buf: PathBuf::from(expanded.into_owned()),
        })
    }
}

/// Tries to convert a given user path (as a string slice) to a `UserDir`.
/// If it fails, returns an error message.
pub fn to_user_path(path: &str) -> Result<UserDir, String> {
    UserDir::from_str(path).map_err(|e| match e {
        UserPathErr::ShellExpandError(e) => {
            format!(
                "{}\n{}",
                "Error resolving the given path:".red(),
                e.to_string().red()
            )
        }
        UserPathErr::Empty => format!(
            "{}\n{}",
            "A destination folder must be given.".red(),
            "The project is created inside this folder, in a new folder named after it."
                .dimmed()
        ),
    })
}
