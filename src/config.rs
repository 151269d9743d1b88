use crate::{external::Toolchain, verbosity::Verbosity};
use clap::ArgMatches;
use std::path::PathBuf;

pub const VERBOSE_ARG: &str = "v";
pub const NO_COLOR_ARG: &str = "no-color";
pub const PYTHON_ARG: &str = "python";
pub const GIT_ARG: &str = "git";

pub const PYTHON_ENV: &str = "PORT_SCAFFOLDER_PYTHON";
pub const GIT_ENV: &str = "PORT_SCAFFOLDER_GIT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub verbosity: Verbosity,
    pub colored: bool,
}

impl Settings {
    /// Global flags may be given before or after the subcommand name, so
    /// both levels are looked at.
    pub fn from_matches(matches: &ArgMatches) -> Self {
        let (_, sub_matches) = matches.subcommand();
        let occurrences = matches
            .occurrences_of(VERBOSE_ARG)
            .max(sub_matches.map_or(0, |m| m.occurrences_of(VERBOSE_ARG)));
        let no_color = matches.is_present(NO_COLOR_ARG)
            || sub_matches.map_or(false, |m| m.is_present(NO_COLOR_ARG));
        Settings {
            verbosity: Verbosity::from(occurrences),
            colored: !no_color,
        }
    }
}

/// The interpreter and git executable to use for a `new` run.
pub fn toolchain(matches: &ArgMatches) -> Toolchain {
    let defaults = Toolchain::default();
    Toolchain {
        python: matches
            .value_of(PYTHON_ARG)
            .map(PathBuf::from)
            .unwrap_or(defaults.python),
        git: matches
            .value_of(GIT_ARG)
            .map(PathBuf::from)
            .unwrap_or(defaults.git),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_is_read_on_both_sides_of_the_subcommand() {
        let matches = crate::app().get_matches_from(vec!["port-scaffolder", "-vv", "list"]);
        let settings = Settings::from_matches(&matches);
        assert_eq!(settings.verbosity, Verbosity::Very);
        assert!(settings.colored);

        let matches = crate::app().get_matches_from(vec!["port-scaffolder", "list", "-v"]);
        assert_eq!(Settings::from_matches(&matches).verbosity, Verbosity::Some);
    }

    #[test]
    fn no_color_after_subcommand() {
        let matches =
            crate::app().get_matches_from(vec!["port-scaffolder", "catalog", "--no-color"]);
        assert!(!Settings::from_matches(&matches).colored);
    }

    #[test]
    fn toolchain_from_flags() {
        let matches = crate::app().get_matches_from(vec![
            "port-scaffolder",
            "new",
            "python_script",
            "demo",
            "--python",
            "/opt/py/bin/python3.11",
            "--git",
            "/usr/local/bin/git",
        ]);
        let (_, sub_matches) = matches.subcommand();
        let toolchain = toolchain(sub_matches.unwrap());
        assert_eq!(toolchain.python, PathBuf::from("/opt/py/bin/python3.11"));
        assert_eq!(toolchain.git, PathBuf::from("/usr/local/bin/git"));
    }
}
