extern crate clap;

use clap::{crate_version, App, AppSettings, Arg, SubCommand};

mod cmd;
mod config;
mod external;
mod extras;
mod generator;
mod layout;
mod logger;
mod manifest;
mod provision;
mod template;
mod templates;
mod userbool;
mod userpath;
mod verbosity;

use external::Toolchain;

pub fn app() -> App<'static, 'static> {
    App::new("port-scaffolder")
        .version(crate_version!())
        .about("Quickly scaffold new Python projects from built-in templates.")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .arg(
            Arg::with_name(config::VERBOSE_ARG)
                .short("v")
                .multiple(true)
                .help("Sets the level of verbosity")
                .global(true),
        )
        .arg(
            Arg::with_name(config::NO_COLOR_ARG)
                .long("no-color")
                .help("Disables colored output")
                .global(true),
        )
        .subcommand(
            SubCommand::with_name(cmd::list::CMD_STR)
                .about("Lists the available project templates.")
                .arg(
                    Arg::with_name(cmd::JSON_ARG)
                        .long("json")
                        .help("Prints the list as JSON"),
                ),
        )
        .subcommand(
            SubCommand::with_name(cmd::catalog::CMD_STR)
                .about("Lists the optional files and extra libraries.")
                .arg(
                    Arg::with_name(cmd::JSON_ARG)
                        .long("json")
                        .help("Prints the catalog as JSON"),
                ),
        )
        .subcommand(
            SubCommand::with_name(cmd::about::CMD_STR).about("Shows version and platform information."),
        )
        .subcommand(
            SubCommand::with_name(cmd::new::CMD_STR)
                .about("Creates a new project.")
                .arg(
                    Arg::with_name(cmd::new::TEMPLATE_ARG)
                        .help("The project template to use")
                        .long_help(
                            "The project template to use, given by key or by label. \
                            Use the `list` command to find what templates are available.",
                        )
                        .required(true),
                )
                .arg(
                    Arg::with_name(cmd::new::NAME_ARG)
                        .help("The name for the new project")
                        .long_help(
                            "The name for the new project. \
                            This will be the name of the created folder.",
                        )
                        .required(true),
                )
                .arg(
                    Arg::with_name(cmd::new::LOCATION_ARG)
                        .default_value(".")
                        .help("Where to create the new project")
                        .long_help(
                            "Where to create the project. Defaults to the current \
                            directory. This argument specifies the *parent* directory \
                            to the project, as a new folder will be created for the project.",
                        )
                        .validator(|arg_str| userpath::to_user_path(&arg_str).map(|_| ())),
                )
                .arg(
                    Arg::with_name(cmd::new::NO_VENV_ARG)
                        .long("no-venv")
                        .help("Does not create a virtual environment"),
                )
                .arg(
                    Arg::with_name(cmd::new::NO_REQUIREMENTS_ARG)
                        .long("no-requirements")
                        .help("Does not write requirements.txt"),
                )
                .arg(
                    Arg::with_name(cmd::new::NO_GIT_ARG)
                        .long("no-git")
                        .help("Does not initialize a git repository"),
                )
                .arg(
                    Arg::with_name(cmd::new::NO_INSTALL_ARG)
                        .long("no-install")
                        .help("Does not install the requirements into the virtual environment"),
                )
                .arg(
                    Arg::with_name(cmd::new::FILE_ARG)
                        .long("file")
                        .takes_value(true)
                        .multiple(true)
                        .number_of_values(1)
                        .possible_values(extras::FILE_NAMES)
                        .conflicts_with(cmd::new::NO_FILES_ARG)
                        .help("Optional file to add; may be repeated (default: all of them)"),
                )
                .arg(
                    Arg::with_name(cmd::new::NO_FILES_ARG)
                        .long("no-files")
                        .help("Adds none of the optional files"),
                )
                .arg(
                    Arg::with_name(cmd::new::LIB_ARG)
                        .long("lib")
                        .takes_value(true)
                        .multiple(true)
                        .number_of_values(1)
                        .possible_values(manifest::LIBRARIES)
                        .hide_possible_values(true)
                        .help("Extra library for requirements.txt; may be repeated")
                        .long_help(
                            "Extra library for requirements.txt; may be repeated. \
                            Use the `catalog` command to see the available libraries.",
                        ),
                )
                .arg(
                    Arg::with_name(cmd::new::FORCE_ARG)
                        .short("f")
                        .long("force")
                        .help("Replaces an existing project folder without asking"),
                )
                .arg(
                    Arg::with_name(config::PYTHON_ARG)
                        .long("python")
                        .takes_value(true)
                        .env(config::PYTHON_ENV)
                        .default_value(Toolchain::default_python())
                        .help("Interpreter used for the virtual environment and Django"),
                )
                .arg(
                    Arg::with_name(config::GIT_ARG)
                        .long("git")
                        .takes_value(true)
                        .env(config::GIT_ENV)
                        .default_value("git")
                        .help("Git executable used to initialize the repository"),
                ),
        )
}

fn main() {
    let matches = app().get_matches();

    let settings = config::Settings::from_matches(&matches);
    if !settings.colored {
        colored::control::set_override(false);
    }
    if let Err(err) = logger::initialize(settings.verbosity.into(), settings.colored) {
        eprintln!("Could not start logging: {}", err);
        std::process::exit(exitcode::SOFTWARE);
    }
    log::debug!("{:?}", settings);

    match matches.subcommand() {
        (cmd::new::CMD_STR, Some(sub_matches)) => cmd::new::new(sub_matches),
        (cmd::list::CMD_STR, Some(sub_matches)) => {
            cmd::list::list(sub_matches.is_present(cmd::JSON_ARG))
        }
        (cmd::catalog::CMD_STR, Some(sub_matches)) => {
            cmd::catalog::catalog(sub_matches.is_present(cmd::JSON_ARG))
        }
        (cmd::about::CMD_STR, Some(_)) => cmd::about::about(),
        (name, _) => unreachable!("Unimplemented subcommand {}", name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_library_is_rejected() {
        let result = app().get_matches_from_safe(vec![
            "port-scaffolder",
            "new",
            "python_script",
            "demo",
            "--lib",
            "leftpad",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn file_and_no_files_conflict() {
        let result = app().get_matches_from_safe(vec![
            "port-scaffolder",
            "new",
            "python_script",
            "demo",
            "--file",
            "LICENSE",
            "--no-files",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn subcommand_is_required() {
        assert!(app().get_matches_from_safe(vec!["port-scaffolder"]).is_err());
    }
}
