use crate::{
    config,
    external::SystemRunner,
    extras::ExtraFile,
    generator::{ProjectRequest, Scaffolder},
    template::TemplateKind,
    templates::Registry,
    userbool::UserBool,
    userpath::to_user_path,
};
use clap::ArgMatches;
use colored::Colorize;
use read_input::prelude::*;
use std::path::Path;

pub const CMD_STR: &str = "new";
pub const TEMPLATE_ARG: &str = "TEMPLATE";
pub const NAME_ARG: &str = "NAME";
pub const LOCATION_ARG: &str = "LOCATION";
pub const NO_VENV_ARG: &str = "no-venv";
pub const NO_REQUIREMENTS_ARG: &str = "no-requirements";
pub const NO_GIT_ARG: &str = "no-git";
pub const NO_INSTALL_ARG: &str = "no-install";
pub const FILE_ARG: &str = "file";
pub const NO_FILES_ARG: &str = "no-files";
pub const LIB_ARG: &str = "lib";
pub const FORCE_ARG: &str = "force";

/// Turns the `new` arguments into a request. Template and destination
/// problems are reported as ready-to-print messages.
pub fn request_from_matches(matches: &ArgMatches) -> Result<ProjectRequest, String> {
    let template = matches.value_of(TEMPLATE_ARG).unwrap_or_default();
    let kind = template.parse::<TemplateKind>().map_err(|e| {
        format!(
            "{}\nTo list existing templates, call {}.",
            e.to_string().red(),
            "port-scaffolder list".yellow()
        )
    })?;
    let name = matches.value_of(NAME_ARG).unwrap_or_default();
    let destination = to_user_path(matches.value_of(LOCATION_ARG).unwrap_or("."))?;

    let mut request = ProjectRequest::new(name, destination.path_buf, kind);
    request.create_venv = !matches.is_present(NO_VENV_ARG);
    request.write_manifest = !matches.is_present(NO_REQUIREMENTS_ARG);
    request.init_git = !matches.is_present(NO_GIT_ARG);
    request.install_dependencies = !matches.is_present(NO_INSTALL_ARG);
    request.overwrite = matches.is_present(FORCE_ARG);
    request.extra_files = if matches.is_present(NO_FILES_ARG) {
        Vec::new()
    } else {
        match matches.values_of(FILE_ARG) {
            Some(values) => values
                .map(|v| v.parse::<ExtraFile>())
                .collect::<Result<_, _>>()?,
            None => ExtraFile::ALL.to_vec(),
        }
    };
    request.libraries = matches
        .values_of(LIB_ARG)
        .map(|values| values.map(String::from).collect())
        .unwrap_or_default();
    Ok(request)
}

fn confirm_overwrite(target: &Path) -> bool {
    input::<UserBool>()
        .repeat_msg(format!(
            "The folder '{}' already exists. Do you want to replace it? {} ",
            target.to_string_lossy(),
            "[y/N]".dimmed()
        ))
        .default(false.into())
        .get()
        .into()
}

/// Returns the request with overwriting settled, or `None` when the target
/// exists and `confirm` declines replacing it.
fn authorize(
    mut request: ProjectRequest,
    confirm: impl FnOnce(&Path) -> bool,
) -> Option<ProjectRequest> {
    let target = request.target();
    if target.exists() && !request.overwrite {
        if !confirm(&target) {
            return None;
        }
        request.overwrite = true;
    }
    Some(request)
}

pub fn new(matches: &ArgMatches) {
    let request = match request_from_matches(matches) {
        Ok(request) => request,
        Err(message) => {
            println!("{}", message);
            std::process::exit(exitcode::USAGE);
        }
    };
    if let Err(err) = request.validate() {
        println!("{}", err.to_string().red());
        std::process::exit(exitcode::USAGE);
    }

    let request = match authorize(request, confirm_overwrite) {
        Some(request) => request,
        None => {
            println!("Aborted.");
            return;
        }
    };

    let scaffolder = Scaffolder::new(Registry::builtin(), config::toolchain(matches), &SystemRunner);
    match scaffolder.scaffold(&request) {
        Ok(project) => {
            println!(
                "{} {} ({}) {} {}.",
                "Created".green(),
                request.project_name().bold(),
                project.kind,
                "in".green(),
                project.root.to_string_lossy()
            );
            if !project.warnings.is_empty() {
                println!(
                    "{}",
                    format!(
                        "Finished with {} warning(s); see the messages above.",
                        project.warnings.len()
                    )
                    .yellow()
                );
            }
        }
        Err(err) => {
            println!("{}", "Could not generate the project:".red());
            println!("{}", err);
            println!("\n{} {}", "Details:".dimmed(), err.details());
            std::process::exit(exitcode::IOERR);
        }
    }
}
