use crate::{manifest, template::TemplateKind};
use colored::Colorize;
use serde::Serialize;

pub const CMD_STR: &str = "list";

#[derive(Serialize)]
struct TemplateInfo {
    key: &'static str,
    label: &'static str,
    description: &'static str,
    packages: &'static [&'static str],
}

impl From<TemplateKind> for TemplateInfo {
    fn from(kind: TemplateKind) -> Self {
        TemplateInfo {
            key: kind.key(),
            label: kind.label(),
            description: kind.description(),
            packages: manifest::base_packages(kind),
        }
    }
}

pub fn list(json: bool) {
    if json {
        let infos: Vec<TemplateInfo> = TemplateKind::ALL
            .iter()
            .copied()
            .map(TemplateInfo::from)
            .collect();
        match serde_json::to_string_pretty(&infos) {
            Ok(out) => println!("{}", out),
            Err(err) => {
                log::error!("Could not serialize the template list: {}", err);
                std::process::exit(exitcode::SOFTWARE);
            }
        }
        return;
    }

    for kind in TemplateKind::ALL.iter() {
        println!(
            "{} {}\n  {}",
            kind.label().bold(),
            format!("[{}]", kind.key()).dimmed(),
            kind.description(),
        );
    }
    println!(
        "\n{} {}",
        "Create a project with".dimmed(),
        "port-scaffolder new <TEMPLATE> <NAME>".yellow()
    );
}
