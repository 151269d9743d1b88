use crate::{extras, manifest};
use colored::Colorize;
use serde::Serialize;

pub const CMD_STR: &str = "catalog";

#[derive(Serialize)]
struct Catalog {
    files: &'static [&'static str],
    libraries: &'static [&'static str],
}

const CATALOG: Catalog = Catalog {
    files: extras::FILE_NAMES,
    libraries: manifest::LIBRARIES,
};

const COLUMNS: usize = 4;

pub fn catalog(json: bool) {
    if json {
        match serde_json::to_string_pretty(&CATALOG) {
            Ok(out) => println!("{}", out),
            Err(err) => {
                log::error!("Could not serialize the catalog: {}", err);
                std::process::exit(exitcode::SOFTWARE);
            }
        }
        return;
    }

    println!("{}", "Optional files (--file):".bold());
    for name in CATALOG.files {
        println!("  {}", name);
    }

    println!("\n{}", "Extra libraries (--lib):".bold());
    let width = CATALOG.libraries.iter().map(|l| l.len()).max().unwrap_or(0) + 2;
    for row in CATALOG.libraries.chunks(COLUMNS) {
        let line: String = row
            .iter()
            .map(|lib| format!("{:<width$}", lib, width = width))
            .collect();
        println!("  {}", line.trim_end());
    }
}
