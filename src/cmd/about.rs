use colored::Colorize;

pub const CMD_STR: &str = "about";

pub fn about() {
    println!(
        "{} {}

Scaffolds new Python projects (scripts, web apps, desktop apps, data
science and CLI tools) from a fixed set of templates, optionally with a
virtual environment, a requirements file and a git repository.

{} {}
{} {} {}",
        "Python Port-Scaffolder".bold(),
        format!("v{}", env!("CARGO_PKG_VERSION")).dimmed(),
        "Templates:".dimmed(),
        "port-scaffolder list".yellow(),
        "Platform:".dimmed(),
        std::env::consts::OS,
        std::env::consts::ARCH,
    );
}
