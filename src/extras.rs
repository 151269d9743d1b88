use log::debug;
use std::{
    fmt::Display,
    fs, io,
    path::{Path, PathBuf},
    str::FromStr,
};

/// Names of the optional files, in the same order as [`ExtraFile::ALL`].
pub const FILE_NAMES: &[&str] = &[
    "README.md",
    "LICENSE",
    ".gitignore",
    "pyproject.toml",
    "Dockerfile",
    "setup.py",
    "Makefile",
];

/// Optional files that can be dropped at the project root.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExtraFile {
    Readme,
    License,
    Gitignore,
    Pyproject,
    Dockerfile,
    SetupPy,
    Makefile,
}

impl ExtraFile {
    pub const ALL: [ExtraFile; 7] = [
        ExtraFile::Readme,
        ExtraFile::License,
        ExtraFile::Gitignore,
        ExtraFile::Pyproject,
        ExtraFile::Dockerfile,
        ExtraFile::SetupPy,
        ExtraFile::Makefile,
    ];

    pub fn file_name(self) -> &'static str {
        FILE_NAMES[self as usize]
    }

    /// Body written when the file does not exist yet. The readme and the
    /// ignore file are produced by the generator itself, so they only get
    /// an empty placeholder here.
    pub fn contents(self, project_name: &str) -> String {
        match self {
            ExtraFile::Readme | ExtraFile::Gitignore => String::new(),
            ExtraFile::License => "MIT License\n\nCopyright (c) [year] [fullname]\n".to_string(),
            ExtraFile::Pyproject => "[build-system]\n\
                requires = [\"setuptools\"]\n\
                build-backend = \"setuptools.build_meta\"\n"
                .to_string(),
            ExtraFile::Dockerfile => DOCKERFILE.to_string(),
            ExtraFile::SetupPy => format!(
                "from setuptools import setup, find_packages\n\
                \n\
                setup(\n    \
                    name='{}',\n    \
                    version='0.1.0',\n    \
                    packages=find_packages(),\n    \
                    install_requires=[],\n\
                )\n",
                project_name
            ),
            ExtraFile::Makefile => MAKEFILE.to_string(),
        }
    }
}

const DOCKERFILE: &str = r#"FROM python:3.9-slim

WORKDIR /app

COPY requirements.txt .
RUN pip install --no-cache-dir -r requirements.txt

COPY . .

CMD ["python", "src/main.py"]
"#;

// Recipe lines must start with a tab.
const MAKEFILE: &str = ".PHONY: run test clean

run:
\tpython src/main.py

test:
\tpytest tests/

clean:
\trm -rf __pycache__ .pytest_cache
";

impl Display for ExtraFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.file_name())
    }
}

impl FromStr for ExtraFile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExtraFile::ALL
            .iter()
            .copied()
            .find(|f| f.file_name() == s)
            .ok_or_else(|| format!("'{}' is not one of the optional files.", s))
    }
}

/// Writes each selected file that is not already present under `root`.
/// Returns the names of the files actually created.
pub fn write_extras(
    root: &Path,
    project_name: &str,
    selected: &[ExtraFile],
) -> Result<Vec<PathBuf>, (PathBuf, io::Error)> {
    let mut created = Vec::new();
    for extra in ExtraFile::ALL.iter().filter(|f| selected.contains(*f)) {
        let path = root.join(extra.file_name());
        if path.exists() {
            debug!("{} already exists, leaving it", path.display());
            continue;
        }
        debug!("Writing {}", path.display());
        fs::write(&path, extra.contents(project_name)).map_err(|e| (path, e))?;
        created.push(PathBuf::from(extra.file_name()));
    }
    Ok(created)
}
