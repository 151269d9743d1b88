use crate::{
    external::{run_checked, CommandRunner, Toolchain, ToolError},
    extras::ExtraFile,
    layout::{Delegate, Layout},
    provision::{report, Warning},
    template::TemplateKind,
    templates::{Blueprint, Registry},
};
use log::{debug, info, warn};
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;

pub const README_FILE: &str = "README.md";
pub const GITIGNORE_FILE: &str = ".gitignore";

/// Directories every project gets, whatever its template.
pub const BASE_DIRS: [&str; 3] = ["src", "tests", "docs"];

const GITIGNORE: &str = r#"# Byte-compiled / optimized / DLL files
__pycache__/
*.py[cod]

# Virtual environment
venv/

# IDE files
.vscode/
.idea/

# Logs and databases
*.log
*.sqlite3

# OS generated files
.DS_Store
Thumbs.db

# Build artifacts
build/
dist/
*.egg-info/
"#;

/// The readme every generated project starts with.
pub fn readme(project_name: &str, template_label: &str) -> String {
    format!(
        "# {name}\n\n\
        ## Project Description\n\n\
        This is a {label} project generated with Python Port-Scaffolder.\n\n\
        ## Getting Started\n\n\
        ### Prerequisites\n\n\
        - Python 3.8+\n\n\
        ### Installation\n\n\
        ```bash\npip install -r requirements.txt\n```\n\n\
        ### Usage\n\n\
        ```bash\npython src/main.py\n```\n",
        name = project_name,
        label = template_label,
    )
}

pub fn gitignore() -> &'static str {
    GITIGNORE
}

#[derive(Clone, Debug)]
pub struct ProjectRequest {
    pub name: String,
    pub destination: PathBuf,
    pub kind: TemplateKind,
    pub create_venv: bool,
    pub write_manifest: bool,
    pub init_git: bool,
    pub install_dependencies: bool,
    pub extra_files: Vec<ExtraFile>,
    pub libraries: Vec<String>,
    /// Set once the user agreed to replace an existing target directory.
    pub overwrite: bool,
}

impl ProjectRequest {
    /// A request with every optional step turned off.
    pub fn new(name: impl Into<String>, destination: impl Into<PathBuf>, kind: TemplateKind) -> Self {
        ProjectRequest {
            name: name.into(),
            destination: destination.into(),
            kind,
            create_venv: false,
            write_manifest: false,
            init_git: false,
            install_dependencies: false,
            extra_files: Vec::new(),
            libraries: Vec::new(),
            overwrite: false,
        }
    }

    pub fn project_name(&self) -> &str {
        self.name.trim()
    }

    /// `destination/name`
    pub fn target(&self) -> PathBuf {
        self.destination.join(self.project_name())
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let name = self.project_name();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if name == "." || name == ".." {
            return Err(ValidationError::ReservedName(name.to_string()));
        }
        if let Some(c) = name.chars().find(|c| matches!(c, '/' | '\\' | '\0')) {
            return Err(ValidationError::IllegalCharacter(name.to_string(), c));
        }
        if self.destination.as_os_str().is_empty() {
            return Err(ValidationError::EmptyDestination);
        }
        Ok(())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("The project name must not be empty.")]
    EmptyName,
    #[error("'{0}' cannot be used as a project name.")]
    ReservedName(String),
    #[error("The project name '{0}' contains the character {1:?}, which is not allowed in a folder name.")]
    IllegalCharacter(String, char),
    #[error("A destination folder must be given.")]
    EmptyDestination,
}

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("{} already exists, and replacing it was not allowed.", .0.display())]
    TargetExists(PathBuf),
    #[error("Could not {action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        source: io::Error,
    },
    #[error("Could not run the framework's project scaffolding: {0}")]
    Delegate(#[source] ToolError),
}

impl GenerationError {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        GenerationError::Io {
            action,
            path: path.into(),
            source,
        }
    }

    /// A short name for the kind of failure, shown next to the message.
    pub fn details(&self) -> String {
        match self {
            GenerationError::Invalid(_) => "ValidationError".to_string(),
            GenerationError::TargetExists(_) => "TargetExists".to_string(),
            GenerationError::Io { source, .. } => format!("io::Error({:?})", source.kind()),
            GenerationError::Delegate(_) => "ToolError".to_string(),
        }
    }
}

/// What a successful run left on disk.
#[derive(Debug)]
pub struct GeneratedProject {
    pub root: PathBuf,
    pub kind: TemplateKind,
    /// Files written, relative to `root`, in the order they were written.
    pub files: Vec<PathBuf>,
    pub warnings: Vec<Warning>,
}

pub struct Scaffolder<'r> {
    pub(crate) registry: Registry,
    pub(crate) toolchain: Toolchain,
    pub(crate) runner: &'r dyn CommandRunner,
}

impl<'r> Scaffolder<'r> {
    pub fn new(registry: Registry, toolchain: Toolchain, runner: &'r dyn CommandRunner) -> Self {
        Scaffolder {
            registry,
            toolchain,
            runner,
        }
    }

    /// Creates the project tree for `request`.
    ///
    /// If the target exists it is removed first, but only when
    /// `request.overwrite` is set; otherwise nothing is touched and
    /// [`GenerationError::TargetExists`] is returned. On any failure after
    /// that point the partially written target is deleted.
    pub fn generate(&self, request: &ProjectRequest) -> Result<GeneratedProject, GenerationError> {
        request.validate()?;
        let target = request.target();

        if target.exists() {
            if !request.overwrite {
                return Err(GenerationError::TargetExists(target));
            }
            info!("Removing existing {}", target.display());
            fs::remove_dir_all(&target)
                .map_err(|e| GenerationError::io("remove", target.clone(), e))?;
        }

        let blueprint = Blueprint {
            name: request.project_name(),
            kind: request.kind,
        };
        let layout = self.registry.layout_for(&blueprint);
        debug!(
            "{} layout has {} entries",
            blueprint.kind.key(),
            layout.entries().len()
        );

        match self.materialize(&target, &blueprint, &layout) {
            Ok(project) => Ok(project),
            Err(err) => {
                discard(&target);
                Err(err)
            }
        }
    }

    fn materialize(
        &self,
        target: &Path,
        blueprint: &Blueprint<'_>,
        layout: &Layout,
    ) -> Result<GeneratedProject, GenerationError> {
        info!(
            "Generating {} project in {}",
            blueprint.kind.key(),
            target.display()
        );
        fs::create_dir_all(target).map_err(|e| GenerationError::io("create", target, e))?;
        for dir in BASE_DIRS.iter() {
            let path = target.join(dir);
            debug!("Creating directory {}", path.display());
            fs::create_dir_all(&path).map_err(|e| GenerationError::io("create", path, e))?;
        }

        let mut files = layout
            .write_into(target)
            .map_err(|(path, e)| GenerationError::io("write", path, e))?;

        let mut warnings = Vec::new();
        if let Some(delegate) = layout.delegated() {
            if let Some(warning) = self.run_delegate(delegate, target)? {
                report(&mut warnings, warning);
            }
        }

        let readme_path = target.join(README_FILE);
        fs::write(&readme_path, readme(blueprint.name, blueprint.kind.label()))
            .map_err(|e| GenerationError::io("write", readme_path, e))?;
        files.push(PathBuf::from(README_FILE));

        let gitignore_path = target.join(GITIGNORE_FILE);
        fs::write(&gitignore_path, gitignore())
            .map_err(|e| GenerationError::io("write", gitignore_path, e))?;
        files.push(PathBuf::from(GITIGNORE_FILE));

        Ok(GeneratedProject {
            root: target.to_path_buf(),
            kind: blueprint.kind,
            files,
            warnings,
        })
    }

    /// A tool that cannot be started aborts generation; one that starts and
    /// fails only produces a warning.
    fn run_delegate(
        &self,
        delegate: &Delegate,
        target: &Path,
    ) -> Result<Option<Warning>, GenerationError> {
        let invocation = match delegate {
            Delegate::DjangoStartProject { project_name } => {
                self.toolchain.django_startproject(project_name, target)
            }
        };
        match run_checked(self.runner, &invocation) {
            Ok(()) => Ok(None),
            Err(err @ ToolError::Spawn { .. }) => Err(GenerationError::Delegate(err)),
            Err(err) => Ok(Some(Warning::Delegate(err))),
        }
    }
}

/// Removes a partially written project, logging rather than failing.
pub(crate) fn discard(target: &Path) {
    if !target.exists() {
        return;
    }
    info!("Removing partially generated {}", target.display());
    if let Err(e) = fs::remove_dir_all(target) {
        warn!("Could not remove {}: {}", target.display(), e);
    }
}
