use crate::{
    external::{run_checked, venv_python, Toolchain, ToolError},
    extras,
    generator::{discard, GeneratedProject, GenerationError, ProjectRequest, Scaffolder},
    manifest,
};
use log::{info, warn};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const VENV_DIR: &str = "venv";

#[derive(Debug, Error)]
pub enum Warning {
    #[error("The framework's scaffolding tool failed: {0}")]
    Delegate(ToolError),
    #[error("Could not create the virtual environment: {0}")]
    Venv(ToolError),
    #[error("{}", git_message(.0))]
    Git(ToolError),
    #[error("Could not install the dependencies: {0}")]
    Install(ToolError),
    /// Installation was wanted but there is no environment to install into.
    #[error("Dependencies were not installed, since the virtual environment is missing.")]
    InstallSkipped,
}

fn git_message(err: &ToolError) -> String {
    if err.is_missing_tool() {
        "Git is not installed. The repository was not initialized.".to_string()
    } else {
        format!("Could not initialize the git repository: {}", err)
    }
}

/// Logs `warning` and keeps it with the project.
pub(crate) fn report(warnings: &mut Vec<Warning>, warning: Warning) {
    warn!("{}", warning);
    warnings.push(warning);
}

impl<'r> Scaffolder<'r> {
    /// Generates the project and then runs every post-generation step the
    /// request asks for. If a step fails fatally, the target is removed.
    pub fn scaffold(&self, request: &ProjectRequest) -> Result<GeneratedProject, GenerationError> {
        let mut project = self.generate(request)?;
        if let Err(err) = self.provision(request, &mut project) {
            discard(&project.root);
            return Err(err);
        }
        Ok(project)
    }

    fn provision(
        &self,
        request: &ProjectRequest,
        project: &mut GeneratedProject,
    ) -> Result<(), GenerationError> {
        let root = project.root.clone();

        let venv = if request.create_venv {
            self.create_venv(&root, &mut project.warnings)
        } else {
            None
        };

        if request.write_manifest {
            info!("Writing {}", manifest::MANIFEST_FILE);
            manifest::write(&root, request.kind, &request.libraries)
                .map_err(|(path, e)| GenerationError::io("write", path, e))?;
            project.files.push(PathBuf::from(manifest::MANIFEST_FILE));
        }

        let created = extras::write_extras(&root, request.project_name(), &request.extra_files)
            .map_err(|(path, e)| GenerationError::io("write", path, e))?;
        project.files.extend(created);

        if request.init_git {
            info!("Initializing git repository");
            if let Err(e) = run_checked(self.runner, &self.toolchain.git_init(&root)) {
                report(&mut project.warnings, Warning::Git(e));
            }
        }

        if request.write_manifest && request.create_venv && request.install_dependencies {
            match venv {
                Some(python) => self.install(&python, &root, &mut project.warnings),
                None => report(&mut project.warnings, Warning::InstallSkipped),
            }
        }
        Ok(())
    }

    /// Returns the environment's interpreter when the environment was created.
    fn create_venv(&self, root: &Path, warnings: &mut Vec<Warning>) -> Option<PathBuf> {
        let venv_dir = root.join(VENV_DIR);
        info!("Creating virtual environment in {}", venv_dir.display());
        match run_checked(self.runner, &self.toolchain.create_venv(&venv_dir)) {
            Ok(()) => Some(venv_python(&venv_dir)),
            Err(e) => {
                report(warnings, Warning::Venv(e));
                None
            }
        }
    }

    fn install(&self, python: &Path, root: &Path, warnings: &mut Vec<Warning>) {
        info!("Installing dependencies from {}", manifest::MANIFEST_FILE);
        let invocation = Toolchain::pip_install(python, root, manifest::MANIFEST_FILE);
        if let Err(e) = run_checked(self.runner, &invocation) {
            report(warnings, Warning::Install(e));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        external::fake::{self, RecordingRunner},
        extras::ExtraFile,
        template::TemplateKind,
        templates::Registry,
    };
    use std::fs;
    use tempfile::TempDir;

    fn full_request(dest: &Path, kind: TemplateKind) -> ProjectRequest {
        let mut request = ProjectRequest::new("app", dest, kind);
        request.create_venv = true;
        request.write_manifest = true;
        request.init_git = true;
        request.install_dependencies = true;
        request.extra_files = ExtraFile::ALL.to_vec();
        request
    }

    fn scaffolder(runner: &RecordingRunner) -> Scaffolder<'_> {
        Scaffolder::new(Registry::builtin(), Toolchain::default(), runner)
    }

    #[test]
    fn click_cli_with_everything() {
        let tmp = TempDir::new().unwrap();
        let runner = RecordingRunner::succeeding();
        let mut request = full_request(tmp.path(), TemplateKind::ClickCli);
        request.libraries = vec!["rich".to_string()];

        let project = scaffolder(&runner).scaffold(&request).unwrap();

        let root = tmp.path().join("app");
        assert!(fs::read_to_string(root.join("src/cli.py"))
            .unwrap()
            .contains("@click.group()"));
        assert_eq!(
            fs::read_to_string(root.join("requirements.txt")).unwrap(),
            "click\nrich\n"
        );
        for name in &["LICENSE", "pyproject.toml", "Dockerfile", "setup.py", "Makefile"] {
            assert!(root.join(name).is_file(), "{} missing", name);
        }
        assert!(fs::read_to_string(root.join("setup.py"))
            .unwrap()
            .contains("name='app'"));
        assert!(project.warnings.is_empty());

        let python = venv_python(&root.join("venv"));
        assert_eq!(
            runner.command_lines(),
            vec![
                format!(
                    "{} -m venv {}",
                    Toolchain::default_python(),
                    root.join("venv").display()
                ),
                format!("git init {}", root.display()),
                format!("{} -m pip install -r requirements.txt", python.display()),
            ]
        );
        assert_eq!(runner.calls.borrow()[2].current_dir, Some(root));
    }

    #[test]
    fn readme_selection_keeps_generated_readme() {
        let tmp = TempDir::new().unwrap();
        let runner = RecordingRunner::succeeding();
        let mut request = ProjectRequest::new("app", tmp.path(), TemplateKind::PlainScript);
        request.extra_files = vec![ExtraFile::Readme, ExtraFile::Gitignore];

        let project = scaffolder(&runner).scaffold(&request).unwrap();

        assert!(fs::read_to_string(project.root.join("README.md"))
            .unwrap()
            .starts_with("# app\n"));
        assert!(!fs::read_to_string(project.root.join(".gitignore"))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn optional_steps_are_skipped_when_not_requested() {
        let tmp = TempDir::new().unwrap();
        let runner = RecordingRunner::succeeding();
        let request = ProjectRequest::new("app", tmp.path(), TemplateKind::FastApiApp);

        let project = scaffolder(&runner).scaffold(&request).unwrap();

        assert!(runner.calls.borrow().is_empty());
        assert!(!project.root.join("requirements.txt").exists());
        assert!(!project.root.join("LICENSE").exists());
    }

    #[test]
    fn missing_git_is_only_a_warning() {
        let tmp = TempDir::new().unwrap();
        let runner = RecordingRunner::responding(|inv| {
            if inv.program == Path::new("git") {
                fake::not_found()
            } else {
                fake::ok()
            }
        });
        let request = full_request(tmp.path(), TemplateKind::PlainScript);

        let project = scaffolder(&runner).scaffold(&request).unwrap();

        assert_eq!(project.warnings.len(), 1);
        assert_eq!(
            project.warnings[0].to_string(),
            "Git is not installed. The repository was not initialized."
        );
        assert!(project.root.join("src/main.py").is_file());
    }

    #[test]
    fn failed_venv_skips_install_but_keeps_the_tree() {
        let tmp = TempDir::new().unwrap();
        let runner = RecordingRunner::responding(|inv| {
            if inv.args.iter().any(|a| a == "venv") {
                fake::failed(1)
            } else {
                fake::ok()
            }
        });
        let request = full_request(tmp.path(), TemplateKind::FlaskApp);

        let project = scaffolder(&runner).scaffold(&request).unwrap();

        assert!(matches!(
            project.warnings.as_slice(),
            [Warning::Venv(_), Warning::InstallSkipped]
        ));
        assert!(project.root.join("requirements.txt").is_file());
        assert!(!runner
            .command_lines()
            .iter()
            .any(|line| line.contains("pip install")));
    }

    #[test]
    fn each_warning_is_logged_once() {
        let tmp = TempDir::new().unwrap();
        let runner = RecordingRunner::responding(|inv| {
            if inv.args.iter().any(|a| a == "venv") {
                fake::failed(1)
            } else if inv.program == Path::new("git") {
                fake::not_found()
            } else {
                fake::ok()
            }
        });
        let request = full_request(tmp.path(), TemplateKind::FlaskApp);

        let (project, logged) =
            fake::logged_warnings(|| scaffolder(&runner).scaffold(&request).unwrap());

        let kept: Vec<String> = project.warnings.iter().map(ToString::to_string).collect();
        assert_eq!(kept.len(), 3);
        assert_eq!(logged, kept);
        assert_eq!(
            logged[2],
            "Dependencies were not installed, since the virtual environment is missing."
        );
    }

    #[test]
    fn failed_install_is_reported() {
        let tmp = TempDir::new().unwrap();
        let runner = RecordingRunner::responding(|inv| {
            if inv.args.iter().any(|a| a == "pip") {
                fake::failed(1)
            } else {
                fake::ok()
            }
        });
        let request = full_request(tmp.path(), TemplateKind::KivyApp);

        let project = scaffolder(&runner).scaffold(&request).unwrap();

        assert!(matches!(project.warnings.as_slice(), [Warning::Install(_)]));
    }

    #[test]
    fn install_can_be_turned_off() {
        let tmp = TempDir::new().unwrap();
        let runner = RecordingRunner::succeeding();
        let mut request = full_request(tmp.path(), TemplateKind::PygameProject);
        request.install_dependencies = false;

        scaffolder(&runner).scaffold(&request).unwrap();

        assert_eq!(runner.calls.borrow().len(), 2);
    }

    #[cfg(unix)]
    #[test]
    fn manifest_write_failure_removes_the_project() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("app");
        // The venv step runs before the manifest, so use it to block the path.
        let blocked_root = root.clone();
        let runner = RecordingRunner::responding(move |_| {
            fs::create_dir_all(blocked_root.join("requirements.txt")).unwrap();
            fake::ok()
        });
        let mut request = full_request(tmp.path(), TemplateKind::PlainScript);
        request.init_git = false;

        let err = scaffolder(&runner).scaffold(&request).unwrap_err();

        assert!(matches!(err, GenerationError::Io { .. }));
        assert!(!root.exists());
    }
}
