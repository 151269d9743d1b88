use log::debug;
use std::{
    ffi::OsString,
    io,
    path::{Path, PathBuf},
    process::Command,
};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    pub program: PathBuf,
    pub args: Vec<OsString>,
    pub current_dir: Option<PathBuf>,
}

impl Invocation {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Invocation {
            program: program.into(),
            args: Vec::new(),
            current_dir: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }

    /// The command line as a user would type it.
    pub fn command_line(&self) -> String {
        let mut line = self.program.to_string_lossy().to_string();
        for arg in &self.args {
            line.push(' ');
            line.push_str(&arg.to_string_lossy());
        }
        line
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub success: bool,
    pub code: Option<i32>,
}

pub trait CommandRunner {
    /// Runs the invocation to completion. `Err` means the process could not
    /// be started at all.
    fn run(&self, invocation: &Invocation) -> io::Result<Outcome>;
}

/// Runs commands for real, with the child inheriting our stdio.
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> io::Result<Outcome> {
        debug!("Running `{}`", invocation.command_line());
        let mut command = Command::new(&invocation.program);
        command.args(&invocation.args);
        if let Some(dir) = &invocation.current_dir {
            command.current_dir(dir);
        }
        let status = command.status()?;
        debug!("`{}` finished with {}", invocation.command_line(), status);
        Ok(Outcome {
            success: status.success(),
            code: status.code(),
        })
    }
}

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("could not start `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("`{command}` {}", describe_exit(.code))]
    Failed { command: String, code: Option<i32> },
}

impl ToolError {
    /// Whether the program itself is missing, as opposed to having failed.
    pub fn is_missing_tool(&self) -> bool {
        matches!(self, ToolError::Spawn { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exited with status {}", code),
        None => "was terminated by a signal".to_string(),
    }
}

/// Runs `invocation`, turning a spawn failure or a non-zero exit into a
/// [`ToolError`].
pub fn run_checked(runner: &dyn CommandRunner, invocation: &Invocation) -> Result<(), ToolError> {
    let outcome = runner.run(invocation).map_err(|source| ToolError::Spawn {
        program: invocation.program.to_string_lossy().to_string(),
        source,
    })?;
    if outcome.success {
        Ok(())
    } else {
        Err(ToolError::Failed {
            command: invocation.command_line(),
            code: outcome.code,
        })
    }
}

/// The external programs a scaffold run may call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toolchain {
    pub python: PathBuf,
    pub git: PathBuf,
}

impl Toolchain {
    pub fn default_python() -> &'static str {
        if cfg!(windows) {
            "python"
        } else {
            "python3"
        }
    }

    pub fn django_startproject(&self, project_name: &str, target: &Path) -> Invocation {
        Invocation::new(&self.python)
            .arg("-m")
            .arg("django")
            .arg("startproject")
            .arg(project_name)
            .arg(target)
    }

    pub fn create_venv(&self, venv_dir: &Path) -> Invocation {
        Invocation::new(&self.python)
            .arg("-m")
            .arg("venv")
            .arg(venv_dir)
    }

    pub fn git_init(&self, target: &Path) -> Invocation {
        Invocation::new(&self.git).arg("init").arg(target)
    }

    /// `pip install` run by the given interpreter from inside `project_root`.
    pub fn pip_install(python: &Path, project_root: &Path, manifest_name: &str) -> Invocation {
        Invocation::new(python)
            .arg("-m")
            .arg("pip")
            .arg("install")
            .arg("-r")
            .arg(manifest_name)
            .current_dir(project_root)
    }
}

impl Default for Toolchain {
    fn default() -> Self {
        Toolchain {
            python: PathBuf::from(Toolchain::default_python()),
            git: PathBuf::from("git"),
        }
    }
}

/// Path of the interpreter inside a virtual environment.
pub fn venv_python(venv_dir: &Path) -> PathBuf {
    if cfg!(windows) {
        venv_dir.join("Scripts").join("python.exe")
    } else {
        venv_dir.join("bin").join("python")
    }
}


#[cfg(test)]
mod tests {
    use super::{fake::*, *};

    #[test]
    fn builds_django_command_line() {
        let toolchain = Toolchain {
            python: PathBuf::from("py"),
            git: PathBuf::from("git"),
        };
        let invocation = toolchain.django_startproject("site", Path::new("/tmp/site"));
        assert_eq!(
            invocation.command_line(),
            "py -m django startproject site /tmp/site"
        );
    }

    #[test]
    fn pip_runs_inside_the_project() {
        let invocation =
            Toolchain::pip_install(Path::new("venv/bin/python"), Path::new("/p"), "requirements.txt");
        assert_eq!(invocation.current_dir, Some(PathBuf::from("/p")));
        assert_eq!(
            invocation.command_line(),
            "venv/bin/python -m pip install -r requirements.txt"
        );
    }

    #[test]
    fn non_zero_exit_is_an_error() {
        let runner = RecordingRunner::responding(|_| failed(2));
        let err = run_checked(&runner, &Invocation::new("git").arg("init")).unwrap_err();
        assert!(!err.is_missing_tool());
        assert_eq!(err.to_string(), "`git init` exited with status 2");
    }

    #[test]
    fn missing_program_is_reported_as_such() {
        let runner = RecordingRunner::responding(|_| not_found());
        let err = run_checked(&runner, &Invocation::new("git")).unwrap_err();
        assert!(err.is_missing_tool());
    }

    #[test]
    fn venv_interpreter_location() {
        let python = venv_python(Path::new("proj/venv"));
        if cfg!(windows) {
            assert_eq!(python, Path::new("proj/venv/Scripts/python.exe"));
        } else {
            assert_eq!(python, Path::new("proj/venv/bin/python"));
        }
    }
}
