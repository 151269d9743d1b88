use std::{fmt::Display, str::FromStr};
use thiserror::Error;

/// The closed set of project templates the scaffolder knows how to produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    PlainScript,
    FlaskApp,
    FastApiApp,
    DjangoApp,
    JupyterProject,
    SklearnMl,
    TkinterApp,
    QtApp,
    KivyApp,
    PygameProject,
    ClickCli,
    TyperCli,
}

impl TemplateKind {
    /// Every template, in menu order.
    pub const ALL: [TemplateKind; 12] = [
        TemplateKind::PlainScript,
        TemplateKind::FlaskApp,
        TemplateKind::FastApiApp,
        TemplateKind::DjangoApp,
        TemplateKind::JupyterProject,
        TemplateKind::SklearnMl,
        TemplateKind::TkinterApp,
        TemplateKind::QtApp,
        TemplateKind::KivyApp,
        TemplateKind::PygameProject,
        TemplateKind::ClickCli,
        TemplateKind::TyperCli,
    ];

    /// The short identifier used on the command line.
    pub fn key(self) -> &'static str {
        match self {
            TemplateKind::PlainScript => "python_script",
            TemplateKind::FlaskApp => "flask_sqlalchemy",
            TemplateKind::FastApiApp => "fastapi",
            TemplateKind::DjangoApp => "django",
            TemplateKind::JupyterProject => "datascience",
            TemplateKind::SklearnMl => "ml_sklearn",
            TemplateKind::TkinterApp => "tkinter",
            TemplateKind::QtApp => "pyqt5",
            TemplateKind::KivyApp => "kivy",
            TemplateKind::PygameProject => "pygame",
            TemplateKind::ClickCli => "cli_click",
            TemplateKind::TyperCli => "cli_typer",
        }
    }

    /// The human readable name, which is also what ends up in the
    /// generated readme.
    pub fn label(self) -> &'static str {
        match self {
            TemplateKind::PlainScript => "Python Script",
            TemplateKind::FlaskApp => "Flask Web App (Flask + SQLAlchemy)",
            TemplateKind::FastApiApp => "FastAPI Web App",
            TemplateKind::DjangoApp => "Django Web App",
            TemplateKind::JupyterProject => "Data Science Project (Jupyter)",
            TemplateKind::SklearnMl => "Machine Learning (scikit-learn)",
            TemplateKind::TkinterApp => "Tkinter Desktop App",
            TemplateKind::QtApp => "PyQt5 Desktop App",
            TemplateKind::KivyApp => "Kivy Mobile App",
            TemplateKind::PygameProject => "Pygame Project",
            TemplateKind::ClickCli => "CLI Tool (Click)",
            TemplateKind::TyperCli => "Minimal CLI Tool (Typer)",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            TemplateKind::PlainScript => "A single entry-point script.",
            TemplateKind::FlaskApp => {
                "Flask application with a SQLAlchemy model, templates and static assets."
            }
            TemplateKind::FastApiApp => "FastAPI application with two example routes.",
            TemplateKind::DjangoApp => "Hands off to Django's own `startproject` command.",
            TemplateKind::JupyterProject => "Notebook plus data loading and utility modules.",
            TemplateKind::SklearnMl => "Random forest training script on the iris dataset.",
            TemplateKind::TkinterApp => "Tkinter window with a label and a button.",
            TemplateKind::QtApp => "PyQt5 main window with a label and a button.",
            TemplateKind::KivyApp => "Kivy app with a single button layout.",
            TemplateKind::PygameProject => "Pygame loop drawing a circle at 60 FPS.",
            TemplateKind::ClickCli => "Click command group with a `hello` command.",
            TemplateKind::TyperCli => "Typer app with a `hello` command.",
        }
    }
}

impl Display for TemplateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' is not a known template.")]
pub struct UnknownTemplate(pub String);

impl FromStr for TemplateKind {
    type Err = UnknownTemplate;

    /// Accepts either the key or the label, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        TemplateKind::ALL
            .iter()
            .copied()
            .find(|kind| {
                kind.key().eq_ignore_ascii_case(wanted) || kind.label().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| UnknownTemplate(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_keys_and_labels() {
        assert_eq!("cli_click".parse(), Ok(TemplateKind::ClickCli));
        assert_eq!("python script".parse(), Ok(TemplateKind::PlainScript));
        assert_eq!(
            " Flask Web App (Flask + SQLAlchemy) ".parse(),
            Ok(TemplateKind::FlaskApp)
        );
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "rails".parse::<TemplateKind>().unwrap_err();
        assert_eq!(err, UnknownTemplate("rails".to_string()));
        assert_eq!(err.to_string(), "'rails' is not a known template.");
    }

    #[test]
    fn keys_and_labels_are_unique() {
        for (i, a) in TemplateKind::ALL.iter().enumerate() {
            for b in &TemplateKind::ALL[i + 1..] {
                assert_ne!(a.key(), b.key());
                assert_ne!(a.label(), b.label());
            }
        }
    }
}
