use crate::{layout::Layout, template::TemplateKind};
use std::collections::HashMap;

mod cli;
mod data;
mod desktop;
mod script;
mod web;

/// What a generator is allowed to know about the project being created.
#[derive(Clone, Copy, Debug)]
pub struct Blueprint<'a> {
    pub name: &'a str,
    pub kind: TemplateKind,
}

pub type Generator = fn(&Blueprint<'_>, &mut Layout);

#[derive(Clone)]
pub struct Registry {
    generators: HashMap<TemplateKind, Generator>,
}

impl Registry {
    pub fn empty() -> Self {
        Registry {
            generators: HashMap::new(),
        }
    }

    /// A registry with a generator for every built-in template.
    pub fn builtin() -> Self {
        let mut registry = Registry::empty();
        registry
            .register(TemplateKind::PlainScript, script::plain_script)
            .register(TemplateKind::FlaskApp, web::flask)
            .register(TemplateKind::FastApiApp, web::fastapi)
            .register(TemplateKind::DjangoApp, web::django)
            .register(TemplateKind::JupyterProject, data::jupyter)
            .register(TemplateKind::SklearnMl, data::sklearn)
            .register(TemplateKind::TkinterApp, desktop::tkinter)
            .register(TemplateKind::QtApp, desktop::pyqt5)
            .register(TemplateKind::KivyApp, desktop::kivy)
            .register(TemplateKind::PygameProject, desktop::pygame)
            .register(TemplateKind::ClickCli, cli::click)
            .register(TemplateKind::TyperCli, cli::typer);
        registry
    }

    /// Registers `generator` for `kind`, replacing any previous one.
    pub fn register(&mut self, kind: TemplateKind, generator: Generator) -> &mut Self {
        self.generators.insert(kind, generator);
        self
    }

    pub fn is_registered(&self, kind: TemplateKind) -> bool {
        self.generators.contains_key(&kind)
    }

    pub fn layout_for(&self, blueprint: &Blueprint<'_>) -> Layout {
        if !self.is_registered(blueprint.kind) {
            log::debug!(
                "No generator registered for {}, using the stub",
                blueprint.kind.key()
            );
        }
        let mut layout = Layout::new();
        let generator = self
            .generators
            .get(&blueprint.kind)
            .copied()
            .unwrap_or(script::fallback as Generator);
        generator(blueprint, &mut layout);
        layout
    }
}

impl Default for Registry {
    fn default() -> Self {
        Registry::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{Delegate, Entry};

    fn layout(kind: TemplateKind) -> Layout {
        Registry::builtin().layout_for(&Blueprint {
            name: "demo",
            kind,
        })
    }

    #[test]
    fn every_kind_is_registered() {
        let registry = Registry::builtin();
        for kind in TemplateKind::ALL.iter() {
            assert!(registry.is_registered(*kind), "{:?} missing", kind);
        }
    }

    #[test]
    fn plain_script_writes_hello_world() {
        assert_eq!(
            layout(TemplateKind::PlainScript).contents_of("src/main.py"),
            Some("#!/usr/bin/env python3\nprint(\"Hello, World!\")\n")
        );
    }

    #[test]
    fn flask_creates_asset_folders() {
        let layout = layout(TemplateKind::FlaskApp);
        for dir in &["src/templates", "src/static/css", "src/static/js", "src/models"] {
            assert!(layout.entries().contains(&Entry::Dir(dir.into())), "{}", dir);
        }
        assert!(layout
            .contents_of("src/app.py")
            .unwrap()
            .contains("SQLAlchemy(app)"));
        assert!(layout
            .contents_of("src/templates/index.html")
            .unwrap()
            .contains("url_for('static', filename='css/style.css')"));
        assert_eq!(
            layout.contents_of("src/static/css/style.css"),
            Some("/* Add your CSS styles here */")
        );
    }

    #[test]
    fn django_only_delegates() {
        let layout = layout(TemplateKind::DjangoApp);
        assert!(layout.entries().is_empty());
        assert_eq!(
            layout.delegated(),
            Some(&Delegate::DjangoStartProject {
                project_name: "demo".to_string()
            })
        );
    }

    #[test]
    fn notebook_is_valid_json() {
        let layout = layout(TemplateKind::JupyterProject);
        let notebook: serde_json::Value =
            serde_json::from_str(layout.contents_of("src/analysis.ipynb").unwrap()).unwrap();
        assert_eq!(notebook["nbformat"], 4);
        assert_eq!(notebook["cells"][0]["cell_type"], "code");
        assert!(layout.contents_of("src/utils.py").is_some());
        assert!(layout.contents_of("src/data_loader.py").is_some());
    }

    #[test]
    fn click_cli_defines_a_group_and_a_command() {
        let cli = layout(TemplateKind::ClickCli);
        let cli = cli.contents_of("src/cli.py").unwrap();
        assert!(cli.contains("@click.group()\ndef cli():"));
        assert!(cli.contains("@cli.command()"));
        assert!(cli.ends_with("if __name__ == '__main__':\n    cli()\n"));
    }

    #[test]
    fn unregistered_kind_falls_back_to_stub() {
        let layout = Registry::empty().layout_for(&Blueprint {
            name: "demo",
            kind: TemplateKind::KivyApp,
        });
        assert_eq!(
            layout.contents_of("src/main.py"),
            Some("# Kivy Mobile App Project\n\nprint('Hello, World!')")
        );
        assert_eq!(layout.entries().len(), 1);
    }

    #[test]
    fn layouts_are_deterministic() {
        for kind in TemplateKind::ALL.iter() {
            assert_eq!(layout(*kind), layout(*kind));
        }
    }
}
