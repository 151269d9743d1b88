use crate::template::TemplateKind;
use log::debug;
use std::{
    fs, io,
    path::{Path, PathBuf},
};

pub const MANIFEST_FILE: &str = "requirements.txt";

/// Extra libraries that can be added to the manifest.
pub const LIBRARIES: &[&str] = &[
    "numpy",
    "pandas",
    "scipy",
    "scikit-learn",
    "matplotlib",
    "seaborn",
    "plotly",
    "polars",
    "requests",
    "beautifulsoup4",
    "sqlalchemy",
    "pillow",
    "pytest",
    "black",
    "flake8",
    "click",
    "uvicorn",
    "fastapi",
    "jupyter",
    "ipython",
    "PyYAML",
    "h5py",
    "statsmodels",
    "lightgbm",
    "xgboost",
    "bokeh",
    "altair",
    "plotnine",
    "geoplotlib",
    "river",
    "gensim",
    "nltk",
    "spacy",
    "langchain",
    "hydra",
    "dask",
    "duckdb",
    "cuPy",
    "scrapy",
    "paramiko",
    "lxml",
    "httpx",
    "typer",
    "sphinx",
    "ruff",
    "glom",
    "rich",
    "textual",
    "networkx",
    "python-igraph",
    "graph-tool",
    "pygame",
    "opencv",
    "manim",
    "scikit-image",
];

/// Packages a template always needs.
pub fn base_packages(kind: TemplateKind) -> &'static [&'static str] {
    match kind {
        TemplateKind::PlainScript | TemplateKind::TkinterApp => &[],
        TemplateKind::FlaskApp => &["flask", "flask_sqlalchemy"],
        TemplateKind::FastApiApp => &["fastapi", "uvicorn"],
        TemplateKind::DjangoApp => &["django"],
        TemplateKind::JupyterProject => &["jupyter", "pandas", "numpy", "matplotlib"],
        TemplateKind::SklearnMl => &["scikit-learn", "pandas", "numpy", "matplotlib"],
        TemplateKind::QtApp => &["pyqt5"],
        TemplateKind::KivyApp => &["kivy"],
        TemplateKind::PygameProject => &["pygame"],
        TemplateKind::ClickCli => &["click"],
        TemplateKind::TyperCli => &["typer"],
    }
}

/// One package per line: the template's own packages, then the selected
/// libraries. A package appearing twice is only listed the first time.
pub fn render(kind: TemplateKind, libraries: &[String]) -> String {
    let mut seen: Vec<&str> = Vec::new();
    let packages = base_packages(kind)
        .iter()
        .copied()
        .chain(libraries.iter().map(String::as_str));
    for package in packages {
        if !seen.contains(&package) {
            seen.push(package);
        }
    }
    seen.iter().map(|p| format!("{}\n", p)).collect()
}

pub fn write(
    root: &Path,
    kind: TemplateKind,
    libraries: &[String],
) -> Result<PathBuf, (PathBuf, io::Error)> {
    let path = root.join(MANIFEST_FILE);
    debug!("Writing {}", path.display());
    fs::write(&path, render(kind, libraries)).map_err(|e| (path.clone(), e))?;
    Ok(path)
}
