use super::Blueprint;
use crate::layout::Layout;

const CLICK_CLI: &str = r#"import click

@click.group()
def cli():
    """Command Line Interface Tool"""
    pass

@cli.command()
@click.argument('name')
def hello(name):
    """Print a greeting"""
    click.echo(f"Hello, {name}!")

if __name__ == '__main__':
    cli()
"#;

const TYPER_CLI: &str = r#"import typer

app = typer.Typer()

@app.command()
def hello(name: str):
    typer.echo(f"Hello, {name}")

if __name__ == "__main__":
    app()
"#;

pub fn click(_: &Blueprint<'_>, layout: &mut Layout) {
    layout.file("src/cli.py", CLICK_CLI);
}

pub fn typer(_: &Blueprint<'_>, layout: &mut Layout) {
    layout.file("src/cli.py", TYPER_CLI);
}
