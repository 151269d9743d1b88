use super::Blueprint;
use crate::layout::{Delegate, Layout};

const FLASK_APP: &str = r#"from flask import Flask, render_template
from flask_sqlalchemy import SQLAlchemy

app = Flask(__name__)
app.config['SQLALCHEMY_DATABASE_URI'] = 'sqlite:///database.db'
db = SQLAlchemy(app)

class User(db.Model):
    id = db.Column(db.Integer, primary_key=True)
    username = db.Column(db.String(80), unique=True, nullable=False)
    email = db.Column(db.String(120), unique=True, nullable=False)

@app.route('/')
def home():
    return render_template('index.html')

if __name__ == '__main__':
    app.run(debug=True)
"#;

const FLASK_INDEX: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>Flask App</title>
    <link rel="stylesheet" href="{{ url_for('static', filename='css/style.css') }}">
</head>
<body>
    <h1>Welcome to your Flask App!</h1>
    <p>This is a generated Flask application with SQLAlchemy support.</p>
</body>
</html>
"#;

const FASTAPI_MAIN: &str = r#"from fastapi import FastAPI

app = FastAPI()

@app.get("/")
async def root():
    return {"message": "Hello World"}

@app.get("/items/{item_id}")
async def read_item(item_id: int):
    return {"item_id": item_id}
"#;

pub fn flask(_: &Blueprint<'_>, layout: &mut Layout) {
    layout
        .dir("src/templates")
        .dir("src/static/css")
        .dir("src/static/js")
        .dir("src/models")
        .file("src/app.py", FLASK_APP)
        .file("src/templates/index.html", FLASK_INDEX)
        .file("src/static/css/style.css", "/* Add your CSS styles here */");
}

pub fn fastapi(_: &Blueprint<'_>, layout: &mut Layout) {
    layout.file("src/main.py", FASTAPI_MAIN);
}

/// Django writes its own project skeleton.
pub fn django(blueprint: &Blueprint<'_>, layout: &mut Layout) {
    layout.delegate(Delegate::DjangoStartProject {
        project_name: blueprint.name.to_string(),
    });
}
