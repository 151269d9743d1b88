use super::Blueprint;
use crate::layout::Layout;

// Kept on one line; notebook front-ends rewrite it on first save anyway.
const ANALYSIS_NOTEBOOK: &str = r##"{"cells": [{"cell_type": "code","execution_count": null,"metadata": {},"outputs": [],"source": ["# Your data analysis code here"]}],"metadata": {"kernelspec": {"display_name": "Python 3","language": "python","name": "python3"},"language_info": {"codemirror_mode": {"name": "ipython","version": 3},"file_extension": ".py","mimetype": "text/x-python","name": "python","nbconvert_exporter": "python","pygments_lexer": "ipython3","version": "3.8.5"}},"nbformat": 4,"nbformat_minor": 4}"##;

const SKLEARN_TRAIN: &str = r#"from sklearn.datasets import load_iris
from sklearn.model_selection import train_test_split
from sklearn.ensemble import RandomForestClassifier
from sklearn.metrics import accuracy_score
import joblib

# Load data
data = load_iris()
X, y = data.data, data.target

# Split data
X_train, X_test, y_train, y_test = train_test_split(X, y, test_size=0.2, random_state=42)

# Train model
model = RandomForestClassifier(n_estimators=100, random_state=42)
model.fit(X_train, y_train)

# Evaluate
predictions = model.predict(X_test)
accuracy = accuracy_score(y_test, predictions)
print(f"Model Accuracy: {accuracy:.2f}")

# Save model
joblib.dump(model, 'model.pkl')
"#;

pub fn jupyter(_: &Blueprint<'_>, layout: &mut Layout) {
    layout
        .file("src/analysis.ipynb", ANALYSIS_NOTEBOOK)
        .file("src/utils.py", "# Utility functions for data processing\n")
        .file(
            "src/data_loader.py",
            "# Functions for loading and preprocessing data\n",
        );
}

pub fn sklearn(_: &Blueprint<'_>, layout: &mut Layout) {
    layout.file("src/train.py", SKLEARN_TRAIN);
}
