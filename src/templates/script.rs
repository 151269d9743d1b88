use super::Blueprint;
use crate::layout::Layout;

pub fn plain_script(_: &Blueprint<'_>, layout: &mut Layout) {
    layout.file("src/main.py", "#!/usr/bin/env python3\nprint(\"Hello, World!\")\n");
}

/// Used for any template without a registered generator.
pub fn fallback(blueprint: &Blueprint<'_>, layout: &mut Layout) {
    layout.file(
        "src/main.py",
        format!(
            "# {} Project\n\nprint('Hello, World!')",
            blueprint.kind.label()
        ),
    );
}
