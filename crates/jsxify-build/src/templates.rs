//! Component module templates.

use std::fs;
use std::path::Path;

use minijinja::{context, Environment};

/// Name the component template is registered under.
///
/// The `.jsx` suffix keeps minijinja from HTML-escaping the markup.
pub const COMPONENT_TEMPLATE: &str = "component.jsx";

/// Values passed to the component template.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Context {
    /// Component name derived from the source file
    pub name: String,
    /// Converted JSX source
    pub jsx: String,
}

/// Renders converted JSX into a component module.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create an engine using the built-in component template.
    pub fn new() -> Self {
        Self::with_source(DEFAULT_TEMPLATE.to_string())
            .expect("Failed to add component template")
    }

    /// Create an engine from a template file on disk.
    pub fn from_file(path: &Path) -> Result<Self, minijinja::Error> {
        let source = fs::read_to_string(path).map_err(|e| {
            minijinja::Error::new(
                minijinja::ErrorKind::InvalidOperation,
                format!("cannot read template {}", path.display()),
            )
            .with_source(e)
        })?;
        Self::with_source(source)
    }

    fn with_source(source: String) -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template_owned(COMPONENT_TEMPLATE.to_string(), source)?;
        Ok(Self { env })
    }

    /// Render a component module.
    pub fn render(&self, context: &Context) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template(COMPONENT_TEMPLATE)?;

        tmpl.render(context! {
            name => &context.name,
            jsx => &context.jsx,
        })
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Turn a file stem into a PascalCase component name.
///
/// `user-card` -> `UserCard`. Names that would not start with a letter get a
/// `Component` prefix.
pub fn component_name(stem: &str) -> String {
    let name: String = stem
        .split(|c: char| !c.is_ascii_alphanumeric())
        .map(capitalize)
        .collect();

    if name.starts_with(|c: char| c.is_ascii_alphabetic()) {
        name
    } else {
        format!("Component{name}")
    }
}

/// Capitalize first letter of a string.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

const DEFAULT_TEMPLATE: &str = r#"export default function {{ name }}() {
  return (
    {{ jsx }}
  );
}
"#;
