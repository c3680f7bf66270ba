//! Directory path templates with MSBuild-style `$(Name)` variables.
//!
//! A template such as `..\App\bin\$(Configuration)\net8.0-windows` is parsed
//! once into literal and variable segments. Resolution substitutes bound
//! variables by name; anything that is not a well-formed variable reference,
//! and any variable with no binding, is kept verbatim.

use std::collections::BTreeMap;

/// Name of the variable bound to the build configuration.
pub const CONFIGURATION_VAR: &str = "Configuration";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Var(String),
}

/// A parsed directory path template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTemplate {
    raw: String,
    segments: Vec<Segment>,
}

/// Variable bindings used to resolve a [`PathTemplate`].
pub type Variables = BTreeMap<String, String>;

fn is_var_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.')
}

impl PathTemplate {
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut rest = raw.as_str();

        while let Some(start) = rest.find("$(") {
            let after = &rest[start + 2..];
            match after.find(')') {
                Some(end) if is_var_name(&after[..end]) => {
                    literal.push_str(&rest[..start]);
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Var(after[..end].to_owned()));
                    rest = &after[end + 1..];
                }
                _ => {
                    // Not a variable reference: keep the `$` and rescan from
                    // the following character.
                    literal.push_str(&rest[..start + 1]);
                    rest = &rest[start + 1..];
                }
            }
        }
        literal.push_str(rest);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Self { raw, segments }
    }

    /// Names of the variables referenced by the template, in order of
    /// appearance (duplicates included).
    pub fn variables(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Var(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Substitute every bound variable. Unbound references stay as `$(Name)`.
    pub fn resolve(&self, vars: &Variables) -> String {
        let mut out = String::with_capacity(self.raw.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Var(name) => match vars.get(name) {
                    Some(value) => out.push_str(value),
                    None => {
                        out.push_str("$(");
                        out.push_str(name);
                        out.push(')');
                    }
                },
            }
        }
        out
    }
}

/// Replace every `$(Configuration)` in `template` with `config_name`.
pub fn resolve(template: &str, config_name: &str) -> String {
    let mut vars = Variables::new();
    vars.insert(CONFIGURATION_VAR.to_owned(), config_name.to_owned());
    PathTemplate::parse(template).resolve(&vars)
}
