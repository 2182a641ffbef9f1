//! Default values for optional tool fields
//!
//! Derivations report whether they produced a usable value. The caller
//! decides what an unusable one means: a missing URL aborts the add, a
//! missing banner falls back to the configured default image.

use std::path::Path;

/// Banner used when none is given and none can be derived
pub const DEFAULT_BANNER: &str = "images/default.png";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Derived {
    Usable(String),
    /// Carries the reason, for display
    Unusable(String),
}

impl Derived {
    pub fn usable(&self) -> Option<&str> {
        match self {
            Derived::Usable(value) => Some(value),
            Derived::Unusable(_) => None,
        }
    }
}

/// Lowercase with spaces replaced by underscores
pub fn slug(text: &str) -> String {
    text.to_lowercase().replace(' ', "_")
}

/// A path segment must not be empty, contain a separator, or walk the tree.
fn check_segment(label: &str, segment: &str) -> Result<(), String> {
    if segment.trim().is_empty() {
        return Err(format!("{} is empty", label));
    }
    if segment.contains(['/', '\\']) {
        return Err(format!("{} '{}' contains a path separator", label, segment));
    }
    if segment == "." || segment == ".." {
        return Err(format!("{} '{}' is not a file name", label, segment));
    }
    Ok(())
}

/// `tools/<category slug>/<tool slug>.html`
pub fn derive_url(category: &str, tool_name: &str) -> Derived {
    let category_slug = slug(category);
    let tool_slug = slug(tool_name);

    let checked = check_segment("category", &category_slug)
        .and_then(|_| check_segment("tool name", &tool_slug));

    match checked {
        Ok(()) => Derived::Usable(format!("tools/{}/{}.html", category_slug, tool_slug)),
        Err(reason) => Derived::Unusable(reason),
    }
}

/// `images/<lowercase category>/<url file stem>.png`
pub fn derive_banner(category: &str, url: &str) -> Derived {
    let folder = category.to_lowercase();
    if let Err(reason) = check_segment("category", &folder) {
        return Derived::Unusable(reason);
    }

    let file_name = url.rsplit(|c: char| c == '/' || c == '\\').next().unwrap_or_default();
    let stem = Path::new(file_name)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.trim().is_empty());

    match stem {
        Some(stem) => Derived::Usable(format!("images/{}/{}.png", folder, stem)),
        None => Derived::Unusable(format!("URL '{}' does not end in a file name", url)),
    }
}

/// Operator input wins; otherwise the derived URL. `None` means the add must abort.
pub fn resolve_url(input: &str, derived: &Derived) -> Option<String> {
    let input = input.trim();
    if !input.is_empty() {
        return Some(input.to_string());
    }
    derived.usable().map(str::to_string)
}

/// Operator input wins, then the derived banner, then `fallback`.
pub fn resolve_banner(input: &str, derived: &Derived, fallback: &str) -> String {
    let input = input.trim();
    if !input.is_empty() {
        return input.to_string();
    }
    derived.usable().unwrap_or(fallback).to_string()
}
