//! Core data structures for the tool catalog
//!
//! The catalog is kept as two parallel documents: category name to the
//! ordered list of tools, and category name to its icon class.

use crate::utils::error::CatalogError;
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;

/// A single catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Tool {
    #[serde(deserialize_with = "non_empty_string")]
    pub name: String,
    #[serde(deserialize_with = "non_empty_string")]
    pub description: String,
    #[serde(deserialize_with = "non_empty_string")]
    pub url: String,
    #[serde(deserialize_with = "non_empty_string")]
    pub banner: String,
}

impl Tool {
    /// Build a tool, rejecting empty fields
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        url: impl Into<String>,
        banner: impl Into<String>,
    ) -> Result<Self, CatalogError> {
        let tool = Self {
            name: name.into(),
            description: description.into(),
            url: url.into(),
            banner: banner.into(),
        };

        for (field, value) in [
            ("Tool name", &tool.name),
            ("Description", &tool.description),
            ("URL", &tool.url),
            ("Banner", &tool.banner),
        ] {
            if value.trim().is_empty() {
                return Err(CatalogError::EmptyField(field));
            }
        }

        Ok(tool)
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.url)
    }
}

fn non_empty_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    if s.trim().is_empty() {
        Err(de::Error::custom("tool fields must be non-empty strings"))
    } else {
        Ok(s)
    }
}

/// Mapping keyed by category name that keeps keys in the order they were
/// read or inserted, and refuses duplicate keys when deserializing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryMap<V> {
    entries: Vec<(String, V)>,
}

impl<V> CategoryMap<V> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.entries.iter().any(|(key, _)| key == name)
    }

    pub fn get(&self, name: &str) -> Option<&V> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut V> {
        self.entries
            .iter_mut()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Replace the value in place if `name` exists, otherwise append.
    pub fn insert(&mut self, name: impl Into<String>, value: V) -> Option<V> {
        let name = name.into();
        match self.get_mut(&name) {
            Some(slot) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((name, value));
                None
            }
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }
}

impl<V> Default for CategoryMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Serialize> Serialize for CategoryMap<V> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

struct CategoryMapVisitor<V> {
    marker: PhantomData<V>,
}

impl<'de, V: Deserialize<'de>> Visitor<'de> for CategoryMapVisitor<V> {
    type Value = CategoryMap<V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an object keyed by category name")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut map = CategoryMap {
            entries: Vec::with_capacity(access.size_hint().unwrap_or(0)),
        };

        while let Some(key) = access.next_key::<String>()? {
            if map.contains_key(&key) {
                return Err(de::Error::custom(format!("duplicate category '{}'", key)));
            }
            let value = access.next_value()?;
            map.entries.push((key, value));
        }

        Ok(map)
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for CategoryMap<V> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(CategoryMapVisitor {
            marker: PhantomData,
        })
    }
}

/// Category name to its tools, in display order
pub type ToolCatalog = CategoryMap<Vec<Tool>>;

/// Category name to its icon class
pub type IconMap = CategoryMap<String>;

/// Both documents as held in memory during a session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    tools: ToolCatalog,
    icons: IconMap,
}

impl Catalog {
    pub fn new(tools: ToolCatalog, icons: IconMap) -> Self {
        Self { tools, icons }
    }

    pub fn tools(&self) -> &ToolCatalog {
        &self.tools
    }

    pub fn icons(&self) -> &IconMap {
        &self.icons
    }

    /// Category names in the order of the tool document
    pub fn categories(&self) -> Vec<String> {
        self.tools.keys().map(str::to_string).collect()
    }

    pub fn category_count(&self) -> usize {
        self.tools.len()
    }

    pub fn tool_count(&self) -> usize {
        self.tools.iter().map(|(_, tools)| tools.len()).sum()
    }

    pub fn contains_category(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Category at a 1-based position in [`Catalog::categories`] order
    pub fn category_at(&self, position: usize) -> Option<&str> {
        position
            .checked_sub(1)
            .and_then(|idx| self.tools.keys().nth(idx))
    }

    /// Add an empty category with its icon to both documents.
    ///
    /// Uniqueness is checked against the tool document; an icon left over
    /// for a name missing from it is overwritten.
    pub fn add_category(&mut self, name: &str, icon: &str) -> Result<(), CatalogError> {
        if name.trim().is_empty() {
            return Err(CatalogError::EmptyField("Category name"));
        }
        if icon.trim().is_empty() {
            return Err(CatalogError::EmptyField("Icon"));
        }
        if self.tools.contains_key(name) {
            return Err(CatalogError::DuplicateCategory(name.to_string()));
        }

        self.tools.insert(name, Vec::new());
        self.icons.insert(name, icon.to_string());
        Ok(())
    }

    /// Append `tool` to the end of `category`
    pub fn add_tool(&mut self, category: &str, tool: Tool) -> Result<(), CatalogError> {
        let tools = self
            .tools
            .get_mut(category)
            .ok_or_else(|| CatalogError::UnknownCategory(category.to_string()))?;
        tools.push(tool);
        Ok(())
    }
}
