use serde::Deserialize;
use serde_json::{Map, Value};

/// Author information as the upstream API sends it, either a single name or a list.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Authors {
    One(String),
    Many(Vec<String>),
}

/// A book as returned by the upstream catalog.
///
/// Only `id` is required. The display fields are read when they have the expected type;
/// anything else the upstream sends, including display fields of an unexpected type, is
/// kept in `extra` untouched.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: Option<String>,
    pub authors: Option<Authors>,
    pub description: Option<String>,
    pub extra: Map<String, Value>,
}

impl TryFrom<Map<String, Value>> for Book {
    type Error = String;

    fn try_from(mut fields: Map<String, Value>) -> Result<Self, Self::Error> {
        let id = match fields.remove("id") {
            Some(Value::Number(id)) => id
                .as_i64()
                .ok_or_else(|| format!("book id {} is not an integer", id))?,
            Some(other) => return Err(format!("book id must be an integer, got {}", other)),
            None => return Err("missing field `id`".to_string()),
        };

        let title = take_string(&mut fields, "title").unwrap_or_default();
        let author = take_string(&mut fields, "author");
        let authors = take_authors(&mut fields);
        let description = take_string(&mut fields, "description");

        Ok(Self {
            id,
            title,
            author,
            authors,
            description,
            extra: fields,
        })
    }
}

/// Removes `key` if it holds a string or null; values of any other type stay in `fields`.
fn take_string(fields: &mut Map<String, Value>, key: &str) -> Option<String> {
    match fields.remove(key) {
        Some(Value::String(value)) => Some(value),
        Some(Value::Null) | None => None,
        Some(other) => {
            fields.insert(key.to_string(), other);
            None
        }
    }
}

fn take_authors(fields: &mut Map<String, Value>) -> Option<Authors> {
    let value = fields.remove("authors")?;
    if value.is_null() {
        return None;
    }

    match serde_json::from_value::<Authors>(value.clone()) {
        Ok(authors) => Some(authors),
        Err(_) => {
            fields.insert("authors".to_string(), value);
            None
        }
    }
}

impl Book {
    /// Human readable author line, preferring `author` over `authors`.
    pub fn byline(&self) -> Option<String> {
        if let Some(author) = self.author.as_deref().filter(|a| !a.trim().is_empty()) {
            return Some(author.to_string());
        }

        match &self.authors {
            Some(Authors::One(name)) if !name.trim().is_empty() => Some(name.clone()),
            Some(Authors::Many(names)) if !names.is_empty() => Some(names.join(", ")),
            _ => None,
        }
    }
}

/// Minimal view of a book used when only the identifier matters, such as favorite
/// membership checks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct BookRef {
    pub id: i64,
}

/// Body of a successful login response.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct LoginResult {
    #[serde(default)]
    pub token: Option<String>,
}

/// Body of a successful favorite toggle.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ActionResult {
    #[serde(default)]
    pub message: Option<String>,
}
