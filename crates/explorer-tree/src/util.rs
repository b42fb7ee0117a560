use serde::{de::DeserializeOwned, Deserialize};

/// Normalize a user supplied name.
/// Surrounding whitespace is dropped, returns `None` if nothing is left.
pub fn normalize_name(name: &str) -> Option<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_owned())
}

/// Case-insensitive substring match used by the search.
/// An empty term matches every name.
pub fn matches_search(name: &str, term: &str) -> bool {
    name.to_lowercase().contains(&term.to_lowercase())
}

/// Read json without serde_json's nesting limit.
/// Folders nest without bound, the stack grows on demand instead.
pub fn from_json<T: DeserializeOwned>(json: &str) -> serde_json::Result<T> {
    let mut deserializer = serde_json::Deserializer::from_str(json);
    deserializer.disable_recursion_limit();
    let value = T::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;
    deserializer.end()?;
    Ok(value)
}
