// src/flag.rs
use serde::Deserialize;

/// One flag as returned by the flag service. Records live only for the
/// duration of a single run; nothing is kept across invocations.
#[derive(Debug, Clone, Deserialize)]
pub struct FlagRecord {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}
