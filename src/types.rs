use serde::Serialize;

/// One `==> kind` block of the RESOURCES section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceEntry {
    pub name: String,
    pub resources: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedResponse {
    pub release_name: String,
    pub resources: Vec<ResourceEntry>,
}
