use crate::types::{ParsedResponse, ResourceEntry};
use tracing::debug;

const RESOURCES_MARKER: &str = "RESOURCES:";
const NOTES_MARKER: &str = "NOTES:";
const BLOCK_SEPARATOR: &str = "==> ";
const BLOCK_MARKER: &str = "==>";
const HEADER_PREFIX: &str = "NAME";
const RELEASE_NAME_PREFIX: &str = "NAME:";

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ParseError {
    #[error("release name ambiguous: found both '{first}' and '{second}'")]
    AmbiguousReleaseName { first: String, second: String },
}

/// Extract the release name, all the resource blocks, and assemble the response.
pub fn parse_response(raw: &str) -> Result<ParsedResponse, ParseError> {
    let release_name = extract_release_name(raw)?;
    let blocks = split_resource_blocks(extract_resources_section(raw));
    let resources = convert_blocks(&blocks);
    debug!(
        "Parsed release '{}' with {} resource kinds",
        release_name,
        resources.len()
    );
    Ok(ParsedResponse {
        release_name,
        resources,
    })
}

/// Return the text between `RESOURCES:` (and the whitespace following it) and the last `NOTES:`.
///
/// Missing or out-of-order markers are not an error; they mean "no resources".
pub fn extract_resources_section(raw: &str) -> &str {
    if raw.trim().is_empty() {
        return "";
    }

    let Some(notes) = raw.rfind(NOTES_MARKER) else {
        return "";
    };

    // First line holding a usable marker wins; within that line, the last marker does.
    let mut found: Option<(usize, usize)> = None;
    for (idx, _) in raw.match_indices(RESOURCES_MARKER) {
        let after = idx + RESOURCES_MARKER.len();
        let rest = &raw[after..];
        let whitespace = rest.len() - rest.trim_start().len();
        if whitespace == 0 {
            continue;
        }
        let start = after + whitespace;
        if start > notes {
            break;
        }
        let line_start = raw[..idx].rfind('\n').map_or(0, |pos| pos + 1);
        match found {
            Some((line, _)) if line != line_start => break,
            _ => found = Some((line_start, start)),
        }
    }

    match found {
        Some((_, start)) => &raw[start..notes],
        None => "",
    }
}

/// Split the RESOURCES body into `==> kind` blocks, last block first.
///
/// The reversed order is part of the output contract consumers already rely on.
pub fn split_resource_blocks(section: &str) -> Vec<String> {
    if section.trim().is_empty() {
        return Vec::new();
    }

    section
        .rsplit(BLOCK_SEPARATOR)
        .map(|fragment| format!("{}{}", BLOCK_SEPARATOR, fragment.trim()))
        .collect()
}

/// Turn each block into a [`ResourceEntry`]: the header names the kind, and every
/// row other than the `NAME ...` column header contributes its first column.
pub fn convert_blocks<S: AsRef<str>>(blocks: &[S]) -> Vec<ResourceEntry> {
    blocks
        .iter()
        .filter_map(|block| convert_block(block.as_ref()))
        .collect()
}

fn convert_block(block: &str) -> Option<ResourceEntry> {
    let mut name = String::new();
    let mut resources = Vec::new();

    for line in block.split('\n') {
        if line.starts_with(BLOCK_MARKER) {
            name = line.chars().skip(4).collect::<String>().trim().to_string();
        } else if !line.starts_with(HEADER_PREFIX) {
            resources.push(first_column(line).to_string());
        }
    }

    if name.is_empty() {
        debug!("Dropping resource block without a kind: {:?}", block);
        return None;
    }

    Some(ResourceEntry { name, resources })
}

/// A row without any space is taken whole.
fn first_column(line: &str) -> &str {
    let trimmed = line.trim();
    match trimmed.find(' ') {
        Some(end) => &trimmed[..end],
        None => trimmed,
    }
}

/// Find the single line starting with `NAME:` and return its trimmed value.
pub fn extract_release_name(raw: &str) -> Result<String, ParseError> {
    if raw.trim().is_empty() {
        return Ok(String::new());
    }

    let mut result: Option<String> = None;
    for line in raw.split('\n') {
        let Some(value) = line.strip_prefix(RELEASE_NAME_PREFIX) else {
            continue;
        };
        let value = value.trim().to_string();
        if let Some(first) = result {
            return Err(ParseError::AmbiguousReleaseName {
                first,
                second: value,
            });
        }
        result = Some(value);
    }

    Ok(result.unwrap_or_default())
}
