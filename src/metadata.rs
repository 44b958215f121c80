//! Mapping 3MF metadata names to X3D `meta` names
//!
//! 3MF Core metadata (table 8-1 of the 3MF Core document) uses names like `Designer`;
//! the X3D authoring conventions use lower-case Dublin-Core style names like
//! `creator`. Names without a counterpart are passed through unchanged.

use tracing::debug;

use crate::model::MetadataEntry;

/// 3MF name -> X3D name
const METADATA_MAPPING: &[(&str, &str)] = &[
    ("Title", "title"),
    ("Designer", "creator"),
    ("Description", "description"),
    ("Copyright", "rights"),
    ("LicenseTerms", "license"),
    ("Rating", "warning"),
    ("CreationDate", "created"),
    ("ModificationDate", "modified"),
];

/// An X3D `<meta name=.. content=..>` entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaTag {
    /// X3D meta name
    pub name: String,
    /// Meta content
    pub content: String,
}

/// The X3D meta name for a 3MF metadata name
pub fn x3d_meta_name(name: &str) -> &str {
    METADATA_MAPPING
        .iter()
        .find(|&&(from, _)| from == name)
        .map_or(name, |&(_, to)| to)
}

/// Map metadata entries, preserving their order
pub fn map_metadata(entries: &[MetadataEntry]) -> Vec<MetaTag> {
    entries
        .iter()
        .map(|entry| {
            let name = x3d_meta_name(&entry.name);
            debug!(from = %entry.name, to = %name, "Mapped metadata name");
            MetaTag {
                name: name.to_string(),
                content: entry.value.clone(),
            }
        })
        .collect()
}
