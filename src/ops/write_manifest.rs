//! Manifest serialization and output.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::core::{ManifestDocument, VersionProfile};
use crate::ops::MANIFEST_FILE_NAME;
use crate::util::fs::{remove_file_if_exists, write_string};
use crate::util::xml::to_pretty_string;

/// Render `doc` as pretty-printed XML with the profile's namespaces and
/// schema locations on the root element.
pub fn render_manifest(doc: &ManifestDocument, profile: &VersionProfile) -> Result<String> {
    let mut root = doc.to_element(profile);
    for (key, value) in profile.root_attributes() {
        root.push_attr(key, value);
    }

    to_pretty_string(&root)
}

/// Replace `<output_dir>/imsmanifest.xml` with `xml`.
///
/// Returns the path written.
pub fn write_manifest(output_dir: &Path, xml: &str) -> Result<PathBuf> {
    let manifest_path = output_dir.join(MANIFEST_FILE_NAME);

    remove_file_if_exists(&manifest_path)?;
    write_string(&manifest_path, xml)?;

    tracing::info!("File \"{}\" created.", manifest_path.display());

    Ok(manifest_path)
}
