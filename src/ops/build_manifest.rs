//! Manifest tree assembly.

use anyhow::Result;

use crate::core::{CourseConfig, Item, ManifestDocument, Metadata, Organization, Resource, ScoSpec};
use crate::ops::expand::{expand_file_groups, ResolvedFile};
use crate::util::fs::FileSystem;

/// Build the manifest document for `config`.
///
/// The common resource, when configured, comes first in `<resources>`;
/// SCO items and resources follow in declaration order. A SCO whose file
/// groups match nothing still gets a resource, with an empty file list.
pub fn build_manifest(config: &CourseConfig, fs: &dyn FileSystem) -> Result<ManifestDocument> {
    let mut doc = ManifestDocument::new(
        config.course_id.as_str(),
        Metadata::for_profile(&config.profile),
        Organization {
            identifier: config.organization_id(),
            title: config.title.clone(),
            items: Vec::with_capacity(config.scos.len()),
        },
    );

    if let Some(common) = &config.common {
        let files = expand_file_groups(fs, &common.files, &config.course_sub_dir)?;
        tracing::debug!(
            "common resource `{}` has {} file(s)",
            common.id,
            files.len()
        );
        doc.resources
            .push(Resource::asset(common.id.as_str(), into_hrefs(files)));
    }

    for sco in &config.scos {
        tracing::info!("Building sco w/id {}", sco.id);

        let item = sco_item(sco);

        let files = expand_file_groups(fs, &sco.files, &config.course_sub_dir)?;
        let href = format!("{}{}", config.course_sub_dir, sco.launch_page);
        let mut resource = Resource::sco(item.identifierref.as_str(), href, into_hrefs(files));

        if sco.include_common_resources {
            if let Some(common) = &config.common {
                resource = resource.with_dependency(common.id.as_str());
            }
        }

        doc.organization.items.push(item);
        doc.resources.push(resource);
    }

    Ok(doc)
}

fn sco_item(sco: &ScoSpec) -> Item {
    Item {
        identifier: sco.id.clone(),
        identifierref: sco.resource_id(),
        visible: true,
        title: sco.module_title.clone(),
        prerequisites: sco.prereq_id.clone(),
        mastery_score: sco.mastery_score,
    }
}

fn into_hrefs(files: Vec<ResolvedFile>) -> Vec<String> {
    files.into_iter().map(|f| f.href).collect()
}
