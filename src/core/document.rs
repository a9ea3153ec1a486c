//! Typed manifest document model.
//!
//! The document only describes what the manifest contains. Rendering to an
//! [`XmlElement`] tree needs the version profile for the spelling of the
//! SCO-type attribute; namespaces are attached by the writer.

use crate::core::version::VersionProfile;
use crate::util::XmlElement;

/// Schema name written to `<metadata>`.
pub const SCHEMA_NAME: &str = "ADL SCORM";

/// `type` attribute of prerequisite annotations.
pub const PREREQUISITE_TYPE: &str = "aicc_script";

/// `type` attribute of every resource.
pub const RESOURCE_TYPE: &str = "webcontent";

/// An `imsmanifest.xml` document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestDocument {
    pub identifier: String,
    pub version: String,
    pub metadata: Metadata,
    pub organization: Organization,
    pub resources: Vec<Resource>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    pub schema: String,
    pub schema_version: String,
}

impl Metadata {
    pub fn for_profile(profile: &VersionProfile) -> Self {
        Metadata {
            schema: SCHEMA_NAME.to_string(),
            schema_version: profile.schema_version.to_string(),
        }
    }
}

/// The course outline. Manifests produced here carry exactly one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Organization {
    pub identifier: String,
    pub title: String,
    pub items: Vec<Item>,
}

/// An outline node for one SCO.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub identifier: String,
    pub identifierref: String,
    pub visible: bool,
    pub title: String,
    /// Prerequisite script, written with type `aicc_script`
    pub prerequisites: Option<String>,
    pub mastery_score: Option<u8>,
}

/// Value of the SCO-type attribute on a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScormType {
    Asset,
    Sco,
}

impl ScormType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScormType::Asset => "asset",
            ScormType::Sco => "sco",
        }
    }
}

/// A deliverable file set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    pub identifier: String,
    pub scorm_type: ScormType,
    pub href: Option<String>,
    pub files: Vec<String>,
    pub dependency: Option<Dependency>,
}

impl Resource {
    /// Shared asset resource without a launch page.
    pub fn asset(identifier: impl Into<String>, files: Vec<String>) -> Self {
        Resource {
            identifier: identifier.into(),
            scorm_type: ScormType::Asset,
            href: None,
            files,
            dependency: None,
        }
    }

    /// Launchable SCO resource.
    pub fn sco(identifier: impl Into<String>, href: impl Into<String>, files: Vec<String>) -> Self {
        Resource {
            identifier: identifier.into(),
            scorm_type: ScormType::Sco,
            href: Some(href.into()),
            files,
            dependency: None,
        }
    }

    pub fn with_dependency(mut self, identifierref: impl Into<String>) -> Self {
        self.dependency = Some(Dependency {
            identifierref: identifierref.into(),
        });
        self
    }
}

/// Link from one resource to another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    pub identifierref: String,
}

impl ManifestDocument {
    pub fn new(identifier: impl Into<String>, metadata: Metadata, organization: Organization) -> Self {
        ManifestDocument {
            identifier: identifier.into(),
            version: "1".to_string(),
            metadata,
            organization,
            resources: Vec::new(),
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.organization.items
    }

    /// Find a resource by identifier.
    pub fn resource(&self, identifier: &str) -> Option<&Resource> {
        self.resources.iter().find(|r| r.identifier == identifier)
    }

    /// Build the element tree, without root namespace attributes.
    pub fn to_element(&self, profile: &VersionProfile) -> XmlElement {
        let metadata = XmlElement::new("metadata")
            .child(XmlElement::new("schema").text(&self.metadata.schema))
            .child(XmlElement::new("schemaversion").text(&self.metadata.schema_version));

        let mut organization = XmlElement::new("organization")
            .attr("identifier", &self.organization.identifier)
            .child(XmlElement::new("title").text(&self.organization.title));
        for item in &self.organization.items {
            organization.push_child(item_element(item));
        }

        let organizations = XmlElement::new("organizations")
            .attr("default", &self.organization.identifier)
            .child(organization);

        let mut resources = XmlElement::new("resources");
        for resource in &self.resources {
            resources.push_child(resource_element(resource, profile.scorm_type_attr));
        }

        XmlElement::new("manifest")
            .attr("identifier", &self.identifier)
            .attr("version", &self.version)
            .child(metadata)
            .child(organizations)
            .child(resources)
    }
}

fn item_element(item: &Item) -> XmlElement {
    let mut el = XmlElement::new("item")
        .attr("identifier", &item.identifier)
        .attr("identifierref", &item.identifierref)
        .attr("isvisible", item.visible.to_string())
        .child(XmlElement::new("title").text(&item.title));

    if let Some(prereq) = &item.prerequisites {
        el.push_child(
            XmlElement::new("adlcp:prerequisites")
                .attr("type", PREREQUISITE_TYPE)
                .text(prereq),
        );
    }
    if let Some(score) = item.mastery_score {
        el.push_child(XmlElement::new("adlcp:masteryscore").text(score.to_string()));
    }

    el
}

fn resource_element(resource: &Resource, scorm_type_attr: &str) -> XmlElement {
    let mut el = XmlElement::new("resource")
        .attr("identifier", &resource.identifier)
        .attr("type", RESOURCE_TYPE)
        .attr(scorm_type_attr, resource.scorm_type.as_str());
    if let Some(href) = &resource.href {
        el.push_attr("href", href);
    }

    for file in &resource.files {
        el.push_child(XmlElement::new("file").attr("href", file));
    }
    if let Some(dep) = &resource.dependency {
        el.push_child(XmlElement::new("dependency").attr("identifierref", &dep.identifierref));
    }

    el
}
