//! SCORM version profiles.
//!
//! Every version-specific token the manifest needs (schema label, the
//! spelling of the SCO-type attribute, root namespaces and schema locations)
//! is chosen once here and carried through the build as a [`VersionProfile`].

use std::fmt;

/// Namespace for XML Schema instance attributes.
const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// Supported SCORM editions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScormVersion {
    /// SCORM 1.2
    Scorm12,
    /// SCORM 2004 3rd Edition
    Scorm2004,
}

impl ScormVersion {
    /// Select a version from a user-supplied tag, case-insensitively.
    ///
    /// `1.2` selects SCORM 1.2. `2004` and `2004v3` select SCORM 2004; any
    /// other tag also falls back to SCORM 2004 with a warning.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_lowercase().as_str() {
            "1.2" => ScormVersion::Scorm12,
            "2004" | "2004v3" => ScormVersion::Scorm2004,
            other => {
                tracing::warn!(
                    "unrecognized SCORM version `{}`, using 2004 3rd Edition",
                    other
                );
                ScormVersion::Scorm2004
            }
        }
    }

    /// Whether `tag` names a version explicitly (without the fallback).
    pub fn is_known_tag(tag: &str) -> bool {
        matches!(tag.trim().to_lowercase().as_str(), "1.2" | "2004" | "2004v3")
    }
}

impl fmt::Display for ScormVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScormVersion::Scorm12 => write!(f, "1.2"),
            ScormVersion::Scorm2004 => write!(f, "2004"),
        }
    }
}

/// Version-specific manifest tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionProfile {
    pub version: ScormVersion,

    /// Text of `<schemaversion>`.
    pub schema_version: &'static str,

    /// Qualified name of the attribute carrying `sco`/`asset` on resources.
    pub scorm_type_attr: &'static str,

    /// Namespace declarations for the root element, in output order.
    pub namespaces: Vec<(&'static str, &'static str)>,

    /// Value of `xsi:schemaLocation`.
    pub schema_location: String,
}

impl VersionProfile {
    /// Build the profile for `version`.
    ///
    /// `schema_dir` prefixes the `.xsd` locations of SCORM 2004 only. SCORM
    /// 1.2 packages must keep their schemas at the course root.
    pub fn new(version: ScormVersion, schema_dir: &str) -> Self {
        match version {
            ScormVersion::Scorm12 => VersionProfile {
                version,
                schema_version: "1.2",
                scorm_type_attr: "adlcp:scormtype",
                namespaces: vec![
                    ("xmlns", "http://www.imsproject.org/xsd/imscp_rootv1p1p2"),
                    ("xmlns:adlcp", "http://www.adlnet.org/xsd/adlcp_rootv1p2"),
                    ("xmlns:xsi", XSI_NS),
                ],
                schema_location: [
                    "http://www.imsproject.org/xsd/imscp_rootv1p1p2 imscp_rootv1p1p2.xsd",
                    "http://www.imsglobal.org/xsd/imsmd_rootv1p2p1 imsmd_rootv1p2p1.xsd",
                    "http://www.adlnet.org/xsd/adlcp_rootv1p2 adlcp_rootv1p2.xsd",
                ]
                .join(" "),
            },
            ScormVersion::Scorm2004 => VersionProfile {
                version,
                schema_version: "2004 3rd Edition",
                scorm_type_attr: "adlcp:scormType",
                namespaces: vec![
                    ("xmlns", "http://www.imsglobal.org/xsd/imscp_v1p1"),
                    ("xmlns:xsi", XSI_NS),
                    ("xmlns:adlcp", "http://www.adlnet.org/xsd/adlcp_v1p3"),
                    ("xmlns:adlseq", "http://www.adlnet.org/xsd/adlseq_v1p3"),
                    ("xmlns:adlnav", "http://www.adlnet.org/xsd/adlnav_v1p3"),
                    ("xmlns:imsss", "http://www.imsglobal.org/xsd/imsss"),
                ],
                schema_location: [
                    ("http://www.imsglobal.org/xsd/imscp_v1p1", "imscp_v1p1.xsd"),
                    ("http://www.adlnet.org/xsd/adlcp_v1p3", "adlcp_v1p3.xsd"),
                    ("http://www.adlnet.org/xsd/adlseq_v1p3", "adlseq_v1p3.xsd"),
                    ("http://www.adlnet.org/xsd/adlnav_v1p3", "adlnav_v1p3.xsd"),
                    ("http://www.imsglobal.org/xsd/imsss", "imsss_v1p0.xsd"),
                ]
                .iter()
                .map(|(urn, xsd)| format!("{} {}{}", urn, schema_dir, xsd))
                .collect::<Vec<_>>()
                .join(" "),
            },
        }
    }

    /// Resolve a profile straight from a version tag.
    pub fn from_tag(tag: &str, schema_dir: &str) -> Self {
        Self::new(ScormVersion::from_tag(tag), schema_dir)
    }

    /// Attributes to append to the `<manifest>` element.
    pub fn root_attributes(&self) -> Vec<(&'static str, String)> {
        let mut attrs: Vec<(&'static str, String)> = self
            .namespaces
            .iter()
            .map(|(k, v)| (*k, v.to_string()))
            .collect();
        attrs.push(("xsi:schemaLocation", self.schema_location.clone()));
        attrs
    }
}
