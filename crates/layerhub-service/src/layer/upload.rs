//! Upload source validation for layer creation.

use bytes::Bytes;

use layerhub_core::error::AppError;

/// File extensions accepted as geospatial content.
pub const GEO_FILE_EXTENSIONS: &[&str] = &[
    "geojson", "json", "shp", "shx", "dbf", "kml", "kmz", "gpkg", "gml", "tif", "tiff", "csv",
];

/// An uploaded file payload.
#[derive(Debug, Clone)]
pub struct LayerFile {
    /// Original filename, including extension.
    pub filename: String,
    /// Raw file content.
    pub data: Bytes,
}

/// The content source supplied on layer creation.
///
/// Exactly one of the two fields must be populated: a layer's content is
/// always retrievable through `file_link` alone, so creation must pick a
/// single authoritative source.
#[derive(Debug, Clone, Default)]
pub struct UploadSource {
    /// Uploaded file, stored in the object store.
    pub file: Option<LayerFile>,
    /// External URL, recorded verbatim.
    pub server_link: Option<String>,
}

impl UploadSource {
    /// Enforce the exactly-one-source rule.
    pub fn validate(&self) -> Result<(), AppError> {
        match (&self.file, &self.server_link) {
            (None, None) => Err(AppError::missing_upload_source(
                "Both file and server_link cannot be empty. Provide one of them.",
            )),
            (Some(_), Some(_)) => Err(AppError::conflicting_upload_source(
                "Both file and server_link cannot be provided at once. Provide only one.",
            )),
            _ => Ok(()),
        }
    }
}

/// The text after the last `.` of a filename, lowercased.
///
/// A filename without a dot yields the whole name, which will simply not
/// match the allow-list.
pub fn extension_of(filename: &str) -> String {
    filename
        .rsplit('.')
        .next()
        .unwrap_or(filename)
        .to_lowercase()
}

/// Whether the filename carries an accepted geo extension.
pub fn is_geo_file(filename: &str) -> bool {
    GEO_FILE_EXTENSIONS.contains(&extension_of(filename).as_str())
}
