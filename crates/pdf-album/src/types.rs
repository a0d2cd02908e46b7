use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AlbumError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to read {name}: {source}")]
    Read {
        name: String,
        source: std::io::Error,
    },
    #[error("Failed to decode {name}: {detail}")]
    Decode { name: String, detail: String },
    #[error("No images selected")]
    NoImages,
    #[error("Slot {slot} is out of range for a selection of {count} images")]
    InvalidSlot { slot: usize, count: usize },
    #[error("Slot {slot} appears more than once in the visual order")]
    DuplicateSlot { slot: usize },
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, AlbumError>;

/// Declared media type of a selected file.
///
/// Derived from the file extension at selection time. `Other` covers
/// raster formats that pass intake but are skipped at assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaType {
    Png,
    Jpeg,
    Other(String),
}

impl MediaType {
    pub fn from_mime(mime: &str) -> Option<Self> {
        let mime = mime.trim().to_ascii_lowercase();
        if !mime.starts_with("image/") {
            return None;
        }
        Some(match mime.as_str() {
            "image/png" => Self::Png,
            "image/jpeg" | "image/jpg" => Self::Jpeg,
            _ => Self::Other(mime),
        })
    }

    /// Classify a path by extension. Returns `None` for non-image files.
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "png" => Some(Self::Png),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "gif" => Some(Self::Other("image/gif".to_string())),
            "bmp" => Some(Self::Other("image/bmp".to_string())),
            "webp" => Some(Self::Other("image/webp".to_string())),
            "tif" | "tiff" => Some(Self::Other("image/tiff".to_string())),
            _ => None,
        }
    }

    /// Whether the assembler has a decode path for this type.
    pub fn is_supported(&self) -> bool {
        matches!(self, Self::Png | Self::Jpeg)
    }

    pub fn mime(&self) -> &str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::Other(mime) => mime,
        }
    }
}

/// One selected image file. Identity is the original selection index;
/// the struct is immutable once the selection is installed.
#[derive(Debug, Clone)]
pub struct SelectedImage {
    pub index: usize,
    pub name: String,
    pub media_type: MediaType,
    pub bytes: Vec<u8>,
}

pub const DEFAULT_TITLE: &str = "Converted PDF";

/// Document-level metadata, read once when conversion starts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DocumentMetadata {
    pub title: String,
    pub author: String,
    pub subject: String,
    pub keywords: String,
}

impl DocumentMetadata {
    /// Apply defaults: a blank title becomes [`DEFAULT_TITLE`], the other
    /// fields stay as entered (blank means blank).
    pub fn resolved(&self) -> Self {
        let mut meta = self.clone();
        if meta.title.trim().is_empty() {
            meta.title = DEFAULT_TITLE.to_string();
        }
        meta
    }

    /// Download file name: `{title}.pdf`, with the default title applied.
    pub fn file_name(&self) -> String {
        format!("{}.pdf", self.resolved().title)
    }

    /// Load metadata from a JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let metadata = serde_json::from_slice(&bytes)
            .map_err(|e| AlbumError::Config(format!("Failed to parse metadata: {}", e)))?;
        Ok(metadata)
    }

    /// Save metadata to a JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| AlbumError::Config(format!("Failed to serialize metadata: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }
}

/// The serialized PDF plus the facts baked into it.
#[derive(Debug, Clone)]
pub struct AssembledDocument {
    pub bytes: Vec<u8>,
    /// (width, height) of each page in points, in page order.
    pub page_sizes_pt: Vec<(f32, f32)>,
    /// Metadata as written into the document header (defaults applied).
    pub metadata: DocumentMetadata,
}

impl AssembledDocument {
    pub fn page_count(&self) -> usize {
        self.page_sizes_pt.len()
    }
}

/// An image dropped from a run because its declared type has no decode path.
#[derive(Debug, Clone)]
pub struct SkippedImage {
    pub index: usize,
    pub name: String,
    pub media_type: MediaType,
}

/// Outcome of one assembly run.
#[derive(Debug, Clone)]
pub struct Assembly {
    pub document: AssembledDocument,
    pub skipped: Vec<SkippedImage>,
}
