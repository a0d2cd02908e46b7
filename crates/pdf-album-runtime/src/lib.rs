use std::path::PathBuf;

// Re-export types from the library crate
pub use pdf_album::{
    AssembledDocument, Assembly, DocumentMetadata, SelectedImage, SkippedImage, SlotId,
};

/// Commands sent from UI to worker
#[derive(Debug)]
pub enum AlbumCommand {
    /// Replace the selection with the images at `paths` (already filtered
    /// to image types by the caller).
    LoadImages { paths: Vec<PathBuf> },
    /// Run one assembly over the ordered selection. The UI must not send
    /// another Assemble until the previous run has completed or failed.
    Assemble {
        images: Vec<SelectedImage>,
        metadata: DocumentMetadata,
    },
    /// Write an assembled document to disk.
    Save {
        document: AssembledDocument,
        path: PathBuf,
    },
}

/// Updates sent from worker to UI
#[derive(Debug, Clone)]
pub enum AlbumUpdate {
    Progress {
        operation: String,
        current: usize,
        total: usize,
    },
    /// A fresh selection, with decoded thumbnail pixels for the tiles.
    /// Thumbnails line up with `images` by position; an entry is `None`
    /// when the preview decode failed (the image may still convert).
    ImagesLoaded {
        images: Vec<SelectedImage>,
        thumbnails: Vec<Option<Thumbnail>>,
    },
    AssemblyComplete {
        assembly: Assembly,
    },
    Saved {
        path: PathBuf,
    },
    Error {
        message: String,
    },
}

/// RGBA preview pixels for one selected image.
#[derive(Debug, Clone)]
pub struct Thumbnail {
    pub slot: SlotId,
    pub width: usize,
    pub height: usize,
    pub rgba_data: Vec<u8>,
}
