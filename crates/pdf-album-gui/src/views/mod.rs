pub mod album;

pub use album::{AlbumState, ImageTile, show_album};
