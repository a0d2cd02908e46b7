pub mod assemble;
mod delivery;
mod intake;
mod order;
mod session;
mod types;

pub use assemble::{PAGE_WIDTH_PT, assemble};
pub use delivery::save_document;
pub use intake::{filter_images, load_images};
pub use order::{Reorderable, SlotId, SlotOrder, recompute};
pub use session::AlbumSession;
pub use types::*;
