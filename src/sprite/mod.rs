mod cropper;
mod loader;
mod record;

pub use cropper::{CropBox, SpriteCrop, crop_component};
pub use loader::{SpriteSheet, load_sheet};
pub use record::{SpriteRecord, sprite_filename};
