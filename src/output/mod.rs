mod format;
mod json;

pub use format::save_sprite_image;
pub use json::write_atlas_json;
