mod downscale;
mod foreground;

pub use downscale::downscale_any;
pub use foreground::{foreground_mask, most_common_rgb};
