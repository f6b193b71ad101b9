pub mod disc_instance;
pub mod surface;

pub use disc_instance::{DiscBuffer, DiscInstance};
pub use surface::Surface;
