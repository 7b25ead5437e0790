pub mod address;
pub mod config;
pub mod location;
pub mod movement;
pub mod pets;
pub mod sound;
pub mod status;

pub use address::*;
pub use config::*;
pub use location::*;
pub use movement::*;
pub use pets::*;
pub use sound::*;
pub use status::*;
