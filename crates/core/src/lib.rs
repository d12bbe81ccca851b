pub mod config;
pub mod error;
pub mod feed;
pub mod format;
pub mod normalize;
pub mod render;
pub mod settings;
pub mod view;

pub mod prelude {
    pub use crate::error::*;
    pub use crate::feed::*;
    pub use crate::settings::*;
    pub use crate::view::*;
}
