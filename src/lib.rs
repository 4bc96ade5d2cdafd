pub mod error;
pub mod options;
pub mod repair;
pub mod syntax;
pub mod transform;
pub mod truncate;

#[cfg(feature = "gitmoji")]
pub mod gitmoji;
#[cfg(feature = "payload")]
pub mod payload;

pub use error::Error;
pub use options::*;
pub use repair::*;
pub use syntax::*;
pub use transform::*;
pub use truncate::*;

#[cfg(feature = "gitmoji")]
pub use gitmoji::*;
#[cfg(feature = "payload")]
pub use payload::*;
