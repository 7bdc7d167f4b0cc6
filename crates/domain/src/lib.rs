#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;
mod error;
mod exercise;
mod experience;
mod goal;
mod periodization;
mod plan;
mod pool;
pub mod protocol;
mod selection;
mod settings;
mod split;

pub use catalog::{Catalog, CatalogQuery};
pub use error::*;
pub use exercise::*;
pub use experience::*;
pub use goal::*;
pub use periodization::*;
pub use plan::*;
pub use pool::*;
pub use protocol::Protocol;
pub use selection::*;
pub use settings::*;
pub use split::*;
