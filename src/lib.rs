pub mod dataset;
pub mod error;
pub mod output;
pub mod parser;
pub mod record;
pub mod render;
pub mod tile;
