// src/application/ports/mod.rs
pub mod archive;
pub mod site;
pub mod time;
pub mod util;

