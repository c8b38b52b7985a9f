#[macro_use]
extern crate rocket;

pub mod cli;
pub mod config;
pub mod content;
pub mod dom;
pub mod icons;
pub mod interactions;
pub mod loader;
pub mod render;
pub mod routes;
pub mod site;
pub mod skeleton;
