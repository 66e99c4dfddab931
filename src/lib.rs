//! Freight carrier website: static marketing pages plus JSON intake for the
//! contact, driver application and quote forms.

pub mod config;
pub mod error;
pub mod forms;
pub mod logger;
pub mod notify;
pub mod server;
pub mod site;
