use crate::{config::Config, image_server::ImageServer, picker::RngPicker, store::DiskStore};
use anyhow::Result;
use log::LevelFilter;
use simple_logger::SimpleLogger;

mod config;
mod content_type;
mod image_server;
mod picker;
mod reply;
mod store;

fn main() -> Result<()> {
    SimpleLogger::new().with_level(LevelFilter::Info).init()?;

    let config = Config::get();
    let store = DiskStore::new(config.images_root.clone());

    ImageServer::new(config, store, RngPicker).start()
}
