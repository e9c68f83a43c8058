use dotenv::dotenv;
use std::{env::var, path::PathBuf};

pub struct Config {
    pub port: u16,
    pub images_root: PathBuf,
}

impl Config {
    pub fn get() -> Self {
        dotenv().ok();

        Self {
            port: var("PORT")
                .ok()
                .and_then(|port| port.trim().parse::<u16>().ok())
                .unwrap_or(4000),
            images_root: var("IMAGES_ROOT")
                .ok()
                .map(|images_root| PathBuf::from(images_root.trim()))
                .unwrap_or_else(|| PathBuf::from("images")),
        }
    }
}
