use crate::{
    config::Config, content_type::content_type, picker::Picker, reply::Reply, store::ImageStore,
};
use anyhow::{Result, bail};
use log::{error, info};
use std::{
    io::Cursor,
    net::{Ipv4Addr, SocketAddrV4},
};
use tiny_http::{Method, Request, Response, Server};

pub struct ImageServer<S, P> {
    config: Config,
    store: S,
    picker: P,
}

impl<S: ImageStore, P: Picker> ImageServer<S, P> {
    pub fn new(config: Config, store: S, picker: P) -> Self {
        Self {
            config,
            store,
            picker,
        }
    }

    pub fn start(&mut self) -> Result<()> {
        let Ok(server) = Server::http(SocketAddrV4::new(
            Ipv4Addr::new(0, 0, 0, 0),
            self.config.port,
        )) else {
            bail!("Could not create server");
        };

        info!(
            "Internal Image API listening on port {}, images root: {}",
            self.config.port,
            self.config.images_root.display(),
        );

        for request in server.incoming_requests() {
            if let Err(error) = self.handle(request) {
                error!("Error while responding to request: {error}");
            }
        }

        Ok(())
    }

    fn handle(&mut self, request: Request) -> Result<()> {
        let reply = self.route(request.method(), request.url());
        let response: Response<Cursor<Vec<u8>>> = reply.into();
        request.respond(response)?;

        Ok(())
    }

    fn route(&mut self, method: &Method, url: &str) -> Reply {
        let path = url.split('?').next().unwrap_or_default();
        let segment = path.trim_matches('/');

        if *method != Method::Get {
            return Reply::unknown_endpoint(&format!("/{segment}"));
        }

        if segment.is_empty() {
            self.list_categories()
        } else {
            self.random_image(segment)
        }
    }

    fn list_categories(&self) -> Reply {
        match self.store.categories() {
            Ok(categories) => Reply::listing(categories),
            Err(error) => {
                error!("Failed to read images directory: {error}");
                Reply::listing_failed()
            }
        }
    }

    fn random_image(&mut self, category: &str) -> Reply {
        // Category names become directory names, so traversal-shaped
        // segments are treated as nonexistent endpoints.
        if !is_clean_segment(category) || !self.store.is_category(category) {
            return Reply::unknown_endpoint(&format!("/{category}"));
        }

        let files = match self.store.files(category) {
            Ok(files) => files,
            Err(error) => {
                error!("Failed to read image file: {error}");
                return Reply::read_failed();
            }
        };

        if files.is_empty() {
            return Reply::no_images();
        }

        let filename = &files[self.picker.pick(files.len())];

        match self.store.read(category, filename) {
            Ok(bytes) => Reply::image(content_type(filename), bytes),
            Err(error) => {
                error!("Failed to read image file: {error}");
                Reply::read_failed()
            }
        }
    }
}

fn is_clean_segment(segment: &str) -> bool {
    segment != "." && segment != ".." && !segment.contains(['/', '\\'])
}
