use serde::Serialize;
use std::io::Cursor;
use tiny_http::{Header, Response};

pub static ROOT_MESSAGE: &str = "Internal Image API - Returns random images as binary data";

/// A fully-built response: either a JSON envelope or raw image bytes.
pub struct Reply {
    pub status: u16,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

#[derive(Serialize)]
struct ErrorEnvelope {
    status: u16,
    error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RootListing {
    status: u16,
    error: Option<()>,
    message: &'static str,
    endpoints: Vec<String>,
    total_categories: usize,
}

impl Reply {
    fn json<T: Serialize>(status: u16, value: &T) -> Self {
        Self {
            status,
            content_type: "application/json",
            body: serde_json::to_vec(value).unwrap_or_default(),
        }
    }

    pub fn image(content_type: &'static str, body: Vec<u8>) -> Self {
        Self {
            status: 200,
            content_type,
            body,
        }
    }

    pub fn listing(categories: Vec<String>) -> Self {
        let total_categories = categories.len();
        let endpoints = categories
            .into_iter()
            .map(|category| format!("/{category}"))
            .collect();

        Self::json(
            200,
            &RootListing {
                status: 200,
                error: None,
                message: ROOT_MESSAGE,
                endpoints,
                total_categories,
            },
        )
    }

    pub fn unknown_endpoint(path: &str) -> Self {
        Self::json(
            404,
            &ErrorEnvelope {
                status: 404,
                error: "Not Found",
                message: Some(format!("The endpoint '{path}' does not exist")),
            },
        )
    }

    pub fn no_images() -> Self {
        Self::json(
            404,
            &ErrorEnvelope {
                status: 404,
                error: "Not Found",
                message: Some("No images found".into()),
            },
        )
    }

    pub fn listing_failed() -> Self {
        Self::json(
            500,
            &ErrorEnvelope {
                status: 500,
                error: "Internal Server Error",
                message: Some("Failed to read images directory".into()),
            },
        )
    }

    pub fn read_failed() -> Self {
        Self::json(
            500,
            &ErrorEnvelope {
                status: 500,
                error: "Failed to read image file",
                message: None,
            },
        )
    }
}

impl From<Reply> for Response<Cursor<Vec<u8>>> {
    fn from(reply: Reply) -> Self {
        let mut response = Response::from_data(reply.body).with_status_code(reply.status);

        if let Ok(header) = Header::from_bytes("content-type", reply.content_type) {
            response = response.with_header(header);
        }

        response
    }
}
