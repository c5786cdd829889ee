//! Static assets embedded in the binary and served under `/images/`.

use axum::{
    extract::Path,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

/// Browsers may cache images for a week.
pub const IMAGE_CACHE_CONTROL: &str = "public, max-age=604800";

/// An embedded file.
#[derive(Debug)]
pub struct Asset {
    pub name: &'static str,
    pub content_type: &'static str,
    pub bytes: &'static [u8],
}

static IMAGES: &[Asset] = &[
    Asset {
        name: "monkey.svg",
        content_type: "image/svg+xml",
        bytes: include_bytes!("../../assets/images/monkey.svg"),
    },
    Asset {
        name: "favicon.svg",
        content_type: "image/svg+xml",
        bytes: include_bytes!("../../assets/images/favicon.svg"),
    },
];

pub fn find_image(name: &str) -> Option<&'static Asset> {
    IMAGES.iter().find(|asset| asset.name == name)
}

pub async fn serve_image(Path(name): Path<String>) -> Response {
    match find_image(&name) {
        Some(asset) => ([(header::CONTENT_TYPE, asset.content_type)], asset.bytes).into_response(),
        None => {
            tracing::debug!(name = %name, "Unknown image requested");
            (StatusCode::NOT_FOUND, "Not Found").into_response()
        }
    }
}
