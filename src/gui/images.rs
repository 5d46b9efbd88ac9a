use std::{collections::HashMap, path::PathBuf};

use iced::widget::image::Handle;

/// Where a part's image comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    Local(PathBuf),
    Remote(String),
}

impl ImageSource {
    pub fn parse(url: &str) -> Self {
        if url.starts_with("http://") || url.starts_with("https://") {
            ImageSource::Remote(url.to_string())
        } else {
            ImageSource::Local(PathBuf::from(url.strip_prefix("file://").unwrap_or(url)))
        }
    }
}

#[derive(Debug, Clone)]
pub enum RemoteImage {
    Loading,
    Loaded(Handle),
    Failed,
}

/// Downloaded images keyed by URL. Each URL is fetched at most once per session.
#[derive(Debug, Default)]
pub struct ImageCache {
    entries: HashMap<String, RemoteImage>,
}

impl ImageCache {
    pub fn get(&self, url: &str) -> Option<&RemoteImage> {
        self.entries.get(url)
    }

    /// Marks `url` as loading. Returns false when it is already known or not remote.
    pub fn request(&mut self, url: &str) -> bool {
        if !matches!(ImageSource::parse(url), ImageSource::Remote(_)) || self.entries.contains_key(url) {
            return false;
        }
        self.entries.insert(url.to_string(), RemoteImage::Loading);
        true
    }

    pub fn finish(&mut self, url: String, result: Result<Handle, String>) {
        let entry = match result {
            Ok(handle) => RemoteImage::Loaded(handle),
            Err(_) => RemoteImage::Failed,
        };
        self.entries.insert(url, entry);
    }
}

pub async fn fetch(url: String) -> Result<Handle, String> {
    let response = reqwest::get(&url)
        .await
        .and_then(reqwest::Response::error_for_status)
        .map_err(|e| e.to_string())?;
    let bytes = response.bytes().await.map_err(|e| e.to_string())?;
    Ok(Handle::from_bytes(bytes.to_vec()))
}
