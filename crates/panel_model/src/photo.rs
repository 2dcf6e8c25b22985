//! Photo attachment tracking
//!
//! The back panel can carry a reference photo. The attachment lives apart
//! from the geometry model and is correlated only by the side key, so that
//! copy/mirror operations over geometry never drag photos along.

use crate::PanelSide;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A photo attached to a panel: either already uploaded to the backend, or
/// freshly picked on the device and pending upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhotoRef {
    /// Uploaded photo, referenced by its backend identifier
    Remote { photo_id: String },
    /// Locally picked photo, not yet uploaded
    Pending { uri: String },
}

impl PhotoRef {
    /// Backend identifier, when the photo has been uploaded
    pub fn photo_id(&self) -> Option<&str> {
        match self {
            PhotoRef::Remote { photo_id } => Some(photo_id),
            PhotoRef::Pending { .. } => None,
        }
    }

    /// Local URI, when the photo is pending upload
    pub fn uri(&self) -> Option<&str> {
        match self {
            PhotoRef::Remote { .. } => None,
            PhotoRef::Pending { uri } => Some(uri),
        }
    }
}

/// Per-side photo attachments, keyed by panel side
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhotoAttachments {
    photos: HashMap<PanelSide, PhotoRef>,
}

impl PhotoAttachments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the attachment for a side
    pub fn get(&self, side: PanelSide) -> Option<&PhotoRef> {
        self.photos.get(&side)
    }

    /// Attach a photo to a side, replacing any existing attachment
    pub fn set(&mut self, side: PanelSide, photo: PhotoRef) {
        self.photos.insert(side, photo);
    }

    /// Remove a side's attachment
    pub fn clear(&mut self, side: PanelSide) -> Option<PhotoRef> {
        self.photos.remove(&side)
    }
}
