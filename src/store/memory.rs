use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
};

use async_trait::async_trait;
use google_youtube3::api::Video;

use super::VideoStore;
use crate::{
    error::{Error, Result},
    video::VideoRecord,
};

/// In-memory video store
#[derive(Default)]
pub struct MemoryStore {
    videos: RefCell<HashMap<String, Video>>,
    updates: Cell<usize>,
    fetch_error: Option<Error>,
    update_error: Option<Error>,
}
impl MemoryStore {
    pub fn with_video(self, video: Video) -> Self {
        let id = video.id.clone().unwrap_or_default();
        self.videos.borrow_mut().insert(id, video);
        self
    }
    pub fn failing_fetch(self, error: Error) -> Self {
        Self {
            fetch_error: Some(error),
            ..self
        }
    }
    pub fn failing_update(self, error: Error) -> Self {
        Self {
            update_error: Some(error),
            ..self
        }
    }
    /// Number of update calls received
    pub fn updates(&self) -> usize {
        self.updates.get()
    }
}

#[async_trait(?Send)]
impl VideoStore for MemoryStore {
    async fn fetch(&self, video_id: &str) -> Result<Option<VideoRecord>> {
        if let Some(e) = &self.fetch_error {
            return Err(e.clone());
        }
        Ok(self
            .videos
            .borrow()
            .get(video_id)
            .cloned()
            .map(VideoRecord::from))
    }
    async fn update(&self, record: VideoRecord) -> Result<VideoRecord> {
        self.updates.set(self.updates.get() + 1);
        if let Some(e) = &self.update_error {
            return Err(e.clone());
        }
        let id = record
            .id()
            .ok_or_else(|| Error::Unexpected("video resource without id".to_string()))?
            .to_string();
        let mut videos = self.videos.borrow_mut();
        if !videos.contains_key(&id) {
            return Err(Error::RemoteService {
                status: 404,
                detail: format!("video {id} not found"),
            });
        }
        videos.insert(id, record.clone().into_inner());
        Ok(record)
    }
}
