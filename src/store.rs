use async_trait::async_trait;

use crate::{
    auth::Session,
    error::{Error, Result},
    video::VideoRecord,
};

#[cfg(test)]
pub mod memory;

/// Video resource parts read and written back
pub const PARTS: [&str; 2] = ["snippet", "status"];

/// Read/replace access to video records
#[async_trait(?Send)]
pub trait VideoStore {
    /// Fetches a video, `None` if there is no video with this id
    async fn fetch(&self, video_id: &str) -> Result<Option<VideoRecord>>;
    /// Replaces the snippet and status of a video, returning the stored record
    async fn update(&self, record: VideoRecord) -> Result<VideoRecord>;
}

#[async_trait(?Send)]
impl VideoStore for Session {
    async fn fetch(&self, video_id: &str) -> Result<Option<VideoRecord>> {
        let parts: Vec<String> = PARTS.iter().map(|part| part.to_string()).collect();
        let (_, response) = match self
            .hub
            .videos()
            .list(&parts)
            .add_id(video_id)
            .add_scopes(&self.scopes)
            .doit()
            .await
        {
            Ok(response) => response,
            Err(e) => return Err(Error::from_api(e).await),
        };
        Ok(response
            .items
            .and_then(|items| items.into_iter().next())
            .map(VideoRecord::from))
    }
    async fn update(&self, record: VideoRecord) -> Result<VideoRecord> {
        let call = PARTS
            .iter()
            .fold(self.hub.videos().update(record.into_inner()), |call, part| {
                call.add_part(part)
            });
        match call.add_scopes(&self.scopes).doit().await {
            Ok((_, video)) => Ok(video.into()),
            Err(e) => Err(Error::from_api(e).await),
        }
    }
}
