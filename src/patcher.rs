use crate::{
    error::{Error, Result},
    store::VideoStore,
    update::VideoUpdate,
    video::VideoRecord,
};

/// What [update_video] did
#[derive(Debug)]
pub enum Outcome {
    /// The record as stored after the update
    Updated(VideoRecord),
    NotFound,
    Failed(Error),
}

/// Fetches a video, applies the overrides and writes the whole record back
///
/// Failures are logged and never propagated.
pub async fn update_video<S>(store: &S, update: &VideoUpdate) -> Outcome
where
    S: VideoStore + ?Sized,
{
    let video_id = &update.video_id;
    match patch(store, update).await {
        Ok(Some(record)) => {
            log::info!("video {:?} updated", video_id);
            println!("{record}");
            Outcome::Updated(record)
        }
        Ok(None) => {
            log::warn!("video {:?} not found", video_id);
            Outcome::NotFound
        }
        Err(e) => {
            match &e {
                Error::RemoteService { status, detail } => {
                    log::error!("API error (HTTP {status}) on video {video_id:?}: {detail}")
                }
                Error::Unexpected(msg) => {
                    log::error!("unexpected error on video {video_id:?}: {msg}")
                }
            }
            Outcome::Failed(e)
        }
    }
}

async fn patch<S>(store: &S, update: &VideoUpdate) -> Result<Option<VideoRecord>>
where
    S: VideoStore + ?Sized,
{
    log::info!("Fetching video {:?}...", update.video_id);
    let Some(mut record) = store.fetch(&update.video_id).await? else {
        return Ok(None);
    };
    if update.is_empty() {
        log::warn!("no override given, the record is written back unchanged");
    }
    update.apply(&mut record);
    store.update(record).await.map(Some)
}
