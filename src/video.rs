use std::{fmt, ops::Deref};

use google_youtube3::api::{Video, VideoSnippet, VideoStatus};
use strum_macros::{Display, EnumIter, EnumString};

/// Video visibility
#[derive(EnumString, Display, EnumIter, Clone, Copy, PartialEq, Eq, Debug)]
#[strum(serialize_all = "lowercase")]
pub enum PrivacyStatus {
    Public,
    Unlisted,
    Private,
}

/// The `snippet` and `status` parts of a video
///
/// The whole API resource is kept so that fields this crate does not manage
/// are written back as they were read.
#[derive(Debug, Clone, Default)]
pub struct VideoRecord(Video);
impl Deref for VideoRecord {
    type Target = Video;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
impl From<Video> for VideoRecord {
    fn from(video: Video) -> Self {
        Self(video)
    }
}
impl VideoRecord {
    pub fn into_inner(self) -> Video {
        self.0
    }
    pub fn id(&self) -> Option<&str> {
        self.0.id.as_deref()
    }
    pub fn title(&self) -> Option<&str> {
        self.0.snippet.as_ref()?.title.as_deref()
    }
    pub fn description(&self) -> Option<&str> {
        self.0.snippet.as_ref()?.description.as_deref()
    }
    pub fn tags(&self) -> Option<&[String]> {
        self.0.snippet.as_ref()?.tags.as_deref()
    }
    pub fn category_id(&self) -> Option<&str> {
        self.0.snippet.as_ref()?.category_id.as_deref()
    }
    /// The privacy status as sent by the API
    pub fn privacy_status(&self) -> Option<&str> {
        self.0.status.as_ref()?.privacy_status.as_deref()
    }
    /// The privacy status if it is one of the known values
    pub fn privacy(&self) -> Option<PrivacyStatus> {
        self.privacy_status()?.parse().ok()
    }
    pub(crate) fn snippet_mut(&mut self) -> &mut VideoSnippet {
        self.0.snippet.get_or_insert_with(Default::default)
    }
    pub(crate) fn status_mut(&mut self) -> &mut VideoStatus {
        self.0.status.get_or_insert_with(Default::default)
    }
}
impl fmt::Display for VideoRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "title: {}", self.title().unwrap_or_default())?;
        if let Some(description) = self.description() {
            write!(f, "\ndescription: {}", description)?;
        }
        if let Some(tags) = self.tags() {
            write!(f, "\ntags: {}", tags.join(", "))?;
        }
        if let Some(privacy_status) = self.privacy_status() {
            write!(f, "\nprivacy status: {}", privacy_status)?;
        }
        Ok(())
    }
}
