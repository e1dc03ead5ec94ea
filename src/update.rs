use url::Url;

use crate::video::{PrivacyStatus, VideoRecord};

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum VideoIdError {
    #[error("no video id found in {0:?}")]
    Missing(String),
}

/// Extracts a video id from either a bare id or a video URL
///
/// For URLs the `v` query parameter is used when present
/// (`https://www.youtube.com/watch?v=<id>`), otherwise the last path segment
/// (`https://youtube.com/shorts/<id>`, `https://youtu.be/<id>`).
pub fn extract_video_id(input: &str) -> Result<String, VideoIdError> {
    let input = input.trim();
    let id = match Url::parse(input) {
        Ok(url) if url.has_host() => url
            .query_pairs()
            .find_map(|(key, value)| (key == "v").then(|| value.into_owned()))
            .or_else(|| {
                url.path_segments()?
                    .filter(|segment| !segment.is_empty())
                    .last()
                    .map(String::from)
            }),
        _ => Some(input.to_string()),
    };
    id.filter(|id| !id.is_empty())
        .ok_or_else(|| VideoIdError::Missing(input.to_string()))
}

/// Metadata overrides of one video
///
/// Every field left to `None` keeps the value fetched from the API.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VideoUpdate {
    pub video_id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
    pub category_id: Option<String>,
    pub privacy_status: Option<PrivacyStatus>,
}
impl VideoUpdate {
    /// Creates an update of video `video_id` without any override
    pub fn new<S: Into<String>>(video_id: S) -> Self {
        Self {
            video_id: video_id.into(),
            ..Default::default()
        }
    }
    pub fn title<S: Into<String>>(self, title: S) -> Self {
        Self {
            title: Some(title.into()),
            ..self
        }
    }
    pub fn description<S: Into<String>>(self, description: S) -> Self {
        Self {
            description: Some(description.into()),
            ..self
        }
    }
    pub fn tags<I, S>(self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tags: Some(tags.into_iter().map(Into::into).collect()),
            ..self
        }
    }
    pub fn category_id<S: Into<String>>(self, category_id: S) -> Self {
        Self {
            category_id: Some(category_id.into()),
            ..self
        }
    }
    pub fn privacy_status(self, privacy_status: PrivacyStatus) -> Self {
        Self {
            privacy_status: Some(privacy_status),
            ..self
        }
    }
    /// Returns true if no field is overridden
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.tags.is_none()
            && self.category_id.is_none()
            && self.privacy_status.is_none()
    }
    /// Overwrites the fields of `record` that have an override
    pub fn apply(&self, record: &mut VideoRecord) {
        if let Some(title) = &self.title {
            record.snippet_mut().title = Some(title.clone());
        }
        if let Some(description) = &self.description {
            record.snippet_mut().description = Some(description.clone());
        }
        if let Some(tags) = &self.tags {
            record.snippet_mut().tags = Some(tags.clone());
        }
        if let Some(category_id) = &self.category_id {
            record.snippet_mut().category_id = Some(category_id.clone());
        }
        if let Some(privacy_status) = self.privacy_status {
            record.status_mut().privacy_status = Some(privacy_status.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use google_youtube3::api::{Video, VideoSnippet, VideoStatus};

    fn record() -> VideoRecord {
        Video {
            id: Some("hRbmNm7z0Us".to_string()),
            snippet: Some(VideoSnippet {
                title: Some("NIJINOMORI HOUSE 2003".to_string()),
                description: Some("short trip".to_string()),
                tags: Some(vec!["architecture".to_string()]),
                category_id: Some("22".to_string()),
                default_language: Some("ja".to_string()),
                ..Default::default()
            }),
            status: Some(VideoStatus {
                privacy_status: Some("unlisted".to_string()),
                embeddable: Some(true),
                ..Default::default()
            }),
            ..Default::default()
        }
        .into()
    }

    fn as_json(record: &VideoRecord) -> serde_json::Value {
        serde_json::to_value(&**record).unwrap()
    }

    #[test]
    fn bare_id() {
        assert_eq!(extract_video_id(" hRbmNm7z0Us\n").unwrap(), "hRbmNm7z0Us");
    }

    #[test]
    fn shorts_url() {
        assert_eq!(
            extract_video_id("https://youtube.com/shorts/hRbmNm7z0Us").unwrap(),
            "hRbmNm7z0Us"
        );
        assert_eq!(
            extract_video_id("https://youtube.com/shorts/VX91g9K_wto/").unwrap(),
            "VX91g9K_wto"
        );
    }

    #[test]
    fn watch_and_short_link_urls() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=VX91g9K_wto&t=42").unwrap(),
            "VX91g9K_wto"
        );
        assert_eq!(
            extract_video_id("https://youtu.be/VX91g9K_wto?si=abc").unwrap(),
            "VX91g9K_wto"
        );
    }

    #[test]
    fn missing_id() {
        assert_eq!(
            extract_video_id("  "),
            Err(VideoIdError::Missing(String::new()))
        );
        assert!(extract_video_id("https://youtube.com/").is_err());
    }

    #[test]
    fn no_override_is_identity() {
        let update = VideoUpdate::new("hRbmNm7z0Us");
        assert!(update.is_empty());
        let mut patched = record();
        update.apply(&mut patched);
        assert_eq!(as_json(&patched), as_json(&record()));
    }

    #[test]
    fn title_only() {
        let mut patched = record();
        VideoUpdate::new("hRbmNm7z0Us")
            .title("X")
            .apply(&mut patched);
        assert_eq!(patched.title(), Some("X"));

        let mut expected = as_json(&record());
        expected["snippet"]["title"] = "X".into();
        assert_eq!(as_json(&patched), expected);
    }

    #[test]
    fn every_field() {
        let mut patched = record();
        let update = VideoUpdate::new("hRbmNm7z0Us")
            .title("NIJINOMORI HOUSE #shorts")
            .description("")
            .tags(["建築"])
            .category_id("28")
            .privacy_status(PrivacyStatus::Public);
        assert!(!update.is_empty());
        update.apply(&mut patched);
        assert_eq!(patched.title(), Some("NIJINOMORI HOUSE #shorts"));
        assert_eq!(patched.description(), Some(""));
        assert_eq!(patched.tags(), Some(&["建築".to_string()][..]));
        assert_eq!(patched.category_id(), Some("28"));
        assert_eq!(patched.privacy(), Some(PrivacyStatus::Public));
        assert_eq!(patched.id(), Some("hRbmNm7z0Us"));
        assert_eq!(
            patched.snippet.as_ref().unwrap().default_language.as_deref(),
            Some("ja")
        );
        assert_eq!(patched.status.as_ref().unwrap().embeddable, Some(true));
    }

    #[test]
    fn empty_tags_clear_the_list() {
        let mut patched = record();
        VideoUpdate::new("hRbmNm7z0Us")
            .tags(Vec::<String>::new())
            .apply(&mut patched);
        assert_eq!(patched.tags(), Some(&[][..]));
    }

    #[test]
    fn override_creates_missing_parts() {
        let mut patched = VideoRecord::from(Video {
            id: Some("hRbmNm7z0Us".to_string()),
            ..Default::default()
        });
        VideoUpdate::new("hRbmNm7z0Us")
            .privacy_status(PrivacyStatus::Private)
            .apply(&mut patched);
        assert_eq!(patched.privacy_status(), Some("private"));
        assert!(patched.snippet.is_none());
    }
}
