//! # YouTube video metadata patcher
//!
//! Reads the `snippet` and `status` parts of a video, overwrites the fields
//! given in a [VideoUpdate] and writes the whole record back.
//!
//! ```no_run
//! use patch_video::{authenticate, update_video, VideoUpdate, YOUTUBE_SCOPE};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let session = authenticate("client_secret.json", &[YOUTUBE_SCOPE]).await?;
//! let update = VideoUpdate::new("hRbmNm7z0Us")
//!     .title("NIJINOMORI HOUSE #shorts")
//!     .tags(["architecture"])
//!     .category_id("28");
//! update_video(&session, &update).await;
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod channel;
pub mod error;
pub mod patcher;
pub mod store;
pub mod update;
pub mod video;

pub use auth::{authenticate, Session, SessionBuilder, CLIENT_SECRETS_FILE, YOUTUBE_SCOPE};
pub use channel::ChannelInfo;
pub use error::Error;
pub use patcher::{update_video, Outcome};
pub use store::VideoStore;
pub use update::{extract_video_id, VideoIdError, VideoUpdate};
pub use video::{PrivacyStatus, VideoRecord};
