use std::fmt;

use google_youtube3::api::Channel;

use crate::{
    auth::Session,
    error::{Error, Result},
};

/// The channel a session acts for
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelInfo {
    pub id: String,
    pub title: String,
}
impl From<Channel> for ChannelInfo {
    fn from(channel: Channel) -> Self {
        Self {
            id: channel.id.unwrap_or_default(),
            title: channel
                .snippet
                .and_then(|snippet| snippet.title)
                .unwrap_or_default(),
        }
    }
}
impl fmt::Display for ChannelInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "channel: {} ({})", self.title, self.id)
    }
}

impl Session {
    /// Returns the channel of the authenticated user, if it has one
    pub async fn channel(&self) -> Result<Option<ChannelInfo>> {
        let parts = vec!["snippet".to_string()];
        match self
            .hub
            .channels()
            .list(&parts)
            .mine(true)
            .add_scopes(&self.scopes)
            .doit()
            .await
        {
            Ok((_, response)) => Ok(response
                .items
                .and_then(|items| items.into_iter().next())
                .map(ChannelInfo::from)),
            Err(e) => Err(Error::from_api(e).await),
        }
    }
}
