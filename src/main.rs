use std::path::PathBuf;

use patch_video::{
    extract_video_id, update_video, PrivacyStatus, Session, SessionBuilder, VideoUpdate,
};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "patch-video", about = "Updating YouTube video metadata")]
struct Opt {
    /// Path to the OAuth 2.0 client secret file
    #[structopt(long, parse(from_os_str), default_value = "client_secret.json")]
    secrets: PathBuf,
    /// Keep the OAuth tokens in this file between runs
    #[structopt(long, parse(from_os_str))]
    token_cache: Option<PathBuf>,
    /// Local port of the OAuth redirect listener (ephemeral if not set)
    #[structopt(long)]
    port: Option<u16>,
    #[structopt(subcommand)]
    cmd: Command,
}

#[derive(Debug, StructOpt)]
enum Command {
    /// Update the metadata of a video, fields not given are left unchanged
    Update(UpdateOpt),
    /// Show the channel of the authenticated account
    Whoami,
}

#[derive(Debug, StructOpt)]
struct UpdateOpt {
    /// Video id or URL (https://youtube.com/shorts/<id>, https://www.youtube.com/watch?v=<id>)
    video: String,
    /// New title
    #[structopt(short, long)]
    title: Option<String>,
    /// New description
    #[structopt(short, long)]
    description: Option<String>,
    /// New comma separated tags
    #[structopt(long, use_delimiter = true)]
    tags: Option<Vec<String>>,
    /// New category id (e.g. 22: People & Blogs, 24: Entertainment, 28: Science & Technology)
    #[structopt(short, long)]
    category: Option<String>,
    /// New privacy status
    #[structopt(short, long, possible_values = &["public", "unlisted", "private"])]
    privacy: Option<PrivacyStatus>,
}
impl UpdateOpt {
    fn into_update(self) -> anyhow::Result<VideoUpdate> {
        Ok(VideoUpdate {
            video_id: extract_video_id(&self.video)?,
            title: self.title,
            description: self.description,
            tags: self.tags,
            category_id: self.category,
            privacy_status: self.privacy,
        })
    }
}

async fn whoami(session: &Session) {
    match session.channel().await {
        Ok(Some(channel)) => println!("{channel}"),
        Ok(None) => log::warn!("the authenticated account has no channel"),
        Err(e) => log::error!("channel lookup failed: {e}"),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let opt = Opt::from_args();

    let update = match opt.cmd {
        Command::Update(args) => Some(args.into_update()?),
        Command::Whoami => None,
    };

    let mut builder = SessionBuilder::new(opt.secrets);
    if let Some(path) = opt.token_cache {
        builder = builder.token_cache(path);
    }
    if let Some(port) = opt.port {
        builder = builder.redirect_port(port);
    }
    let session = builder.build().await?;

    match update {
        Some(update) => {
            update_video(&session, &update).await;
        }
        None => whoami(&session).await,
    }

    Ok(())
}
