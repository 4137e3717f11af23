// Submission flow: Idle -> Loading -> Success | Invalid

use async_trait::async_trait;
use std::time::Duration;

use crate::extractor::{extract_video_id, VideoId};
use crate::resolver::{resolve_thumbnails, ThumbnailDescriptor};

pub const INVALID_URL_MESSAGE: &str = "Invalid YouTube URL. Please check the link and try again.";

/// Delay inserted before presenting results. Deliberate pacing so results
/// do not flash in instantly; not a real network wait.
pub const PACING_DELAY: Duration = Duration::from_millis(500);

/// Injectable pacing delay so tests can run submissions synchronously.
#[async_trait]
pub trait Pacer: Send + Sync {
    async fn pace(&self);
}

pub struct FixedDelayPacer(pub Duration);

#[async_trait]
impl Pacer for FixedDelayPacer {
    async fn pace(&self) {
        tokio::time::sleep(self.0).await;
    }
}

/// Pacer that completes immediately.
pub struct NoPacer;

#[async_trait]
impl Pacer for NoPacer {
    async fn pace(&self) {}
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Idle,
    Loading,
    Success(Vec<ThumbnailDescriptor>),
    Invalid(String),
}

/// One user-facing submit cycle over the extractor and resolver.
pub struct Session {
    state: SessionState,
    video_id: Option<VideoId>,
    pacer: Box<dyn Pacer>,
}

impl Session {
    pub fn new(pacer: Box<dyn Pacer>) -> Self {
        Self {
            state: SessionState::Idle,
            video_id: None,
            pacer,
        }
    }

    /// Session with the production pacing delay.
    pub fn with_default_pacing() -> Self {
        Self::new(Box::new(FixedDelayPacer(PACING_DELAY)))
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Id of the last successful submission, if any.
    pub fn video_id(&self) -> Option<&VideoId> {
        self.video_id.as_ref()
    }

    /// Run one submit cycle. Prior results and errors are cleared up front;
    /// an unrecognized input goes straight to `Invalid` without pacing.
    ///
    /// Submissions are serialized through `&mut self`, so a resubmission
    /// cannot overlap an in-flight one.
    pub async fn submit(&mut self, input: &str) -> &SessionState {
        self.state = SessionState::Loading;
        self.video_id = None;

        let Some(id) = extract_video_id(input) else {
            self.state = SessionState::Invalid(INVALID_URL_MESSAGE.to_string());
            return &self.state;
        };

        let thumbnails = resolve_thumbnails(&id);
        self.pacer.pace().await;

        self.video_id = Some(id);
        self.state = SessionState::Success(thumbnails);
        &self.state
    }
}
