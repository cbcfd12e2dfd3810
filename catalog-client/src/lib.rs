pub mod backend;
pub mod config;
pub mod error;
pub mod html;
pub mod page;
pub mod poller;
pub mod render;
pub mod submit;

pub use backend::{Backend, HttpBackend};
pub use config::ClientConfig;
pub use error::ClientError;
pub use page::{Page, PageHandle, View};
pub use poller::{PollOutcome, PollerHandle, ReadinessPoller};
pub use render::{render, RenderOptions};
pub use submit::{SearchController, Submission};
