#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod clock;
pub mod config;
pub mod content;
pub mod discovery;
pub mod dispatch;
pub mod github;
pub mod reporter;
pub mod runner;
pub mod summary;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{
    load_or_default, ConfigError, FetchTarget, OwnerKind, SiteConfig, DEFAULT_CONFIG_FILE,
    DEFAULT_OUTPUT_DIR,
};
pub use content::{content_path, ContentError, ContentWriter, FrontMatterRenderer, WritePolicy};
pub use discovery::{discover_repositories, DiscoveryError, RepositoryRecord, PAGE_SIZE};
pub use dispatch::{DispatchOptions, FetchDispatcher, FetchError};
pub use github::{
    build_client, AccessToken, ClientError, DecodeError, GitHubClient, ListRequest, Readme,
    RepositoryClient, RepositoryPage, Visibility, ACCESS_TOKEN_ENV,
};
pub use reporter::{Level, MemoryReporter, Report, Reporter, TracingReporter};
pub use runner::{Runner, RunnerConfig, RunnerError};
pub use summary::{FetchOutcome, RunSummary};
