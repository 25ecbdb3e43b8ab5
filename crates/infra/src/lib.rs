mod config;
mod repos;
mod services;
mod system;

pub use config::Config;
pub use repos::{IMeetingRepo, IMessageRepo, Repos};
pub use services::*;
use std::sync::Arc;
pub use system::{IRandom, ISys, RealRandom, RealSys, ScriptedRandom, StaticSys};

/// Shared handle to every external collaborator the use cases need: the
/// repositories, the service boundaries, the configuration, the clock and the
/// random source. Constructed once per process and passed by reference.
#[derive(Clone)]
pub struct Context {
    pub repos: Repos,
    pub services: Services,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
    pub rng: Arc<dyn IRandom>,
}

/// The consumed service boundaries. The host application supplies real
/// implementations; in-memory variants exist for tests.
#[derive(Clone)]
pub struct Services {
    pub inference: Arc<dyn ILanguageInference>,
    pub notifier: Arc<dyn INotifier>,
    pub mail: Arc<dyn IMailProvider>,
}

impl Context {
    /// Context backed by in-memory repositories. Persistent storage is the
    /// host's concern, so this is the only construction path this crate owns.
    pub fn create_inmemory(services: Services) -> Self {
        Self {
            repos: Repos::create_inmemory(),
            services,
            config: Config::new(),
            sys: Arc::new(RealSys {}),
            rng: Arc::new(RealRandom {}),
        }
    }
}

/// Context wired with in-memory services as well. Intended for tests and
/// local experimentation.
pub fn setup_context() -> Context {
    Context::create_inmemory(Services {
        inference: Arc::new(ScriptedInference::default()),
        notifier: Arc::new(InMemoryNotifier::new()),
        mail: Arc::new(InMemoryMailProvider::new()),
    })
}
