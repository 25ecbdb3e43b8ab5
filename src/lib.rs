mod telemetry;

pub use mailsense_core::*;
pub use mailsense_domain as domain;
pub use mailsense_infra as infra;
pub use telemetry::{get_subscriber, init_subscriber};
