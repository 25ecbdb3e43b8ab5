use chrono_tz::Tz;
use tracing::{info, log::warn};

#[derive(Debug, Clone)]
pub struct Config {
    /// How many minutes before a meeting's start its reminder fires.
    pub reminder_lead_time_minutes: i64,
    /// Timezone assumed for extracted start instants that carry no offset.
    /// The instant is resolved in this timezone and then normalized to UTC.
    pub naive_time_tz: Tz,
    /// Webhook endpoint for reminder and conflict notifications, if the host
    /// delivers them over HTTP.
    pub webhook_url: Option<String>,
    /// Shared key sent along with every webhook notification.
    pub webhook_key: Option<String>,
}

impl Config {
    pub fn new() -> Self {
        let default_lead_time = 15;
        let reminder_lead_time_minutes = match std::env::var("REMINDER_LEAD_TIME_MINUTES") {
            Ok(minutes) => match minutes.parse::<i64>() {
                Ok(minutes) if minutes > 0 => minutes,
                _ => {
                    warn!(
                        "The given REMINDER_LEAD_TIME_MINUTES: {} is not valid, falling back to the default: {}.",
                        minutes, default_lead_time
                    );
                    default_lead_time
                }
            },
            Err(_) => default_lead_time,
        };

        let naive_time_tz = match std::env::var("NAIVE_TIME_TZ") {
            Ok(tz) => match tz.parse::<Tz>() {
                Ok(tz) => tz,
                Err(_) => {
                    warn!(
                        "The given NAIVE_TIME_TZ: {} is not a valid timezone, falling back to UTC.",
                        tz
                    );
                    Tz::UTC
                }
            },
            Err(_) => Tz::UTC,
        };

        let webhook_url = std::env::var("WEBHOOK_URL").ok();
        let webhook_key = std::env::var("WEBHOOK_KEY").ok();
        if webhook_url.is_none() {
            info!("Did not find WEBHOOK_URL environment variable. Webhook notifications are disabled.");
        }

        Self {
            reminder_lead_time_minutes,
            naive_time_tz,
            webhook_url,
            webhook_key,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
