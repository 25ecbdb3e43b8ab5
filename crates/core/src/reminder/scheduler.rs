use chrono::{DateTime, Duration, Utc};
use mailsense_domain::{reminder_job_id, Meeting, ReminderPayload, ID};
use mailsense_infra::{Context, INotifier, ISys};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex};
use tokio::task::JoinHandle;
use tracing::debug;

struct ArmedJob {
    generation: u64,
    fire_at: DateTime<Utc>,
    handle: JoinHandle<()>,
}

#[derive(Default)]
struct JobRegistry {
    next_generation: u64,
    jobs: HashMap<String, ArmedJob>,
}

/// Process-wide registry of armed reminder timers, keyed by the derived
/// reminder job id. One job per meeting: arming again supersedes the earlier
/// job. Jobs are not persisted; `ScheduleUpcomingRemindersUseCase` rebuilds
/// the registry from stored meetings after a restart.
pub struct ReminderScheduler {
    registry: Arc<Mutex<JobRegistry>>,
    sys: Arc<dyn ISys>,
    notifier: Arc<dyn INotifier>,
    lead_time: Duration,
}

impl ReminderScheduler {
    pub fn new(ctx: &Context) -> Self {
        Self {
            registry: Arc::new(Mutex::new(JobRegistry::default())),
            sys: ctx.sys.clone(),
            notifier: ctx.services.notifier.clone(),
            lead_time: Duration::minutes(ctx.config.reminder_lead_time_minutes),
        }
    }

    /// Arms the reminder for `meeting`, firing `lead_time` before its start.
    /// A fire instant that is not strictly in the future drops the job
    /// silently. Returns whether a job was armed.
    pub fn arm(&self, meeting: &Meeting) -> bool {
        let now = self.sys.now();
        let fire_at = meeting.start - self.lead_time;
        if fire_at <= now {
            debug!(
                "Reminder for meeting {} was already due at {}, dropping it",
                meeting.id, fire_at
            );
            return false;
        }

        let job_id = reminder_job_id(&meeting.id);
        let payload = ReminderPayload::from_meeting(meeting);
        let delay = (fire_at - now)
            .to_std()
            .unwrap_or_else(|_| std::time::Duration::from_secs(0));
        let shared_registry = self.registry.clone();
        let notifier = self.notifier.clone();
        let task_job_id = job_id.clone();

        // Registering the new timer and aborting the superseded one happens
        // under a single lock hold, so no two timers for the same meeting are
        // ever live at once.
        let mut registry = self.registry.lock().unwrap();
        registry.next_generation += 1;
        let generation = registry.next_generation;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            notifier.deliver_reminder(&payload).await;
            // A re-arm may have replaced this job while the delivery was in
            // flight; only the generation that registered the entry may
            // remove it.
            let mut registry = shared_registry.lock().unwrap();
            if registry
                .jobs
                .get(&task_job_id)
                .map(|job| job.generation == generation)
                .unwrap_or(false)
            {
                registry.jobs.remove(&task_job_id);
            }
        });
        if let Some(superseded) = registry.jobs.insert(
            job_id,
            ArmedJob {
                generation,
                fire_at,
                handle,
            },
        ) {
            superseded.handle.abort();
        }
        true
    }

    /// Cancels the reminder for `meeting_id`. Cancelling a job that already
    /// fired or never existed is a no-op.
    pub fn cancel(&self, meeting_id: &ID) {
        let job_id = reminder_job_id(meeting_id);
        let mut registry = self.registry.lock().unwrap();
        if let Some(job) = registry.jobs.remove(&job_id) {
            job.handle.abort();
        }
    }

    pub fn is_armed(&self, meeting_id: &ID) -> bool {
        let registry = self.registry.lock().unwrap();
        registry.jobs.contains_key(&reminder_job_id(meeting_id))
    }

    /// The instant the armed reminder for `meeting_id` will fire, if any.
    pub fn armed_fire_instant(&self, meeting_id: &ID) -> Option<DateTime<Utc>> {
        let registry = self.registry.lock().unwrap();
        registry
            .jobs
            .get(&reminder_job_id(meeting_id))
            .map(|job| job.fire_at)
    }

    pub fn armed_count(&self) -> usize {
        self.registry.lock().unwrap().jobs.len()
    }

    /// Aborts every armed job. For process teardown.
    pub fn shutdown(&self) {
        let mut registry = self.registry.lock().unwrap();
        for (_, job) in registry.jobs.drain() {
            job.handle.abort();
        }
    }
}

impl fmt::Debug for ReminderScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReminderScheduler")
            .field("armed_jobs", &self.armed_count())
            .finish()
    }
}
