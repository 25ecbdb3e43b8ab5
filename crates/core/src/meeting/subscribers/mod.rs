use super::resolve_meeting::{ResolutionOutcome, ResolveMeetingUseCase};
use crate::shared::usecase::Subscriber;
use mailsense_domain::ConflictWarning;
use mailsense_infra::Context;

/// Emits the conflict-warning notification whenever a meeting was scheduled
/// on top of existing commitments.
pub struct NotifyMeetingConflicts;

#[async_trait::async_trait(?Send)]
impl<'a> Subscriber<ResolveMeetingUseCase<'a>> for NotifyMeetingConflicts {
    async fn notify(&self, outcome: &ResolutionOutcome, ctx: &Context) {
        if let ResolutionOutcome::ScheduledWithConflicts { meeting, report } = outcome {
            let warning = ConflictWarning {
                meeting: meeting.clone(),
                conflicts: report.conflicts.clone(),
                alternatives: report.alternatives.clone(),
            };
            // Sideeffect, delivery failures are handled by the notifier
            ctx.services.notifier.deliver_conflict_warning(&warning).await;
        }
    }
}
