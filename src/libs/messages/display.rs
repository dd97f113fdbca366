//! Display implementation for stempel application messages.
//!
//! Single source of truth for all user-facing text. Every `Message` variant
//! maps to exactly one formatted string here, keeping wording consistent
//! across commands and making the text trivially reviewable in one place.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CLOCK MESSAGES ===
            Message::ClockedIn(time) => format!("Clocked in at {}", time),
            Message::ClockedInOnTask(time, task) => format!("Clocked in at {} on '{}'", time, task),
            Message::ClockedOut(time, worked) => format!("Clocked out at {} ({} worked today)", time, worked),
            Message::AlreadyClockedIn(since) => format!("Already clocked in since {}", since),
            Message::NotClockedIn => "Not clocked in".to_string(),
            Message::FlexRecorded(sum) => format!("Flexitime adjustment of {} recorded", sum),
            Message::FlexZeroIgnored => "A zero adjustment changes nothing; skipped.".to_string(),

            // === EVENT MESSAGES ===
            Message::EventUpdated(id) => format!("Event {} updated.", id),
            Message::EventDeleted(id) => format!("Event {} deleted.", id),
            Message::EventNotFoundWithId(id) => format!("Event with ID {} not found.", id),
            Message::EventFieldIgnored(field, kind) => format!("Field '{}' does not apply to {} events; ignored.", field, kind),
            Message::EventsHeader(period) => format!("Events for {}", period),
            Message::NoEventsFound => "No events recorded.".to_string(),
            Message::ConfirmDeleteEvent(id) => format!("Delete event {}? The balance will be recomputed from its day.", id),
            Message::AnomalyDoubledIn(time) => format!("Clock-in at {} while already clocked in; ignored.", time),
            Message::AnomalyOrphanOut(time) => format!("Clock-out at {} without a prior clock-in; ignored.", time),

            // === STATUS & BALANCE MESSAGES ===
            Message::StatusClockedInSince(since) => format!("Clocked in since {}", since),
            Message::StatusClockedInSinceOnTask(since, task) => format!("Clocked in since {} on '{}'", since, task),
            Message::StatusNotClockedIn => "Not clocked in.".to_string(),
            Message::StatusWorkedToday(worked, target) => format!("Worked today: {} (target {})", worked, target),
            Message::BalanceHeader(policy) => format!("Flexitime balance (reset: {})", policy),
            Message::BalanceAt(date, sum) => format!("Balance through {}: {}", date, sum),
            Message::ReportHeader(start, end) => format!("Report {} to {}", start, end),
            Message::ReportEmptyRange => "No recorded data in the selected period.".to_string(),

            // === TASK MESSAGES ===
            Message::TaskCreated(name) => format!("Task '{}' created.", name),
            Message::TaskUpdated(name) => format!("Task '{}' updated.", name),
            Message::TaskDeleted(name) => format!("Task '{}' deleted.", name),
            Message::TaskNotFound(name) => format!("Task '{}' not found.", name),
            Message::TaskNotFoundWithId(id) => format!("Task with ID {} not found.", id),
            Message::TaskInUse(name, count) => format!("Task '{}' is referenced by {} event(s) and cannot be deleted.", name, count),
            Message::TaskSetDefault(name) => format!("Task '{}' is now the default for automatic clock-ins.", name),
            Message::TaskSetActive(name, active) => {
                if *active {
                    format!("Task '{}' activated.", name)
                } else {
                    format!("Task '{}' deactivated.", name)
                }
            }
            Message::TasksHeader => "Tasks:".to_string(),
            Message::NoTasksFound => "No tasks found.".to_string(),
            Message::PromptTaskName => "Task name".to_string(),
            Message::ConfirmDeleteTask(name) => format!("Delete task '{}'?", name),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved.".to_string(),
            Message::ConfigParseError(detail) => format!("Failed to parse configuration file: {}", detail),
            Message::ConfigModuleWeek => "Week plan".to_string(),
            Message::ConfigModuleBalance => "Balance reset".to_string(),
            Message::ConfigModuleTracking => "Automatic tracking".to_string(),
            Message::PromptSelectModules => "Select sections to configure".to_string(),
            Message::PromptSelectWorkdays => "Select workdays".to_string(),
            Message::PromptWorkdayTarget => "Target minutes per workday".to_string(),
            Message::PromptFlexiReset => "When should the balance reset to zero?".to_string(),
            Message::PromptTrackingIgnore => "Ignore triggers within minutes after the last event".to_string(),
            Message::DataDirectory(path) => format!("Data directory: {}", path),

            // === AUTOMATIC TRACKING MESSAGES ===
            Message::AutoClockIn(source) => format!("Automatic clock-in ({})", source),
            Message::AutoClockOut(source) => format!("Automatic clock-out ({})", source),
            Message::AutoNoChange(source) => format!("No state change ({})", source),
            Message::AutoIgnoredRecentEvent(source, minutes) => {
                format!("Trigger from {} ignored: within {} minute(s) of the last event", source, minutes)
            }
            Message::AutoTrackingNotConfigured => "Automatic tracking is not configured. Run 'stempel init' first.".to_string(),
            Message::AutoIgnoreWindow(minutes) => format!("Trigger ignore window: {} minute(s)", minutes),
            Message::AutoTriggersSuppressed => "Triggers are currently suppressed by the ignore period.".to_string(),
            Message::AutoTriggersActive => "Triggers are currently active.".to_string(),
            Message::AutoDefaultTask(name) => format!("Automatic clock-ins book on '{}'.", name),
            Message::AutoNoDefaultTask => "No default task; automatic clock-ins record no task.".to_string(),

            // === BACKUP MESSAGES ===
            Message::ExportCompleted(path) => format!("Export completed: {}", path),
            Message::ImportCompleted(tasks, events) => format!("Import completed: {} task(s), {} event(s).", tasks, events),
            Message::ConfirmImportWipe => "Importing replaces all recorded events and tasks. Continue?".to_string(),
            Message::OperationCancelled => "Operation cancelled.".to_string(),
        };

        write!(f, "{}", text)
    }
}
