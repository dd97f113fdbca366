#[derive(Debug, Clone)]
pub enum Message {
    // === CLOCK MESSAGES ===
    ClockedIn(String),                // time
    ClockedInOnTask(String, String),  // time, task name
    ClockedOut(String, String),       // time, worked today
    AlreadyClockedIn(String),         // since
    NotClockedIn,
    FlexRecorded(String),             // signed duration
    FlexZeroIgnored,

    // === EVENT MESSAGES ===
    EventUpdated(i64),
    EventDeleted(i64),
    EventNotFoundWithId(i64),
    EventFieldIgnored(String, String), // field, event type
    EventsHeader(String), // period label
    NoEventsFound,
    ConfirmDeleteEvent(i64),
    AnomalyDoubledIn(String),  // timestamp
    AnomalyOrphanOut(String),  // timestamp

    // === STATUS & BALANCE MESSAGES ===
    StatusClockedInSince(String),
    StatusClockedInSinceOnTask(String, String),
    StatusNotClockedIn,
    StatusWorkedToday(String, String), // worked, target
    BalanceHeader(String),             // reset policy label
    BalanceAt(String, String),         // date, balance
    ReportHeader(String, String),      // start, end
    ReportEmptyRange,

    // === TASK MESSAGES ===
    TaskCreated(String),
    TaskUpdated(String),
    TaskDeleted(String),
    TaskNotFound(String),
    TaskNotFoundWithId(i64),
    TaskInUse(String, i64), // name, referencing event count
    TaskSetDefault(String),
    TaskSetActive(String, bool),
    TasksHeader,
    NoTasksFound,
    PromptTaskName,
    ConfirmDeleteTask(String),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigParseError(String),
    ConfigModuleWeek,
    ConfigModuleBalance,
    ConfigModuleTracking,
    PromptSelectModules,
    PromptSelectWorkdays,
    PromptWorkdayTarget,
    PromptFlexiReset,
    PromptTrackingIgnore,
    DataDirectory(String), // path

    // === AUTOMATIC TRACKING MESSAGES ===
    AutoClockIn(String),          // source
    AutoClockOut(String),         // source
    AutoNoChange(String),         // source
    AutoIgnoredRecentEvent(String, i64), // source, ignore window minutes
    AutoTrackingNotConfigured,
    AutoIgnoreWindow(i64),
    AutoTriggersSuppressed,
    AutoTriggersActive,
    AutoDefaultTask(String),
    AutoNoDefaultTask,

    // === BACKUP MESSAGES ===
    ExportCompleted(String),     // path
    ImportCompleted(usize, usize), // tasks, events
    ConfirmImportWipe,
    OperationCancelled,
}
