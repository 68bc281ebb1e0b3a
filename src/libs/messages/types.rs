#[derive(Debug, Clone)]
pub enum Message {
    // === ENTRY MESSAGES ===
    EntryAdded { name: String, counter: String },
    EntryMarkedOut { name: String, time: String },
    NoEntriesForDate(String), // date
    ActiveTally { active: usize, roster: usize },
    NoActiveEntries(String), // date
    SelectActiveEntry,

    // === ROSTER MESSAGES ===
    SewadarAdded(String),
    SewadarExists(String),
    RosterEmpty,
    NoSewadarMatches(String),
    SelectSewadar,
    PromptSewadarSearch,
    PromptCounter,

    // === REPORT MESSAGES ===
    ReportHeader(String), // date
    ShareTextHeader(String), // date

    // === EXPORT MESSAGES ===
    ExportCompleted(String), // path
    ExportingAllData,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigFileNotFound,
    ConfigParseError,
    PromptCounterList,
    PromptDefaultInTime,
    PromptDefaultOutTime,

    // === GENERIC MESSAGES ===
    OperationCancelled,
    InvalidDate(String),
}
