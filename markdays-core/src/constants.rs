/// Name of the store file holding application data
pub const DATA_FILE_NAME: &str = "markdays.json";

/// Key under which the marked days are stored in the data file
pub const MARKED_DAYS_STORAGE_KEY: &str = "markedDays";

/// chrono format string for day keys (ISO-8601 calendar date)
pub const DAY_KEY_FORMAT: &str = "%Y-%m-%d";
