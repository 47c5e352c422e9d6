/// First line of every flag report.
pub const FLAG_REPORT_HEADER: &str = "FileWatcher eventFlags:";
/// Separator between the description and the hex flags.
pub const DESCRIBE_FLAGS_PREFIX: &str = " With flags:0x";
