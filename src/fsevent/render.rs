use super::EventRecord;
use crate::consts::{DESCRIBE_FLAGS_PREFIX, FLAG_REPORT_HEADER};

use std::fmt;

impl EventRecord {
    /// One line summary, e.g. `The file /a/b.txt was created With flags:0x10100`.
    ///
    /// Without any change bit the sentence has no verb: `The directory /a was With flags:0x0`.
    pub fn describe(&self) -> String {
        self.to_string()
    }

    /// Header line followed by the name of every set flag, one per line.
    pub fn flag_report(&self) -> String {
        let mut report = String::with_capacity(FLAG_REPORT_HEADER.len() + 1);
        report.push_str(FLAG_REPORT_HEADER);
        report.push('\n');
        for name in self.event_flag().names() {
            report.push_str(name);
            report.push('\n');
        }
        report
    }
}

impl fmt::Display for EventRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.is_file() { "file" } else { "directory" };
        write!(f, "The {} {} was", kind, self.path())?;
        if let Some(change) = self.change() {
            write!(f, " {}", change.as_str())?;
        }
        write!(f, "{}{:X}", DESCRIBE_FLAGS_PREFIX, self.flags())
    }
}
