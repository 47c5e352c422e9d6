mod event_flag;
mod raw;
mod render;
#[cfg(test)]
mod tests;

pub use event_flag::{ChangeKind, EventFlag, EventType};
pub use raw::{decode_batch, decode_raw_batch};

use serde::{Deserialize, Serialize};

/// A single file system event as delivered by the event stream.
///
/// e.g. `EventRecord { id: 471533015, path: "/Users/John/Desktop/test/text.txt", flags: 0x11000 }`
///
/// Be aware that `.DS_Store` changes frequently when other files change.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventRecord {
    /// The event id.
    id: u64,
    /// The path of this event, kept as received.
    path: String,
    /// Raw event flags, unknown bits included.
    flags: u64,
}

impl EventRecord {
    pub fn new(id: u64, path: String, flags: u64) -> Self {
        Self { id, path, flags }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn flags(&self) -> u64 {
        self.flags
    }

    /// Known flags of this event. Bits outside the taxonomy are dropped.
    pub fn event_flag(&self) -> EventFlag {
        // Every defined flag lives in the low 32 bits.
        EventFlag::from_bits_truncate(self.flags as u32)
    }

    fn has(&self, flag: EventFlag) -> bool {
        self.flags & u64::from(flag.bits()) != 0
    }

    pub fn is_file(&self) -> bool {
        self.has(EventFlag::ItemIsFile)
    }

    pub fn is_directory(&self) -> bool {
        self.has(EventFlag::ItemIsDir)
    }

    pub fn created(&self) -> bool {
        self.has(EventFlag::ItemCreated)
    }

    pub fn removed(&self) -> bool {
        self.has(EventFlag::ItemRemoved)
    }

    pub fn renamed(&self) -> bool {
        self.has(EventFlag::ItemRenamed)
    }

    pub fn modified(&self) -> bool {
        self.has(EventFlag::ItemModified)
    }

    /// No known flag is set.
    ///
    /// `kFSEventStreamEventFlagNone` is zero, so this can't be a mask test.
    pub fn is_none(&self) -> bool {
        self.event_flag().is_empty()
    }

    /// Extended attributes were touched, which is what an access looks like.
    pub fn xattr_modified(&self) -> bool {
        self.has(EventFlag::ItemXattrMod)
    }

    pub fn file_created(&self) -> bool {
        self.is_file() && self.created()
    }

    pub fn file_removed(&self) -> bool {
        self.is_file() && self.removed()
    }

    pub fn file_renamed(&self) -> bool {
        self.is_file() && self.renamed()
    }

    pub fn file_modified(&self) -> bool {
        self.is_file() && self.modified()
    }

    pub fn file_accessed(&self) -> bool {
        self.is_file() && self.xattr_modified()
    }

    pub fn dir_created(&self) -> bool {
        self.is_directory() && self.created()
    }

    pub fn dir_removed(&self) -> bool {
        self.is_directory() && self.removed()
    }

    pub fn dir_renamed(&self) -> bool {
        self.is_directory() && self.renamed()
    }

    pub fn dir_modified(&self) -> bool {
        self.is_directory() && self.modified()
    }

    pub fn event_type(&self) -> EventType {
        self.event_flag().event_type()
    }

    pub fn change(&self) -> Option<ChangeKind> {
        self.event_flag().change_kind()
    }
}
