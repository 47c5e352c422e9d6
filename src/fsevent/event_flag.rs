#![allow(non_upper_case_globals)]
use bitflags::bitflags;

// Synchronize with
// /System/Library/Frameworks/CoreServices.framework/Versions/A/Frameworks/FSEvents.framework/Versions/A/Headers/FSEvents.h
bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct EventFlag: u32 {
        const None = 0x00000000;
        const MustScanSubDirs = 0x00000001;
        const UserDropped = 0x00000002;
        const KernelDropped = 0x00000004;
        const EventIdsWrapped = 0x00000008;
        const HistoryDone = 0x00000010;
        const RootChanged = 0x00000020;
        const Mount = 0x00000040;
        const Unmount = 0x00000080;
        const ItemCreated = 0x00000100;
        const ItemRemoved = 0x00000200;
        const ItemInodeMetaMod = 0x00000400;
        const ItemRenamed = 0x00000800;
        const ItemModified = 0x00001000;
        const ItemFinderInfoMod = 0x00002000;
        const ItemChangeOwner = 0x00004000;
        const ItemXattrMod = 0x00008000;
        const ItemIsFile = 0x00010000;
        const ItemIsDir = 0x00020000;
        const ItemIsSymlink = 0x00040000;
        const OwnEvent = 0x00080000;
        const ItemIsHardlink = 0x00100000;
        const ItemIsLastHardlink = 0x00200000;
        /// Only delivered since macOS 10.13, see the `item-cloned` feature.
        const ItemCloned = 0x00400000;
    }
}

/// Flags in the order a flag report lists them, with their `FSEvents.h` names.
const REPORT_ORDER: [(EventFlag, &str); 24] = [
    (EventFlag::None, "kFSEventStreamEventFlagNone"),
    (EventFlag::MustScanSubDirs, "kFSEventStreamEventFlagMustScanSubDirs"),
    (EventFlag::UserDropped, "kFSEventStreamEventFlagUserDropped"),
    (EventFlag::KernelDropped, "kFSEventStreamEventFlagKernelDropped"),
    (EventFlag::EventIdsWrapped, "kFSEventStreamEventFlagEventIdsWrapped"),
    (EventFlag::HistoryDone, "kFSEventStreamEventFlagHistoryDone"),
    (EventFlag::RootChanged, "kFSEventStreamEventFlagRootChanged"),
    (EventFlag::Mount, "kFSEventStreamEventFlagMount"),
    (EventFlag::Unmount, "kFSEventStreamEventFlagUnmount"),
    (EventFlag::ItemChangeOwner, "kFSEventStreamEventFlagItemChangeOwner"),
    (EventFlag::ItemCreated, "kFSEventStreamEventFlagItemCreated"),
    (EventFlag::ItemFinderInfoMod, "kFSEventStreamEventFlagItemFinderInfoMod"),
    (EventFlag::ItemInodeMetaMod, "kFSEventStreamEventFlagItemInodeMetaMod"),
    (EventFlag::ItemIsDir, "kFSEventStreamEventFlagItemIsDir"),
    (EventFlag::ItemIsFile, "kFSEventStreamEventFlagItemIsFile"),
    (EventFlag::ItemIsHardlink, "kFSEventStreamEventFlagItemIsHardlink"),
    (EventFlag::ItemIsLastHardlink, "kFSEventStreamEventFlagItemIsLastHardlink"),
    (EventFlag::ItemIsSymlink, "kFSEventStreamEventFlagItemIsSymlink"),
    (EventFlag::ItemModified, "kFSEventStreamEventFlagItemModified"),
    (EventFlag::ItemRemoved, "kFSEventStreamEventFlagItemRemoved"),
    (EventFlag::ItemRenamed, "kFSEventStreamEventFlagItemRenamed"),
    (EventFlag::ItemXattrMod, "kFSEventStreamEventFlagItemXattrMod"),
    (EventFlag::OwnEvent, "kFSEventStreamEventFlagOwnEvent"),
    (EventFlag::ItemCloned, "kFSEventStreamEventFlagItemCloned"),
];

/// Kind of the item an event concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventType {
    Unknown,
    File,
    Dir,
    Symlink,
    Hardlink,
}

/// The one change an event is reported as, see [`EventFlag::change_kind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ChangeKind {
    Removed,
    Created,
    Renamed,
    Modified,
    /// Extended attributes were touched.
    Accessed,
}

impl ChangeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeKind::Removed => "removed",
            ChangeKind::Created => "created",
            ChangeKind::Renamed => "renamed",
            ChangeKind::Modified => "modified",
            ChangeKind::Accessed => "accessed",
        }
    }
}

impl EventFlag {
    pub fn event_type(&self) -> EventType {
        if self.contains(EventFlag::ItemIsHardlink) | self.contains(EventFlag::ItemIsLastHardlink) {
            EventType::Hardlink
        } else if self.contains(EventFlag::ItemIsSymlink) {
            EventType::Symlink
        } else if self.contains(EventFlag::ItemIsDir) {
            EventType::Dir
        } else if self.contains(EventFlag::ItemIsFile) {
            EventType::File
        } else {
            EventType::Unknown
        }
    }

    /// Picks a single change out of the CRUD bits.
    ///
    /// FSEvents coalesces, so several of them are often set at once. Removal
    /// wins over creation, creation over rename, rename over modification and
    /// modification over xattr access.
    pub fn change_kind(&self) -> Option<ChangeKind> {
        if self.contains(EventFlag::ItemRemoved) {
            Some(ChangeKind::Removed)
        } else if self.contains(EventFlag::ItemCreated) {
            Some(ChangeKind::Created)
        } else if self.contains(EventFlag::ItemRenamed) {
            Some(ChangeKind::Renamed)
        } else if self.contains(EventFlag::ItemModified) {
            Some(ChangeKind::Modified)
        } else if self.contains(EventFlag::ItemXattrMod) {
            Some(ChangeKind::Accessed)
        } else {
            None
        }
    }

    /// Canonical names of the set flags, in report order.
    ///
    /// `None` is zero and therefore never listed. `ItemCloned` is listed only
    /// with the `item-cloned` feature.
    pub fn names(self) -> impl Iterator<Item = &'static str> {
        REPORT_ORDER
            .into_iter()
            .filter(move |(flag, _)| self.intersects(*flag))
            .filter(|(flag, _)| cfg!(feature = "item-cloned") || *flag != EventFlag::ItemCloned)
            .map(|(_, name)| name)
    }
}
