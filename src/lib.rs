//! Decoding of FSEvents style file system event records.
//!
//! An event source hands over `(id, path, flags)` triples. [`EventRecord`]
//! keeps them as they are and answers what happened to which kind of item.
//!
//! ```
//! use fsevent_record::{EventFlag, EventRecord};
//!
//! let flags = (EventFlag::ItemIsFile | EventFlag::ItemModified).bits();
//! let event = EventRecord::new(42, "/Users/John/Desktop/test/text.txt".into(), flags.into());
//! assert!(event.file_modified());
//! assert_eq!(
//!     event.describe(),
//!     "The file /Users/John/Desktop/test/text.txt was modified With flags:0x11000"
//! );
//! ```
#![deny(unsafe_op_in_unsafe_fn)]
mod consts;
mod fsevent;

pub use fsevent::{
    decode_batch, decode_raw_batch, ChangeKind, EventFlag, EventRecord, EventType,
};
