//! Decoding of the raw arrays an FSEvents callback receives.
use super::{EventFlag, EventRecord};

use anyhow::{bail, Result};
use tracing::{debug, trace, warn};

use std::{
    ffi::{c_char, CStr},
    slice,
};

impl EventRecord {
    /// Build a record from a C path. Invalid UTF-8 is replaced, not rejected.
    pub fn from_c_str(id: u64, path: &CStr, flags: u32) -> Self {
        let path = match path.to_str() {
            Ok(path) => path.to_owned(),
            Err(error) => {
                warn!(?error, id, "non utf-8 event path, decoding lossily");
                path.to_string_lossy().into_owned()
            }
        };
        let unknown = flags & !EventFlag::all().bits();
        if unknown != 0 {
            trace!(id, unknown, "unknown event flag bits");
        }
        Self::new(id, path, u64::from(flags))
    }

    /// # Safety
    ///
    /// `path` must point to a valid NUL terminated string.
    pub unsafe fn from_raw(path: *const c_char, flags: u32, id: u64) -> Self {
        let path = unsafe { CStr::from_ptr(path) };
        Self::from_c_str(id, path, flags)
    }
}

/// Decode one callback batch, sorted by event id.
pub fn decode_batch(paths: &[&CStr], flags: &[u32], ids: &[u64]) -> Result<Vec<EventRecord>> {
    if paths.len() != flags.len() || paths.len() != ids.len() {
        bail!(
            "event batch length mismatch: {} paths, {} flags, {} ids",
            paths.len(),
            flags.len(),
            ids.len()
        );
    }
    let mut events: Vec<_> = paths
        .iter()
        .zip(flags)
        .zip(ids)
        .map(|((&path, &flag), &id)| EventRecord::from_c_str(id, path, flag))
        .collect();
    // Fun fact, events here are not sorted by event id.
    events.sort_by_key(|x| x.id());
    debug!(num_events = events.len(), "decoded fs event batch");
    Ok(events)
}

/// Decode the parallel arrays passed to `FSEventStreamCallback`.
///
/// # Safety
///
/// `event_paths`, `event_flags` and `event_ids` must each point to
/// `num_events` valid elements, and every path must be NUL terminated.
pub unsafe fn decode_raw_batch(
    num_events: usize,
    event_paths: *const *const c_char,
    event_flags: *const u32,
    event_ids: *const u64,
) -> Vec<EventRecord> {
    if num_events == 0 {
        return Vec::new();
    }
    let event_paths = unsafe { slice::from_raw_parts(event_paths, num_events) };
    let event_flags = unsafe { slice::from_raw_parts(event_flags, num_events) };
    let event_ids = unsafe { slice::from_raw_parts(event_ids, num_events) };
    let mut events: Vec<_> = event_paths
        .iter()
        .zip(event_flags)
        .zip(event_ids)
        .map(|((&path, &flag), &id)| unsafe { EventRecord::from_raw(path, flag, id) })
        .collect();
    events.sort_by_key(|x| x.id());
    debug!(num_events, "decoded raw fs event batch");
    events
}
