use super::*;

/// Masks covering every single flag, edge values and a pseudo random sweep.
fn sample_masks() -> Vec<u64> {
    let mut masks = vec![0, u64::MAX, u64::from(u32::MAX), 1 << 40, 0x7f_ffff];
    masks.extend((0..24).map(|bit| 1u64 << bit));
    let mut state = 0x9e37_79b9_7f4a_7c15u64;
    for _ in 0..4096 {
        // xorshift64
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        masks.push(state & 0xff_ffff);
        masks.push(state);
    }
    masks
}

fn event(flags: u64) -> EventRecord {
    EventRecord::new(1, "/tmp/a".to_string(), flags)
}

#[test]
fn test_accessors_keep_input() {
    let e = EventRecord::new(471533015, "relative//odd path/".to_string(), 0xdead_beef_0000);
    assert_eq!(e.id(), 471533015);
    assert_eq!(e.path(), "relative//odd path/");
    assert_eq!(e.flags(), 0xdead_beef_0000);
}

#[test]
fn test_primitive_predicates_are_mask_tests() {
    for flags in sample_masks() {
        let e = event(flags);
        let bit = |flag: EventFlag| flags & u64::from(flag.bits()) != 0;
        assert_eq!(e.is_file(), bit(EventFlag::ItemIsFile), "{flags:#x}");
        assert_eq!(e.is_directory(), bit(EventFlag::ItemIsDir), "{flags:#x}");
        assert_eq!(e.created(), bit(EventFlag::ItemCreated), "{flags:#x}");
        assert_eq!(e.removed(), bit(EventFlag::ItemRemoved), "{flags:#x}");
        assert_eq!(e.renamed(), bit(EventFlag::ItemRenamed), "{flags:#x}");
        assert_eq!(e.modified(), bit(EventFlag::ItemModified), "{flags:#x}");
        assert_eq!(e.xattr_modified(), bit(EventFlag::ItemXattrMod), "{flags:#x}");
        assert_eq!(
            e.is_none(),
            flags & u64::from(EventFlag::all().bits()) == 0,
            "{flags:#x}"
        );
    }
}

#[test]
fn test_derived_predicates_are_conjunctions() {
    for flags in sample_masks() {
        let e = event(flags);
        assert_eq!(e.file_created(), e.is_file() && e.created());
        assert_eq!(e.file_removed(), e.is_file() && e.removed());
        assert_eq!(e.file_renamed(), e.is_file() && e.renamed());
        assert_eq!(e.file_modified(), e.is_file() && e.modified());
        assert_eq!(e.file_accessed(), e.is_file() && e.xattr_modified());
        assert_eq!(e.dir_created(), e.is_directory() && e.created());
        assert_eq!(e.dir_removed(), e.is_directory() && e.removed());
        assert_eq!(e.dir_renamed(), e.is_directory() && e.renamed());
        assert_eq!(e.dir_modified(), e.is_directory() && e.modified());
    }
}

#[test]
fn test_none_only_without_known_bits() {
    assert!(event(0).is_none());
    // Bits outside the taxonomy don't count as a classification.
    assert!(event(1 << 40).is_none());
    assert!(event(0x0100_0000).is_none());
    assert!(!event(u64::from(EventFlag::MustScanSubDirs.bits())).is_none());
}

#[test]
fn test_event_flag_drops_unknown_bits() {
    let flags = u64::from((EventFlag::ItemIsDir | EventFlag::ItemRenamed).bits()) | 1 << 33 | 1 << 30;
    assert_eq!(
        event(flags).event_flag(),
        EventFlag::ItemIsDir | EventFlag::ItemRenamed
    );
}

#[test]
fn test_describe_created_file() {
    let flags = (EventFlag::ItemIsFile | EventFlag::ItemCreated).bits();
    let e = EventRecord::new(7, "/a/b.txt".to_string(), flags.into());
    assert_eq!(e.describe(), "The file /a/b.txt was created With flags:0x10100");
    assert_eq!(e.to_string(), e.describe());
}

#[test]
fn test_describe_removal_wins() {
    let flags = (EventFlag::ItemIsDir | EventFlag::ItemCreated | EventFlag::ItemRemoved).bits();
    let description = event(flags.into()).describe();
    assert!(description.contains("removed"), "{description}");
    assert!(!description.contains("created"), "{description}");
    assert_eq!(description, "The directory /tmp/a was removed With flags:0x20300");
}

#[test]
fn test_describe_without_change_word() {
    assert_eq!(event(0).describe(), "The directory /tmp/a was With flags:0x0");
    let flags = (EventFlag::ItemIsFile | EventFlag::ItemInodeMetaMod).bits();
    assert_eq!(
        event(flags.into()).describe(),
        "The file /tmp/a was With flags:0x10400"
    );
}

#[test]
fn test_describe_echoes_raw_flags() {
    let flags = u64::from(EventFlag::ItemXattrMod.bits()) | 0xab << 32;
    assert_eq!(
        event(flags).describe(),
        "The directory /tmp/a was accessed With flags:0xAB00008000"
    );
}

#[test]
fn test_describe_suffix_matches_change() {
    for flags in sample_masks() {
        let e = event(flags);
        let description = e.describe();
        let (sentence, _) = description.split_once(" With flags:").unwrap();
        match e.change() {
            Some(change) => assert!(sentence.ends_with(change.as_str()), "{description}"),
            None => assert!(sentence.ends_with(" was"), "{description}"),
        }
    }
}

#[test]
fn test_flag_report_empty() {
    assert_eq!(event(0).flag_report(), "FileWatcher eventFlags:\n");
    assert_eq!(event(1 << 63).flag_report(), "FileWatcher eventFlags:\n");
}

#[test]
fn test_flag_report_created_file() {
    let flags = (EventFlag::ItemIsFile | EventFlag::ItemCreated).bits();
    assert_eq!(
        event(flags.into()).flag_report(),
        "FileWatcher eventFlags:\n\
         kFSEventStreamEventFlagItemCreated\n\
         kFSEventStreamEventFlagItemIsFile\n"
    );
}

#[test]
fn test_rendering_is_stable() {
    let e = event(0x1_2345);
    assert_eq!(e.describe(), e.describe());
    assert_eq!(e.flag_report(), e.flag_report());
}
