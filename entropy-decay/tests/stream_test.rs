mod common;

use std::io::{self, Read, Seek, SeekFrom, Write};

use entropy_decay::DecayFile;

use common::seeded_store;

#[test]
fn read_to_end_returns_payload_and_advances_cursor() {
    let (store, _clock) = seeded_store(32, 1);
    let mut file = DecayFile::open(store);
    file.write_all(b"HELLO WORLD").unwrap();

    let mut out = Vec::new();
    file.read_to_end(&mut out).unwrap();
    assert_eq!(out, b"HELLO WORLD");
    assert_eq!(file.position(), 11);

    let mut buf = [0u8; 4];
    assert_eq!(file.read(&mut buf).unwrap(), 0);
}

#[test]
fn small_reads_walk_the_payload() {
    let (store, _clock) = seeded_store(32, 1);
    store.write(b"abcdefg").unwrap();
    let mut file = DecayFile::open(store);

    let mut buf = [0u8; 3];
    assert_eq!(file.read(&mut buf).unwrap(), 3);
    assert_eq!(&buf, b"abc");
    assert_eq!(file.read(&mut buf).unwrap(), 3);
    assert_eq!(&buf, b"def");
    assert_eq!(file.read(&mut buf).unwrap(), 1);
    assert_eq!(buf[0], b'g');
    assert_eq!(file.position(), 7);
}

#[test]
fn write_rewinds_cursor() {
    let (store, _clock) = seeded_store(32, 1);
    let mut file = DecayFile::open(store);
    file.write_all(b"first").unwrap();
    let mut out = String::new();
    file.read_to_string(&mut out).unwrap();
    assert_eq!(file.position(), 5);

    file.write_all(b"second").unwrap();
    assert_eq!(file.position(), 0);
    out.clear();
    file.read_to_string(&mut out).unwrap();
    assert_eq!(out, "second");
}

#[test]
fn oversized_write_is_consumed_and_truncated() {
    let (store, _clock) = seeded_store(8, 1);
    let mut file = DecayFile::open(store.clone());
    assert_eq!(file.write(b"0123456789").unwrap(), 10);
    assert_eq!(file.last_stored(), 7);
    assert_eq!(store.read(0, 16).unwrap(), b"0123456");

    file.write_all(b"abc").unwrap();
    assert_eq!(file.last_stored(), 3);
}

#[test]
fn seek_positions_cursor() {
    let (store, _clock) = seeded_store(32, 1);
    store.write(b"HELLO").unwrap();
    let mut file = DecayFile::open(store);

    assert_eq!(file.seek(SeekFrom::Start(1)).unwrap(), 1);
    assert_eq!(file.seek(SeekFrom::Current(2)).unwrap(), 3);
    let mut out = Vec::new();
    file.read_to_end(&mut out).unwrap();
    assert_eq!(out, b"LO");

    assert_eq!(file.seek(SeekFrom::End(-4)).unwrap(), 1);
    assert_eq!(file.seek(SeekFrom::End(10)).unwrap(), 15);
    let mut buf = [0u8; 4];
    assert_eq!(file.read(&mut buf).unwrap(), 0);
}

#[test]
fn seek_before_start_is_rejected() {
    let (store, _clock) = seeded_store(32, 1);
    let mut file = DecayFile::open(store);
    let err = file.seek(SeekFrom::Current(-1)).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    assert_eq!(file.position(), 0);
}

#[test]
fn cursor_past_i64_is_invalid_input() {
    let (store, _clock) = seeded_store(32, 1);
    store.write(b"HELLO").unwrap();
    let mut file = DecayFile::open(store);
    file.seek(SeekFrom::Start(u64::MAX)).unwrap();
    let mut buf = [0u8; 4];
    let err = file.read(&mut buf).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
}

#[test]
fn clear_empties_store_and_rewinds() {
    let (store, _clock) = seeded_store(32, 1);
    let mut file = DecayFile::open(store.clone());
    file.write_all(b"HELLO").unwrap();
    file.seek(SeekFrom::Start(3)).unwrap();

    file.clear().unwrap();
    assert_eq!(file.position(), 0);
    assert!(store.is_empty());
}

#[test]
fn reads_through_file_see_decay() {
    let (store, clock) = seeded_store(32, 1);
    let mut file = DecayFile::open(store.clone());
    file.write_all(b"HELLO").unwrap();
    clock.advance_secs(2);

    let mut out = Vec::new();
    file.read_to_end(&mut out).unwrap();
    assert_eq!(out.len(), 5);
    assert_eq!(store.status().decayed_count, 2);
}
