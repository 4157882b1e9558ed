use std::io::{Cursor, Read, Write};

use unarc_archive::{Archive, ArchiveType, Entries, EntrySource, Error};

type Layout<'a> = &'a [(&'a str, Option<&'a [u8]>)];

fn tar_bytes(entries: Layout<'_>) -> Vec<u8> {
    let mut builder = tar::Builder::new(Vec::new());
    for (path, data) in entries {
        let mut header = tar::Header::new_gnu();
        match data {
            Some(data) => {
                header.set_entry_type(tar::EntryType::Regular);
                header.set_size(data.len() as u64);
                header.set_mode(0o644);
                builder.append_data(&mut header, path, *data).unwrap();
            }
            None => {
                header.set_entry_type(tar::EntryType::Directory);
                header.set_size(0);
                header.set_mode(0o755);
                builder
                    .append_data(&mut header, path, std::io::empty())
                    .unwrap();
            }
        }
    }
    builder.into_inner().unwrap()
}

fn zip_bytes(entries: Layout<'_>) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = zip::write::SimpleFileOptions::default();
    for (path, data) in entries {
        match data {
            Some(data) => {
                writer.start_file(*path, options).unwrap();
                writer.write_all(data).unwrap();
            }
            None => writer.add_directory(*path, options).unwrap(),
        }
    }
    writer.finish().unwrap().into_inner()
}

fn compress(kind: ArchiveType, tar: Vec<u8>) -> Vec<u8> {
    match kind {
        ArchiveType::Tar => tar,
        ArchiveType::TarGz => {
            let mut enc = flate2::write::GzEncoder::new(Vec::new(), flate2::Compression::default());
            enc.write_all(&tar).unwrap();
            enc.finish().unwrap()
        }
        ArchiveType::TarBz2 => {
            let mut enc = bzip2::write::BzEncoder::new(Vec::new(), bzip2::Compression::default());
            enc.write_all(&tar).unwrap();
            enc.finish().unwrap()
        }
        ArchiveType::TarXz => {
            let mut enc = xz2::write::XzEncoder::new(Vec::new(), 6);
            enc.write_all(&tar).unwrap();
            enc.finish().unwrap()
        }
        ArchiveType::Zip => unreachable!("zip is built separately"),
    }
}

/// Drain a source into (path, is_dir, content) triples, reading every file.
fn collect<S: EntrySource>(source: &mut S) -> Vec<(String, bool, Option<Vec<u8>>)> {
    let mut out = Vec::new();
    while let Some(entry) = source.next_entry() {
        let mut entry = entry.unwrap();
        let path = entry.path().trim_end_matches('/').to_string();
        let is_dir = entry.is_dir();
        let data = entry.content().map(|content| {
            let mut buf = Vec::new();
            content.open().unwrap().read_to_end(&mut buf).unwrap();
            buf
        });
        out.push((path, is_dir, data));
    }
    out
}

const LAYOUT: Layout<'static> = &[
    ("dir/", None),
    ("dir/file.txt", Some(b"hello")),
    ("dir/sub/", None),
    ("dir/sub/deep.bin", Some(&[0, 1, 2, 3])),
    ("top.txt", Some(b"")),
];

fn expected() -> Vec<(String, bool, Option<Vec<u8>>)> {
    vec![
        ("dir".into(), true, None),
        ("dir/file.txt".into(), false, Some(b"hello".to_vec())),
        ("dir/sub".into(), true, None),
        ("dir/sub/deep.bin".into(), false, Some(vec![0, 1, 2, 3])),
        ("top.txt".into(), false, Some(Vec::new())),
    ]
}

#[test]
fn tar_family_yields_entries_in_order() {
    for kind in [
        ArchiveType::Tar,
        ArchiveType::TarGz,
        ArchiveType::TarBz2,
        ArchiveType::TarXz,
    ] {
        let bytes = compress(kind, tar_bytes(LAYOUT));
        let mut archive = Archive::from_reader(Cursor::new(bytes), kind).unwrap();
        assert_eq!(archive.archive_type(), kind);

        let mut entries = archive.entries().unwrap();
        assert_eq!(entries.archive_type(), kind);
        assert!(matches!(entries, Entries::Tar(_)));
        assert_eq!(collect(&mut entries), expected(), "{kind}");
    }
}

#[test]
fn zip_yields_entries_in_listing_order() {
    let mut archive = Archive::from_reader(Cursor::new(zip_bytes(LAYOUT)), ArchiveType::Zip).unwrap();
    let mut entries = archive.entries().unwrap();
    assert!(matches!(entries, Entries::Zip(_)));
    assert_eq!(entries.archive_type(), ArchiveType::Zip);
    assert_eq!(collect(&mut entries), expected());
}

#[test]
fn tar_unread_content_is_skipped() {
    let bytes = tar_bytes(LAYOUT);
    let mut archive = Archive::from_reader(Cursor::new(bytes), ArchiveType::Tar).unwrap();
    let mut entries = archive.entries().unwrap();

    let mut deep = None;
    while let Some(entry) = entries.next_entry() {
        let mut entry = entry.unwrap();
        if entry.path() == "dir/sub/deep.bin" {
            let mut buf = Vec::new();
            entry
                .content()
                .unwrap()
                .open()
                .unwrap()
                .read_to_end(&mut buf)
                .unwrap();
            deep = Some(buf);
        }
    }
    assert_eq!(deep, Some(vec![0, 1, 2, 3]));
}

#[test]
fn content_cannot_be_read_twice() {
    let bytes = zip_bytes(&[("a.txt", Some(b"once"))]);
    let mut archive = Archive::from_reader(Cursor::new(bytes), ArchiveType::Zip).unwrap();
    let mut entries = archive.entries().unwrap();

    let mut entry = entries.next_entry().unwrap().unwrap();
    let content = entry.content().unwrap();
    let mut buf = String::new();
    content.open().unwrap().read_to_string(&mut buf).unwrap();
    assert_eq!(buf, "once");
    assert!(matches!(content.open(), Err(Error::ContentConsumed)));
}

#[test]
fn corrupt_zip_fails_to_open() {
    let result = Archive::from_reader(Cursor::new(b"not a zip".to_vec()), ArchiveType::Zip);
    assert!(matches!(result, Err(Error::Zip(_))));
}

#[test]
fn corrupt_tar_gz_fails_during_traversal() {
    let mut bytes = compress(ArchiveType::TarGz, tar_bytes(LAYOUT));
    bytes.truncate(bytes.len() / 2);
    bytes.extend_from_slice(&[0xff; 64]);

    let mut archive = Archive::from_reader(Cursor::new(bytes), ArchiveType::TarGz).unwrap();
    let mut entries = archive.entries().unwrap();
    let mut failed = false;
    while let Some(entry) = entries.next_entry() {
        match entry {
            Ok(mut entry) => {
                if let Some(content) = entry.content() {
                    let mut sink = Vec::new();
                    if content.open().unwrap().read_to_end(&mut sink).is_err() {
                        failed = true;
                        break;
                    }
                }
            }
            Err(Error::Io(_)) => {
                failed = true;
                break;
            }
            Err(other) => panic!("unexpected error: {other}"),
        }
    }
    assert!(failed, "truncated gzip stream must surface an I/O error");
}

#[test]
fn open_missing_archive() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.tar");
    let err = Archive::open(&path, ArchiveType::Tar).err().unwrap();
    assert!(matches!(err, Error::Open { path: p, .. } if p == path));
}

#[test]
fn open_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pkg.tar.xz");
    std::fs::write(&path, compress(ArchiveType::TarXz, tar_bytes(LAYOUT))).unwrap();

    let kind = ArchiveType::from_file_name(path.to_str().unwrap()).unwrap();
    let mut archive = Archive::open(&path, kind).unwrap();
    let mut entries = archive.entries().unwrap();
    assert_eq!(collect(&mut entries), expected());
}

/// A V7 header: no magic, `\0` typeflag, name written verbatim.
fn old_header(name: &[u8], size: u64) -> tar::Header {
    let mut header = tar::Header::new_old();
    header.as_old_mut().name[..name.len()].copy_from_slice(name);
    header.set_size(size);
    header.set_mode(0o644);
    header.set_mtime(0);
    header.set_cksum();
    header
}

#[test]
fn v7_directory_is_recognised_by_trailing_slash() {
    let mut builder = tar::Builder::new(Vec::new());
    builder
        .append(&old_header(b"olddir/", 0), std::io::empty())
        .unwrap();
    builder
        .append(&old_header(b"olddir/plain", 2), &b"hi"[..])
        .unwrap();
    let bytes = builder.into_inner().unwrap();

    let mut archive = Archive::from_reader(Cursor::new(bytes), ArchiveType::Tar).unwrap();
    let mut entries = archive.entries().unwrap();
    assert_eq!(
        collect(&mut entries),
        vec![
            ("olddir".to_string(), true, None),
            ("olddir/plain".to_string(), false, Some(b"hi".to_vec())),
        ]
    );
}
