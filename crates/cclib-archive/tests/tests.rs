use std::fs::File;
use std::io::Write;
use std::path::Path;

use cclib_archive::{ArchiveFormat, Error, extract_archive};
use zip::write::SimpleFileOptions;

fn create_test_cclibs(path: &Path, files: &[(&str, &[u8])]) {
    let file = File::create(path).expect("Failed to create archive");
    let mut writer = zip::ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);

    writer.add_directory("e1dir/", options).unwrap();
    for (name, content) in files {
        writer.start_file(*name, options).unwrap();
        writer.write_all(content).unwrap();
    }
    writer.finish().unwrap();
}

#[test]
fn extract_cclibs_file() {
    let temp_dir = tempfile::Builder::new()
        .prefix("cclib-test-zip-")
        .tempdir()
        .expect("Failed to create temp dir");
    let archive = temp_dir.path().join("Brand.cclibs");
    create_test_cclibs(
        &archive,
        &[("manifest", b"{\"name\":\"Brand\"}"), ("e1dir/logo.png", b"png bytes")],
    );

    let dest = temp_dir.path().join("scratch");
    let result = extract_archive(&archive, &dest);

    assert!(result.is_ok(), "Extraction failed: {:?}", result.err());
    let report = result.unwrap();
    assert_eq!(report.format, ArchiveFormat::Zip);
    assert_eq!(report.entry_count, 3);
    assert_eq!(report.files().count(), 2);
    assert!(dest.join("e1dir").is_dir());
    assert_eq!(std::fs::read(dest.join("e1dir/logo.png")).unwrap(), b"png bytes");
    assert_eq!(std::fs::read_to_string(dest.join("manifest")).unwrap(), "{\"name\":\"Brand\"}");
}

#[test]
fn extract_plain_file_is_rejected() {
    let temp_dir = tempfile::tempdir().unwrap();
    let archive = temp_dir.path().join("not-a-library.cclibs");
    std::fs::write(&archive, "just some text, definitely not a zip").unwrap();

    let result = extract_archive(&archive, temp_dir.path().join("scratch"));

    assert!(matches!(result, Err(Error::UnsupportedFormat)));
}
