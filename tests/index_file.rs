use anyhow::Result;
use std::fs;
use std::io::Cursor;
use std::path::PathBuf;

use JavaIdx::consts::{FIXED_FIELDS_SIZE, HEADER_SIZE, TEXT_FIELD_COUNT};
use JavaIdx::mutf8;
use JavaIdx::record::{IndexRecord, TimestampUnit};
use JavaIdx::SAMPLE_TEXT;

#[test]
fn sample_file_end_to_end() -> Result<()> {
    let path = unique_path("sample");
    let rec = IndexRecord::sample(TimestampUnit::Millis);
    let total = rec.write_to_path(&path)?;

    let bytes = fs::read(&path)?;
    assert_eq!(bytes.len(), total);
    // 128 байт заголовка + 4 фрейма по 38 байт (фикстурная строка).
    assert_eq!(bytes.len(), HEADER_SIZE + TEXT_FIELD_COUNT * 38);

    // Паддинг после фиксированных полей — нули.
    assert!(bytes[FIXED_FIELDS_SIZE..HEADER_SIZE].iter().all(|&b| b == 0));

    // Все четыре фрейма декодируются обратно в фикстурную строку.
    let mut cur = Cursor::new(&bytes[HEADER_SIZE..]);
    for _ in 0..TEXT_FIELD_COUNT {
        assert_eq!(mutf8::read_frame(&mut cur)?, SAMPLE_TEXT);
    }
    assert_eq!(cur.position() as usize, bytes.len() - HEADER_SIZE);

    fs::remove_file(&path)?;
    Ok(())
}

#[test]
fn distinct_texts_roundtrip_in_order() -> Result<()> {
    let rec = IndexRecord {
        version: "1.8.0_261".to_string(),
        url: "http://host.example/applets/app.jar".to_string(),
        namespace_id: "ns\u{00ED}\u{4DC0}".to_string(),
        codebase_ip: "192.168.1.10".to_string(),
        ..IndexRecord::default()
    };

    let mut out = Vec::new();
    rec.encode(&mut out)?;

    let mut cur = Cursor::new(&out[HEADER_SIZE..]);
    // Порядок фиксированный: version, URL, namespace ID, codebase IP.
    assert_eq!(mutf8::read_frame(&mut cur)?, rec.version);
    assert_eq!(mutf8::read_frame(&mut cur)?, rec.url);
    assert_eq!(mutf8::read_frame(&mut cur)?, rec.namespace_id);
    assert_eq!(mutf8::read_frame(&mut cur)?, rec.codebase_ip);
    Ok(())
}

#[test]
fn fields_json_roundtrip() -> Result<()> {
    // Та же форма, что принимают --fields-file/--fields-json.
    let json = r#"{
        "header": { "busy": 1, "incomplete": 5, "content_length": -200,
                    "last_modified": 1598880569000, "section2_length": 2000 },
        "version": "6.05",
        "url": "http://host/app.jar"
    }"#;
    let rec: IndexRecord = serde_json::from_str(json)?;
    assert_eq!(rec.header.cache_version, 605); // default подхватился
    assert_eq!(rec.header.content_length, -200);
    assert_eq!(rec.namespace_id, ""); // незаданные текстовые поля — пустые

    let mut out = Vec::new();
    rec.encode(&mut out)?;
    assert_eq!(out[0], 1);
    assert_eq!(&out[2..6], &605_i32.to_be_bytes());
    Ok(())
}

fn unique_path(prefix: &str) -> PathBuf {
    let pid = std::process::id();
    let t = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("javaidx-{}-{}-{}.idx", prefix, pid, t))
}
