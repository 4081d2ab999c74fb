use anyhow::{Context, Result};
use std::path::PathBuf;

use JavaIdx::record::{IndexRecord, TimestampUnit};
use JavaIdx::util::hex_dump;

pub fn exec(
    out: PathBuf,
    fields_file: Option<PathBuf>,
    fields_json: Option<String>,
    timestamp_unit: TimestampUnit,
    last_modified: Option<i64>,
    expires: Option<i64>,
    version: Option<String>,
    url: Option<String>,
    namespace_id: Option<String>,
    codebase_ip: Option<String>,
    dump: bool,
) -> Result<()> {
    // База: JSON, если задан, иначе фикстура из оригинального генератора.
    let mut rec: IndexRecord = if let Some(path) = fields_file {
        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("read fields file {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("parse fields JSON from {}", path.display()))?
    } else if let Some(json) = fields_json {
        serde_json::from_str(&json).context("parse --fields-json")?
    } else {
        IndexRecord::sample(timestamp_unit)
    };

    // Флаги перекрывают базу.
    if let Some(lm) = last_modified {
        rec.header.last_modified = timestamp_unit.from_epoch_secs(lm);
    }
    if let Some(exp) = expires {
        rec.header.expiration_date = timestamp_unit.from_epoch_secs(exp);
    }
    if let Some(v) = version {
        rec.version = v;
    }
    if let Some(u) = url {
        rec.url = u;
    }
    if let Some(n) = namespace_id {
        rec.namespace_id = n;
    }
    if let Some(c) = codebase_ip {
        rec.codebase_ip = c;
    }

    let total = rec
        .write_to_path(&out)
        .with_context(|| format!("write index file {}", out.display()))?;
    println!("Generated index file {} ({} bytes)", out.display(), total);

    if dump {
        let mut buf = Vec::with_capacity(total);
        rec.encode(&mut buf)?;
        println!("{}", hex_dump(&buf));
    }
    Ok(())
}
