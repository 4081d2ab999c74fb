//! record — полный index-файл: заголовок + четыре текстовых поля.
//!
//! Запись одноразовая: record собирается целиком, сериализуется в sink и
//! дальше не мутируется. Отката нет — при ошибке уже записанные байты
//! остаются в sink'е (обычный append-only поток).

use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::consts::HEADER_SIZE;
use crate::errors::EncodeError;
use crate::header::IndexHeader;
use crate::mutf8;

/// Единицы хранения last_modified/expiration_date.
///
/// Исходные генераторы расходятся (raw-секунды против ×1000), поэтому единица
/// — параметр, а не константа формата. Потребитель читает значение через
/// Instant.ofEpochMilli, так что дефолт — миллисекунды.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TimestampUnit {
    #[default]
    Millis,
    Seconds,
}

impl TimestampUnit {
    /// Перевести epoch-секунды в хранимое i64-значение.
    pub fn from_epoch_secs(self, secs: i64) -> i64 {
        match self {
            TimestampUnit::Millis => secs * 1000,
            TimestampUnit::Seconds => secs,
        }
    }
}

impl fmt::Display for TimestampUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimestampUnit::Millis => write!(f, "millis"),
            TimestampUnit::Seconds => write!(f, "seconds"),
        }
    }
}

/// Один index-файл: заголовок и четыре текстовых поля в фиксированном
/// порядке записи (version, URL, namespace ID, codebase IP).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexRecord {
    pub header: IndexHeader,
    pub version: String,
    pub url: String,
    pub namespace_id: String,
    pub codebase_ip: String,
}

/// Строка из исходной тестовой фикстуры: покрывает 1/2/3-байтовые диапазоны.
pub const SAMPLE_TEXT: &str =
    "abc__123__\u{00ED}\u{00F1}__\u{0108}\u{07F7}__\u{2167}\u{A985}__\u{30AC}\u{4DC0}";

impl IndexRecord {
    /// Тестовая фикстура: значения оригинального генератора,
    /// timestamps 1598880569/1598881670 epoch-секунд в заданных единицах.
    pub fn sample(unit: TimestampUnit) -> Self {
        let header = IndexHeader {
            busy: 1,
            incomplete: 5,
            is_shortcut_image: 0,
            content_length: -200,
            last_modified: unit.from_epoch_secs(1_598_880_569),
            expiration_date: unit.from_epoch_secs(1_598_881_670),
            section2_length: 2000,
            section3_length: 3000,
            section4_length: 4000,
            section5_length: 5000,
            reduced_manifest_length: 1234,
            section4_pre15_length: 5678,
            has_only_signed_entries: 1,
            has_single_code_source: 0,
            section4_certs_length: 1234,
            section4_signers_length: 5678,
            reduced_manifest2_length: 1234,
            is_proxied_host: 1,
            ..IndexHeader::default()
        };
        Self {
            header,
            version: SAMPLE_TEXT.to_string(),
            url: SAMPLE_TEXT.to_string(),
            namespace_id: SAMPLE_TEXT.to_string(),
            codebase_ip: SAMPLE_TEXT.to_string(),
        }
    }

    /// Текстовые поля в порядке записи.
    pub fn texts(&self) -> [&str; 4] {
        [
            self.version.as_str(),
            self.url.as_str(),
            self.namespace_id.as_str(),
            self.codebase_ip.as_str(),
        ]
    }

    /// Сериализовать record в sink: фиксированные поля, нули до 128 байт,
    /// затем четыре mutf8-фрейма. Возвращает общее число записанных байт.
    pub fn encode<W: Write>(&self, sink: &mut W) -> Result<usize, EncodeError> {
        // Заголовок собирается в буфер: так паддинг считается от фактически
        // записанного, а не от константы.
        let mut hdr = Vec::with_capacity(HEADER_SIZE);
        self.header.write_fixed_fields(&mut hdr)?;
        if hdr.len() > HEADER_SIZE {
            return Err(EncodeError::LayoutOverflow { written: hdr.len() });
        }
        hdr.resize(HEADER_SIZE, 0);
        sink.write_all(&hdr)?;

        let mut total = HEADER_SIZE;
        for s in self.texts() {
            total += mutf8::write_frame(sink, s)?;
        }
        debug!("encoded index record: {} bytes ({} header)", total, HEADER_SIZE);
        Ok(total)
    }

    /// Записать record в файл (create/truncate) и fsync'нуть его.
    /// Хэндл закрывается на любом исходе.
    pub fn write_to_path(&self, path: &Path) -> Result<usize, EncodeError> {
        let mut f = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;
        let total = self.encode(&mut f)?;
        f.sync_all()?;
        Ok(total)
    }
}
