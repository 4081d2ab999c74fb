//! header — фиксированная часть заголовка index-файла (big-endian).
//!
//! Все целые пишутся big-endian, порядок и ширины полей — как в consts.rs.
//! Reserved-поля в структуре не хранятся и всегда пишутся нулями.

use byteorder::{BigEndian, WriteBytesExt};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::consts::CACHE_VERSION_605;
use crate::errors::EncodeError;

/// Именованные поля заголовка (версия формата 6.05).
///
/// Диапазоны значений — ответственность вызывающего: поле объявленной ширины
/// пишется как есть, без усечения.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexHeader {
    pub busy: u8,
    pub incomplete: u8,
    pub cache_version: i32,
    pub is_shortcut_image: u8,

    /// Может быть отрицательным (sentinel).
    pub content_length: i32,
    /// Хранится как i64; единицы задаёт вызывающий (см. TimestampUnit).
    pub last_modified: i64,
    pub expiration_date: i64,

    pub section2_length: i32,
    pub section3_length: i32,
    pub section4_length: i32,
    pub section5_length: i32,

    pub reduced_manifest_length: i32,
    pub section4_pre15_length: i32,
    pub has_only_signed_entries: u8,
    pub has_single_code_source: u8,
    pub section4_certs_length: i32,
    pub section4_signers_length: i32,

    pub reduced_manifest2_length: i32,
    pub is_proxied_host: u8,
}

impl Default for IndexHeader {
    fn default() -> Self {
        Self {
            busy: 0,
            incomplete: 0,
            cache_version: CACHE_VERSION_605,
            is_shortcut_image: 0,
            content_length: 0,
            last_modified: 0,
            expiration_date: 0,
            section2_length: 0,
            section3_length: 0,
            section4_length: 0,
            section5_length: 0,
            reduced_manifest_length: 0,
            section4_pre15_length: 0,
            has_only_signed_entries: 0,
            has_single_code_source: 0,
            section4_certs_length: 0,
            section4_signers_length: 0,
            reduced_manifest2_length: 0,
            is_proxied_host: 0,
        }
    }
}

impl IndexHeader {
    /// Записать фиксированные поля в объявленном порядке (без паддинга).
    pub fn write_fixed_fields<W: Write>(&self, w: &mut W) -> Result<(), EncodeError> {
        w.write_u8(self.busy)?;
        w.write_u8(self.incomplete)?;
        w.write_i32::<BigEndian>(self.cache_version)?;
        w.write_u8(self.is_shortcut_image)?;
        w.write_i32::<BigEndian>(self.content_length)?;
        w.write_i64::<BigEndian>(self.last_modified)?;
        w.write_i64::<BigEndian>(self.expiration_date)?;
        w.write_i64::<BigEndian>(0)?; // reserved, всегда 0
        w.write_u8(0)?; // reserved
        w.write_i32::<BigEndian>(self.section2_length)?;
        w.write_i32::<BigEndian>(self.section3_length)?;
        w.write_i32::<BigEndian>(self.section4_length)?;
        w.write_i32::<BigEndian>(self.section5_length)?;
        w.write_i64::<BigEndian>(0)?; // reserved
        w.write_i64::<BigEndian>(0)?; // reserved
        w.write_u8(0)?; // reserved
        w.write_i32::<BigEndian>(self.reduced_manifest_length)?;
        w.write_i32::<BigEndian>(self.section4_pre15_length)?;
        w.write_u8(self.has_only_signed_entries)?;
        w.write_u8(self.has_single_code_source)?;
        w.write_i32::<BigEndian>(self.section4_certs_length)?;
        w.write_i32::<BigEndian>(self.section4_signers_length)?;
        w.write_u8(0)?; // reserved
        w.write_i64::<BigEndian>(0)?; // reserved
        w.write_i32::<BigEndian>(self.reduced_manifest2_length)?;
        w.write_u8(self.is_proxied_host)?;
        Ok(())
    }
}
