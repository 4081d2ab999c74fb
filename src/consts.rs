//! Константы формата index-файла Java Plugin cache (версия 6.05).

// -------- Header --------
// Фиксированная часть заголовка (big-endian, порядок полей — см. header.rs):
// [busy u8][incomplete u8][cache_version i32][is_shortcut_image u8]
// [content_length i32][last_modified i64][expiration_date i64]
// [reserved i64][reserved u8]
// [section2_length i32][section3_length i32][section4_length i32][section5_length i32]
// [reserved i64][reserved i64][reserved u8]
// [reduced_manifest_length i32][section4_pre15_length i32]
// [has_only_signed_entries u8][has_single_code_source u8]
// [section4_certs_length i32][section4_signers_length i32]
// [reserved u8][reserved i64]
// [reduced_manifest2_length i32][is_proxied_host u8]
//
// Итого 101 байт, далее нули до HEADER_SIZE.
pub const HEADER_SIZE: usize = 128;
pub const FIXED_FIELDS_SIZE: usize = 101;

/// Версия формата, которую пишет этот генератор.
pub const CACHE_VERSION_605: i32 = 605;

// -------- Text frames --------
// После заголовка — ровно четыре фрейма modified-UTF-8, без разделителей:
// version, URL, namespace ID, codebase IP.
// Формат фрейма: [len u16 BE][payload len байт].
pub const TEXT_FIELD_COUNT: usize = 4;
pub const MUTF8_MAX_PAYLOAD: usize = u16::MAX as usize;
