#![allow(non_snake_case)]

// Базовые модули
pub mod consts;
pub mod errors;

// Кодек и формат
pub mod header; // фиксированная часть заголовка (101 байт полей + паддинг)
pub mod mutf8;  // legacy modified-UTF-8 (по UTF-16 code units)
pub mod record; // заголовок + четыре текстовых фрейма

// Утилиты (hex_dump для CLI)
pub mod util;

// Удобные реэкспорты
pub use errors::{DecodeError, EncodeError};
pub use header::IndexHeader;
pub use record::{IndexRecord, TimestampUnit, SAMPLE_TEXT};
