//! Ошибки кодека. Библиотека отдаёт конкретные enum'ы,
//! CLI-слой заворачивает их в anyhow с контекстом.

use thiserror::Error;

use crate::consts::{HEADER_SIZE, MUTF8_MAX_PAYLOAD};

/// Ошибки записи index-файла.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Фиксированные поля не влезли в 128-байтовый заголовок.
    /// Достижимо только при порче таблицы полей — это дефект, не runtime-условие.
    #[error("fixed fields occupy {written} bytes, over the {HEADER_SIZE}-byte header")]
    LayoutOverflow { written: usize },

    /// Кодированный текст длиннее u16-префикса.
    #[error("encoded text is {len} bytes, max is {MUTF8_MAX_PAYLOAD}")]
    TextTooLong { len: usize },

    /// Ошибка записи в sink. Уже записанные байты не откатываются.
    #[error("sink write failed")]
    Io(#[from] std::io::Error),
}

/// Ошибки обратного направления (разбор текстового фрейма).
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Оборванная multi-byte последовательность или continuation-байт вне 0x80..=0xBF.
    #[error("malformed modified-UTF-8 sequence at byte {offset}")]
    MalformedSequence { offset: usize },

    /// Восстановленные code units не являются валидным UTF-16 (одиночный суррогат).
    #[error("decoded code units contain an unpaired surrogate")]
    UnpairedSurrogate,

    #[error("frame read failed")]
    Io(#[from] std::io::Error),
}
