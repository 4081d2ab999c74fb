//! mutf8 — legacy modified-UTF-8 кодек текстовых полей index-файла.
//!
//! Кодируются UTF-16 code units, а не скаляры Unicode:
//! - 0x0001..=0x007F — 1 байт;
//! - 0x0000 и 0x0080..=0x07FF — 2 байта (NUL никогда не пишется одним байтом);
//! - 0x0800..=0xFFFF — 3 байта.
//! Символы вне BMP сначала раскладываются на суррогатную пару, и каждая
//! половина кодируется 3-байтовым правилом отдельно (6 байт на символ).
//! Это причуда исходного формата, воспроизводится как есть.
//!
//! Фрейм: [len u16 BE][payload], len — число байт payload, не code units.

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use std::io::{Read, Write};

use crate::consts::MUTF8_MAX_PAYLOAD;
use crate::errors::{DecodeError, EncodeError};

/// Кодированная длина одного code unit.
#[inline]
fn unit_len(u: u16) -> usize {
    match u {
        0x0001..=0x007F => 1,
        0x0000 | 0x0080..=0x07FF => 2,
        _ => 3,
    }
}

/// Длина payload для строки (без 2-байтового префикса).
pub fn encoded_len(s: &str) -> usize {
    s.encode_utf16().map(unit_len).sum()
}

/// Кодировать строку в payload (без префикса длины).
pub fn encode(s: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(encoded_len(s));
    for u in s.encode_utf16() {
        match unit_len(u) {
            1 => out.push(u as u8),
            2 => {
                out.push(0xC0 | (u >> 6) as u8);
                out.push(0x80 | (u & 0x3F) as u8);
            }
            _ => {
                out.push(0xE0 | (u >> 12) as u8);
                out.push(0x80 | ((u >> 6) & 0x3F) as u8);
                out.push(0x80 | (u & 0x3F) as u8);
            }
        }
    }
    out
}

/// Записать один фрейм: u16 BE длина + payload.
/// Возвращает число записанных байт (2 + payload).
pub fn write_frame<W: Write>(w: &mut W, s: &str) -> Result<usize, EncodeError> {
    let payload = encode(s);
    if payload.len() > MUTF8_MAX_PAYLOAD {
        return Err(EncodeError::TextTooLong { len: payload.len() });
    }
    w.write_u16::<BigEndian>(payload.len() as u16)?;
    w.write_all(&payload)?;
    Ok(2 + payload.len())
}

/// Восстановить code units из payload.
pub fn decode_units(payload: &[u8]) -> Result<Vec<u16>, DecodeError> {
    let mut units = Vec::with_capacity(payload.len());
    let mut i = 0usize;
    while i < payload.len() {
        let b0 = payload[i];
        let (unit, adv) = match b0 {
            0x00..=0x7F => (b0 as u16, 1),
            0xC0..=0xDF => {
                let b1 = continuation(payload, i, 1)?;
                ((((b0 & 0x1F) as u16) << 6) | (b1 & 0x3F) as u16, 2)
            }
            0xE0..=0xEF => {
                let b1 = continuation(payload, i, 1)?;
                let b2 = continuation(payload, i, 2)?;
                (
                    (((b0 & 0x0F) as u16) << 12)
                        | (((b1 & 0x3F) as u16) << 6)
                        | (b2 & 0x3F) as u16,
                    3,
                )
            }
            _ => return Err(DecodeError::MalformedSequence { offset: i }),
        };
        units.push(unit);
        i += adv;
    }
    Ok(units)
}

#[inline]
fn continuation(payload: &[u8], start: usize, k: usize) -> Result<u8, DecodeError> {
    match payload.get(start + k) {
        Some(&b) if (0x80..=0xBF).contains(&b) => Ok(b),
        // Обрыв и плохой continuation-байт — одна и та же категория ошибки.
        _ => Err(DecodeError::MalformedSequence { offset: start }),
    }
}

/// Декодировать payload в String. Суррогатные пары склеиваются обратно;
/// одиночный суррогат — ошибка.
pub fn decode(payload: &[u8]) -> Result<String, DecodeError> {
    let units = decode_units(payload)?;
    String::from_utf16(&units).map_err(|_| DecodeError::UnpairedSurrogate)
}

/// Прочитать один фрейм из reader'а (обратное направление; используется тестами).
pub fn read_frame<R: Read>(r: &mut R) -> Result<String, DecodeError> {
    let len = r.read_u16::<BigEndian>()? as usize;
    let mut payload = vec![0u8; len];
    r.read_exact(&mut payload)?;
    decode(&payload)
}
