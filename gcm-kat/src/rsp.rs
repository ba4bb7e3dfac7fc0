//! Loader for NIST CAVP GCM response (`.rsp`) files.
//!
//! ```text
//! [Keylen = 128]
//! [IVlen = 96]
//! [PTlen = 128]
//! [AADlen = 0]
//! [Taglen = 128]
//!
//! Count = 0
//! Key = ...
//! IV = ...
//! CT = ...
//! AAD =
//! Tag = ...
//! FAIL
//! ```
//!
//! Records from files whose name contains `decrypt` run in the decrypt
//! direction; a `FAIL` record is a tag-only vector expected to fail
//! authentication.

use crate::vector::{TestSuite, TestVector};
use gcm_ref::Direction;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::{fs, io};

/// Errors raised while loading a response file. All of them mean the
/// fixture itself is unusable.
#[derive(Debug, thiserror::Error)]
pub enum RspError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// File being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// A line is neither a comment, a header nor a `Name = value` entry.
    #[error("line {line}: malformed entry `{text}`")]
    Malformed {
        /// 1-based line number.
        line: usize,
        /// Offending line.
        text: String,
    },
    /// A field value is not valid hex.
    #[error("line {line}: invalid hex in `{field}`: {source}")]
    Hex {
        /// 1-based line number.
        line: usize,
        /// Field name.
        field: String,
        /// Decoder error.
        #[source]
        source: hex::FromHexError,
    },
    /// A header value is not a number.
    #[error("line {line}: header `{name}` has non-numeric value `{value}`")]
    Header {
        /// 1-based line number.
        line: usize,
        /// Header name.
        name: String,
        /// Header value.
        value: String,
    },
    /// A record lacks a required field.
    #[error("record starting at line {line} is missing `{field}`")]
    MissingField {
        /// Line of the record's `Count` entry.
        line: usize,
        /// Missing field name.
        field: &'static str,
    },
    /// A record disagrees with a length declared in the section headers.
    #[error(
        "record starting at line {line}: `{field}` is {actual} bits, header declares {declared}"
    )]
    Length {
        /// Line of the record's `Count` entry.
        line: usize,
        /// Field name.
        field: &'static str,
        /// Length found in the record.
        actual: usize,
        /// Length declared by the header.
        declared: usize,
    },
    /// A record appears before any `[Keylen = ...]` header.
    #[error("line {line}: record before any `Keylen` header")]
    MissingKeylen {
        /// Line of the record's `Count` entry.
        line: usize,
    },
}

/// Load every suite from the response file at `path`.
///
/// Each run of records under one `Keylen` becomes a suite, in file order.
/// Suites are named after the file stem, suffixed with the key length (and
/// an occurrence number for repeats) when the file yields more than one.
///
/// # Errors
/// See [`RspError`].
pub fn load(path: impl AsRef<Path>) -> Result<Vec<TestSuite>, RspError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| RspError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let stem = path.file_stem().map_or_else(
        || path.display().to_string(),
        |s| s.to_string_lossy().into_owned(),
    );
    let direction = if stem.to_ascii_lowercase().contains("decrypt") {
        Direction::Decrypt
    } else {
        Direction::Encrypt
    };
    tracing::debug!(path = %path.display(), ?direction, "loading response file");
    parse(&stem, direction, &text)
}

/// Lengths declared by the bracketed section headers, in bits.
#[derive(Clone, Copy, Debug, Default)]
struct Section {
    key_bits: Option<usize>,
    iv_bits: Option<usize>,
    pt_bits: Option<usize>,
    aad_bits: Option<usize>,
    tag_bits: Option<usize>,
}

/// A record under construction.
#[derive(Debug, Default)]
struct Record {
    line: usize,
    key: Option<Vec<u8>>,
    iv: Option<Vec<u8>>,
    pt: Option<Vec<u8>>,
    aad: Option<Vec<u8>>,
    ct: Option<Vec<u8>>,
    tag: Option<Vec<u8>>,
    fail: bool,
}

impl Record {
    fn field(&mut self, name: &str) -> Option<&mut Option<Vec<u8>>> {
        Some(match name {
            "Key" => &mut self.key,
            "IV" => &mut self.iv,
            "PT" => &mut self.pt,
            "AAD" => &mut self.aad,
            "CT" => &mut self.ct,
            "Tag" => &mut self.tag,
            _ => return None,
        })
    }

    fn finish(
        self,
        section: &Section,
        direction: Direction,
    ) -> Result<(usize, TestVector), RspError> {
        let line = self.line;
        let key_bits = section.key_bits.ok_or(RspError::MissingKeylen { line })?;
        let missing = |field| RspError::MissingField { line, field };
        let check = |field, actual: usize, declared: Option<usize>| match declared {
            Some(declared) if declared != actual * 8 => Err(RspError::Length {
                line,
                field,
                actual: actual * 8,
                declared,
            }),
            _ => Ok(()),
        };

        let key = self.key.ok_or_else(|| missing("Key"))?;
        let nonce = self.iv.ok_or_else(|| missing("IV"))?;
        let tag = self.tag.ok_or_else(|| missing("Tag"))?;
        let aad = self.aad.unwrap_or_default();
        let ct = self.ct.ok_or_else(|| missing("CT"))?;

        check("Key", key.len(), Some(key_bits))?;
        check("IV", nonce.len(), section.iv_bits)?;
        check("AAD", aad.len(), section.aad_bits)?;
        check("CT", ct.len(), section.pt_bits)?;
        check("Tag", tag.len(), section.tag_bits)?;

        let (direction, plaintext) = if self.fail {
            (Direction::Decrypt, None)
        } else {
            (direction, Some(self.pt.ok_or_else(|| missing("PT"))?))
        };

        let vector = TestVector {
            key: Cow::Owned(key),
            nonce: Cow::Owned(nonce),
            plaintext: plaintext.map(Cow::Owned),
            ciphertext: Some(Cow::Owned(ct)),
            aad: Cow::Owned(aad),
            tag: Cow::Owned(tag),
            direction,
            expect_fail: self.fail,
        };
        Ok((key_bits, vector))
    }
}

/// Parse response file `text`. `name` is the suite name and `direction`
/// the default direction for records not marked `FAIL`.
///
/// # Errors
/// See [`RspError`].
pub fn parse(name: &str, direction: Direction, text: &str) -> Result<Vec<TestSuite>, RspError> {
    let mut direction = direction;
    let mut section = Section::default();
    let mut record: Option<Record> = None;
    // Runs of consecutive records sharing a key length, in file order.
    let mut groups: Vec<(usize, Vec<TestVector>)> = Vec::new();

    let mut push = |record: Record, section: &Section, direction| -> Result<(), RspError> {
        let (bits, vector) = record.finish(section, direction)?;
        match groups.last_mut() {
            Some((b, vectors)) if *b == bits => vectors.push(vector),
            _ => groups.push((bits, vec![vector])),
        }
        Ok(())
    };

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let malformed = || RspError::Malformed {
            line,
            text: raw.to_owned(),
        };

        if let Some(header) = trimmed.strip_prefix('[').and_then(|h| h.strip_suffix(']')) {
            // Headers close the current record.
            if let Some(done) = record.take() {
                push(done, &section, direction)?;
            }
            match header.split_once('=') {
                Some((key, value)) => {
                    let (key, value) = (key.trim(), value.trim());
                    let bits = value.parse::<usize>().map_err(|_| RspError::Header {
                        line,
                        name: key.to_owned(),
                        value: value.to_owned(),
                    })?;
                    let slot = match key {
                        "Keylen" => &mut section.key_bits,
                        "IVlen" => &mut section.iv_bits,
                        "PTlen" => &mut section.pt_bits,
                        "AADlen" => &mut section.aad_bits,
                        "Taglen" => &mut section.tag_bits,
                        _ => return Err(malformed()),
                    };
                    *slot = Some(bits);
                }
                None if header.eq_ignore_ascii_case("ENCRYPT") => direction = Direction::Encrypt,
                None if header.eq_ignore_ascii_case("DECRYPT") => direction = Direction::Decrypt,
                None => return Err(malformed()),
            }
            continue;
        }

        if trimmed == "FAIL" {
            record.as_mut().ok_or_else(malformed)?.fail = true;
            continue;
        }

        let (key, value) = trimmed.split_once('=').ok_or_else(malformed)?;
        let (key, value) = (key.trim(), value.trim());
        if key == "Count" {
            if let Some(done) = record.replace(Record {
                line,
                ..Record::default()
            }) {
                push(done, &section, direction)?;
            }
            continue;
        }

        let slot = record
            .as_mut()
            .and_then(|r| r.field(key))
            .ok_or_else(malformed)?;
        let bytes = hex::decode(value).map_err(|source| RspError::Hex {
            line,
            field: key.to_owned(),
            source,
        })?;
        *slot = Some(bytes);
    }
    if let Some(done) = record.take() {
        push(done, &section, direction)?;
    }

    let mixed = groups.len() > 1;
    let mut seen: Vec<(usize, usize)> = Vec::new();
    let suites = groups
        .into_iter()
        .map(|(key_bits, vectors)| {
            let name = if mixed {
                let occurrence = match seen.iter_mut().find(|(b, _)| *b == key_bits) {
                    Some((_, n)) => {
                        *n += 1;
                        *n
                    }
                    None => {
                        seen.push((key_bits, 1));
                        1
                    }
                };
                if occurrence == 1 {
                    format!("{name}-{key_bits}")
                } else {
                    format!("{name}-{key_bits}-{occurrence}")
                }
            } else {
                name.to_owned()
            };
            TestSuite {
                name: Cow::Owned(name),
                key_bits,
                vectors,
            }
        })
        .collect();
    Ok(suites)
}
