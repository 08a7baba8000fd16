//! Output encoding with lossy replacement.
//!
//! Text extracted from documents is always Unicode, but the stream it is
//! written to may not be. This module converts text into a target encoding
//! and replaces every character the encoding cannot represent with
//! [`REPLACEMENT_MARKER`], so writing never fails on content.

use crate::common::{Error, Result};
use encoding_rs::{EncoderResult, Encoding, UTF_8};

/// Character written in place of code points the target encoding lacks.
pub const REPLACEMENT_MARKER: char = '?';

/// Locale variables consulted, in priority order, by [`OutputEncoding::from_locale`].
const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_CTYPE", "LANG"];

/// Target encoding for text written to standard output.
///
/// # Examples
///
/// ```
/// use ooxml_dump::common::encoding::OutputEncoding;
///
/// let latin1 = OutputEncoding::from_label("windows-1252")?;
/// assert_eq!(latin1.sanitize("naïve ✓"), "naïve ?");
/// assert_eq!(OutputEncoding::UTF8.sanitize("naïve ✓"), "naïve ✓");
/// # Ok::<(), ooxml_dump::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputEncoding {
    encoding: &'static Encoding,
}

impl Default for OutputEncoding {
    fn default() -> Self {
        Self::UTF8
    }
}

impl OutputEncoding {
    /// UTF-8, which can represent every character.
    pub const UTF8: Self = Self { encoding: UTF_8 };

    /// Resolve a WHATWG encoding label such as `utf-8`, `latin1` or `shift_jis`.
    ///
    /// Labels whose encoder produces UTF-8 (the UTF-16 family, `replacement`)
    /// resolve to UTF-8.
    pub fn from_label(label: &str) -> Result<Self> {
        Encoding::for_label(label.trim().as_bytes())
            .map(|encoding| Self {
                encoding: encoding.output_encoding(),
            })
            .ok_or_else(|| Error::UnknownEncoding(label.to_string()))
    }

    /// Derive the encoding from the process locale.
    ///
    /// The first non-empty of `LC_ALL`, `LC_CTYPE` and `LANG` decides. Its
    /// charset suffix (`en_US.ISO-8859-1@euro` → `ISO-8859-1`) is resolved as
    /// a label; locales without a recognizable charset, including `C` and
    /// `POSIX`, fall back to UTF-8.
    pub fn from_locale() -> Self {
        Self::from_locale_vars(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_locale_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let Some(locale) = LOCALE_VARS
            .iter()
            .filter_map(|key| lookup(key))
            .find(|value| !value.is_empty())
        else {
            return Self::UTF8;
        };

        locale_charset(&locale)
            .and_then(|charset| Self::from_label(charset).ok())
            .unwrap_or(Self::UTF8)
    }

    /// Canonical name of the encoding, e.g. `UTF-8` or `windows-1252`.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.encoding.name()
    }

    /// Whether every Unicode scalar value is representable.
    #[inline]
    pub fn is_utf8(&self) -> bool {
        self.encoding == UTF_8
    }

    /// Encode text into the target encoding.
    ///
    /// Unrepresentable characters are written as [`REPLACEMENT_MARKER`].
    pub fn encode(&self, text: &str) -> Vec<u8> {
        if self.is_utf8() {
            return text.as_bytes().to_vec();
        }

        let mut encoder = self.encoding.new_encoder();
        let mut out = Vec::with_capacity(text.len() + 16);
        let mut marker_buf = [0u8; 4];
        let marker: &str = REPLACEMENT_MARKER.encode_utf8(&mut marker_buf);
        let mut remaining = text;

        loop {
            if let Some(needed) =
                encoder.max_buffer_length_from_utf8_without_replacement(remaining.len())
            {
                out.reserve(needed);
            }

            let (result, read) =
                encoder.encode_from_utf8_to_vec_without_replacement(remaining, &mut out, true);
            remaining = &remaining[read..];

            match result {
                EncoderResult::InputEmpty => break,
                EncoderResult::OutputFull => {},
                EncoderResult::Unmappable(_) => {
                    out.reserve(16);
                    let _ = encoder.encode_from_utf8_to_vec_without_replacement(
                        marker, &mut out, false,
                    );
                },
            }
        }

        out
    }

    /// Round-trip text through the target encoding.
    ///
    /// The result contains exactly the characters that would reach the
    /// output stream, as a Rust string.
    pub fn sanitize(&self, text: &str) -> String {
        if self.is_utf8() {
            return text.to_string();
        }

        let bytes = self.encode(text);
        let (decoded, _) = self.encoding.decode_without_bom_handling(&bytes);
        decoded.into_owned()
    }
}

/// Extract the charset part of a POSIX locale name.
fn locale_charset(locale: &str) -> Option<&str> {
    let without_modifier = locale.split('@').next().unwrap_or(locale);
    let (_, charset) = without_modifier.split_once('.')?;
    (!charset.is_empty()).then_some(charset)
}
