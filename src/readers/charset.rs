// src/readers/charset.rs

//! Resolve the [`Charset`] of one file from its layout's
//! [`TextEncoding`] and, when detection is asked for, its raw bytes.
//!
//! Detection uses [`chardetng`] with the `jp` top-level domain hint. A guess
//! is not trusted when decoding the file with it reports malformed
//! sequences, or when the guess is not a Japanese-capable charset; the
//! default [`CHARSET_DEFAULT`] (Shift_JIS) is then used instead.
//!
//! [`Charset`]: crate::data::layout::Charset
//! [`TextEncoding`]: crate::data::layout::TextEncoding
//! [`CHARSET_DEFAULT`]: crate::data::layout::CHARSET_DEFAULT
//! [`chardetng`]: https://docs.rs/chardetng

use crate::data::layout::{
    Charset,
    TextEncoding,
    CHARSET_DEFAULT,
};

use std::fmt;

use ::chardetng::EncodingDetector;
use ::encoding_rs::Encoding;
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

/// Top-level domain hint given to the detector.
const TLD_HINT: &[u8] = b"jp";

/// How a [`ResolvedCharset`] came about.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum CharsetResolution {
    /// The layout fixes the charset.
    #[default]
    Fixed,
    /// Detected from the file bytes with confidence.
    Detected,
    /// Detection was not confident; the default was substituted.
    Fallback,
}

impl fmt::Display for CharsetResolution {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        match self {
            CharsetResolution::Fixed => write!(f, "fixed"),
            CharsetResolution::Detected => write!(f, "detected"),
            CharsetResolution::Fallback => write!(f, "fallback"),
        }
    }
}

/// The charset used to decode one file.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct ResolvedCharset {
    pub charset: Charset,
    pub resolution: CharsetResolution,
    /// The detector's guess when it was not used, e.g. `windows-1252`.
    pub rejected_guess: Option<&'static Encoding>,
}

impl ResolvedCharset {
    pub const fn is_fallback(&self) -> bool {
        matches!(self.resolution, CharsetResolution::Fallback)
    }
}

/// Resolve the charset of a file with contents `data`.
pub fn resolve_charset(
    encoding: TextEncoding,
    data: &[u8],
) -> ResolvedCharset {
    match encoding {
        TextEncoding::Fixed(charset) => ResolvedCharset {
            charset,
            resolution: CharsetResolution::Fixed,
            rejected_guess: None,
        },
        TextEncoding::Detect => detect_charset(data),
    }
}

/// Guess the charset of `data`.
///
/// ASCII-only data decodes the same in every supported charset so it is
/// always confident.
pub fn detect_charset(data: &[u8]) -> ResolvedCharset {
    defn!("(data len {})", data.len());
    if data.is_ascii() {
        defx!("ASCII-only; return {:?}", CHARSET_DEFAULT);
        return ResolvedCharset {
            charset: CHARSET_DEFAULT,
            resolution: CharsetResolution::Detected,
            rejected_guess: None,
        };
    }
    let mut detector = EncodingDetector::new();
    detector.feed(data, true);
    let guess: &'static Encoding = detector.guess(Some(TLD_HINT), true);
    defo!("detector guess {}", guess.name());

    let charset: Charset = match Charset::from_encoding(guess) {
        Some(charset) => charset,
        None => {
            defx!("guess {} is not a supported charset; fallback", guess.name());
            return ResolvedCharset {
                charset: CHARSET_DEFAULT,
                resolution: CharsetResolution::Fallback,
                rejected_guess: Some(guess),
            };
        }
    };
    let (_text, had_errors) = charset
        .encoding()
        .decode_without_bom_handling(data);
    if had_errors {
        defx!("guess {} has malformed sequences; fallback", guess.name());
        return ResolvedCharset {
            charset: CHARSET_DEFAULT,
            resolution: CharsetResolution::Fallback,
            rejected_guess: Some(guess),
        };
    }
    defx!("return {:?}", charset);

    ResolvedCharset {
        charset,
        resolution: CharsetResolution::Detected,
        rejected_guess: None,
    }
}
