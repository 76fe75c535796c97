use std::fs;
use std::path::Path;

use crate::common::{PageReference, Result, ADDR_WIDTH};

use super::AddressDecoder;

/// TraceFile loads a trace of virtual addresses from disk and splits it
/// into fixed-width tokens.
///
/// Traces are streams of hex digits; whitespace between or inside
/// tokens is ignored, so both contiguous ("00480080") and line-per-
/// address layouts load the same way. A trailing partial token is kept
/// and surfaces as a decode error rather than being silently dropped.
#[derive(Debug)]
pub struct TraceFile {
    tokens: Vec<String>,
}

impl TraceFile {
    /// Opens a trace file using the default token width.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_width(path, ADDR_WIDTH)
    }

    /// Opens a trace file with an explicit token width.
    pub fn open_with_width<P: AsRef<Path>>(path: P, addr_width: usize) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(Self::from_text(&text, addr_width))
    }

    /// Splits already-loaded trace text into tokens.
    pub fn from_text(text: &str, addr_width: usize) -> Self {
        let cleaned: String = text.chars().filter(|c| !c.is_ascii_whitespace()).collect();
        let tokens = cleaned
            .as_bytes()
            .chunks(addr_width)
            .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
            .collect();
        Self { tokens }
    }

    /// The raw address tokens in trace order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Decodes the trace into page references, one result per token.
    /// The iterator runs to the end of the trace regardless of decode
    /// failures along the way; each bad token yields its own `Err`.
    pub fn references<'a>(
        &'a self,
        decoder: &'a AddressDecoder,
    ) -> impl Iterator<Item = Result<PageReference>> + 'a {
        self.tokens.iter().map(move |token| decoder.decode(token))
    }
}
