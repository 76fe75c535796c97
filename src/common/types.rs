use std::fmt;

use super::config::{OFFSET_MASK, PAGE_SHIFT};

/// Page number type - identifies a virtual page (the upper bits of an address)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageNumber(pub u64);

impl PageNumber {
    pub fn new(number: u64) -> Self {
        Self(number)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Page offset type - identifies a byte within a page (the lower bits of an address).
/// Informational only; the eviction core never consults it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageOffset(pub u64);

impl PageOffset {
    pub fn new(offset: u64) -> Self {
        Self(offset)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PageOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A raw virtual address as decoded from a trace token.
/// Owns the page-number/offset split so the bit arithmetic lives in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VirtualAddress(pub u64);

impl VirtualAddress {
    pub fn new(address: u64) -> Self {
        Self(address)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }

    /// The upper bits identifying the page, given the 64-byte page size.
    pub fn page_number(&self) -> PageNumber {
        PageNumber(self.0 >> PAGE_SHIFT)
    }

    /// The lower bits identifying the byte within the page.
    pub fn offset(&self) -> PageOffset {
        PageOffset(self.0 & OFFSET_MASK)
    }
}

/// A single page reference produced by the address decoder.
/// Immutable once decoded; the cache keys exclusively on `page_number`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageReference {
    pub page_number: PageNumber,
    pub offset: PageOffset,
}

impl PageReference {
    pub fn new(page_number: PageNumber, offset: PageOffset) -> Self {
        Self {
            page_number,
            offset,
        }
    }
}

impl From<VirtualAddress> for PageReference {
    fn from(address: VirtualAddress) -> Self {
        Self {
            page_number: address.page_number(),
            offset: address.offset(),
        }
    }
}
