use crate::common::{PageReference, Result, SimError, VirtualAddress, ADDR_WIDTH};

/// AddressDecoder converts fixed-width hexadecimal trace tokens into
/// page references. A token like "0048" decodes to the virtual address
/// 0x048, which splits into page number 1 and offset 8 under the
/// 64-byte page size.
pub struct AddressDecoder {
    /// Expected token width in hex digits
    addr_width: usize,
}

impl AddressDecoder {
    pub fn new(addr_width: usize) -> Self {
        Self { addr_width }
    }

    /// Returns the token width this decoder expects.
    pub fn addr_width(&self) -> usize {
        self.addr_width
    }

    /// Decodes a single trace token into a page reference.
    ///
    /// Fails with `TokenWidth` if the token is not exactly `addr_width`
    /// characters, or `MalformedToken` if any character is not a hex
    /// digit. A failure affects only this token; the decoder holds no
    /// state between calls.
    pub fn decode(&self, token: &str) -> Result<PageReference> {
        if token.len() != self.addr_width {
            return Err(SimError::TokenWidth {
                token: token.to_string(),
                expected: self.addr_width,
            });
        }

        // from_str_radix tolerates a leading '+', which is not a valid
        // address digit, so validate the characters first.
        if !token.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(SimError::MalformedToken(token.to_string()));
        }

        let raw = u64::from_str_radix(token, 16)
            .map_err(|_| SimError::MalformedToken(token.to_string()))?;

        Ok(PageReference::from(VirtualAddress::new(raw)))
    }
}

impl Default for AddressDecoder {
    fn default() -> Self {
        Self::new(ADDR_WIDTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{PageNumber, PageOffset};

    #[test]
    fn test_decode_sample_addresses() {
        // The address-to-page mapping for 64-byte pages
        let decoder = AddressDecoder::default();
        let cases = [
            ("0048", 1, 0x08),
            ("0080", 2, 0x00),
            ("004E", 1, 0x0E),
            ("00FC", 3, 0x3C),
            ("01FC", 7, 0x3C),
        ];

        for (token, vpn, vpo) in cases {
            let reference = decoder.decode(token).unwrap();
            assert_eq!(reference.page_number, PageNumber::new(vpn));
            assert_eq!(reference.offset, PageOffset::new(vpo));
        }
    }

    #[test]
    fn test_decode_is_case_insensitive() {
        let decoder = AddressDecoder::default();
        assert_eq!(
            decoder.decode("00fc").unwrap(),
            decoder.decode("00FC").unwrap()
        );
    }

    #[test]
    fn test_decode_rejects_wrong_width() {
        let decoder = AddressDecoder::default();
        assert!(matches!(
            decoder.decode("048"),
            Err(SimError::TokenWidth { expected: 4, .. })
        ));
        assert!(matches!(
            decoder.decode("00048"),
            Err(SimError::TokenWidth { .. })
        ));
        assert!(matches!(
            decoder.decode(""),
            Err(SimError::TokenWidth { .. })
        ));
    }

    #[test]
    fn test_decode_rejects_non_hex() {
        let decoder = AddressDecoder::default();
        for token in ["00GZ", "+048", "0x48", "00 8"] {
            let err = decoder.decode(token).unwrap_err();
            assert!(matches!(err, SimError::MalformedToken(_)), "{token:?}");
            assert!(err.is_decode());
        }
    }

    #[test]
    fn test_decode_custom_width() {
        let decoder = AddressDecoder::new(8);
        let reference = decoder.decode("00000048").unwrap();
        assert_eq!(reference.page_number, PageNumber::new(1));
    }
}
