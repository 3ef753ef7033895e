//! Gen III character set (western releases).

/// Decodes a fixed-length text field, stopping at the first terminator or
/// control byte. Bytes outside the supported table become `*`.
pub fn decode_text(text_data: &[u8]) -> String {
    let mut out_text = String::new();
    for byte in text_data {
        let decoded_char = match *byte {
            0xfa..=0xff => break,
            0x00 => ' ',
            0xa1..=0xaa => char::from(b'0' + (byte - 0xa1)),
            0xab => '!',
            0xac => '?',
            0xad => '.',
            0xae => '-',
            0xb0 => '…',
            0xb1 => '“',
            0xb2 => '”',
            0xb3 => '‘',
            0xb4 => '’',
            0xb5 => '♂',
            0xb6 => '♀',
            0xb7 => '$',
            0xb8 => ',',
            0xb9 => '×',
            0xba => '/',
            0xbb..=0xd4 => char::from(b'A' + (byte - 0xbb)),
            0xd5..=0xee => char::from(b'a' + (byte - 0xd5)),
            _ => '*',
        };
        out_text.push(decoded_char);
    }

    out_text
}

/// Inverse of [`decode_text`] for the characters it produces, padded to `len`
/// with the 0xff terminator. Used to build fixtures.
pub fn encode_text(text: &str, len: usize) -> Vec<u8> {
    let mut out: Vec<u8> = text
        .chars()
        .take(len)
        .map(|c| match c {
            ' ' => 0x00,
            '0'..='9' => 0xa1 + (c as u8 - b'0'),
            '!' => 0xab,
            '?' => 0xac,
            '.' => 0xad,
            '-' => 0xae,
            ',' => 0xb8,
            '/' => 0xba,
            'A'..='Z' => 0xbb + (c as u8 - b'A'),
            'a'..='z' => 0xd5 + (c as u8 - b'a'),
            _ => 0xac,
        })
        .collect();
    out.resize(len, 0xff);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stops_at_terminator() {
        assert_eq!(decode_text(&[0xcc, 0xd9, 0xd8, 0xff, 0xbb, 0xbb]), "Red");
    }

    #[test]
    fn digits_and_punctuation() {
        assert_eq!(decode_text(&[0xa2, 0xa1, 0xab, 0x00, 0xb5]), "10! ♂");
    }

    #[test]
    fn unmapped_bytes_become_placeholders() {
        assert_eq!(decode_text(&[0x50, 0xbb]), "*A");
    }

    #[test]
    fn encode_pads_with_terminator() {
        let encoded = encode_text("May", 7);
        assert_eq!(encoded.len(), 7);
        assert_eq!(&encoded[3..], &[0xff; 4]);
        assert_eq!(decode_text(&encoded), "May");
    }
}
