/// Number of letters in each case of the ASCII alphabet.
pub const ALPHABET_LEN: u8 = 26;

/// Caesar-rotates an ASCII letter by `shift` positions within its case.
/// Every byte that is not an ASCII letter is returned unchanged.
///
/// # Examples
///
/// '''
/// assert_eq!(rotate(b'A', 5), b'F');
/// assert_eq!(rotate(b'y', 3), b'b');
/// assert_eq!(rotate(b'{', 12), b'{');
/// '''
pub fn rotate(byte: u8, shift: u8) -> u8 {
    let shift = shift % ALPHABET_LEN;

    match byte {
        b'A'..=b'Z' => b'A' + (byte - b'A' + shift) % ALPHABET_LEN,
        b'a'..=b'z' => b'a' + (byte - b'a' + shift) % ALPHABET_LEN,
        _ => byte,
    }
}
