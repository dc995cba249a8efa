/// Multiplier of the linear congruential generator.
pub const LCG_MULTIPLIER: u32 = 1664525;
/// Increment of the linear congruential generator.
pub const LCG_INCREMENT: u32 = 1013904223;

/// An endless stream of pseudo-random bytes from a 32 bit linear
/// congruential generator. Every call to next advances the state once and
/// yields its top 8 bits.
///
/// # Fields
///
/// * 'state' - The current u32 generator state, arithmetic is mod 2^32.
///
/// # Examples
///
/// '''
/// let mut stream = NoiseStream::for_index(0);
///
/// assert_eq!(stream.next(), Some(60));
/// assert_eq!(stream.next(), Some(94));
/// '''
#[derive(Clone, Debug)]
pub struct NoiseStream {
    state: u32,
}

impl NoiseStream {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Seeds the stream for the image at the given index, the seed being
    /// index + 1 truncated to 32 bits.
    pub fn for_index(index: usize) -> Self {
        Self::new((index as u32).wrapping_add(1))
    }
}

impl Iterator for NoiseStream {
    type Item = u8;
    fn next(&mut self) -> Option<Self::Item> {
        self.state = self
            .state
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT);
        Some((self.state >> 24) as u8)
    }
}

/// Overwrites every byte of the buffer, in order, with noise seeded from
/// the index.
pub fn fill(buffer: &mut [u8], index: usize) {
    buffer
        .iter_mut()
        .zip(NoiseStream::for_index(index))
        .for_each(|(byte, noise)| *byte = noise);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_sequence() {
        let first = NoiseStream::for_index(0).take(6).collect::<Vec<_>>();
        assert_eq!(first, vec![60, 94, 129, 180, 12, 94]);

        let second = NoiseStream::for_index(1).take(6).collect::<Vec<_>>();
        assert_eq!(second, vec![60, 117, 48, 189, 183, 30]);
    }

    #[test]
    fn fill_is_deterministic() {
        let mut a = vec![0u8; 1024];
        let mut b = vec![0xffu8; 1024];

        fill(&mut a, 42);
        fill(&mut b, 42);

        assert_eq!(a, b);
    }

    #[test]
    fn fill_differs_between_indices() {
        let mut a = vec![0u8; 64];
        let mut b = vec![0u8; 64];

        fill(&mut a, 3);
        fill(&mut b, 4);

        assert_ne!(a, b);
    }

    #[test]
    fn fill_is_a_prefix_of_longer_fill() {
        let mut short = vec![0u8; 10];
        let mut long = vec![0u8; 100];

        fill(&mut short, 7);
        fill(&mut long, 7);

        assert_eq!(short[..], long[..10]);
    }

    #[test]
    fn seed_wraps_at_u32() {
        let wrapped = NoiseStream::for_index(u32::MAX as usize);
        let zero = NoiseStream::new(0);

        assert_eq!(
            wrapped.take(8).collect::<Vec<_>>(),
            zero.take(8).collect::<Vec<_>>()
        );
    }
}
