use std::fmt::{self, Display};

/// The pixel chosen to carry the secret byte of one image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Coordinate {
    pub x: usize,
    pub y: usize,
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x={},y={}", self.x, self.y)
    }
}

/// Selects the carrier pixel for the image at the given index.
///
/// x = (i*73 + i*i*19 + 17) mod width
/// y = (i*131 + i*i*7 + 23) mod height
///
/// All terms are computed in wrapping u64 arithmetic before the reduction,
/// so the result is always inside the image. Width and height must be
/// nonzero.
pub fn position(index: usize, width: usize, height: usize) -> Coordinate {
    let i = index as u64;
    let sq = i.wrapping_mul(i);

    let x = i
        .wrapping_mul(73)
        .wrapping_add(sq.wrapping_mul(19))
        .wrapping_add(17)
        % width as u64;
    let y = i
        .wrapping_mul(131)
        .wrapping_add(sq.wrapping_mul(7))
        .wrapping_add(23)
        % height as u64;

    Coordinate {
        x: x as usize,
        y: y as usize,
    }
}

/// Caesar rotation for the image at the given index, (i*7 + i*i*3 + 5) mod 26.
pub fn rotation(index: usize) -> u8 {
    let i = index as u64;

    let r = i
        .wrapping_mul(7)
        .wrapping_add(i.wrapping_mul(i).wrapping_mul(3))
        .wrapping_add(5)
        % 26;

    r as u8
}
