use std::fmt::{Display, Formatter};

/// Pixel dimensions decoded from the first 8 bytes of the IHDR payload.
///
/// Values are reported exactly as stored. The PNG format forbids a zero
/// width or height, but that rule is not enforced here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Display for ImageSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl From<ImageSize> for (u32, u32) {
    fn from(size: ImageSize) -> Self {
        (size.width, size.height)
    }
}

#[test]
fn test_image_size_display() {
    let size = ImageSize::new(500, 200);
    assert_eq!(size.to_string(), "500x200");
    assert_eq!(<(u32, u32)>::from(size), (500, 200));
}
