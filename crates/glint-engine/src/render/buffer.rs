/// Owned CPU pixel buffer keyed to a target extent.
///
/// Reallocates when the extent changes rather than leaving stale storage
/// behind; an unchanged extent keeps the existing allocation.
#[derive(Debug, Default)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; (width * height) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Re-keys the buffer to a new extent. Contents are unspecified after a
    /// size change; every pixel is rewritten by the trace loop anyway.
    pub fn resize(&mut self, width: u32, height: u32) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        self.pixels.clear();
        self.pixels.resize((width * height) as usize, 0);
    }

    #[inline]
    pub fn put(&mut self, x: u32, y: u32, value: u32) {
        self.pixels[(x + y * self.width) as usize] = value;
    }

    #[inline]
    pub fn get(&self, x: u32, y: u32) -> u32 {
        self.pixels[(x + y * self.width) as usize]
    }

    /// Byte view of the whole buffer for the one-transfer upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Size of [`as_bytes`](PixelBuffer::as_bytes) in bytes.
    pub fn byte_len(&self) -> usize {
        self.pixels.len() * size_of::<u32>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_and_get_round_trip() {
        let mut buffer = PixelBuffer::new(4, 2);
        buffer.put(3, 1, 0xAABB_CCDD);
        assert_eq!(buffer.get(3, 1), 0xAABB_CCDD);
        assert_eq!(buffer.get(0, 0), 0);
    }

    #[test]
    fn resize_rekeys_the_extent() {
        let mut buffer = PixelBuffer::new(2, 2);
        buffer.resize(5, 3);
        assert_eq!(buffer.width(), 5);
        assert_eq!(buffer.height(), 3);
        assert_eq!(buffer.byte_len(), 5 * 3 * 4);
    }

    #[test]
    fn byte_view_covers_every_pixel() {
        let mut buffer = PixelBuffer::new(2, 1);
        buffer.put(0, 0, u32::from_ne_bytes([1, 2, 3, 4]));
        buffer.put(1, 0, u32::from_ne_bytes([5, 6, 7, 8]));
        assert_eq!(buffer.as_bytes(), &[1, 2, 3, 4, 5, 6, 7, 8]);
    }
}
