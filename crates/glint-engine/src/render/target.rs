/// Image collaborator receiving the traced pixel buffer.
///
/// Implementations sit on the GPU side (a sampled texture the UI layer
/// displays) or in memory for tests. `set_data` is one bulk transfer for
/// the whole frame, never per pixel.
pub trait TargetImage {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Replaces the image contents with `data`, `width * height * 4` bytes
    /// of `0xAABBGGRR` pixels.
    fn set_data(&mut self, data: &[u8]);
}

/// CPU-backed target for headless rendering and tests.
#[derive(Debug, Clone)]
pub struct OffscreenTarget {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl OffscreenTarget {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; (width * height * 4) as usize],
        }
    }

    /// Decodes the packed pixel at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> u32 {
        let o = ((x + y * self.width) * 4) as usize;
        u32::from_ne_bytes([self.data[o], self.data[o + 1], self.data[o + 2], self.data[o + 3]])
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

impl TargetImage for OffscreenTarget {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn set_data(&mut self, data: &[u8]) {
        debug_assert_eq!(data.len(), self.data.len(), "upload size mismatch");
        self.data.copy_from_slice(data);
    }
}
