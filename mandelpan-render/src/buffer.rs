use crate::band::{partition, Band};

/// Bytes per pixel: RGBA with alpha fixed at 255.
pub const BYTES_PER_PIXEL: usize = 4;

/// An owned RGBA pixel buffer, row-major, top row first.
///
/// Pixels are addressed by `(x, y)` and every access is bounds-checked. The
/// raw bytes are only exposed through [`as_bytes`](Self::as_bytes) /
/// [`into_bytes`](Self::into_bytes) for handing to a presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl PixelBuffer {
    /// Create a new buffer filled with opaque black.
    pub fn new(width: u32, height: u32) -> Self {
        let mut pixels = vec![0u8; width as usize * height as usize * BYTES_PER_PIXEL];
        for chunk in pixels.chunks_exact_mut(BYTES_PER_PIXEL) {
            chunk[3] = 255;
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL)
    }

    /// RGB at `(x, y)`, or `None` outside the buffer.
    pub fn get(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        let i = self.index(x, y)?;
        Some([self.pixels[i], self.pixels[i + 1], self.pixels[i + 2]])
    }

    /// Write RGB at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` lies outside the buffer.
    pub fn set(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
        let Some(i) = self.index(x, y) else {
            panic!(
                "pixel ({x}, {y}) outside {}×{} buffer",
                self.width, self.height
            );
        };
        self.pixels[i..i + 3].copy_from_slice(&rgb);
    }

    /// Raw RGBA bytes of row `y`.
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        let start = self.index(0, y)?;
        Some(&self.pixels[start..start + self.width as usize * BYTES_PER_PIXEL])
    }

    /// The whole image as contiguous RGBA bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.pixels
    }

    /// Split the buffer into disjoint mutable views along
    /// [`partition`]`(height, workers)`.
    ///
    /// Returns the `workers` worker bands in row order, then the coordinator's
    /// band holding the remaining rows.
    pub fn split_bands(&mut self, workers: usize) -> (Vec<BandSlice<'_>>, BandSlice<'_>) {
        let bands = partition(self.height, workers);
        let stride = self.width as usize * BYTES_PER_PIXEL;
        let width = self.width;
        let mut rest: &mut [u8] = &mut self.pixels;
        let mut slices = Vec::with_capacity(workers);

        for &band in &bands[..workers] {
            let (head, tail) =
                std::mem::take(&mut rest).split_at_mut(band.rows() as usize * stride);
            slices.push(BandSlice {
                band,
                width,
                pixels: head,
            });
            rest = tail;
        }

        let own = BandSlice {
            band: bands[workers],
            width,
            pixels: rest,
        };
        (slices, own)
    }
}

/// Exclusive write access to the rows of one band.
///
/// Coordinates are in full-image space; `y` must lie inside the band.
#[derive(Debug)]
pub struct BandSlice<'a> {
    band: Band,
    width: u32,
    pixels: &'a mut [u8],
}

impl BandSlice<'_> {
    pub fn band(&self) -> Band {
        self.band
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    /// Write RGB at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `x` is past the image width or `y` outside the band.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
        assert!(
            x < self.width && self.band.contains(y),
            "pixel ({x}, {y}) outside band {:?}",
            self.band
        );
        let i = ((y - self.band.start) as usize * self.width as usize + x as usize)
            * BYTES_PER_PIXEL;
        self.pixels[i..i + 3].copy_from_slice(&rgb);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_buffer_is_black_opaque() {
        let buf = PixelBuffer::new(4, 3);
        assert_eq!(buf.as_bytes().len(), 4 * 3 * 4);
        for chunk in buf.as_bytes().chunks_exact(4) {
            assert_eq!(chunk, &[0, 0, 0, 255]);
        }
    }

    #[test]
    fn set_and_get() {
        let mut buf = PixelBuffer::new(8, 8);
        buf.set(2, 1, [255, 10, 20]);
        assert_eq!(buf.get(2, 1), Some([255, 10, 20]));
        assert_eq!(buf.get(1, 2), Some([0, 0, 0]));
        assert_eq!(buf.get(8, 0), None);
        assert_eq!(buf.get(0, 8), None);

        let idx = (8 + 2) * 4;
        assert_eq!(&buf.as_bytes()[idx..idx + 4], &[255, 10, 20, 255]);
    }

    #[test]
    #[should_panic(expected = "outside 4×4 buffer")]
    fn set_out_of_bounds_panics() {
        PixelBuffer::new(4, 4).set(4, 0, [1, 2, 3]);
    }

    #[test]
    fn row_view() {
        let mut buf = PixelBuffer::new(3, 2);
        buf.set(1, 1, [9, 9, 9]);
        assert_eq!(buf.row(1), Some(&[0, 0, 0, 255, 9, 9, 9, 255, 0, 0, 0, 255][..]));
        assert_eq!(buf.row(2), None);
    }

    #[test]
    fn band_slices_write_their_own_rows() {
        let mut buf = PixelBuffer::new(5, 10);
        {
            let (workers, own) = buf.split_bands(3);
            assert_eq!(workers.len(), 3);
            for (i, mut slice) in workers.into_iter().chain([own]).enumerate() {
                let band = slice.band();
                for y in band.start..band.end {
                    for x in 0..slice.width() {
                        slice.set(x, y, [i as u8 + 1, 0, 0]);
                    }
                }
            }
        }
        let bands = partition(10, 3);
        for y in 0..10 {
            let owner = bands.iter().position(|b| b.contains(y)).unwrap() as u8 + 1;
            for x in 0..5 {
                assert_eq!(buf.get(x, y), Some([owner, 0, 0]));
            }
        }
    }

    #[test]
    fn split_matches_partition() {
        let mut buf = PixelBuffer::new(4, 23);
        let (workers, own) = buf.split_bands(7);
        let got: Vec<Band> = workers.iter().map(BandSlice::band).chain([own.band()]).collect();
        assert_eq!(got, partition(23, 7));
        assert_eq!(own.band(), Band { start: 14, end: 23 });
    }

    #[test]
    fn split_without_workers_is_whole_buffer() {
        let mut buf = PixelBuffer::new(4, 6);
        let (workers, own) = buf.split_bands(0);
        assert!(workers.is_empty());
        assert_eq!(own.band(), Band { start: 0, end: 6 });
    }

    #[test]
    #[should_panic(expected = "outside band")]
    fn band_slice_rejects_foreign_rows() {
        let mut buf = PixelBuffer::new(5, 10);
        let (mut workers, _) = buf.split_bands(1);
        workers[0].set(0, 7, [1, 1, 1]);
    }
}
