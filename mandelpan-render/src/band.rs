/// Default number of worker threads per frame. The coordinator renders one
/// more band itself, so a frame is split into `DEFAULT_WORKERS + 1` bands.
pub const DEFAULT_WORKERS: usize = 7;

/// A half-open range of image rows `[start, end)` rendered as one unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Band {
    pub start: u32,
    pub end: u32,
}

impl Band {
    /// Number of rows in this band.
    pub fn rows(&self) -> u32 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn contains(&self, y: u32) -> bool {
        (self.start..self.end).contains(&y)
    }
}

/// Split `height` rows into `workers` equal bands plus a final band for the
/// coordinator.
///
/// Each worker band holds `height / (workers + 1)` rows. The last band runs
/// from the end of the worker bands to `height`, absorbing the division
/// remainder, so the bands always tile `[0, height)` exactly. The returned
/// vector always has `workers + 1` entries, the coordinator's band last.
pub fn partition(height: u32, workers: usize) -> Vec<Band> {
    let band_height = (height as u64 / (workers as u64 + 1)) as u32;
    let mut bands = Vec::with_capacity(workers + 1);
    let mut start = 0;
    for _ in 0..workers {
        bands.push(Band {
            start,
            end: start + band_height,
        });
        start += band_height;
    }
    bands.push(Band { start, end: height });
    bands
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_exact_cover(height: u32, workers: usize) {
        let bands = partition(height, workers);
        assert_eq!(bands.len(), workers + 1);
        let mut covered = vec![0u8; height as usize];
        for band in &bands {
            assert!(band.start <= band.end);
            for y in band.start..band.end {
                covered[y as usize] += 1;
            }
        }
        assert!(
            covered.iter().all(|&n| n == 1),
            "height {height}, workers {workers}: {bands:?}"
        );
    }

    #[test]
    fn covers_every_row_exactly_once() {
        for workers in 0..=16 {
            for height in (workers as u32 + 1).max(2)..=300 {
                assert_exact_cover(height, workers);
            }
        }
    }

    #[test]
    fn default_split_of_600_rows() {
        let bands = partition(600, DEFAULT_WORKERS);
        assert_eq!(bands.len(), 8);
        assert!(bands.iter().all(|b| b.rows() == 75));
        assert_eq!(bands.last(), Some(&Band { start: 525, end: 600 }));
    }

    #[test]
    fn remainder_goes_to_last_band() {
        let bands = partition(603, DEFAULT_WORKERS);
        assert!(bands[..7].iter().all(|b| b.rows() == 75));
        assert_eq!(bands[7], Band { start: 525, end: 603 });
    }

    #[test]
    fn no_workers_is_one_band() {
        assert_eq!(partition(10, 0), vec![Band { start: 0, end: 10 }]);
    }

    #[test]
    fn fewer_rows_than_bands() {
        // 5 rows, 7 workers: worker bands are empty, coordinator takes all.
        let bands = partition(5, 7);
        assert!(bands[..7].iter().all(Band::is_empty));
        assert_eq!(bands[7], Band { start: 0, end: 5 });
        assert_exact_cover(5, 7);
    }

    #[test]
    fn contains() {
        let band = Band { start: 4, end: 8 };
        assert!(band.contains(4));
        assert!(band.contains(7));
        assert!(!band.contains(8));
        assert!(!band.contains(3));
    }
}
