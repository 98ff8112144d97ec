use mandelpan_core::IterationResult;

/// Number of entries in a [`ColorTable`].
pub const TABLE_LEN: usize = 16;

/// A fixed ring of colors indexed by escape iteration modulo [`TABLE_LEN`].
pub type ColorTable = [[u8; 3]; TABLE_LEN];

/// Brown → deep blue → pale yellow → orange, the classic banded
/// escape-time scheme.
pub const CLASSIC: ColorTable = [
    [66, 30, 15],
    [25, 7, 26],
    [9, 1, 47],
    [4, 4, 73],
    [0, 7, 100],
    [12, 44, 138],
    [24, 82, 177],
    [57, 125, 209],
    [134, 181, 229],
    [211, 236, 248],
    [241, 233, 191],
    [248, 201, 95],
    [255, 170, 0],
    [204, 128, 0],
    [153, 87, 0],
    [106, 52, 3],
];

/// Color used for points that never escaped, unless configured otherwise.
pub const MEMBER_BLACK: [u8; 3] = [0, 0, 0];

/// Maps an iteration result to a pixel color.
///
/// Renderers are generic over this trait so the per-pixel call is inlined.
/// Implementations must be pure: the same result always yields the same color,
/// whichever worker thread asks.
pub trait Coloring {
    fn color(&self, result: IterationResult) -> [u8; 3];
}

/// Cyclic banding: escaped points take `table[n % 16]`, members take a single
/// fixed color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BandedColoring {
    table: &'static ColorTable,
    member: [u8; 3],
}

impl BandedColoring {
    pub fn new(table: &'static ColorTable, member: [u8; 3]) -> Self {
        Self { table, member }
    }

    pub fn member(&self) -> [u8; 3] {
        self.member
    }
}

impl Default for BandedColoring {
    fn default() -> Self {
        Self::new(&CLASSIC, MEMBER_BLACK)
    }
}

impl Coloring for BandedColoring {
    #[inline]
    fn color(&self, result: IterationResult) -> [u8; 3] {
        match result {
            IterationResult::Interior => self.member,
            IterationResult::Escaped { iterations, .. } => {
                self.table[iterations as usize % TABLE_LEN]
            }
        }
    }
}
