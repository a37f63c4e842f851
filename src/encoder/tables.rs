/// QR symbol capacity tables (ISO/IEC 18004 Tables 7 and 9, Annex E)
use crate::models::{ECLevel, Version};

/// One group of identically sized EC blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BlockGroup {
    /// Number of blocks in the group
    pub count: usize,
    /// Data plus EC codewords per block
    pub total_codewords: usize,
    /// Data codewords per block
    pub data_codewords: usize,
}

impl BlockGroup {
    /// EC codewords per block
    pub fn ec_codewords(&self) -> usize {
        self.total_codewords - self.data_codewords
    }
}

const NONE: BlockGroup = g(0, 0, 0);

const fn g(count: usize, total_codewords: usize, data_codewords: usize) -> BlockGroup {
    BlockGroup {
        count,
        total_codewords,
        data_codewords,
    }
}

/// EC block structure for one (version, level) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EcBlockLayout {
    groups: [BlockGroup; 2],
}

impl EcBlockLayout {
    /// Both block groups; the second may be empty
    pub fn groups(&self) -> &[BlockGroup; 2] {
        &self.groups
    }

    /// Total number of blocks
    pub fn num_blocks(&self) -> usize {
        self.groups.iter().map(|grp| grp.count).sum()
    }

    /// EC codewords per block (identical for every block)
    pub fn ec_per_block(&self) -> usize {
        self.groups[0].ec_codewords()
    }

    /// Data codewords across all blocks
    pub fn data_codewords(&self) -> usize {
        self.groups
            .iter()
            .map(|grp| grp.count * grp.data_codewords)
            .sum()
    }

    /// Data and EC codewords across all blocks
    pub fn total_codewords(&self) -> usize {
        self.groups
            .iter()
            .map(|grp| grp.count * grp.total_codewords)
            .sum()
    }

    /// Data codeword count of every block, in block order
    pub fn block_sizes(&self) -> impl Iterator<Item = usize> + '_ {
        self.groups
            .iter()
            .flat_map(|grp| std::iter::repeat_n(grp.data_codewords, grp.count))
    }
}

/// Usable data bits for a version and level
pub fn data_bits(version: Version, ec_level: ECLevel) -> usize {
    DATA_BITS[version.number() as usize - 1][ec_level.index()] as usize
}

/// EC block structure for a version and level
pub fn ec_blocks(version: Version, ec_level: ECLevel) -> EcBlockLayout {
    EcBlockLayout {
        groups: EC_BLOCKS[version.number() as usize - 1][ec_level.index()],
    }
}

/// Alignment pattern center coordinates (used for both axes)
pub fn alignment_positions(version: Version) -> &'static [u8] {
    ALIGNMENT_POSITIONS[version.number() as usize - 1]
}

// Index: [version - 1][ec_level]
#[rustfmt::skip]
pub(crate) static DATA_BITS: [[u16; 4]; 40] = [
    [152, 128, 104, 72], // 1
    [272, 224, 176, 128], // 2
    [440, 352, 272, 208], // 3
    [640, 512, 384, 288], // 4
    [864, 688, 496, 368], // 5
    [1088, 864, 608, 480], // 6
    [1248, 992, 704, 528], // 7
    [1552, 1232, 880, 688], // 8
    [1856, 1456, 1056, 800], // 9
    [2192, 1728, 1232, 976], // 10
    [2592, 2032, 1440, 1120], // 11
    [2960, 2320, 1648, 1264], // 12
    [3424, 2672, 1952, 1440], // 13
    [3688, 2920, 2088, 1576], // 14
    [4184, 3320, 2360, 1784], // 15
    [4712, 3624, 2600, 2024], // 16
    [5176, 4056, 2936, 2264], // 17
    [5768, 4504, 3176, 2504], // 18
    [6360, 5016, 3560, 2728], // 19
    [6888, 5352, 3880, 3080], // 20
    [7456, 5712, 4096, 3248], // 21
    [8048, 6256, 4544, 3536], // 22
    [8752, 6880, 4912, 3712], // 23
    [9392, 7312, 5312, 4112], // 24
    [10208, 8000, 5744, 4304], // 25
    [10960, 8496, 6032, 4768], // 26
    [11744, 9024, 6464, 5024], // 27
    [12248, 9544, 6968, 5288], // 28
    [13048, 10136, 7288, 5608], // 29
    [13880, 10984, 7880, 5960], // 30
    [14744, 11640, 8264, 6344], // 31
    [15640, 12328, 8920, 6760], // 32
    [16568, 13048, 9368, 7208], // 33
    [17528, 13800, 9848, 7688], // 34
    [18448, 14496, 10288, 7888], // 35
    [19472, 15312, 10832, 8432], // 36
    [20528, 15936, 11408, 8768], // 37
    [21616, 16816, 12016, 9136], // 38
    [22496, 17728, 12656, 9776], // 39
    [23648, 18672, 13328, 10208], // 40
];

// Index: [version - 1][ec_level][group]
#[rustfmt::skip]
pub(crate) static EC_BLOCKS: [[[BlockGroup; 2]; 4]; 40] = [
    [[g(1, 26, 19), NONE], [g(1, 26, 16), NONE], [g(1, 26, 13), NONE], [g(1, 26, 9), NONE]], // 1
    [[g(1, 44, 34), NONE], [g(1, 44, 28), NONE], [g(1, 44, 22), NONE], [g(1, 44, 16), NONE]], // 2
    [[g(1, 70, 55), NONE], [g(1, 70, 44), NONE], [g(2, 35, 17), NONE], [g(2, 35, 13), NONE]], // 3
    [[g(1, 100, 80), NONE], [g(2, 50, 32), NONE], [g(2, 50, 24), NONE], [g(4, 25, 9), NONE]], // 4
    [[g(1, 134, 108), NONE], [g(2, 67, 43), NONE], [g(2, 33, 15), g(2, 34, 16)], [g(2, 33, 11), g(2, 34, 12)]], // 5
    [[g(2, 86, 68), NONE], [g(4, 43, 27), NONE], [g(4, 43, 19), NONE], [g(4, 43, 15), NONE]], // 6
    [[g(2, 98, 78), NONE], [g(4, 49, 31), NONE], [g(2, 32, 14), g(4, 33, 15)], [g(4, 39, 13), g(1, 40, 14)]], // 7
    [[g(2, 121, 97), NONE], [g(2, 60, 38), g(2, 61, 39)], [g(4, 40, 18), g(2, 41, 19)], [g(4, 40, 14), g(2, 41, 15)]], // 8
    [[g(2, 146, 116), NONE], [g(3, 58, 36), g(2, 59, 37)], [g(4, 36, 16), g(4, 37, 17)], [g(4, 36, 12), g(4, 37, 13)]], // 9
    [[g(2, 86, 68), g(2, 87, 69)], [g(4, 69, 43), g(1, 70, 44)], [g(6, 43, 19), g(2, 44, 20)], [g(6, 43, 15), g(2, 44, 16)]], // 10
    [[g(4, 101, 81), NONE], [g(1, 80, 50), g(4, 81, 51)], [g(4, 50, 22), g(4, 51, 23)], [g(3, 36, 12), g(8, 37, 13)]], // 11
    [[g(2, 116, 92), g(2, 117, 93)], [g(6, 58, 36), g(2, 59, 37)], [g(4, 46, 20), g(6, 47, 21)], [g(7, 42, 14), g(4, 43, 15)]], // 12
    [[g(4, 133, 107), NONE], [g(8, 59, 37), g(1, 60, 38)], [g(8, 44, 20), g(4, 45, 21)], [g(12, 33, 11), g(4, 34, 12)]], // 13
    [[g(3, 145, 115), g(1, 146, 116)], [g(4, 64, 40), g(5, 65, 41)], [g(11, 36, 16), g(5, 37, 17)], [g(11, 36, 12), g(5, 37, 13)]], // 14
    [[g(5, 109, 87), g(1, 110, 88)], [g(5, 65, 41), g(5, 66, 42)], [g(5, 54, 24), g(7, 55, 25)], [g(11, 36, 12), g(7, 37, 13)]], // 15
    [[g(5, 122, 98), g(1, 123, 99)], [g(7, 73, 45), g(3, 74, 46)], [g(15, 43, 19), g(2, 44, 20)], [g(3, 45, 15), g(13, 46, 16)]], // 16
    [[g(1, 135, 107), g(5, 136, 108)], [g(10, 74, 46), g(1, 75, 47)], [g(1, 50, 22), g(15, 51, 23)], [g(2, 42, 14), g(17, 43, 15)]], // 17
    [[g(5, 150, 120), g(1, 151, 121)], [g(9, 69, 43), g(4, 70, 44)], [g(17, 50, 22), g(1, 51, 23)], [g(2, 42, 14), g(19, 43, 15)]], // 18
    [[g(3, 141, 113), g(4, 142, 114)], [g(3, 70, 44), g(11, 71, 45)], [g(17, 47, 21), g(4, 48, 22)], [g(9, 39, 13), g(16, 40, 14)]], // 19
    [[g(3, 135, 107), g(5, 136, 108)], [g(3, 67, 41), g(13, 68, 42)], [g(15, 54, 24), g(5, 55, 25)], [g(15, 43, 15), g(10, 44, 16)]], // 20
    [[g(4, 144, 116), g(4, 145, 117)], [g(17, 68, 42), NONE], [g(17, 50, 22), g(6, 51, 23)], [g(19, 46, 16), g(6, 47, 17)]], // 21
    [[g(2, 139, 111), g(7, 140, 112)], [g(17, 74, 46), NONE], [g(7, 54, 24), g(16, 55, 25)], [g(34, 37, 13), NONE]], // 22
    [[g(4, 151, 121), g(5, 152, 122)], [g(4, 75, 47), g(14, 76, 48)], [g(11, 54, 24), g(14, 55, 25)], [g(16, 45, 15), g(14, 46, 16)]], // 23
    [[g(6, 147, 117), g(4, 148, 118)], [g(6, 73, 45), g(14, 74, 46)], [g(11, 54, 24), g(16, 55, 25)], [g(30, 46, 16), g(2, 47, 17)]], // 24
    [[g(8, 132, 106), g(4, 133, 107)], [g(8, 75, 47), g(13, 76, 48)], [g(7, 54, 24), g(22, 55, 25)], [g(22, 45, 15), g(13, 46, 16)]], // 25
    [[g(10, 142, 114), g(2, 143, 115)], [g(19, 74, 46), g(4, 75, 47)], [g(28, 50, 22), g(6, 51, 23)], [g(33, 46, 16), g(4, 47, 17)]], // 26
    [[g(8, 152, 122), g(4, 153, 123)], [g(22, 73, 45), g(3, 74, 46)], [g(8, 53, 23), g(26, 54, 24)], [g(12, 45, 15), g(28, 46, 16)]], // 27
    [[g(3, 147, 117), g(10, 148, 118)], [g(3, 73, 45), g(23, 74, 46)], [g(4, 54, 24), g(31, 55, 25)], [g(11, 45, 15), g(31, 46, 16)]], // 28
    [[g(7, 146, 116), g(7, 147, 117)], [g(21, 73, 45), g(7, 74, 46)], [g(1, 53, 23), g(37, 54, 24)], [g(19, 45, 15), g(26, 46, 16)]], // 29
    [[g(5, 145, 115), g(10, 146, 116)], [g(19, 75, 47), g(10, 76, 48)], [g(15, 54, 24), g(25, 55, 25)], [g(23, 45, 15), g(25, 46, 16)]], // 30
    [[g(13, 145, 115), g(3, 146, 116)], [g(2, 74, 46), g(29, 75, 47)], [g(42, 54, 24), g(1, 55, 25)], [g(23, 45, 15), g(28, 46, 16)]], // 31
    [[g(17, 145, 115), NONE], [g(10, 74, 46), g(23, 75, 47)], [g(10, 54, 24), g(35, 55, 25)], [g(19, 45, 15), g(35, 46, 16)]], // 32
    [[g(17, 145, 115), g(1, 146, 116)], [g(14, 74, 46), g(21, 75, 47)], [g(29, 54, 24), g(19, 55, 25)], [g(11, 45, 15), g(46, 46, 16)]], // 33
    [[g(13, 145, 115), g(6, 146, 116)], [g(14, 74, 46), g(23, 75, 47)], [g(44, 54, 24), g(7, 55, 25)], [g(59, 46, 16), g(1, 47, 17)]], // 34
    [[g(12, 151, 121), g(7, 152, 122)], [g(12, 75, 47), g(26, 76, 48)], [g(39, 54, 24), g(14, 55, 25)], [g(22, 45, 15), g(41, 46, 16)]], // 35
    [[g(6, 151, 121), g(14, 152, 122)], [g(6, 75, 47), g(34, 76, 48)], [g(46, 54, 24), g(10, 55, 25)], [g(2, 45, 15), g(64, 46, 16)]], // 36
    [[g(17, 152, 122), g(4, 153, 123)], [g(29, 74, 46), g(14, 75, 47)], [g(49, 54, 24), g(10, 55, 25)], [g(24, 45, 15), g(46, 46, 16)]], // 37
    [[g(4, 152, 122), g(18, 153, 123)], [g(13, 74, 46), g(32, 75, 47)], [g(48, 54, 24), g(14, 55, 25)], [g(42, 45, 15), g(32, 46, 16)]], // 38
    [[g(20, 147, 117), g(4, 148, 118)], [g(40, 75, 47), g(7, 76, 48)], [g(43, 54, 24), g(22, 55, 25)], [g(10, 45, 15), g(67, 46, 16)]], // 39
    [[g(19, 148, 118), g(6, 149, 119)], [g(18, 75, 47), g(31, 76, 48)], [g(34, 54, 24), g(34, 55, 25)], [g(20, 45, 15), g(61, 46, 16)]], // 40
];

// Index: [version - 1]
#[rustfmt::skip]
static ALIGNMENT_POSITIONS: [&[u8]; 40] = [
    &[],
    &[6, 18],
    &[6, 22],
    &[6, 26],
    &[6, 30],
    &[6, 34],
    &[6, 22, 38],
    &[6, 24, 42],
    &[6, 26, 46],
    &[6, 28, 50],
    &[6, 30, 54],
    &[6, 32, 58],
    &[6, 34, 62],
    &[6, 26, 46, 66],
    &[6, 26, 48, 70],
    &[6, 26, 50, 74],
    &[6, 30, 54, 78],
    &[6, 30, 56, 82],
    &[6, 30, 58, 86],
    &[6, 34, 62, 90],
    &[6, 28, 50, 72, 94],
    &[6, 26, 50, 74, 98],
    &[6, 30, 54, 78, 102],
    &[6, 28, 54, 80, 106],
    &[6, 32, 58, 84, 110],
    &[6, 30, 58, 86, 114],
    &[6, 34, 62, 90, 118],
    &[6, 26, 50, 74, 98, 122],
    &[6, 30, 54, 78, 102, 126],
    &[6, 26, 52, 78, 104, 130],
    &[6, 30, 56, 82, 108, 134],
    &[6, 34, 60, 86, 112, 138],
    &[6, 30, 58, 86, 114, 142],
    &[6, 34, 62, 90, 118, 146],
    &[6, 30, 54, 78, 102, 126, 150],
    &[6, 24, 50, 76, 102, 128, 154],
    &[6, 28, 54, 80, 106, 132, 158],
    &[6, 32, 58, 84, 110, 136, 162],
    &[6, 26, 54, 82, 110, 138, 166],
    &[6, 30, 58, 86, 114, 142, 170],
];

#[cfg(test)]
mod tests {
    use super::*;

    // Reference tables (Nayuki QR Code generator), index [ec_level][version]
    const ECC_CODEWORDS_PER_BLOCK: [[i8; 41]; 4] = [
        [
            -1, 7, 10, 15, 20, 26, 18, 20, 24, 30, 18, 20, 24, 26, 30, 22, 24, 28, 30, 28, 28, 28,
            28, 30, 30, 26, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
        ],
        [
            -1, 10, 16, 26, 18, 24, 16, 18, 22, 22, 26, 30, 22, 22, 24, 24, 28, 28, 26, 26, 26, 26,
            28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28,
        ],
        [
            -1, 13, 22, 18, 26, 18, 24, 18, 22, 20, 24, 28, 26, 24, 20, 30, 24, 28, 28, 26, 30, 28,
            30, 30, 30, 30, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
        ],
        [
            -1, 17, 28, 22, 16, 22, 28, 26, 26, 24, 28, 24, 28, 22, 24, 24, 30, 28, 28, 26, 28, 30,
            24, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
        ],
    ];

    const NUM_ERROR_CORRECTION_BLOCKS: [[i8; 41]; 4] = [
        [
            -1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 4, 4, 4, 4, 4, 6, 6, 6, 6, 7, 8, 8, 9, 9, 10, 12, 12,
            12, 13, 14, 15, 16, 17, 18, 19, 19, 20, 21, 22, 24, 25,
        ],
        [
            -1, 1, 1, 1, 2, 2, 4, 4, 4, 5, 5, 5, 8, 9, 9, 10, 10, 11, 13, 14, 16, 17, 17, 18, 20,
            21, 23, 25, 26, 28, 29, 31, 33, 35, 37, 38, 40, 43, 45, 47, 49,
        ],
        [
            -1, 1, 1, 2, 2, 4, 4, 6, 6, 8, 8, 8, 10, 12, 16, 12, 17, 16, 18, 21, 20, 23, 23, 25,
            27, 29, 34, 34, 35, 38, 40, 43, 45, 48, 51, 53, 56, 59, 62, 65, 68,
        ],
        [
            -1, 1, 1, 2, 4, 4, 4, 5, 6, 8, 8, 11, 11, 16, 16, 18, 16, 19, 21, 25, 25, 25, 34, 30,
            32, 35, 37, 40, 42, 45, 48, 51, 54, 57, 60, 63, 66, 70, 74, 77, 81,
        ],
    ];

    /// Modules left for codewords after every function pattern is drawn
    fn raw_data_modules(version: u8) -> usize {
        let v = version as usize;
        let mut result = (16 * v + 128) * v + 64;
        if v >= 2 {
            let num_align = v / 7 + 2;
            result -= (25 * num_align - 10) * num_align - 55;
            if v >= 7 {
                result -= 36;
            }
        }
        result
    }

    /// Alignment coordinates from the evenly spaced step rule
    fn computed_alignment_positions(version: u8) -> Vec<usize> {
        if version == 1 {
            return Vec::new();
        }
        let num_align = (version / 7) as usize + 2;
        let size = 17 + 4 * version as usize;
        let step = if version == 32 {
            26
        } else {
            (version as usize * 4 + num_align * 2 + 1) / (num_align * 2 - 2) * 2
        };
        let mut positions = vec![6; num_align];
        for i in 1..num_align {
            positions[i] = size - 7 - (num_align - 1 - i) * step;
        }
        positions
    }

    #[test]
    fn test_version1_low() {
        let layout = ec_blocks(Version::MIN, ECLevel::L);
        assert_eq!(layout.groups()[0].data_codewords, 19);
        assert_eq!(layout.ec_per_block(), 7);
        assert_eq!(data_bits(Version::MIN, ECLevel::L), 152);
    }

    #[test]
    fn test_blocks_partition_capacity() {
        for version in Version::all() {
            let raw = raw_data_modules(version.number());
            for level in ECLevel::ALL {
                let layout = ec_blocks(version, level);
                let [first, second] = *layout.groups();
                assert_eq!(layout.total_codewords(), raw / 8, "v{version} {level:?}");
                assert_eq!(
                    layout.data_codewords() * 8,
                    data_bits(version, level),
                    "v{version} {level:?}"
                );
                if second.count > 0 {
                    assert_eq!(second.total_codewords, first.total_codewords + 1);
                    assert_eq!(second.data_codewords, first.data_codewords + 1);
                }
                assert_eq!(layout.block_sizes().count(), layout.num_blocks());
            }
        }
    }

    #[test]
    fn test_blocks_match_reference_tables() {
        for version in Version::all() {
            let v = version.number() as usize;
            for level in ECLevel::ALL {
                let layout = ec_blocks(version, level);
                let l = level.index();
                assert_eq!(
                    layout.num_blocks(),
                    NUM_ERROR_CORRECTION_BLOCKS[l][v] as usize,
                    "v{v} {level:?}"
                );
                assert_eq!(
                    layout.ec_per_block(),
                    ECC_CODEWORDS_PER_BLOCK[l][v] as usize,
                    "v{v} {level:?}"
                );
            }
        }
    }

    #[test]
    fn test_version30_high() {
        let v30 = Version::new(30).unwrap();
        let layout = ec_blocks(v30, ECLevel::H);
        assert_eq!(layout.num_blocks(), 48);
        assert_eq!(layout.num_blocks() * layout.ec_per_block(), 1440);
    }

    #[test]
    fn test_alignment_positions() {
        for version in Version::all() {
            let table: Vec<usize> = alignment_positions(version)
                .iter()
                .map(|&p| p as usize)
                .collect();
            assert_eq!(
                table,
                computed_alignment_positions(version.number()),
                "v{version}"
            );
            if let Some(&last) = table.last() {
                assert_eq!(last, version.size() - 7);
            }
        }
    }
}
