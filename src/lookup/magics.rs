use super::{attacks, random::Random};
use crate::types::{Bitboard, Square};

/// The multiply-and-shift hash of a single slider square.
struct MagicEntry {
    mask: u64,
    magic: u64,
}

/// Magic-indexed attack sets for one slider family, all squares sharing
/// a fixed index width: every square owns a `1 << bits` slice of the
/// attack table regardless of how many relevant occupancy bits it has.
pub struct SliderAttacks {
    magics: Vec<MagicEntry>,
    table: Vec<Bitboard>,
    bits: u32,
}

impl SliderAttacks {
    /// Discovers a magic multiplier for every square and fills the
    /// attack table. The discovery loop doubles as verification: a
    /// multiplier is only accepted once every relevant occupancy subset
    /// maps to a slot holding its exact attack set.
    pub fn build(bits: u32, directions: &[(i8, i8)], rng: &mut Random) -> Self {
        let size = 1usize << bits;

        let mut magics = Vec::with_capacity(Square::NUM);
        let mut table = vec![Bitboard::EMPTY; Square::NUM * size];

        let mut slots = vec![0u64; size];
        let mut epochs = vec![0u32; size];
        let mut attempt = 0u32;

        for square in 0..Square::NUM as u8 {
            let mask = attacks::relevant_occupancy(square, directions);

            // Enumerate every subset of the mask along with its attack set.
            let mut subsets = Vec::with_capacity(size);
            let mut subset = 0u64;
            loop {
                subsets.push((subset, attacks::sliding_attacks(square, subset, directions)));

                subset = subset.wrapping_sub(mask) & mask;
                if subset == 0 {
                    break;
                }
            }

            let magic = loop {
                attempt += 1;
                assert!(attempt < 100_000_000, "no magic found for square {square}");

                let magic = rng.sparse_u64();
                if (mask.wrapping_mul(magic) >> 56).count_ones() < 6 {
                    continue;
                }

                let mut usable = true;
                for &(occupancies, attack_set) in &subsets {
                    let index = (occupancies.wrapping_mul(magic) >> (64 - bits)) as usize;

                    if epochs[index] != attempt {
                        epochs[index] = attempt;
                        slots[index] = attack_set;
                    } else if slots[index] != attack_set {
                        usable = false;
                        break;
                    }
                }

                if usable {
                    break magic;
                }
            };

            let offset = (square as usize) << bits;
            for &(occupancies, attack_set) in &subsets {
                let index = (occupancies.wrapping_mul(magic) >> (64 - bits)) as usize;
                table[offset + index] = Bitboard(attack_set);
            }

            magics.push(MagicEntry { mask, magic });
        }

        Self { magics, table, bits }
    }

    pub fn attacks(&self, square: Square, occupancies: Bitboard) -> Bitboard {
        let entry = &self.magics[square as usize];
        let index = ((occupancies.0 & entry.mask).wrapping_mul(entry.magic) >> (64 - self.bits)) as usize;

        self.table[((square as usize) << self.bits) + index]
    }
}
