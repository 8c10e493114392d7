//! Functions for generating attack masks on the fly. Directions are
//! calculated by left or right shift with an appropriate shift mask to
//! avoid wrapping the A/H files. In the case of a 1st/8th rank wrapping,
//! the bit falls off the end of the integer, so no mask is required.

const A_FILE: u64 = 0x101010101010101;
const B_FILE: u64 = A_FILE << 1;
const H_FILE: u64 = A_FILE << 7;
const G_FILE: u64 = A_FILE << 6;

const AB_FILE: u64 = A_FILE | B_FILE;
const GH_FILE: u64 = G_FILE | H_FILE;

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub fn king_attacks(square: u8) -> u64 {
    let bitboard = 1u64 << square;

    (bitboard >> 8 | bitboard << 8)
        | (bitboard & !A_FILE) >> 9
        | (bitboard & !A_FILE) >> 1
        | (bitboard & !A_FILE) << 7
        | (bitboard & !H_FILE) >> 7
        | (bitboard & !H_FILE) << 1
        | (bitboard & !H_FILE) << 9
}

pub fn knight_attacks(square: u8) -> u64 {
    let bitboard = 1u64 << square;

    (bitboard & !A_FILE) >> 17
        | (bitboard & !A_FILE) << 15
        | (bitboard & !H_FILE) >> 15
        | (bitboard & !H_FILE) << 17
        | (bitboard & !AB_FILE) >> 10
        | (bitboard & !AB_FILE) << 6
        | (bitboard & !GH_FILE) >> 6
        | (bitboard & !GH_FILE) << 10
}

/// Computes slider attacks by walking each ray until it hits a blocker,
/// which is included in the attack set.
pub fn sliding_attacks(square: u8, occupancies: u64, directions: &[(i8, i8)]) -> u64 {
    directions
        .iter()
        .fold(0, |output, &direction| output | ray_attacks(square, occupancies, direction))
}

fn ray_attacks(square: u8, occupancies: u64, direction: (i8, i8)) -> u64 {
    let mut output = 0;

    let mut rank = (square / 8) as i8 + direction.0;
    let mut file = (square % 8) as i8 + direction.1;

    while (0..8).contains(&rank) && (0..8).contains(&file) {
        let bitboard = 1 << (rank * 8 + file);
        output |= bitboard;

        if (bitboard & occupancies) != 0 {
            break;
        }

        rank += direction.0;
        file += direction.1;
    }

    output
}

/// Computes the relevant occupancy mask of a slider square: the squares
/// whose occupancy can change the attack set, which excludes the last
/// square of every ray.
pub fn relevant_occupancy(square: u8, directions: &[(i8, i8)]) -> u64 {
    let mut output = 0;

    for &(dr, df) in directions {
        let mut rank = (square / 8) as i8 + dr;
        let mut file = (square % 8) as i8 + df;

        while (0..8).contains(&(rank + dr)) && (0..8).contains(&(file + df)) {
            output |= 1 << (rank * 8 + file);
            rank += dr;
            file += df;
        }
    }

    output
}
