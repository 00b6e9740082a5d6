use rand::Rng;

/// Characters drawn for confirmation IDs. No ambiguous glyphs
/// (I, O, 0, 1).
pub const ALPHABET: &str = "ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

const CODE_LEN: usize = 6;

/// Generate a confirmation ID: `ML-` plus six characters from
/// [`ALPHABET`], e.g. `ML-7KQ2VN`.
pub fn confirmation_id(rng: &mut impl Rng) -> String {
    let chars = ALPHABET.as_bytes();
    let mut id = String::from("ML-");
    for _ in 0..CODE_LEN {
        id.push(chars[rng.gen_range(0..chars.len())] as char);
    }
    id
}
