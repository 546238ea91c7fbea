use chrono::Utc;
use rand::Rng;

const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const SUFFIX_LEN: u32 = 10;

fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(ALPHABET[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    String::from_utf8(digits).unwrap_or_default()
}

/// Opaque entity id: base-36 millisecond timestamp followed by a random
/// base-36 suffix. Unlikely to collide, but not guaranteed unique.
pub fn generate_id() -> String {
    let millis = Utc::now().timestamp_millis().max(0) as u64;
    let suffix = rand::thread_rng().gen_range(0..36u64.pow(SUFFIX_LEN));
    format!(
        "{}{:0>width$}",
        to_base36(millis),
        to_base36(suffix),
        width = SUFFIX_LEN as usize
    )
}

/// Generates ids until one is not taken in the target collection.
pub fn generate_unique_id<'a, I>(existing: I) -> String
where
    I: IntoIterator<Item = &'a str> + Clone,
{
    loop {
        let id = generate_id();
        if !existing.clone().into_iter().any(|taken| taken == id) {
            return id;
        }
    }
}
