// Regional indicator symbol letter A. Flags are pairs of these symbols, one
// per letter of the ISO 3166-1 alpha-2 code.
const REGIONAL_INDICATOR_A: u32 = 0x1F1E6;

pub struct RegionCode {
}

impl RegionCode {
    /// Returns true for two uppercase ASCII letters, the only shape of
    /// region code the country table accepts.
    pub fn is_valid(region_code: &str) -> bool {
        region_code.len() == 2 && region_code.bytes().all(|b| b.is_ascii_uppercase())
    }

    /// Returns the flag glyph of a region, e.g. `🇬🇧` for `GB`.
    pub fn flag(region_code: &str) -> Option<String> {
        if !Self::is_valid(region_code) {
            return None;
        }
        region_code
            .bytes()
            .map(|b| char::from_u32(REGIONAL_INDICATOR_A + u32::from(b - b'A')))
            .collect()
    }
}
