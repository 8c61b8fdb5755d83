pub struct RegionCode {}

#[allow(unused)]
impl RegionCode {
    pub fn ca() -> &'static str {
        "CA"
    }

    pub fn de() -> &'static str {
        "DE"
    }

    pub fn gb() -> &'static str {
        "GB"
    }

    pub fn jm() -> &'static str {
        "JM"
    }

    pub fn lb() -> &'static str {
        "LB"
    }

    pub fn pk() -> &'static str {
        "PK"
    }

    pub fn ru() -> &'static str {
        "RU"
    }

    pub fn us() -> &'static str {
        "US"
    }

    pub fn yt() -> &'static str {
        "YT"
    }

    /// Not a region of the table.
    pub fn zz() -> &'static str {
        "ZZ"
    }
}
