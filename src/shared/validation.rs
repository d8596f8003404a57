use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for tax record identifiers.
    /// - Valid: "PJ001", "PJ042", "PJ999"
    /// - Invalid: "pj001", "PJ1", "PJ0001", "XX001"
    pub static ref PAJAK_ID_REGEX: Regex = Regex::new(r"^PJ\d{3}$").unwrap();

    /// Regex for deposit dates in the registry's DD-MM-YYYY wire format.
    /// - Valid: "30-11-2023", "01-01-2024"
    /// - Invalid: "2023-11-30", "30/11/2023", "31-13-2023"
    pub static ref TANGGAL_REGEX: Regex =
        Regex::new(r"^(0[1-9]|[12]\d|3[01])-(0[1-9]|1[0-2])-\d{4}$").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pajak_id_regex_valid() {
        assert!(PAJAK_ID_REGEX.is_match("PJ001"));
        assert!(PAJAK_ID_REGEX.is_match("PJ042"));
        assert!(PAJAK_ID_REGEX.is_match("PJ999"));
    }

    #[test]
    fn test_pajak_id_regex_invalid() {
        assert!(!PAJAK_ID_REGEX.is_match("pj001")); // lowercase
        assert!(!PAJAK_ID_REGEX.is_match("PJ1")); // too short
        assert!(!PAJAK_ID_REGEX.is_match("PJ0001")); // too long
        assert!(!PAJAK_ID_REGEX.is_match("XX001")); // wrong prefix
        assert!(!PAJAK_ID_REGEX.is_match("")); // empty
        assert!(!PAJAK_ID_REGEX.is_match(" PJ001")); // leading space
    }

    #[test]
    fn test_tanggal_regex_valid() {
        assert!(TANGGAL_REGEX.is_match("30-11-2023"));
        assert!(TANGGAL_REGEX.is_match("01-01-2024"));
        assert!(TANGGAL_REGEX.is_match("31-12-1999"));
    }

    #[test]
    fn test_tanggal_regex_invalid() {
        assert!(!TANGGAL_REGEX.is_match("2023-11-30")); // ISO order
        assert!(!TANGGAL_REGEX.is_match("30/11/2023")); // slashes
        assert!(!TANGGAL_REGEX.is_match("31-13-2023")); // month 13
        assert!(!TANGGAL_REGEX.is_match("00-11-2023")); // day zero
        assert!(!TANGGAL_REGEX.is_match("3-1-2023")); // unpadded
    }
}
