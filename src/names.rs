use crate::error::StatewiseError;

// Display names keep the spellings the published CSVs have always used.
pub const STATE_NAMES: [(&str, &str); 37] = [
    ("an", "ANDAMAN AND NICOBAR"),
    ("ap", "ANDHRA PRADESH"),
    ("ar", "ARUNACHAL PRADESH"),
    ("as", "ASSAM"),
    ("br", "BIHAR"),
    ("ch", "CHANDIGARH"),
    ("ct", "CHATTISGARH"),
    ("dd", "DAMAN AND DEU"),
    ("dl", "DELHI"),
    ("dn", "DADRA AND NAGAR HAVELI"),
    ("ga", "GOA"),
    ("gj", "GUJRAT"),
    ("hp", "HIMACHAL PRADESH"),
    ("hr", "HARAYANA"),
    ("jh", "JHARKHAND"),
    ("jk", "JAMMU AND KASHMIR"),
    ("ka", "KARNATAKA"),
    ("kl", "KERALA"),
    ("la", "LADAKH"),
    ("ld", "LAKSHADWEEP"),
    ("mh", "MAHARASHTRA"),
    ("ml", "MEGHALAYA"),
    ("mn", "MANIPUR"),
    ("mp", "MADHYA PRADESH"),
    ("mz", "MIZORAM"),
    ("nl", "NAGALAND"),
    ("or", "ORISSA"),
    ("pb", "PUNJAB"),
    ("py", "PUDUCHERRY"),
    ("rj", "RAJASTHAN"),
    ("sk", "SIKKIM"),
    ("tg", "TELENGANA"),
    ("tn", "TAMILNADU"),
    ("tr", "TRIPURA"),
    ("up", "UTTAR PRADESH"),
    ("ut", "UTTARAKHAND"),
    ("wb", "WEST BENGAL"),
];

pub fn display_name(code: &str) -> Option<&'static str> {
    STATE_NAMES
        .iter()
        .find(|(key, _)| *key == code)
        .map(|(_, name)| *name)
}

pub fn validate_codes<S: AsRef<str>>(codes: &[S]) -> Result<(), StatewiseError> {
    let unknown: Vec<&str> = codes
        .iter()
        .map(AsRef::as_ref)
        .filter(|code| display_name(code).is_none())
        .collect();
    if unknown.is_empty() {
        return Ok(());
    }
    Err(StatewiseError::UnknownStateColumn(unknown.join(", ")))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::error::StatewiseError;

    #[test]
    fn table_has_unique_codes() {
        for (index, (code, _)) in STATE_NAMES.iter().enumerate() {
            let duplicate = STATE_NAMES
                .iter()
                .skip(index + 1)
                .any(|(other, _)| other == code);
            assert!(!duplicate, "duplicate code {code}");
        }
    }

    #[test]
    fn lookup_known_codes() {
        assert_eq!(display_name("mh"), Some("MAHARASHTRA"));
        assert_eq!(display_name("dl"), Some("DELHI"));
        assert_eq!(display_name("tt"), None);
    }

    #[test]
    fn validate_rejects_unknown_columns() {
        let err = validate_codes(&["mh", "tt", "un"]).unwrap_err();
        assert_matches!(err, StatewiseError::UnknownStateColumn(codes) if codes == "tt, un");

        validate_codes(&["mh", "dl"]).unwrap();
    }
}
