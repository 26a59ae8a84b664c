/// Defect in a catalog or alias table, detected when the knowledge base is
/// assembled. Resolution itself never fails.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum IntegrityError {
    #[error("catalog has no \"default\" record")]
    MissingDefault,
    #[error("duplicate record id \"{0}\"")]
    DuplicateID(String),
    #[error("record id \"{0}\" is not in canonical form")]
    NonCanonicalID(String),
    #[error("alias \"{keyword}\" refers to unknown record \"{target}\"")]
    DanglingAlias { keyword: String, target: String },
    #[error("alias \"{0}\" must not refer to the default record")]
    AliasToDefault(String),
    #[error("alias keyword \"{0}\" must be non-blank and lower-case")]
    InvalidKeyword(String),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(IntegrityError::MissingDefault, "catalog has no \"default\" record")]
    #[case(
        IntegrityError::DuplicateID("quad-sets".to_string()),
        "duplicate record id \"quad-sets\""
    )]
    #[case(
        IntegrityError::NonCanonicalID("Quad Sets".to_string()),
        "record id \"Quad Sets\" is not in canonical form"
    )]
    #[case(
        IntegrityError::DanglingAlias {
            keyword: "squat".to_string(),
            target: "squats".to_string()
        },
        "alias \"squat\" refers to unknown record \"squats\""
    )]
    #[case(
        IntegrityError::AliasToDefault("exercise".to_string()),
        "alias \"exercise\" must not refer to the default record"
    )]
    #[case(
        IntegrityError::InvalidKeyword("SLR".to_string()),
        "alias keyword \"SLR\" must be non-blank and lower-case"
    )]
    fn test_integrity_error_display(#[case] error: IntegrityError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }
}
