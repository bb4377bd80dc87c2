#[cfg(test)]
mod tests {
    extern crate std;
    use crate::{ContractError, ErrorCategory, ErrorExt};
    use std::vec::Vec;

    fn all_variants() -> Vec<ContractError> {
        std::vec![
            ContractError::NotInitialized,
            ContractError::AlreadyInitialized,
            ContractError::NotAdmin,
            ContractError::NotImplementation,
            ContractError::NotTokenOwner,
            ContractError::NotApproved,
            ContractError::InvalidAmount,
            ContractError::MinStakeDurationNotMet,
            ContractError::AlreadyStaked,
            ContractError::StakeNotFound,
            ContractError::NotUnlocked,
            ContractError::InvalidDuration,
            ContractError::NftNotFound,
            ContractError::Overflow,
        ]
    }

    // codes

    #[test]
    fn test_initialization_codes() {
        assert_eq!(ContractError::NotInitialized as u32, 1);
        assert_eq!(ContractError::AlreadyInitialized as u32, 2);
    }

    #[test]
    fn test_authorization_codes() {
        assert_eq!(ContractError::NotAdmin as u32, 100);
        assert_eq!(ContractError::NotImplementation as u32, 101);
        assert_eq!(ContractError::NotTokenOwner as u32, 102);
        assert_eq!(ContractError::NotApproved as u32, 103);
    }

    #[test]
    fn test_codes_staking() {
        assert_eq!(ContractError::InvalidAmount as u32, 200);
        assert_eq!(ContractError::MinStakeDurationNotMet as u32, 201);
        assert_eq!(ContractError::AlreadyStaked as u32, 202);
        assert_eq!(ContractError::StakeNotFound as u32, 203);
        assert_eq!(ContractError::NotUnlocked as u32, 204);
        assert_eq!(ContractError::InvalidDuration as u32, 205);
    }

    #[test]
    fn test_codes_custody_and_arithmetic() {
        assert_eq!(ContractError::NftNotFound as u32, 300);
        assert_eq!(ContractError::Overflow as u32, 700);
    }

    // categories

    #[test]
    fn test_category_ranges_match_codes() {
        for e in all_variants() {
            let expected = match e as u32 {
                1..=99 => ErrorCategory::Initialization,
                100..=199 => ErrorCategory::Authorization,
                200..=299 => ErrorCategory::Staking,
                300..=399 => ErrorCategory::Custody,
                700..=799 => ErrorCategory::Arithmetic,
                other => panic!("code {} outside every category block", other),
            };
            assert_eq!(e.category(), expected, "{:?} is in the wrong category", e);
        }
    }

    #[test]
    fn test_staking_reverts_are_staking_category() {
        assert_eq!(
            ContractError::MinStakeDurationNotMet.category(),
            ErrorCategory::Staking
        );
        assert_eq!(ContractError::NotUnlocked.category(), ErrorCategory::Staking);
    }

    // descriptions

    #[test]
    fn test_every_variant_is_described() {
        assert!(all_variants()
            .iter()
            .all(|e| !e.description().is_empty()));
    }

    #[test]
    fn test_no_two_variants_share_a_description() {
        let variants = all_variants();
        for (idx, a) in variants.iter().enumerate() {
            for b in &variants[idx + 1..] {
                assert_ne!(a.description(), b.description(), "{:?} / {:?}", a, b);
            }
        }
    }

    #[test]
    fn test_variant_list_is_complete() {
        // Bump together with all_variants() when a code is added.
        assert_eq!(all_variants().len(), 14);
    }
}
