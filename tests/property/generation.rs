//! Property tests for batch generation.

use super::common::{ban_entire_pool, seeded_generator};
use proptest::prelude::*;
use safecode::{CharacterPool, GenerateError, GenerationRequest, Validator, CODE_LENGTH};

/// Non-empty pools of distinct-ish characters.
fn pool_strategy() -> impl Strategy<Value = CharacterPool> {
    prop::string::string_regex("[A-Z2-9]{1,12}")
        .unwrap()
        .prop_map(|s| CharacterPool::new(&s).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: every batch has exactly the requested size and every code is valid.
    #[test]
    fn prop_batch_size_and_validity(seed in any::<u64>(), count in 1usize..40) {
        let mut generator = seeded_generator(Validator::with_default_list(), seed);
        let codes = generator.generate(count).unwrap();

        prop_assert_eq!(codes.len(), count);
        for code in &codes {
            prop_assert_eq!(code.as_str().chars().count(), CODE_LENGTH);
            prop_assert!(generator.validator().validate(code.as_str()));
        }
    }

    /// Property: codes only contain pool characters.
    #[test]
    fn prop_codes_drawn_from_pool(seed in any::<u64>(), pool in pool_strategy()) {
        let mut generator = seeded_generator(Validator::default(), seed).with_pool(pool.clone());
        for code in generator.generate(8).unwrap() {
            prop_assert!(code.as_str().chars().all(|c| pool.contains(c)));
        }
    }

    /// Property: non-positive requests behave like a request for one.
    #[test]
    fn prop_clamped_requests(seed in any::<u64>(), requested in -1000i64..=0) {
        let mut generator = seeded_generator(Validator::with_default_list(), seed);
        let request = GenerationRequest::from_requested(requested);
        prop_assert_eq!(generator.generate_request(request).unwrap().len(), 1);
    }

    /// Property: an all-banning list never yields a partial batch.
    #[test]
    fn prop_total_ban_is_all_or_nothing(seed in any::<u64>(), pool in pool_strategy(), count in 1usize..5) {
        let mut generator = seeded_generator(ban_entire_pool(&pool), seed).with_pool(pool);
        let is_exhausted = matches!(
            generator.generate(count),
            Err(GenerateError::AttemptsExhausted { .. })
        );
        prop_assert!(is_exhausted);
    }
}
