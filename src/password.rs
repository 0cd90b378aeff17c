use crate::charset::{ CharacterClass, parse_flag };
use crate::errors::SpecError;

use std::fmt;

use rand::Rng;

use serde::Serialize;

/// Longest password a spec accepts.
pub const MAX_LENGTH: usize = 4096;

/// Validated generation parameters. `classes` is never empty and keeps the
/// order of [`CharacterClass::ALL`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSpec {
    length: usize,
    classes: Vec<CharacterClass>,
}

impl GenerationSpec {
    pub fn new(length: usize, classes: &[CharacterClass]) -> Result<Self, SpecError> {
        if length > MAX_LENGTH {
            return Err(SpecError::InvalidLength(length.to_string()));
        }

        let classes: Vec<CharacterClass> = CharacterClass::ALL
            .into_iter()
            .filter(|class| classes.contains(class))
            .collect();

        if classes.is_empty() {
            return Err(SpecError::InvalidClassSelection);
        }

        Ok(Self { length, classes })
    }

    /// Builds a spec from unparsed input: a length and one y/n flag per class,
    /// in the order of [`CharacterClass::ALL`].
    pub fn from_raw(length: &str, flags: [&str; 4]) -> Result<Self, SpecError> {
        let length = parse_length(length)?;

        let mut enabled = Vec::with_capacity(flags.len());
        for (class, flag) in CharacterClass::ALL.into_iter().zip(flags) {
            match parse_flag(flag) {
                Some(true) => enabled.push(class),
                Some(false) => (),
                None => return Err(SpecError::InvalidClassSelection),
            }
        }

        Self::new(length, &enabled)
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn classes(&self) -> &[CharacterClass] {
        &self.classes
    }

    /// Builds one password from this spec.
    pub fn generate_one<R: Rng + ?Sized>(&self, rng: &mut R) -> Password {
        let password = (0..self.length)
            .map(|_| {
                // Direct uniform draw over the enabled classes. Same
                // distribution as re-drawing over all four until an enabled
                // one comes up, without the unbounded retry.
                let class = self.classes[rng.random_range(0..self.classes.len())];
                class.sample(rng)
            })
            .collect();

        Password(password)
    }
}

pub fn parse_length(input: &str) -> Result<usize, SpecError> {
    let trimmed = input.trim();

    match trimmed.parse::<usize>() {
        Ok(length) if length <= MAX_LENGTH => Ok(length),
        _ => Err(SpecError::InvalidLength(trimmed.to_string())),
    }
}

/// Returns exactly `count` passwords. Never fails for a validated spec.
pub fn generate<R: Rng + ?Sized>(spec: &GenerationSpec, count: usize, rng: &mut R) -> Vec<Password> {
    let classes: Vec<&str> = spec.classes().iter().map(|class| class.label()).collect();
    log::debug!(
        "generating {} password(s) of length {} from {}",
        count,
        spec.length(),
        classes.join(", ")
    );

    (0..count).map(|_| spec.generate_one(rng)).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Password(String);

impl Password {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use proptest::sample::subsequence;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn rejects_non_numeric_length() {
        let result = GenerationSpec::from_raw("abc", ["y", "y", "y", "y"]);
        assert_eq!(result, Err(SpecError::InvalidLength("abc".to_string())));
    }

    #[test]
    fn rejects_negative_length() {
        let result = GenerationSpec::from_raw("-3", ["y", "y", "y", "y"]);
        assert!(matches!(result, Err(SpecError::InvalidLength(_))));
    }

    #[test]
    fn rejects_oversized_length() {
        let result = GenerationSpec::from_raw("18446744073709551615", ["y", "y", "y", "y"]);
        assert!(matches!(result, Err(SpecError::InvalidLength(_))));

        let result = GenerationSpec::new(usize::MAX, &[CharacterClass::Digits]);
        assert_eq!(result, Err(SpecError::InvalidLength(usize::MAX.to_string())));

        assert!(parse_length(&(MAX_LENGTH + 1).to_string()).is_err());
    }

    #[test]
    fn accepts_max_length() {
        let spec = GenerationSpec::new(MAX_LENGTH, &[CharacterClass::Symbols]).unwrap();
        let mut rng = StdRng::seed_from_u64(8);
        let passwords = generate(&spec, 1, &mut rng);

        assert_eq!(passwords[0].as_str().len(), MAX_LENGTH);
        assert_eq!(parse_length(&MAX_LENGTH.to_string()), Ok(MAX_LENGTH));
    }

    #[test]
    fn rejects_all_classes_disabled() {
        let result = GenerationSpec::from_raw("8", ["n", "n", "N", "n"]);
        assert_eq!(result, Err(SpecError::InvalidClassSelection));

        assert_eq!(GenerationSpec::new(8, &[]), Err(SpecError::InvalidClassSelection));
    }

    #[test]
    fn rejects_unparseable_flag() {
        let result = GenerationSpec::from_raw("8", ["y", "maybe", "y", "y"]);
        assert_eq!(result, Err(SpecError::InvalidClassSelection));
    }

    #[test]
    fn from_raw_maps_flags_in_order() {
        let spec = GenerationSpec::from_raw(" 16\n", ["n", "y", "n", "Y"]).unwrap();

        assert_eq!(spec.length(), 16);
        assert_eq!(spec.classes(), &[CharacterClass::Lowercase, CharacterClass::Symbols]);
    }

    #[test]
    fn new_dedups_and_orders_classes() {
        let spec = GenerationSpec::new(
            4,
            &[CharacterClass::Symbols, CharacterClass::Uppercase, CharacterClass::Symbols],
        )
        .unwrap();

        assert_eq!(spec.classes(), &[CharacterClass::Uppercase, CharacterClass::Symbols]);
    }

    #[test]
    fn zero_count_is_empty() {
        let spec = GenerationSpec::new(10, &CharacterClass::ALL).unwrap();
        let mut rng = StdRng::seed_from_u64(0);

        assert!(generate(&spec, 0, &mut rng).is_empty());
    }

    #[test]
    fn zero_length_gives_empty_passwords() {
        let spec = GenerationSpec::new(0, &[CharacterClass::Digits]).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let passwords = generate(&spec, 3, &mut rng);

        assert_eq!(passwords.len(), 3);
        assert!(passwords.iter().all(|p| p.as_str().is_empty()));
    }

    #[test]
    fn lowercase_only() {
        let spec = GenerationSpec::from_raw("10", ["n", "y", "n", "n"]).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let passwords = generate(&spec, 1, &mut rng);

        assert_eq!(passwords.len(), 1);
        let password = passwords[0].as_str();
        assert_eq!(password.len(), 10);
        assert!(password.bytes().all(|b| b.is_ascii_lowercase()), "{password}");
    }

    #[test]
    fn digits_only() {
        let spec = GenerationSpec::new(8, &[CharacterClass::Digits]).unwrap();
        let mut rng = StdRng::seed_from_u64(3);

        for password in generate(&spec, 50, &mut rng) {
            assert_eq!(password.as_str().len(), 8);
            assert!(password.as_str().bytes().all(|b| b.is_ascii_digit()), "{password}");
        }
    }

    #[test]
    fn classes_are_picked_evenly() {
        let spec = GenerationSpec::new(100, &CharacterClass::ALL).unwrap();
        let mut rng = StdRng::seed_from_u64(1234);

        let mut counts = [0usize; 4];
        for password in generate(&spec, 400, &mut rng) {
            for c in password.as_str().chars() {
                let idx = CharacterClass::ALL
                    .iter()
                    .position(|class| class.contains(c))
                    .unwrap();
                counts[idx] += 1;
            }
        }

        // 40k draws, 10k expected per class, sd ~87.
        for count in counts {
            assert!((9_500..=10_500).contains(&count), "{counts:?}");
        }
    }

    #[test]
    fn password_serializes_as_plain_string() {
        let password = Password("a:Z9".to_string());
        assert_eq!(serde_json::to_string(&password).unwrap(), "\"a:Z9\"");
        assert_eq!(password.to_string(), "a:Z9");
    }

    proptest! {
        #[test]
        fn count_length_and_ranges_hold(
            length in 0usize..64,
            count in 0usize..16,
            classes in subsequence(CharacterClass::ALL.to_vec(), 1..=4),
            seed in any::<u64>(),
        ) {
            let spec = GenerationSpec::new(length, &classes).unwrap();
            let mut rng = StdRng::seed_from_u64(seed);
            let passwords = generate(&spec, count, &mut rng);

            prop_assert_eq!(passwords.len(), count);
            for password in &passwords {
                prop_assert_eq!(password.as_str().chars().count(), length);
                for c in password.as_str().chars() {
                    prop_assert!(classes.iter().any(|class| class.contains(c)));
                }
            }
        }
    }
}
