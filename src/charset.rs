use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Digits,
    Symbols,
}

impl CharacterClass {
    /// Fixed class order. Raw flags and config entries are read in this order.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Digits,
        CharacterClass::Symbols,
    ];

    /// Inclusive ASCII code point range of the class.
    ///
    /// Symbols only cover the punctuation between the digits and the
    /// uppercase letters (`:;<=>?@`).
    pub const fn code_points(self) -> (u8, u8) {
        match self {
            CharacterClass::Uppercase => (b'A', b'Z'),
            CharacterClass::Lowercase => (b'a', b'z'),
            CharacterClass::Digits => (b'0', b'9'),
            CharacterClass::Symbols => (b':', b'@'),
        }
    }

    pub fn contains(self, c: char) -> bool {
        let (low, high) = self.code_points();
        c.is_ascii() && (low..=high).contains(&(c as u8))
    }

    pub fn sample<R: Rng + ?Sized>(self, rng: &mut R) -> char {
        let (low, high) = self.code_points();

        rng.random_range(low..=high) as char
    }

    pub fn label(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => "uppercase",
            CharacterClass::Lowercase => "lowercase",
            CharacterClass::Digits => "digits",
            CharacterClass::Symbols => "symbols",
        }
    }
}

/// Parses a y/n answer. Anything other than `y`, `Y`, `n` or `N` is `None`.
pub fn parse_flag(input: &str) -> Option<bool> {
    match input.trim() {
        "y" | "Y" => Some(true),
        "n" | "N" => Some(false),
        _ => None,
    }
}
