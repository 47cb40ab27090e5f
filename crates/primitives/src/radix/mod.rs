//! Positional numerals over fixed digit alphabets.
//!
//! Preset tokens write colour set ids in ordinary lowercase base 36 and
//! preset indices in a letters-only base 26. The two alphabets are disjoint,
//! which is what lets a token omit separators between fields.


/// A digit alphabet; the radix is the number of digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alphabet {
	digits: &'static [u8],
}

/// Base 36, `0-9a-z`. Used for colour set ids.
pub const COLOUR_SET_DIGITS: Alphabet = Alphabet::new(b"0123456789abcdefghijklmnopqrstuvwxyz");

/// Base 26 written with upper-case letters only.
///
/// Digit values 0-9 are `Q`-`Z` and values 10-25 are `A`-`P`: a plain radix-26
/// rendering (`0-9a-p`), upper-cased, with `0→Q … 9→Z` substituted.
pub const PRESET_INDEX_DIGITS: Alphabet = Alphabet::new(b"QRSTUVWXYZABCDEFGHIJKLMNOP");

impl Alphabet {
	/// Creates an alphabet from its digits, lowest value first.
	pub const fn new(digits: &'static [u8]) -> Self {
		assert!(digits.len() >= 2, "an alphabet needs at least two digits");
		Self { digits }
	}

	#[inline]
	pub fn radix(&self) -> u32 {
		self.digits.len() as u32
	}

	/// Returns true if `byte` is one of this alphabet's digits.
	#[inline]
	pub fn contains(&self, byte: u8) -> bool {
		self.digits.contains(&byte)
	}

	/// Value of a single digit.
	#[inline]
	pub fn digit_value(&self, byte: u8) -> Option<u32> {
		self.digits.iter().position(|&d| d == byte).map(|v| v as u32)
	}

	/// Renders `value` without padding or sign. Zero renders as the zero digit.
	pub fn render(&self, mut value: u32) -> String {
		let radix = self.radix();
		let mut out = Vec::new();
		loop {
			out.push(self.digits[(value % radix) as usize]);
			value /= radix;
			if value == 0 {
				break;
			}
		}
		out.reverse();
		// Digits are ASCII by construction.
		out.into_iter().map(char::from).collect()
	}

	/// Parses a numeral written in this alphabet.
	///
	/// Returns `None` for empty input, foreign digits or values above `u32::MAX`.
	pub fn parse(&self, text: &str) -> Option<u32> {
		if text.is_empty() {
			return None;
		}
		let radix = self.radix();
		text.bytes().try_fold(0u32, |acc, byte| {
			let digit = self.digit_value(byte)?;
			acc.checked_mul(radix)?.checked_add(digit)
		})
	}
}
