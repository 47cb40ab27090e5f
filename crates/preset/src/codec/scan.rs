use mapart_primitives::{COLOUR_SET_DIGITS, PRESET_INDEX_DIGITS, PresetPair};

/// The two digit runs of one record, still as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Record<'a> {
	pub colour_set: &'a str,
	pub preset_index: &'a str,
}

impl Record<'_> {
	/// Parses both runs; `None` if either overflows.
	pub fn to_pair(self) -> Option<PresetPair> {
		let colour_set = COLOUR_SET_DIGITS.parse(self.colour_set)?;
		let preset_index = PRESET_INDEX_DIGITS.parse(self.preset_index)?;
		Some(PresetPair::new(colour_set, preset_index))
	}
}

/// Finds records: each maximal run of colour set digits that is immediately
/// followed by at least one preset index digit.
///
/// The preset index run is looked at but not consumed; scanning resumes
/// right after the colour set run and skips anything that cannot start one.
pub(super) struct Records<'a> {
	input: &'a str,
	position: usize,
}

impl<'a> Records<'a> {
	pub fn new(input: &'a str) -> Self {
		Self { input, position: 0 }
	}

	fn run_end(&self, from: usize, in_run: impl Fn(u8) -> bool) -> usize {
		let bytes = self.input.as_bytes();
		from + bytes[from..].iter().take_while(|&&b| in_run(b)).count()
	}
}

impl<'a> Iterator for Records<'a> {
	type Item = Record<'a>;

	fn next(&mut self) -> Option<Record<'a>> {
		let input = self.input;
		let bytes = input.as_bytes();
		loop {
			let start = self.position + bytes[self.position..].iter().position(|&b| COLOUR_SET_DIGITS.contains(b))?;
			let colour_set_end = self.run_end(start, |b| COLOUR_SET_DIGITS.contains(b));
			let preset_index_end = self.run_end(colour_set_end, |b| PRESET_INDEX_DIGITS.contains(b));
			self.position = colour_set_end;

			if preset_index_end > colour_set_end {
				return Some(Record {
					colour_set: &input[start..colour_set_end],
					preset_index: &input[colour_set_end..preset_index_end],
				});
			}
		}
	}
}
