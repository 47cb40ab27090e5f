//! Map generation options.
//!
//! These are plain values consumed by the image pipeline; the only behaviour
//! here is range checking and the crop reset rule.

use mapart_preset::PaletteOptions;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SessionError};

/// Output format of the generated map art.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MapMode {
	/// A structure file to build in the world.
	#[default]
	SchematicNbt,
	/// Map item data files, placed directly into a save.
	Mapdat,
}

/// How the uploaded image is fitted to the map area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CropMode {
	/// Stretch the whole image.
	Off,
	/// Crop around the centre. A manual crop with fixed offsets.
	#[default]
	Center,
	Manual,
}

/// How block heights vary to reach darker and lighter shades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaircaseMode {
	/// Flat; only the normal shade is available.
	Off,
	Classic,
	#[default]
	Valley,
}

impl StaircaseMode {
	/// Whether the dark and light shades can be produced.
	pub fn is_staircased(self) -> bool {
		self != Self::Off
	}
}

/// Where support blocks are placed under coloured blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WhereSupportBlocks {
	None,
	Important,
	#[default]
	AllOptimized,
	AllDoubleOptimized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DitherMethod {
	None,
	#[default]
	FloydSteinberg,
	MinAvgErr,
	Burkes,
	SierraLite,
	Stucki,
	Atkinson,
	Bayer4x4,
	Bayer2x2,
	Ordered3x3,
}

/// What fills transparent pixels before conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackgroundColourMode {
	#[default]
	Off,
	On,
	Dithered,
}

/// Crop state. Zoom is in tenths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropSettings {
	pub mode: CropMode,
	pub zoom: u32,
	/// Horizontal centre of the crop, percent of the image width.
	pub offset_x: u8,
	/// Vertical centre of the crop, percent of the image height.
	pub offset_y: u8,
}

impl CropSettings {
	const DEFAULT_ZOOM: u32 = 10;
	const DEFAULT_OFFSET: u8 = 50;

	fn with_mode(mode: CropMode) -> Self {
		Self {
			mode,
			zoom: Self::DEFAULT_ZOOM,
			offset_x: Self::DEFAULT_OFFSET,
			offset_y: Self::DEFAULT_OFFSET,
		}
	}
}

impl Default for CropSettings {
	fn default() -> Self {
		Self::with_mode(CropMode::default())
	}
}

/// Image adjustments applied before colour matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preprocessing {
	pub enabled: bool,
	/// Percentages; 100 leaves the image unchanged.
	pub brightness: u32,
	pub contrast: u32,
	pub saturation: u32,
	pub background_mode: BackgroundColourMode,
	/// `#rrggbb`.
	pub background_colour: String,
}

impl Default for Preprocessing {
	fn default() -> Self {
		Self {
			enabled: false,
			brightness: 100,
			contrast: 100,
			saturation: 100,
			background_mode: BackgroundColourMode::Off,
			background_colour: "#151515".to_string(),
		}
	}
}

/// All map generation options of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapSettings {
	pub map_mode: MapMode,
	/// Size in maps (128×128 pixels each).
	pub map_width: u32,
	pub map_height: u32,
	pub crop: CropSettings,
	pub show_grid_overlay: bool,
	pub staircasing: StaircaseMode,
	pub where_support_blocks: WhereSupportBlocks,
	pub support_block: String,
	/// Allow the shade that survival play cannot place. Mapdat only.
	pub unobtainable: bool,
	pub transparency: bool,
	pub transparency_tolerance: u8,
	pub mapdat_filename_use_id: bool,
	pub mapdat_filename_id_start: u32,
	pub better_colour: bool,
	pub dithering: DitherMethod,
	pub preprocessing: Preprocessing,
}

impl Default for MapSettings {
	fn default() -> Self {
		Self {
			map_mode: MapMode::SchematicNbt,
			map_width: 1,
			map_height: 1,
			crop: CropSettings::default(),
			show_grid_overlay: false,
			staircasing: StaircaseMode::Valley,
			where_support_blocks: WhereSupportBlocks::AllOptimized,
			support_block: "cobblestone".to_string(),
			unobtainable: true,
			transparency: false,
			transparency_tolerance: 128,
			mapdat_filename_use_id: true,
			mapdat_filename_id_start: 0,
			better_colour: true,
			dithering: DitherMethod::FloydSteinberg,
			preprocessing: Preprocessing::default(),
		}
	}
}

impl MapSettings {
	/// Changes the crop mode, resetting zoom and offsets.
	pub fn set_crop_mode(&mut self, mode: CropMode) {
		self.crop = CropSettings::with_mode(mode);
	}

	/// Sets the crop zoom in tenths; must be at least 10 (no zoom).
	pub fn set_crop_zoom(&mut self, zoom: u32) -> Result<()> {
		if zoom < CropSettings::DEFAULT_ZOOM {
			return Err(invalid("crop zoom", zoom));
		}
		self.crop.zoom = zoom;
		Ok(())
	}

	/// Sets the crop centre in percent of the image.
	pub fn set_crop_offset(&mut self, x: u8, y: u8) -> Result<()> {
		if x > 100 {
			return Err(invalid("crop offset x", x));
		}
		if y > 100 {
			return Err(invalid("crop offset y", y));
		}
		self.crop.offset_x = x;
		self.crop.offset_y = y;
		Ok(())
	}

	pub fn set_map_size(&mut self, width: u32, height: u32) -> Result<()> {
		if width == 0 {
			return Err(invalid("map width", width));
		}
		if height == 0 {
			return Err(invalid("map height", height));
		}
		self.map_width = width;
		self.map_height = height;
		Ok(())
	}

	pub fn set_support_block(&mut self, block: &str) -> Result<()> {
		let block = block.trim();
		if block.is_empty() {
			return Err(invalid("support block", "\"\""));
		}
		self.support_block = block.to_string();
		Ok(())
	}

	/// Sets the pre-fill colour, `#rrggbb`.
	pub fn set_background_colour(&mut self, colour: &str) -> Result<()> {
		let valid = colour.len() == 7 && colour.starts_with('#') && colour[1..].bytes().all(|b| b.is_ascii_hexdigit());
		if !valid {
			return Err(invalid("background colour", colour));
		}
		self.preprocessing.background_colour = colour.to_ascii_lowercase();
		Ok(())
	}

	/// Shades a palette export should contain for these settings.
	pub fn palette_options(&self) -> PaletteOptions {
		PaletteOptions {
			staircasing: self.staircasing.is_staircased(),
			unobtainable: self.map_mode == MapMode::Mapdat && self.unobtainable,
		}
	}
}

fn invalid(setting: &'static str, value: impl ToString) -> SessionError {
	SessionError::InvalidSetting {
		setting,
		value: value.to_string(),
	}
}
