//! Display configuration types and builder

pub use crate::error::{BuilderError, MAX_GATE_OUTPUTS, MAX_SOURCE_OUTPUTS};

/// Display dimensions
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    /// Width in pixels (corresponds to source outputs)
    pub width: u16,
    /// Height in pixels (corresponds to gate outputs)
    pub height: u16,
}

impl Dimensions {
    /// Dimensions of the GDEP015OC1 1.54" panel
    pub const GDEP015OC1: Self = Self {
        width: 200,
        height: 200,
    };

    /// Create new dimensions with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if:
    /// - width > MAX_SOURCE_OUTPUTS or height > MAX_GATE_OUTPUTS
    /// - width % 8 != 0 or height % 8 != 0 (RAM is byte-packed along x,
    ///   and the vendor geometry keeps both axes byte-aligned)
    pub fn new(width: u16, height: u16) -> Result<Self, BuilderError> {
        if width == 0 || width > MAX_SOURCE_OUTPUTS || !width.is_multiple_of(8) {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        if height == 0 || height > MAX_GATE_OUTPUTS || !height.is_multiple_of(8) {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    /// Calculate required frame size in bytes (8 pixels per byte along x)
    pub fn buffer_size(&self) -> usize {
        (self.width as usize / 8) * self.height as usize
    }
}

/// Waveform table loaded at initialization time
///
/// `None` issues no LUT register write at all, leaving whatever table the
/// controller currently holds (typically the one from a previous
/// initialization, surviving reset).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum LutSelection {
    /// Do not write the LUT register; reuse the controller's current table
    None,
    /// Load the full-update waveform (slow, ghost-free)
    #[default]
    Full,
    /// Load the partial-update waveform (fast, may ghost)
    Partial,
}

/// Display configuration
///
/// This struct holds all configurable parameters for the IL3829 controller.
/// Use `Builder` to create a Config.
#[derive(Clone, Debug)]
pub struct Config {
    /// Display dimensions
    pub dimensions: Dimensions,
    /// Waveform table to load during initialization
    pub lut: LutSelection,
    /// Whether `init` performs the hardware reset itself
    ///
    /// Set to false when the caller sequences the RST line externally.
    pub owns_reset: bool,
    /// Booster soft-start settings (3 bytes for command 0x0C)
    pub booster_soft_start: [u8; 3],
    /// Gate layout / scanning direction flags (third driver output byte)
    pub gate_scanning: u8,
    /// VCOM register value
    pub vcom: u8,
    /// Dummy line period
    pub dummy_line_period: u8,
    /// Gate line width
    pub gate_time: u8,
    /// Data entry mode byte
    pub data_entry_mode: u8,
}

/// Builder for constructing display configuration
///
/// Defaults match the GDEP015OC1 vendor initialization values; override
/// individual registers for panel variants.
///
/// # Example
///
/// ```rust,no_run
/// use il3829::{Builder, Dimensions, LutSelection};
///
/// let config = match Builder::new()
///     .dimensions(Dimensions::GDEP015OC1)
///     .lut(LutSelection::Partial)
///     .build()
/// {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// let _ = config;
/// ```
#[must_use]
pub struct Builder {
    /// Display dimensions (required)
    dimensions: Option<Dimensions>,
    /// Waveform table to load during initialization
    lut: LutSelection,
    /// Whether `init` performs the hardware reset itself
    owns_reset: bool,
    /// Booster soft-start settings (3 bytes for command 0x0C)
    booster_soft_start: [u8; 3],
    /// Gate layout / scanning direction flags
    gate_scanning: u8,
    /// VCOM register value
    vcom: u8,
    /// Dummy line period
    dummy_line_period: u8,
    /// Gate line width
    gate_time: u8,
    /// Data entry mode byte
    data_entry_mode: u8,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            dimensions: None,
            lut: LutSelection::Full,
            owns_reset: true,
            // GDEP015OC1 booster tuning
            booster_soft_start: [0xD7, 0xD6, 0x9D],
            // Default gate layout, interleave off, forward scan
            gate_scanning: 0x00,
            vcom: 0xA8,
            dummy_line_period: 0x1A,
            gate_time: 0x08,
            // X then Y increment addressing
            data_entry_mode: 0x03,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set display dimensions (required)
    pub fn dimensions(mut self, dims: Dimensions) -> Self {
        self.dimensions = Some(dims);
        self
    }

    /// Select the waveform table loaded during initialization
    pub fn lut(mut self, lut: LutSelection) -> Self {
        self.lut = lut;
        self
    }

    /// Set whether `init` performs the hardware reset itself
    pub fn owns_reset(mut self, owns_reset: bool) -> Self {
        self.owns_reset = owns_reset;
        self
    }

    /// Set booster soft-start parameters
    pub fn booster_soft_start(mut self, values: [u8; 3]) -> Self {
        self.booster_soft_start = values;
        self
    }

    /// Set gate layout / scanning direction flags
    pub fn gate_scanning(mut self, value: u8) -> Self {
        self.gate_scanning = value;
        self
    }

    /// Set VCOM value
    pub fn vcom(mut self, value: u8) -> Self {
        self.vcom = value;
        self
    }

    /// Set dummy line period
    pub fn dummy_line_period(mut self, value: u8) -> Self {
        self.dummy_line_period = value;
        self
    }

    /// Set gate line width
    pub fn gate_time(mut self, value: u8) -> Self {
        self.gate_time = value;
        self
    }

    /// Set data entry mode
    pub fn data_entry_mode(mut self, value: u8) -> Self {
        self.data_entry_mode = value;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::MissingDimensions` if dimensions were not set
    pub fn build(self) -> Result<Config, BuilderError> {
        Ok(Config {
            dimensions: self.dimensions.ok_or(BuilderError::MissingDimensions)?,
            lut: self.lut,
            owns_reset: self.owns_reset,
            booster_soft_start: self.booster_soft_start,
            gate_scanning: self.gate_scanning,
            vcom: self.vcom,
            dummy_line_period: self.dummy_line_period,
            gate_time: self.gate_time,
            data_entry_mode: self.data_entry_mode,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_gdep015oc1() {
        let dims = Dimensions::GDEP015OC1;
        assert_eq!(dims.width, 200);
        assert_eq!(dims.height, 200);
        assert_eq!(dims.buffer_size(), 5000);
    }

    #[test]
    fn test_dimensions_rejects_non_byte_aligned_width() {
        assert!(Dimensions::new(100, 200).is_err());
    }

    #[test]
    fn test_dimensions_rejects_non_byte_aligned_height() {
        assert!(Dimensions::new(200, 100).is_err());
    }

    #[test]
    fn test_dimensions_rejects_zero() {
        assert!(Dimensions::new(0, 200).is_err());
        assert!(Dimensions::new(200, 0).is_err());
    }

    #[test]
    fn test_dimensions_rejects_oversize() {
        assert!(Dimensions::new(MAX_SOURCE_OUTPUTS + 8, 200).is_err());
        assert!(Dimensions::new(200, MAX_GATE_OUTPUTS + 8).is_err());
    }

    #[test]
    fn test_builder_requires_dimensions() {
        assert!(matches!(
            Builder::new().build(),
            Err(BuilderError::MissingDimensions)
        ));
    }

    #[test]
    fn test_builder_defaults_match_vendor_values() {
        let config = Builder::new()
            .dimensions(Dimensions::GDEP015OC1)
            .build()
            .unwrap();
        assert_eq!(config.booster_soft_start, [0xD7, 0xD6, 0x9D]);
        assert_eq!(config.vcom, 0xA8);
        assert_eq!(config.dummy_line_period, 0x1A);
        assert_eq!(config.gate_time, 0x08);
        assert_eq!(config.data_entry_mode, 0x03);
        assert_eq!(config.gate_scanning, 0x00);
        assert_eq!(config.lut, LutSelection::Full);
        assert!(config.owns_reset);
    }
}
