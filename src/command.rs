//! IL3829 command definitions
//!
//! This module defines all the command bytes used to control the IL3829
//! e-paper display controller. Commands are sent over SPI with the DC pin
//! low for commands and high for data.
//!
//! ## Command Structure
//!
//! All commands follow the pattern:
//! 1. Assert CS (Chip Select)
//! 2. Set DC low (command mode)
//! 3. Send command byte
//! 4. Set DC high (data mode)
//! 5. Send data bytes (if any)
//! 6. Deassert CS
//!
//! ## Example
//!
//! ```rust,no_run
//! use il3829::{command, DisplayInterface, Interface};
//! # use core::convert::Infallible;
//! # use embedded_hal::digital::{InputPin, OutputPin};
//! # use embedded_hal::spi::{Operation, SpiDevice};
//! # struct MockSpi;
//! # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
//! # impl SpiDevice for MockSpi {
//! #     fn transaction(
//! #         &mut self,
//! #         _operations: &mut [Operation<'_, u8>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # impl InputPin for MockPin {
//! #     fn is_high(&mut self) -> Result<bool, Self::Error> { Ok(false) }
//! #     fn is_low(&mut self) -> Result<bool, Self::Error> { Ok(true) }
//! # }
//! # let mut interface = Interface::new(MockSpi, MockPin, MockPin, MockPin);
//! # let pixel_data = [0xFFu8; 4];
//! // Write pixel data to controller RAM
//! let _ = interface.send_command(command::WRITE_RAM);
//! let _ = interface.send_data(&pixel_data);
//! ```

// System control commands

/// Driver output control command (0x01)
///
/// Sets the number of gate outputs (rows) and scanning direction.
/// Requires 3 bytes: [rows-1 (LSB), rows-1 (MSB), gate layout/scan flags]
pub const DRIVER_OUTPUT_CONTROL: u8 = 0x01;

/// Booster soft-start control command (0x0C)
///
/// Controls the power-on sequence of the booster circuit.
/// Requires 3 bytes of data.
pub const BOOSTER_SOFT_START_CONTROL: u8 = 0x0C;

/// Gate scan start position command (0x0F)
///
/// Sets the first gate line scanned during refresh.
pub const GATE_SCAN_START_POSITION: u8 = 0x0F;

/// Deep sleep mode command (0x10)
///
/// Enters ultra-low power mode. Only a hardware reset and
/// re-initialization can wake the controller.
/// Requires 1 byte: 0x01 = enter deep sleep
pub const DEEP_SLEEP_MODE: u8 = 0x10;

/// Data entry mode setting command (0x11)
///
/// Controls the address counter auto-increment direction.
/// Requires 1 byte:
/// - Bit 0 (ID0): X direction (0=decrement, 1=increment)
/// - Bit 1 (ID1): Y direction (0=decrement, 1=increment)
/// - Bit 2 (AM): Address counter direction (0=X, 1=Y)
pub const DATA_ENTRY_MODE_SETTING: u8 = 0x11;

/// Software reset command (0x12)
///
/// Resets the controller to default state without toggling the RST line.
pub const SW_RESET: u8 = 0x12;

/// Temperature sensor control command (0x1A)
///
/// Writes the temperature value used to compensate refresh timing.
pub const TEMPERATURE_SENSOR_CONTROL: u8 = 0x1A;

// Display update commands

/// Master activation command (0x20)
///
/// Triggers the display update sequence. BUSY goes high during update.
pub const MASTER_ACTIVATION: u8 = 0x20;

/// Display update control 1 command (0x21)
///
/// Controls which RAM sources are used for display update.
pub const DISPLAY_UPDATE_CONTROL_1: u8 = 0x21;

/// Display update control 2 command (0x22)
///
/// Selects the display update sequence (enable clock/analog, pattern
/// display). Requires 1 byte; 0xC4 enables clock + analog and runs the
/// pattern display sequence.
pub const DISPLAY_UPDATE_CONTROL_2: u8 = 0x22;

// RAM and data commands

/// Write RAM command (0x24)
///
/// Writes bit-packed pixel data at the current address counter, which
/// auto-increments per the data entry mode. 8 pixels per byte, MSB first.
pub const WRITE_RAM: u8 = 0x24;

/// Write VCOM register command (0x2C)
///
/// Sets the VCOM voltage for the common electrode.
/// Requires 1 byte.
pub const WRITE_VCOM_REGISTER: u8 = 0x2C;

/// Write LUT register command (0x32)
///
/// Loads a waveform Look-Up Table for display updates.
/// Requires 30 bytes for the IL3829.
pub const WRITE_LUT_REGISTER: u8 = 0x32;

/// Set dummy line period command (0x3A)
///
/// Requires 1 byte.
pub const SET_DUMMY_LINE_PERIOD: u8 = 0x3A;

/// Set gate time command (0x3B)
///
/// Sets the gate line width. Requires 1 byte.
pub const SET_GATE_TIME: u8 = 0x3B;

/// Border waveform control command (0x3C)
///
/// Controls the border color and transition behavior.
pub const BORDER_WAVEFORM_CONTROL: u8 = 0x3C;

// Addressing commands

/// Set RAM X address start/end position command (0x44)
///
/// Sets the X (column) address window for RAM access, in byte columns
/// (pixel x divided by 8). Requires 2 bytes: [start, end]
pub const SET_RAM_X_ADDRESS_START_END_POSITION: u8 = 0x44;

/// Set RAM Y address start/end position command (0x45)
///
/// Sets the Y (row) address window for RAM access.
/// Requires 4 bytes: [start_LSB, start_MSB, end_LSB, end_MSB]
pub const SET_RAM_Y_ADDRESS_START_END_POSITION: u8 = 0x45;

/// Set RAM X address counter command (0x4E)
///
/// Sets the X address counter, in byte columns. Requires 1 byte.
pub const SET_RAM_X_ADDRESS_COUNTER: u8 = 0x4E;

/// Set RAM Y address counter command (0x4F)
///
/// Requires 2 bytes: [address_LSB, address_MSB]
pub const SET_RAM_Y_ADDRESS_COUNTER: u8 = 0x4F;

/// Terminate frame read/write command (0xFF)
///
/// Ends a RAM access sequence; issued after master activation.
pub const TERMINATE_FRAME_READ_WRITE: u8 = 0xFF;
