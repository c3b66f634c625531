//! Core display operations
//!
//! The driver holds no frame buffer of its own: every drawing call is an
//! immediate, synchronous write into controller RAM, positioned by an
//! update window and memory pointer, and made visible by [`Display::refresh`].

use embedded_hal::delay::DelayNs;

use crate::command::{
    BOOSTER_SOFT_START_CONTROL, DATA_ENTRY_MODE_SETTING, DEEP_SLEEP_MODE, DISPLAY_UPDATE_CONTROL_2,
    DRIVER_OUTPUT_CONTROL, MASTER_ACTIVATION, SET_DUMMY_LINE_PERIOD, SET_GATE_TIME,
    SET_RAM_X_ADDRESS_COUNTER, SET_RAM_X_ADDRESS_START_END_POSITION, SET_RAM_Y_ADDRESS_COUNTER,
    SET_RAM_Y_ADDRESS_START_END_POSITION, TERMINATE_FRAME_READ_WRITE, WRITE_LUT_REGISTER,
    WRITE_RAM, WRITE_VCOM_REGISTER,
};
use crate::config::{Config, LutSelection};
use crate::error::Error;
use crate::interface::DisplayInterface;
use crate::lut::{LUT_FULL_UPDATE, LUT_PARTIAL_UPDATE};

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Chunk size for streaming repeated fill bytes
///
/// Pattern fills are emitted from a small stack buffer in several data
/// transfers; the controller latches each byte independently, so splitting
/// the stream does not change what lands in RAM.
const FILL_CHUNK: usize = 64;

/// Display update sequence run by [`Display::refresh`]
///
/// Enables clock and analog circuits and runs the pattern display sequence.
const UPDATE_SEQUENCE: u8 = 0xC4;

/// Core display driver for the IL3829
///
/// Provides the register initialization sequence, the RAM window/pointer
/// addressing model, and the frame operations (clear, pattern fill, image
/// blit) plus lifecycle control (refresh, deep sleep).
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Display configuration
    config: Config,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create a new Display instance
    ///
    /// The controller is untouched until [`init`](Self::init) is called.
    pub fn new(interface: I, config: Config) -> Self {
        Self { interface, config }
    }

    /// Reset and initialize the controller
    ///
    /// When the configuration owns the reset line, the RST pin is pulsed
    /// first; otherwise the caller must have sequenced the reset already.
    /// Then the fixed register sequence is issued: driver output control,
    /// booster soft start, VCOM, dummy line period, gate time, data entry
    /// mode, and finally the waveform LUT when one is selected. The
    /// controller accepts configuration writes immediately after reset, so
    /// no busy-wait is interleaved. The order must not change.
    pub fn init<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        if self.config.owns_reset {
            self.interface.reset(delay);
        }

        let rows = self.config.dimensions.height - 1;
        self.send_command(DRIVER_OUTPUT_CONTROL)?;
        self.send_data(&[(rows % 256) as u8, (rows / 256) as u8, self.config.gate_scanning])?;

        self.send_command(BOOSTER_SOFT_START_CONTROL)?;
        let booster_data = self.config.booster_soft_start;
        self.send_data(&booster_data)?;

        self.send_command(WRITE_VCOM_REGISTER)?;
        self.send_data(&[self.config.vcom])?;

        self.send_command(SET_DUMMY_LINE_PERIOD)?;
        self.send_data(&[self.config.dummy_line_period])?;

        self.send_command(SET_GATE_TIME)?;
        self.send_data(&[self.config.gate_time])?;

        self.send_command(DATA_ENTRY_MODE_SETTING)?;
        self.send_data(&[self.config.data_entry_mode])?;

        match self.config.lut {
            LutSelection::None => {}
            LutSelection::Full => {
                self.send_command(WRITE_LUT_REGISTER)?;
                self.send_data(&LUT_FULL_UPDATE)?;
            }
            LutSelection::Partial => {
                self.send_command(WRITE_LUT_REGISTER)?;
                self.send_data(&LUT_PARTIAL_UPDATE)?;
            }
        }

        log::debug!(
            "initialized {}x{} panel, lut={:?}",
            self.config.dimensions.width,
            self.config.dimensions.height,
            self.config.lut
        );

        Ok(())
    }

    /// Set the RAM update window
    ///
    /// Bounds are inclusive pixel coordinates. X values are sent in byte
    /// columns (right-shifted by 3): an x that is not a multiple of 8
    /// silently loses its low 3 bits. That is the controller's addressing
    /// granularity, not a validated precondition - callers that need exact
    /// positioning must supply byte-aligned x values.
    pub fn set_memory_area(
        &mut self,
        x_start: u16,
        y_start: u16,
        x_end: u16,
        y_end: u16,
    ) -> DisplayResult<I> {
        self.send_command(SET_RAM_X_ADDRESS_START_END_POSITION)?;
        self.send_data(&[(x_start >> 3) as u8, (x_end >> 3) as u8])?;

        self.send_command(SET_RAM_Y_ADDRESS_START_END_POSITION)?;
        self.send_data(&[y_start as u8, 0x00, y_end as u8, 0x00])?;

        Ok(())
    }

    /// Set the RAM write cursor
    ///
    /// Positions the controller's address counters, then busy-waits so the
    /// pointer is latched before any subsequent RAM write command. The
    /// cursor is not persisted between operations: each drawing call sets
    /// both the window and the pointer. X quantization matches
    /// [`set_memory_area`](Self::set_memory_area).
    pub fn set_pointer<D: DelayNs>(&mut self, x: u16, y: u16, delay: &mut D) -> DisplayResult<I> {
        self.send_command(SET_RAM_X_ADDRESS_COUNTER)?;
        self.send_data(&[(x >> 3) as u8])?;

        self.send_command(SET_RAM_Y_ADDRESS_COUNTER)?;
        self.send_data(&[y as u8, 0x00])?;

        self.busy_wait(delay)
    }

    /// Fill the entire frame RAM with a color byte
    ///
    /// Streams `(width / 8) * height` copies of `color` (0x00 and 0xFF
    /// give solid frames; other values repeat an 8-pixel pattern along x).
    /// Not visible until [`refresh`](Self::refresh).
    pub fn clear_frame<D: DelayNs>(&mut self, color: u8, delay: &mut D) -> DisplayResult<I> {
        let dims = self.config.dimensions;
        self.set_memory_area(0, 0, dims.width - 1, dims.height - 1)?;
        self.set_pointer(0, 0, delay)?;
        self.send_command(WRITE_RAM)?;
        self.stream_pattern(color, dims.buffer_size())
    }

    /// Fill a rectangular block with a pattern byte
    ///
    /// Bounds are inclusive. Streams `(x_end + 1 - x) * (y_end + 1 - y)`
    /// copies of `pattern` - a count of repeated bytes, not bits. Callers
    /// construct rectangles whose pixel width already corresponds to whole
    /// bytes; no bit-packing conversion is performed here.
    pub fn fill_block<D: DelayNs>(
        &mut self,
        x: u16,
        y: u16,
        x_end: u16,
        y_end: u16,
        pattern: u8,
        delay: &mut D,
    ) -> DisplayResult<I> {
        let count = (x_end as usize + 1).saturating_sub(x as usize)
            * (y_end as usize + 1).saturating_sub(y as usize);

        self.set_memory_area(x, y, x_end, y_end)?;
        self.set_pointer(x, y, delay)?;
        self.send_command(WRITE_RAM)?;
        self.stream_pattern(pattern, count)
    }

    /// Blit an opaque bit-packed image into a rectangular window
    ///
    /// Bounds are inclusive. Streams `data` verbatim; the caller is
    /// responsible for matching the buffer length to the window area - a
    /// mismatch produces wrong pixels, not an error.
    pub fn blit_image<D: DelayNs>(
        &mut self,
        x: u16,
        y: u16,
        x_end: u16,
        y_end: u16,
        data: &[u8],
        delay: &mut D,
    ) -> DisplayResult<I> {
        self.set_memory_area(x, y, x_end, y_end)?;
        self.set_pointer(x, y, delay)?;
        self.send_command(WRITE_RAM)?;
        self.send_data(data)
    }

    /// Activate the update sequence and refresh the physical panel
    ///
    /// Issues display update control 2, master activation, and terminate
    /// frame read/write, then busy-waits for the refresh to complete. This
    /// is the only path that makes prior RAM writes visible.
    pub fn refresh<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        log::debug!("refreshing panel");

        self.send_command(DISPLAY_UPDATE_CONTROL_2)?;
        self.send_data(&[UPDATE_SEQUENCE])?;

        self.send_command(MASTER_ACTIVATION)?;
        self.send_command(TERMINATE_FRAME_READ_WRITE)?;

        self.busy_wait(delay)
    }

    /// Enter deep sleep mode
    ///
    /// The controller stops responding to RAM and refresh commands until a
    /// hardware reset followed by [`init`](Self::init).
    pub fn sleep(&mut self) -> DisplayResult<I> {
        log::debug!("entering deep sleep");

        self.send_command(DEEP_SLEEP_MODE)?;
        self.send_data(&[0x01])
    }

    /// Get display dimensions
    pub fn dimensions(&self) -> &crate::config::Dimensions {
        &self.config.dimensions
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Consume the driver and return the hardware interface
    pub fn release(self) -> I {
        self.interface
    }

    /// Stream `count` copies of `byte` through the data channel
    fn stream_pattern(&mut self, byte: u8, mut count: usize) -> DisplayResult<I> {
        let chunk = [byte; FILL_CHUNK];
        while count > 0 {
            let n = count.min(FILL_CHUNK);
            self.send_data(&chunk[..n])?;
            count -= n;
        }
        Ok(())
    }

    /// Send a command to the display controller
    fn send_command(&mut self, cmd: u8) -> DisplayResult<I> {
        self.interface.send_command(cmd).map_err(Error::Interface)
    }

    /// Send data to the display controller
    fn send_data(&mut self, data: &[u8]) -> DisplayResult<I> {
        self.interface.send_data(data).map_err(Error::Interface)
    }

    /// Wait for the controller to report idle
    fn busy_wait<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        self.interface.busy_wait(delay).map_err(Error::Interface)
    }
}
