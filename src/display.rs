//! SSD1306 128x64 OLED on I2C.

use display_interface::DisplayError;
use embedded_hal::i2c::I2c;
use ssd1306::{mode::BufferedGraphicsMode, prelude::*, I2CDisplayInterface, Ssd1306};

use crate::screen::Frame;

pub type OledDisplay<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

pub struct Oled<I2C> {
    display: OledDisplay<I2C>,
}

impl<I2C: I2c> Oled<I2C> {
    /// Bring up the panel at the default 0x3C address. An error here means
    /// the panel is missing or dead.
    pub fn new(i2c: I2C) -> Result<Self, DisplayError> {
        let interface = I2CDisplayInterface::new(i2c);
        let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();
        display.init()?;
        Ok(Self { display })
    }

    /// Redraw the whole buffer and push it to the panel.
    pub fn show(&mut self, frame: &Frame) -> Result<(), DisplayError> {
        frame.draw(&mut self.display)?;
        self.display.flush()
    }
}
