//! LED matrix panel configuration and driver wrapper
//!
//! [`PanelSettings`] carries every hardware rendering parameter (panel
//! geometry, wiring, PWM tuning) and nothing game-related. Defaults match the
//! reference rig: one 64x32 panel on an Adafruit HAT. An optional
//! `panel.json` in the working directory overrides them.
//!
//! With the `hardware` feature enabled, [`Panel`] owns the matrix, the
//! off-screen canvas and the BDF font, and implements [`Canvas`] so the games
//! can draw without knowing about the driver.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// File read next to the binary to override the defaults
pub const SETTINGS_FILE: &str = "panel.json";

#[derive(Debug, Error)]
pub enum PanelError {
    #[error("matrix init failed: {0}")]
    Init(String),
    #[error("bad panel option: {0}")]
    Option(String),
    #[error("font load failed for {path}: {reason}")]
    Font { path: PathBuf, reason: String },
}

/// Hardware rendering parameters for the rpi-rgb-led-matrix driver
///
/// Field names follow the C library's option names. These control how the
/// panel is driven, never how the games behave.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelSettings {
    pub cols: u32,
    pub rows: u32,
    pub chain_length: u32,
    pub parallel: u32,
    pub brightness: u8,
    pub hardware_mapping: String,
    pub gpio_slowdown: u32,
    pub pwm_bits: u8,
    pub pwm_lsb_nanoseconds: u32,
    pub pwm_dither_bits: u32,
    pub led_rgb_sequence: String,
    pub multiplexing: u32,
    pub pixel_mapper_config: String,
    pub row_addr_type: u32,
    pub scan_mode: u32,
    pub hardware_pulsing: bool,
    pub inverse_colors: bool,
    pub show_refresh_rate: bool,
    pub drop_privileges: bool,
    /// BDF font used for text; ships with the rpi-rgb-led-matrix distribution
    pub font_path: PathBuf,
}

impl Default for PanelSettings {
    fn default() -> Self {
        Self {
            cols: 64,
            rows: 32,
            chain_length: 1,
            parallel: 1,
            brightness: 50,
            hardware_mapping: "adafruit-hat".to_string(),
            gpio_slowdown: 1,
            pwm_bits: 11,
            pwm_lsb_nanoseconds: 130,
            pwm_dither_bits: 0,
            led_rgb_sequence: "RGB".to_string(),
            multiplexing: 0,
            pixel_mapper_config: String::new(),
            row_addr_type: 0,
            scan_mode: 0,
            hardware_pulsing: false,
            inverse_colors: false,
            show_refresh_rate: false,
            drop_privileges: true,
            font_path: PathBuf::from("fonts/4x6.bdf"),
        }
    }
}

impl PanelSettings {
    /// Load `panel.json` from the working directory, falling back to the
    /// defaults when the file is absent or unreadable.
    pub fn load() -> Self {
        match std::fs::read_to_string(SETTINGS_FILE) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("panel settings loaded from {SETTINGS_FILE}");
                    settings
                }
                Err(e) => {
                    log::warn!("ignoring malformed {SETTINGS_FILE}: {e}");
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("no {SETTINGS_FILE}, using default panel settings");
                Self::default()
            }
        }
    }

    /// Playable grid width in cells
    pub fn grid_cols(&self) -> i32 {
        self.cols as i32
    }

    /// Playable grid height in cells
    pub fn grid_rows(&self) -> i32 {
        self.rows as i32
    }
}

#[cfg(feature = "hardware")]
pub use hardware::Panel;

#[cfg(feature = "hardware")]
mod hardware {
    use rpi_led_matrix::{LedCanvas, LedColor, LedFont, LedMatrix, LedMatrixOptions, LedRuntimeOptions};

    use super::{PanelError, PanelSettings};
    use crate::canvas::{Canvas, Rgb};

    impl From<Rgb> for LedColor {
        fn from(c: Rgb) -> Self {
            LedColor {
                red: c.r,
                green: c.g,
                blue: c.b,
            }
        }
    }

    /// The physical panel: matrix handle, off-screen canvas and text font
    pub struct Panel {
        matrix: LedMatrix,
        canvas: Option<LedCanvas>,
        font: LedFont,
    }

    impl Panel {
        /// Bring up the matrix with the given settings and load the font.
        pub fn open(settings: &PanelSettings) -> Result<Self, PanelError> {
            let mut options = LedMatrixOptions::new();
            options.set_cols(settings.cols);
            options.set_rows(settings.rows);
            options.set_chain_length(settings.chain_length);
            options.set_parallel(settings.parallel);
            options.set_hardware_mapping(&settings.hardware_mapping);
            options.set_pwm_lsb_nanoseconds(settings.pwm_lsb_nanoseconds);
            options.set_pwm_dither_bits(settings.pwm_dither_bits);
            options.set_led_rgb_sequence(&settings.led_rgb_sequence);
            options.set_multiplexing(settings.multiplexing);
            options.set_pixel_mapper_config(&settings.pixel_mapper_config);
            options.set_row_addr_type(settings.row_addr_type);
            options.set_scan_mode(settings.scan_mode);
            options.set_hardware_pulsing(settings.hardware_pulsing);
            options.set_inverse_colors(settings.inverse_colors);
            options.set_refresh_rate(settings.show_refresh_rate);
            options
                .set_brightness(settings.brightness)
                .map_err(|e| PanelError::Option(e.to_string()))?;
            options
                .set_pwm_bits(settings.pwm_bits)
                .map_err(|e| PanelError::Option(e.to_string()))?;

            let mut runtime = LedRuntimeOptions::new();
            runtime.set_gpio_slowdown(settings.gpio_slowdown);
            runtime.set_drop_privileges(settings.drop_privileges);

            let matrix = LedMatrix::new(Some(options), Some(runtime))
                .map_err(|e| PanelError::Init(e.to_string()))?;
            let font = LedFont::new(&settings.font_path).map_err(|e| PanelError::Font {
                path: settings.font_path.clone(),
                reason: e.to_string(),
            })?;

            let canvas = matrix.offscreen_canvas();
            log::info!(
                "panel up: {}x{} chain {} on {}",
                settings.cols,
                settings.rows,
                settings.chain_length,
                settings.hardware_mapping
            );

            Ok(Self {
                matrix,
                canvas: Some(canvas),
                font,
            })
        }

        /// Swap the off-screen canvas onto the panel (vsync'd) and keep the
        /// returned buffer for the next frame.
        pub fn present(&mut self) {
            let canvas = self.canvas.take().expect("off-screen canvas missing");
            self.canvas = Some(self.matrix.swap(canvas));
        }

        fn canvas_mut(&mut self) -> &mut LedCanvas {
            self.canvas.as_mut().expect("off-screen canvas missing")
        }
    }

    impl Canvas for Panel {
        fn clear(&mut self) {
            self.canvas_mut().fill(&Rgb::BLACK.into());
        }

        fn fill(&mut self, color: Rgb) {
            self.canvas_mut().fill(&color.into());
        }

        fn set_pixel(&mut self, x: i32, y: i32, color: Rgb) {
            self.canvas_mut().set(x, y, &color.into());
        }

        fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgb) {
            self.canvas_mut().draw_line(x0, y0, x1, y1, &color.into());
        }

        fn draw_circle(&mut self, cx: i32, cy: i32, radius: u32, color: Rgb) {
            self.canvas_mut().draw_circle(cx, cy, radius, &color.into());
        }

        fn draw_text(&mut self, x: i32, y: i32, text: &str, color: Rgb) {
            let font = &self.font;
            let canvas = self.canvas.as_mut().expect("off-screen canvas missing");
            canvas.draw_text(font, text, x, y, &color.into(), 0, false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_wiring() {
        let s = PanelSettings::default();
        assert_eq!((s.cols, s.rows), (64, 32));
        assert_eq!(s.hardware_mapping, "adafruit-hat");
        assert_eq!(s.brightness, 50);
        assert_eq!(s.pwm_bits, 11);
        assert!(s.drop_privileges);
    }

    #[test]
    fn partial_json_overrides_keep_remaining_defaults() {
        let s: PanelSettings = serde_json::from_str(r#"{"brightness": 80, "gpio_slowdown": 4}"#)
            .expect("parse");
        assert_eq!(s.brightness, 80);
        assert_eq!(s.gpio_slowdown, 4);
        assert_eq!(s.cols, 64);
        assert_eq!(s.hardware_mapping, "adafruit-hat");
    }
}
