/// Terminal preview for rendered rasters
use std::io::{stdout, Write};

use crossterm::{
    cursor,
    event::{self, Event},
    execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};
use cyl3d_core::Result;
use image::RgbImage;

/// Upper half block; one terminal cell shows two vertically stacked pixels
const HALF_BLOCK: char = '\u{2580}';

/// Display an image in the terminal until a key is pressed.
///
/// The raster is downscaled (nearest neighbour) to fit the terminal cell
/// grid, drawn once as colored half blocks, and left on the alternate
/// screen until a key event arrives.
pub fn show(image: &RgbImage) -> Result<()> {
    let (cols, rows) = terminal::size()?;

    terminal::enable_raw_mode()?;
    execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

    let result = draw_and_wait(image, cols, rows);

    // Cleanup
    terminal::disable_raw_mode()?;
    execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

    result
}

fn draw_and_wait(image: &RgbImage, cols: u16, rows: u16) -> Result<()> {
    let mut stdout = stdout();
    queue!(stdout, cursor::MoveTo(0, 0))?;

    draw(image, cols, rows.saturating_sub(1), &mut stdout)?;

    queue!(
        stdout,
        SetForegroundColor(Color::Yellow),
        Print("Press any key to close"),
        ResetColor
    )?;
    stdout.flush()?;

    loop {
        if let Event::Key(_) = event::read()? {
            return Ok(());
        }
    }
}

/// Draw an image into `writer` as half-block cells
pub fn draw<W: Write>(image: &RgbImage, max_cols: u16, max_rows: u16, writer: &mut W) -> Result<()> {
    if image.width() == 0 || image.height() == 0 {
        return Ok(());
    }

    let (cols, rows) = fit(image.width(), image.height(), max_cols, max_rows);

    for row in 0..rows {
        for col in 0..cols {
            let top = sample(image, col, 2 * row, cols, 2 * rows);
            let bottom = sample(image, col, 2 * row + 1, cols, 2 * rows);

            writer.queue(SetForegroundColor(Color::Rgb {
                r: top[0],
                g: top[1],
                b: top[2],
            }))?;
            writer.queue(SetBackgroundColor(Color::Rgb {
                r: bottom[0],
                g: bottom[1],
                b: bottom[2],
            }))?;
            writer.queue(Print(HALF_BLOCK))?;
        }
        writer.queue(ResetColor)?;
        writer.queue(Print("\r\n"))?;
    }

    Ok(())
}

/// Fit an image into a cell grid; cells are one pixel wide and two tall.
/// Never upscales.
fn fit(width: u32, height: u32, max_cols: u16, max_rows: u16) -> (u32, u32) {
    let max_cols = max_cols.max(1) as f32;
    let max_rows = max_rows.max(1) as f32;

    let scale = (max_cols / width as f32)
        .min(max_rows * 2.0 / height as f32)
        .min(1.0);

    let cols = ((width as f32 * scale) as u32).max(1);
    let rows = ((height as f32 * scale / 2.0) as u32).max(1);
    (cols, rows)
}

/// Nearest-neighbour sample of the pixel a grid cell lands on
fn sample(image: &RgbImage, cell_x: u32, cell_y: u32, grid_w: u32, grid_h: u32) -> [u8; 3] {
    let x = (cell_x * image.width() / grid_w).min(image.width() - 1);
    let y = (cell_y * image.height() / grid_h).min(image.height() - 1);
    image.get_pixel(x, y).0
}
