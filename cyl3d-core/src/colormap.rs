/// Scalar-to-color lookup tables and the colormap spec parser
use std::str::FromStr;

use nom::{
    bytes::complete::{tag, take_while_m_n},
    character::complete::char,
    combinator::{all_consuming, map_res},
    multi::separated_list1,
    IResult,
};

use crate::error::Error;

/// Solid light blue used when no colormap is configured
pub const DEFAULT_COLOR: [u8; 3] = [128, 200, 255];

/// A scalar-to-RGB lookup table.
///
/// Stops are spaced uniformly over `[0, 1]` and sampling interpolates
/// linearly between neighbouring stops. A single-stop table is a solid
/// color that ignores the scalar entirely.
#[derive(Debug, Clone, PartialEq)]
pub struct Colormap {
    stops: Vec<[u8; 3]>,
}

impl Colormap {
    /// Create a colormap from uniformly spaced stops
    pub fn from_stops(stops: Vec<[u8; 3]>) -> Result<Self, Error> {
        if stops.is_empty() {
            return Err(Error::ColormapParse("empty stop list".to_string()));
        }
        Ok(Self { stops })
    }

    /// Single-color table
    pub fn solid(color: [u8; 3]) -> Self {
        Self { stops: vec![color] }
    }

    /// Black-to-white ramp
    pub fn gray() -> Self {
        Self {
            stops: vec![[0, 0, 0], [255, 255, 255]],
        }
    }

    /// The matplotlib viridis table, reduced to 17 anchor stops
    pub fn viridis() -> Self {
        Self {
            stops: vec![
                [68, 1, 84],
                [72, 24, 106],
                [71, 45, 123],
                [66, 64, 134],
                [59, 82, 139],
                [51, 99, 141],
                [44, 114, 142],
                [38, 130, 142],
                [33, 145, 140],
                [31, 160, 136],
                [40, 174, 128],
                [63, 188, 115],
                [94, 201, 98],
                [132, 212, 75],
                [173, 220, 48],
                [216, 226, 25],
                [253, 231, 37],
            ],
        }
    }

    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    /// Sample the table at `t`, clamped to `[0, 1]`
    pub fn sample(&self, t: f32) -> [u8; 3] {
        let last = self.stops.len() - 1;
        if last == 0 {
            return self.stops[0];
        }

        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        let position = t * last as f32;
        let lower = (position.floor() as usize).min(last - 1);
        let fraction = position - lower as f32;

        let a = self.stops[lower];
        let b = self.stops[lower + 1];
        [
            lerp_channel(a[0], b[0], fraction),
            lerp_channel(a[1], b[1], fraction),
            lerp_channel(a[2], b[2], fraction),
        ]
    }

    /// Map raw scalars to colors, normalizing over their observed range.
    ///
    /// A degenerate range (all scalars equal) maps every scalar to the low
    /// end of the table.
    pub fn map_scalars(&self, scalars: &[f32]) -> Vec<[u8; 3]> {
        let (min, max) = scalar_range(scalars);
        let span = max - min;

        scalars
            .iter()
            .map(|&s| {
                let t = if span > 0.0 { (s - min) / span } else { 0.0 };
                self.sample(t)
            })
            .collect()
    }
}

impl Default for Colormap {
    fn default() -> Self {
        Self::solid(DEFAULT_COLOR)
    }
}

impl FromStr for Colormap {
    type Err = Error;

    /// Parse a colormap spec: a named table (`"gray"`, `"viridis"`,
    /// `"default"`) or a `:`-separated list of `#rrggbb` stops.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let spec = s.trim();
        match spec.to_ascii_lowercase().as_str() {
            "gray" | "grey" => return Ok(Self::gray()),
            "viridis" => return Ok(Self::viridis()),
            "default" => return Ok(Self::default()),
            _ => {}
        }

        match parse_stop_list(spec) {
            Ok((_, stops)) => Self::from_stops(stops),
            Err(_) => Err(Error::ColormapParse(s.to_string())),
        }
    }
}

fn lerp_channel(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 + (b as f32 - a as f32) * t).round() as u8
}

fn scalar_range(scalars: &[f32]) -> (f32, f32) {
    let mut min = f32::INFINITY;
    let mut max = f32::NEG_INFINITY;
    for &s in scalars {
        min = min.min(s);
        max = max.max(s);
    }
    (min, max)
}

fn parse_stop_list(input: &str) -> IResult<&str, Vec<[u8; 3]>> {
    all_consuming(separated_list1(char(':'), hex_color))(input)
}

fn hex_color(input: &str) -> IResult<&str, [u8; 3]> {
    let (input, _) = tag("#")(input)?;
    let (input, r) = hex_byte(input)?;
    let (input, g) = hex_byte(input)?;
    let (input, b) = hex_byte(input)?;

    Ok((input, [r, g, b]))
}

fn hex_byte(input: &str) -> IResult<&str, u8> {
    map_res(
        take_while_m_n(2, 2, |c: char| c.is_ascii_hexdigit()),
        |s: &str| u8::from_str_radix(s, 16),
    )(input)
}
