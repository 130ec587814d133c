use rand::Rng;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GlyphColor {
    /// The bright leading character of a stream.
    Highlight,
    Green { green: u8, blue: u8, alpha: f64 },
}

impl GlyphColor {
    pub fn css(&self) -> String {
        match self {
            GlyphColor::Highlight => "#FFFFFF".to_string(),
            GlyphColor::Green { green, blue, alpha } => {
                format!("rgba(0, {}, {}, {:.2})", green, blue, alpha)
            }
        }
    }

    fn pick<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.gen::<f64>() < config::RAIN_HIGHLIGHT_CHANCE {
            GlyphColor::Highlight
        } else {
            GlyphColor::Green {
                green: rng.gen_range(155..=254),
                blue: rng.gen_range(16..=65),
                alpha: rng.gen_range(0.5..1.0),
            }
        }
    }
}

/// Whatever the rain is painted on.
pub trait RainSurface {
    fn resize(&mut self, width: f64, height: f64);
    /// Darken the previous frame instead of clearing it, leaving trails.
    fn fade(&mut self, alpha: f64);
    fn glyph(&mut self, glyph: char, x: f64, y: f64, color: GlyphColor);
    /// Single still frame used when motion is reduced.
    fn paint_static(&mut self);
}

/// Fall position (in cells) of every column across the viewport.
#[derive(Clone, Debug)]
pub struct RainField {
    drops: Vec<f64>,
    height: f64,
    glyphs: Vec<char>,
}

fn column_count(width: f64) -> usize {
    (width / config::RAIN_CELL_PX).floor().max(0.0) as usize
}

fn start_offset<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    -rng.gen::<f64>() * config::RAIN_MAX_START_OFFSET
}

impl RainField {
    pub fn new<R: Rng + ?Sized>(width: f64, height: f64, rng: &mut R) -> Self {
        let drops = (0..column_count(width)).map(|_| start_offset(rng)).collect();
        Self {
            drops,
            height,
            glyphs: config::RAIN_GLYPHS.chars().collect(),
        }
    }

    #[cfg(test)]
    pub fn columns(&self) -> usize {
        self.drops.len()
    }

    #[cfg(test)]
    pub fn drops(&self) -> &[f64] {
        &self.drops
    }

    /// Surviving columns keep falling where they were; new ones start above the top.
    pub fn resize<R: Rng + ?Sized>(&mut self, width: f64, height: f64, rng: &mut R) {
        let columns = column_count(width);
        if columns < self.drops.len() {
            self.drops.truncate(columns);
        } else {
            while self.drops.len() < columns {
                self.drops.push(start_offset(rng));
            }
        }
        self.height = height;
    }

    pub fn step<R: Rng + ?Sized>(&mut self, surface: &mut dyn RainSurface, rng: &mut R) {
        surface.fade(config::RAIN_FADE_ALPHA);
        for (column, drop) in self.drops.iter_mut().enumerate() {
            let glyph = self.glyphs[rng.gen_range(0..self.glyphs.len())];
            let x = column as f64 * config::RAIN_CELL_PX;
            let y = *drop * config::RAIN_CELL_PX;
            surface.glyph(glyph, x, y, GlyphColor::pick(rng));

            if y > self.height && rng.gen::<f64>() < config::RAIN_RESET_CHANCE {
                *drop = 0.0;
            }
            *drop += 1.0;
        }
    }
}
