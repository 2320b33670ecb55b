//! Star and price glyph rows derived from a rating.

use std::fmt;

/// Newtype rendering a rating as a five-star row.
///
/// The filled-star count is the rating rounded *down* to the nearest
/// integer, the remainder rendered hollow. A 4.7 shows four filled stars.
///
/// # Examples
///
/// ```rust
/// use resto_core::display::Stars;
///
/// assert_eq!(format!("{}", Stars(4.2)), "★★★★☆");
/// assert_eq!(format!("{}", Stars(0.9)), "☆☆☆☆☆");
/// ```
pub struct Stars(pub f64);

impl Stars {
    fn filled(&self) -> usize {
        (self.0.floor().max(0.0) as usize).min(5)
    }
}

impl fmt::Display for Stars {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let filled = self.filled();
        for _ in 0..filled {
            write!(f, "★")?;
        }
        for _ in filled..5 {
            write!(f, "☆")?;
        }
        Ok(())
    }
}

/// Newtype rendering the dollar-row "price" derived from a rating.
///
/// The catalogue has no price field; the card shows one `$` per whole
/// rating star, same as the tier filter's rating mapping. Ratings below 1
/// render nothing.
pub struct PriceTag(pub f64);

impl PriceTag {
    /// Whether the tag renders any glyphs at all.
    pub fn is_empty(&self) -> bool {
        self.0 < 1.0
    }
}

impl fmt::Display for PriceTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dollars = (self.0.floor().max(0.0) as usize).min(5);
        for _ in 0..dollars {
            write!(f, "$")?;
        }
        Ok(())
    }
}
