use inkboard_engine::input::Key;
use inkboard_engine::paint::Color;

/// Fixed set of brush colors selectable with the number keys.
///
/// Entry `0` is bound to `1`, entry `1` to `2`, and so on up to `9`.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Most entries a palette can bind (keys `1`..=`9`).
    pub const MAX_LEN: usize = 9;

    /// Builds a palette; entries beyond [`Palette::MAX_LEN`] are dropped.
    pub fn new(colors: impl Into<Vec<Color>>) -> Self {
        let mut colors = colors.into();
        colors.truncate(Self::MAX_LEN);
        Self { colors }
    }

    /// Black, red, green, blue.
    pub fn whiteboard() -> Self {
        Self::new([Color::BLACK, Color::RED, Color::GREEN, Color::BLUE])
    }

    /// Red, green, blue.
    pub fn paintboard() -> Self {
        Self::new([Color::RED, Color::GREEN, Color::BLUE])
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<Color> {
        self.colors.get(index).copied()
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Palette index bound to `key`, if the key is a digit with an entry.
    pub fn index_for_key(&self, key: Key) -> Option<usize> {
        let digit = key.digit()?;
        let index = usize::from(digit).checked_sub(1)?;
        (index < self.len()).then_some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets() {
        let wb = Palette::whiteboard();
        assert_eq!(wb.len(), 4);
        assert_eq!(wb.get(0), Some(Color::BLACK));
        assert_eq!(wb.get(2), Some(Color::GREEN));

        let pb = Palette::paintboard();
        assert_eq!(pb.colors(), &[Color::RED, Color::GREEN, Color::BLUE]);
    }

    #[test]
    fn digits_bind_from_one() {
        let wb = Palette::whiteboard();
        assert_eq!(wb.index_for_key(Key::Digit1), Some(0));
        assert_eq!(wb.index_for_key(Key::Digit4), Some(3));
        assert_eq!(wb.index_for_key(Key::Digit5), None);
        assert_eq!(wb.index_for_key(Key::Digit0), None);
        assert_eq!(wb.index_for_key(Key::C), None);
    }

    #[test]
    fn out_of_range_is_none() {
        assert_eq!(Palette::paintboard().get(3), None);
        assert!(Palette::new(Vec::new()).is_empty());
    }

    #[test]
    fn truncates_to_bindable_keys() {
        let p = Palette::new(vec![Color::RED; 12]);
        assert_eq!(p.len(), Palette::MAX_LEN);
    }
}
