//! Positioned text blocks of the announcement artboard.
//!
//! Every text block on the 1000×1300 artboard is placed by an `(x, y)` pair
//! and drawn with a font size, all in pixels. `Block` names the blocks that
//! the operator can move, and `BlockLayout` holds their values.

use serde::{Deserialize, Serialize};

/// Position and font size of one block, in artboard pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockLayout {
    pub pos_x: i32,
    pub pos_y: i32,
    pub size: i32,
}

impl BlockLayout {
    pub const fn new(pos_x: i32, pos_y: i32, size: i32) -> Self {
        Self { pos_x, pos_y, size }
    }
}

/// The blocks with their own position controls.
///
/// `Type` and `CustomType` both describe the title block; only one of them is
/// in effect at a time, depending on whether a custom title is being used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Block {
    Type,
    CustomType,
    Subtitle,
    Body,
    Footer,
    Audience,
}

impl Block {
    pub const ALL: [Block; 6] = [
        Block::Type,
        Block::CustomType,
        Block::Subtitle,
        Block::Body,
        Block::Footer,
        Block::Audience,
    ];

    /// Layout a fresh record gets when nothing else was chosen.
    pub const fn default_layout(self) -> BlockLayout {
        match self {
            Block::Type => BlockLayout::new(60, 80, 42),
            Block::CustomType => BlockLayout::new(30, 150, 56),
            Block::Subtitle => BlockLayout::new(0, 430, 32),
            Block::Body => BlockLayout::new(60, 510, 24),
            Block::Footer => BlockLayout::new(60, 1000, 24),
            Block::Audience => BlockLayout::new(60, 1120, 16),
        }
    }

    /// Label used on the position card of the block.
    pub const fn label(self) -> &'static str {
        match self {
            Block::Type => "Tipo",
            Block::CustomType => "Título personalizado",
            Block::Subtitle => "Subtítulo",
            Block::Body => "Corpo",
            Block::Footer => "Rodapé",
            Block::Audience => "Público-alvo",
        }
    }
}

/// One of the three numeric controls of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutField {
    PosX,
    PosY,
    Size,
}

impl LayoutField {
    pub const fn bounds(self) -> FieldBounds {
        match self {
            LayoutField::PosX => FieldBounds::new(0, 1000, 5),
            LayoutField::PosY => FieldBounds::new(0, 1300, 5),
            LayoutField::Size => FieldBounds::new(8, 120, 1),
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            LayoutField::PosX => "X",
            LayoutField::PosY => "Y",
            LayoutField::Size => "Tamanho",
        }
    }
}

/// Inclusive range and step of a numeric control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldBounds {
    pub min: i32,
    pub max: i32,
    pub step: i32,
}

impl FieldBounds {
    pub const fn new(min: i32, max: i32, step: i32) -> Self {
        Self { min, max, step }
    }

    /// Moves `current` by `delta` steps and clamps the result into range.
    pub fn adjust(&self, current: i32, delta: i32) -> i32 {
        current
            .saturating_add(delta.saturating_mul(self.step))
            .clamp(self.min, self.max)
    }

    /// Parses a raw input value; `None` while the field is empty or not a number.
    ///
    /// Typed values are not clamped so that partial input such as the `2` of
    /// `24` is not rewritten under the cursor. Only the step buttons clamp.
    pub fn parse(&self, raw: &str) -> Option<i32> {
        raw.trim().parse().ok()
    }
}

impl BlockLayout {
    pub fn get(&self, field: LayoutField) -> i32 {
        match field {
            LayoutField::PosX => self.pos_x,
            LayoutField::PosY => self.pos_y,
            LayoutField::Size => self.size,
        }
    }

    pub fn set(&mut self, field: LayoutField, value: i32) {
        match field {
            LayoutField::PosX => self.pos_x = value,
            LayoutField::PosY => self.pos_y = value,
            LayoutField::Size => self.size = value,
        }
    }

    pub fn adjust(&mut self, field: LayoutField, delta: i32) {
        let value = field.bounds().adjust(self.get(field), delta);
        self.set(field, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjust_moves_by_step_and_clamps() {
        let bounds = FieldBounds::new(0, 1000, 5);
        assert_eq!(bounds.adjust(60, 1), 65);
        assert_eq!(bounds.adjust(60, -2), 50);
        assert_eq!(bounds.adjust(3, -1), 0);
        assert_eq!(bounds.adjust(998, 1), 1000);
    }

    #[test]
    fn typed_input_is_parsed_without_clamping() {
        let bounds = LayoutField::Size.bounds();
        assert_eq!(bounds.parse(""), None);
        assert_eq!(bounds.parse("abc"), None);
        assert_eq!(bounds.parse(" 56 "), Some(56));
        assert_eq!(bounds.parse("2"), Some(2));
    }

    #[test]
    fn block_layout_adjust_uses_field_bounds() {
        let mut layout = Block::Audience.default_layout();
        layout.adjust(LayoutField::Size, -100);
        assert_eq!(layout.size, 8);
        layout.adjust(LayoutField::PosY, 1);
        assert_eq!(layout.pos_y, 1125);
    }
}
