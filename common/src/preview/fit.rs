//! Single-line fitting of long preview lines.
//!
//! The footer and subtitle are drawn in a fixed width box. Short text is kept
//! on one line; text wider than the box wraps. The frontend measures the text
//! with the block's font and asks `TextFit::wrap_mode` what to apply.

/// Font and box of a block whose text is fitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextFit {
    /// Id of the element inside the rendered preview.
    pub element_id: &'static str,
    /// Width of the box, in pixels.
    pub available_width: u32,
    /// Font size used when the element does not set one.
    pub default_font_size: &'static str,
    pub font_family: &'static str,
    pub font_weight: &'static str,
    pub uppercase: bool,
}

pub const FOOTER_FIT: TextFit = TextFit {
    element_id: "rodape-preview",
    available_width: 980,
    default_font_size: "24px",
    font_family: "'Globo Corporativa', 'GlobotipoCorporativa-Regular', sans-serif",
    font_weight: "normal",
    uppercase: false,
};

pub const SUBTITLE_FIT: TextFit = TextFit {
    element_id: "subtitulo-preview",
    available_width: 880,
    default_font_size: "32px",
    font_family: "'Globo Corporativa', 'GlobotipoCorporativa-Bold', sans-serif",
    font_weight: "700",
    uppercase: true,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapMode {
    NoWrap,
    Wrap,
}

impl WrapMode {
    /// Value for the CSS `white-space` property.
    pub fn white_space(self) -> &'static str {
        match self {
            WrapMode::NoWrap => "nowrap",
            WrapMode::Wrap => "normal",
        }
    }
}

impl TextFit {
    pub fn wrap_mode(&self, measured_width: f64) -> WrapMode {
        if measured_width <= f64::from(self.available_width) {
            WrapMode::NoWrap
        } else {
            WrapMode::Wrap
        }
    }

    /// Width declaration applied to the box before measuring.
    pub fn width_css(&self) -> String {
        format!("{}px", self.available_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_within_box_stays_on_one_line() {
        assert_eq!(FOOTER_FIT.wrap_mode(980.0), WrapMode::NoWrap);
        assert_eq!(FOOTER_FIT.wrap_mode(980.5), WrapMode::Wrap);
        assert_eq!(SUBTITLE_FIT.wrap_mode(900.0), WrapMode::Wrap);
        assert_eq!(SUBTITLE_FIT.width_css(), "880px");
        assert_eq!(WrapMode::Wrap.white_space(), "normal");
    }
}
