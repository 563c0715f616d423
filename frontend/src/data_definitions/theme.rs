//! Presentation settings, provided once by `App`.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub accent_color: &'static str,
    pub danger_color: &'static str,
    pub text_color: &'static str,
    pub muted_text_color: &'static str,
    pub surface_color: &'static str,
    pub font_family: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent_color: "#9D6C1E",
            danger_color: "#DC2626",
            text_color: "#1F2937",
            muted_text_color: "#6B7280",
            surface_color: "#FFFFFF",
            font_family: "'Segoe UI', Roboto, Helvetica, Arial, sans-serif",
        }
    }
}
