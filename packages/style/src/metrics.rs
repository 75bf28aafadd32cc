//! Size lookup tables shared by both renderers.

/// Button font size for a size family (`sm`, `md`, `lg`). Unknown values
/// get the medium size.
pub fn button_font_size(size: &str) -> &'static str {
    match size {
        "sm" => "0.875rem",
        "lg" => "1.25rem",
        _ => "1rem",
    }
}

/// Social icon font size for a size family.
pub fn social_icon_size(size: &str) -> &'static str {
    match size {
        "sm" => "16px",
        "lg" => "32px",
        _ => "24px",
    }
}
