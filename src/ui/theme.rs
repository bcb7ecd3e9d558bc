use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,    // Blue
    pub secondary: Color,  // Orange
    pub success: Color,    // Green
    pub error: Color,      // Red
    pub sorted: Color,     // Teal
    pub eliminated: Color, // Grey
    pub pointer: Color,    // Yellow
    pub mid: Color,        // Pink
    pub empty_slot: Color, // Dim grey for placeholder cells
    pub border: Color,
    pub title: Color,
    pub status: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),    // Blue
    secondary: Color::Rgb(250, 179, 135),  // Orange
    success: Color::Rgb(166, 227, 161),    // Green
    error: Color::Rgb(243, 139, 168),      // Red
    sorted: Color::Rgb(148, 226, 213),     // Teal for settled elements
    eliminated: Color::Rgb(108, 112, 134), // Grey for discarded range
    pointer: Color::Rgb(249, 226, 175),    // Yellow for start/end/pointer
    mid: Color::Rgb(245, 194, 231),        // Pink for the mid probe
    empty_slot: Color::Rgb(88, 91, 112),
    border: Color::Rgb(108, 112, 134),
    title: Color::Rgb(249, 226, 175),
    status: Color::Rgb(166, 173, 200),
};
