//! Terminal stylesheet built on owo-colors.

use owo_colors::Style;

/// Styles for every kind of line the CLI prints. `Styles::default()` is
/// the plain stylesheet used when color is off.
#[derive(Default, Clone, Copy)]
pub struct Styles {
    pub success: Style,
    pub warning: Style,
    pub info: Style,
    /// Labels in key/value listings.
    pub dim: Style,
    pub bold: Style,
    pub header: Style,
    /// Job state names in deletion progress.
    pub state: Style,
}

impl Styles {
    /// The colored stylesheet for interactive terminals.
    #[must_use]
    pub fn colored() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().yellow(),
            info: Style::new().blue(),
            dim: Style::new().dimmed(),
            bold: Style::new().bold(),
            header: Style::new().bold().cyan(),
            state: Style::new().bold().cyan(),
        }
    }
}
