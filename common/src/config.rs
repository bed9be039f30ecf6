/// Presentation settings derived from the command line.
///
/// Nothing in here changes which addresses are looked up or what ends up in
/// the exported file.
#[derive(Clone, Copy, Debug, Default)]
pub struct Config {
    /// How much decoration to drop.
    ///
    /// `1` hides the banner, section headers and the spinner. `2` also hides
    /// the closing summary.
    pub quiet: u8,
    /// Skips the banner even when `quiet` is 0.
    pub no_banner: bool,
}

impl Config {
    pub fn show_banner(&self) -> bool {
        !self.no_banner && self.quiet == 0
    }

    pub fn show_summary(&self) -> bool {
        self.quiet < 2
    }
}
