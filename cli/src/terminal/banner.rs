use colored::*;
use rand::seq::IndexedRandom;

use super::print;

const BANNER: &str = r#"
 _   _           _   _   _                        _   _             _
| | | | ___  ___| |_| \ | | __ _ _ __ ___   ___  | | | |_   _ _ __ | |_ ___ _ __
| |_| |/ _ \/ __| __|  \| |/ _` | '_ ` _ \ / _ \ | |_| | | | | '_ \| __/ _ \ '__|
|  _  | (_) \__ \ |_| |\  | (_| | | | | | |  __/ |  _  | |_| | | | | ||  __/ |
|_| |_|\___/|___/\__|_| \_|\__,_|_| |_| |_|\___| |_| |_|\__,_|_| |_|\__\___|_|
"#;

const PALETTE: &[Color] = &[
    Color::Red,
    Color::Green,
    Color::Yellow,
    Color::Cyan,
    Color::Magenta,
    Color::Blue,
    Color::White,
];

/// Prints the ASCII banner in a color picked at random for this run.
pub fn show() {
    let color: Color = *PALETTE.choose(&mut rand::rng()).unwrap_or(&Color::Green);
    print::print(&format!("{}", BANNER.color(color).bold()));
}
