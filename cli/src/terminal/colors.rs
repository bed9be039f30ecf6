use colored::Color;

use hosthunter_common::network::record::Status;

pub const SUCCESS: Color = Color::Green;
pub const FAILED: Color = Color::Red;
pub const INVALID: Color = Color::Yellow;

pub fn status(status: Status) -> Color {
    match status {
        Status::Success => SUCCESS,
        Status::Failed => FAILED,
        Status::Invalid => INVALID,
    }
}
