/// The only text this program ever emits.
pub const GREETING: &str = "Hello, World!";

pub const LINE_TERMINATOR: &str = "\n";
