pub use anstream::println as aprintln;

/// Tokyo Night palette, 24-bit ANSI.
#[derive(Debug, Clone, Copy)]
enum Tone {
    Red,
    Green,
    Yellow,
    Blue,
    Cyan,
}

impl Tone {
    fn code(self) -> &'static str {
        match self {
            Tone::Red => "\x1b[38;2;247;118;142m",
            Tone::Green => "\x1b[38;2;158;206;106m",
            Tone::Yellow => "\x1b[38;2;224;175;104m",
            Tone::Blue => "\x1b[38;2;122;162;247m",
            Tone::Cyan => "\x1b[38;2;125;207;255m",
        }
    }
}

const RESET: &str = "\x1b[0m";

fn paint(tone: Tone, text: &str) -> String {
    format!("{}{}{}", tone.code(), text, RESET)
}

pub fn p_g(text: &str) -> String {
    paint(Tone::Green, text)
}

pub fn p_r(text: &str) -> String {
    paint(Tone::Red, text)
}

pub fn p_y(text: &str) -> String {
    paint(Tone::Yellow, text)
}

pub fn p_b(text: &str) -> String {
    paint(Tone::Blue, text)
}

pub fn p_c(text: &str) -> String {
    paint(Tone::Cyan, text)
}
