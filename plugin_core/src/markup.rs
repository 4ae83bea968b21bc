//! BBCode helpers for text the host renders in chat and info frames.

/// `[b]text[/b]`
pub fn bold(text: &str) -> String {
    format!("[b]{}[/b]", text)
}

/// `[color=<color>]text[/color]`. `color` is a name or `#rrggbb`.
pub fn color(color: &str, text: &str) -> String {
    format!("[color={}]{}[/color]", color, text)
}

/// Opens a color span without closing it. The host closes open spans at the
/// end of the message.
pub fn open_color(color: &str) -> String {
    format!("[color={}]", color)
}

/// A labelled info-frame line: newline, bold label, value.
pub fn info_line(label: &str, value: &str) -> String {
    format!("\n{} {}", bold(label), value)
}
