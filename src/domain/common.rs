/// Renders a one-line label for shell listings and log lines.
///
/// Reservation codes, logos, and profiles all print through this trait so
/// the CLI output stays uniform.
pub trait Displayable {
    fn display_label(&self) -> String;
}
