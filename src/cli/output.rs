use colored::Colorize;

/// Plain-line output helpers shared by every command.
pub fn info(message: impl AsRef<str>) {
    println!("{}", message.as_ref());
}

pub fn success(message: impl AsRef<str>) {
    println!("{}", message.as_ref().green());
}

pub fn warning(message: impl AsRef<str>) {
    println!("{}", message.as_ref().yellow());
}

pub fn error(message: impl AsRef<str>) {
    eprintln!("{}", message.as_ref().red());
}

pub fn section(message: impl AsRef<str>) {
    println!("{}", message.as_ref().bold());
}
