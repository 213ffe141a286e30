#[macro_export]
macro_rules! success_message {
    ($($arg:tt)*) => {{
        use $crate::Colorize;
        println!("{} {}", "[SUCCESS]".green().bold(), format!($($arg)*));
    }};
}

#[macro_export]
macro_rules! error_message {
    ($($arg:tt)*) => {{
        use $crate::Colorize;
        eprintln!("{} {}", "  [ERROR]".red().bold(), format!($($arg)*));
    }};
}

#[macro_export]
macro_rules! warning_message {
    ($($arg:tt)*) => {{
        use $crate::Colorize;
        println!("{} {}", "[WARNING]".yellow().bold(), format!($($arg)*));
    }};
}
