//! Write macros for infallible targets like `String`, the results aren't
//! worth checking.

#[macro_export]
macro_rules! write {
    ($dst:expr, $($arg:tt)*) => { std::write!($dst, $($arg)*).unwrap() };
}

#[macro_export]
macro_rules! writeln {
    ($dst:expr $(,)?) => { std::writeln!($dst).unwrap() };
    ($dst:expr, $($arg:tt)*) => { std::writeln!($dst, $($arg)*).unwrap() };
}
