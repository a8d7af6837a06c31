/// `writeln!` that bails out of the enclosing `-> i32` function with
/// [`exit_code::ERROR`](crate::exit_code::ERROR) when the stream is gone.
#[macro_export]
macro_rules! write_or_exit {
    ($dest:expr, $($arg:tt)*) => {
        if writeln!($dest, $($arg)*).is_err() {
            return $crate::exit_code::ERROR;
        }
    };
}
