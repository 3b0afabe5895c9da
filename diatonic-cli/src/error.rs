use std::fmt::Debug;

/// Converts foreign errors into a command error with a short description of what failed.
pub trait ResultExt<T> {
    fn or_command_error<F: From<String>>(self, what_failed: &str) -> Result<T, F>;
}

impl<T, E: Debug> ResultExt<T> for Result<T, E> {
    fn or_command_error<F: From<String>>(self, what_failed: &str) -> Result<T, F> {
        self.map_err(|err| F::from(format!("{what_failed}\n{err:#?}")))
    }
}
