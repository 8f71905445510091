use std::process::ExitCode;

#[derive(Debug)]
pub(crate) struct CommandResult {
    pub exit_code: ExitCode,
    pub stderr: Option<String>,
    pub stdout: Option<String>,
}

impl CommandResult {
    pub fn stderr(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: ExitCode::FAILURE,
            stderr: Some(format!("{fmt_args}")),
            stdout: None,
        }
    }

    /// A successful run that may still have warnings (e.g. validation
    /// diagnostics) for stderr.
    pub fn success(stdout: String, stderr: Option<String>) -> Self {
        Self {
            exit_code: ExitCode::SUCCESS,
            stderr,
            stdout: Some(stdout),
        }
    }
}
