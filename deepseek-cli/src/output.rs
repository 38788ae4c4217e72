use deepseek_app::domain::ChatCompletion;
use deepseek_errors::AppError;
use std::process::ExitCode;

/// What one run writes to stdout and stderr, and how the process exits.
#[derive(Debug, PartialEq, Eq)]
pub struct Outcome {
    pub stdout: Option<String>,
    pub stderr: Option<String>,
    pub exit_code: u8,
}

impl Outcome {
    fn printed(line: String) -> Self {
        Self {
            stdout: Some(line),
            stderr: None,
            exit_code: 0,
        }
    }

    /// Faults the run cannot report as a result.
    pub fn failed(err: &AppError) -> Self {
        tracing::error!("Request failed: {}", err);
        Self {
            stdout: None,
            stderr: Some(err.user_message()),
            exit_code: 1,
        }
    }

    pub fn emit(self) -> ExitCode {
        if let Some(line) = &self.stdout {
            println!("{}", line);
        }
        if let Some(line) = &self.stderr {
            eprintln!("{}", line);
        }
        ExitCode::from(self.exit_code)
    }
}

pub fn render(result: Result<ChatCompletion, AppError>, content_only: bool) -> Outcome {
    match result {
        Ok(completion) => Outcome::printed(render_completion(&completion, content_only)),
        Err(e) if e.is_recoverable() => Outcome::printed(e.user_message()),
        Err(e) => Outcome::failed(&e),
    }
}

fn render_completion(completion: &ChatCompletion, content_only: bool) -> String {
    if content_only {
        if let Some(content) = completion.first_content() {
            return content.to_string();
        }
        tracing::warn!("Response has no message content, printing full body");
    }
    format!("API Response: {}", completion.body())
}
