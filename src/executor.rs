use std::{future::Future, path::PathBuf, process::Stdio, sync::Arc};
use thiserror::Error;
use tokio::process::Command;

#[derive(Debug, Error)]
pub enum ExecutorError {
    #[error("cannot find `{program}` in PATH")]
    NotFound { program: String },
    #[error("empty argument vector")]
    EmptyCommand,
    #[error("Error running command {args:?}: {cause}")]
    Spawn {
        args: Vec<String>,
        #[source]
        cause: std::io::Error,
    },
    #[error("Error running command {args:?}: {status}")]
    ExitStatus {
        args: Vec<String>,
        status: std::process::ExitStatus,
    },
}

/// Runs one argv-style command to completion and reports only success or failure.
pub trait CommandExecutor: Send + Sync + 'static {
    fn execute(&self, args: Vec<String>) -> impl Future<Output = Result<(), ExecutorError>> + Send;
}

impl<E: CommandExecutor> CommandExecutor for Arc<E> {
    fn execute(&self, args: Vec<String>) -> impl Future<Output = Result<(), ExecutorError>> + Send {
        (**self).execute(args)
    }
}

/// Spawns the command as a child process with inherited stdout/stderr.
///
/// The program is looked up on PATH when a command runs, so a batch that
/// never dispatches anything does not need it installed.
#[derive(Debug, Clone)]
pub struct ProcessExecutor {
    program: String,
}

impl ProcessExecutor {
    pub fn new(program: impl Into<String>) -> Self {
        ProcessExecutor {
            program: program.into(),
        }
    }

    pub fn locate(&self) -> Result<PathBuf, ExecutorError> {
        match which::which(&self.program) {
            Ok(path) => Ok(path),
            Err(error) => {
                log::error!("cannot locate {}: {}", self.program, error);
                Err(ExecutorError::NotFound {
                    program: self.program.to_owned(),
                })
            }
        }
    }
}

impl CommandExecutor for ProcessExecutor {
    async fn execute(&self, args: Vec<String>) -> Result<(), ExecutorError> {
        let Some((_, rest)) = args.split_first() else {
            return Err(ExecutorError::EmptyCommand);
        };
        let program = self.locate()?;

        let status = Command::new(program)
            .args(rest)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await;

        match status {
            Ok(status) if status.success() => Ok(()),
            Ok(status) => Err(ExecutorError::ExitStatus { args, status }),
            Err(cause) => Err(ExecutorError::Spawn { args, cause }),
        }
    }
}
