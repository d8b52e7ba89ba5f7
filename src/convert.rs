//! External conversion of rendered SVG sheets
//!
//! Each sheet is handed to an external converter (inkscape by default) as
//! `<command> <input> -o <output>`. Tasks are explicit and independent; a
//! failed conversion is recorded and the batch continues.

use std::path::PathBuf;
use std::process::Command;

use thiserror::Error;

/// Errors from a single conversion task
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("failed to run '{command}': {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },

    #[error("'{command}' exited with {status}{stderr}")]
    Failed {
        command: String,
        status: std::process::ExitStatus,
        stderr: String,
    },
}

/// One conversion job: a rendered sheet and its converted counterpart
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionTask {
    /// Normalized category the sheet belongs to
    pub category: String,
    pub input: PathBuf,
    pub output: PathBuf,
}

/// The external converter command
#[derive(Debug, Clone)]
pub struct Converter {
    command: String,
}

impl Default for Converter {
    fn default() -> Self {
        Self::new("inkscape")
    }
}

impl Converter {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    /// Run one conversion task, checking the converter's exit status
    pub fn run(&self, task: &ConversionTask) -> Result<(), ConvertError> {
        let output = Command::new(&self.command)
            .arg(&task.input)
            .arg("-o")
            .arg(&task.output)
            .output()
            .map_err(|source| ConvertError::Spawn {
                command: self.command.clone(),
                source,
            })?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr = stderr.trim();
            Err(ConvertError::Failed {
                command: self.command.clone(),
                status: output.status,
                stderr: if stderr.is_empty() {
                    String::new()
                } else {
                    format!(": {}", stderr)
                },
            })
        }
    }

    /// Run a batch of tasks, collecting per-task outcomes
    pub fn run_all(&self, tasks: &[ConversionTask]) -> ConversionReport {
        let mut report = ConversionReport::default();
        for task in tasks {
            match self.run(task) {
                Ok(()) => report.succeeded.push(task.category.clone()),
                Err(err) => report.failed.push((task.category.clone(), err)),
            }
        }
        report
    }
}

/// Per-category results of a conversion batch
#[derive(Debug, Default)]
pub struct ConversionReport {
    pub succeeded: Vec<String>,
    pub failed: Vec<(String, ConvertError)>,
}

impl ConversionReport {
    pub fn all_succeeded(&self) -> bool {
        self.failed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task() -> ConversionTask {
        ConversionTask {
            category: "noble_gas".to_string(),
            input: PathBuf::from("svg/noble_gas.svg"),
            output: PathBuf::from("dxf/noble_gas.dxf"),
        }
    }

    #[test]
    fn test_successful_command() {
        // `true` ignores its arguments and exits 0
        let converter = Converter::new("true");
        assert!(converter.run(&task()).is_ok());
    }

    #[test]
    fn test_nonzero_exit_is_reported() {
        let converter = Converter::new("false");
        let err = converter.run(&task()).unwrap_err();
        assert!(matches!(err, ConvertError::Failed { .. }));
        assert!(err.to_string().contains("false"));
    }

    #[test]
    fn test_missing_command_is_a_spawn_error() {
        let converter = Converter::new("hexatile-no-such-converter");
        let err = converter.run(&task()).unwrap_err();
        assert!(matches!(err, ConvertError::Spawn { .. }));
    }

    #[test]
    fn test_batch_continues_past_failures() {
        let converter = Converter::new("false");
        let tasks = vec![
            ConversionTask {
                category: "a".to_string(),
                ..task()
            },
            ConversionTask {
                category: "b".to_string(),
                ..task()
            },
        ];
        let report = converter.run_all(&tasks);
        assert!(!report.all_succeeded());
        assert_eq!(report.failed.len(), 2);
        assert_eq!(report.failed[0].0, "a");
        assert_eq!(report.failed[1].0, "b");
    }
}
