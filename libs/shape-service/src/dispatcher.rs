//! # Request Dispatcher
//!
//! Validates a request, generates its mesh and writes the three artifacts
//! under a fresh identifier.
//!
//! ```text
//! RequestRecord ──validate──▶ Request ──Generator──▶ Mesh
//!                                                     │
//!                        <id>.obj ◀── export ─────────┤
//!                        <id>.stl ◀── export ─────────┤
//!                <id>_preview.png ◀── preview ────────┘
//! ```
//!
//! Every failure is turned into an error [`Response`]; [`Dispatcher::handle`]
//! never panics or returns `Err`. Files written before a later step fails
//! are left in place.

use std::path::PathBuf;

use config::constants::DEFAULT_OUTPUT_DIR;
use shape_export::{export, preview_with, ExportFormat, PreviewOptions};
use uuid::Uuid;

use crate::error::ServiceResult;
use crate::generator::Generator;
use crate::request::RequestRecord;
use crate::response::{OutputPaths, Response};

/// Dispatcher settings.
#[derive(Debug, Clone, PartialEq)]
pub struct DispatcherConfig {
    /// Directory receiving all output files. Created on demand.
    pub output_dir: PathBuf,
    /// Preview rendering options.
    pub preview: PreviewOptions,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            preview: PreviewOptions::default(),
        }
    }
}

impl DispatcherConfig {
    /// Default settings writing into `output_dir`.
    pub fn with_output_dir(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }
}

/// Handles requests end to end.
#[derive(Debug)]
pub struct Dispatcher {
    config: DispatcherConfig,
    generator: Generator,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(DispatcherConfig::default())
    }
}

impl Dispatcher {
    pub fn new(config: DispatcherConfig) -> Self {
        Self {
            config,
            generator: Generator::new(),
        }
    }

    /// Processes one request and reports the outcome.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use shape_service::{Dispatcher, RequestRecord};
    ///
    /// let response = Dispatcher::default().handle(&RequestRecord::text("a chair"));
    /// println!("{}", serde_json::to_string(&response).unwrap());
    /// ```
    pub fn handle(&self, record: &RequestRecord) -> Response {
        match self.process(record) {
            Ok(paths) => Response::success(&paths),
            Err(e) => {
                log::warn!("Error processing request: {}", e);
                Response::failure(&e)
            }
        }
    }

    /// Like [`handle`](Self::handle) but returns the written paths or the
    /// error itself.
    pub fn process(&self, record: &RequestRecord) -> ServiceResult<OutputPaths> {
        let request = record.validate()?;
        let mesh = self.generator.generate(&request)?;

        let paths = OutputPaths::new(&self.config.output_dir, Uuid::new_v4().to_string());
        log::debug!("Request {} resolved to {:?}", paths.id, request);

        export(&mesh, &paths.obj, ExportFormat::Obj)?;
        export(&mesh, &paths.stl, ExportFormat::Stl)?;
        preview_with(&mesh, Some(paths.preview.as_path()), &self.config.preview)?;

        log::info!("Request {} completed", paths.id);
        Ok(paths)
    }
}

/// Handles a request with the default configuration.
pub fn handle(record: &RequestRecord) -> Response {
    Dispatcher::default().handle(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_output_dir() {
        let config = DispatcherConfig::default();
        assert_eq!(config.output_dir, PathBuf::from("output"));
        assert_eq!(config.preview, PreviewOptions::default());
    }

    #[test]
    fn default_dispatcher_uses_default_config() {
        assert_eq!(Dispatcher::default().config, DispatcherConfig::default());
    }

    #[test]
    fn invalid_request_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");
        let dispatcher = Dispatcher::new(DispatcherConfig::with_output_dir(&out));

        let response = dispatcher.handle(&RequestRecord::default());
        assert_eq!(
            response,
            Response::Error {
                error: "Invalid input type".into(),
                kind: crate::ErrorKind::Validation,
            }
        );
        assert!(!out.exists());
    }
}
