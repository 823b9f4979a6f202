// src/lib.rs
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::{error, info};
use thiserror::Error;

pub mod emitter;
pub mod fetcher;
pub mod flag;
pub mod text;

use crate::emitter::{ConstantDecl, Emit, RustEmitter, SourceFile};
use crate::fetcher::FlagFetcher;
use crate::flag::FlagRecord;

#[derive(Debug, Error)]
pub enum CodegenError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {0}")]
    Api(String),

    #[error("Invalid response body: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Render error: {0}")]
    Render(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result of one generator run. Configuration problems come back as `Err`
/// from [`Generator::run`]; fetch and render failures come back as
/// `Reported` so a build host can carry on without the generated file.
#[derive(Debug)]
#[must_use]
pub enum Outcome {
    Generated(PathBuf),
    Reported(CodegenError),
}

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub base_url: String,
    pub auth_token: String,
    pub package_name: String,
    pub file_name: String,
    pub output_dir: PathBuf,
}

pub struct Generator {
    config: GeneratorConfig,
    fetcher: FlagFetcher,
    emitter: Box<dyn Emit>,
}

impl Generator {
    pub fn builder() -> GeneratorBuilder {
        GeneratorBuilder::new()
    }

    /// Runs the whole pipeline once: fetch, normalize, render, write.
    ///
    /// The output file is only touched after the full artifact has been
    /// rendered; a failed fetch leaves any previous artifact in place.
    pub fn run(&self) -> Result<Outcome, CodegenError> {
        if self.config.base_url.trim().is_empty() {
            return Err(CodegenError::Config("base URL must be set".to_string()));
        }
        if self.config.file_name.trim().is_empty() {
            return Err(CodegenError::Config("file name must be set".to_string()));
        }

        let target = self.target_path();
        info!("generating flag constants to {}", target.display());

        match self.generate(&target) {
            Ok(()) => Ok(Outcome::Generated(target)),
            Err(e) => {
                error!("unable to generate flag constants: {}", e);
                Ok(Outcome::Reported(e))
            }
        }
    }

    fn generate(&self, target: &Path) -> Result<(), CodegenError> {
        let records = self
            .fetcher
            .fetch(&self.config.base_url, &self.config.auth_token)?;

        let source = build_source_file(
            &self.config.package_name,
            &self.config.file_name,
            &records,
        )?;
        let rendered = self.emitter.emit(&source);

        if let Some(dir) = target.parent() {
            fs::create_dir_all(dir)?;
        }

        // Write-then-rename so a crash mid-write never leaves a torn file.
        let staged = target.with_extension(format!("{}.tmp", self.emitter.file_extension()));
        fs::write(&staged, rendered)?;
        fs::rename(&staged, target)?;

        Ok(())
    }

    fn target_path(&self) -> PathBuf {
        let mut path = self.config.output_dir.clone();
        for segment in self.config.package_name.split('.') {
            if !segment.is_empty() {
                path.push(segment);
            }
        }
        path.push(format!(
            "{}.{}",
            self.config.file_name,
            self.emitter.file_extension()
        ));
        path
    }
}

fn build_source_file(
    package_name: &str,
    file_name: &str,
    records: &[FlagRecord],
) -> Result<SourceFile, CodegenError> {
    let mut seen: HashMap<String, String> = HashMap::new();
    let mut constants = Vec::with_capacity(records.len());

    for record in records {
        let identifier = text::normalize(&record.name)?;
        if let Some(previous) = seen.insert(identifier.clone(), record.name.clone()) {
            return Err(CodegenError::Render(format!(
                "flags {:?} and {:?} both normalize to {}",
                previous, record.name, identifier
            )));
        }

        constants.push(ConstantDecl {
            identifier,
            value: record.name.clone(),
            doc: text::format_description(record.description.as_deref()),
        });
    }

    Ok(SourceFile {
        package: package_name.to_string(),
        container: file_name.to_string(),
        constants,
    })
}

pub struct GeneratorBuilder {
    base_url: String,
    auth_token: String,
    package_name: String,
    file_name: String,
    output_dir: PathBuf,
    emitter: Box<dyn Emit>,
}

impl GeneratorBuilder {
    fn new() -> Self {
        Self {
            base_url: String::new(),
            auth_token: String::new(),
            package_name: String::new(),
            file_name: "Flags".to_string(),
            output_dir: PathBuf::from("src/generated"),
            emitter: Box::new(RustEmitter),
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    pub fn with_auth_token(mut self, auth_token: &str) -> Self {
        self.auth_token = auth_token.to_string();
        self
    }

    /// Dotted package name; each segment becomes a directory under the
    /// output root. Empty means the file lands directly in the output root.
    pub fn with_package_name(mut self, package_name: &str) -> Self {
        self.package_name = package_name.to_string();
        self
    }

    /// Base name for both the container type and the output file.
    pub fn with_file_name(mut self, file_name: &str) -> Self {
        self.file_name = file_name.to_string();
        self
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn with_emitter(mut self, emitter: Box<dyn Emit>) -> Self {
        self.emitter = emitter;
        self
    }

    pub fn build(self) -> Generator {
        Generator {
            config: GeneratorConfig {
                base_url: self.base_url,
                auth_token: self.auth_token,
                package_name: self.package_name,
                file_name: self.file_name,
                output_dir: self.output_dir,
            },
            fetcher: FlagFetcher::new(),
            emitter: self.emitter,
        }
    }
}
