//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the generation workflow:
//! 1. Load the service description through the `Filesystem` port
//! 2. Derive names and emit every artifact (pure, see `crate::domain::emit`)
//! 3. Write the artifacts under `<output_root>/<service_name>`
//!
//! Writing overwrites existing files. The first failure aborts the run and
//! files already written stay on disk; there is no rollback.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{
        ArtifactSet, ConfigError, DerivedNames, DomainValidator as validator, EmitContext,
        GenerationOptions, ServiceConfig, emit_all,
    },
    error::{KitgenError, KitgenResult},
};

/// Fully emitted output, before anything touches the filesystem.
#[derive(Debug, Clone)]
pub struct GenerationPlan {
    /// Directory the artifacts are written under: `<output_root>/<service_name>`.
    pub root: PathBuf,
    pub config: ServiceConfig,
    pub names: DerivedNames,
    pub artifacts: ArtifactSet,
}

impl GenerationPlan {
    /// Target paths under [`root`](Self::root), in write order.
    pub fn target_paths(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.artifacts
            .iter()
            .map(|artifact| self.root.join(&artifact.path))
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }
}

/// What a completed run wrote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    pub root: PathBuf,
    pub written: Vec<PathBuf>,
}

/// Main scaffolding service.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    /// Create a new scaffold service writing through `filesystem`.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use kitgen_core::application::{ScaffoldService, ports::Filesystem};
    /// # fn build(filesystem: Box<dyn Filesystem>) {
    /// let service = ScaffoldService::new(filesystem);
    /// # }
    /// ```
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Load and parse a service description.
    #[instrument(skip_all, fields(input = %path.as_ref().display()))]
    pub fn load(&self, path: impl AsRef<Path>) -> KitgenResult<ServiceConfig> {
        let path = path.as_ref();
        let source = self
            .filesystem
            .read_to_string(path)
            .map_err(|e| match e {
                KitgenError::Application(ApplicationError::FilesystemError { reason, .. }) => {
                    ConfigError::Unreadable {
                        path: path.to_path_buf(),
                        reason,
                    }
                    .into()
                }
                other => other,
            })?;

        let config = ServiceConfig::parse(&source)?;
        info!(
            service = %config.service_name(),
            model = %config.model_name(),
            attributes = config.attributes().len(),
            "Loaded service description"
        );
        Ok(config)
    }

    /// Emit every artifact for `config` without writing anything.
    #[instrument(skip_all, fields(service = %config.service_name()))]
    pub fn plan(
        &self,
        config: ServiceConfig,
        options: &GenerationOptions,
        output_root: impl AsRef<Path>,
    ) -> KitgenResult<GenerationPlan> {
        validator::validate_config(&config)?;

        let names = DerivedNames::derive(&config);
        debug!(
            abbreviation = %names.abbreviation,
            lower_model = %names.lower_initial_model,
            snake_model = %names.snake_model,
            "Derived names"
        );

        let artifacts = emit_all(&EmitContext::new(&config, &names, options));
        validator::validate_artifacts(&artifacts)?;

        let root = output_root.as_ref().join(config.service_name());
        info!(root = %root.display(), artifacts = artifacts.len(), "Planned generation");

        Ok(GenerationPlan {
            root,
            config,
            names,
            artifacts,
        })
    }

    /// Write every artifact of `plan`.
    pub fn materialize(&self, plan: &GenerationPlan) -> KitgenResult<GenerationReport> {
        self.materialize_with(plan, |_| {})
    }

    /// Write every artifact of `plan`, calling `on_written` after each file.
    #[instrument(skip_all, fields(root = %plan.root.display()))]
    pub fn materialize_with(
        &self,
        plan: &GenerationPlan,
        mut on_written: impl FnMut(&Path),
    ) -> KitgenResult<GenerationReport> {
        if self.filesystem.exists(&plan.root) && !self.filesystem.is_dir(&plan.root) {
            return Err(ApplicationError::OutputNotADirectory {
                path: plan.root.clone(),
            }
            .into());
        }

        let mut written = Vec::with_capacity(plan.len());
        for artifact in &plan.artifacts {
            let target = plan.root.join(&artifact.path);
            if let Err(e) = self.write_artifact(&target, &artifact.content) {
                warn!(
                    path = %target.display(),
                    written = written.len(),
                    "Write failed; earlier files were left in place"
                );
                return Err(e);
            }

            debug!(path = %target.display(), bytes = artifact.size(), "Wrote artifact");
            on_written(&target);
            written.push(target);
        }

        info!(files = written.len(), "Generation completed");
        Ok(GenerationReport {
            root: plan.root.clone(),
            written,
        })
    }

    /// Load, plan and materialize in one go.
    pub fn generate(
        &self,
        input: impl AsRef<Path>,
        output_root: impl AsRef<Path>,
        options: &GenerationOptions,
    ) -> KitgenResult<GenerationReport> {
        let config = self.load(input)?;
        let plan = self.plan(config, options, output_root)?;
        self.materialize(&plan)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn write_artifact(&self, path: &Path, content: &str) -> KitgenResult<()> {
        if let Some(parent) = path.parent() {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.write_file(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockFilesystem;
    use crate::domain::IdentifierPolicy;
    use std::sync::{Arc, Mutex};

    const ORDER: &str = "\
ServiceName = order-service
ModelName = Order
Attributes = {
  Id = string
  Total = float64
}
";

    fn fs_error(path: &Path, reason: &str) -> KitgenError {
        ApplicationError::FilesystemError {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
        .into()
    }

    fn reading(source: &'static str) -> MockFilesystem {
        let mut fs = MockFilesystem::new();
        fs.expect_read_to_string()
            .returning(move |_| Ok(source.to_string()));
        fs
    }

    #[test]
    fn load_parses_through_the_port() {
        let service = ScaffoldService::new(Box::new(reading(ORDER)));
        let config = service.load("order.txt").unwrap();
        assert_eq!(config.service_name(), "order-service");
        assert_eq!(config.attributes().len(), 2);
    }

    #[test]
    fn load_maps_read_failures_to_unreadable() {
        let mut fs = MockFilesystem::new();
        fs.expect_read_to_string()
            .returning(|path| Err(fs_error(path, "No such file or directory")));
        let service = ScaffoldService::new(Box::new(fs));

        let err = service.load("missing.txt").unwrap_err();
        assert_eq!(
            err,
            KitgenError::Config(ConfigError::Unreadable {
                path: PathBuf::from("missing.txt"),
                reason: "No such file or directory".into(),
            })
        );
    }

    #[test]
    fn load_surfaces_parse_errors() {
        let service = ScaffoldService::new(Box::new(reading(
            "ServiceName = s\nModelName = M\nAttributes = {\nBadLine\n}\n",
        )));
        let err = service.load("bad.txt").unwrap_err();
        assert!(matches!(
            err,
            KitgenError::Config(ConfigError::MalformedLine { line_number: 4, .. })
        ));
    }

    #[test]
    fn load_rejects_names_that_escape_the_output_root() {
        let service = ScaffoldService::new(Box::new(reading(
            "ServiceName = /tmp/elsewhere\nModelName = Order\n",
        )));
        let err = service.load("abs.txt").unwrap_err();
        assert!(matches!(
            err,
            KitgenError::Config(ConfigError::InvalidServiceName { .. })
        ));

        let service = ScaffoldService::new(Box::new(reading(
            "ServiceName = shop\nModelName = ../Order\n",
        )));
        let err = service.load("model.txt").unwrap_err();
        assert!(err.is_input_error());
        assert_eq!(err.category(), crate::error::ErrorCategory::Validation);
    }

    #[test]
    fn plan_roots_the_tree_at_the_service_name() {
        let service = ScaffoldService::new(Box::new(MockFilesystem::new()));
        let config = ServiceConfig::parse(ORDER).unwrap();
        let plan = service
            .plan(config, &GenerationOptions::default(), "out")
            .unwrap();

        assert_eq!(plan.root, PathBuf::from("out/order-service"));
        assert_eq!(plan.len(), 11);
        assert_eq!(
            plan.target_paths().last(),
            Some(PathBuf::from("out/order-service/main.go"))
        );
    }

    #[test]
    fn plan_honours_options() {
        let service = ScaffoldService::new(Box::new(MockFilesystem::new()));
        let config = ServiceConfig::parse(ORDER).unwrap();
        let options = GenerationOptions::default()
            .with_identifier_policy(IdentifierPolicy::Exclude)
            .with_listen_port(3000);
        let plan = service.plan(config, &options, ".").unwrap();

        let main = plan.artifacts.find("main.go").unwrap();
        assert!(main.content.contains("\":3000\""));
        let contract = plan.artifacts.find("domain/service.go").unwrap();
        assert!(contract.content.contains("type CreateOrderParams struct {\n\tTotal float64\n}"));
    }

    #[test]
    fn materialize_writes_every_artifact_in_order() {
        let written = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&written);

        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_is_dir().return_const(false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().times(11).returning(move |path, _| {
            sink.lock().unwrap().push(path.to_path_buf());
            Ok(())
        });

        let service = ScaffoldService::new(Box::new(fs));
        let plan = service
            .plan(
                ServiceConfig::parse(ORDER).unwrap(),
                &GenerationOptions::default(),
                "out",
            )
            .unwrap();

        let mut reported = Vec::new();
        let report = service
            .materialize_with(&plan, |p| reported.push(p.to_path_buf()))
            .unwrap();

        let expected: Vec<PathBuf> = plan.target_paths().collect();
        assert_eq!(report.written, expected);
        assert_eq!(reported, expected);
        assert_eq!(*written.lock().unwrap(), expected);
        assert_eq!(report.root, PathBuf::from("out/order-service"));
    }

    #[test]
    fn materialize_creates_parent_directories() {
        let created = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&created);

        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_is_dir().return_const(false);
        fs.expect_create_dir_all().returning(move |p| {
            sink.lock().unwrap().push(p.to_path_buf());
            Ok(())
        });
        fs.expect_write_file().returning(|_, _| Ok(()));

        let service = ScaffoldService::new(Box::new(fs));
        let plan = service
            .plan(
                ServiceConfig::parse(ORDER).unwrap(),
                &GenerationOptions::default(),
                "out",
            )
            .unwrap();
        service.materialize(&plan).unwrap();

        let created = created.lock().unwrap();
        assert_eq!(created.len(), 11);
        assert_eq!(created[0], PathBuf::from("out/order-service/domain/entity"));
        assert_eq!(created[10], PathBuf::from("out/order-service"));
        assert_eq!(
            created
                .iter()
                .filter(|p| p.ends_with("repository/impl/postgresql"))
                .count(),
            2
        );
    }

    #[test]
    fn materialize_aborts_on_first_failure_without_rollback() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_is_dir().return_const(false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|path, _| {
            if path.ends_with("service/service.go") {
                Err(fs_error(path, "disk full"))
            } else {
                Ok(())
            }
        });

        let service = ScaffoldService::new(Box::new(fs));
        let plan = service
            .plan(
                ServiceConfig::parse(ORDER).unwrap(),
                &GenerationOptions::default(),
                "out",
            )
            .unwrap();

        let mut reported = Vec::new();
        let err = service
            .materialize_with(&plan, |p| reported.push(p.to_path_buf()))
            .unwrap_err();

        assert_eq!(err.category(), crate::error::ErrorCategory::Io);
        assert_eq!(
            reported,
            [
                PathBuf::from("out/order-service/domain/entity/order.go"),
                PathBuf::from("out/order-service/domain/service.go"),
            ]
        );
    }

    #[test]
    fn materialize_refuses_a_file_as_root() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_is_dir().return_const(false);
        fs.expect_write_file().never();

        let service = ScaffoldService::new(Box::new(fs));
        let plan = service
            .plan(
                ServiceConfig::parse(ORDER).unwrap(),
                &GenerationOptions::default(),
                "out",
            )
            .unwrap();

        assert!(matches!(
            service.materialize(&plan),
            Err(KitgenError::Application(
                ApplicationError::OutputNotADirectory { .. }
            ))
        ));
    }

    #[test]
    fn generate_runs_the_whole_pipeline() {
        let mut fs = reading(ORDER);
        fs.expect_exists().return_const(false);
        fs.expect_is_dir().return_const(false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file()
            .withf(|path, content| {
                !path.ends_with("domain/entity/order.go")
                    || content.contains("type Order struct {\n\tId    string\n\tTotal float64\n}")
            })
            .times(11)
            .returning(|_, _| Ok(()));

        let service = ScaffoldService::new(Box::new(fs));
        let report = service
            .generate("order.txt", "gen", &GenerationOptions::default())
            .unwrap();
        assert_eq!(report.root, PathBuf::from("gen/order-service"));
        assert_eq!(report.written.len(), 11);
    }
}
