use super::*;
use crate::ports::outbound::FetchedArchive;
use crate::project_generation::domain::{
    DependencyDescriptor, MavenCoordinate, Selection, StarterQuery,
};
use crate::project_generation::services::ServletInitializerPatch;
use std::io::Cursor;
use std::path::{Path, PathBuf};

// Mock implementations for testing
struct MockCatalogRepository {
    fail: bool,
}

impl CatalogRepository for MockCatalogRepository {
    fn load_catalog(&self, source: &CatalogSource) -> Result<Catalog> {
        if self.fail {
            anyhow::bail!("connection refused: {}", source.location());
        }
        Ok(Catalog::new(vec![
            DependencyDescriptor::new("Web", "web", "Web", "Full-stack web development"),
            DependencyDescriptor::new("Ops", "actuator", "Actuator", "Production ready features"),
        ]))
    }
}

#[derive(Default)]
struct MockArchiveFetcher {
    queries: RefCell<Vec<StarterQuery>>,
    fail: bool,
}

impl ArchiveFetcher for MockArchiveFetcher {
    fn fetch_archive(&self, query: &StarterQuery) -> Result<FetchedArchive> {
        self.queries.borrow_mut().push(query.clone());
        if self.fail {
            return Err(SetupError::ArchiveFetchFailed {
                url: "http://localhost/starter.zip".to_string(),
                details: "HTTP status 500".to_string(),
            }
            .into());
        }
        let bytes = b"PK fake archive".to_vec();
        let len = bytes.len() as u64;
        Ok(FetchedArchive::new(Box::new(Cursor::new(bytes)), Some(len)))
    }
}

#[derive(Default)]
struct MockProjectMaterializer {
    received: RefCell<Vec<(PathBuf, usize, String)>>,
    fail: bool,
}

impl ProjectMaterializer for MockProjectMaterializer {
    fn materialize(
        &self,
        target_directory: &Path,
        archive: &mut dyn Read,
        project_name: &str,
    ) -> Result<PathBuf> {
        let mut bytes = Vec::new();
        archive.read_to_end(&mut bytes)?;
        self.received.borrow_mut().push((
            target_directory.to_path_buf(),
            bytes.len(),
            project_name.to_string(),
        ));
        if self.fail {
            anyhow::bail!("disk full");
        }
        Ok(target_directory.to_path_buf())
    }
}

#[derive(Default)]
struct MockProjectPatcher {
    calls: RefCell<Vec<String>>,
}

impl ProjectPatcher for MockProjectPatcher {
    fn set_application_property(
        &self,
        project_dir: &Path,
        key: &str,
        value: &str,
    ) -> Result<PathBuf> {
        self.calls.borrow_mut().push(format!("property {}={}", key, value));
        Ok(project_dir.join("src/main/resources/application.properties"))
    }

    fn ensure_resource_directory(&self, project_dir: &Path, name: &str) -> Result<(PathBuf, bool)> {
        self.calls.borrow_mut().push(format!("directory {}", name));
        Ok((project_dir.join("src/main/resources").join(name), true))
    }

    fn patch_application_class(
        &self,
        project_dir: &Path,
        patch: &ServletInitializerPatch,
    ) -> Result<(PathBuf, bool)> {
        self.calls
            .borrow_mut()
            .push(format!("class {}", patch.initializer_import()));
        Ok((project_dir.join("DemoApplication.java"), true))
    }

    fn ensure_dependency(&self, _project_dir: &Path, coordinate: &MavenCoordinate) -> Result<bool> {
        self.calls.borrow_mut().push(format!("dependency {}", coordinate));
        Ok(true)
    }
}

#[derive(Default)]
struct MockProgressReporter {
    messages: RefCell<Vec<String>>,
    progress: RefCell<Vec<(u64, u64)>>,
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }

    fn report_progress(&self, current: u64, total: u64, _message: Option<&str>) {
        self.progress.borrow_mut().push((current, total));
    }

    fn report_error(&self, message: &str) {
        self.messages.borrow_mut().push(format!("Error: {}", message));
    }

    fn report_completion(&self, message: &str) {
        self.messages
            .borrow_mut()
            .push(format!("Completed: {}", message));
    }
}

type TestUseCase = GenerateProjectUseCase<
    MockCatalogRepository,
    MockArchiveFetcher,
    MockProjectMaterializer,
    MockProjectPatcher,
    MockProgressReporter,
>;

fn use_case(
    catalog_fails: bool,
    fetch_fails: bool,
    materialize_fails: bool,
) -> TestUseCase {
    GenerateProjectUseCase::new(
        MockCatalogRepository {
            fail: catalog_fails,
        },
        MockArchiveFetcher {
            fail: fetch_fails,
            ..Default::default()
        },
        MockProjectMaterializer {
            fail: materialize_fails,
            ..Default::default()
        },
        MockProjectPatcher::default(),
        MockProgressReporter::default(),
        CatalogSource::Remote("https://start.spring.io".to_string()),
    )
}

fn request() -> crate::application::dto::GenerationRequestBuilder {
    GenerationRequest::builder("/work/demo", "1.5.4.RELEASE").selections(vec![
        Selection::Id("web".to_string()),
        Selection::Id("actuator".to_string()),
    ])
}

#[test]
fn test_execute_runs_every_stage() {
    let use_case = use_case(false, false, false);
    let request = request().build().unwrap();

    let result = use_case.execute(&request).unwrap();

    assert!(result.success);
    assert_eq!(
        result.message,
        "Created new Spring Boot project in directory: demo"
    );
    assert_eq!(result.target_directory, PathBuf::from("/work/demo"));
    assert_eq!(use_case.state(), PipelineState::Done);

    let queries = use_case.archive_fetcher.queries.borrow();
    assert_eq!(queries.len(), 1);
    assert_eq!(queries[0].dependencies, "web,actuator");
    assert_eq!(queries[0].boot_version, "1.5.4.RELEASE");
    assert_eq!(queries[0].artifact_id, "demo");

    let received = use_case.project_materializer.received.borrow();
    assert_eq!(
        received[0],
        (PathBuf::from("/work/demo"), 15, "demo".to_string())
    );

    // defaults: no port override, no static content
    assert!(use_case.project_patcher.calls.borrow().is_empty());
}

#[test]
fn test_execute_reports_transitions_and_progress() {
    let use_case = use_case(false, false, false);
    use_case.execute(&request().build().unwrap()).unwrap();

    let messages = use_case.progress_reporter.messages.borrow();
    for label in [
        "catalog loaded",
        "dependencies resolved",
        "archive fetched",
        "project materialized",
        "project patched",
        "done",
    ] {
        assert!(
            messages.iter().any(|m| m.ends_with(label)),
            "missing transition '{}' in {:?}",
            label,
            messages
        );
    }
    assert!(messages
        .iter()
        .any(|m| m.contains("Selected dependencies: web,actuator")));
    assert_eq!(
        messages.last().unwrap(),
        "Completed: Created new Spring Boot project in directory: demo"
    );

    let progress = use_case.progress_reporter.progress.borrow();
    assert_eq!(progress.last(), Some(&(15, 15)));
}

#[test]
fn test_execute_with_port_and_static_content() {
    let use_case = use_case(false, false, false);
    let request = request()
        .port(9090)
        .create_static_content(true)
        .build()
        .unwrap();

    use_case.execute(&request).unwrap();

    assert_eq!(
        *use_case.project_patcher.calls.borrow(),
        vec![
            "property server.port=9090".to_string(),
            "directory static".to_string(),
            "class org.springframework.boot.web.support.SpringBootServletInitializer".to_string(),
            "dependency org.springframework.boot:spring-boot-starter-web".to_string(),
        ]
    );
}

#[test]
fn test_execute_default_port_is_not_written() {
    let use_case = use_case(false, false, false);
    let request = request().port(8080).build().unwrap();

    use_case.execute(&request).unwrap();

    assert!(use_case.project_patcher.calls.borrow().is_empty());
}

#[test]
fn test_unknown_dependency_stops_before_fetch() {
    let use_case = use_case(false, false, false);
    let request = GenerationRequest::builder("/work/demo", "1.5.4.RELEASE")
        .selection(Selection::Id("web".to_string()))
        .selection(Selection::Id("no-such".to_string()))
        .build()
        .unwrap();

    let err = use_case.execute(&request).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<SetupError>(),
        Some(SetupError::UnknownDependency { id }) if id == "no-such"
    ));
    assert!(use_case.archive_fetcher.queries.borrow().is_empty());
    assert!(matches!(use_case.state(), PipelineState::Failed(_)));
}

#[test]
fn test_catalog_failure_is_catalog_unavailable() {
    let use_case = use_case(true, false, false);
    let err = use_case.execute(&request().build().unwrap()).unwrap_err();

    match err.downcast_ref::<SetupError>() {
        Some(SetupError::CatalogUnavailable {
            source_location, ..
        }) => assert_eq!(source_location, "https://start.spring.io"),
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(use_case
        .progress_reporter
        .messages
        .borrow()
        .iter()
        .any(|m| m.starts_with("Error:") && m.contains("idle")));
}

#[test]
fn test_fetch_failure_skips_materialization() {
    let use_case = use_case(false, true, false);
    let err = use_case.execute(&request().build().unwrap()).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<SetupError>(),
        Some(SetupError::ArchiveFetchFailed { .. })
    ));
    assert!(use_case.project_materializer.received.borrow().is_empty());
}

#[test]
fn test_materialization_failure_is_wrapped_and_skips_patching() {
    let use_case = use_case(false, false, true);
    let request = request().port(9090).build().unwrap();

    let err = use_case.execute(&request).unwrap_err();

    match err.downcast_ref::<SetupError>() {
        Some(SetupError::MaterializationFailed { path, details }) => {
            assert_eq!(path, &PathBuf::from("/work/demo"));
            assert!(details.contains("disk full"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(use_case.project_patcher.calls.borrow().is_empty());
    match use_case.state() {
        PipelineState::Failed(reason) => assert!(reason.contains("disk full")),
        other => panic!("unexpected state: {:?}", other),
    }
}

#[test]
fn test_empty_selection_generates_bare_project() {
    let use_case = use_case(false, false, false);
    let request = GenerationRequest::builder("/work/demo", "2.3.3.RELEASE")
        .build()
        .unwrap();

    use_case.execute(&request).unwrap();

    assert_eq!(use_case.archive_fetcher.queries.borrow()[0].dependencies, "");
}
