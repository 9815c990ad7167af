mod post_processor;
#[cfg(test)]
mod tests;

pub use post_processor::{AppliedEdits, ProjectPostProcessor};

use crate::application::dto::{GenerationRequest, GenerationResult};
use crate::ports::outbound::{
    ArchiveFetcher, CatalogRepository, ProgressReporter, ProjectMaterializer, ProjectPatcher,
};
use crate::project_generation::domain::{Catalog, CatalogSource, PipelineState};
use crate::project_generation::services::{ResolvedSelection, SelectionResolver};
use crate::shared::error::SetupError;
use crate::shared::Result;
use std::cell::RefCell;
use std::io::Read;

/// GenerateProjectUseCase - Core use case for project generation
///
/// Runs the pipeline Loader → Resolver → Fetcher → Materializer → Patcher,
/// strictly in sequence, using generic dependency injection for all
/// infrastructure dependencies.
///
/// # Type Parameters
/// * `CR` - CatalogRepository implementation
/// * `AF` - ArchiveFetcher implementation
/// * `PM` - ProjectMaterializer implementation
/// * `PP` - ProjectPatcher implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateProjectUseCase<CR, AF, PM, PP, PR> {
    catalog_repository: CR,
    archive_fetcher: AF,
    project_materializer: PM,
    project_patcher: PP,
    progress_reporter: PR,
    catalog_source: CatalogSource,
    state: RefCell<PipelineState>,
}

impl<CR, AF, PM, PP, PR> GenerateProjectUseCase<CR, AF, PM, PP, PR>
where
    CR: CatalogRepository,
    AF: ArchiveFetcher,
    PM: ProjectMaterializer,
    PP: ProjectPatcher,
    PR: ProgressReporter,
{
    /// Creates a new GenerateProjectUseCase with injected dependencies
    pub fn new(
        catalog_repository: CR,
        archive_fetcher: AF,
        project_materializer: PM,
        project_patcher: PP,
        progress_reporter: PR,
        catalog_source: CatalogSource,
    ) -> Self {
        Self {
            catalog_repository,
            archive_fetcher,
            project_materializer,
            project_patcher,
            progress_reporter,
            catalog_source,
            state: RefCell::new(PipelineState::Idle),
        }
    }

    /// State reached by the last run
    pub fn state(&self) -> PipelineState {
        self.state.borrow().clone()
    }

    /// Executes the project generation use case
    ///
    /// # Arguments
    /// * `request` - Validated generation request
    ///
    /// # Returns
    /// GenerationResult naming the created project
    ///
    /// # Errors
    /// The first failing stage ends the run; its `SetupError` is returned
    /// and the state moves to `Failed`. Nothing done before is undone.
    pub fn execute(&self, request: &GenerationRequest) -> Result<GenerationResult> {
        *self.state.borrow_mut() = PipelineState::Idle;

        match self.run(request) {
            Ok(result) => Ok(result),
            Err(e) => {
                let reason = format!("{:#}", e);
                let stage = self.state().label();
                *self.state.borrow_mut() = PipelineState::Failed(reason);
                self.progress_reporter
                    .report_error(&format!("❌ Project generation failed after stage: {}", stage));
                Err(e)
            }
        }
    }

    fn run(&self, request: &GenerationRequest) -> Result<GenerationResult> {
        // Step 1: Load the dependency catalog
        let catalog = self.load_catalog()?;
        self.advance(PipelineState::CatalogLoaded);

        // Step 2: Resolve selections against the catalog
        let resolved = self.resolve_selections(&catalog, request)?;
        self.advance(PipelineState::Resolved);

        // Step 3: Request the archive
        let query = request.to_starter_query(&resolved.joined);
        let fetched = self.archive_fetcher.fetch_archive(&query)?;
        self.advance(PipelineState::Fetched);

        // Step 4: Stream the archive into the target directory
        let mut reader = ProgressReader::new(
            fetched.reader,
            fetched.content_length.unwrap_or(0),
            &self.progress_reporter,
        );
        let target_directory = self
            .project_materializer
            .materialize(request.target_directory(), &mut reader, request.artifact_id())
            .map_err(|e| {
                Self::stage_error(e, |details| SetupError::MaterializationFailed {
                    path: request.target_directory().to_path_buf(),
                    details,
                })
            })?;
        self.advance(PipelineState::Materialized);

        // Step 5: Optional post-processing edits
        let edits = ProjectPostProcessor::new(&self.project_patcher)
            .patch(&target_directory, request)
            .map_err(|e| {
                Self::stage_error(e, |details| SetupError::PatchFailed {
                    path: target_directory.clone(),
                    details,
                })
            })?;
        for edit in &edits {
            self.progress_reporter.report(&format!("   ✏️  {}", edit));
        }
        self.advance(PipelineState::Patched);

        self.advance(PipelineState::Done);
        let result = GenerationResult::created(&request.project_name(), target_directory);
        self.progress_reporter.report_completion(&result.message);
        Ok(result)
    }

    fn load_catalog(&self) -> Result<Catalog> {
        self.progress_reporter.report(&format!(
            "📖 Loading dependency catalog from: {}",
            self.catalog_source
        ));

        let catalog = self
            .catalog_repository
            .load_catalog(&self.catalog_source)
            .map_err(|e| {
                Self::stage_error(e, |details| SetupError::CatalogUnavailable {
                    source_location: self.catalog_source.location().to_string(),
                    details,
                })
            })?;

        self.progress_reporter
            .report(&format!("✅ Catalog lists {} dependency(ies)", catalog.len()));
        Ok(catalog)
    }

    fn resolve_selections(
        &self,
        catalog: &Catalog,
        request: &GenerationRequest,
    ) -> Result<ResolvedSelection> {
        let resolved = SelectionResolver::resolve(catalog, request.selections())?;

        if resolved.joined.is_empty() {
            self.progress_reporter
                .report("ℹ️  No dependencies selected; generating a bare project");
        } else {
            self.progress_reporter
                .report(&format!("🔗 Selected dependencies: {}", resolved.joined));
        }
        Ok(resolved)
    }

    fn advance(&self, next: PipelineState) {
        log::debug!("Pipeline: {} -> {}", self.state().label(), next.label());
        self.progress_reporter
            .report(&format!("   ▸ Stage: {}", next.label()));
        *self.state.borrow_mut() = next;
    }

    /// Keeps typed failures; wraps anything else in the stage's error
    fn stage_error(
        error: anyhow::Error,
        wrap: impl FnOnce(String) -> SetupError,
    ) -> anyhow::Error {
        if error.downcast_ref::<SetupError>().is_some() {
            error
        } else {
            wrap(format!("{:#}", error)).into()
        }
    }
}

/// Reader forwarding transfer progress to a ProgressReporter
struct ProgressReader<'a, PR: ProgressReporter> {
    inner: Box<dyn Read>,
    total: u64,
    transferred: u64,
    reporter: &'a PR,
}

impl<'a, PR: ProgressReporter> ProgressReader<'a, PR> {
    fn new(inner: Box<dyn Read>, total: u64, reporter: &'a PR) -> Self {
        Self {
            inner,
            total,
            transferred: 0,
            reporter,
        }
    }
}

impl<PR: ProgressReporter> Read for ProgressReader<'_, PR> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let read = self.inner.read(buf)?;
        if read > 0 {
            self.transferred += read as u64;
            self.reporter
                .report_progress(self.transferred, self.total, Some("Downloading starter.zip"));
        }
        Ok(read)
    }
}

