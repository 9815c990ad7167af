use crate::application::dto::GenerationRequest;
use crate::ports::outbound::ProjectPatcher;
use crate::project_generation::domain::MavenCoordinate;
use crate::project_generation::services::ServletInitializerPatch;
use crate::shared::Result;
use std::path::Path;

const SERVER_PORT_KEY: &str = "server.port";
const STATIC_DIR: &str = "static";

/// One line per applied edit, for user feedback
pub type AppliedEdits = Vec<String>;

/// ProjectPostProcessor applies the optional edits to a freshly
/// materialized project.
///
/// Steps are independent and run in a fixed order: server port, then
/// static content (resource directory, servlet initializer, web starter).
/// A failing step stops the remaining ones; earlier edits stay on disk.
pub struct ProjectPostProcessor<'a, PP: ProjectPatcher> {
    patcher: &'a PP,
}

impl<'a, PP: ProjectPatcher> ProjectPostProcessor<'a, PP> {
    pub fn new(patcher: &'a PP) -> Self {
        Self { patcher }
    }

    pub fn patch(&self, project_dir: &Path, request: &GenerationRequest) -> Result<AppliedEdits> {
        let mut edits = AppliedEdits::new();

        if let Some(port) = request.port_override() {
            let path =
                self.patcher
                    .set_application_property(project_dir, SERVER_PORT_KEY, &port.to_string())?;
            edits.push(format!("Set {}={} in {}", SERVER_PORT_KEY, port, path.display()));
        }

        if request.create_static_content() {
            self.add_static_content(project_dir, request, &mut edits)?;
        }

        Ok(edits)
    }

    fn add_static_content(
        &self,
        project_dir: &Path,
        request: &GenerationRequest,
        edits: &mut AppliedEdits,
    ) -> Result<()> {
        let (dir, created) = self.patcher.ensure_resource_directory(project_dir, STATIC_DIR)?;
        if created {
            edits.push(format!("Created {}", dir.display()));
        }

        let patch = ServletInitializerPatch::for_boot_version(request.spring_boot_version());
        let (class_file, changed) = self.patcher.patch_application_class(project_dir, &patch)?;
        if changed {
            edits.push(format!(
                "Made {} a SpringBootServletInitializer",
                class_file.display()
            ));
        }

        let web = MavenCoordinate::spring_boot_starter_web();
        if self.patcher.ensure_dependency(project_dir, &web)? {
            edits.push(format!("Added {} to pom.xml", web));
        }

        Ok(())
    }
}
