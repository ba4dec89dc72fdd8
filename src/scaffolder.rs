//! Transactional project scaffolding.
//!
//! Applies the configured filesystem mutations in a fixed order: license
//! materialization, repository initialization, source and binary directory
//! creation. Every successful step is recorded in an effect journal; when a
//! later step fails, recorded effects are reversed in reverse order so the
//! working directory is left as it was found. Artifacts that already
//! existed are never removed.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::Command;

use log::{debug, info, warn};

use crate::constants::LICENSE_FILE;
use crate::error::{Error, Result};
use crate::license::render_license;
use crate::store::{ConfigSet, Domain};

/// One reversible filesystem mutation performed by the scaffolder.
#[derive(Debug)]
enum Effect {
    LicenseWritten(PathBuf),
    RepoInitialized(PathBuf),
    DirCreated(PathBuf),
}

/// Drives one scaffolding run against a validated configuration.
#[derive(Debug)]
pub struct Scaffolder {
    configs: ConfigSet,
    language: Domain,
    project_dir: PathBuf,
    /// Directory holding the bundled default license template, normally the
    /// directory the configuration file lives in.
    template_dir: Option<PathBuf>,
    name_override: Option<String>,
    journal: Vec<Effect>,
}

impl Scaffolder {
    pub fn new(
        configs: ConfigSet,
        language: Domain,
        project_dir: PathBuf,
        template_dir: Option<PathBuf>,
        name_override: Option<String>,
    ) -> Self {
        Self {
            configs,
            language,
            project_dir,
            template_dir,
            name_override,
            journal: Vec::new(),
        }
    }

    /// Runs all configured steps. On failure every recorded effect is
    /// reversed before the error is returned.
    pub fn run(mut self) -> Result<()> {
        match self.apply() {
            Ok(()) => Ok(()),
            Err(err) => {
                self.unwind();
                Err(err)
            }
        }
    }

    fn apply(&mut self) -> Result<()> {
        self.write_license()?;
        self.init_repository()?;
        self.create_configured_dir("src")?;
        self.create_configured_dir("bin")?;
        Ok(())
    }

    fn write_license(&mut self) -> Result<()> {
        let core = self.configs.store(Domain::Core);

        let template = match core.get("license") {
            Some(path) => Some(PathBuf::from(path)),
            None => self
                .template_dir
                .as_ref()
                .map(|dir| dir.join(LICENSE_FILE))
                .filter(|path| path.is_file()),
        };
        let Some(template) = template else {
            debug!("no license template configured or bundled, skipping");
            return Ok(());
        };

        let name = self
            .name_override
            .as_deref()
            .or_else(|| core.get("name"))
            .ok_or_else(|| {
                Error::ScaffoldError(
                    "no project name available for license substitution".to_string(),
                )
            })?
            .to_string();

        let dest = self.project_dir.join(LICENSE_FILE);
        render_license(&template, &dest, &name)?;
        info!("wrote {}", dest.display());
        self.journal.push(Effect::LicenseWritten(dest));
        Ok(())
    }

    fn init_repository(&mut self) -> Result<()> {
        if self.configs.store(Domain::Core).get("gitrepo") != Some("true") {
            return Ok(());
        }

        let git_dir = self.project_dir.join(".git");
        if git_dir.is_dir() {
            warn!("git repository already initialized");
            return Ok(());
        }

        let status = Command::new("git")
            .arg("init")
            .current_dir(&self.project_dir)
            .status()
            .map_err(|err| {
                Error::ScaffoldError(format!("could not run `git init`: {}", err))
            })?;
        if !status.success() {
            return Err(Error::ScaffoldError(format!(
                "`git init` exited with {}",
                status
            )));
        }

        self.journal.push(Effect::RepoInitialized(git_dir));
        Ok(())
    }

    fn create_configured_dir(&mut self, key: &str) -> Result<()> {
        let Some(dir) = self.configs.store(self.language).get(key) else {
            return Ok(());
        };

        let path = self.project_dir.join(dir);
        match fs::create_dir(&path) {
            Ok(()) => {
                info!("created {}", path.display());
                self.journal.push(Effect::DirCreated(path));
                Ok(())
            }
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
                warn!("{} directory already exists", dir);
                Ok(())
            }
            Err(err) => Err(Error::ScaffoldError(format!(
                "could not create {} directory: {}",
                dir, err
            ))),
        }
    }

    /// Reverses recorded effects in the reverse order they were recorded.
    fn unwind(&mut self) {
        while let Some(effect) = self.journal.pop() {
            let result = match &effect {
                Effect::LicenseWritten(path) => fs::remove_file(path),
                Effect::RepoInitialized(path) | Effect::DirCreated(path) => {
                    fs::remove_dir_all(path)
                }
            };
            match result {
                Ok(()) => debug!("reversed {:?}", effect),
                Err(err) => warn!("could not reverse {:?}: {}", effect, err),
            }
        }
    }
}
