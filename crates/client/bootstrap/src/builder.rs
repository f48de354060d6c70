//! Builds the content bundle, repositories and session used by front-ends.
use anyhow::{Context, Result};
use game_content::ContentFactory;
use runtime::{ContentOracles, FileCharacterRepository, FileMissionRepository, Session};

use crate::config::ClientConfig;

/// Builder that assembles content, file repositories and a [`Session`].
pub struct SessionBuilder {
    config: ClientConfig,
    content: Option<ContentOracles>,
}

impl SessionBuilder {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            content: None,
        }
    }

    /// Use already loaded content instead of reading `config.data_dir`.
    pub fn content(mut self, content: ContentOracles) -> Self {
        self.content = Some(content);
        self
    }

    pub fn build(self) -> Result<SessionSetup> {
        let content = match self.content {
            Some(content) => content,
            None => {
                if !self.config.data_dir.exists() {
                    tracing::warn!(
                        "Content data directory not found: {} (set DONJON_DATA_DIR to override)",
                        self.config.data_dir.display()
                    );
                }
                ContentOracles::load(&ContentFactory::new(&self.config.data_dir))
            }
        };

        let characters_dir = self.config.characters_dir();
        let characters = FileCharacterRepository::new(&characters_dir).with_context(|| {
            format!(
                "Failed to open character directory {}",
                characters_dir.display()
            )
        })?;

        let missions = FileMissionRepository::open(&self.config.save_dir, content.missions.clone())
            .with_context(|| {
                format!(
                    "Failed to open mission progress in {}",
                    self.config.save_dir.display()
                )
            })?;

        tracing::info!("Save directory: {}", self.config.save_dir.display());

        let session = Session::new(
            content,
            Box::new(characters),
            Box::new(missions),
            self.config.seed,
        );

        Ok(SessionSetup {
            config: self.config,
            session,
        })
    }
}

pub struct SessionSetup {
    pub config: ClientConfig,
    pub session: Session,
}
