use crate::config::AppConfig;
use crate::dataset::DatasetCache;
use crate::domain::places::Office;

/// Shared, read-only state handed to every request.
pub struct App {
    pub config: AppConfig,
    pub dataset: DatasetCache,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let dataset = DatasetCache::new(
            &config.dataset_uri,
            &config.dataset_format,
            Office::named(&config.office_name),
            config.fetch_timeout,
        );
        Self { config, dataset }
    }
}
