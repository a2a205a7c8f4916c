//! Configuration for the scraping pipeline.
//!
//! All the implicit constants of the pipeline live here as immutable
//! configuration data: the source URL list, the CSS selectors tying us to
//! the source site's markup, the enrichment batch settings and the wiki API
//! base. Passing them in (rather than scattering literals through the
//! logic) lets tests substitute fixture servers and fixture markup.

/// The structural markers shared by every dinosaur block on a source page.
///
/// Both the extractor and the source site's markup are tightly coupled to
/// these selectors; an alternate source only needs a different schema.
#[derive(Debug, Clone)]
pub struct PageSchema {
    /// Selector for the container element holding one dinosaur's block
    pub entry_container: String,

    /// Selector for the heading with the dinosaur's name, inside a container
    pub heading: String,

    /// Selector for the descendant text blocks carrying labeled fields
    pub text_block: String,
}

impl Default for PageSchema {
    fn default() -> Self {
        Self {
            entry_container: "div[id^='list-sc-item_']".to_string(),
            heading: "span.mntl-sc-block-heading__text".to_string(),
            text_block: "p.mntl-sc-block.mntl-sc-block-html".to_string(),
        }
    }
}

/// Configuration for the scrape-and-enrich pipeline
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    /// Source pages to scrape, in output concatenation order
    pub source_urls: Vec<String>,

    /// Structural schema of the source pages
    pub schema: PageSchema,

    /// Number of clade lookups run concurrently per batch
    pub batch_size: usize,

    /// Delay in milliseconds between enrichment batches (not after the last)
    pub batch_delay_ms: u64,

    /// User agent for outbound requests
    pub user_agent: String,

    /// Base URL of the MediaWiki query API
    pub wiki_api_base: String,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            source_urls: [
                "https://www.thoughtco.com/armored-dinosaur-pictures-and-profiles-4043317",
                "https://www.thoughtco.com/duck-billed-dinosaur-4043319",
                "https://www.thoughtco.com/ornithopod-dinosaur-pictures-and-profiles-4043320",
                "https://www.thoughtco.com/horned-frilled-dinosaur-4043321",
                "https://www.thoughtco.com/raptor-dinosaur-pictures-and-profiles-4047613",
                "https://www.thoughtco.com/feathered-dinosaur-pictures-and-profile-4049097",
                "https://www.thoughtco.com/sauropod-in-pictures-4047610",
                "https://www.thoughtco.com/therizinosaur-pictures-and-profiles-4043315",
                "https://www.thoughtco.com/prosauropod-dinosaur-pictures-and-profiles-4043316",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            schema: PageSchema::default(),
            batch_size: 50,
            batch_delay_ms: 5,
            user_agent: format!("dinodex/{}", env!("CARGO_PKG_VERSION")),
            wiki_api_base: "https://en.wikipedia.org/w/api.php".to_string(),
        }
    }
}

/// Builder for [`ScrapeConfig`]
#[derive(Debug, Default)]
pub struct ScrapeConfigBuilder {
    config: ScrapeConfig,
}

impl ScrapeConfigBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: ScrapeConfig::default(),
        }
    }

    /// Set the list of source pages to scrape
    pub fn source_urls(mut self, source_urls: Vec<String>) -> Self {
        self.config.source_urls = source_urls;
        self
    }

    /// Set the page schema
    pub fn schema(mut self, schema: PageSchema) -> Self {
        self.config.schema = schema;
        self
    }

    /// Set the enrichment batch size
    pub fn batch_size(mut self, batch_size: usize) -> Self {
        self.config.batch_size = batch_size;
        self
    }

    /// Set the delay between enrichment batches in milliseconds
    pub fn batch_delay_ms(mut self, batch_delay_ms: u64) -> Self {
        self.config.batch_delay_ms = batch_delay_ms;
        self
    }

    /// Set the user agent for outbound requests
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Set the MediaWiki query API base URL
    pub fn wiki_api_base(mut self, wiki_api_base: impl Into<String>) -> Self {
        self.config.wiki_api_base = wiki_api_base.into();
        self
    }

    /// Build the configuration
    pub fn build(self) -> ScrapeConfig {
        self.config
    }
}

impl ScrapeConfig {
    /// Create a new builder
    pub fn builder() -> ScrapeConfigBuilder {
        ScrapeConfigBuilder::new()
    }
}
