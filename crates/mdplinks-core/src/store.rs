//! Link engine
//!
//! The `Store` owns the link operations. It keeps no links in memory between
//! calls: every operation reads the full database, works on that snapshot and,
//! if it changed anything, writes the full database back.
//!
//! ## Usage
//!
//! ```ignore
//! let store = Store::new(config);
//!
//! store.add_link("http://x.com", "news,tech", "")?;
//! store.update_link("http://x.com", "", "X Site")?;
//!
//! let exact = store.search_multitag("news,tech")?;
//! ```

use tracing::{info, warn};

use crate::config::Config;
use crate::error::{LinkError, LinkResult};
use crate::models::Link;
use crate::storage::JsonPersistence;
use crate::tags;

/// Link engine backed by a JSON database file
pub struct Store {
    persistence: JsonPersistence,
}

impl Store {
    /// Create a store for the database described by `config`
    pub fn new(config: Config) -> Self {
        Self {
            persistence: JsonPersistence::new(config),
        }
    }

    /// Create an empty database for `config` and return a store over it
    pub fn init(config: Config) -> LinkResult<Self> {
        let store = Self::new(config);
        store.persistence.init()?;
        info!("Created database at {:?}", store.persistence.path());
        Ok(store)
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        self.persistence.config()
    }

    /// Whether the database file exists
    pub fn is_initialized(&self) -> bool {
        self.persistence.exists()
    }

    // ==================== Mutations ====================

    /// Add a new link
    ///
    /// Tags are lowercased and validated before the database is touched.
    /// The link is appended even if another link already has the same URL.
    pub fn add_link(&self, url: &str, tags_csv: &str, title: &str) -> LinkResult<Link> {
        let tags = tags::parse_tags(tags_csv).inspect_err(|_| {
            warn!("Rejected tags {:?} for {}", tags_csv, url);
        })?;
        let link = Link::new(url, tags, title);

        let mut links = self.persistence.read_all()?;
        links.push(link.clone());
        self.save(&links, link)
            .inspect(|link| info!("Added link {}", link.url))
    }

    /// Update the tags and/or title of the first link with `url`
    ///
    /// An empty `tags_csv` keeps the current tags and an empty `title` keeps
    /// the current title.
    pub fn update_link(&self, url: &str, tags_csv: &str, title: &str) -> LinkResult<Link> {
        let mut links = self.persistence.read_all()?;

        let Some(index) = links.iter().position(|l| l.url == url) else {
            warn!("No link with URL {}", url);
            return Err(LinkError::NotFound {
                url: url.to_string(),
            });
        };

        if !tags_csv.is_empty() {
            links[index].tags = tags::parse_tags(tags_csv).inspect_err(|_| {
                warn!("Rejected tags {:?} for {}", tags_csv, url);
            })?;
        }
        if !title.is_empty() {
            links[index].title = title.to_string();
        }

        let updated = links[index].clone();
        self.save(&links, updated)
            .inspect(|link| info!("Updated link {}", link.url))
    }

    // ==================== Queries ====================

    /// Get all links in storage order
    pub fn get_all_links(&self) -> LinkResult<Vec<Link>> {
        Ok(self.persistence.read_all()?)
    }

    /// Get every link carrying `tag`, in storage order
    ///
    /// The query is lowercased to match how tags are stored.
    pub fn search_by_tag(&self, tag: &str) -> LinkResult<Vec<Link>> {
        let tag = tag.to_lowercase();
        let links = self.persistence.read_all()?;
        Ok(links.into_iter().filter(|l| l.has_tag(&tag)).collect())
    }

    /// Get every link whose tags equal the comma-separated query exactly
    ///
    /// Order does not matter but counts do: `a,b` matches `b,a` but not
    /// `a,b,c` or `a,a,b`.
    pub fn search_multitag(&self, tags_csv: &str) -> LinkResult<Vec<Link>> {
        let query = tags::split_query(tags_csv);
        let links = self.persistence.read_all()?;
        Ok(links
            .into_iter()
            .filter(|l| tags::same_tag_multiset(&l.tags, &query))
            .collect())
    }

    /// Write `links` and hand back `link`, or report it as unsaved
    fn save(&self, links: &[Link], link: Link) -> LinkResult<Link> {
        match self.persistence.write_all(links) {
            Ok(()) => Ok(link),
            Err(source) => Err(LinkError::NotSaved {
                link: Box::new(link),
                source,
            }),
        }
    }
}
