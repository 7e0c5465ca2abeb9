//! Link command handlers

use anyhow::Result;

use mdplinks_core::Store;

use crate::output::Output;

/// Save a new link
pub fn add(store: &Store, url: &str, tags: &str, title: &str, output: &Output) -> Result<()> {
    let link = store.add_link(url, tags, title)?;

    output.success(&format!("Added link: {}", link.url));
    output.print_link(&link);

    Ok(())
}

/// List all links
pub fn list(store: &Store, output: &Output) -> Result<()> {
    let links = store.get_all_links()?;
    output.print_links(&links);
    Ok(())
}

/// Change the tags and/or title of a link
pub fn update(store: &Store, url: &str, tags: &str, title: &str, output: &Output) -> Result<()> {
    if tags.is_empty() && title.is_empty() {
        output.message("Nothing to change: pass --tags and/or --title.");
        return Ok(());
    }

    let link = store.update_link(url, tags, title)?;

    output.success("Link updated");
    output.print_link(&link);

    Ok(())
}

/// List links carrying a tag
pub fn search(store: &Store, tag: &str, output: &Output) -> Result<()> {
    let links = store.search_by_tag(tag)?;
    output.print_links(&links);
    Ok(())
}

/// List links whose tags are exactly the given set
pub fn search_tags(store: &Store, tags: &str, output: &Output) -> Result<()> {
    let links = store.search_multitag(tags)?;
    output.print_links(&links);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;
    use mdplinks_core::{Config, ErrorCode, LinkError};
    use tempfile::TempDir;

    fn test_store(temp_dir: &TempDir) -> Store {
        Store::init(Config {
            data_dir: temp_dir.path().to_path_buf(),
            log_file: None,
        })
        .unwrap()
    }

    fn quiet() -> Output {
        Output::new(OutputFormat::Quiet)
    }

    #[test]
    fn test_add_then_search() {
        let temp_dir = TempDir::new().unwrap();
        let store = test_store(&temp_dir);

        add(&store, "http://x.com", "news,tech", "", &quiet()).unwrap();
        search(&store, "news", &quiet()).unwrap();
        search_tags(&store, "tech,news", &quiet()).unwrap();

        assert_eq!(store.search_multitag("tech,news").unwrap().len(), 1);
    }

    #[test]
    fn test_add_invalid_tags_surfaces_link_error() {
        let temp_dir = TempDir::new().unwrap();
        let store = test_store(&temp_dir);

        let err = add(&store, "http://x.com", "no spaces", "", &quiet()).unwrap_err();
        let link_err = err.downcast_ref::<LinkError>().unwrap();
        assert_eq!(link_err.code(), ErrorCode::TagError);
    }

    #[test]
    fn test_update_without_changes_is_noop() {
        let temp_dir = TempDir::new().unwrap();
        let store = test_store(&temp_dir);

        // No lookup happens, so an unknown URL is fine here
        update(&store, "http://missing.com", "", "", &quiet()).unwrap();
    }

    #[test]
    fn test_update_unknown_url() {
        let temp_dir = TempDir::new().unwrap();
        let store = test_store(&temp_dir);

        let err = update(&store, "http://missing.com", "", "Title", &quiet()).unwrap_err();
        let link_err = err.downcast_ref::<LinkError>().unwrap();
        assert_eq!(link_err.code(), ErrorCode::IdError);
    }
}
